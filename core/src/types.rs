//! Parameter declarations decoded from a keys string.

use serde::{Deserialize, Serialize};

use crate::text::trim;

/// Reserved default value meaning "must resolve to a non-empty value".
///
/// An empty default is acceptable for string parameters; `<none>` is not
/// acceptable for any type.
pub const NONE_VALUE: &str = "<none>";

/// Prefix marking the primary alias of a positional parameter.
pub const POSITIONAL_PREFIX: char = '@';

/// One parameter described by a `{KEYS|DEFAULT|HELP}` block.
///
/// `default_value` starts as the schema default and is overwritten in place
/// when the argument list supplies a value.
///
/// # Examples
///
/// ```
/// use cmdline_keys_core::ParamDecl;
///
/// let decl = ParamDecl::new(vec!["N".into(), "count".into()], "100", "count of objects");
/// assert!(decl.matches("count"));
/// assert!(decl.is_present());
/// assert_eq!(decl.position, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    /// Aliases in declaration order. Never empty.
    pub keys: Vec<String>,
    /// Current raw value: the schema default, or the overlaid argument.
    pub default_value: String,
    /// Trimmed help text.
    pub help_message: String,
    /// Positional index, if the primary alias starts with `@`.
    pub position: Option<usize>,
}

impl ParamDecl {
    /// Creates a non-positional declaration.
    pub fn new(keys: Vec<String>, default_value: &str, help_message: &str) -> Self {
        Self {
            keys,
            default_value: default_value.to_string(),
            help_message: help_message.to_string(),
            position: None,
        }
    }

    /// Returns the first declared alias.
    pub fn primary_key(&self) -> &str {
        self.keys.first().map(String::as_str).unwrap_or_default()
    }

    /// Returns the primary alias with a leading `@` removed.
    pub fn bare_name(&self) -> &str {
        let key = self.primary_key();
        key.strip_prefix(POSITIONAL_PREFIX).unwrap_or(key)
    }

    /// Returns `true` if the primary alias marks this parameter as positional.
    pub fn is_positional_key(&self) -> bool {
        self.primary_key().starts_with(POSITIONAL_PREFIX)
    }

    /// Returns `true` if `name` is one of the aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.keys.iter().any(|key| key == name)
    }

    /// Returns the current value, trimmed of spaces when `trim_spaces` is set.
    pub fn resolved(&self, trim_spaces: bool) -> &str {
        if trim_spaces {
            trim(&self.default_value)
        } else {
            &self.default_value
        }
    }

    /// Returns `true` if the trimmed value is non-empty and not [`NONE_VALUE`].
    pub fn is_present(&self) -> bool {
        let value = self.resolved(true);
        !value.is_empty() && value != NONE_VALUE
    }

    /// Returns the aliases sorted alphabetically, for display.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_bare_name_strips_positional_prefix() {
        let decl = ParamDecl::new(keys(&["@image1"]), "", "");
        assert!(decl.is_positional_key());
        assert_eq!(decl.bare_name(), "image1");

        let named = ParamDecl::new(keys(&["path"]), ".", "");
        assert!(!named.is_positional_key());
        assert_eq!(named.bare_name(), "path");
    }

    #[test]
    fn test_is_present_rejects_empty_and_sentinel() {
        assert!(!ParamDecl::new(keys(&["t"]), "   ", "").is_present());
        assert!(!ParamDecl::new(keys(&["t"]), " <none> ", "").is_present());
        assert!(ParamDecl::new(keys(&["t"]), " -1.0 ", "").is_present());
    }

    #[test]
    fn test_resolved_honors_trim_flag() {
        let decl = ParamDecl::new(keys(&["s"]), "  str ", "");
        assert_eq!(decl.resolved(true), "str");
        assert_eq!(decl.resolved(false), "  str ");
    }

    #[test]
    fn test_sorted_keys_leaves_declaration_order() {
        let decl = ParamDecl::new(keys(&["help", "h", "usage", "?"]), "", "");
        assert_eq!(decl.sorted_keys(), vec!["?", "h", "help", "usage"]);
        assert_eq!(decl.primary_key(), "help");
    }

    #[test]
    fn test_serializes_position_as_null_for_named() {
        let decl = ParamDecl::new(keys(&["fps"]), "-1.0", "fps for output video");
        let json = serde_json::to_value(&decl).unwrap();
        assert_eq!(json["keys"][0], "fps");
        assert!(json["position"].is_null());
    }
}
