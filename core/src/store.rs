//! Parameter store: declarations plus accumulated error state.

use tracing::debug;

use crate::error::{ParamError, SchemaError, Target};
use crate::overlay::{apply_args, sort_decls, split_app_path};
use crate::schema::decode_schema;
use crate::types::{NONE_VALUE, ParamDecl};
use crate::value::FromParam;

/// Every declaration of one parser instance plus its error log.
///
/// The error log is append-only; the store is in an error state exactly
/// when the log is non-empty.
#[derive(Debug, Clone, Default)]
pub struct ParamStore {
    decls: Vec<ParamDecl>,
    errors: Vec<ParamError>,
    ignored: Vec<String>,
    about: String,
    app_name: String,
    app_path: String,
}

impl ParamStore {
    /// Decodes `keys` and overlays `argv` (including argv[0]) onto it.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if `keys` is malformed. Everything else is
    /// recorded on the returned store.
    pub fn build<S: AsRef<str>>(argv: &[S], keys: &str) -> Result<Self, SchemaError> {
        let decoded = decode_schema(keys)?;
        let (app_path, app_name) = argv
            .first()
            .map(|argv0| split_app_path(argv0.as_ref()))
            .unwrap_or_default();

        let mut store = Self {
            decls: decoded.decls,
            errors: decoded.errors,
            ignored: Vec::new(),
            about: String::new(),
            app_name: app_name.to_string(),
            app_path: app_path.to_string(),
        };

        let args = argv.get(1..).unwrap_or_default();
        // Overlay and lookup must agree on which duplicate alias wins.
        sort_decls(&mut store.decls);
        store.ignored = apply_args(&mut store.decls, args);

        debug!(
            app = %store.app_name,
            params = store.decls.len(),
            errors = store.errors.len(),
            "Built parameter store"
        );
        Ok(store)
    }

    /// Declarations in display order.
    pub fn decls(&self) -> &[ParamDecl] {
        &self.decls
    }

    /// Recorded errors, oldest first.
    pub fn errors(&self) -> &[ParamError] {
        &self.errors
    }

    /// Argument tokens that matched no declaration.
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// Text printed before the parameter table.
    pub fn about(&self) -> &str {
        &self.about
    }

    /// Replaces the about text.
    pub fn set_about(&mut self, message: impl Into<String>) {
        self.about = message.into();
    }

    /// File name part of argv[0].
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Directory part of argv[0].
    pub fn app_path(&self) -> &str {
        &self.app_path
    }

    /// Returns `true` if any error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Appends an error to the log.
    pub fn record(&mut self, error: ParamError) {
        debug!(%error, "Recorded parameter error");
        self.errors.push(error);
    }

    /// The error log, one message per line.
    pub fn error_log(&self) -> String {
        self.errors
            .iter()
            .map(|error| format!("{error}\n"))
            .collect()
    }

    /// Finds the first declaration carrying alias `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&ParamDecl> {
        self.decls.iter().find(|decl| decl.matches(name))
    }

    /// Finds the declaration owning positional `index`.
    pub fn find_by_index(&self, index: usize) -> Option<&ParamDecl> {
        self.decls.iter().find(|decl| decl.position == Some(index))
    }

    /// Resolves and converts the parameter carrying alias `name`.
    ///
    /// Nothing is recorded; the caller decides what to do with the error.
    pub fn resolve_by_name<T: FromParam>(
        &self,
        name: &str,
        trim_spaces: bool,
    ) -> Result<T, ParamError> {
        let decl = self
            .find_by_name(name)
            .ok_or_else(|| ParamError::UndeclaredKey(name.to_string()))?;
        convert(decl, Target::Name(name.to_string()), trim_spaces)
    }

    /// Resolves and converts the parameter at positional `index`.
    pub fn resolve_by_index<T: FromParam>(
        &self,
        index: usize,
        trim_spaces: bool,
    ) -> Result<T, ParamError> {
        let decl = self
            .find_by_index(index)
            .ok_or(ParamError::UndeclaredPosition(index))?;
        convert(decl, Target::Index(index), trim_spaces)
    }
}

fn convert<T: FromParam>(
    decl: &ParamDecl,
    target: Target,
    trim_spaces: bool,
) -> Result<T, ParamError> {
    let value = decl.resolved(trim_spaces);

    // Neither supplied nor defaulted.
    if (value.is_empty() && !T::ACCEPTS_EMPTY) || value == NONE_VALUE {
        return Err(ParamError::Missing { target });
    }

    T::from_param(value).ok_or_else(|| ParamError::Conversion {
        target,
        value: value.to_string(),
        type_name: T::TYPE_NAME,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(argv: &[&str], keys: &str) -> ParamStore {
        ParamStore::build(argv, keys).unwrap()
    }

    #[test]
    fn test_build_splits_app_path() {
        let s = store(&["./bin/my-executable"], "");
        assert_eq!(s.app_path(), "./bin");
        assert_eq!(s.app_name(), "my-executable");
    }

    #[test]
    fn test_build_without_argv() {
        let empty: [&str; 0] = [];
        let s = ParamStore::build(&empty, "{a|1|}").unwrap();
        assert_eq!(s.app_name(), "");
        assert_eq!(s.decls().len(), 1);
    }

    #[test]
    fn test_build_carries_decoding_errors() {
        let s = store(&["app"], "{ |x|}{a||}");
        assert!(s.has_errors());
        assert_eq!(s.error_log(), "Field KEYS could not be empty\n");
    }

    #[test]
    fn test_build_propagates_schema_error() {
        assert!(ParamStore::build(&["app"], "}").is_err());
    }

    #[test]
    fn test_resolve_trims_by_default() {
        let s = store(&["app"], "{fps| -1.0 |}");
        assert_eq!(s.resolve_by_name::<f64>("fps", true), Ok(-1.0));
        assert_eq!(
            s.resolve_by_name::<String>("fps", false),
            Ok(" -1.0 ".to_string())
        );
    }

    #[test]
    fn test_resolve_empty_string_is_allowed() {
        let s = store(&["app"], "{@image||}");
        assert_eq!(s.resolve_by_index::<String>(0, true), Ok(String::new()));
        assert_eq!(
            s.resolve_by_index::<i32>(0, true),
            Err(ParamError::Missing {
                target: Target::Index(0)
            })
        );
    }

    #[test]
    fn test_resolve_sentinel_is_missing_for_strings() {
        let s = store(&["app"], "{@image2|<none>|}");
        assert_eq!(
            s.resolve_by_name::<String>("@image2", true),
            Err(ParamError::Missing {
                target: Target::Name("@image2".to_string())
            })
        );
    }

    #[test]
    fn test_resolve_undeclared() {
        let s = store(&["app"], "{a|1|}");
        assert_eq!(
            s.resolve_by_name::<i32>("b", true),
            Err(ParamError::UndeclaredKey("b".to_string()))
        );
        assert_eq!(
            s.resolve_by_index::<i32>(0, true),
            Err(ParamError::UndeclaredPosition(0))
        );
        assert!(!s.has_errors());
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut s = store(&["app"], "{a|1|}");
        s.record(ParamError::UndeclaredKey("x".to_string()));
        s.record(ParamError::UndeclaredPosition(2));
        assert_eq!(
            s.error_log(),
            "undeclared key 'x' requested\nundeclared position 2 requested\n"
        );
    }

    #[test]
    fn test_duplicate_alias_overlay_is_visible_to_lookup() {
        let s = store(&["app", "-k=9"], "{b k|1|}{a k|2|}");
        assert_eq!(s.resolve_by_name::<i32>("k", true), Ok(9));
        assert_eq!(s.find_by_name("b").unwrap().default_value, "1");
    }

    #[test]
    fn test_ignored_tokens_are_kept() {
        let s = store(&["app", "-zzz", "loose"], "{a|1|}");
        assert_eq!(s.ignored(), ["-zzz".to_string(), "loose".to_string()]);
        assert!(!s.has_errors());
    }
}
