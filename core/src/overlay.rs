//! Overlaying supplied arguments onto declared parameters.
//!
//! Tokens longer than one character that start with `-` are named:
//! `-key=value`, `--key=value`, or a bare `-key` meaning `true`. Every
//! other token is positional and fills the next position in order.
//! Tokens that match nothing are ignored here; a missing parameter only
//! surfaces when it is retrieved.

use std::cmp::Ordering;

use tracing::debug;

use crate::types::ParamDecl;

/// Value assigned to a named token given without `=`.
pub const FLAG_VALUE: &str = "true";

/// A classified argument token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgToken<'a> {
    /// `-key`, `--key`, `-key=value` or `--key=value`.
    Named { key: &'a str, value: &'a str },
    /// Anything else, including a lone `-`.
    Positional(&'a str),
}

impl<'a> ArgToken<'a> {
    /// Classifies one argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdline_keys_core::overlay::ArgToken;
    ///
    /// assert_eq!(
    ///     ArgToken::classify("--count=20"),
    ///     ArgToken::Named { key: "count", value: "20" }
    /// );
    /// assert_eq!(
    ///     ArgToken::classify("-ts"),
    ///     ArgToken::Named { key: "ts", value: "true" }
    /// );
    /// assert_eq!(ArgToken::classify("1.png"), ArgToken::Positional("1.png"));
    /// assert_eq!(ArgToken::classify("-"), ArgToken::Positional("-"));
    /// ```
    pub fn classify(token: &'a str) -> Self {
        if token.len() <= 1 || !token.starts_with('-') {
            return ArgToken::Positional(token);
        }

        let body = if token.len() > 2 && token.as_bytes()[1] == b'-' {
            &token[2..]
        } else {
            &token[1..]
        };

        match body.split_once('=') {
            Some((key, value)) => ArgToken::Named { key, value },
            None => ArgToken::Named {
                key: body,
                value: FLAG_VALUE,
            },
        }
    }
}

/// Splits `argv[0]` into `(directory, file name)`.
///
/// Both `/` and `\` count as separators. Without a separator the directory
/// is empty.
///
/// # Examples
///
/// ```
/// use cmdline_keys_core::overlay::split_app_path;
///
/// assert_eq!(split_app_path("./bin/my-executable"), ("./bin", "my-executable"));
/// assert_eq!(split_app_path(r"C:\tools\app.exe"), (r"C:\tools", "app.exe"));
/// assert_eq!(split_app_path("app"), ("", "app"));
/// ```
pub fn split_app_path(argv0: &str) -> (&str, &str) {
    match argv0.rfind(['/', '\\']) {
        Some(idx) => (&argv0[..idx], &argv0[idx + 1..]),
        None => ("", argv0),
    }
}

/// Applies `args` (argv without argv[0]) to `decls`.
///
/// A named token overwrites the value of the first declaration carrying
/// the key; later tokens win over earlier ones. The n-th positional token
/// overwrites the declaration at position n. Returns the tokens that
/// matched no declaration.
pub fn apply_args<S: AsRef<str>>(decls: &mut [ParamDecl], args: &[S]) -> Vec<String> {
    let mut ignored = Vec::new();
    let mut next_position = 0usize;

    for arg in args {
        let token = arg.as_ref();
        let target = match ArgToken::classify(token) {
            ArgToken::Named { key, value } => decls
                .iter_mut()
                .find(|decl| decl.matches(key))
                .map(|decl| (decl, value)),
            ArgToken::Positional(value) => {
                let position = next_position;
                next_position += 1;
                decls
                    .iter_mut()
                    .find(|decl| decl.position == Some(position))
                    .map(|decl| (decl, value))
            }
        };

        match target {
            Some((decl, value)) => {
                debug!(key = decl.primary_key(), value, "Applied argument");
                decl.default_value = value.to_string();
            }
            None => {
                debug!(token, "Ignoring argument with no matching parameter");
                ignored.push(token.to_string());
            }
        }
    }

    ignored
}

/// Orders declarations for display and iteration.
///
/// Named parameters come first, then positional ones by index. Ties are
/// broken by primary alias. The sort is stable.
pub fn sort_decls(decls: &mut [ParamDecl]) {
    decls.sort_by(compare_decls);
}

fn compare_decls(a: &ParamDecl, b: &ParamDecl) -> Ordering {
    a.position
        .cmp(&b.position)
        .then_with(|| a.primary_key().cmp(b.primary_key()))
}
