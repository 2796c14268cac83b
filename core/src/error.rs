//! Error types for schema decoding and parameter retrieval.
//!
//! [`SchemaError`] aborts construction: a schema with broken braces has no
//! valid parameter set. [`ParamError`] covers everything driven by user
//! input; those are accumulated on the store and surfaced through
//! `check()` / `print_errors()` instead of being returned to the caller.

use std::fmt;

use thiserror::Error;

/// Fatal schema decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A `{` appeared while a block was already open.
    #[error("nested '{{' at offset {offset} in keys string")]
    NestedBrace { offset: usize },
    /// A `}` appeared with no open block.
    #[error("unexpected '}}' at offset {offset} in keys string")]
    UnexpectedClose { offset: usize },
    /// The keys string ended inside the block opened at `offset`.
    #[error("block opened at offset {offset} is never closed")]
    UnclosedBlock { offset: usize },
    /// A block body has fewer than the three `|`-separated fields.
    #[error("block {{{block}}} has {found} field(s), expected KEYS|DEFAULT|HELP")]
    MissingFields { block: String, found: usize },
}

/// The parameter a retrieval error refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Looked up by one of its aliases.
    Name(String),
    /// Looked up by positional index.
    Index(usize),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Name(name) => write!(f, "'{name}'"),
            Target::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// Accumulated, non-fatal parameter errors.
///
/// The `Display` text of each variant is one line of the error log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A schema block declared no aliases; the block was dropped.
    #[error("Field KEYS could not be empty")]
    EmptyKeys { block: String },
    /// The resolved value is empty for a non-string type, or is `<none>`.
    #[error("Missing parameter {target}")]
    Missing { target: Target },
    /// The resolved value does not parse as the requested type.
    #[error("Parameter {target}: can not convert: [{value}] to [{type_name}]")]
    Conversion {
        target: Target,
        value: String,
        type_name: &'static str,
    },
    /// No declaration carries the requested alias.
    #[error("undeclared key '{0}' requested")]
    UndeclaredKey(String),
    /// No declaration owns the requested position.
    #[error("undeclared position {0} requested")]
    UndeclaredPosition(usize),
}
