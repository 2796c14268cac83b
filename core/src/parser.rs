//! The `CommandLineParser` facade.

use std::ffi::OsString;

use tracing::warn;

use crate::error::{ParamError, SchemaError};
use crate::report::{render_errors, render_message};
use crate::store::ParamStore;
use crate::types::ParamDecl;
use crate::value::FromParam;

/// Command line parser driven by a keys string.
///
/// Retrieval never aborts: a missing, malformed or undeclared parameter is
/// recorded and the accessor returns the type's default value. Call
/// [`check`](Self::check) once all values have been read.
///
/// Accessors that record errors take `&mut self`, so a parser shared across
/// threads has to be wrapped in a lock.
///
/// # Examples
///
/// ```
/// use cmdline_keys_core::CommandLineParser;
///
/// let keys = "{help h usage ? || print this message}\
///             {@image1 || image1 for compare}\
///             {fps | -1.0 | fps for output video}\
///             {N count |100| count of objects}\
///             {ts timestamp || use time stamp}";
/// let argv = ["./app", "-N=200", "1.png", "-ts"];
///
/// let mut parser = CommandLineParser::new(&argv, keys).unwrap();
/// parser.about("Application name v1.0.0");
///
/// assert!(!parser.has("help"));
/// assert_eq!(parser.get::<i32>("N"), 200);
/// assert_eq!(parser.get::<f64>("fps"), -1.0);
/// assert_eq!(parser.get_at::<String>(0), "1.png");
/// assert!(parser.has("timestamp"));
/// assert!(parser.check());
/// ```
#[derive(Debug, Clone)]
pub struct CommandLineParser {
    store: ParamStore,
}

impl CommandLineParser {
    /// Builds a parser from `argv` (argv[0] first) and a keys string.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the keys string has broken braces or a
    /// block with fewer than three fields.
    pub fn new<S: AsRef<str>>(argv: &[S], keys: &str) -> Result<Self, SchemaError> {
        Ok(Self {
            store: ParamStore::build(argv, keys)?,
        })
    }

    /// Builds a parser from the current process arguments.
    pub fn from_env(keys: &str) -> Result<Self, SchemaError> {
        Self::from_os_args(std::env::args_os(), keys)
    }

    /// Builds a parser from OS strings; invalid UTF-8 is replaced lossily.
    pub fn from_os_args<I>(argv: I, keys: &str) -> Result<Self, SchemaError>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let argv: Vec<String> = argv
            .into_iter()
            .map(|arg| arg.into().to_string_lossy().into_owned())
            .collect();
        Self::new(&argv, keys)
    }

    /// Sets the text printed before the parameter table.
    pub fn about(&mut self, message: impl Into<String>) {
        self.store.set_about(message);
    }

    /// Directory part of argv[0]; `""` if argv[0] has no separator.
    pub fn path_to_application(&self) -> &str {
        self.store.app_path()
    }

    /// File name part of argv[0].
    pub fn app_name(&self) -> &str {
        self.store.app_name()
    }

    /// Returns the parameter `name` as `T`, trimming spaces first.
    ///
    /// Positional parameters are reachable by their `@`-prefixed alias.
    pub fn get<T: FromParam>(&mut self, name: &str) -> T {
        self.get_with(name, true)
    }

    /// Returns the parameter `name` as `T`.
    pub fn get_with<T: FromParam>(&mut self, name: &str, trim_spaces: bool) -> T {
        let result = self.store.resolve_by_name(name, trim_spaces);
        self.settle(result)
    }

    /// Returns positional parameter `index` as `T`, trimming spaces first.
    pub fn get_at<T: FromParam>(&mut self, index: usize) -> T {
        self.get_at_with(index, true)
    }

    /// Returns positional parameter `index` as `T`.
    pub fn get_at_with<T: FromParam>(&mut self, index: usize, trim_spaces: bool) -> T {
        let result = self.store.resolve_by_index(index, trim_spaces);
        self.settle(result)
    }

    /// Like [`get`](Self::get), but returns the error instead of recording it.
    pub fn try_get<T: FromParam>(&self, name: &str) -> Result<T, ParamError> {
        self.store.resolve_by_name(name, true)
    }

    /// Like [`get_at`](Self::get_at), but returns the error instead of
    /// recording it.
    pub fn try_get_at<T: FromParam>(&self, index: usize) -> Result<T, ParamError> {
        self.store.resolve_by_index(index, true)
    }

    /// Returns `true` if `name` has a non-empty value other than `<none>`.
    ///
    /// An undeclared `name` logs a warning and returns `false` without
    /// marking the parser as failed.
    pub fn has(&self, name: &str) -> bool {
        match self.store.find_by_name(name) {
            Some(decl) => decl.is_present(),
            None => {
                warn!(key = name, "undeclared key requested");
                false
            }
        }
    }

    /// Returns `false` once any error has been recorded.
    pub fn check(&self) -> bool {
        !self.store.has_errors()
    }

    /// Recorded errors, oldest first.
    pub fn errors(&self) -> &[ParamError] {
        self.store.errors()
    }

    /// Declarations in display order, with supplied values applied.
    pub fn declarations(&self) -> &[ParamDecl] {
        self.store.decls()
    }

    /// Argument tokens that matched no declaration.
    pub fn ignored(&self) -> &[String] {
        self.store.ignored()
    }

    /// Returns the help message text.
    pub fn render_message(&self) -> String {
        render_message(&self.store)
    }

    /// Prints the help message to stdout.
    pub fn print_message(&self) {
        print!("{}", self.render_message());
    }

    /// Returns the error block text, or `""` when nothing was recorded.
    pub fn render_errors(&self) -> String {
        render_errors(&self.store)
    }

    /// Prints the recorded errors to stdout; prints nothing if there are none.
    pub fn print_errors(&self) {
        print!("{}", self.render_errors());
    }

    fn settle<T: FromParam>(&mut self, result: Result<T, ParamError>) -> T {
        result.unwrap_or_else(|error| {
            self.store.record(error);
            T::default()
        })
    }
}
