//! Command line parsing driven by a single keys string.
//!
//! The keys string declares every parameter in `{KEYS|DEFAULT|HELP}`
//! blocks; the parser overlays the process arguments onto those defaults
//! and converts values on request. Problems with user input are collected
//! instead of aborting, so a tool can read every value and then report all
//! errors at once.
//!
//! - [`decode_schema`] turns the keys string into [`ParamDecl`]s.
//! - [`overlay`] classifies argument tokens and applies them.
//! - [`ParamStore`] holds the declarations and the error log.
//! - [`CommandLineParser`] is the typed front end: `get`, `get_at`, `has`,
//!   `check`, `print_message`, `print_errors`.
//!
//! # Keys syntax
//!
//! ```text
//! {help h usage ? |      | print this message   }
//! {@image1        |      | image1 for compare   }
//! {@image2        |<none>| image2 for compare   }
//! {N count        |100   | count of objects     }
//! ```
//!
//! A leading `@` makes a parameter positional. An empty default is fine for
//! strings; `<none>` demands a non-empty value for every type.
//!
//! # Example
//!
//! ```
//! use cmdline_keys_core::CommandLineParser;
//!
//! let keys = "{@image1||}{@image2|<none>|}{N count|100|}";
//! let mut parser = CommandLineParser::new(&["app", "--count=7", "a.png"], keys).unwrap();
//!
//! assert_eq!(parser.get::<i32>("N"), 7);
//! assert_eq!(parser.get_at::<String>(0), "a.png");
//! assert_eq!(parser.get_at::<String>(1), "");
//! assert!(!parser.check());
//! assert!(parser.render_errors().contains("Missing parameter #1"));
//! ```

mod error;
pub mod overlay;
mod parser;
pub mod report;
mod schema;
mod store;
pub mod text;
mod types;
mod value;

pub use error::{ParamError, SchemaError, Target};
pub use parser::CommandLineParser;
pub use schema::{DecodedSchema, decode_schema};
pub use store::ParamStore;
pub use types::{NONE_VALUE, POSITIONAL_PREFIX, ParamDecl};
pub use value::FromParam;
