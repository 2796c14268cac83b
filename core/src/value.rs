//! Typed conversion of resolved parameter values.
//!
//! [`FromParam`] is sealed: only the types listed below can be requested
//! from the parser, so asking for an unsupported type fails to compile
//! instead of failing at run time.
//!
//! | Type     | Name in messages       |
//! |----------|------------------------|
//! | `bool`   | `bool`                 |
//! | `i32`    | `int`                  |
//! | `u32`    | `unsigned int`         |
//! | `i64`    | `long long`            |
//! | `u64`    | `unsigned long long`   |
//! | `f32`    | `float`                |
//! | `f64`    | `double`               |
//! | `String` | `string`               |

use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
}

/// A type that a resolved parameter value can be converted into.
pub trait FromParam: sealed::Sealed + Default + Sized {
    /// Type name used in conversion error messages.
    const TYPE_NAME: &'static str;

    /// Whether an empty value is acceptable for this type.
    const ACCEPTS_EMPTY: bool = false;

    /// Parses `raw`, returning `None` if it is malformed for this type.
    fn from_param(raw: &str) -> Option<Self>;
}

impl sealed::Sealed for bool {}

impl FromParam for bool {
    const TYPE_NAME: &'static str = "bool";

    /// Reads the first whitespace-separated token and accepts `1`, `0`,
    /// `true` and `false`, ignoring ASCII case.
    fn from_param(raw: &str) -> Option<Self> {
        let token = raw.split_whitespace().next()?;
        if token == "1" || token.eq_ignore_ascii_case("true") {
            Some(true)
        } else if token == "0" || token.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl sealed::Sealed for String {}

impl FromParam for String {
    const TYPE_NAME: &'static str = "string";
    const ACCEPTS_EMPTY: bool = true;

    fn from_param(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

macro_rules! impl_whole_number {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FromParam for $ty {
                const TYPE_NAME: &'static str = $name;

                fn from_param(raw: &str) -> Option<Self> {
                    raw.trim().parse().ok()
                }
            }
        )*
    };
}

macro_rules! impl_decimal {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FromParam for $ty {
                const TYPE_NAME: &'static str = $name;

                fn from_param(raw: &str) -> Option<Self> {
                    parse_decimal(raw)
                }
            }
        )*
    };
}

impl_whole_number! {
    i32 => "int",
    u32 => "unsigned int",
    i64 => "long long",
    u64 => "unsigned long long",
}

impl_decimal! {
    f32 => "float",
    f64 => "double",
}

/// Parses a decimal or scientific-notation number.
///
/// `str::parse` also accepts `inf`, `infinity` and `nan`; those are not
/// numbers a user types on a command line and are rejected.
fn parse_decimal<T: FromStr>(raw: &str) -> Option<T> {
    let token = raw.trim();
    if token
        .chars()
        .any(|ch| ch.is_ascii_alphabetic() && !matches!(ch, 'e' | 'E'))
    {
        return None;
    }
    token.parse().ok()
}
