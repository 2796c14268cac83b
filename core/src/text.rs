//! Trimming and delimiter splitting used by the schema decoder.

use crate::error::SchemaError;

/// Removes leading and trailing ASCII spaces.
///
/// Only `' '` is stripped; tabs and newlines are kept. An all-space input
/// yields `""`.
///
/// # Examples
///
/// ```
/// use cmdline_keys_core::text::trim;
///
/// assert_eq!(trim("  100  "), "100");
/// assert_eq!(trim("\tx "), "\tx");
/// assert_eq!(trim("   "), "");
/// ```
pub fn trim(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Splits `s` on a single-character delimiter.
///
/// With `keep_empty == false`, runs of delimiters and a trailing delimiter
/// produce no empty segments. With `keep_empty == true` every segment is
/// emitted, including a trailing empty one.
///
/// # Examples
///
/// ```
/// use cmdline_keys_core::text::split;
///
/// assert_eq!(split("help  h ?", ' ', false), vec!["help", "h", "?"]);
/// assert_eq!(split("n||count", '|', true), vec!["n", "", "count"]);
/// assert_eq!(split("a|b|", '|', true), vec!["a", "b", ""]);
/// ```
pub fn split(s: &str, delimiter: char, keep_empty: bool) -> Vec<&str> {
    s.split(delimiter)
        .filter(|segment| keep_empty || !segment.is_empty())
        .collect()
}

/// Extracts the bodies of `{ ... }` blocks in order.
///
/// Text outside of blocks is skipped. Braces never nest: an opening brace
/// inside an open block, a closing brace with no open block, or an input
/// that ends inside a block is a [`SchemaError`].
///
/// # Examples
///
/// ```
/// use cmdline_keys_core::text::split_blocks;
///
/// let blocks = split_blocks("{n|1|count} {s||name}").unwrap();
/// assert_eq!(blocks, vec!["n|1|count", "s||name"]);
/// assert!(split_blocks("{a|b").is_err());
/// ```
pub fn split_blocks(schema: &str) -> Result<Vec<&str>, SchemaError> {
    let mut blocks = Vec::new();
    let mut open: Option<usize> = None;

    for (offset, ch) in schema.char_indices() {
        match (ch, open) {
            ('{', Some(_)) => return Err(SchemaError::NestedBrace { offset }),
            ('{', None) => open = Some(offset),
            ('}', Some(start)) => {
                blocks.push(&schema[start + 1..offset]);
                open = None;
            }
            ('}', None) => return Err(SchemaError::UnexpectedClose { offset }),
            _ => {}
        }
    }

    match open {
        Some(offset) => Err(SchemaError::UnclosedBlock { offset }),
        None => Ok(blocks),
    }
}
