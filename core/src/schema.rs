//! Decoding of the keys string into parameter declarations.
//!
//! A keys string is a run of `{KEYS|DEFAULT|HELP}` blocks:
//!
//! - `KEYS` is a space-separated alias list. A leading `@` on the first
//!   alias makes the parameter positional; positions are handed out in
//!   block order starting at 0.
//! - `DEFAULT` is kept verbatim; trimming happens at retrieval time.
//! - `HELP` is trimmed.

use tracing::debug;

use crate::error::{ParamError, SchemaError};
use crate::text::{split, split_blocks, trim};
use crate::types::ParamDecl;

/// Result of decoding a keys string.
///
/// `errors` holds the non-fatal problems (blocks without aliases) that
/// the store starts out with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedSchema {
    /// Declarations in block order.
    pub decls: Vec<ParamDecl>,
    /// Accumulated decoding errors.
    pub errors: Vec<ParamError>,
}

/// Decodes a keys string.
///
/// # Errors
///
/// Returns [`SchemaError`] for unbalanced or nested braces and for blocks
/// with fewer than three fields. A block whose alias list is empty is not
/// fatal: it is dropped and recorded as [`ParamError::EmptyKeys`].
///
/// # Examples
///
/// ```
/// use cmdline_keys_core::decode_schema;
///
/// let decoded = decode_schema(
///     "{help h ? || print this message}{@image1 |<none>| first image}{@repeat |1| number}",
/// )
/// .unwrap();
/// assert_eq!(decoded.decls.len(), 3);
/// assert_eq!(decoded.decls[0].position, None);
/// assert_eq!(decoded.decls[1].position, Some(0));
/// assert_eq!(decoded.decls[2].position, Some(1));
/// assert_eq!(decoded.decls[2].help_message, "number");
/// ```
pub fn decode_schema(keys: &str) -> Result<DecodedSchema, SchemaError> {
    let mut decoded = DecodedSchema::default();
    let mut next_position = 0usize;

    for block in split_blocks(keys)? {
        let fields = split(block, '|', true);
        if fields.len() < 3 {
            return Err(SchemaError::MissingFields {
                block: block.to_string(),
                found: fields.len(),
            });
        }

        let aliases: Vec<String> = split(fields[0], ' ', false)
            .into_iter()
            .map(String::from)
            .collect();
        if aliases.is_empty() {
            debug!(block, "Dropping block without keys");
            decoded.errors.push(ParamError::EmptyKeys {
                block: block.to_string(),
            });
            continue;
        }

        let mut decl = ParamDecl::new(aliases, fields[1], trim(fields[2]));
        if decl.is_positional_key() {
            decl.position = Some(next_position);
            next_position += 1;
        }

        debug!(
            keys = ?decl.keys,
            default = %decl.default_value,
            position = ?decl.position,
            "Decoded parameter"
        );
        decoded.decls.push(decl);
    }

    Ok(decoded)
}
