//! Token encode/decode implementation
//!
//! Tokens are the BSON bytes of a tiny document holding the boundary
//! values, encoded with URL-safe unpadded base64. BSON keeps every
//! supported scalar type (strings, numbers, datetimes, ObjectIds)
//! lossless, and distinct value pairs always produce distinct bytes.

use crate::error::{Error, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use mongodb::bson::{doc, Bson, Document};

/// Key holding the paginated field's boundary value
const VALUE_KEY: &str = "v";

/// Key holding the `_id` tie-breaker, present only when the paginated
/// field is not `_id` itself
const TIE_KEY: &str = "id";

/// Encode a boundary value pair into an opaque token
///
/// `tie` carries the boundary document's `_id` when the paginated field
/// is a non-unique field; pass `None` when paginating on `_id` itself.
pub fn encode(value: &Bson, tie: Option<&Bson>) -> Result<String> {
    let mut payload = doc! { VALUE_KEY: value.clone() };
    if let Some(tie) = tie {
        payload.insert(TIE_KEY, tie.clone());
    }

    let mut bytes = Vec::new();
    payload.to_writer(&mut bytes)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Decode a token back into its boundary value pair
///
/// Fails with [`Error::MalformedCursor`] on any token not produced by
/// [`encode`]: bad base64, bad BSON, or an unexpected payload shape.
pub fn decode(token: &str) -> Result<(Bson, Option<Bson>)> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| Error::malformed_cursor(format!("token is not valid base64: {e}")))?;

    let payload = Document::from_reader(&mut bytes.as_slice())
        .map_err(|e| Error::malformed_cursor(format!("token is not valid BSON: {e}")))?;

    let value = payload
        .get(VALUE_KEY)
        .cloned()
        .ok_or_else(|| Error::malformed_cursor("token is missing the boundary value"))?;
    let tie = payload.get(TIE_KEY).cloned();

    // Reject payloads carrying anything beyond the two known keys.
    let expected_len = if tie.is_some() { 2 } else { 1 };
    if payload.len() != expected_len {
        return Err(Error::malformed_cursor(
            "token carries unexpected fields",
        ));
    }

    Ok((value, tie))
}
