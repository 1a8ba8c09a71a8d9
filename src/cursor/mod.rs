//! Cursor codec
//!
//! Encodes and decodes the opaque page-boundary tokens handed to callers.
//! A token is a pure value snapshot of the boundary document: the paginated
//! field's value, plus the `_id` tie-breaker when the paginated field is not
//! `_id` itself. The codec knows nothing about collections, filters, or
//! sort order.

mod codec;

pub use codec::{decode, encode};
