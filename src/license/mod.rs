//! License identification and aggregation.
//!
//! - [`identify`]: signature patterns over raw text, with an optional
//!   nearest-reference fallback built on [`edit_distance`] and [`corpus`].
//! - [`source`]: where a declaration came from: a file or a manifest field.
//! - [`collection`]: deduplicating summary over many sources.

pub mod collection;
pub mod corpus;
pub mod edit_distance;
pub mod identify;
pub mod source;
