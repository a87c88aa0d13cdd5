//! Typed field cells binding enumerations to stored integer columns.
//!
//! A record that persists an enumerated attribute stores a small integer id,
//! not the member itself. The cells in this crate own that raw stored value
//! and convert through the enumeration's public operations on access:
//!
//! - [`EnumField`]: a single `<name>_id` column
//! - [`EnumSetField`]: an id-list column for multi-valued attributes
//!
//! Storage itself stays with the record; the cells only hold and translate
//! the raw ids.

pub mod field;
pub mod multi;

pub use field::EnumField;
pub use multi::EnumSetField;
