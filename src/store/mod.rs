//! Keyed configuration store

pub mod keyed;
pub mod record;

pub use keyed::Store;
pub use record::{field_union, into_record, overlay_fields, record_from_value, Record};
