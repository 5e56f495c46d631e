//! Property listing operations and module exports.

mod list_properties;
pub use list_properties::{configured_page_size, favorite_ids, list_properties};

mod filter_schema;
pub use filter_schema::{get_filter_schema, location_tree};

pub mod property_filter;
pub mod property_sort;
