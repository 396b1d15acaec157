// URL handling utilities
pub mod query_string;
pub mod url_builder;

// JSON utilities
pub mod json_converter;

pub use json_converter::{field_value, value_to_short_string};
pub use query_string::build_query_string;
pub use url_builder::{absolute_url, resource_path};
