// Atomic API modules
pub mod client;
pub mod datacenters;
pub mod images;
pub mod operations;
pub mod ssh_keys;
pub mod vms;

// Re-export commonly used items
pub use client::{set_verbose, ApiClient};
pub use datacenters::{load_datacenters, HttpDatacenters};
pub use images::{load_images, HttpImages};
pub use operations::wait_for_operations;
pub use vms::HttpIaas;
