//! Command-line front end for Gandi hosting virtual machines.
//!
//! Commands live in [`commands`] and only talk to the provider through the
//! traits in [`services`]; [`api`] implements those traits over HTTP.

pub mod api;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod output;
pub mod params;
pub mod services;
pub mod utils;

pub use context::Context;
pub use error::{Error, Result};
