//! Products API model library
//!
//! Data model, validation, serialization, and persistence operations for the
//! Product resource. The HTTP layer lives elsewhere; it calls into
//! [`ProductService`] and exchanges plain [`ProductRecord`] values.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod migrator;
pub mod services;

pub use dto::product::ProductRecord;
pub use entities::product::Category;
pub use errors::ServiceError;
pub use services::product_service::ProductService;
