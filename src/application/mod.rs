//! Application services layer.

pub mod catalog;

pub use catalog::CatalogService;
