pub mod analyzer;
pub mod catalog;
pub mod catalog_filter;
pub mod recommendations;
pub mod soundtrack;
pub mod stats;

pub use analyzer::analyze;
pub use catalog::{load_catalog, Catalog};
pub use catalog_filter::select;
pub use recommendations::{rank, recommend};
