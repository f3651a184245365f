pub mod models;
pub mod repository;
pub mod service;

pub use models::{Car, Part, PartFilter};
pub use repository::CatalogRepository;
pub use service::{CatalogError, CatalogService};
