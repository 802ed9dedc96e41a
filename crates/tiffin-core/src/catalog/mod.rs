mod models;
mod source;

pub use models::{Catalog, FoodItem, Restaurant};
pub use source::{CatalogSource, FileCatalog};
