pub mod bookmarks;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod payment;
pub mod restaurant;

pub use config::{AppConfig, CarouselConfig, StoreConfig};
pub use error::{Error, Result};
