use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::Catalog;
use crate::{Error, Result};

/// Where the catalog comes from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog>;
}

/// Catalog stored as a JSON document on disk
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn load(&self) -> Result<Catalog> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::CatalogNotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let catalog: Catalog = serde_json::from_str(&content)?;
        tracing::info!(
            path = %self.path.display(),
            dishes = catalog.dishes.len(),
            brands = catalog.brands.len(),
            restaurants = catalog.restaurants.len(),
            foods = catalog.foods.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"dishes": [{"name": "Dosa"}], "restaurants": []}"#,
        )
        .unwrap();

        let catalog = FileCatalog::new(&path).load().await.unwrap();
        assert_eq!(catalog.dishes.len(), 1);
        assert_eq!(catalog.dishes[0].identity(), "Dosa");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = FileCatalog::new(&path).load().await.unwrap_err();
        assert!(matches!(err, Error::CatalogNotFound(_)));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = FileCatalog::new(&path).load().await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
