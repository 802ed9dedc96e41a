use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::{Error, Result};

/// Result of toggling a bookmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkChange {
    Added,
    Removed,
}

/// Per-user restaurant bookmarks persisted as JSON
pub struct BookmarkStore {
    path: PathBuf,
}

type BookmarkMap = BTreeMap<String, Vec<String>>;

impl BookmarkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Bookmarked restaurant ids for a user, oldest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<String>> {
        let map = self.read().await?;
        Ok(map.get(user_id).cloned().unwrap_or_default())
    }

    pub async fn is_bookmarked(&self, user_id: &str, restaurant_id: &str) -> Result<bool> {
        let map = self.read().await?;
        Ok(map
            .get(user_id)
            .is_some_and(|ids| ids.iter().any(|id| id == restaurant_id)))
    }

    /// Add or remove a bookmark. A missing or blank token is rejected.
    pub async fn toggle(
        &self,
        user_id: &str,
        restaurant_id: &str,
        token: Option<&str>,
    ) -> Result<BookmarkChange> {
        if token.map_or(true, |t| t.trim().is_empty()) {
            return Err(Error::LoginRequired);
        }

        let mut map = self.read().await?;
        let ids = map.entry(user_id.to_string()).or_default();

        let change = if let Some(pos) = ids.iter().position(|id| id == restaurant_id) {
            ids.remove(pos);
            BookmarkChange::Removed
        } else {
            ids.push(restaurant_id.to_string());
            BookmarkChange::Added
        };
        if ids.is_empty() {
            map.remove(user_id);
        }

        self.write(&map).await?;
        tracing::info!(user_id, restaurant_id, ?change, "Bookmark toggled");
        Ok(change)
    }

    async fn read(&self) -> Result<BookmarkMap> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BookmarkMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, map: &BookmarkMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(map)?;

        // Replace the file in one step so a crash never leaves truncated JSON
        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
