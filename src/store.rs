use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Item, ItemPatch};

/// In-memory, ordered shopping list shared across handlers
///
/// Cloning the store clones the handle, not the items. Every read and write
/// goes through one lock, so lookup-then-mutate operations see a consistent
/// list. Names are not unique; lookups always address the first match.
#[derive(Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<Vec<Item>>>,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `items`, in order
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(items)),
        }
    }

    /// Snapshot of every item in insertion order
    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Append an item to the end of the list
    pub async fn insert(&self, item: Item) -> Item {
        let mut items = self.inner.write().await;
        items.push(item.clone());
        tracing::debug!("Inserted item '{}' ({} total)", item.name, items.len());
        item
    }

    /// First item whose name matches exactly
    pub async fn find(&self, name: &str) -> Option<Item> {
        self.inner
            .read()
            .await
            .iter()
            .find(|item| item.name == name)
            .cloned()
    }

    /// Update the first item named `name` with the patch built by `build_patch`
    ///
    /// The lookup happens first: when no item matches, `build_patch` is never
    /// called and `None` is returned. A failing `build_patch` leaves the item
    /// untouched. Otherwise returns the item as it is after the update.
    pub async fn update<F, E>(&self, name: &str, build_patch: F) -> Option<Result<Item, E>>
    where
        F: FnOnce() -> Result<ItemPatch, E>,
    {
        let mut items = self.inner.write().await;
        let item = items.iter_mut().find(|item| item.name == name)?;
        Some(build_patch().map(|patch| {
            item.apply(patch);
            item.clone()
        }))
    }

    /// Remove the first item named `name`, keeping the others in order
    pub async fn remove(&self, name: &str) -> Option<Item> {
        let mut items = self.inner.write().await;
        let index = items.iter().position(|item| item.name == name)?;
        Some(items.remove(index))
    }
}
