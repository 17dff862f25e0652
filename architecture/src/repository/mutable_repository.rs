use async_trait::async_trait;

use crate::model::AggregateRoot;

/// Mutable repository.
///
/// `insert` and `delete_by_id` only buffer the change, nothing reaches the storage until
/// `save_changed` is called.
#[async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: AggregateRoot,
{
    /// Buffer an insertion.
    async fn insert(&self, entity: &T) -> anyhow::Result<()>;
    /// Buffer a deletion.
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()>;
    /// Commit buffered changes in one transaction.
    ///
    /// Returns `false` when there was nothing to commit.
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
