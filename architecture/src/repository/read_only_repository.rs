use async_trait::async_trait;

use crate::model::AggregateRoot;

/// Read only repository.
#[async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync
where
    T: AggregateRoot,
{
    /// Get the entity with `id`, `None` when it doesn't exist.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<T>>;
}
