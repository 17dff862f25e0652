//! Abstractions over the storage gateway.
crate::make_re_export!(db_field, mutable_repository, read_only_repository);

/// A repository able to both read and write `T`.
///
/// Repositories handed out within one scope share a unit of work: every buffered mutation,
/// whichever repository received it, is committed by a single `save_changed`.
pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T>
where
    T: crate::model::AggregateRoot,
{
}
