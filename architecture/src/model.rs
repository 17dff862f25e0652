/// Marker of an aggregate root, the only kind of entity a repository hands out.
pub trait AggregateRoot: Send + Sync + 'static {}
