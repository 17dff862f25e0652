/// A field of a partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DbField<T> {
    /// Write this value.
    Set(T),
    /// Keep the stored value, this one is only used to locate the row.
    Unchanged(T),
    /// Leave the column out of the statement.
    #[default]
    NotSet,
}

impl<T> DbField<T> {
    /// The carried value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            DbField::Set(v) | DbField::Unchanged(v) => Some(v),
            DbField::NotSet => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, DbField::Set(_))
    }

    /// Convert the carried value, keeping the kind of field.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DbField<U> {
        match self {
            DbField::Set(v) => DbField::Set(f(v)),
            DbField::Unchanged(v) => DbField::Unchanged(f(v)),
            DbField::NotSet => DbField::NotSet,
        }
    }
}
