use thiserror::Error;

/// Errors surfaced from `Store::dispatch`
#[derive(Debug, Error)]
pub enum ControlError {
    /// Next/previous was requested for a value that is not in its collection.
    #[error("{item} is not in the collection")]
    NotFound { item: String },

    /// A navigation action pointed at a state entry that is not a list.
    #[error("state entry '{0}' is not a collection")]
    NotACollection(String),

    /// A navigation action named the same key for the item and its collection.
    #[error("'{0}' cannot be both the item and its collection")]
    SelfReferential(String),

    /// The catalog failed; the error is passed through uninterpreted.
    #[error(transparent)]
    Catalog(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ControlError>;
