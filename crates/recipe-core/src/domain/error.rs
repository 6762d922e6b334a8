//! Domain Errors
//!
//! Three failure families, each with its own recovery policy:
//! fetch failures surface to the user, validation and persistence
//! failures are recovered where they happen.

use thiserror::Error;

use super::shopping_list::ItemId;

/// Common result type for controller flows
pub type CoreResult<T> = Result<T, CoreError>;

/// Remote recipe data could not be obtained
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// User-supplied input was rejected; the operation is a no-op
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("search query is empty")]
    EmptyQuery,
    #[error("no search has been made yet")]
    NoSearch,
    #[error("no recipe is loaded")]
    NoRecipe,
    #[error("servings must be at least 1, got {0}")]
    InvalidServings(u32),
    #[error("count must be a finite number, got {0:?}")]
    InvalidCount(String),
    #[error("no shopping list item with id {0}")]
    UnknownItem(ItemId),
}

/// Stored data could not be read or written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("stored data under {key:?} is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("could not serialize {key:?}: {reason}")]
    Serialize { key: String, reason: String },
}

/// Umbrella error returned by controller flows
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl CoreError {
    /// Only fetch failures are shown to the user
    pub fn is_user_visible(&self) -> bool {
        matches!(self, CoreError::Fetch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_fetch_errors_are_user_visible() {
        assert!(CoreError::from(FetchError::Status(500)).is_user_visible());
        assert!(!CoreError::from(ValidationError::EmptyQuery).is_user_visible());
        assert!(!CoreError::from(PersistenceError::Unavailable("quota".into())).is_user_visible());
    }

    #[test]
    fn test_error_messages() {
        let err = CoreError::from(ValidationError::UnknownItem(ItemId::new(7)));
        assert_eq!(err.to_string(), "no shopping list item with id 7");
        assert_eq!(FetchError::Status(404).to_string(), "unexpected response status 404");
    }
}
