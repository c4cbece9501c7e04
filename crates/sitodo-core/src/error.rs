use thiserror::Error;

#[derive(Debug, Error)]
pub enum SitodoError {
    #[error("not initialized: run 'sitodo init'")]
    NotInitialized,

    #[error("TodoList(id={0}) does not exist")]
    TodoListNotFound(u64),

    #[error("store error: {0}")]
    Store(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SitodoError {
    /// True when the error addresses a todo list that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SitodoError::TodoListNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, SitodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_carries_id() {
        let err = SitodoError::TodoListNotFound(42);
        assert_eq!(err.to_string(), "TodoList(id=42) does not exist");
        assert!(err.is_not_found());
    }

    #[test]
    fn store_error_is_not_not_found() {
        let err = SitodoError::Store("disk full".into());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("disk full"));
    }
}
