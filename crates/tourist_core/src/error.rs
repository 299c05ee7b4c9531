use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid dataset json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The dataset does not flag exactly one start location. Reported, never retried.
    #[error("Exactly 1 location must be the start point (found {count}).")]
    Setup { count: usize },
    #[error("data integrity: {0}")]
    DataIntegrity(String),
    #[error("search aborted after {limit} expansions")]
    SearchLimit { limit: usize },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::DataIntegrity(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Setup problems are user-facing messages rather than failures.
    pub fn is_setup(&self) -> bool {
        matches!(self, Self::Setup { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn setup_error_names_the_start_count() {
        let err = Error::Setup { count: 2 };
        assert!(err.is_setup());
        assert_eq!(
            err.to_string(),
            "Exactly 1 location must be the start point (found 2)."
        );
    }

    #[test]
    fn helpers_wrap_messages() {
        assert_eq!(
            Error::data_integrity("path A -> Z references unknown location Z").to_string(),
            "data integrity: path A -> Z references unknown location Z"
        );
        assert!(!Error::invalid_input("x").is_setup());
        assert_eq!(Error::other("boom").to_string(), "boom");
    }
}
