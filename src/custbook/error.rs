use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustbookError {
    #[error("Customer with ID {0} not found.")]
    CustomerNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CustbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let err = CustbookError::CustomerNotFound(2);
        assert_eq!(err.to_string(), "Customer with ID 2 not found.");
    }
}
