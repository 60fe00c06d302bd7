use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    /// A variant could not describe itself for a reason other than the sink,
    /// e.g. a renderer whose device is gone.
    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    /// The output sink rejected a write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = BridgeError::OperationFailed("device lost".into());
        assert_eq!(err.to_string(), "Bridge operation failed: device lost");

        let err = BridgeError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(err.to_string().starts_with("IO error: "));
    }
}
