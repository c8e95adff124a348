//! String operations exposed by the service.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StringError {
    #[error("empty string")]
    EmptyInput,
}

/// Operations on strings.
pub trait StringService: Send + Sync + 'static {
    fn uppercase(&self, s: &str) -> Result<String, StringError>;

    /// Length of `s` in bytes.
    fn count(&self, s: &str) -> usize;

    /// `s` with every space removed.
    fn concat(&self, s: &str) -> Result<String, StringError>;
}

/// Stateless [`StringService`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStringService;

impl StringService for BasicStringService {
    fn uppercase(&self, s: &str) -> Result<String, StringError> {
        if s.is_empty() {
            return Err(StringError::EmptyInput);
        }
        Ok(s.to_uppercase())
    }

    fn count(&self, s: &str) -> usize {
        s.len()
    }

    fn concat(&self, s: &str) -> Result<String, StringError> {
        if s.is_empty() {
            return Err(StringError::EmptyInput);
        }
        Ok(s.replace(' ', ""))
    }
}
