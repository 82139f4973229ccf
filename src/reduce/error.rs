//! Error type for naming operator sets

use std::fmt;
use std::io;
use std::sync::Arc;

/// Error returned when an operator set name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperatorSetError {
    /// The unrecognised name
    pub name: Arc<str>,
}

impl fmt::Display for ParseOperatorSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown operator set {:?}, expected one of: not_and_or, not_and, nand, implies_not, implies_false",
            self.name
        )
    }
}

impl std::error::Error for ParseOperatorSetError {}

impl From<ParseOperatorSetError> for io::Error {
    fn from(err: ParseOperatorSetError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
