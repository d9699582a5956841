use thiserror::Error;

/// Construction-time failures of the inline text store.
///
/// These are the only faults the crate reports through `std::result::Result`;
/// every other failure is carried as [`crate::Error`] data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("text of {length} characters exceeds the inline capacity of {capacity}")]
    CapacityExceeded { length: usize, capacity: usize },
}
