use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `data[index] > data[index + 1]` in what should be ascending storage.
    #[error("element at index {index} is greater than its successor")]
    OutOfOrder { index: usize },
}
