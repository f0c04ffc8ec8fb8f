pub mod error;
pub mod heap;

pub use error::HeapError;
pub use heap::{heap_sort, heap_sort_by, MaxHeap};
