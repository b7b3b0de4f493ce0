//! Ordered containers backing every collection in the model
//!
//! - [`OrderedList`] keeps its elements in ascending order and rejects
//!   duplicates by value equality.
//! - [`FifoQueue`] is a growable circular buffer with strict FIFO semantics.

mod fifo_queue;
mod ordered_list;

use thiserror::Error;

pub use fifo_queue::FifoQueue;
pub use ordered_list::OrderedList;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Element already in list")]
    Duplicate,

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No such element in queue")]
    EmptyQueue,
}
