//! # sumcfg: launch configuration for a GPU sum-reduction kernel
//!
//! This crate holds the compile-time parameters that size the thread blocks
//! of a sum-reduction kernel and bound the vector-length sweep its driver
//! runs over. There is no kernel here, only the named constants that one
//! would launch with.
//!
//! ## Usage
//!
//! ```
//! use sumcfg::{THREADS_PER_BLOCK, MAX_ELEMENTS_PER_THREAD};
//!
//! let num_elements = MAX_ELEMENTS_PER_THREAD;
//! let block_threads = THREADS_PER_BLOCK / num_elements;
//! assert_eq!(block_threads, 32);
//! ```

pub mod constants;

// Re-export primary components
pub use constants::{
    MAX_ELEMENTS_PER_THREAD, MAX_VECTOR_LENGTH, MIN_SUM_BLOCK_THREADS, MIN_VECTOR_LENGTH,
    THREADS_PER_BLOCK,
};
