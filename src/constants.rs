//! Centralized constants for the sum-reduction launch configuration
//!
//! This module contains all hardcoded constants used by consumers of the
//! crate. All new constants should be added here rather than scattered
//! throughout downstream code.

// ============================================================================
// SUM KERNEL LAUNCH CONSTANTS
// ============================================================================

/// Upper bound on threads allocated per block for the sum kernel
pub const THREADS_PER_BLOCK: usize = 1024;

/// Maximum number of elements combined per thread by the sum kernel.
///
/// The larger this value gets, the smaller the number of threads per block
/// could get for the sum kernel: effective threads per block is
/// `THREADS_PER_BLOCK / num_elements`. You don't want that number to be
/// less than [`MIN_SUM_BLOCK_THREADS`].
pub const MAX_ELEMENTS_PER_THREAD: usize = 32;

/// Floor on the sum kernel's effective threads per block
pub const MIN_SUM_BLOCK_THREADS: usize = 32;

// ============================================================================
// VECTOR-LENGTH SWEEP BOUNDS
// ============================================================================

/// Lower bound of the vector-length sweep
pub const MIN_VECTOR_LENGTH: usize = 8;

/// Upper bound of the vector-length sweep
pub const MAX_VECTOR_LENGTH: usize = 30;
