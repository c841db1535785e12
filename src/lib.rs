//! # Poprank
//!
//! Uncompressed bit vector with popcount-based rank/select indices.
//!
//! This crate provides [`BitVec`], a fixed-length bit sequence stored as
//! 64-bit words, together with three families of auxiliary index structures
//! that answer the classical succinct-data-structure queries in constant
//! (rank) or small-constant (select) time with ~3% space overhead:
//!
//! - [`ClassicRank`] / [`ClassicRankSelect`]: three-level (L0/L1/L2)
//!   directory in the style of Zhou, Andersen and Kaminsky.
//! - [`FlatRank`] / [`FlatRankSelect`]: removes the L0 array and packs a
//!   40-bit cumulative count plus seven 12-bit prefix sums into a single
//!   128-bit record per 4096-bit block. Supports bit vectors up to `2^40`
//!   bits.
//! - [`WideRank`] / [`WideRankSelect`]: two plain arrays (64-bit absolute
//!   counts per 65536-bit block, 16-bit relative prefix sums per 512-bit
//!   block), trading a slightly larger select constant for the simplest
//!   possible rank path.
//!
//! All index types are parameterized by a compile-time polarity tag
//! ([`OneQueries`], [`ZeroQueries`], or [`DontCare`]) that decides whether
//! the block summaries count ones or zeros, and the flat/wide select types
//! additionally take an in-block search strategy ([`LinearSearch`],
//! [`BinarySearch`], or — flat only — [`IntrinsicSearch`]).
//!
//! ## Quick Start
//!
//! ```
//! use poprank::{BitVec, DontCare, FlatRankSelect, Rank, Select};
//!
//! let mut bv = BitVec::new_filled(1024, false);
//! for i in (0..1024).step_by(3) {
//!     bv.set(i, true);
//! }
//!
//! let rs = FlatRankSelect::<DontCare>::new(&bv);
//! assert_eq!(rs.rank1(9), 3);
//! assert_eq!(rs.select1(4), 9);
//! ```
//!
//! ## Features
//!
//! Popcount strategies (mutually exclusive, for benchmarking):
//! - Default: Uses Rust's `count_ones()` which auto-vectorizes
//! - `simd` - Use explicit SIMD intrinsics (NEON on ARM, AVX-512 on x86)
//! - `portable-popcount` - Use portable bitwise algorithm (no intrinsics)
//!
//! Other features:
//! - `std` (default) - Runtime CPU feature detection for the SIMD paths
//! - `serde` - Serialization support for [`BitVec`]
//!
//! ## Ownership
//!
//! An index borrows the word array of the [`BitVec`] it was built for, so
//! the borrow checker enforces that the bit vector outlives the index and
//! stays unmodified while the index exists. A mutated bit vector requires a
//! fresh build; there is no rebuild path.

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

mod bitvec;
mod broadword;
mod classic;
mod flat;
mod l12;
mod policy;
mod popcount;
mod wide;

pub use bitvec::{BitVec, Iter};
pub use broadword::select_in_word;
pub use classic::{ClassicRank, ClassicRankSelect};
pub use flat::{FlatRank, FlatRankSelect};
pub use l12::{FlatL12Entry, L12Entry};
pub use policy::{
    BinarySearch, DontCare, FindL2Flat, FindL2Wide, IntrinsicSearch, L2SearchKind, LinearSearch,
    OneQueries, OptimizedFor, ZeroQueries,
};
pub use popcount::{popcount_word, popcount_words, popcount_zeros_words};
pub use wide::{WideRank, WideRankSelect};

/// Bits covered by an L2-block in every index variant.
pub const L2_BITS: usize = 512;

/// Sample rate of select position samples in every rank+select variant.
pub const SELECT_SAMPLE_RATE: usize = 8192;

/// Trait for rank queries on an immutable bit vector.
///
/// `rank1(i)` counts the 1-bits among the first `i` bits, i.e. in positions
/// `[0, i)`. All implementations in this crate answer in constant time.
pub trait Rank {
    /// Count 1-bits in positions `[0, i)`.
    ///
    /// `index` may be at most the length of the underlying bit vector;
    /// larger values are a precondition violation (checked with a debug
    /// assertion).
    fn rank1(&self, index: usize) -> usize;

    /// Count 0-bits in positions `[0, i)`.
    #[inline]
    fn rank0(&self, index: usize) -> usize {
        index - self.rank1(index)
    }

    /// Number of bytes used by this index.
    fn space_usage(&self) -> usize;
}

/// Trait for select queries on an immutable bit vector.
///
/// `select1(r)` returns the zero-based position of the `r`-th (1-based)
/// 1-bit. A rank exceeding the population count is a precondition
/// violation, except for the classic variant which returns the bit-vector
/// length as a sentinel.
pub trait Select: Rank {
    /// Position of the `rank`-th (1-based) 1-bit.
    fn select1(&self, rank: usize) -> usize;

    /// Position of the `rank`-th (1-based) 0-bit.
    fn select0(&self, rank: usize) -> usize;
}
