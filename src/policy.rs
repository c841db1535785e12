//! Compile-time configuration tags for the rank/select index types.
//!
//! The index types store popcounts of either ones or zeros in their block
//! summaries, and the flat/wide select types pick the L2 sub-block of a hit
//! with one of several search strategies. Both choices are carried in the
//! type so the corresponding branches are resolved at monomorphization time
//! and never reach the query hot path.

mod sealed {
    pub trait Sealed {}
}

/// Which bit value the block summaries of an index count.
///
/// Storing counts of ones makes `rank1`/`select1` the direct queries;
/// storing counts of zeros makes `rank0`/`select0` direct. The opposite
/// query recovers its count as `block_capacity - stored_count` at block
/// granularity, so both polarities answer all four queries with identical
/// results.
pub trait OptimizedFor: sealed::Sealed {
    /// `true` if the summaries store counts of 1-bits.
    const STORE_ONES: bool;
}

/// Optimize for `rank1`/`select1` queries: summaries count ones.
#[derive(Clone, Copy, Debug)]
pub struct OneQueries;

/// Optimize for `rank0`/`select0` queries: summaries count zeros.
#[derive(Clone, Copy, Debug)]
pub struct ZeroQueries;

/// No preference; equivalent to [`OneQueries`] in all stored quantities.
#[derive(Clone, Copy, Debug)]
pub struct DontCare;

impl sealed::Sealed for OneQueries {}
impl sealed::Sealed for ZeroQueries {}
impl sealed::Sealed for DontCare {}

impl OptimizedFor for OneQueries {
    const STORE_ONES: bool = true;
}

impl OptimizedFor for ZeroQueries {
    const STORE_ONES: bool = false;
}

impl OptimizedFor for DontCare {
    const STORE_ONES: bool = true;
}

/// Discriminant for the in-block L2 search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum L2SearchKind {
    /// Scan the L2 entries front to back.
    Linear,
    /// Statically unrolled binary search over the L2 entries.
    Binary,
    /// SSSE3/SSE4.1 shuffle-and-compare over the packed 128-bit record.
    Intrinsic,
}

/// Strategy used by [`FlatRankSelect`](crate::FlatRankSelect) to locate the
/// L2 sub-block inside a 128-bit summary record.
pub trait FindL2Flat: sealed::Sealed {
    /// The selected strategy.
    const KIND: L2SearchKind;
}

/// Strategy used by [`WideRankSelect`](crate::WideRankSelect) to locate the
/// L2 block inside an L1 block.
pub trait FindL2Wide: sealed::Sealed {
    /// The selected strategy.
    const KIND: L2SearchKind;
}

/// Scan L2 entries front to back. At most 7 iterations for the flat
/// layout, up to 128 for the wide layout (bounded by the next L1 block).
#[derive(Clone, Copy, Debug)]
pub struct LinearSearch;

/// Binary search over the L2 entries. Three comparisons for the flat
/// layout; a power-of-two overlay search with prefetching for the wide
/// layout.
#[derive(Clone, Copy, Debug)]
pub struct BinarySearch;

/// Locate the flat L2 sub-block with SSSE3/SSE4.1 intrinsics.
///
/// Falls back to [`LinearSearch`] on targets without the required
/// instructions, so results are identical on every platform.
#[derive(Clone, Copy, Debug)]
pub struct IntrinsicSearch;

impl sealed::Sealed for LinearSearch {}
impl sealed::Sealed for BinarySearch {}
impl sealed::Sealed for IntrinsicSearch {}

impl FindL2Flat for LinearSearch {
    const KIND: L2SearchKind = L2SearchKind::Linear;
}

impl FindL2Flat for BinarySearch {
    const KIND: L2SearchKind = L2SearchKind::Binary;
}

impl FindL2Flat for IntrinsicSearch {
    const KIND: L2SearchKind = L2SearchKind::Intrinsic;
}

impl FindL2Wide for LinearSearch {
    const KIND: L2SearchKind = L2SearchKind::Linear;
}

impl FindL2Wide for BinarySearch {
    const KIND: L2SearchKind = L2SearchKind::Binary;
}
