//! Popcount implementations with compile-time switching.
//!
//! This module provides different popcount strategies that can be selected
//! via feature flags for benchmarking:
//!
//! - Default: Uses Rust's `count_ones()` which auto-vectorizes
//! - `simd`: Uses explicit SIMD intrinsics (NEON/AVX-512)
//! - `portable-popcount`: Uses portable bitwise algorithm (no intrinsics)
//!
//! Feature priority (when multiple enabled): portable-popcount > simd > default
//!
//! The index builders call [`popcount_words`] and [`popcount_zeros_words`]
//! on fixed 8-word (512-bit) slices, which the compiler unrolls.

/// Popcount a single u64 word.
#[inline(always)]
pub fn popcount_word(word: u64) -> u32 {
    // Priority: portable-popcount > simd > default
    #[cfg(feature = "portable-popcount")]
    {
        popcount_word_portable(word)
    }

    #[cfg(all(feature = "simd", not(feature = "portable-popcount")))]
    {
        // On both x86_64 and aarch64, count_ones compiles to efficient instructions
        word.count_ones()
    }

    #[cfg(not(any(feature = "portable-popcount", feature = "simd")))]
    {
        // Default: let Rust/LLVM choose the best implementation
        word.count_ones()
    }
}

/// Popcount multiple words, returning the total number of 1-bits.
#[inline]
pub fn popcount_words(words: &[u64]) -> u64 {
    // Priority: portable-popcount > simd > default
    #[cfg(feature = "portable-popcount")]
    {
        popcount_words_portable(words)
    }

    #[cfg(all(
        feature = "simd",
        target_arch = "aarch64",
        not(feature = "portable-popcount")
    ))]
    {
        popcount_words_neon(words)
    }

    #[cfg(all(
        feature = "simd",
        target_arch = "x86_64",
        not(feature = "portable-popcount")
    ))]
    {
        popcount_words_x86(words)
    }

    #[cfg(all(
        feature = "simd",
        not(any(target_arch = "aarch64", target_arch = "x86_64")),
        not(feature = "portable-popcount")
    ))]
    {
        popcount_words_default(words)
    }

    #[cfg(not(any(feature = "simd", feature = "portable-popcount")))]
    {
        // Default: simple loop, lets LLVM auto-vectorize
        popcount_words_default(words)
    }
}

/// Count the number of 0-bits in multiple words.
///
/// Equivalent to `words.len() * 64 - popcount_words(words)`, computed as a
/// popcount of the complemented words so the zero-optimized index builders
/// share the same accumulation shape as the one-optimized ones.
#[inline]
pub fn popcount_zeros_words(words: &[u64]) -> u64 {
    let mut total = 0u64;
    for &word in words {
        total += popcount_word(!word) as u64;
    }
    total
}

/// Default implementation using Rust's count_ones.
#[inline]
#[allow(dead_code)]
fn popcount_words_default(words: &[u64]) -> u64 {
    let mut total = 0u64;
    for &word in words {
        total += word.count_ones() as u64;
    }
    total
}

/// Portable bitwise popcount (no intrinsics).
///
/// Uses the classic parallel bit-counting algorithm.
#[inline(always)]
#[cfg(feature = "portable-popcount")]
pub fn popcount_word_portable(mut x: u64) -> u32 {
    // Parallel bit count using magic constants
    const M1: u64 = 0x5555_5555_5555_5555; // 01010101...
    const M2: u64 = 0x3333_3333_3333_3333; // 00110011...
    const M4: u64 = 0x0f0f_0f0f_0f0f_0f0f; // 00001111...
    const H01: u64 = 0x0101_0101_0101_0101; // sum helper

    x = x - ((x >> 1) & M1);
    x = (x & M2) + ((x >> 2) & M2);
    x = (x + (x >> 4)) & M4;
    ((x.wrapping_mul(H01)) >> 56) as u32
}

/// Portable popcount for word slice.
#[inline]
#[cfg(feature = "portable-popcount")]
fn popcount_words_portable(words: &[u64]) -> u64 {
    let mut total = 0u64;
    for &word in words {
        total += popcount_word_portable(word) as u64;
    }
    total
}

/// NEON-accelerated popcount for word slices.
#[cfg(all(
    feature = "simd",
    target_arch = "aarch64",
    not(feature = "portable-popcount")
))]
#[inline]
fn popcount_words_neon(words: &[u64]) -> u64 {
    if words.is_empty() {
        return 0;
    }

    let mut total = 0u64;
    let ptr = words.as_ptr() as *const u8;
    let byte_len = words.len() * 8;
    let mut offset = 0;

    // Process 64-byte chunks with NEON
    while offset + 64 <= byte_len {
        // SAFETY: We verified bounds above
        let count = unsafe { popcount_64bytes_neon(ptr.add(offset)) };
        total += count as u64;
        offset += 64;
    }

    // Handle remaining words
    for &word in &words[offset / 8..] {
        total += word.count_ones() as u64;
    }

    total
}

/// Popcount 64 bytes using NEON.
#[cfg(all(
    feature = "simd",
    target_arch = "aarch64",
    not(feature = "portable-popcount")
))]
#[inline]
unsafe fn popcount_64bytes_neon(ptr: *const u8) -> u32 {
    use core::arch::aarch64::*;

    unsafe {
        let v0 = vld1q_u8(ptr);
        let v1 = vld1q_u8(ptr.add(16));
        let v2 = vld1q_u8(ptr.add(32));
        let v3 = vld1q_u8(ptr.add(48));

        let c0 = vcntq_u8(v0);
        let c1 = vcntq_u8(v1);
        let c2 = vcntq_u8(v2);
        let c3 = vcntq_u8(v3);

        let sum01 = vaddq_u8(c0, c1);
        let sum23 = vaddq_u8(c2, c3);

        // Widen to u16 to avoid overflow
        let wide01 = vpaddlq_u8(sum01);
        let wide23 = vpaddlq_u8(sum23);
        let wide_sum = vaddq_u16(wide01, wide23);

        vaddvq_u16(wide_sum) as u32
    }
}

/// AVX-512 VPOPCNTDQ: 8x parallel u64 popcount.
///
/// Processes 8 u64 words (512 bits) at once using AVX-512 VPOPCNTDQ.
/// Available on Intel Ice Lake+ (2019) and AMD Zen 4+ (2022).
#[cfg(all(
    feature = "simd",
    target_arch = "x86_64",
    not(feature = "portable-popcount")
))]
#[inline]
#[target_feature(enable = "avx512f,avx512vpopcntdq")]
unsafe fn popcount_words_avx512vpopcntdq(words: &[u64]) -> u64 {
    use core::arch::x86_64::*;

    if words.is_empty() {
        return 0;
    }

    let mut total = 0u64;
    let mut offset = 0;

    // Process 8 u64 words (512 bits) at a time
    while offset + 8 <= words.len() {
        unsafe {
            let ptr = words.as_ptr().add(offset) as *const __m512i;
            let v = _mm512_loadu_si512(ptr);

            // Count bits in each of 8 u64 lanes in parallel
            let counts = _mm512_popcnt_epi64(v);

            // Sum all 8 counts into a single value
            total += _mm512_reduce_add_epi64(counts) as u64;
        }
        offset += 8;
    }

    // Handle remaining words (< 8)
    for &word in &words[offset..] {
        total += word.count_ones() as u64;
    }

    total
}

/// x86_64 popcount with runtime dispatch to best available implementation.
///
/// Dispatches to:
/// - AVX-512 VPOPCNTDQ (8x u64 parallel) if available
/// - Scalar POPCNT otherwise
#[cfg(all(
    feature = "simd",
    target_arch = "x86_64",
    not(feature = "portable-popcount")
))]
#[inline]
fn popcount_words_x86(words: &[u64]) -> u64 {
    // Runtime dispatch to AVX-512 VPOPCNTDQ if available (requires std)
    #[cfg(feature = "std")]
    {
        if is_x86_feature_detected!("avx512vpopcntdq") {
            return unsafe { popcount_words_avx512vpopcntdq(words) };
        }
    }

    // Fallback: scalar POPCNT (count_ones compiles to POPCNT on x86_64)
    let mut total = 0u64;
    for &word in words {
        total += word.count_ones() as u64;
    }
    total
}
