//! Deterministic end-to-end scenarios for the rank/select index family.

use poprank::{
    BinarySearch, BitVec, ClassicRankSelect, DontCare, FlatRankSelect, IntrinsicSearch,
    LinearSearch, OneQueries, Rank, Select, WideRankSelect, ZeroQueries,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn all_zeros_million() {
    let n = 1_000_000;
    let bv = BitVec::new(n);
    let classic = ClassicRankSelect::<DontCare>::new(&bv);
    let flat = FlatRankSelect::<DontCare, LinearSearch>::new(&bv);
    let wide = WideRankSelect::<DontCare, LinearSearch>::new(&bv);

    for i in (0..=n).step_by(4999) {
        assert_eq!(classic.rank1(i), 0);
        assert_eq!(flat.rank1(i), 0);
        assert_eq!(wide.rank1(i), 0);
        assert_eq!(classic.rank0(i), i);
    }
    for rank in (1..=n).step_by(4999) {
        assert_eq!(classic.select0(rank), rank - 1, "classic select0({})", rank);
        assert_eq!(flat.select0(rank), rank - 1, "flat select0({})", rank);
        assert_eq!(wide.select0(rank), rank - 1, "wide select0({})", rank);
    }
    // Only the classic variant defines the out-of-population sentinel.
    assert_eq!(classic.select1(1), n);
}

#[test]
fn all_ones_million() {
    let n = 1_000_000;
    let bv = BitVec::new_filled(n, true);
    let classic = ClassicRankSelect::<DontCare>::new(&bv);
    let flat = FlatRankSelect::<DontCare, BinarySearch>::new(&bv);
    let wide = WideRankSelect::<DontCare, BinarySearch>::new(&bv);

    for i in (0..=n).step_by(4999) {
        assert_eq!(classic.rank1(i), i);
        assert_eq!(flat.rank1(i), i);
        assert_eq!(wide.rank1(i), i);
        assert_eq!(classic.rank0(i), 0);
    }
    for rank in (1..=n).step_by(4999) {
        assert_eq!(classic.select1(rank), rank - 1, "classic select1({})", rank);
        assert_eq!(flat.select1(rank), rank - 1, "flat select1({})", rank);
        assert_eq!(wide.select1(rank), rank - 1, "wide select1({})", rank);
    }
    assert_eq!(classic.select0(1), n);
}

#[test]
fn every_third_bit() {
    let n = 1 << 20;
    let mut bv = BitVec::new(n);
    for i in (0..n).step_by(3) {
        bv.set(i, true);
    }
    let classic = ClassicRankSelect::<DontCare>::new(&bv);
    let flat = FlatRankSelect::<DontCare, LinearSearch>::new(&bv);
    let wide = WideRankSelect::<DontCare, LinearSearch>::new(&bv);

    for k in [1usize, 7, 123, 349_525] {
        assert_eq!(classic.rank1(3 * k), k, "rank1({})", 3 * k);
        assert_eq!(flat.rank1(3 * k), k);
        assert_eq!(wide.rank1(3 * k), k);
        assert_eq!(classic.select1(k), 3 * (k - 1), "select1({})", k);
        assert_eq!(flat.select1(k), 3 * (k - 1));
        assert_eq!(wide.select1(k), 3 * (k - 1));
    }
}

#[test]
fn random_density_sweep() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for &density in &[0.01f64, 0.3, 0.7, 0.99] {
        let n = 200_000;
        let mut bv = BitVec::new(n);
        for i in 0..n {
            if rng.gen_bool(density) {
                bv.set(i, true);
            }
        }
        let classic = ClassicRankSelect::<OneQueries>::new(&bv);
        let flat = FlatRankSelect::<ZeroQueries, BinarySearch>::new(&bv);
        let wide = WideRankSelect::<OneQueries, BinarySearch>::new(&bv);

        let ones = bv.count_ones();
        for rank in (1..=ones).step_by(997) {
            let pos = classic.select1(rank);
            assert_eq!(flat.select1(rank), pos, "density {}", density);
            assert_eq!(wide.select1(rank), pos, "density {}", density);
            assert!(bv.get(pos));
            assert_eq!(classic.rank1(pos), rank - 1);
        }
        let zeros = bv.count_zeros();
        for rank in (1..=zeros).step_by(997) {
            let pos = classic.select0(rank);
            assert_eq!(flat.select0(rank), pos, "density {}", density);
            assert_eq!(wide.select0(rank), pos, "density {}", density);
            assert!(!bv.get(pos));
            assert_eq!(classic.rank0(pos), rank - 1);
        }
    }
}

#[test]
fn resize_roundtrip_random() {
    let n = 714_010;
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut bv = BitVec::new(n);
    for i in 0..n {
        if rng.gen::<bool>() {
            bv.set(i, true);
        }
    }
    let snapshot: Vec<bool> = bv.iter().collect();

    bv.resize(2 * n, false);
    assert_eq!(bv.len(), 2 * n);
    for (i, &bit) in snapshot.iter().enumerate() {
        assert_eq!(bv.get(i), bit, "bit {} changed by resize", i);
    }
    for i in n..2 * n {
        assert!(!bv.get(i), "appended bit {} not zero", i);
    }
}

/// Large-vector agreement check over all flat strategies and polarities.
/// Allocates half a gigabyte; run with `--ignored`.
#[test]
#[ignore]
fn flat_strategies_agree_beyond_u32() {
    let n = (1usize << 32) + 4096;
    let mut bv = BitVec::new(n);
    for i in (0..n).step_by(3) {
        bv.set(i, true);
    }

    let linear1 = FlatRankSelect::<OneQueries, LinearSearch>::new(&bv);
    let binary1 = FlatRankSelect::<OneQueries, BinarySearch>::new(&bv);
    let intrinsic1 = FlatRankSelect::<OneQueries, IntrinsicSearch>::new(&bv);
    let linear0 = FlatRankSelect::<ZeroQueries, LinearSearch>::new(&bv);
    let binary0 = FlatRankSelect::<ZeroQueries, BinarySearch>::new(&bv);
    let intrinsic0 = FlatRankSelect::<ZeroQueries, IntrinsicSearch>::new(&bv);

    let ones = bv.count_ones();
    assert_eq!(linear1.rank1(n), ones);
    assert_eq!(linear0.rank1(n), ones);

    for k in (1..=ones).step_by(7919) {
        let expected = 3 * (k - 1);
        assert_eq!(linear1.select1(k), expected, "select1({})", k);
        assert_eq!(binary1.select1(k), expected);
        assert_eq!(intrinsic1.select1(k), expected);
        assert_eq!(linear0.select1(k), expected);
        assert_eq!(binary0.select1(k), expected);
        assert_eq!(intrinsic0.select1(k), expected);
    }
}
