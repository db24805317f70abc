use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn unit_draws_stay_in_range() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_f64_01();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn zero_weights_are_never_drawn() {
    let mut rng = Rng64::new(99);
    let entries = [('a', 0.0), ('b', 1.0), ('c', 0.0)];
    for _ in 0..200 {
        assert_eq!(rng.pick_weighted(&entries), Some('b'));
    }
}

#[test]
fn all_zero_weights_yield_none() {
    let mut rng = Rng64::new(1);
    assert_eq!(rng.pick_weighted(&[(1u8, 0.0), (2u8, 0.0)]), None);
    assert_eq!(rng.pick_weighted::<u8>(&[]), None);
}

#[test]
fn weighted_draws_follow_proportions() {
    let mut rng = Rng64::new(2024);
    let entries = [(0usize, 3.0), (1usize, 1.0)];
    let mut counts = [0u32; 2];
    for _ in 0..4000 {
        let i = rng.pick_weighted(&entries).unwrap();
        counts[i] += 1;
    }
    let frac = f64::from(counts[0]) / 4000.0;
    assert!((frac - 0.75).abs() < 0.05, "got {frac}");
}

#[test]
fn explicit_seed_is_kept() {
    assert_eq!(resolve_seed(Some(42)), 42);
}
