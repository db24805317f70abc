use super::*;

#[test]
fn round_to_places() {
    assert_eq!(round_to(1.23456, 4), 1.2346);
    assert_eq!(round_to(2.5, 0), 3.0);
    assert_eq!(round_to(-0.125, 2), -0.13);
    assert_eq!(round_to(11.0 / 3.0, 3), 3.667);
}
