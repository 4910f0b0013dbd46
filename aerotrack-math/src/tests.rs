use crate::Sign;

#[test]
fn sign_of_values() {
    assert_eq!(Sign::of(3.), Sign::Positive);
    assert_eq!(Sign::of(-0.25), Sign::Negative);
    assert_eq!(Sign::of(0.), Sign::Zero);
    assert_eq!(Sign::of(-0.), Sign::Zero);
    assert_eq!(Sign::of(f64::NAN), Sign::Zero);
}

#[test]
fn sign_opposite_requires_nonzero() {
    assert!(Sign::Positive.is_opposite(Sign::Negative));
    assert!(Sign::Negative.is_opposite(Sign::Positive));
    assert!(!Sign::Positive.is_opposite(Sign::Positive));
    assert!(!Sign::Zero.is_opposite(Sign::Negative));
    assert!(!Sign::Positive.is_opposite(Sign::Zero));
}

#[test]
fn sign_same_requires_nonzero() {
    assert!(Sign::Negative.is_same_nonzero(Sign::Negative));
    assert!(!Sign::Zero.is_same_nonzero(Sign::Zero));
    assert!(!Sign::Negative.is_same_nonzero(Sign::Positive));
}
