// Tests to be included by lib.rs

mod construction {
    use super::*;

    #[test]
    fn new_builds_from_limbs() {
        let n = BigInt::new(Sign::Plus, vec![1, 1]);
        assert_eq!(n.to_string(), "10000001");

        let n = BigInt::new(Sign::Minus, vec![7]);
        assert_eq!(n.to_string(), "-7");
    }

    #[test]
    fn new_trims_high_zero_limbs() {
        let n = BigInt::new(Sign::Plus, vec![42, 0, 0]);
        assert_eq!(n, BigInt::from(42));
    }

    #[test]
    fn new_normalizes_zero() {
        let n = BigInt::new(Sign::NoSign, vec![0, 0]);
        assert_eq!(n.sign(), Sign::NoSign);
        assert_eq!(n, BigInt::zero());
    }

    #[test]
    #[should_panic(expected = "limb out of range")]
    fn new_rejects_oversized_limb() {
        BigInt::new(Sign::Plus, vec![10_000_000]);
    }

    #[test]
    #[should_panic(expected = "NoSign BigInt with non-zero magnitude")]
    fn new_rejects_nosign_with_magnitude() {
        BigInt::new(Sign::NoSign, vec![5]);
    }

    #[test]
    fn copies_are_independent() {
        let a: BigInt = "123456789012345678".parse().unwrap();
        let mut b = a.clone();
        b += BigInt::from(1);

        assert_eq!(a.to_string(), "123456789012345678");
        assert_eq!(b.to_string(), "123456789012345679");
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn sum_of_123_and_877_is_1000() {
        assert_eq!(BigInt::from(123) + BigInt::from(877), BigInt::from(1000));
    }

    #[test]
    fn twenty_nines_doubled() {
        let n: BigInt = "99999999999999999999".parse().unwrap();
        let expected: BigInt = "199999999999999999998".parse().unwrap();
        assert_eq!(n * BigInt::from(2), expected);
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-3));
        assert_eq!(BigInt::from(-7) % BigInt::from(2), BigInt::from(-1));
    }

    #[test]
    fn zero_minus_five() {
        assert_eq!(BigInt::from(0) - BigInt::from(5), BigInt::from(-5));
    }

    #[test]
    fn leading_zeros_parse_to_same_value() {
        let n: BigInt = "0000123".parse().unwrap();
        assert_eq!(n, BigInt::from(123));
        assert_eq!(n.to_string(), "123");
    }

    #[test]
    fn failed_division_leaves_operands_alone() {
        let a: BigInt = "987654321098765432109876543210".parse().unwrap();
        let b = BigInt::zero();

        assert_eq!(a.checked_div(&b), None);
        assert_eq!(a.checked_rem(&b), None);

        assert_eq!(a.to_string(), "987654321098765432109876543210");
        assert!(b.is_zero());
    }
}

mod stepping {
    use super::*;

    #[test]
    fn inc_steps_up() {
        let mut n = BigInt::from(41);
        n.inc();
        assert_eq!(n, BigInt::from(42));
    }

    #[test]
    fn dec_steps_down() {
        let mut n = BigInt::from(43);
        n.dec();
        assert_eq!(n, BigInt::from(42));
    }

    #[test]
    fn inc_across_limb_boundary() {
        let mut n: BigInt = "9999999".parse().unwrap();
        n.inc();
        assert_eq!(n.to_string(), "10000000");
    }

    #[test]
    fn dec_across_zero() {
        let mut n = BigInt::from(1);
        n.dec();
        assert!(n.is_zero());
        n.dec();
        assert_eq!(n, BigInt::from(-1));
    }

    #[test]
    fn inc_from_negative() {
        let mut n = BigInt::from(-1);
        n.inc();
        assert!(n.is_zero());
        n.inc();
        assert_eq!(n, BigInt::from(1));
    }
}

mod sign_helpers {
    use super::*;

    #[test]
    fn abs_drops_the_sign() {
        assert_eq!(BigInt::from(-42).abs(), BigInt::from(42));
        assert_eq!(BigInt::from(42).abs(), BigInt::from(42));
        assert_eq!(BigInt::zero().abs(), BigInt::zero());
    }

    #[test]
    fn signum_is_unit_valued() {
        assert_eq!(BigInt::from(-42).signum(), BigInt::from(-1));
        assert_eq!(BigInt::from(42).signum(), BigInt::from(1));
        assert_eq!(BigInt::zero().signum(), BigInt::zero());
    }

    #[test]
    fn is_positive_negative() {
        assert!(BigInt::from(1).is_positive());
        assert!(!BigInt::from(1).is_negative());
        assert!(BigInt::from(-1).is_negative());
        assert!(!BigInt::zero().is_positive());
        assert!(!BigInt::zero().is_negative());
    }

    #[test]
    fn abs_sub_is_zero_clamped_difference() {
        assert_eq!(BigInt::from(3).abs_sub(&BigInt::from(5)), BigInt::zero());
        assert_eq!(BigInt::from(5).abs_sub(&BigInt::from(3)), BigInt::from(2));
    }
}

mod iter_traits {
    use super::*;

    #[test]
    fn sum_over_owned_and_borrowed() {
        let values = vec![BigInt::from(1), BigInt::from(-2), BigInt::from(30)];

        let total: BigInt = values.iter().sum();
        assert_eq!(total, BigInt::from(29));

        let total: BigInt = values.into_iter().sum();
        assert_eq!(total, BigInt::from(29));
    }

    #[test]
    fn product_over_owned_and_borrowed() {
        let values = vec![BigInt::from(2), BigInt::from(-3), BigInt::from(7)];

        let product: BigInt = values.iter().product();
        assert_eq!(product, BigInt::from(-42));

        let product: BigInt = values.into_iter().product();
        assert_eq!(product, BigInt::from(-42));
    }

    #[test]
    fn empty_iterators_give_identities() {
        let none: [BigInt; 0] = [];
        let sum: BigInt = none.iter().sum();
        let product: BigInt = none.iter().product();

        assert!(sum.is_zero());
        assert_eq!(product, BigInt::one());
    }
}

mod identity_values {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(BigInt::default(), BigInt::zero());
        assert!(BigInt::default().is_zero());
    }

    #[test]
    fn zero_is_additive_identity() {
        let n: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(&n + BigInt::zero(), n);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let n: BigInt = "-123456789012345678901234567890".parse().unwrap();
        assert_eq!(&n * BigInt::one(), n);
    }
}

mod hashing {
    use super::*;

    fn hash_of(value: &BigInt) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_values_hash_equal() {
        let a: BigInt = "0000123".parse().unwrap();
        let b = BigInt::from(123);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn negative_zero_hashes_like_zero() {
        let a: BigInt = "-0".parse().unwrap();
        assert_eq!(hash_of(&a), hash_of(&BigInt::zero()));
    }
}
