// Property tests to be included by lib.rs (if enabled)


mod parsing_and_formatting {
    use super::*;

    proptest! {
        #[test]
        fn decimal_strings_roundtrip(s in "[+-]?[0-9]{1,60}") {
            let parsed: BigInt = s.parse().unwrap();
            let formatted = parsed.to_string();
            let reparsed: BigInt = formatted.parse().unwrap();

            prop_assert_eq!(&parsed, &reparsed);

            // canonical form: no sign prefix on zero, no leading zeros
            let trimmed = s.trim_start_matches(|c| c == '+' || c == '-')
                           .trim_start_matches('0');
            if trimmed.is_empty() {
                prop_assert_eq!(formatted, "0");
            } else if s.starts_with('-') {
                prop_assert_eq!(formatted.trim_start_matches('-'), trimmed);
            } else {
                prop_assert_eq!(&formatted, trimmed);
            }
        }
    }
}

mod arithmetic {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< matches_primitive_ $t >](n: $t, m: $t) {
                    let a = BigInt::from(n);
                    let b = BigInt::from(m);

                    prop_assert_eq!((&a + &b).to_string(), (n as i128 + m as i128).to_string());
                    prop_assert_eq!((&a - &b).to_string(), (n as i128 - m as i128).to_string());
                    prop_assert_eq!((&a * &b).to_string(), (n as i128 * m as i128).to_string());

                    if m != 0 {
                        prop_assert_eq!((&a / &b).to_string(), (n as i128 / m as i128).to_string());
                        prop_assert_eq!((&a % &b).to_string(), (n as i128 % m as i128).to_string());
                    }
                }
            } }
        };
    }

    impl_test!(i8);
    impl_test!(i16);
    impl_test!(i32);
    impl_test!(i64);

    proptest! {
        #[test]
        fn additive_inverse(s in "-?[0-9]{1,60}") {
            let a: BigInt = s.parse().unwrap();
            let sum = &a + -&a;

            prop_assert!(sum.is_zero());
        }

        #[test]
        fn distributive_over_addition(
            x in "-?[0-9]{1,40}",
            y in "-?[0-9]{1,40}",
            z in "-?[0-9]{1,40}",
        ) {
            let a: BigInt = x.parse().unwrap();
            let b: BigInt = y.parse().unwrap();
            let c: BigInt = z.parse().unwrap();

            let left = &a * (&b + &c);
            let right = &a * &b + &a * &c;

            prop_assert_eq!(left, right);
        }

        #[test]
        fn division_remainder_identity(
            x in "-?[0-9]{1,50}",
            y in "-?[0-9]{1,25}",
        ) {
            let a: BigInt = x.parse().unwrap();
            let b: BigInt = y.parse().unwrap();
            prop_assume!(!b.is_zero());

            let q = &a / &b;
            let r = &a % &b;

            prop_assert_eq!(&q * &b + &r, a.clone());

            // remainder is zero or takes the dividend's sign
            prop_assert!(r.is_zero() || r.sign() == a.sign());

            // remainder magnitude is below the divisor's
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn order_is_total(x in "-?[0-9]{1,30}", y in "-?[0-9]{1,30}") {
            let a: BigInt = x.parse().unwrap();
            let b: BigInt = y.parse().unwrap();

            let relations = [(a < b) as u8, (a == b) as u8, (a > b) as u8];
            prop_assert_eq!(relations.iter().sum::<u8>(), 1);
        }
    }
}
