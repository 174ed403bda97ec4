//!
//! Support for serde implementations
//!
//! Values serialize as their canonical decimal string, which every
//! format can hold losslessly; deserialization also accepts native
//! integer tokens.

use crate::*;
use serde::{de, ser};

impl ser::Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a BigInt
struct BigIntVisitor;

impl<'de> de::Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer or formatted decimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        value.parse().map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }
}

impl<'de> de::Deserialize<'de> for BigInt {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(BigIntVisitor)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    use serde_test::{assert_de_tokens, assert_tokens, Token};

    mod serde_serialize_deserialize_str {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $input:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let expected = Token::Str($output);
                    let n: BigInt = $input.parse().unwrap();
                    assert_tokens(&n, &[expected]);
                }
            };
        }

        impl_case!(case_0: "0" => "0");
        impl_case!(case_n0: "-0" => "0");
        impl_case!(case_50: "50" => "50");
        impl_case!(case_n75: "-75" => "-75");
        impl_case!(case_0000123: "0000123" => "123");
        impl_case!(case_multi_limb: "123456789012345678901234567890" => "123456789012345678901234567890");
    }

    mod serde_deserialize_int {
        use super::*;

        macro_rules! impl_case {
            ( $( $ttype:ident ),+ : -$input:literal ) => {
                $( paste! { impl_case!([< case_n $input _ $ttype:lower >] : $ttype : -$input); } )*
            };
            ( $( $ttype:ident ),+ : $input:literal ) => {
                $( paste! { impl_case!([< case_ $input _ $ttype:lower >] : $ttype : $input); } )*
            };
            ($name:ident : $type:ident : $input:literal) => {
                #[test]
                fn $name() {
                    let expected = BigInt::from($input);
                    let token = Token::$type($input);
                    assert_de_tokens(&expected, &[token]);
                }
            };
        }

        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 0);
        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 1);
        impl_case!(I8, I16, I32, I64 : -1);
        impl_case!(I64: -99999999999i64);
        impl_case!(I64: -9_223_372_036_854_775_807i64);

        #[test]
        fn case_i64_min() {
            let expected = BigInt::from(i64::MIN);
            assert_de_tokens(&expected, &[Token::I64(i64::MIN)]);
        }
    }
}
