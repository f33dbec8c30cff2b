//! Serialization helpers for the swap preparer API

/// A module for serializing and deserializing U256 as decimal strings
pub(crate) mod u256_string_serialization {
    use alloy_primitives::U256;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    /// Serialize a U256 to a decimal string
    pub fn serialize<S: Serializer>(value: &U256, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_string())
    }

    /// Deserialize a decimal string to a U256
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<U256, D::Error> {
        let s = String::deserialize(d)?;
        U256::from_str_radix(&s, 10).map_err(|_| D::Error::custom("Invalid U256 value"))
    }
}

/// A module for serializing and deserializing optional U256 as decimal
/// strings
pub(crate) mod option_u256_string_serialization {
    use alloy_primitives::U256;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    /// Serialize an optional U256 to a decimal string
    pub fn serialize<S: Serializer>(value: &Option<U256>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => s.serialize_some(&v.to_string()),
            None => s.serialize_none(),
        }
    }

    /// Deserialize an optional decimal string to a U256
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<U256>, D::Error> {
        let s = Option::<String>::deserialize(d)?;
        s.map(|s| U256::from_str_radix(&s, 10))
            .transpose()
            .map_err(|_| D::Error::custom("Invalid U256 value"))
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use rand::{thread_rng, Rng};
    use serde::{Deserialize, Serialize};

    /// A wrapper exercising both helpers
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Amounts {
        /// A required amount
        #[serde(with = "super::u256_string_serialization")]
        amount: U256,
        /// An optional amount
        #[serde(default, with = "super::option_u256_string_serialization")]
        maybe_amount: Option<U256>,
    }

    /// Amounts are written as plain decimal strings, not hex
    #[test]
    fn test_u256_written_as_decimal() {
        let amounts =
            Amounts { amount: U256::from(1_000_000u64), maybe_amount: Some(U256::from(255u8)) };
        let serialized = serde_json::to_string(&amounts).unwrap();
        assert_eq!(serialized, r#"{"amount":"1000000","maybe_amount":"255"}"#);
    }

    /// Test serialization and deserialization of a random U256
    #[test]
    fn test_u256_serialization() {
        let mut rng = thread_rng();
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes);
        let amounts = Amounts { amount: U256::from_be_bytes(bytes), maybe_amount: None };

        let serialized = serde_json::to_string(&amounts).unwrap();
        let deserialized: Amounts = serde_json::from_str(&serialized).unwrap();
        assert_eq!(amounts, deserialized);
    }

    /// Hex strings are rejected by the decimal helpers
    #[test]
    fn test_u256_rejects_hex() {
        let res = serde_json::from_str::<Amounts>(r#"{"amount":"0x10"}"#);
        assert!(res.is_err());
    }
}
