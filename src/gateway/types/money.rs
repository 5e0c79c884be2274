//! Money input type for the API boundary

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Strict format Decimal - validates format during deserialization
///
/// Accepts a JSON number or string and rejects sloppy formats at the
/// Serde layer:
/// - Rejects `.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects empty strings
///
/// Sign and range are business rules and stay with the orchestrator,
/// which answers `InvalidAmount` for zero or negative values.
#[derive(Debug, Clone, Copy)]
pub struct StrictAmount(Decimal);

impl StrictAmount {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }
}

impl std::ops::Deref for StrictAmount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for StrictAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        use std::str::FromStr;

        // Support both JSON number and JSON string
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DecimalOrString {
            String(String),
            Number(Decimal),
        }

        let value = DecimalOrString::deserialize(deserializer)?;

        match value {
            DecimalOrString::String(s) => {
                if s.is_empty() {
                    return Err(D::Error::custom("Amount cannot be empty"));
                }
                if s.starts_with('.') || s.starts_with("-.") {
                    return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
                }
                if s.ends_with('.') {
                    return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
                }

                let d = Decimal::from_str(&s)
                    .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))?;
                Ok(StrictAmount(d))
            }
            DecimalOrString::Number(d) => Ok(StrictAmount(d)),
        }
    }
}

impl Serialize for StrictAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string to preserve precision
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(json: &str) -> Result<StrictAmount, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_accepts_number_and_string() {
        assert_eq!(parse("100.5").unwrap().inner(), dec!(100.5));
        assert_eq!(parse("\"100.5\"").unwrap().inner(), dec!(100.5));
        assert_eq!(parse("\"0.5\"").unwrap().inner(), dec!(0.5));
    }

    #[test]
    fn test_rejects_sloppy_formats() {
        assert!(parse("\".5\"").is_err());
        assert!(parse("\"5.\"").is_err());
        assert!(parse("\"\"").is_err());
        assert!(parse("\"abc\"").is_err());
    }

    #[test]
    fn test_zero_and_negative_pass_through_to_business_rules() {
        // The orchestrator owns the amount > 0 rule.
        assert_eq!(parse("0").unwrap().inner(), Decimal::ZERO);
        assert_eq!(parse("\"-10\"").unwrap().inner(), dec!(-10));
    }
}
