use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Low bound used when a price range cannot be parsed
pub const DEFAULT_LOW_PRICE: u64 = 800_000;
/// High bound used when a price range cannot be parsed
pub const DEFAULT_HIGH_PRICE: u64 = 10_000_000;

lazy_static! {
    // One amount: "800,000", "10,000,000", and also "1.5M" or "900K" so
    // those are rejected whole instead of split into digit runs
    static ref PRICE_TOKEN: Regex = Regex::new(r"\d[\d,]*(?:\.\d+)?(?:[KkMmBb]\b)?").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub low: u64,
    pub high: u64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW_PRICE,
            high: DEFAULT_HIGH_PRICE,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceRangeError {
    #[error("expected two prices in {input:?}, found {found}")]
    MissingBounds { input: String, found: usize },
    #[error("price {token:?} in {input:?} is not a whole-dollar amount")]
    InvalidAmount { input: String, token: String },
    #[error("low price {low} exceeds high price {high} in {input:?}")]
    Reversed { input: String, low: u64, high: u64 },
}

/// Extract low/high prices from the first two numeric tokens of a price string
pub fn parse_price_range(input: &str) -> Result<PriceRange, PriceRangeError> {
    let tokens: Vec<&str> = PRICE_TOKEN
        .find_iter(input)
        .map(|m| m.as_str())
        .take(2)
        .collect();

    if tokens.len() < 2 {
        return Err(PriceRangeError::MissingBounds {
            input: input.to_string(),
            found: tokens.len(),
        });
    }

    // Only plain digits with separators; fractions and K/M/B suffixes are rejected
    let amount = |token: &str| {
        let invalid = || PriceRangeError::InvalidAmount {
            input: input.to_string(),
            token: token.to_string(),
        };
        let digits = token.replace(',', "");
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        digits.parse::<u64>().map_err(|_| invalid())
    };

    let low = amount(tokens[0])?;
    let high = amount(tokens[1])?;
    if low > high {
        return Err(PriceRangeError::Reversed {
            input: input.to_string(),
            low,
            high,
        });
    }

    Ok(PriceRange { low, high })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_marketing_range() {
        let range = parse_price_range("$800,000 - $10,000,000+").unwrap();
        assert_eq!(range, PriceRange { low: 800_000, high: 10_000_000 });
    }

    #[test]
    fn ignores_tokens_after_the_second() {
        let range = parse_price_range("From $1,200,000 to $3,500,000 (2 units)").unwrap();
        assert_eq!(range.low, 1_200_000);
        assert_eq!(range.high, 3_500_000);
    }

    #[test]
    fn reports_missing_bounds() {
        assert_eq!(
            parse_price_range("invalid string"),
            Err(PriceRangeError::MissingBounds {
                input: "invalid string".to_string(),
                found: 0,
            })
        );
        assert!(matches!(
            parse_price_range("Starting at $900,000"),
            Err(PriceRangeError::MissingBounds { found: 1, .. })
        ));
    }

    #[test]
    fn rejects_abbreviated_amounts() {
        for input in ["$1.5M - $3M", "$1.2M - $3.5M", "$900K - $2,000,000", "$800,000.50 - $900,000"] {
            let err = parse_price_range(input).unwrap_err();
            assert!(
                matches!(err, PriceRangeError::InvalidAmount { .. }),
                "{}: {:?}",
                input,
                err
            );
        }
        assert_eq!(
            parse_price_range("$1.5M - $3M"),
            Err(PriceRangeError::InvalidAmount {
                input: "$1.5M - $3M".to_string(),
                token: "1.5M".to_string(),
            })
        );
    }

    #[test]
    fn rejects_reversed_range() {
        assert_eq!(
            parse_price_range("$10,000,000 - $800,000"),
            Err(PriceRangeError::Reversed {
                input: "$10,000,000 - $800,000".to_string(),
                low: 10_000_000,
                high: 800_000,
            })
        );
        assert_eq!(
            parse_price_range("$950,000 - $950,000"),
            Ok(PriceRange { low: 950_000, high: 950_000 })
        );
    }

    #[test]
    fn reports_overflowing_amount() {
        let err = parse_price_range("$1 - $99999999999999999999999").unwrap_err();
        assert!(matches!(err, PriceRangeError::InvalidAmount { .. }));
    }
}
