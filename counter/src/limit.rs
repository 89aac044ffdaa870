use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Largest accepted limit. Every candidate below it converts to `f64`
/// exactly, which keeps the real-valued half precise.
pub const MAX_LIMIT: u64 = 1 << f64::MANTISSA_DIGITS;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitError {
    #[error("invalid limit: {0}")]
    Parse(#[from] ParseIntError),
    #[error("limit must not be negative, got {0}")]
    Negative(i64),
    #[error("limit {0} exceeds the maximum of {max}", max = MAX_LIMIT)]
    TooLarge(u64),
}

/// Exclusive upper bound of the candidates to test, checked against [`MAX_LIMIT`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Limit(u64);

impl Limit {
    pub fn new(value: u64) -> Result<Self, LimitError> {
        if value > MAX_LIMIT {
            Err(LimitError::TooLarge(value))
        } else {
            Ok(Self(value))
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Limit {
    type Error = LimitError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Limit {
    type Err = LimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(value) => Self::new(value),
            Err(err) => match s.parse::<i64>() {
                Ok(value) if value < 0 => Err(LimitError::Negative(value)),
                _ => Err(err.into()),
            },
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse() {
        assert_eq!("10000".parse::<Limit>().unwrap().get(), 10000);
        assert_eq!("0".parse::<Limit>().unwrap().get(), 0);
        assert_eq!(
            MAX_LIMIT.to_string().parse::<Limit>().unwrap().get(),
            MAX_LIMIT
        );
    }

    #[test]
    fn negative() {
        assert_eq!("-5".parse::<Limit>(), Err(LimitError::Negative(-5)));
        assert_eq!(
            "-5".parse::<Limit>().unwrap_err().to_string(),
            "limit must not be negative, got -5"
        );
    }

    #[test]
    fn too_large() {
        assert_eq!(
            Limit::new(MAX_LIMIT + 1),
            Err(LimitError::TooLarge(MAX_LIMIT + 1))
        );
        assert_eq!(
            Limit::try_from(u64::MAX).unwrap_err().to_string(),
            format!("limit {} exceeds the maximum of {MAX_LIMIT}", u64::MAX)
        );
    }

    #[test]
    fn not_a_number() {
        assert!(matches!(
            "ten thousand".parse::<Limit>(),
            Err(LimitError::Parse(_))
        ));
        assert!(matches!("".parse::<Limit>(), Err(LimitError::Parse(_))));
        assert!(matches!("1.5".parse::<Limit>(), Err(LimitError::Parse(_))));
    }

    #[test]
    fn display() {
        assert_eq!(Limit::new(42).unwrap().to_string(), "42");
    }
}
