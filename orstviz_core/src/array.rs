//! Building the array a [`Session`](crate::Session) sorts: validation, parsing of the
//! comma-separated custom input, and random generation.

use std::num::IntErrorKind;

use rand::Rng;

use crate::{Error, Result, SessionConfig};

/// Checks that `values` is a non-empty array within the size and value limits of `config`.
///
/// # Example
///
/// ```
/// use orstviz_core::{array, Error, SessionConfig};
///
/// let config = SessionConfig::default();
/// assert_eq!(array::check([50, 100, 30], &config), Ok(vec![50, 100, 30]));
/// assert!(matches!(array::check([301], &config), Err(Error::InvalidArray(_))));
/// ```
pub fn check<I>(values: I, config: &SessionConfig) -> Result<Vec<u32>>
where
    I: IntoIterator,
    I::Item: Into<i64>,
{
    let values: Vec<i64> = values.into_iter().map(Into::into).collect();

    if values.is_empty() {
        return Err(Error::InvalidArray("Array cannot be empty.".to_string()));
    }

    if values.len() > config.max_len {
        return Err(Error::InvalidArray(format!(
            "Array size must not exceed {} elements.",
            config.max_len
        )));
    }

    let range = i64::from(config.min_value)..=i64::from(config.max_value);
    values
        .into_iter()
        .map(|v| {
            if range.contains(&v) {
                // in range implies it fits
                Ok(v as u32)
            } else {
                Err(Error::InvalidArray(format!(
                    "Array values must be between {} and {}.",
                    config.min_value, config.max_value
                )))
            }
        })
        .collect()
}

/// Parses comma-separated integers, skipping blank entries. Says nothing about sizes or ranges,
/// see [`check`] for that.
///
/// ```
/// use orstviz_core::array;
///
/// assert_eq!(array::parse(" 50, 100,,30 ,"), Ok(vec![50, 100, 30]));
/// assert!(array::parse("50, ten").is_err());
/// ```
pub fn parse(input: &str) -> Result<Vec<i64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<i64>() {
            Ok(v) => Ok(v),
            // still a number, just far out of range; let `check` reject it
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
            Err(_) => Err(Error::InvalidArray(
                "Invalid input. Enter comma-separated integers (e.g., 50, 100, 30).".to_string(),
            )),
        })
        .collect()
}

/// A random array of `config.random_len` values within the configured range.
pub fn random<R>(rng: &mut R, config: &SessionConfig) -> Vec<u32>
where
    R: Rng + ?Sized,
{
    let low = config.min_value.min(config.max_value);
    let high = config.min_value.max(config.max_value);
    (0..config.random_len)
        .map(|_| rng.gen_range(low..=high))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_empty_long_and_out_of_range() {
        let config = SessionConfig::default();

        assert!(matches!(
            check(Vec::<u32>::new(), &config),
            Err(Error::InvalidArray(_))
        ));
        assert!(matches!(check(vec![50; 21], &config), Err(Error::InvalidArray(_))));
        assert!(matches!(check([9], &config), Err(Error::InvalidArray(_))));
        assert!(matches!(check([301], &config), Err(Error::InvalidArray(_))));
        assert!(matches!(check([-20i64], &config), Err(Error::InvalidArray(_))));
    }

    #[test]
    fn accepts_the_bounds() {
        let config = SessionConfig::default();
        assert_eq!(check([10, 300], &config), Ok(vec![10, 300]));
        assert_eq!(check(vec![50; 20], &config), Ok(vec![50; 20]));
    }

    #[test]
    fn parses_negative_numbers_for_range_check() {
        assert_eq!(parse("-5, 12"), Ok(vec![-5, 12]));
        assert_eq!(parse(""), Ok(vec![]));
        assert!(parse("1.5").is_err());
    }

    #[test]
    fn huge_numbers_parse_and_fail_the_range_check() {
        let config = SessionConfig::default();
        let values = parse("50, 99999999999999999999, -99999999999999999999").unwrap();
        assert_eq!(values, [50, i64::MAX, i64::MIN]);
        assert!(matches!(check(values, &config), Err(Error::InvalidArray(_))));
    }

    #[test]
    fn random_tolerates_swapped_bounds() {
        let config = SessionConfig {
            min_value: 300,
            max_value: 10,
            ..SessionConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let values = random(&mut rng, &config);
        assert_eq!(values.len(), 20);
        assert!(values.iter().all(|v| (10..=300).contains(v)));
    }

    #[test]
    fn random_arrays_are_valid() {
        let config = SessionConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let values = random(&mut rng, &config);
            assert_eq!(values.len(), 20);
            assert!(check(values, &config).is_ok());
        }
    }
}
