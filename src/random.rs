use rand::Rng;

use crate::{HelperError, PASSWORD_CHARSET, Result};

/// Generates a password of `length` ASCII letters and digits.
///
/// This is meant for throwaway credentials such as a first-login password,
/// not for secrets; pass a cryptographically secure `rng` if it matters.
pub fn random_password<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| char::from(PASSWORD_CHARSET[rng.gen_range(0..PASSWORD_CHARSET.len())]))
        .collect()
}

/// Returns true with the given probability.
///
/// # Errors
/// Returns `HelperError::InvalidProbability` unless `0.0 <= probability <= 1.0`.
pub fn chance<R: Rng + ?Sized>(probability: f64, rng: &mut R) -> Result<bool> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(HelperError::InvalidProbability(probability));
    }
    Ok(rng.gen_bool(probability))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_password_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [0, 1, 8, 64] {
            let password = random_password(length, &mut rng);
            assert_eq!(password.len(), length);
            assert!(password.bytes().all(|b| PASSWORD_CHARSET.contains(&b)), "{password}");
        }
    }

    #[test]
    fn test_random_password_is_seeded() {
        let first = random_password(16, &mut StdRng::seed_from_u64(42));
        let second = random_password(16, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_chance_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(chance(0.0, &mut rng), Ok(false));
            assert_eq!(chance(1.0, &mut rng), Ok(true));
        }
    }

    #[test]
    fn test_chance_rejects_out_of_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(chance(1.5, &mut rng), Err(HelperError::InvalidProbability(1.5)));
        assert_eq!(chance(-0.1, &mut rng), Err(HelperError::InvalidProbability(-0.1)));
        assert!(chance(f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_chance_roughly_fair() {
        let mut rng = StdRng::seed_from_u64(99);
        let hits = (0..10_000).filter(|_| chance(0.25, &mut rng).unwrap_or(false)).count();
        assert!((2_000..3_000).contains(&hits), "hits = {hits}");
    }
}
