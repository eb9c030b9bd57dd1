//! Password sampling.

use rand::Rng;
use zeroize::Zeroize;

use super::charset;
use crate::settings::Settings;

/// Draw `length` independent uniform samples from the alphabet.
///
/// The alphabet must be non-empty; `charset::build` guarantees that for any
/// settings. Generic over the source so callers needing a cryptographically
/// secure generator can substitute one without changing the sampling
/// contract.
pub fn sample<R: Rng>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
    let bytes: Vec<u8> = (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect();
    // Safety: alphabet is all ASCII
    unsafe { String::from_utf8_unchecked(bytes) }
}

/// Generate one password from the current settings.
pub fn generate<R: Rng>(rng: &mut R, settings: &Settings) -> String {
    let mut alphabet = charset::build(settings);
    let pass = sample(rng, &alphabet, settings.length);
    alphabet.zeroize();
    pass
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn output_has_requested_length() {
        let mut rng = SmallRng::seed_from_u64(7);
        for length in [1, 6, 12, 30] {
            assert_eq!(sample(&mut rng, b"abc", length).len(), length);
        }
    }

    #[test]
    fn output_stays_within_alphabet() {
        let mut rng = SmallRng::seed_from_u64(7);
        let alphabet = b"xyz901";
        let pass = sample(&mut rng, alphabet, 200);
        assert!(pass.bytes().all(|b| alphabet.contains(&b)));
    }

    #[test]
    fn single_byte_alphabet_is_constant() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(sample(&mut rng, b"k", 10), "kkkkkkkkkk");
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        assert_eq!(sample(&mut a, b"abcdef", 32), sample(&mut b, b"abcdef", 32));
    }

    #[test]
    fn generate_respects_settings() {
        let mut rng = SmallRng::seed_from_u64(7);
        let settings = Settings {
            length: 12,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
        };
        let pass = generate(&mut rng, &settings);
        assert_eq!(pass.len(), 12);
        assert!(pass.bytes().all(|b| b.is_ascii_lowercase()));
    }
}
