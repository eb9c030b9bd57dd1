//! Character set building for password generation.

use crate::settings::Settings;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Build the alphabet from the class toggles. Lowercase is always included,
/// so the result is never empty.
pub fn build(settings: &Settings) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(settings));

    chars.extend_from_slice(LOWERCASE.as_bytes());

    if settings.include_uppercase {
        chars.extend_from_slice(UPPERCASE.as_bytes());
    }

    if settings.include_numbers {
        chars.extend_from_slice(DIGITS.as_bytes());
    }

    if settings.include_symbols {
        chars.extend_from_slice(SYMBOLS.as_bytes());
    }

    chars
}

/// Alphabet size for the current toggles, without building it.
pub fn size(settings: &Settings) -> usize {
    let mut size = LOWERCASE.len();
    if settings.include_uppercase {
        size += UPPERCASE.len();
    }
    if settings.include_numbers {
        size += DIGITS.len();
    }
    if settings.include_symbols {
        size += SYMBOLS.len();
    }
    size
}
