//! Heuristic password strength scoring.
//!
//! Five independent predicates, one point each. A fixed heuristic for the
//! strength meter, not an entropy estimate.

pub const MAX_SCORE: u8 = 5;

/// Score a password 0-5: length >= 8, length >= 12, has uppercase, has
/// digit, has non-alphanumeric. Each predicate only adds, so richer
/// passwords never score lower.
pub fn score(password: &str) -> u8 {
    let mut score = 0;
    let length = password.chars().count();

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score
}

/// Map a score to its display label.
pub fn label(score: u8) -> &'static str {
    match score {
        0..=1 => "Weak",
        2..=3 => "Medium",
        _ => "Strong",
    }
}

/// Theoretical entropy in bits for a uniformly sampled password:
/// length * log2(charset_size).
pub fn entropy_bits(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_len_12_scores_medium() {
        // +1 (len >= 8), +1 (len >= 12), regardless of content
        let s = score("abcdefghijkl");
        assert_eq!(s, 2);
        assert_eq!(label(s), "Medium");
    }

    #[test]
    fn lowercase_len_6_scores_weak() {
        let s = score("abcdef");
        assert_eq!(s, 0);
        assert_eq!(label(s), "Weak");
    }

    #[test]
    fn rich_password_scores_strong() {
        let s = score("Ab3$efgh1234");
        assert_eq!(s, 5);
        assert_eq!(label(s), "Strong");
    }

    #[test]
    fn each_predicate_adds_one() {
        assert_eq!(score(""), 0);
        assert_eq!(score("abcdefgh"), 1); // len >= 8
        assert_eq!(score("Abcdefgh"), 2); // + uppercase
        assert_eq!(score("Abcdefg1"), 3); // + digit
        assert_eq!(score("Abcdef1!"), 4); // + symbol
        assert_eq!(score("Abcdef1!abcd"), 5); // + len >= 12
    }

    #[test]
    fn appending_never_decreases_score() {
        let mut pass = String::from("abcde");
        let mut last = score(&pass);
        // Each append newly satisfies a previously-unsatisfied predicate
        for tail in ["fgh", "A", "7", "$", "xxxx"] {
            pass.push_str(tail);
            let next = score(&pass);
            assert!(next >= last, "{pass:?} dropped {last} -> {next}");
            last = next;
        }
        assert_eq!(last, MAX_SCORE);
    }

    #[test]
    fn label_boundaries() {
        assert_eq!(label(0), "Weak");
        assert_eq!(label(1), "Weak");
        assert_eq!(label(2), "Medium");
        assert_eq!(label(3), "Medium");
        assert_eq!(label(4), "Strong");
        assert_eq!(label(5), "Strong");
    }

    #[test]
    fn entropy_bits_basics() {
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert_eq!(entropy_bits(8, 2), 8.0);
        let bits = entropy_bits(12, 91);
        assert!((bits - 12.0 * (91.0_f64).log2()).abs() < 1e-9);
    }
}
