use rand::Rng;
use time::{Duration, OffsetDateTime};

const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;

/// Draw a reset code uniformly from [100000, 999999]. Always six decimal
/// digits, never zero-padded.
pub fn generate_code() -> String {
    rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX).to_string()
}

/// Expiry timestamp for a code issued at `now`.
pub fn expiry(now: OffsetDateTime, ttl_minutes: i64) -> OffsetDateTime {
    now + Duration::minutes(ttl_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_six_decimal_digits() {
        for _ in 0..200 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            let n: u32 = code.parse().unwrap();
            assert!((CODE_MIN..=CODE_MAX).contains(&n));
        }
    }

    #[test]
    fn expiry_is_ttl_past_issue_time() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let expires = expiry(now, 60);
        assert_eq!(expires - now, Duration::hours(1));
    }
}
