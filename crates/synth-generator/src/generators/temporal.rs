//! Date value generators.

use chrono::{Duration, Utc};
use rand::Rng;
use synth_core::FieldValue;

/// Size of the window for generated dates: the past year up to today.
pub const DATE_WINDOW_DAYS: i64 = 365;

/// Generate a uniformly random calendar date within the past
/// [`DATE_WINDOW_DAYS`] days, inclusive of today.
pub fn generate_recent_date<R: Rng + ?Sized>(rng: &mut R) -> FieldValue {
    let today = Utc::now().date_naive();
    let offset = rng.gen_range(0..=DATE_WINDOW_DAYS);
    FieldValue::Date(today - Duration::days(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_date_within_past_year() {
        let mut rng = StdRng::seed_from_u64(42);
        let today = Utc::now().date_naive();
        let floor = today - Duration::days(DATE_WINDOW_DAYS);

        for _ in 0..200 {
            let value = generate_recent_date(&mut rng);
            let date = value.as_date().expect("expected Date value");
            assert!(date >= floor && date <= today);
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(generate_recent_date(&mut rng1), generate_recent_date(&mut rng2));
    }
}
