//! Issue key generation.

use chrono::{Datelike, NaiveDateTime};
use rand::distr::Alphanumeric;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::{Category, Issue, Priority};

use super::key::{IssueKey, SUFFIX_LEN};

/// Derives [`IssueKey`]s from issue fields plus a random suffix.
///
/// The random source is a type parameter so that tests can use a seeded
/// generator while production code draws from the thread-local RNG.
///
/// # Examples
///
/// ```
/// use business_rules::keys::IssueKeyGenerator;
/// use business_rules::models::{Category, Priority};
/// use chrono::NaiveDate;
///
/// let created_at = NaiveDate::from_ymd_opt(2022, 10, 30)
///     .unwrap()
///     .and_hms_opt(1, 1, 1)
///     .unwrap();
///
/// let mut generator = IssueKeyGenerator::seeded(7);
/// let key = generator.generate(Category::Hardware, Priority::High, created_at);
///
/// assert_eq!(key.prefix(), "HW-2022-H");
/// assert_eq!(key.suffix().len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct IssueKeyGenerator<R = ThreadRng> {
    rng: R,
}

impl IssueKeyGenerator<ThreadRng> {
    /// Creates a generator backed by the thread-local RNG.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for IssueKeyGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueKeyGenerator<StdRng> {
    /// Creates a reproducible generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> IssueKeyGenerator<R> {
    /// Creates a generator drawing suffixes from `rng`.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a key for the given category, priority and creation time.
    ///
    /// Inputs are not validated; the closed enums and a well-formed timestamp
    /// are guaranteed by [`Issue`] construction.
    pub fn generate(
        &mut self,
        category: Category,
        priority: Priority,
        created_at: NaiveDateTime,
    ) -> IssueKey {
        let suffix = self.random_suffix();
        let key = IssueKey::from_parts(category, created_at.year(), priority, suffix);
        debug!(key = %key, "Generated issue key");
        key
    }

    /// Generates a fresh key for an existing issue.
    pub fn generate_for(&mut self, issue: &Issue) -> IssueKey {
        self.generate(issue.category(), issue.priority(), issue.created_at())
    }

    fn random_suffix(&mut self) -> String {
        (0..SUFFIX_LEN)
            .map(|_| char::from(self.rng.sample(Alphanumeric)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KEY_LEN;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    fn segments(key: &IssueKey) -> Vec<String> {
        key.to_string().split('-').map(str::to_string).collect()
    }

    #[test]
    fn test_key_has_eighteen_chars() {
        let key =
            IssueKeyGenerator::new().generate(Category::Hardware, Priority::High, at(2022, 10, 30));
        assert_eq!(key.to_string().len(), KEY_LEN);
    }

    #[test]
    fn test_first_segment_matches_category() {
        let cases = [
            (Category::Hardware, "HW"),
            (Category::Software, "SW"),
            (Category::Unknown, "NA"),
        ];
        let mut generator = IssueKeyGenerator::seeded(1);

        for (category, expected) in cases {
            let key = generator.generate(category, Priority::Urgent, at(2022, 10, 30));
            assert_eq!(segments(&key)[0], expected);
        }
    }

    #[test]
    fn test_second_segment_is_year() {
        let key = IssueKeyGenerator::seeded(2).generate(
            Category::Hardware,
            Priority::High,
            at(2022, 10, 30),
        );
        assert_eq!(segments(&key)[1], "2022");
    }

    #[test]
    fn test_third_segment_matches_priority() {
        let cases = [
            (Priority::Urgent, Category::Hardware, "U"),
            (Priority::Medium, Category::Software, "M"),
            (Priority::High, Category::Unknown, "H"),
            (Priority::Low, Category::Unknown, "L"),
        ];
        let mut generator = IssueKeyGenerator::seeded(3);

        for (priority, category, expected) in cases {
            let key = generator.generate(category, priority, at(2022, 10, 30));
            assert_eq!(segments(&key)[2], expected);
        }
    }

    #[test]
    fn test_fourth_segment_is_eight_alphanumerics() {
        let key =
            IssueKeyGenerator::new().generate(Category::Hardware, Priority::Low, at(2022, 10, 11));
        let suffix = &segments(&key)[3];

        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_expected_prefixes() {
        let cases = [
            (Priority::Urgent, Category::Hardware, at(2001, 8, 12), "HW-2001-U"),
            (Priority::Urgent, Category::Software, at(2000, 10, 10), "SW-2000-U"),
            (Priority::Low, Category::Software, at(2022, 10, 10), "SW-2022-L"),
            (Priority::Low, Category::Unknown, at(2018, 10, 10), "NA-2018-L"),
            (Priority::Low, Category::Hardware, at(1992, 10, 10), "HW-1992-L"),
            (Priority::Medium, Category::Hardware, at(2003, 10, 10), "HW-2003-M"),
            (Priority::High, Category::Hardware, at(2015, 10, 10), "HW-2015-H"),
            (Priority::Urgent, Category::Hardware, at(1980, 10, 10), "HW-1980-U"),
        ];
        let mut generator = IssueKeyGenerator::new();

        for (priority, category, created_at, expected) in cases {
            let key = generator.generate(category, priority, created_at);
            assert_eq!(&key.to_string()[..9], expected);
        }
    }

    #[test]
    fn test_same_seed_gives_same_key() {
        let created_at = at(2022, 10, 30);
        let a =
            IssueKeyGenerator::seeded(42).generate(Category::Software, Priority::High, created_at);
        let b =
            IssueKeyGenerator::seeded(42).generate(Category::Software, Priority::High, created_at);
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_rng_uses_supplied_source() {
        let created_at = at(2022, 10, 30);
        let a = IssueKeyGenerator::from_rng(StdRng::seed_from_u64(11)).generate(
            Category::Hardware,
            Priority::Low,
            created_at,
        );
        let b =
            IssueKeyGenerator::seeded(11).generate(Category::Hardware, Priority::Low, created_at);
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_rng_accepts_borrowed_rng() {
        let mut rng = StdRng::seed_from_u64(12);
        let key = IssueKeyGenerator::from_rng(&mut rng).generate(
            Category::Software,
            Priority::Urgent,
            at(2024, 2, 29),
        );
        assert_eq!(key.prefix(), "SW-2024-U");
        assert_eq!(key.suffix().len(), SUFFIX_LEN);
    }

    #[test]
    fn test_successive_keys_share_prefix() {
        let issue = Issue::with_created_at(
            "Issue #2",
            Priority::High,
            Category::Hardware,
            at(2022, 10, 30),
        )
        .unwrap();
        let mut generator = IssueKeyGenerator::seeded(9);

        let first = generator.generate_for(&issue);
        let second = generator.generate_for(&issue);

        assert_eq!(first.prefix(), second.prefix());
        assert_ne!(first.suffix(), second.suffix());
    }

    #[test]
    fn test_generated_key_parses_back() {
        let key =
            IssueKeyGenerator::seeded(5).generate(Category::Unknown, Priority::Medium, at(1999, 1, 1));
        let parsed: IssueKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);
    }

    fn any_category() -> impl Strategy<Value = Category> {
        prop_oneof![
            Just(Category::Hardware),
            Just(Category::Software),
            Just(Category::Unknown),
        ]
    }

    fn any_priority() -> impl Strategy<Value = Priority> {
        prop_oneof![
            Just(Priority::Low),
            Just(Priority::Medium),
            Just(Priority::High),
            Just(Priority::Urgent),
        ]
    }

    proptest! {
        #[test]
        fn prop_key_shape_holds_for_all_inputs(
            category in any_category(),
            priority in any_priority(),
            year in 1000i32..=9999,
            day_of_year in 1u32..=365,
            seed in any::<u64>(),
        ) {
            let created_at = NaiveDate::from_yo_opt(year, day_of_year)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            let key = IssueKeyGenerator::seeded(seed).generate(category, priority, created_at);
            let text = key.to_string();
            let parts: Vec<&str> = text.split('-').collect();

            prop_assert_eq!(text.len(), KEY_LEN);
            prop_assert_eq!(parts.len(), 4);
            prop_assert_eq!(parts[0], category.code());
            prop_assert_eq!(parts[1], year.to_string());
            prop_assert_eq!(parts[2], priority.code());
            prop_assert_eq!(parts[3].len(), SUFFIX_LEN);
            prop_assert!(parts[3].chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
