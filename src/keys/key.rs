//! The issue key value type.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Category, Priority};

/// Separator placed between key segments.
pub const KEY_SEPARATOR: char = '-';

/// Number of characters in the random suffix.
pub const SUFFIX_LEN: usize = 8;

/// Years that render as exactly four digits in the year segment.
pub const KEY_YEARS: RangeInclusive<i32> = 0..=9999;

/// Total length of a rendered key: `CC-YYYY-P-XXXXXXXX`.
pub const KEY_LEN: usize = 2 + 4 + 1 + SUFFIX_LEN + 3;

/// A structured support ticket identifier.
///
/// Rendered as `<CAT>-<YYYY>-<P>-<RANDOM8>`, for example `HW-2022-H-1234ABCD`.
/// The first three segments are derived from the issue; the suffix is random.
///
/// # Examples
///
/// ```
/// use business_rules::keys::IssueKey;
/// use business_rules::models::{Category, Priority};
///
/// let key: IssueKey = "SW-2000-U-ABCD1234".parse()?;
/// assert_eq!(key.category(), Category::Software);
/// assert_eq!(key.year(), 2000);
/// assert_eq!(key.priority(), Priority::Urgent);
/// assert_eq!(key.suffix(), "ABCD1234");
/// # Ok::<(), business_rules::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueKey {
    category: Category,
    year: i32,
    priority: Priority,
    suffix: String,
}

impl IssueKey {
    pub(crate) fn from_parts(
        category: Category,
        year: i32,
        priority: Priority,
        suffix: String,
    ) -> Self {
        Self {
            category,
            year,
            priority,
            suffix,
        }
    }

    /// Returns the category encoded in the first segment.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the year encoded in the second segment.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the priority encoded in the third segment.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the random suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the deterministic part of the key, e.g. `HW-2022-H`.
    pub fn prefix(&self) -> String {
        format!(
            "{}{sep}{:04}{sep}{}",
            self.category.code(),
            self.year,
            self.priority.code(),
            sep = KEY_SEPARATOR
        )
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix(), KEY_SEPARATOR, self.suffix)
    }
}

impl FromStr for IssueKey {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidIssueKey {
            key: s.to_string(),
            message,
        };

        let segments: Vec<&str> = s.split(KEY_SEPARATOR).collect();
        let [category, year, priority, suffix] = segments.as_slice() else {
            return Err(invalid(format!(
                "expected 4 segments, found {}",
                segments.len()
            )));
        };

        let category = Category::from_code(category)
            .ok_or_else(|| invalid(format!("unknown category code '{category}'")))?;

        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(format!("year segment '{year}' is not four digits")));
        }
        let year: i32 = year
            .parse()
            .map_err(|_| invalid(format!("year segment '{year}' is not a number")))?;

        let priority = Priority::from_code(priority)
            .ok_or_else(|| invalid(format!("unknown priority code '{priority}'")))?;

        if suffix.len() != SUFFIX_LEN || !suffix.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(invalid(format!(
                "suffix '{suffix}' is not {SUFFIX_LEN} alphanumeric characters"
            )));
        }

        Ok(Self::from_parts(category, year, priority, suffix.to_string()))
    }
}

impl TryFrom<String> for IssueKey {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        value.parse()
    }
}

impl From<IssueKey> for String {
    fn from(key: IssueKey) -> Self {
        key.to_string()
    }
}
