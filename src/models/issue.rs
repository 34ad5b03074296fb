//! Support ticket model.
//!
//! This module defines the [`Issue`] type together with its closed
//! [`Priority`] and [`Category`] sets and the unvalidated [`IssueDraft`]
//! form used when reading tickets from external input.

use chrono::{Datelike, Local, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::keys::{IssueKey, IssueKeyGenerator, KEY_YEARS};

/// How urgently an issue needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal handling.
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs immediate attention.
    Urgent,
}

impl Priority {
    /// Returns the single-letter code used in issue keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use business_rules::models::Priority;
    ///
    /// assert_eq!(Priority::Urgent.code(), "U");
    /// assert_eq!(Priority::Low.code(), "L");
    /// ```
    pub fn code(self) -> &'static str {
        match self {
            Priority::Urgent => "U",
            Priority::High => "H",
            Priority::Medium => "M",
            Priority::Low => "L",
        }
    }

    /// Looks up a priority by its key code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "U" => Some(Priority::Urgent),
            "H" => Some(Priority::High),
            "M" => Some(Priority::Medium),
            "L" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// The area an issue belongs to.
///
/// Unrecognized category names in input deserialize to [`Category::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Physical equipment.
    Hardware,
    /// Applications and services.
    Software,
    /// Not classified.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Category {
    /// Returns the two-letter code used in issue keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use business_rules::models::Category;
    ///
    /// assert_eq!(Category::Hardware.code(), "HW");
    /// assert_eq!(Category::Unknown.code(), "NA");
    /// ```
    pub fn code(self) -> &'static str {
        match self {
            Category::Hardware => "HW",
            Category::Software => "SW",
            Category::Unknown => "NA",
        }
    }

    /// Looks up a category by its key code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "HW" => Some(Category::Hardware),
            "SW" => Some(Category::Software),
            "NA" => Some(Category::Unknown),
            _ => None,
        }
    }
}

/// Unvalidated issue input, as read from JSON or YAML.
///
/// Converting a draft into an [`Issue`] enforces the description invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueDraft {
    /// The problem description; must be present and not blank.
    #[serde(default)]
    pub description: Option<String>,
    /// The requested priority.
    pub priority: Priority,
    /// The issue category.
    #[serde(default)]
    pub category: Category,
    /// When the issue was raised; defaults to now.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// A validated support ticket with its key.
///
/// The key is generated once during construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    id: Uuid,
    description: String,
    priority: Priority,
    category: Category,
    created_at: NaiveDateTime,
    key: IssueKey,
}

impl Issue {
    /// Creates an issue raised now.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIssueDescription` if `description` is empty or whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use business_rules::models::{Category, Issue, Priority};
    ///
    /// let issue = Issue::new("Printer on fire", Priority::Urgent, Category::Hardware)?;
    /// assert!(issue.key().to_string().starts_with("HW-"));
    /// # Ok::<(), business_rules::error::EngineError>(())
    /// ```
    pub fn new(description: &str, priority: Priority, category: Category) -> EngineResult<Self> {
        Self::build(
            Some(description),
            priority,
            category,
            None,
            &mut IssueKeyGenerator::new(),
        )
    }

    /// Creates an issue with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIssueDescription` for a blank description and
    /// `InvalidIssueTimestamp` when the year does not fit four digits.
    pub fn with_created_at(
        description: &str,
        priority: Priority,
        category: Category,
        created_at: NaiveDateTime,
    ) -> EngineResult<Self> {
        Self::build(
            Some(description),
            priority,
            category,
            Some(created_at),
            &mut IssueKeyGenerator::new(),
        )
    }

    /// Creates an issue whose key suffix is drawn from `generator`.
    ///
    /// `description` may be absent, in which case construction fails.
    pub fn build<R: Rng>(
        description: Option<&str>,
        priority: Priority,
        category: Category,
        created_at: Option<NaiveDateTime>,
        generator: &mut IssueKeyGenerator<R>,
    ) -> EngineResult<Self> {
        let description = match description {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => {
                warn!(?priority, ?category, "Rejected issue without a description");
                return Err(EngineError::InvalidIssueDescription);
            }
        };

        let created_at = created_at.unwrap_or_else(|| Local::now().naive_local());
        if !KEY_YEARS.contains(&created_at.year()) {
            warn!(year = created_at.year(), "Rejected issue with unencodable creation year");
            return Err(EngineError::InvalidIssueTimestamp {
                year: created_at.year(),
            });
        }

        let key = generator.generate(category, priority, created_at);

        Ok(Self {
            id: Uuid::new_v4(),
            description,
            priority,
            category,
            created_at,
            key,
        })
    }

    /// Derives a fresh key from this issue's fields.
    ///
    /// The category, year and priority segments always match [`Issue::key`];
    /// the random suffix is drawn anew on every call.
    pub fn generate_key(&self) -> IssueKey {
        IssueKeyGenerator::new().generate_for(self)
    }

    /// Returns the unique identifier of this issue.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns when the issue was raised.
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Returns the key assigned at construction.
    pub fn key(&self) -> &IssueKey {
        &self.key
    }
}

impl TryFrom<IssueDraft> for Issue {
    type Error = EngineError;

    fn try_from(draft: IssueDraft) -> EngineResult<Self> {
        Self::build(
            draft.description.as_deref(),
            draft.priority,
            draft.category,
            draft.created_at,
            &mut IssueKeyGenerator::new(),
        )
    }
}
