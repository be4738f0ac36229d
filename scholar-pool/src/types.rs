//! Core types for the program registry.
//!
//! These types model one scholarship/fellowship opportunity and every block
//! nested inside it. Field names serialize in camelCase because the consuming
//! front-end reads them verbatim.
//!
//! With the `typescript` feature enabled, these types can be exported to TypeScript
//! using ts-rs for consistency with the front-end models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Error returned when a program deadline is not a valid ISO 8601 instant.
#[derive(Debug, thiserror::Error)]
#[error("Invalid deadline '{value}': {source}")]
pub struct DeadlineError {
    /// The raw deadline text
    pub value: String,
    /// Underlying parse failure
    #[source]
    pub source: chrono::ParseError,
}

/// Opportunity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
    /// Degree scholarships
    Scholar,
    /// Fellowships and non-degree programs
    Fellowship,
}

/// Presentation/priority class of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Tier {
    /// Presentation rank (higher = rarer)
    pub fn rank(&self) -> u8 {
        match self {
            Self::Common => 1,
            Self::Rare => 2,
            Self::Epic => 3,
            Self::Legendary => 4,
            Self::Mythic => 5,
        }
    }
}

/// Difficulty label shown alongside a program.
///
/// The set covers every label the authored data uses. `Hard` and `Difficult`
/// are separate values and must round-trip as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
    Difficult,
    Extreme,
}

impl DifficultyLevel {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
            Self::Difficult => "DIFFICULT",
            Self::Extreme => "EXTREME",
        }
    }
}

/// One scholarship/fellowship opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Unique identifier within the registry
    pub id: String,
    pub domain: Domain,
    pub title: String,
    pub organizer: String,
    /// URL of the organizer logo
    pub organizer_logo: String,
    /// Funding type, e.g. "Fully Funded"
    #[serde(rename = "type")]
    pub kind: String,
    /// Degree level, e.g. "Master / Doctoral"
    pub level: String,
    pub country: String,
    /// ISO 8601 instant
    pub deadline: String,
    /// Match score, 0-100
    pub match_score: u8,
    pub tier: Tier,
    pub difficulty_level: DifficultyLevel,
    /// Keys of documents required to apply, in display order
    pub dossier_requirement_keys: Vec<String>,
    pub intel: Intel,
    pub shadow_protocol: StrategyProtocol,
    pub checklist: Vec<ChecklistItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<Curriculum>,
    pub apply_url: String,
}

impl Program {
    /// Parse the deadline as a UTC instant.
    pub fn deadline_at(&self) -> Result<DateTime<Utc>, DeadlineError> {
        DateTime::parse_from_rfc3339(&self.deadline)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|source| DeadlineError {
                value: self.deadline.clone(),
                source,
            })
    }

    /// Ids of checklist items, in order.
    pub fn checklist_ids(&self) -> impl Iterator<Item = &str> {
        self.checklist.iter().map(|item| item.id.as_str())
    }

    /// Ids of document briefs in the shadow protocol, in order.
    pub fn doc_brief_ids(&self) -> impl Iterator<Item = &str> {
        self.shadow_protocol
            .doc_briefs
            .iter()
            .map(|brief| brief.id.as_str())
    }

    /// Check whether a dossier key resolves to a checklist item or document brief.
    pub fn resolves_dossier_key(&self, key: &str) -> bool {
        self.checklist_ids().any(|id| id == key) || self.doc_brief_ids().any(|id| id == key)
    }
}

// ============================================================================
// Intel
// ============================================================================

/// Descriptive and statistical content about a program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Intel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<FundingBreakdown>,
    #[serde(default)]
    pub eligibility: Vec<EligibilityCriterion>,
    /// Partial timelines are common; absent means never collected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    /// Names of documents mentioned by the organizer
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<IntelStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<Vec<NewsItem>>,
}

/// What the award pays for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct FundingBreakdown {
    #[serde(default)]
    pub covered: Vec<FundingItem>,
    #[serde(default)]
    pub not_covered: Vec<String>,
}

/// A single funded cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct FundingItem {
    pub label: String,
    pub detail: String,
}

/// A single eligibility requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct EligibilityCriterion {
    pub label: String,
    pub requirement: String,
}

/// Application timeline. Every milestone is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_opens: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_closes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
}

impl Timeline {
    /// True when no milestone was collected.
    pub fn is_empty(&self) -> bool {
        self.registration_opens.is_none()
            && self.registration_closes.is_none()
            && self.selection.is_none()
            && self.announcement.is_none()
    }
}

/// Selection statistics. Every figure is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct IntelStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicants_per_year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awardees_per_year: Option<u32>,
    /// Human-readable rate, e.g. "~1.3%"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_rate: Option<String>,
}

/// A news entry attached to a program's intel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub published_at: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// ============================================================================
// Shadow protocol
// ============================================================================

/// Advisory content: tips, pitfalls, interview preparation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct StrategyProtocol {
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    /// Writing briefs keyed by dossier requirement key
    #[serde(default)]
    pub doc_briefs: Vec<DocBrief>,
    #[serde(default)]
    pub interview_cheat_sheet: Vec<InterviewCue>,
    #[serde(default)]
    pub success_examples: Vec<SuccessExample>,
    #[serde(default)]
    pub ghost_tasks: Vec<GhostTask>,
}

/// Guidance for preparing one dossier document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DocBrief {
    pub id: String,
    pub title: String,
    pub brief: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_limit: Option<u32>,
}

/// A likely interview question and how to approach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct InterviewCue {
    pub question: String,
    pub angle: String,
}

/// A past awardee profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct SuccessExample {
    pub name: String,
    pub background: String,
    pub takeaway: String,
}

/// Preparation task that is not part of the formal checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct GhostTask {
    pub id: String,
    pub label: String,
    /// Suggested lead time before the deadline, in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_days: Option<u32>,
}

// ============================================================================
// Checklist
// ============================================================================

/// A trackable application task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    /// Effort estimate, e.g. "2 weeks"
    pub estimate: String,
    pub is_completed: bool,
    /// Suggested outline of the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pro_tip: Option<String>,
}

// ============================================================================
// Curriculum
// ============================================================================

/// Learning content tree: units contain chapters contain points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    pub title: String,
    pub units: Vec<Unit>,
}

impl Curriculum {
    /// Total number of leaf points.
    pub fn point_count(&self) -> usize {
        self.units
            .iter()
            .flat_map(|unit| &unit.chapters)
            .map(|chapter| chapter.points.len())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub title: String,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub id: String,
    pub text: String,
}
