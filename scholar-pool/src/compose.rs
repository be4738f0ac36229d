//! Fragment composition.
//!
//! Programs are authored as separate named fragments (core metadata, intel,
//! news, shadow protocol, checklist, curriculum) and assembled here. Merging
//! is shallow and last-write-wins: an override either replaces a field or
//! leaves the inherited value untouched.

use crate::types::*;

/// Field-by-field overrides for an [`Intel`] fragment.
///
/// Every `Intel` field has a slot. `None` inherits the base value, `Some`
/// replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntelOverrides {
    pub summary: Option<Option<String>>,
    pub highlights: Option<Vec<String>>,
    pub funding: Option<Option<FundingBreakdown>>,
    pub eligibility: Option<Vec<EligibilityCriterion>>,
    pub timeline: Option<Option<Timeline>>,
    pub documents: Option<Vec<String>>,
    pub stats: Option<Option<IntelStats>>,
    pub news: Option<Option<Vec<NewsItem>>>,
}

impl IntelOverrides {
    /// Overrides that only set the news feed.
    pub fn news(news: Vec<NewsItem>) -> Self {
        Self {
            news: Some(Some(news)),
            ..Default::default()
        }
    }

    /// Builder: override highlights.
    pub fn with_highlights(mut self, highlights: Vec<String>) -> Self {
        self.highlights = Some(highlights);
        self
    }

    /// Builder: override the timeline.
    pub fn with_timeline(mut self, timeline: Option<Timeline>) -> Self {
        self.timeline = Some(timeline);
        self
    }

    /// Builder: override stats.
    pub fn with_stats(mut self, stats: Option<IntelStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Check if nothing is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Intel {
    /// Apply overrides on top of this fragment.
    pub fn with_overrides(self, overrides: IntelOverrides) -> Self {
        Self {
            summary: overrides.summary.unwrap_or(self.summary),
            highlights: overrides.highlights.unwrap_or(self.highlights),
            funding: overrides.funding.unwrap_or(self.funding),
            eligibility: overrides.eligibility.unwrap_or(self.eligibility),
            timeline: overrides.timeline.unwrap_or(self.timeline),
            documents: overrides.documents.unwrap_or(self.documents),
            stats: overrides.stats.unwrap_or(self.stats),
            news: overrides.news.unwrap_or(self.news),
        }
    }

    /// Attach a news feed, replacing any the fragment already had.
    pub fn with_news(self, news: Vec<NewsItem>) -> Self {
        self.with_overrides(IntelOverrides::news(news))
    }
}

/// Core metadata fragment of a program.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramCore {
    pub id: String,
    pub domain: Domain,
    pub title: String,
    pub organizer: String,
    pub organizer_logo: String,
    pub kind: String,
    pub level: String,
    pub country: String,
    pub deadline: String,
    pub match_score: u8,
    pub tier: Tier,
    pub difficulty_level: DifficultyLevel,
    pub dossier_requirement_keys: Vec<String>,
    pub apply_url: String,
}

/// All named fragments of one program.
#[derive(Debug, Clone)]
pub struct ProgramParts {
    pub core: ProgramCore,
    pub intel: Intel,
    pub shadow_protocol: StrategyProtocol,
    pub checklist: Vec<ChecklistItem>,
    pub curriculum: Option<Curriculum>,
}

impl ProgramParts {
    /// Start from the core fragment with empty content blocks.
    pub fn new(core: ProgramCore) -> Self {
        Self {
            core,
            intel: Intel::default(),
            shadow_protocol: StrategyProtocol::default(),
            checklist: Vec::new(),
            curriculum: None,
        }
    }

    /// Builder: set the intel block.
    pub fn with_intel(mut self, intel: Intel) -> Self {
        self.intel = intel;
        self
    }

    /// Builder: merge overrides into the current intel block.
    pub fn override_intel(mut self, overrides: IntelOverrides) -> Self {
        self.intel = self.intel.with_overrides(overrides);
        self
    }

    /// Builder: set the shadow protocol block.
    pub fn with_shadow_protocol(mut self, protocol: StrategyProtocol) -> Self {
        self.shadow_protocol = protocol;
        self
    }

    /// Builder: set the checklist.
    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = checklist;
        self
    }

    /// Builder: attach a curriculum.
    pub fn with_curriculum(mut self, curriculum: Curriculum) -> Self {
        self.curriculum = Some(curriculum);
        self
    }

    /// Assemble the full program record.
    pub fn assemble(self) -> Program {
        let ProgramParts {
            core,
            intel,
            shadow_protocol,
            checklist,
            curriculum,
        } = self;

        Program {
            id: core.id,
            domain: core.domain,
            title: core.title,
            organizer: core.organizer,
            organizer_logo: core.organizer_logo,
            kind: core.kind,
            level: core.level,
            country: core.country,
            deadline: core.deadline,
            match_score: core.match_score,
            tier: core.tier,
            difficulty_level: core.difficulty_level,
            dossier_requirement_keys: core.dossier_requirement_keys,
            intel,
            shadow_protocol,
            checklist,
            curriculum,
            apply_url: core.apply_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_intel() -> Intel {
        Intel {
            summary: Some("Base summary".to_string()),
            highlights: vec!["base".to_string()],
            timeline: Some(Timeline::default()),
            documents: vec!["Passport".to_string()],
            ..Default::default()
        }
    }

    fn news_item(id: &str) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: format!("News {}", id),
            source: "Test".to_string(),
            published_at: "2025-01-01".to_string(),
            summary: "Summary".to_string(),
            url: None,
        }
    }

    #[test]
    fn test_empty_overrides_inherit_everything() {
        let intel = base_intel();
        assert!(IntelOverrides::default().is_empty());
        assert_eq!(intel.clone().with_overrides(IntelOverrides::default()), intel);
    }

    #[test]
    fn test_news_override_keeps_other_fields() {
        let intel = base_intel().with_news(vec![news_item("n1")]);

        assert_eq!(intel.summary.as_deref(), Some("Base summary"));
        assert_eq!(intel.highlights, vec!["base".to_string()]);
        assert_eq!(intel.news.as_ref().map(|n| n.len()), Some(1));
    }

    #[test]
    fn test_last_write_wins() {
        let intel = base_intel()
            .with_news(vec![news_item("first")])
            .with_overrides(IntelOverrides::news(vec![news_item("second")]));

        let news = intel.news.unwrap();
        assert_eq!(news.len(), 1);
        assert_eq!(news[0].id, "second");
    }

    #[test]
    fn test_builders_compose() {
        let overrides = IntelOverrides::default()
            .with_highlights(vec!["new".to_string()])
            .with_stats(Some(IntelStats {
                awardees_per_year: Some(10),
                ..Default::default()
            }));
        let intel = base_intel().with_overrides(overrides);

        assert_eq!(intel.highlights, vec!["new".to_string()]);
        assert_eq!(intel.stats.and_then(|s| s.awardees_per_year), Some(10));
        assert_eq!(intel.summary.as_deref(), Some("Base summary"));
    }

    #[test]
    fn test_override_can_clear_optional_field() {
        let intel = base_intel().with_overrides(IntelOverrides::default().with_timeline(None));
        assert!(intel.timeline.is_none());
        assert_eq!(intel.documents, vec!["Passport".to_string()]);
    }

    #[test]
    fn test_assemble_carries_core_fields() {
        let core = ProgramCore {
            id: "demo-2025".to_string(),
            domain: Domain::Fellowship,
            title: "Demo".to_string(),
            organizer: "Org".to_string(),
            organizer_logo: "https://example.org/logo.png".to_string(),
            kind: "Partial".to_string(),
            level: "Master".to_string(),
            country: "Nowhere".to_string(),
            deadline: "2025-06-30T23:59:59Z".to_string(),
            match_score: 50,
            tier: Tier::Common,
            difficulty_level: DifficultyLevel::Easy,
            dossier_requirement_keys: vec!["cv".to_string()],
            apply_url: "https://example.org/apply".to_string(),
        };

        let program = ProgramParts::new(core)
            .with_intel(base_intel())
            .override_intel(IntelOverrides::news(vec![news_item("n1")]))
            .assemble();

        assert_eq!(program.id, "demo-2025");
        assert_eq!(program.kind, "Partial");
        assert!(program.checklist.is_empty());
        assert!(program.curriculum.is_none());
        assert!(program.intel.news.is_some());
    }
}
