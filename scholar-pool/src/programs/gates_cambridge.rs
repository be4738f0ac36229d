//! Gates Cambridge - full-cost postgraduate scholarship at the University of Cambridge.
//!
//! No checklist is authored for this program; its dossier keys resolve
//! against the document briefs only.

use crate::compose::{ProgramCore, ProgramParts};
use crate::programs::ProgramProvider;
use crate::types::*;

/// Provider for the Gates Cambridge 2025 round.
pub struct GatesCambridgeProgram;

impl ProgramProvider for GatesCambridgeProgram {
    fn id(&self) -> &'static str {
        "gates-cambridge-2025"
    }

    fn program(&self) -> Program {
        ProgramParts::new(core())
            .with_intel(intel().with_news(news()))
            .with_shadow_protocol(shadow_protocol())
            .assemble()
    }
}

fn core() -> ProgramCore {
    ProgramCore {
        id: "gates-cambridge-2025".to_string(),
        domain: Domain::Scholar,
        title: "Gates Cambridge Scholarship".to_string(),
        organizer: "Gates Cambridge Trust".to_string(),
        organizer_logo: "https://www.gatescambridge.org/wp-content/themes/gates/images/logo.svg".to_string(),
        kind: "Fully Funded".to_string(),
        level: "Postgraduate (MPhil / PhD)".to_string(),
        country: "United Kingdom".to_string(),
        deadline: "2025-12-03T12:00:00Z".to_string(),
        match_score: 96,
        tier: Tier::Mythic,
        difficulty_level: DifficultyLevel::Difficult,
        dossier_requirement_keys: vec![
            "gates_statement".to_string(),
            "research_proposal".to_string(),
            "academic_references".to_string(),
        ],
        apply_url: "https://www.postgraduate.study.cam.ac.uk/".to_string(),
    }
}

fn intel() -> Intel {
    Intel {
        summary: Some(
            "Full-cost scholarships for outstanding applicants from outside the UK to pursue a postgraduate degree at Cambridge.".to_string(),
        ),
        highlights: vec![
            "Covers the full cost of study".to_string(),
            "Lifelong membership in the Gates Cambridge scholar community".to_string(),
        ],
        funding: Some(FundingBreakdown {
            covered: vec![
                FundingItem {
                    label: "University composition fee".to_string(),
                    detail: "At the appropriate rate".to_string(),
                },
                FundingItem {
                    label: "Maintenance".to_string(),
                    detail: "Annual allowance at doctoral level".to_string(),
                },
                FundingItem {
                    label: "Airfare".to_string(),
                    detail: "One economy single at the start and end of the course".to_string(),
                },
                FundingItem {
                    label: "Visa".to_string(),
                    detail: "Inbound visa and immigration health surcharge".to_string(),
                },
            ],
            not_covered: Vec::new(),
        }),
        eligibility: vec![
            EligibilityCriterion {
                label: "Citizenship".to_string(),
                requirement: "Any country outside the UK".to_string(),
            },
            EligibilityCriterion {
                label: "Course".to_string(),
                requirement: "Full-time PhD, MPhil, MSc or MLitt".to_string(),
            },
        ],
        // Milestones were never collected for this round
        timeline: Some(Timeline::default()),
        documents: vec![
            "Gates Cambridge statement".to_string(),
            "Research proposal".to_string(),
            "Academic references".to_string(),
        ],
        stats: Some(IntelStats {
            applicants_per_year: None,
            awardees_per_year: Some(80),
            acceptance_rate: Some("~1.3%".to_string()),
        }),
        news: None,
    }
}

fn news() -> Vec<NewsItem> {
    vec![NewsItem {
        id: "gates-2025-class".to_string(),
        title: "New class of Gates Cambridge Scholars announced".to_string(),
        source: "Gates Cambridge Trust".to_string(),
        published_at: "2025-04-10".to_string(),
        summary: "Scholars from more than 25 countries join the incoming cohort.".to_string(),
        url: Some("https://www.gatescambridge.org/news/".to_string()),
    }]
}

fn shadow_protocol() -> StrategyProtocol {
    StrategyProtocol {
        tips: vec![
            "Apply to the course first; the scholarship is selected from the course application".to_string(),
            "The statement is judged on leadership and commitment to improving the lives of others".to_string(),
        ],
        common_mistakes: vec![
            "Repeating the research proposal inside the Gates statement".to_string(),
            "Referees who only comment on grades".to_string(),
        ],
        doc_briefs: vec![
            DocBrief {
                id: "gates_statement".to_string(),
                title: "Gates Cambridge statement".to_string(),
                brief: "Why you are applying and how the course equips you to improve the lives of others.".to_string(),
                word_limit: Some(500),
            },
            DocBrief {
                id: "research_proposal".to_string(),
                title: "Research proposal".to_string(),
                brief: "Question, method, fit with the department and expected contribution.".to_string(),
                word_limit: Some(1000),
            },
            DocBrief {
                id: "academic_references".to_string(),
                title: "Academic references".to_string(),
                brief: "Three referees; at least one must address leadership and social commitment.".to_string(),
                word_limit: None,
            },
        ],
        interview_cheat_sheet: vec![
            InterviewCue {
                question: "Explain your research to a non-specialist in two minutes.".to_string(),
                angle: "Start from the problem, not the method.".to_string(),
            },
            InterviewCue {
                question: "What does leadership mean to you?".to_string(),
                angle: "Use one specific story with a measurable outcome.".to_string(),
            },
        ],
        success_examples: vec![SuccessExample {
            name: "Scholar, PhD Engineering".to_string(),
            background: "Built low-cost water sensors for rural cooperatives".to_string(),
            takeaway: "The statement connected the research question to people already using the prototype.".to_string(),
        }],
        ghost_tasks: vec![GhostTask {
            id: "contact_supervisor".to_string(),
            label: "Email a prospective supervisor".to_string(),
            lead_days: Some(90),
        }],
    }
}
