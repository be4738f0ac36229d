//! LPDP Entrepreneurship - scholarship track for founders with a running business.

use crate::compose::{IntelOverrides, ProgramCore, ProgramParts};
use crate::programs::ProgramProvider;
use crate::types::*;

/// Provider for the LPDP Entrepreneurship 2025 intake.
pub struct LpdpEntrepreneurProgram;

impl ProgramProvider for LpdpEntrepreneurProgram {
    fn id(&self) -> &'static str {
        "lpdp-entrepreneur-2025"
    }

    fn program(&self) -> Program {
        ProgramParts::new(core())
            .with_intel(intel())
            .override_intel(IntelOverrides::news(news()))
            .with_shadow_protocol(shadow_protocol())
            .with_checklist(checklist())
            .assemble()
    }
}

fn core() -> ProgramCore {
    ProgramCore {
        id: "lpdp-entrepreneur-2025".to_string(),
        domain: Domain::Scholar,
        title: "LPDP Entrepreneurship 2025".to_string(),
        organizer: "Lembaga Pengelola Dana Pendidikan (LPDP)".to_string(),
        organizer_logo: "https://lpdp.kemenkeu.go.id/storage/logo/logo-lpdp.png".to_string(),
        kind: "Fully Funded".to_string(),
        level: "Master".to_string(),
        country: "Indonesia / Global".to_string(),
        deadline: "2025-08-15T16:59:59Z".to_string(),
        match_score: 74,
        tier: Tier::Epic,
        difficulty_level: DifficultyLevel::Medium,
        dossier_requirement_keys: vec![
            "business_plan".to_string(),
            "commitment_letter".to_string(),
            "lang_english".to_string(),
            "pitch_deck".to_string(),
        ],
        apply_url: "https://beasiswalpdp.kemenkeu.go.id".to_string(),
    }
}

fn intel() -> Intel {
    Intel {
        summary: Some(
            "Targeted LPDP track for entrepreneurs who want a master degree to scale an existing business.".to_string(),
        ),
        highlights: vec![
            "Business must be operating for at least two years".to_string(),
            "Study programs focused on business, management and technology".to_string(),
        ],
        funding: None,
        eligibility: vec![
            EligibilityCriterion {
                label: "Business".to_string(),
                requirement: "Registered business with at least two years of activity".to_string(),
            },
            EligibilityCriterion {
                label: "Role".to_string(),
                requirement: "Founder or co-founder".to_string(),
            },
        ],
        timeline: Some(Timeline {
            registration_opens: Some("2025-07-01".to_string()),
            registration_closes: Some("2025-08-15".to_string()),
            selection: None,
            announcement: None,
        }),
        documents: vec![
            "Business plan".to_string(),
            "Business registration (NIB)".to_string(),
            "Commitment letter".to_string(),
            "Language certificate".to_string(),
        ],
        stats: None,
        news: None,
    }
}

fn news() -> Vec<NewsItem> {
    vec![NewsItem {
        id: "lpdp-entrepreneur-2025-open".to_string(),
        title: "Entrepreneurship track returns in batch 2".to_string(),
        source: "LPDP".to_string(),
        published_at: "2025-07-01".to_string(),
        summary: "The targeted track for founders reopens with a dedicated interview panel.".to_string(),
        url: None,
    }]
}

fn shadow_protocol() -> StrategyProtocol {
    StrategyProtocol {
        tips: vec![
            "Show revenue and employee numbers, not only vision".to_string(),
            "Explain exactly which module unlocks the next growth stage".to_string(),
        ],
        common_mistakes: vec!["Business plan copied from a competition submission".to_string()],
        doc_briefs: vec![
            DocBrief {
                id: "business_plan".to_string(),
                title: "Business plan".to_string(),
                brief: "Market, traction, financials for the last two years and the post-study plan.".to_string(),
                word_limit: None,
            },
            DocBrief {
                id: "pitch_deck".to_string(),
                title: "Pitch deck".to_string(),
                brief: "Ten slides maximum, used during the substance interview.".to_string(),
                word_limit: None,
            },
        ],
        interview_cheat_sheet: vec![InterviewCue {
            question: "Who runs the business while you study?".to_string(),
            angle: "Name the person and the handover plan.".to_string(),
        }],
        success_examples: Vec::new(),
        ghost_tasks: vec![GhostTask {
            id: "financial_statements".to_string(),
            label: "Collect two years of financial statements".to_string(),
            lead_days: None,
        }],
    }
}

fn checklist() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem {
            id: "business_plan".to_string(),
            label: "Business plan".to_string(),
            estimate: "3 weeks".to_string(),
            is_completed: false,
            structure: Some(vec![
                "Problem and market".to_string(),
                "Traction".to_string(),
                "Financials".to_string(),
                "Growth plan after graduation".to_string(),
            ]),
            pro_tip: Some("Attach audited numbers where you have them.".to_string()),
        },
        ChecklistItem {
            id: "commitment_letter".to_string(),
            label: "Commitment letter".to_string(),
            estimate: "1 day".to_string(),
            is_completed: false,
            structure: None,
            pro_tip: None,
        },
        ChecklistItem {
            id: "lang_english".to_string(),
            label: "English proficiency certificate".to_string(),
            estimate: "1-2 months".to_string(),
            is_completed: false,
            structure: None,
            pro_tip: Some("IELTS 6.5 or TOEFL iBT 80 for overseas universities.".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lpdp_entrepreneur_checklist_order() {
        let program = LpdpEntrepreneurProgram.program();
        let ids: Vec<&str> = program.checklist_ids().collect();
        assert_eq!(ids, vec!["business_plan", "commitment_letter", "lang_english"]);
    }
}
