//! LPDP Reguler - Indonesia's flagship fully funded master and doctoral scholarship.

use crate::compose::{IntelOverrides, ProgramCore, ProgramParts};
use crate::programs::ProgramProvider;
use crate::types::*;

/// Provider for the LPDP Reguler 2026 intake.
pub struct LpdpRegulerProgram;

impl ProgramProvider for LpdpRegulerProgram {
    fn id(&self) -> &'static str {
        "lpdp-reguler-2026"
    }

    fn program(&self) -> Program {
        ProgramParts::new(core())
            .with_intel(intel())
            .override_intel(IntelOverrides::news(news()))
            .with_shadow_protocol(shadow_protocol())
            .with_checklist(checklist())
            .with_curriculum(curriculum())
            .assemble()
    }
}

fn core() -> ProgramCore {
    ProgramCore {
        id: "lpdp-reguler-2026".to_string(),
        domain: Domain::Scholar,
        title: "LPDP Reguler 2026".to_string(),
        organizer: "Lembaga Pengelola Dana Pendidikan (LPDP)".to_string(),
        organizer_logo: "https://lpdp.kemenkeu.go.id/storage/logo/logo-lpdp.png".to_string(),
        kind: "Fully Funded".to_string(),
        level: "Master / Doctoral".to_string(),
        country: "Indonesia / Global".to_string(),
        deadline: "2026-03-31T16:59:59Z".to_string(),
        match_score: 88,
        tier: Tier::Rare,
        difficulty_level: DifficultyLevel::Hard,
        dossier_requirement_keys: vec![
            "personal_statement".to_string(),
            "study_plan".to_string(),
            "commitment_letter".to_string(),
            "lang_english".to_string(),
            "recommendation_letter".to_string(),
        ],
        apply_url: "https://beasiswalpdp.kemenkeu.go.id".to_string(),
    }
}

fn intel() -> Intel {
    Intel {
        summary: Some(
            "Government endowment scholarship for Indonesian citizens pursuing a master or doctoral degree at a top domestic or overseas university.".to_string(),
        ),
        highlights: vec![
            "Full tuition plus living allowance for the entire study period".to_string(),
            "Open to domestic and overseas universities on the LPDP list".to_string(),
            "Two selection rounds per year".to_string(),
        ],
        funding: Some(FundingBreakdown {
            covered: vec![
                FundingItem {
                    label: "Tuition".to_string(),
                    detail: "Paid directly to the university".to_string(),
                },
                FundingItem {
                    label: "Living allowance".to_string(),
                    detail: "Monthly, indexed to the host city".to_string(),
                },
                FundingItem {
                    label: "Travel".to_string(),
                    detail: "Round-trip economy airfare".to_string(),
                },
                FundingItem {
                    label: "Settlement".to_string(),
                    detail: "One-off arrival allowance".to_string(),
                },
            ],
            not_covered: vec!["Dependants' living costs".to_string()],
        }),
        eligibility: vec![
            EligibilityCriterion {
                label: "Citizenship".to_string(),
                requirement: "Indonesian citizen".to_string(),
            },
            EligibilityCriterion {
                label: "Age".to_string(),
                requirement: "Max 35 (master) / 40 (doctoral) on 31 December".to_string(),
            },
            EligibilityCriterion {
                label: "GPA".to_string(),
                requirement: "Min 3.00 (master) / 3.25 (doctoral) on a 4.00 scale".to_string(),
            },
            EligibilityCriterion {
                label: "English".to_string(),
                requirement: "IELTS 6.5 / TOEFL iBT 80 for overseas study".to_string(),
            },
        ],
        timeline: Some(Timeline {
            registration_opens: Some("2026-01-15".to_string()),
            registration_closes: Some("2026-03-31".to_string()),
            selection: Some("April - June 2026".to_string()),
            announcement: Some("July 2026".to_string()),
        }),
        documents: vec![
            "KTP".to_string(),
            "Transcript".to_string(),
            "Degree certificate".to_string(),
            "Language certificate".to_string(),
            "Recommendation letter".to_string(),
            "Personal statement".to_string(),
            "Study plan".to_string(),
            "Commitment letter".to_string(),
        ],
        stats: Some(IntelStats {
            applicants_per_year: Some(40_000),
            awardees_per_year: Some(4_000),
            acceptance_rate: Some("~10%".to_string()),
        }),
        news: None,
    }
}

fn news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "lpdp-2026-batch1-open".to_string(),
            title: "LPDP opens first 2026 registration batch".to_string(),
            source: "LPDP".to_string(),
            published_at: "2026-01-15".to_string(),
            summary: "Registration for the first 2026 batch is open for all reguler tracks.".to_string(),
            url: Some("https://lpdp.kemenkeu.go.id/berita".to_string()),
        },
        NewsItem {
            id: "lpdp-2026-priority-fields".to_string(),
            title: "Priority study fields announced".to_string(),
            source: "LPDP".to_string(),
            published_at: "2026-01-20".to_string(),
            summary: "STEM, health and teacher education receive priority quota this year.".to_string(),
            url: None,
        },
    ]
}

fn shadow_protocol() -> StrategyProtocol {
    StrategyProtocol {
        tips: vec![
            "Tie every essay paragraph back to a concrete contribution to Indonesia".to_string(),
            "Book the language test early, results can take two weeks".to_string(),
            "Rehearse the interview in Bahasa Indonesia and English".to_string(),
        ],
        common_mistakes: vec![
            "Generic study plan that could apply to any university".to_string(),
            "Recommendation letters without letterhead or signature".to_string(),
            "Uploading an expired language certificate".to_string(),
        ],
        doc_briefs: vec![
            DocBrief {
                id: "personal_statement".to_string(),
                title: "Kontribusiku bagi Indonesia".to_string(),
                brief: "Past contributions, current role and the concrete impact you plan after graduation.".to_string(),
                word_limit: Some(1500),
            },
            DocBrief {
                id: "study_plan".to_string(),
                title: "Rencana Studi".to_string(),
                brief: "Why this program and university, course choices, research focus and timeline.".to_string(),
                word_limit: Some(1500),
            },
            DocBrief {
                id: "commitment_letter".to_string(),
                title: "Surat Pernyataan Komitmen".to_string(),
                brief: "Signed statement to return and serve in Indonesia after the study period.".to_string(),
                word_limit: None,
            },
        ],
        interview_cheat_sheet: vec![
            InterviewCue {
                question: "Why should LPDP fund you rather than another candidate?".to_string(),
                angle: "Lead with a track record of contribution, not with need.".to_string(),
            },
            InterviewCue {
                question: "What will you do if you fail a course abroad?".to_string(),
                angle: "Show a recovery plan and support network.".to_string(),
            },
        ],
        success_examples: vec![SuccessExample {
            name: "Awardee, MSc Public Health".to_string(),
            background: "Puskesmas doctor in eastern Indonesia".to_string(),
            takeaway: "Framed every answer around a district health problem she had already started solving.".to_string(),
        }],
        ghost_tasks: vec![
            GhostTask {
                id: "book_ielts".to_string(),
                label: "Book IELTS test date".to_string(),
                lead_days: Some(60),
            },
            GhostTask {
                id: "ask_referees".to_string(),
                label: "Ask referees for letters".to_string(),
                lead_days: Some(30),
            },
        ],
    }
}

fn checklist() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem {
            id: "personal_statement".to_string(),
            label: "Personal statement".to_string(),
            estimate: "2 weeks".to_string(),
            is_completed: false,
            structure: Some(vec![
                "Who you are".to_string(),
                "What you have contributed".to_string(),
                "What you will contribute".to_string(),
            ]),
            pro_tip: Some("Use numbers: people served, budgets managed, outcomes.".to_string()),
        },
        ChecklistItem {
            id: "study_plan".to_string(),
            label: "Study plan".to_string(),
            estimate: "1 week".to_string(),
            is_completed: false,
            structure: None,
            pro_tip: Some("Name specific modules and supervisors.".to_string()),
        },
        ChecklistItem {
            id: "lang_english".to_string(),
            label: "English proficiency certificate".to_string(),
            estimate: "1-2 months".to_string(),
            is_completed: false,
            structure: None,
            pro_tip: None,
        },
        ChecklistItem {
            id: "recommendation_letter".to_string(),
            label: "Recommendation letter".to_string(),
            estimate: "2 weeks".to_string(),
            is_completed: false,
            structure: None,
            pro_tip: Some("Give your referee a one-page summary of your achievements.".to_string()),
        },
    ]
}

fn curriculum() -> Curriculum {
    Curriculum {
        title: "LPDP Selection Bootcamp".to_string(),
        units: vec![
            Unit {
                id: "unit-admin".to_string(),
                title: "Administrative Selection".to_string(),
                chapters: vec![Chapter {
                    id: "ch-documents".to_string(),
                    title: "Preparing the dossier".to_string(),
                    points: vec![
                        Point {
                            id: "pt-scan".to_string(),
                            text: "Scan originals in colour, under 500 KB per file".to_string(),
                        },
                        Point {
                            id: "pt-naming".to_string(),
                            text: "Match names exactly across KTP, transcript and certificates".to_string(),
                        },
                    ],
                }],
            },
            Unit {
                id: "unit-substance".to_string(),
                title: "Substance Selection".to_string(),
                chapters: vec![
                    Chapter {
                        id: "ch-interview".to_string(),
                        title: "Interview".to_string(),
                        points: vec![
                            Point {
                                id: "pt-star".to_string(),
                                text: "Answer with situation, task, action, result".to_string(),
                            },
                            Point {
                                id: "pt-panel".to_string(),
                                text: "Expect a psychologist, an academic and a practitioner on the panel".to_string(),
                            },
                        ],
                    },
                    Chapter {
                        id: "ch-lgd".to_string(),
                        title: "Leaderless group discussion".to_string(),
                        points: vec![Point {
                            id: "pt-listen".to_string(),
                            text: "Synthesize others' points before adding your own".to_string(),
                        }],
                    },
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lpdp_reguler_program() {
        let program = LpdpRegulerProgram.program();
        assert_eq!(program.id, "lpdp-reguler-2026");
        assert_eq!(program.tier, Tier::Rare);
        assert_eq!(program.difficulty_level, DifficultyLevel::Hard);

        // News is merged over the descriptive intel fragment
        assert_eq!(program.intel.news.as_ref().map(|n| n.len()), Some(2));
        assert!(program.intel.summary.is_some());

        let curriculum = program.curriculum.expect("curriculum");
        assert_eq!(curriculum.units.len(), 2);
        assert_eq!(curriculum.point_count(), 5);
    }
}
