//! Data-quality checks over a set of program records.
//!
//! Checking never fails; it collects findings. Whether a finding blocks a
//! registry build is decided by [`crate::config::IntegrityPolicy`].

use std::collections::HashSet;
use std::fmt;

use crate::types::Program;

/// Highest valid match score.
pub const MAX_MATCH_SCORE: u8 = 100;

/// A single data-quality problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityFinding {
    /// A program has an empty id
    EmptyId { index: usize },
    /// Two or more programs share an id
    DuplicateId { id: String },
    /// Deadline is not an ISO 8601 instant
    InvalidDeadline { program_id: String, value: String },
    /// Match score above 100
    MatchScoreOutOfRange { program_id: String, score: u8 },
    /// Dossier key matches neither a checklist item nor a document brief
    UnresolvedDossierKey { program_id: String, key: String },
}

impl fmt::Display for IntegrityFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId { index } => write!(f, "program at index {} has an empty id", index),
            Self::DuplicateId { id } => write!(f, "duplicate program id '{}'", id),
            Self::InvalidDeadline { program_id, value } => {
                write!(f, "program '{}' has invalid deadline '{}'", program_id, value)
            }
            Self::MatchScoreOutOfRange { program_id, score } => write!(
                f,
                "program '{}' has match score {} outside 0-{}",
                program_id, score, MAX_MATCH_SCORE
            ),
            Self::UnresolvedDossierKey { program_id, key } => write!(
                f,
                "program '{}' requires '{}' but no checklist item or doc brief has that id",
                program_id, key
            ),
        }
    }
}

/// Findings from checking a program set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    findings: Vec<IntegrityFinding>,
}

impl IntegrityReport {
    /// Check every program and collect findings in program order.
    pub fn check(programs: &[Program]) -> Self {
        let mut findings = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut reported: HashSet<&str> = HashSet::new();

        for (index, program) in programs.iter().enumerate() {
            if program.id.is_empty() {
                findings.push(IntegrityFinding::EmptyId { index });
            } else if !seen.insert(program.id.as_str()) && reported.insert(program.id.as_str()) {
                findings.push(IntegrityFinding::DuplicateId {
                    id: program.id.clone(),
                });
            }

            if program.deadline_at().is_err() {
                findings.push(IntegrityFinding::InvalidDeadline {
                    program_id: program.id.clone(),
                    value: program.deadline.clone(),
                });
            }

            if program.match_score > MAX_MATCH_SCORE {
                findings.push(IntegrityFinding::MatchScoreOutOfRange {
                    program_id: program.id.clone(),
                    score: program.match_score,
                });
            }

            for key in &program.dossier_requirement_keys {
                if !program.resolves_dossier_key(key) {
                    findings.push(IntegrityFinding::UnresolvedDossierKey {
                        program_id: program.id.clone(),
                        key: key.clone(),
                    });
                }
            }
        }

        Self { findings }
    }

    /// Check if no findings were collected.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// All findings, in program order.
    pub fn findings(&self) -> &[IntegrityFinding] {
        &self.findings
    }

    /// Only the unresolved dossier key findings.
    pub fn unresolved_dossier_keys(&self) -> impl Iterator<Item = &IntegrityFinding> {
        self.findings
            .iter()
            .filter(|f| matches!(f, IntegrityFinding::UnresolvedDossierKey { .. }))
    }

    /// Emit every finding as a warning.
    pub fn log(&self) {
        for finding in &self.findings {
            tracing::warn!(finding = %finding, "Program data-quality finding");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::programs::{GatesCambridgeProgram, LpdpEntrepreneurProgram, ProgramProvider};

    #[test]
    fn test_authored_programs_are_clean() {
        let programs = vec![GatesCambridgeProgram.program(), LpdpEntrepreneurProgram.program()];
        let report = IntegrityReport::check(&programs);
        assert!(report.is_clean(), "findings: {:?}", report.findings());
    }

    #[test]
    fn test_unresolved_dossier_key_is_reported() {
        let mut program = LpdpEntrepreneurProgram.program();
        program.dossier_requirement_keys.push("tax_return".to_string());

        let report = IntegrityReport::check(&[program]);
        let unresolved: Vec<_> = report.unresolved_dossier_keys().collect();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(
            unresolved[0],
            &IntegrityFinding::UnresolvedDossierKey {
                program_id: "lpdp-entrepreneur-2025".to_string(),
                key: "tax_return".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_reported_once() {
        let program = GatesCambridgeProgram.program();
        let report =
            IntegrityReport::check(&[program.clone(), program.clone(), program]);
        assert_eq!(
            report.findings(),
            &[IntegrityFinding::DuplicateId {
                id: "gates-cambridge-2025".to_string()
            }]
        );
    }

    #[test]
    fn test_bad_fields_reported() {
        let mut program = GatesCambridgeProgram.program();
        program.id = String::new();
        program.deadline = "next tuesday".to_string();
        program.match_score = 140;

        let report = IntegrityReport::check(&[program]);
        assert_eq!(report.findings().len(), 3);
        assert!(report.findings().contains(&IntegrityFinding::EmptyId { index: 0 }));
        assert!(report
            .findings()
            .iter()
            .any(|f| f.to_string().contains("next tuesday")));
    }
}
