//! Program registry assembly.
//!
//! The registry is the ordered pool of every authored program. It is built
//! once from providers and never mutated afterwards.

use std::sync::OnceLock;

use crate::codec::{compute_hash, hash_program, CodecError};
use crate::config::{IntegrityPolicy, RegistryConfig};
use crate::integrity::{IntegrityFinding, IntegrityReport};
use crate::programs::{default_providers, ProgramProvider};
use crate::types::Program;

/// Error types for registry assembly.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A program has an empty id
    #[error("Program at index {0} has an empty id")]
    EmptyId(usize),

    /// Two programs share an id
    #[error("Duplicate program id: {0}")]
    DuplicateId(String),

    /// Integrity findings under the enforce policy
    #[error("Integrity check failed with {} finding(s)", .0.len())]
    Integrity(Vec<IntegrityFinding>),

    /// Fingerprint computation failed
    #[error("Failed to fingerprint registry: {0}")]
    Fingerprint(#[from] CodecError),
}

static POOL: OnceLock<ProgramRegistry> = OnceLock::new();

/// The process-wide registry of authored programs.
pub fn pool() -> &'static ProgramRegistry {
    POOL.get_or_init(|| ProgramRegistry::from_providers(&default_providers()))
}

/// Get all programs, in registry order.
pub fn all_programs() -> &'static [Program] {
    pool().programs()
}

/// Ordered, immutable collection of programs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramRegistry {
    programs: Vec<Program>,
    fingerprint: String,
}

impl ProgramRegistry {
    /// Assemble programs from providers, in provider order, without checks.
    pub fn from_providers(providers: &[Box<dyn ProgramProvider>]) -> Self {
        let programs: Vec<Program> = providers.iter().map(|p| p.program()).collect();
        let fingerprint = Self::compute_fingerprint(&programs).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to fingerprint program registry");
            String::new()
        });

        tracing::debug!(
            count = programs.len(),
            fingerprint = %fingerprint,
            "Program registry assembled"
        );

        Self {
            programs,
            fingerprint,
        }
    }

    /// Assemble programs from providers and check them.
    ///
    /// Empty and duplicate ids always fail. Other integrity findings fail
    /// only under [`IntegrityPolicy::Enforce`]; otherwise they are logged.
    pub fn build(
        providers: &[Box<dyn ProgramProvider>],
        config: &RegistryConfig,
    ) -> Result<Self, RegistryError> {
        let programs: Vec<Program> = providers.iter().map(|p| p.program()).collect();
        Self::from_programs(programs, config)
    }

    /// Check an already assembled program list and wrap it.
    pub fn from_programs(
        programs: Vec<Program>,
        config: &RegistryConfig,
    ) -> Result<Self, RegistryError> {
        let report = IntegrityReport::check(&programs);

        for finding in report.findings() {
            match finding {
                IntegrityFinding::EmptyId { index } => return Err(RegistryError::EmptyId(*index)),
                IntegrityFinding::DuplicateId { id } => {
                    return Err(RegistryError::DuplicateId(id.clone()))
                }
                _ => {}
            }
        }

        if !report.is_clean() {
            match config.integrity.policy {
                IntegrityPolicy::Enforce => {
                    return Err(RegistryError::Integrity(report.findings().to_vec()))
                }
                IntegrityPolicy::Report => report.log(),
            }
        }

        let fingerprint = Self::compute_fingerprint(&programs)?;

        tracing::debug!(
            count = programs.len(),
            fingerprint = %fingerprint,
            findings = report.findings().len(),
            "Program registry built"
        );

        Ok(Self {
            programs,
            fingerprint,
        })
    }

    /// All programs, in registry order.
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// Find a program by id.
    pub fn get(&self, id: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Hash of every program's canonical JSON, in order.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Run the data-quality checks over this registry.
    pub fn integrity_report(&self) -> IntegrityReport {
        IntegrityReport::check(&self.programs)
    }

    /// Compute hash of the program sequence.
    fn compute_fingerprint(programs: &[Program]) -> Result<String, CodecError> {
        let mut hashes = String::with_capacity(programs.len() * 64);
        for program in programs {
            hashes.push_str(&hash_program(program)?);
        }
        Ok(compute_hash(hashes.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::programs::GatesCambridgeProgram;

    #[test]
    fn test_from_providers_preserves_order() {
        let registry = ProgramRegistry::from_providers(&default_providers());
        let ids: Vec<&str> = registry.programs().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["lpdp-reguler-2026", "gates-cambridge-2025", "lpdp-entrepreneur-2025"]
        );
    }

    #[test]
    fn test_build_matches_unchecked_assembly() {
        let checked =
            ProgramRegistry::build(&default_providers(), &RegistryConfig::strict()).unwrap();
        let unchecked = ProgramRegistry::from_providers(&default_providers());

        assert_eq!(checked, unchecked);
        assert_eq!(checked.fingerprint().len(), 64);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let providers: Vec<Box<dyn ProgramProvider>> =
            vec![Box::new(GatesCambridgeProgram), Box::new(GatesCambridgeProgram)];

        let err = ProgramRegistry::build(&providers, &RegistryConfig::default()).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == "gates-cambridge-2025"));
    }

    #[test]
    fn test_integrity_policy() {
        let mut program = GatesCambridgeProgram.program();
        program.dossier_requirement_keys.push("missing_doc".to_string());

        // Report policy logs and succeeds
        let registry =
            ProgramRegistry::from_programs(vec![program.clone()], &RegistryConfig::default())
                .unwrap();
        assert_eq!(registry.integrity_report().findings().len(), 1);

        // Enforce policy fails
        let err =
            ProgramRegistry::from_programs(vec![program], &RegistryConfig::strict()).unwrap_err();
        assert!(matches!(err, RegistryError::Integrity(findings) if findings.len() == 1));
    }

    #[test]
    fn test_get_by_id() {
        let registry = pool();
        assert!(registry.get("gates-cambridge-2025").is_some());
        assert!(registry.get("unknown").is_none());
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }
}
