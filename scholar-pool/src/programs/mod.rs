//! Authored program definitions.
//!
//! Each program lives in its own module and assembles its record from
//! separately authored fragments via [`crate::compose`].

pub mod gates_cambridge;
pub mod lpdp_entrepreneur;
pub mod lpdp_reguler;

pub use gates_cambridge::GatesCambridgeProgram;
pub use lpdp_entrepreneur::LpdpEntrepreneurProgram;
pub use lpdp_reguler::LpdpRegulerProgram;

use crate::types::Program;

/// Trait for program record authoring.
pub trait ProgramProvider: Send + Sync {
    /// Identifier of the program this provider authors
    fn id(&self) -> &'static str;

    /// Build the full program record
    fn program(&self) -> Program;
}

/// Providers in registry order.
pub fn default_providers() -> Vec<Box<dyn ProgramProvider>> {
    vec![
        Box::new(LpdpRegulerProgram),
        Box::new(GatesCambridgeProgram),
        Box::new(LpdpEntrepreneurProgram),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_ids_match_records() {
        for provider in default_providers() {
            assert_eq!(provider.program().id, provider.id());
        }
    }
}
