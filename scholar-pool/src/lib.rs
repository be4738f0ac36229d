//! Scholarship Program Registry
//!
//! This crate holds the static pool of scholarship and fellowship programs
//! consumed by the opportunity front-end. Every record is authored as typed
//! fragments, assembled once, and read-only for the life of the process.
//!
//! # Key Components
//!
//! - [`Program`]: One opportunity with its intel, shadow protocol, checklist and curriculum
//! - [`all_programs`]: The ordered pool of every authored program
//! - [`ProgramRegistry`]: Checked assembly of programs with a content fingerprint
//! - [`IntelOverrides`]: Explicit last-write-wins composition of intel fragments
//! - [`IntegrityReport`]: Data-quality findings such as unresolved dossier keys
//!
//! # Example
//!
//! ```
//! use scholar_pool::{all_programs, IntegrityReport};
//!
//! let programs = all_programs();
//! assert_eq!(programs[1].id, "gates-cambridge-2025");
//!
//! let report = IntegrityReport::check(programs);
//! assert!(report.is_clean());
//! ```

pub mod codec;
pub mod compose;
pub mod config;
pub mod integrity;
pub mod programs;
pub mod registry;
pub mod types;

// Re-export main types
pub use codec::CodecError;
pub use compose::{IntelOverrides, ProgramCore, ProgramParts};
pub use config::RegistryConfig;
pub use integrity::{IntegrityFinding, IntegrityReport};
pub use programs::{default_providers, ProgramProvider};
pub use registry::{all_programs, pool, ProgramRegistry, RegistryError};
pub use types::*;
