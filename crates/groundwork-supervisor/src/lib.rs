#![warn(missing_docs)]

//! Structural supervision of generated projects
//!
//! One-shot health checks over a generated project tree: expected
//! structure, misplaced files, duplicate files and functions, and test
//! suite quality. Findings are ranked by severity and can be turned into
//! corrective instructions or persisted as a JSON supervision log.

pub mod duplicates;
pub mod error;
pub mod instructions;
pub mod models;
pub mod structure;
pub mod supervisor;
pub mod tests_audit;

// Re-export public API
pub use duplicates::DuplicateDetector;
pub use error::SupervisorError;
pub use instructions::{generate_instructions, CorrectiveInstruction};
pub use models::{IssueKind, IssueSeverity, ProjectIssue, SupervisionReport};
pub use structure::StructureMonitor;
pub use supervisor::Supervisor;
pub use tests_audit::TestAuditor;
