//! Roster Match Common Library
//!
//! 社員名簿と日報の照合ロジック。I/Oを持たない。

pub mod types;
pub mod columns;
pub mod provenance;
pub mod matcher;
pub mod error;
pub mod export;

pub use types::{EmployeeRecord, MatchKey, MatchedCandidate, ReportFile, ReportRow};
pub use columns::{EmployeeColumns, ReportColumns, TableRow};
pub use provenance::derive_provenance;
pub use matcher::{match_candidates, match_with_report, MatchOptions, MatchReport};
pub use error::{Error, Result};
