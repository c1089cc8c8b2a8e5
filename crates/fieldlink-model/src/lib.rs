#![deny(unsafe_code)]

pub mod error;
pub mod options;
pub mod report;
pub mod source;

pub use error::{Result, ScanError};
pub use options::AnalysisOptions;
pub use report::{RelationshipReport, RelationshipSnapshot, ReportMetadata, SkippedSource};
pub use source::{DataSource, MemoryProvider, MemorySource, SourceData, SourceProvider};
