#![deny(unsafe_code)]

//! Discovers which text columns across independently authored tables refer
//! to the same entities by name, without declared foreign keys.
//!
//! The pipeline: extract name-like candidate fields and build a value index
//! per field, derive pairwise overlap through one inverted-index pass, score
//! each overlapping pair, and assemble a sorted report. The whole run is
//! read-only, stateless, cancelable, and progress-reporting.

pub mod cooccur;
pub mod engine;
pub mod extract;
pub mod index;
pub mod patterns;
pub mod score;

pub use cooccur::{PairMatch, SAMPLE_CAP, aggregate};
pub use engine::{Analyzer, analyze};
pub use extract::CandidateField;
pub use index::ValueIndex;
pub use patterns::NameFilter;
