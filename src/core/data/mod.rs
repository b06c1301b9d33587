//! Core data types produced by a scan.
//!
//! ## Module Structure
//!
//! - `findings`: AssetDir, SourceCommand and the ScanResult that collects them

pub mod findings;

pub use findings::{AssetDir, ScanResult, SourceCommand};
