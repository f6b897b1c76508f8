//! # k-license
//!
//! A tool that makes sure every source file in a tree carries a license
//! header, prepending one from a per-file-type template where it is missing.
//!
//! `k-license` walks the tree in file-name order, skips excluded directories,
//! generated files and files that already carry an Apache License header, and
//! prepends the rendered `boilerplate.<type>.txt` template to everything else.
//! Without `--confirm` it only reports what it would change.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use k_license::config::ScanConfiguration;
//! use k_license::processor::{Processor, ProcessorConfig};
//! use k_license::templates::LicenseData;
//!
//! fn main() -> anyhow::Result<()> {
//!     let scan = ScanConfiguration {
//!         confirm: true,
//!         ..ScanConfiguration::new(".", "hack/boilerplate")
//!     };
//!     let license_data = LicenseData {
//!         year: "2025".to_string(),
//!     };
//!
//!     let processor = Processor::new(ProcessorConfig::new(scan, license_data));
//!     let report = processor.run()?;
//!
//!     println!("{} files needed a header", report.eligible_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Tree walk and per-file pipeline
//! * [`file_filter`] - In-scope and excluded-directory classification
//! * [`license_detection`] - License and generated-file detectors
//! * [`templates`] - Template selection and rendering
//! * [`report`] - Per-file verdicts and the scan report
//!
//! [`processor`]: crate::processor
//! [`file_filter`]: crate::file_filter
//! [`license_detection`]: crate::license_detection
//! [`templates`]: crate::templates
//! [`report`]: crate::report

pub mod config;
pub mod diff;
pub mod error;
pub mod file_filter;
pub mod license_detection;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod templates;
