//! Core library for Finnish invoice posting extraction.
//!
//! This crate provides:
//! - text normalization for raw PDF/OCR invoice text
//! - location and approver resolution against a reference directory
//! - a static per-vendor rule registry (regex + parsing strategy)
//! - VAT bucket parsing and reconciliation into a posting record
//!
//! The engine performs no I/O: the host supplies the text blob, the vendor
//! id and the directory rows, and consumes the structured record.

pub mod error;
pub mod extract;
pub mod models;

pub use error::{ExtractError, Result};
pub use extract::vendors::{ApproverMode, VendorRule};
pub use extract::{normalize, PostingExtractor};
pub use models::{DirectoryRow, PostingRecord, RateBucket, RateBuckets, ReferenceDirectory, VatRate};
