//! Data models for invoice posting extraction.

pub mod directory;
pub mod posting;

pub use directory::{DirectoryRow, ReferenceDirectory};
pub use posting::{PostingRecord, RateBucket, RateBuckets, VatRate};
