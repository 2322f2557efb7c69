//! The extraction pipeline: normalize, resolve, match, parse, reconcile.

pub mod amounts;
pub mod docnumber;
pub mod location;
pub mod normalize;
pub mod reconcile;
pub mod vendors;

use tracing::{debug, warn};

pub use normalize::normalize;

use crate::error::{ExtractError, Result};
use crate::models::{PostingRecord, RateBuckets, ReferenceDirectory};
use vendors::ApproverMode;

/// The extraction engine: a read-only directory plus the static vendor
/// registry behind one entry point.
///
/// Purely functional; an instance may be shared across threads and invoked
/// concurrently.
pub struct PostingExtractor {
    directory: ReferenceDirectory,
}

impl PostingExtractor {
    pub fn new(directory: ReferenceDirectory) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &ReferenceDirectory {
        &self.directory
    }

    /// Extract a posting record from raw invoice text.
    ///
    /// A location miss degrades the result (no `location`/`approver` field);
    /// every other failure aborts this invoice and surfaces to the caller.
    pub fn extract(
        &self,
        raw_text: &str,
        vendor_id: &str,
        invoice_number: &str,
    ) -> Result<PostingRecord> {
        let text = normalize(raw_text);
        debug!(vendor_id, text_len = text.len(), "extracting posting data");

        let location = location::resolve(&text, &self.directory);
        if location.is_none() {
            // Recoverable: the record is posted without a location.
            warn!(vendor_id, "{}", ExtractError::LocationNotFound);
        }

        let rule = vendors::lookup(vendor_id)?;

        let approver = match (rule.approver_mode, &location) {
            (ApproverMode::Manager, Some(external_id)) => Some(
                self.directory
                    .approver(external_id)
                    .ok_or_else(|| ExtractError::ApproverNotFound {
                        external_id: external_id.clone(),
                    })?
                    .to_string(),
            ),
            _ => None,
        };

        let mut buckets = RateBuckets::new();
        let mut matched = false;
        for caps in rule.pattern.captures_iter(&text) {
            matched = true;
            amounts::apply(rule, &caps, &mut buckets)?;
        }
        if !matched {
            return Err(ExtractError::NoPatternMatch {
                vendor_id: vendor_id.to_string(),
            });
        }
        if buckets.is_empty() {
            // The pattern matched but produced nothing; never hand back a
            // silently empty record.
            return Err(ExtractError::Failed {
                vendor_id: vendor_id.to_string(),
                text_len: text.len(),
            });
        }

        let buckets = reconcile::reconcile(buckets);
        debug!(vendor_id, buckets = buckets.len(), "extraction complete");

        Ok(PostingRecord {
            location,
            approver,
            invoice_number: invoice_number.to_string(),
            buckets,
        })
    }
}
