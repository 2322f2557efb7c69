//! Error types for the lasku-core library.

use thiserror::Error;

/// Error taxonomy for the extraction pipeline.
///
/// `LocationNotFound` is the only recoverable kind: the pipeline logs it and
/// continues without a location. Every other kind aborts extraction for the
/// current invoice and surfaces to the caller, who decides whether to move on
/// to the next document.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No directory alias token was found in the invoice text.
    #[error("no location alias matched the invoice text")]
    LocationNotFound,

    /// A location was resolved but the directory has no approver for it.
    #[error("no approver mapped for location {external_id}")]
    ApproverNotFound { external_id: String },

    /// The vendor id is absent from the rule registry.
    #[error("unsupported vendor: {vendor_id}")]
    UnsupportedVendor { vendor_id: String },

    /// The vendor's pattern found no match (document layout drift).
    #[error("pattern for vendor {vendor_id} matched nothing")]
    NoPatternMatch { vendor_id: String },

    /// A captured token could not be cleaned into a number, or the captured
    /// text matched no supported shape for the vendor.
    #[error("vendor {vendor_id}: cannot parse amount from {token:?}")]
    AmountParse { vendor_id: String, token: String },

    /// Catch-all for unexpected parser failures. Carries the text length
    /// only; the raw invoice text stays out of diagnostics.
    #[error("extraction failed for vendor {vendor_id} ({text_len} chars of input)")]
    Failed { vendor_id: String, text_len: usize },
}

impl ExtractError {
    pub(crate) fn amount(vendor_id: &str, token: impl Into<String>) -> Self {
        Self::AmountParse {
            vendor_id: vendor_id.to_string(),
            token: token.into(),
        }
    }
}

/// Result type for the lasku library.
pub type Result<T> = std::result::Result<T, ExtractError>;
