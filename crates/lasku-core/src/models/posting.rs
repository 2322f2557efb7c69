//! Posting record produced by extraction, keyed by VAT rate.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Finnish VAT rates that appear on supported invoice layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VatRate {
    /// Zero/exempt rate.
    Zero,
    /// Reduced rate: 14% (foodstuffs).
    Reduced14,
    /// Standard rate: 24%.
    Standard24,
}

impl VatRate {
    /// Key used in the serialized record ("0", "14", "24").
    pub fn key(&self) -> &'static str {
        match self {
            VatRate::Zero => "0",
            VatRate::Reduced14 => "14",
            VatRate::Standard24 => "24",
        }
    }

    /// The rate as a fraction (0.14 for 14%).
    pub fn fraction(&self) -> Decimal {
        match self {
            VatRate::Zero => Decimal::ZERO,
            VatRate::Reduced14 => Decimal::new(14, 2),
            VatRate::Standard24 => Decimal::new(24, 2),
        }
    }

    /// Match a bare rate label value (the leading "14" or "24" of a VAT
    /// breakdown row) to a rate.
    pub fn from_label(value: Decimal) -> Option<Self> {
        if value == Decimal::ZERO {
            Some(VatRate::Zero)
        } else if value == Decimal::from(14) {
            Some(VatRate::Reduced14)
        } else if value == Decimal::from(24) {
            Some(VatRate::Standard24)
        } else {
            None
        }
    }
}

/// Monetary figures attached to one VAT rate.
///
/// During parsing any subset may be present; the reconciler completes the
/// triple for non-zero rates. For [`VatRate::Zero`] the `tax` slot holds the
/// exempt base amount and no arithmetic relationship applies.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateBucket {
    /// Net amount at this rate.
    pub net: Option<Decimal>,
    /// Tax amount at this rate (exempt base for the zero rate).
    pub tax: Option<Decimal>,
    /// Gross amount at this rate.
    pub total: Option<Decimal>,
}

impl RateBucket {
    pub fn is_empty(&self) -> bool {
        self.net.is_none() && self.tax.is_none() && self.total.is_none()
    }
}

/// Buckets keyed by rate, ordered 0 / 14 / 24.
pub type RateBuckets = BTreeMap<VatRate, RateBucket>;

/// The structured result of extracting one invoice.
///
/// Owned by the caller; the engine holds no reference to it after return.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostingRecord {
    /// Resolved accounting location external id, when an alias matched.
    pub location: Option<String>,
    /// Resolved approver name, for vendors routed through a manager.
    pub approver: Option<String>,
    /// Caller-supplied invoice number.
    pub invoice_number: String,
    /// Populated VAT buckets.
    pub buckets: RateBuckets,
}

/// Serializes to the flat map the posting sink consumes:
/// `{"location"?, "approver"?, "INV No.", "<rate>"?, "<rate>_net"?,
/// "<rate>_total"?}`.
impl Serialize for PostingRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(location) = &self.location {
            map.serialize_entry("location", location)?;
        }
        if let Some(approver) = &self.approver {
            map.serialize_entry("approver", approver)?;
        }
        map.serialize_entry("INV No.", &self.invoice_number)?;
        for (rate, bucket) in &self.buckets {
            let key = rate.key();
            if let Some(tax) = bucket.tax {
                map.serialize_entry(key, &tax)?;
            }
            if let Some(net) = bucket.net {
                map.serialize_entry(&format!("{key}_net"), &net)?;
            }
            if let Some(total) = bucket.total {
                map.serialize_entry(&format!("{key}_total"), &total)?;
            }
        }
        map.end()
    }
}
