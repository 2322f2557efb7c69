//! Completion and cleanup of parsed rate buckets.

use rust_decimal::Decimal;

use crate::models::{RateBucket, RateBuckets, VatRate};

/// Complete, round and prune parsed buckets.
///
/// For non-zero rates a missing third value is derived from the other two,
/// and a bucket holding only the tax is completed from the rate fraction.
/// Values captured directly from the document are never overwritten. The
/// zero rate has no arithmetic relationship and passes through. Zero-valued
/// fields carry no posting information and are dropped, as are buckets left
/// empty by that pruning.
pub fn reconcile(raw: RateBuckets) -> RateBuckets {
    let mut out = RateBuckets::new();
    for (rate, mut bucket) in raw {
        if rate != VatRate::Zero {
            complete(rate, &mut bucket);
        }
        bucket.net = bucket.net.filter(|v| !v.is_zero());
        bucket.tax = bucket.tax.filter(|v| !v.is_zero());
        bucket.total = bucket.total.filter(|v| !v.is_zero());
        if !bucket.is_empty() {
            out.insert(rate, bucket);
        }
    }
    out
}

fn complete(rate: VatRate, bucket: &mut RateBucket) {
    match (bucket.net, bucket.tax, bucket.total) {
        (Some(net), Some(tax), None) => bucket.total = Some(round2(net + tax)),
        (Some(net), None, Some(total)) => bucket.tax = Some(round2(total - net)),
        (None, Some(tax), Some(total)) => bucket.net = Some(round2(total - tax)),
        // Only the tax was published: reconstruct from the rate fraction.
        (None, Some(tax), None) => {
            let net = round2(tax / rate.fraction());
            bucket.net = Some(net);
            bucket.total = Some(round2(net + tax));
        }
        _ => {}
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}
