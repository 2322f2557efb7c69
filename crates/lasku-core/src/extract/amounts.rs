//! Vendor-specific numeric extraction from matched invoice text.

use std::str::FromStr;

use regex::Captures;
use rust_decimal::Decimal;

use crate::error::{ExtractError, Result};
use crate::models::{RateBucket, RateBuckets, VatRate};

use super::vendors::{NumberFormat, ParseStrategy, VendorRule};

/// Clean one numeric token into a `Decimal`.
///
/// Allow-list filter first (digits, sign, dot, comma, space), then the
/// vendor's locale conversion. A token still non-numeric afterwards is an
/// `AmountParse` error, never a silent zero.
pub fn clean_number(raw: &str, format: NumberFormat, vendor_id: &str) -> Result<Decimal> {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | ',' | ' '))
        .collect();
    let normalized = apply_format(&filtered, format);
    Decimal::from_str(normalized.trim()).map_err(|_| ExtractError::amount(vendor_id, raw))
}

/// Best-effort token conversion without the allow-list: labels and other
/// word tokens simply fail. Used where a strategy scans mixed token streams
/// and non-numeric tokens are expected.
fn try_number(raw: &str, format: NumberFormat) -> Option<Decimal> {
    Decimal::from_str(apply_format(raw, format).trim()).ok()
}

fn apply_format(s: &str, format: NumberFormat) -> String {
    let s = s.replace(' ', "");
    match format {
        NumberFormat::DotDecimal => s,
        NumberFormat::CommaDecimal => s.replace(',', "."),
        NumberFormat::CommaGrouped => s.replace(',', ""),
        NumberFormat::DotGrouped => s.replace('.', "").replace(',', "."),
    }
}

/// Parse one regex match into rate buckets according to the vendor strategy.
/// Later matches merge over earlier ones.
pub(crate) fn apply(rule: &VendorRule, caps: &Captures, buckets: &mut RateBuckets) -> Result<()> {
    let vendor = rule.vendor_id;
    match rule.strategy {
        ParseStrategy::RateRows { has_total } => {
            let text = group(rule, caps, 1)?;
            rate_rows(rule, &text, has_total, buckets)
        }
        ParseStrategy::NetLedRows => {
            let text = group(rule, caps, 1)?;
            net_led_rows(rule, &text, buckets)
        }
        ParseStrategy::TripleGroups { rate } => {
            let bucket = buckets.entry(rate).or_default();
            bucket.net = Some(clean_number(&group(rule, caps, 1)?, rule.format, vendor)?);
            bucket.tax = Some(clean_number(&group(rule, caps, 2)?, rule.format, vendor)?);
            bucket.total = Some(clean_number(&group(rule, caps, 3)?, rule.format, vendor)?);
            Ok(())
        }
        ParseStrategy::GluedTriple { rate } => {
            let text = group(rule, caps, 1)?;
            glued_triple(rule, &text, rate, buckets)
        }
        ParseStrategy::MarkerSplit { marker, rate } => {
            let text = group(rule, caps, 1)?;
            marker_split(rule, &text, marker, rate, buckets)
        }
        ParseStrategy::LabeledNeighbors {
            net_off,
            tax_off,
            total_off,
            fuse_percent,
        } => {
            let text = group(rule, caps, 1)?;
            labeled_neighbors(rule, &text, net_off, tax_off, total_off, fuse_percent, buckets)
        }
        ParseStrategy::LabeledPairs => {
            let text = group(rule, caps, 1)?;
            labeled_pairs(rule, &text, buckets)
        }
        ParseStrategy::TaxPerRateSegments => {
            let text = group(rule, caps, 1)?;
            tax_per_rate_segments(rule, &text, buckets)
        }
        ParseStrategy::NetAndTaxLabels => {
            let text = group(rule, caps, 1)?;
            net_and_tax_labels(rule, &text, buckets)
        }
    }
}

fn group(rule: &VendorRule, caps: &Captures, index: usize) -> Result<String> {
    caps.get(index)
        .map(|m| m.as_str().trim().to_string())
        .ok_or_else(|| ExtractError::Failed {
            vendor_id: rule.vendor_id.to_string(),
            text_len: caps.get(0).map(|m| m.as_str().len()).unwrap_or(0),
        })
}

fn set_row(
    buckets: &mut RateBuckets,
    rate: VatRate,
    net: Decimal,
    tax: Decimal,
    total: Option<Decimal>,
) {
    let bucket = buckets.entry(rate).or_default();
    bucket.net = Some(net);
    bucket.tax = Some(tax);
    bucket.total = total.or(bucket.total);
}

/// Numeric tokens of a captured fragment. Tokens without a single digit
/// (column labels, currency markers) are skipped; tokens with digits that
/// still fail to clean are an error.
fn numeric_tokens(text: &str, format: NumberFormat, vendor_id: &str) -> Result<Vec<Decimal>> {
    text.split_whitespace()
        .filter(|t| t.chars().any(|c| c.is_ascii_digit()))
        .map(|t| clean_number(t, format, vendor_id))
        .collect()
}

/// Rows led by a rate label: `(rate, net, tax[, total])`.
fn rate_rows(rule: &VendorRule, text: &str, has_total: bool, buckets: &mut RateBuckets) -> Result<()> {
    let nums = numeric_tokens(text, rule.format, rule.vendor_id)?;

    let stride = if has_total { 4 } else { 3 };
    let row_count = match nums.len() {
        n if n == stride => 1,
        n if n == 2 * stride => 2,
        // Two 4-column rows followed by a 3-number summary line.
        11 if has_total => 2,
        _ => return Err(ExtractError::amount(rule.vendor_id, text)),
    };

    for row in nums.chunks(stride).take(row_count) {
        let rate = VatRate::from_label(row[0])
            .ok_or_else(|| ExtractError::amount(rule.vendor_id, text))?;
        let total = has_total.then(|| row[3]);
        set_row(buckets, rate, row[1], row[2], total);
    }
    Ok(())
}

/// Rows of `(net, rate, tax, total)` with the label in second position.
fn net_led_rows(rule: &VendorRule, text: &str, buckets: &mut RateBuckets) -> Result<()> {
    let nums = numeric_tokens(text, rule.format, rule.vendor_id)?;

    if nums.len() != 4 && nums.len() != 8 {
        return Err(ExtractError::amount(rule.vendor_id, text));
    }
    for row in nums.chunks(4) {
        let rate = VatRate::from_label(row[1])
            .ok_or_else(|| ExtractError::amount(rule.vendor_id, text))?;
        set_row(buckets, rate, row[0], row[2], Some(row[3]));
    }
    Ok(())
}

/// Digits glued into one run; every 2-decimal fraction ends a number.
fn glued_triple(rule: &VendorRule, text: &str, rate: VatRate, buckets: &mut RateBuckets) -> Result<()> {
    let glued = apply_format(text, rule.format);
    let mut separated = String::with_capacity(glued.len() + 4);
    let mut decimals_left = 0u8;
    for c in glued.chars() {
        separated.push(c);
        if c == '.' {
            decimals_left = 2;
        } else if decimals_left > 0 {
            decimals_left -= 1;
            if decimals_left == 0 {
                separated.push(' ');
            }
        }
    }

    let nums: Vec<Decimal> = separated
        .split_whitespace()
        .map(|t| {
            Decimal::from_str(t).map_err(|_| ExtractError::amount(rule.vendor_id, t))
        })
        .collect::<Result<_>>()?;

    match nums.as_slice() {
        [net, tax, total] if *total == net + tax => {
            set_row(buckets, rate, *net, *tax, Some(*total));
            Ok(())
        }
        _ => Err(ExtractError::amount(rule.vendor_id, text)),
    }
}

/// Split the capture on a rate marker; the segment before it is the net,
/// the one after the tax.
fn marker_split(
    rule: &VendorRule,
    text: &str,
    marker: &str,
    rate: VatRate,
    buckets: &mut RateBuckets,
) -> Result<()> {
    let segments: Vec<&str> = text.split(marker).collect();
    if segments.len() != 2 {
        return Err(ExtractError::amount(rule.vendor_id, text));
    }
    let net = clean_number(segments[0], rule.format, rule.vendor_id)?;
    let tax = clean_number(segments[1], rule.format, rule.vendor_id)?;
    set_row(buckets, rate, net, tax, None);
    Ok(())
}

/// Scan for "<rate>%" sentinel tokens and read numeric neighbors at fixed
/// offsets.
fn labeled_neighbors(
    rule: &VendorRule,
    text: &str,
    net_off: usize,
    tax_off: usize,
    total_off: Option<usize>,
    fuse_percent: bool,
    buckets: &mut RateBuckets,
) -> Result<()> {
    let text = if fuse_percent {
        text.replace(" %", "%")
    } else {
        text.to_string()
    };
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut found = false;

    for (j, token) in tokens.iter().enumerate() {
        let rate = match *token {
            "0%" => VatRate::Zero,
            "14%" => VatRate::Reduced14,
            "24%" => VatRate::Standard24,
            _ => continue,
        };
        let neighbor = |off: usize| -> Result<Decimal> {
            let t = tokens
                .get(j + off)
                .ok_or_else(|| ExtractError::amount(rule.vendor_id, text.as_str()))?;
            clean_number(t, rule.format, rule.vendor_id)
        };
        let bucket = buckets.entry(rate).or_default();
        bucket.net = Some(neighbor(net_off)?);
        bucket.tax = Some(neighbor(tax_off)?);
        if let Some(off) = total_off {
            bucket.total = Some(neighbor(off)?);
        }
        found = true;
    }

    if found {
        Ok(())
    } else {
        // A match without any rate sentinel is a layout drift, not a blank.
        Err(ExtractError::amount(rule.vendor_id, text))
    }
}

/// Rate presence flags plus a flat numeric list read pairwise as (net, tax).
fn labeled_pairs(rule: &VendorRule, text: &str, buckets: &mut RateBuckets) -> Result<()> {
    let text = text.replace(',', ".");
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let has14 = tokens.contains(&"14.00%");
    let has24 = tokens.contains(&"24.00%");
    let nums: Vec<Decimal> = tokens
        .iter()
        .filter_map(|t| try_number(t, NumberFormat::DotDecimal))
        .collect();

    match (has14, has24, nums.as_slice()) {
        (true, true, [n14, t14, n24, t24]) => {
            set_row(buckets, VatRate::Reduced14, *n14, *t14, None);
            set_row(buckets, VatRate::Standard24, *n24, *t24, None);
            Ok(())
        }
        (true, false, [net, tax]) => {
            set_row(buckets, VatRate::Reduced14, *net, *tax, None);
            Ok(())
        }
        (false, true, [net, tax]) => {
            set_row(buckets, VatRate::Standard24, *net, *tax, None);
            Ok(())
        }
        _ => Err(ExtractError::amount(rule.vendor_id, text)),
    }
}

/// "arvonlisävero <rate>% <amount>" segments; only the tax is published per
/// rate, except that the 0% segment carries the exempt base.
fn tax_per_rate_segments(rule: &VendorRule, text: &str, buckets: &mut RateBuckets) -> Result<()> {
    let text = text.replace(',', ".").replace(" %", "%");
    let mut found = false;

    for segment in text.split(" arvonlisävero ") {
        let segment = segment.trim_start_matches("arvonlisävero ").trim();
        let mut tokens = segment.split_whitespace();
        let Some(label) = tokens.next() else { continue };
        let Some(rate) = percent_label(label) else { continue };
        let amount_token = tokens
            .next()
            .ok_or_else(|| ExtractError::amount(rule.vendor_id, segment))?;
        let amount = clean_number(amount_token, NumberFormat::DotDecimal, rule.vendor_id)?;

        let bucket = buckets.entry(rate).or_default();
        bucket.tax = Some(amount);
        if rate == VatRate::Zero {
            // The zero-rate line is the exempt base itself.
            bucket.net = Some(amount);
        }
        found = true;
    }

    if found {
        Ok(())
    } else {
        Err(ExtractError::amount(rule.vendor_id, text))
    }
}

/// Per-rate tax segments plus one document-level net ("...ilman
/// arvonlisäveroa" total). Single-rate invoices take the whole net; dual-rate
/// invoices split it by this vendor's own rule.
fn net_and_tax_labels(rule: &VendorRule, text: &str, buckets: &mut RateBuckets) -> Result<()> {
    let text = text.replace(',', ".");
    let mut net: Option<Decimal> = None;
    let mut tax14: Option<Decimal> = None;
    let mut tax24: Option<Decimal> = None;
    let mut zero: Option<Decimal> = None;

    for segment in text.split("arvonlisävero") {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if let Some(rest) = segment.strip_prefix("0 % ") {
            zero = Some(clean_number(rest, NumberFormat::DotDecimal, rule.vendor_id)?);
        } else if let Some(rest) = segment.strip_prefix("14 % ") {
            tax14 = Some(clean_number(rest, NumberFormat::DotDecimal, rule.vendor_id)?);
        } else if let Some(rest) = segment.strip_prefix("24 % ") {
            tax24 = Some(clean_number(rest, NumberFormat::DotDecimal, rule.vendor_id)?);
        } else if let Some(rest) = segment.strip_prefix("a ") {
            net = Some(clean_number(rest, NumberFormat::DotDecimal, rule.vendor_id)?);
        }
    }

    if let Some(amount) = zero {
        buckets.entry(VatRate::Zero).or_default().tax = Some(amount);
    }
    if let Some(tax) = tax14 {
        buckets.entry(VatRate::Reduced14).or_default().tax = Some(tax);
    }
    if let Some(tax) = tax24 {
        buckets.entry(VatRate::Standard24).or_default().tax = Some(tax);
    }
    match (net, tax14, tax24) {
        (Some(net), Some(_), None) => {
            buckets.entry(VatRate::Reduced14).or_default().net = Some(net);
        }
        (Some(net), None, Some(_)) => {
            buckets.entry(VatRate::Standard24).or_default().net = Some(net);
        }
        (Some(net), Some(_), Some(tax24)) => {
            // Vendor rule: the standard-rate net comes from the rate
            // fraction, the reduced-rate net is the remainder. Both are
            // derived values and get rounded like the reconciler's.
            let net24 = (tax24 / VatRate::Standard24.fraction()).round_dp(2);
            buckets.entry(VatRate::Standard24).or_default().net = Some(net24);
            buckets.entry(VatRate::Reduced14).or_default().net =
                Some((net - tax24).round_dp(2));
        }
        _ => {}
    }

    if buckets.values().all(RateBucket::is_empty) {
        return Err(ExtractError::amount(rule.vendor_id, text));
    }
    Ok(())
}

fn percent_label(token: &str) -> Option<VatRate> {
    match token.strip_suffix('%')? {
        "0" => Some(VatRate::Zero),
        "14" | "14.00" => Some(VatRate::Reduced14),
        "24" | "24.00" => Some(VatRate::Standard24),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::vendors::lookup;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn parse_with(vendor_id: &str, text: &str) -> Result<RateBuckets> {
        let rule = lookup(vendor_id).unwrap();
        let mut buckets = RateBuckets::new();
        let mut matched = false;
        for caps in rule.pattern.captures_iter(text) {
            matched = true;
            apply(rule, &caps, &mut buckets)?;
        }
        assert!(matched, "pattern did not match test text");
        Ok(buckets)
    }

    #[test]
    fn test_clean_number_formats() {
        assert_eq!(clean_number("12.40", NumberFormat::DotDecimal, "v").unwrap(), dec("12.40"));
        assert_eq!(
            clean_number("1 234,56", NumberFormat::CommaDecimal, "v").unwrap(),
            dec("1234.56")
        );
        assert_eq!(
            clean_number("1,234.56", NumberFormat::CommaGrouped, "v").unwrap(),
            dec("1234.56")
        );
        assert_eq!(
            clean_number("1.234,56 €", NumberFormat::DotGrouped, "v").unwrap(),
            dec("1234.56")
        );
    }

    #[test]
    fn test_clean_number_rejects_garbage() {
        let err = clean_number("eur", NumberFormat::CommaDecimal, "v").unwrap_err();
        assert!(matches!(err, ExtractError::AmountParse { .. }));
    }

    #[test]
    fn test_rate_rows_two_rows_by_label() {
        let text = "alv % alv yht. alv 0 % yht. sis. alv \
                    24 50.00 12.00 62.00 14 10.00 2.40 12.40 yhteensä alv 0%";
        let buckets = parse_with("1381774", text).unwrap();
        let b14 = buckets[&VatRate::Reduced14];
        assert_eq!(b14.net, Some(dec("10.00")));
        assert_eq!(b14.tax, Some(dec("2.40")));
        assert_eq!(b14.total, Some(dec("12.40")));
        let b24 = buckets[&VatRate::Standard24];
        assert_eq!(b24.net, Some(dec("50.00")));
    }

    #[test]
    fn test_rate_rows_rejects_odd_arity() {
        let text = "alv % alv yht. alv 0 % yht. sis. alv 14 10.00 2.40 yhteensä alv 0%";
        let err = parse_with("1381774", text).unwrap_err();
        assert!(matches!(err, ExtractError::AmountParse { .. }));
    }

    #[test]
    fn test_rate_rows_with_summary_tail() {
        let text = "arvonlisäveroerittely: alv % netto vero brutto \
                    specifikation av mervärdesskatt: mvs % skatt \
                    14 80.00 11.20 91.20 24 20.00 4.80 24.80 100.00 16.00 116.00";
        let buckets = parse_with("1714901", text).unwrap();
        assert_eq!(buckets[&VatRate::Reduced14].total, Some(dec("91.20")));
        assert_eq!(buckets[&VatRate::Standard24].tax, Some(dec("4.80")));
    }

    #[test]
    fn test_rate_rows_without_totals_single_row() {
        let text = "tax base amount vat 24% 1,000.00 vat 240.00 €";
        let buckets = parse_with("1578999", text).unwrap();
        let b = buckets[&VatRate::Standard24];
        assert_eq!(b.net, Some(dec("1000.00")));
        assert_eq!(b.tax, Some(dec("240.00")));
        assert_eq!(b.total, None);
    }

    #[test]
    fn test_rate_rows_without_totals_two_rows_by_label() {
        let text = "tax base amount vat 24% 50.00 12.00 14% 100.00 14.00";
        let buckets = parse_with("1578999", text).unwrap();
        assert_eq!(buckets[&VatRate::Reduced14].net, Some(dec("100.00")));
        assert_eq!(buckets[&VatRate::Standard24].tax, Some(dec("12.00")));
    }

    #[test]
    fn test_net_led_rows_single_row() {
        let text = "alv erittely veron peruste alv % vero verollinen 100,00 14 14,00 114,00";
        let buckets = parse_with("1433275", text).unwrap();
        let b = buckets[&VatRate::Reduced14];
        assert_eq!(b.net, Some(dec("100.00")));
        assert_eq!(b.tax, Some(dec("14.00")));
        assert_eq!(b.total, Some(dec("114.00")));
    }

    #[test]
    fn test_net_led_rows_two_rows_by_label() {
        // Rows arrive standard rate first; assignment follows the label.
        let text = "alv erittely veron peruste alv % vero verollinen \
                    50,00 24 12,00 62,00 100,00 14 14,00 114,00";
        let buckets = parse_with("1433275", text).unwrap();
        assert_eq!(buckets[&VatRate::Standard24].net, Some(dec("50.00")));
        assert_eq!(buckets[&VatRate::Standard24].total, Some(dec("62.00")));
        assert_eq!(buckets[&VatRate::Reduced14].tax, Some(dec("14.00")));
    }

    #[test]
    fn test_triple_groups() {
        let text = "veroton loppusumma 1 234,56 arvonlisävero 25,50 % 314,81 \
                    yhteensä eur 1 549,37 metos oy ab";
        let buckets = parse_with("1367729", text).unwrap();
        let b = buckets[&VatRate::Standard24];
        assert_eq!(b.net, Some(dec("1234.56")));
        assert_eq!(b.tax, Some(dec("314.81")));
        assert_eq!(b.total, Some(dec("1549.37")));
    }

    #[test]
    fn test_glued_triple() {
        let buckets = parse_with("2000009", "14% 100,0014,00114,00").unwrap();
        let b = buckets[&VatRate::Reduced14];
        assert_eq!(b.net, Some(dec("100.00")));
        assert_eq!(b.tax, Some(dec("14.00")));
        assert_eq!(b.total, Some(dec("114.00")));
    }

    #[test]
    fn test_glued_triple_rejects_mismatched_sum() {
        let err = parse_with("2000009", "14% 100,0014,00115,00").unwrap_err();
        assert!(matches!(err, ExtractError::AmountParse { .. }));
    }

    #[test]
    fn test_marker_split() {
        let text = "veroton summa 1.234,56 e 14,00 % 172,84 lasku yhteensä";
        let buckets = parse_with("1394052", text).unwrap();
        let b = buckets[&VatRate::Reduced14];
        assert_eq!(b.net, Some(dec("1234.56")));
        assert_eq!(b.tax, Some(dec("172.84")));
        assert_eq!(b.total, None);
    }

    #[test]
    fn test_labeled_neighbors_with_totals() {
        let text = "alv-erittely verokanta 14 % 100,00 14,00 114,00 24 % 50,00 12,00 62,00";
        let buckets = parse_with("1553180", text).unwrap();
        assert_eq!(buckets[&VatRate::Reduced14].total, Some(dec("114.00")));
        assert_eq!(buckets[&VatRate::Standard24].net, Some(dec("50.00")));
    }

    #[test]
    fn test_labeled_neighbors_requires_rate_sentinel() {
        // Pattern matches but the breakdown carries no 0%/14%/24% token.
        let err = parse_with("1553180", "alv-erittely verokanta 100,00").unwrap_err();
        assert!(matches!(err, ExtractError::AmountParse { .. }));
    }

    #[test]
    fn test_labeled_neighbors_offset_gap() {
        let text = "veroprosentti veron peruste veron määrä 14% 100,00 eur 14,00";
        let buckets = parse_with("1357805", text).unwrap();
        let b = buckets[&VatRate::Reduced14];
        assert_eq!(b.net, Some(dec("100.00")));
        assert_eq!(b.tax, Some(dec("14.00")));
    }

    #[test]
    fn test_labeled_pairs_single_rate() {
        let text = "alv-erittely: netto: 100,00 alv 14,00% 14,00";
        let buckets = parse_with("1276917", text).unwrap();
        let b = buckets[&VatRate::Reduced14];
        assert_eq!(b.net, Some(dec("100.00")));
        assert_eq!(b.tax, Some(dec("14.00")));
    }

    #[test]
    fn test_labeled_pairs_dual_rate() {
        let text = "alv-erittely: netto: 100,00 14,00% 14,00 netto: 50,00 24,00% 12,00";
        let buckets = parse_with("1276917", text).unwrap();
        assert_eq!(buckets[&VatRate::Reduced14].net, Some(dec("100.00")));
        assert_eq!(buckets[&VatRate::Standard24].tax, Some(dec("12.00")));
    }

    #[test]
    fn test_tax_per_rate_segments() {
        let buckets =
            parse_with("2000088", "arvonlisävero 0 % 40,00 arvonlisävero 24 % 12,00").unwrap();
        assert_eq!(buckets[&VatRate::Zero].tax, Some(dec("40.00")));
        assert_eq!(buckets[&VatRate::Zero].net, Some(dec("40.00")));
        assert_eq!(buckets[&VatRate::Standard24].tax, Some(dec("12.00")));
        assert_eq!(buckets[&VatRate::Standard24].net, None);
    }

    #[test]
    fn test_net_and_tax_labels_dual_rate_split() {
        let text = "yhteensäilman arvonlisäveroa 150,00 arvonlisävero 14 % 14,00 \
                    arvonlisävero 24 % 12,00";
        let buckets = parse_with("2000224", text).unwrap();
        assert_eq!(buckets[&VatRate::Standard24].net, Some(dec("50")));
        assert_eq!(buckets[&VatRate::Reduced14].net, Some(dec("138.00")));
        assert_eq!(buckets[&VatRate::Reduced14].tax, Some(dec("14.00")));
    }

    #[test]
    fn test_net_and_tax_labels_rounds_derived_nets() {
        // 12,01 / 0.24 is periodic; derived nets land on 2 dp.
        let text = "yhteensäilman arvonlisäveroa 150,00 arvonlisävero 14 % 14,00 \
                    arvonlisävero 24 % 12,01";
        let buckets = parse_with("2000224", text).unwrap();
        assert_eq!(buckets[&VatRate::Standard24].net, Some(dec("50.04")));
        assert_eq!(buckets[&VatRate::Reduced14].net, Some(dec("137.99")));
    }
}
