//! Static vendor rule registry.
//!
//! One entry per supported invoice layout: the regex tuned to that vendor's
//! VAT breakdown block, the numeric locale of its amounts, and the parsing
//! strategy that turns the captured text into rate buckets. Hand-curated;
//! adding a vendor means adding one row here plus, when the layout is new,
//! one strategy arm in `amounts`.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ExtractError, Result};
use crate::models::VatRate;

/// Whether the pipeline resolves an approver for this vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproverMode {
    /// Posted without sign-off routing.
    None,
    /// Routed to the manager of the resolved location.
    Manager,
}

/// Numeric locale of a vendor's amounts, applied after the allow-list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Plain dot decimal, no grouping ("12.40").
    DotDecimal,
    /// Comma decimal, space grouping ("1 234,56").
    CommaDecimal,
    /// Dot decimal with comma grouping ("1,234.56").
    CommaGrouped,
    /// Comma decimal with dot grouping ("1.234,56").
    DotGrouped,
}

/// Closed set of vendor layout parsing strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Whitespace-split rows of `(rate, net, tax[, total])`, one or two rows;
    /// the 11-token form ends with a 3-number summary tail that is skipped.
    /// Row assignment follows the detected rate label, never row position.
    RateRows { has_total: bool },
    /// Rows of `(net, rate, tax, total)`; the 8-token form is two such rows.
    NetLedRows,
    /// Three capture groups are net, tax and total directly.
    TripleGroups { rate: VatRate },
    /// Digits glued without separators; spaces are re-inserted after every
    /// 2-decimal fraction and the 3 numbers accepted only when they sum.
    GluedTriple { rate: VatRate },
    /// Split the capture on a rate marker; before = net, after = tax.
    MarkerSplit { marker: &'static str, rate: VatRate },
    /// Scan tokens for "14%"/"24%"/"0%" sentinels and read fixed-offset
    /// numeric neighbors. `fuse_percent` joins a detached " %" first.
    LabeledNeighbors {
        net_off: usize,
        tax_off: usize,
        total_off: Option<usize>,
        fuse_percent: bool,
    },
    /// "14.00%"/"24.00%" presence flags plus a flat numeric list read
    /// pairwise as (net, tax) per detected rate.
    LabeledPairs,
    /// "arvonlisävero <rate>% <amount>" segments carrying only the tax per
    /// rate; net and total are derived from the rate fraction downstream.
    TaxPerRateSegments,
    /// Per-rate tax segments plus a single document-level net amount, with
    /// the vendor's own dual-rate net split rule.
    NetAndTaxLabels,
}

/// One vendor's extraction rule.
#[derive(Debug)]
pub struct VendorRule {
    pub vendor_id: &'static str,
    pub display_name: &'static str,
    pub pattern: Regex,
    pub approver_mode: ApproverMode,
    pub strategy: ParseStrategy,
    pub format: NumberFormat,
}

macro_rules! rule {
    ($id:literal, $name:literal, $pattern:literal, $mode:expr, $strategy:expr, $format:expr) => {
        (
            $id,
            VendorRule {
                vendor_id: $id,
                display_name: $name,
                pattern: Regex::new($pattern).expect("vendor pattern"),
                approver_mode: $mode,
                strategy: $strategy,
                format: $format,
            },
        )
    };
}

lazy_static! {
    static ref REGISTRY: HashMap<&'static str, VendorRule> = {
        use ApproverMode::{Manager, None as NoApprover};
        use NumberFormat::*;
        use ParseStrategy::*;

        // Several captures admit a stray zero-width space (\u{200B}) that
        // pdftotext leaves inside amount columns.
        HashMap::from([
            rule!(
                "1381774",
                "S-Business Oy",
                r"alv % alv yht\. alv 0 % yht\. sis\. alv ([-0-9. \u{200B}]+) yhteensä alv 0%",
                NoApprover,
                RateRows { has_total: true },
                DotDecimal
            ),
            rule!(
                "1367729",
                "METOS OY AB",
                r"veroton loppusumma ([-0-9., \u{200B}]+) arvonlisävero 25,50 % ([-0-9., ]+) yhteensä eur ([-0-9., ]+) metos oy ab",
                NoApprover,
                TripleGroups { rate: VatRate::Standard24 },
                CommaDecimal
            ),
            rule!(
                "1578999",
                "Oy Golden Crop AB",
                r"tax base amount vat ([-0-9vat.%, €\u{200B}]+)",
                Manager,
                RateRows { has_total: false },
                CommaGrouped
            ),
            rule!(
                "1394052",
                "HÄTÄLÄ OY F56451",
                r"veroton summa ([-0-9a-z.%, €\u{200B}]+) lasku yhteensä",
                Manager,
                MarkerSplit { marker: "14,00 %", rate: VatRate::Reduced14 },
                DotGrouped
            ),
            rule!(
                "1389643",
                "FINNISH FRESHFISH OY",
                r"veroton summa ([-0-9a-z.%, €\u{200B}]+) lasku yhteensä",
                Manager,
                MarkerSplit { marker: "14,00 %", rate: VatRate::Reduced14 },
                DotGrouped
            ),
            rule!(
                "1426362",
                "Kalaneuvos Oy",
                r"_____________ ([-0-9a-z.%, €\u{200B}]+) _____________",
                Manager,
                MarkerSplit { marker: " alv 14% summa eur ", rate: VatRate::Reduced14 },
                DotGrouped
            ),
            rule!(
                "2000009",
                "Fisu Pojat Oy",
                r"14% ([-0-9 ,\u{200B}]+)",
                Manager,
                GluedTriple { rate: VatRate::Reduced14 },
                CommaDecimal
            ),
            rule!(
                "1276917",
                "KANTA-HÄMEEN TUORETUOTE OY",
                r"alv-erittely: netto: ([alvnetto:0-9, %-]+)",
                Manager,
                LabeledPairs,
                CommaDecimal
            ),
            rule!(
                "1375629",
                "Tukkutalo Heinonen Oy",
                r"alv-erittely: netto: ([alvnetto:0-9, %-]+)",
                Manager,
                LabeledPairs,
                CommaDecimal
            ),
            rule!(
                "1714901",
                "AGRICA AB",
                r"arvonlisäveroerittely: alv % netto vero brutto specifikation av mervärdesskatt: mvs % skatt ([0-9. -]+)",
                Manager,
                RateRows { has_total: true },
                DotDecimal
            ),
            rule!(
                "1566645",
                "Yellow Service Oy Grönroos",
                r"verokanta veroton vero yhteensä ([-0-9 ,\u{200B}]+)",
                Manager,
                RateRows { has_total: true },
                CommaDecimal
            ),
            rule!(
                "1433275",
                "Kesko Oyj",
                r"alv erittely veron peruste alv % vero verollinen ([-0-9 ,\u{200B}]+)",
                Manager,
                NetLedRows,
                CommaDecimal
            ),
            rule!(
                "1553180",
                "Oy Hartwall Ab",
                r"alv-erittely verokanta([-0-9 ,%\u{200B}]+)",
                Manager,
                LabeledNeighbors { net_off: 1, tax_off: 2, total_off: Some(3), fuse_percent: true },
                CommaDecimal
            ),
            rule!(
                "1357805",
                "SPARTAO OY",
                r"veroprosentti veron peruste veron määrä([-0-9,. eur%\u{200B}]+)",
                Manager,
                LabeledNeighbors { net_off: 1, tax_off: 3, total_off: None, fuse_percent: false },
                CommaDecimal
            ),
            rule!(
                "2000219",
                "Firewok Finland Oy",
                r"veroprosentti veron peruste veron määrä([-0-9,. eur%\u{200B}]+)",
                Manager,
                LabeledNeighbors { net_off: 1, tax_off: 3, total_off: None, fuse_percent: false },
                CommaDecimal
            ),
            rule!(
                "2000088",
                "Vihannespörssi Oy",
                r"(arvonlisävero [0-9]+ ?% [-0-9,. ]+(?:arvonlisävero [0-9]+ ?% [-0-9,. ]+)*)",
                Manager,
                TaxPerRateSegments,
                CommaDecimal
            ),
            rule!(
                "2000211",
                "Suomen Pakkaustukku Oy",
                r"yhteensäilman ([-0-9 ,%arvonlisävero\u{200B}]+)",
                Manager,
                NetAndTaxLabels,
                CommaDecimal
            ),
            rule!(
                "2000224",
                "FinBlu Safety Oy",
                r"yhteensäilman ([-0-9 ,%arvonlisävero\u{200B}]+)",
                Manager,
                NetAndTaxLabels,
                CommaDecimal
            ),
        ])
    };
}

/// Look up the rule for a vendor id.
pub fn lookup(vendor_id: &str) -> Result<&'static VendorRule> {
    REGISTRY
        .get(vendor_id)
        .ok_or_else(|| ExtractError::UnsupportedVendor {
            vendor_id: vendor_id.to_string(),
        })
}

/// All registered rules, ordered by vendor id.
pub fn all() -> Vec<&'static VendorRule> {
    let mut rules: Vec<_> = REGISTRY.values().collect();
    rules.sort_by_key(|r| r.vendor_id);
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_vendor() {
        let rule = lookup("1381774").unwrap();
        assert_eq!(rule.display_name, "S-Business Oy");
        assert_eq!(rule.approver_mode, ApproverMode::None);
    }

    #[test]
    fn test_lookup_unknown_vendor() {
        let err = lookup("9999999").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedVendor { .. }));
    }

    #[test]
    fn test_registry_size_and_ordering() {
        let rules = all();
        assert_eq!(rules.len(), 18);
        assert!(rules.windows(2).all(|w| w[0].vendor_id < w[1].vendor_id));
    }

    #[test]
    fn test_patterns_capture_at_least_one_group() {
        for rule in all() {
            assert!(
                rule.pattern.captures_len() > 1,
                "vendor {} pattern has no capture group",
                rule.vendor_id
            );
        }
    }
}
