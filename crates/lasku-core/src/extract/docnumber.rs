//! Invoice / credit note number scan.
//!
//! Fallback for hosts that receive a document without an externally supplied
//! invoice number. Credit notes win over invoice numbers so a credit is
//! never filed under the invoice it corrects.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CREDIT_NOTE_NUMBER: Regex =
        Regex::new(r"invoice number[ {]*(ctinv\d+)").expect("credit note pattern");
    static ref INVOICE_NUMBER: Regex =
        Regex::new(r"invoice number[ {]*(inv-\d+)").expect("invoice number pattern");
}

/// Scan normalized text for a document number, uppercased on return.
pub fn scan(normalized: &str) -> Option<String> {
    if let Some(caps) = CREDIT_NOTE_NUMBER.captures(normalized) {
        return Some(caps[1].to_uppercase());
    }
    INVOICE_NUMBER
        .captures(normalized)
        .map(|caps| caps[1].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scans_invoice_number() {
        assert_eq!(
            scan("... invoice number inv-10233 date ..."),
            Some("INV-10233".to_string())
        );
    }

    #[test]
    fn test_credit_note_wins() {
        assert_eq!(
            scan("invoice number inv-10233 invoice number ctinv552"),
            Some("CTINV552".to_string())
        );
    }

    #[test]
    fn test_no_number() {
        assert_eq!(scan("lasku 12345"), None);
    }
}
