//! Location resolution by fuzzy token-set matching against the directory.

use std::collections::HashSet;

use tracing::debug;

use crate::models::ReferenceDirectory;

/// Brand signals read from the normalized text, used by the override table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrandSignals {
    pub firewok: bool,
    pub sushibar: bool,
}

impl BrandSignals {
    pub fn from_text(normalized: &str) -> Self {
        Self {
            firewok: normalized.contains("firewok"),
            sushibar: normalized.contains("sushibar"),
        }
    }
}

/// Resolve the accounting location for an invoice, if any alias matches.
///
/// Token membership is a set test: order and multiplicity in the text carry
/// no meaning. When several aliases match, the one occurring earliest in the
/// text wins, with the longer alias breaking position ties. A miss is
/// recoverable; the caller proceeds without a location.
pub fn resolve(normalized: &str, directory: &ReferenceDirectory) -> Option<String> {
    let lettered = letters_only(normalized);
    let tokens: HashSet<&str> = lettered.split(' ').filter(|t| !t.is_empty()).collect();

    let matched = directory
        .alias_tokens()
        .filter(|alias| tokens.contains(alias))
        .min_by_key(|alias| {
            let pos = normalized.find(*alias).unwrap_or(usize::MAX);
            (pos, std::cmp::Reverse(alias.len()))
        })?;
    debug!(alias = matched, "location alias matched");

    let raw = directory.external_id(matched)?.to_string();
    Some(apply_overrides(raw, BrandSignals::from_text(normalized)))
}

/// Post-resolution override table, vendor-independent, applied in order.
/// Shared chain sites resolve to the brand actually being billed, and one
/// retired code maps to its canonical replacement.
fn apply_overrides(external_id: String, signals: BrandSignals) -> String {
    let firewok_only = signals.firewok && !signals.sushibar;
    match external_id.as_str() {
        "L56" if firewok_only => "L67".to_string(),
        "L43" if firewok_only => "L72".to_string(),
        "L44" => "L23".to_string(),
        _ => external_id,
    }
}

/// Strip everything that is not an ASCII letter, a Nordic accented vowel,
/// or a space.
fn letters_only(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() || matches!(c, 'ä' | 'ö' | 'å') || c == ' ' {
                c
            } else {
                ' '
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DirectoryRow;

    fn directory() -> ReferenceDirectory {
        ReferenceDirectory::from_rows(vec![
            DirectoryRow::new("kamppi", "L12", "A. Virtanen"),
            DirectoryRow::new("hervanta", "L56", "B. Korhonen"),
            DirectoryRow::new("espoonkeskus", "L44", "C. Nieminen"),
            DirectoryRow::new("seinäjoki", "L4", "D. Mäkinen"),
        ])
    }

    #[test]
    fn test_resolves_alias_token() {
        let dir = directory();
        assert_eq!(resolve("lasku sushibar kamppi oy", &dir), Some("L12".to_string()));
    }

    #[test]
    fn test_miss_is_none() {
        let dir = directory();
        assert_eq!(resolve("lasku ilman tunnisteita", &dir), None);
    }

    #[test]
    fn test_punctuation_does_not_block_match() {
        let dir = directory();
        assert_eq!(resolve("toimitus: kamppi, 00100", &dir), Some("L12".to_string()));
    }

    #[test]
    fn test_accented_alias() {
        let dir = directory();
        assert_eq!(resolve("sushibar seinäjoki", &dir), Some("L4".to_string()));
    }

    #[test]
    fn test_earliest_alias_wins() {
        let dir = directory();
        assert_eq!(
            resolve("sushibar kamppi ja hervanta", &dir),
            Some("L12".to_string())
        );
        assert_eq!(
            resolve("sushibar hervanta ja kamppi", &dir),
            Some("L56".to_string())
        );
    }

    #[test]
    fn test_firewok_override() {
        let dir = directory();
        // Shared site billed as Firewok.
        assert_eq!(resolve("firewok hervanta", &dir), Some("L67".to_string()));
        // Both brands in text: no remap.
        assert_eq!(
            resolve("firewok sushibar hervanta", &dir),
            Some("L56".to_string())
        );
    }

    #[test]
    fn test_unconditional_remap() {
        let dir = directory();
        assert_eq!(resolve("sushibar espoonkeskus", &dir), Some("L23".to_string()));
    }
}
