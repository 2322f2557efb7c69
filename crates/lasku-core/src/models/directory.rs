//! Reference directory mapping location aliases to external ids and approvers.

use std::collections::HashMap;

use serde::Deserialize;

/// One row of the tabular master-data source.
///
/// `aliases` may hold several comma-separated tokens; each one maps
/// independently to the same external id.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryRow {
    pub aliases: String,
    pub external_id: String,
    pub approver: String,
}

impl DirectoryRow {
    pub fn new(
        aliases: impl Into<String>,
        external_id: impl Into<String>,
        approver: impl Into<String>,
    ) -> Self {
        Self {
            aliases: aliases.into(),
            external_id: external_id.into(),
            approver: approver.into(),
        }
    }
}

/// In-memory location master data, built once per run and read-only after.
///
/// Alias tokens are lowercased before insertion; on duplicate aliases the
/// last-registered row wins (plain table overwrite, no error). A handful of
/// external ids are synonyms routed to the same approver and are seeded even
/// when absent from the row table.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDirectory {
    aliases: HashMap<String, String>,
    approvers: HashMap<String, String>,
}

/// Synonym codes always present in the approver map.
const APPROVER_SEEDS: &[(&str, &str)] = &[
    ("L4", "Seinäjoki, Sushibar"),
    ("L5", "Seppälä, Sushibar"),
    ("L24", "Lappeenranta, Sushibar"),
];

impl ReferenceDirectory {
    /// Build a directory from master-data rows.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = DirectoryRow>,
    {
        let mut dir = Self::default();
        for (external_id, approver) in APPROVER_SEEDS {
            dir.approvers
                .insert((*external_id).to_string(), (*approver).to_string());
        }
        for row in rows {
            for alias in row.aliases.split(',') {
                let alias = alias.trim().to_lowercase();
                if !alias.is_empty() {
                    dir.aliases.insert(alias, row.external_id.clone());
                }
            }
            let approver = row.approver.trim();
            if !approver.is_empty() {
                dir.approvers
                    .insert(row.external_id.clone(), approver.to_string());
            }
        }
        dir
    }

    /// External id registered for an alias token, if any.
    pub fn external_id(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Approver registered for an external id, if any.
    pub fn approver(&self, external_id: &str) -> Option<&str> {
        self.approvers.get(external_id).map(String::as_str)
    }

    /// Iterate over all registered alias tokens.
    pub fn alias_tokens(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    /// Number of registered alias tokens.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
