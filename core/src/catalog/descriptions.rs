use serde::{Deserialize, Serialize};

/// Shown when a flag column has no matching description row.
pub const DEFAULT_DESCRIPTION: &str =
    "No description available for this mineral. See the reference index at \
     https://www.mindat.org/ for background material.";

/// One row of the mineral description table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MineralDescription {
    pub name: String,
    pub text: String,
}

/// The loaded description table, looked up by exact mineral name.
///
/// No referential integrity against the image table's flag columns is
/// enforced; a miss falls back to [`DEFAULT_DESCRIPTION`].
#[derive(Debug, Clone, Default)]
pub struct DescriptionTable {
    rows: Vec<MineralDescription>,
}

impl DescriptionTable {
    pub fn new(rows: Vec<MineralDescription>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exact-match description lookup with the fixed fallback text.
    pub fn describe(&self, mineral: &str) -> &str {
        self.rows
            .iter()
            .find(|row| row.name == mineral)
            .map(|row| row.text.as_str())
            .unwrap_or(DEFAULT_DESCRIPTION)
    }
}
