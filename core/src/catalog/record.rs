use serde::{Deserialize, Serialize};

/// One observed image, as read from the image table.
///
/// `flags` runs parallel to the owning [`Catalog`]'s mineral-name list; the
/// record stays immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub region: String,
    pub filename: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing)]
    #[serde(default)]
    pub flags: Vec<bool>,
}

/// The loaded image table: records in file order plus the mineral flag
/// columns in column order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    minerals: Vec<String>,
    records: Vec<ImageRecord>,
}

impl Catalog {
    pub fn new(minerals: Vec<String>, records: Vec<ImageRecord>) -> Self {
        Self { minerals, records }
    }

    /// Mineral flag column names, in the column order of the source table.
    pub fn minerals(&self) -> &[String] {
        &self.minerals
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record whose flag for `mineral` is set, in table order.
    ///
    /// A name that is not a flag column yields the empty sequence; the dropdown
    /// only ever offers known columns, but hand-edited URLs reach here too.
    pub fn filter_by_mineral(&self, mineral: &str) -> Vec<&ImageRecord> {
        let Some(index) = self.minerals.iter().position(|name| name == mineral) else {
            return Vec::new();
        };
        self.records
            .iter()
            .filter(|record| record.flags.get(index).copied().unwrap_or(false))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, flags: Vec<bool>) -> ImageRecord {
        ImageRecord {
            id: id.to_string(),
            region: "Jezero Crater".to_string(),
            filename: format!("{id}.jpg"),
            latitude: 18.4,
            longitude: 77.7,
            flags,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec!["Olivine".to_string(), "Hematite".to_string()],
            vec![
                record("img-001", vec![true, false]),
                record("img-002", vec![false, true]),
                record("img-003", vec![true, true]),
            ],
        )
    }

    #[test]
    fn filter_returns_flagged_rows_in_table_order() {
        let catalog = sample_catalog();
        let hits = catalog.filter_by_mineral("Olivine");
        let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["img-001", "img-003"]);
    }

    #[test]
    fn filter_unknown_mineral_is_empty() {
        let catalog = sample_catalog();
        assert!(catalog.filter_by_mineral("Kryptonite").is_empty());
    }

    #[test]
    fn filter_does_not_mutate_the_catalog() {
        let catalog = sample_catalog();
        let before = catalog.len();
        let _ = catalog.filter_by_mineral("Hematite");
        let _ = catalog.filter_by_mineral("Hematite");
        assert_eq!(catalog.len(), before);
        assert_eq!(catalog.minerals().len(), 2);
    }

    #[test]
    fn repeated_selections_yield_identical_results() {
        let catalog = sample_catalog();
        let first: Vec<&str> = catalog
            .filter_by_mineral("Olivine")
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        let _ = catalog.filter_by_mineral("Hematite");
        let again: Vec<&str> = catalog
            .filter_by_mineral("Olivine")
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(first, again);
    }
}
