use serde::{Deserialize, Serialize};

/// Column layout of the image table.
///
/// The first `metadata_columns` columns are fixed metadata (identifier,
/// region, filename, latitude, longitude); every column after them is a
/// mineral flag column. Kept as an explicit value rather than a positional
/// assumption so a schema change is a config edit, not a code edit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableSchema {
    pub metadata_columns: usize,
}

impl TableSchema {
    pub const DEFAULT_METADATA_COLUMNS: usize = 5;
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            metadata_columns: Self::DEFAULT_METADATA_COLUMNS,
        }
    }
}

/// Common error type for table loading.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    #[error("malformed row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
