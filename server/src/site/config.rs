use anyhow::Context;
use mineralcore::prelude::TableSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_metadata_columns() -> usize {
    TableSchema::DEFAULT_METADATA_COLUMNS
}

fn default_port() -> u16 {
    8080
}

/// Site-level configuration: table locations, asset directory, bind port,
/// and the image table's metadata column count.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SiteConfig {
    pub image_table: PathBuf,
    pub description_table: PathBuf,
    pub assets_dir: PathBuf,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_metadata_columns")]
    pub metadata_columns: usize,
}

impl SiteConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading site config {}", path_ref.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing site config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        image_table: PathBuf,
        description_table: PathBuf,
        assets_dir: PathBuf,
        port: u16,
    ) -> Self {
        Self {
            image_table,
            description_table,
            assets_dir,
            port,
            metadata_columns: default_metadata_columns(),
        }
    }

    pub fn table_schema(&self) -> TableSchema {
        TableSchema {
            metadata_columns: self.metadata_columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_uses_the_default_schema() {
        let cfg = SiteConfig::from_args(
            PathBuf::from("data/db.csv"),
            PathBuf::from("data/minerals.csv"),
            PathBuf::from("assets"),
            8080,
        );
        assert_eq!(
            cfg.table_schema().metadata_columns,
            TableSchema::DEFAULT_METADATA_COLUMNS
        );
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"image_table: data/db.csv\n\
              description_table: data/minerals.csv\n\
              assets_dir: assets\n\
              port: 9090\n\
              metadata_columns: 6\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = SiteConfig::load(&path).unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.metadata_columns, 6);
    }

    #[test]
    fn config_load_defaults_optional_fields() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"image_table: data/db.csv\n\
              description_table: data/minerals.csv\n\
              assets_dir: assets\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = SiteConfig::load(&path).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(
            cfg.metadata_columns,
            TableSchema::DEFAULT_METADATA_COLUMNS
        );
    }
}
