//! One-shot CSV loaders for the two input tables.
//!
//! Both tables are read fully at startup and never reloaded. Any shortfall
//! (missing file, short header, ragged row, unparseable coordinate) is fatal
//! to the caller; there is no partial or degraded mode.

use crate::catalog::descriptions::{DescriptionTable, MineralDescription};
use crate::catalog::record::{Catalog, ImageRecord};
use crate::prelude::{CatalogError, CatalogResult, TableSchema};
use log::info;
use std::fs;
use std::path::Path;

// Fixed positions of the metadata columns within the image table.
const COL_ID: usize = 0;
const COL_REGION: usize = 1;
const COL_FILENAME: usize = 2;
const COL_LATITUDE: usize = 3;
const COL_LONGITUDE: usize = 4;

/// Loads the image/flag table. Columns after the schema's metadata prefix are
/// mineral flag columns; a flag cell is true exactly when it reads `1`.
pub fn load_catalog<P: AsRef<Path>>(path: P, schema: TableSchema) -> CatalogResult<Catalog> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref).map_err(|source| CatalogError::Io {
        path: path_ref.display().to_string(),
        source,
    })?;
    let catalog = parse_catalog(&contents, schema)?;
    info!(
        "image table {}: {} records, {} mineral columns",
        path_ref.display(),
        catalog.len(),
        catalog.minerals().len()
    );
    Ok(catalog)
}

fn parse_catalog(contents: &str, schema: TableSchema) -> CatalogResult<Catalog> {
    if schema.metadata_columns <= COL_LONGITUDE {
        return Err(CatalogError::MalformedHeader(format!(
            "schema needs at least {} metadata columns, got {}",
            COL_LONGITUDE + 1,
            schema.metadata_columns
        )));
    }

    let mut lines = contents.lines().enumerate();
    let (_, header_line) = lines
        .next()
        .ok_or_else(|| CatalogError::MalformedHeader("empty table".to_string()))?;
    let header: Vec<&str> = header_line.split(',').map(str::trim).collect();
    if header.len() <= schema.metadata_columns {
        return Err(CatalogError::MalformedHeader(format!(
            "{} columns leave no mineral flag columns after the {}-column metadata prefix",
            header.len(),
            schema.metadata_columns
        )));
    }

    let minerals: Vec<String> = header[schema.metadata_columns..]
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut records = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != header.len() {
            return Err(CatalogError::MalformedRow {
                line: index + 1,
                reason: format!("expected {} columns, found {}", header.len(), fields.len()),
            });
        }

        let latitude = parse_coordinate(fields[COL_LATITUDE], "latitude", index + 1)?;
        let longitude = parse_coordinate(fields[COL_LONGITUDE], "longitude", index + 1)?;
        let flags = fields[schema.metadata_columns..]
            .iter()
            .map(|cell| *cell == "1")
            .collect();

        records.push(ImageRecord {
            id: fields[COL_ID].to_string(),
            region: fields[COL_REGION].to_string(),
            filename: fields[COL_FILENAME].to_string(),
            latitude,
            longitude,
            flags,
        });
    }

    Ok(Catalog::new(minerals, records))
}

fn parse_coordinate(cell: &str, what: &str, line: usize) -> CatalogResult<f64> {
    cell.parse().map_err(|_| CatalogError::MalformedRow {
        line,
        reason: format!("{what} {cell:?} is not numeric"),
    })
}

/// Loads the mineral description table (name column, free-text column).
///
/// The text column is split off at the first comma only, so descriptions may
/// themselves contain commas; surrounding double quotes are stripped.
pub fn load_descriptions<P: AsRef<Path>>(path: P) -> CatalogResult<DescriptionTable> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref).map_err(|source| CatalogError::Io {
        path: path_ref.display().to_string(),
        source,
    })?;
    let table = parse_descriptions(&contents)?;
    info!(
        "description table {}: {} rows",
        path_ref.display(),
        table.len()
    );
    Ok(table)
}

fn parse_descriptions(contents: &str) -> CatalogResult<DescriptionTable> {
    let mut lines = contents.lines().enumerate();
    lines
        .next()
        .ok_or_else(|| CatalogError::MalformedHeader("empty table".to_string()))?;

    let mut rows = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let (name, text) = line
            .split_once(',')
            .ok_or_else(|| CatalogError::MalformedRow {
                line: index + 1,
                reason: "expected a name column and a text column".to_string(),
            })?;
        rows.push(MineralDescription {
            name: name.trim().to_string(),
            text: text.trim().trim_matches('"').to_string(),
        });
    }

    Ok(DescriptionTable::new(rows))
}
