//! CSV record loaders for the reference dataset.
//!
//! The crate ships no dataset of its own; bootstrap code loads the published
//! division tables (one CSV per level, `code,name[,parent_code]`, with a
//! header row) and feeds the records to [`DivisionIndex`] construction.
//!
//! [`DivisionIndex`]: crate::DivisionIndex

use crate::division::{District, Province, Ward};
use crate::error::DatasetError;

/// Parses `code,name` province records.
pub fn parse_provinces(csv: &str) -> Result<Vec<Province>, DatasetError> {
    parse_records(csv, 2, |fields| {
        Ok(Province::new(fields.code, fields.name))
    })
}

/// Parses `code,name,province_code` district records.
pub fn parse_districts(csv: &str) -> Result<Vec<District>, DatasetError> {
    parse_records(csv, 3, |fields| {
        Ok(District::new(fields.code, fields.name, fields.parent()?))
    })
}

/// Parses `code,name,parent_code` ward records. The parent column holds a
/// district code for a three-level dataset and a province code for a
/// two-level one.
pub fn parse_wards(csv: &str) -> Result<Vec<Ward>, DatasetError> {
    parse_records(csv, 3, |fields| {
        Ok(Ward::new(fields.code, fields.name, fields.parent()?))
    })
}

struct RecordFields<'a> {
    line: usize,
    code: u32,
    name: &'a str,
    parent_field: Option<&'a str>,
}

impl RecordFields<'_> {
    fn parent(&self) -> Result<u32, DatasetError> {
        let raw = self.parent_field.unwrap_or("");
        raw.trim()
            .parse()
            .map_err(|_| malformed(self.line, format!("invalid parent code {raw:?}")))
    }
}

fn parse_records<T>(
    csv: &str,
    columns: usize,
    build: impl Fn(RecordFields<'_>) -> Result<T, DatasetError>,
) -> Result<Vec<T>, DatasetError> {
    let mut records = Vec::new();
    // Line 1 is the header.
    for (line, raw) in csv.lines().enumerate().skip(1) {
        let line = line + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = raw.splitn(columns, ',').collect();
        if parts.len() < columns {
            return Err(malformed(
                line,
                format!("expected {columns} fields, got {}", parts.len()),
            ));
        }
        let code = parts[0]
            .trim()
            .parse()
            .map_err(|_| malformed(line, format!("invalid code {:?}", parts[0])))?;
        let name = parts[1].trim();
        if name.is_empty() {
            return Err(malformed(line, "empty name".to_string()));
        }
        records.push(build(RecordFields {
            line,
            code,
            name,
            parent_field: parts.get(2).copied(),
        })?);
    }
    Ok(records)
}

fn malformed(line: usize, reason: String) -> DatasetError {
    DatasetError::MalformedRecord { line, reason }
}
