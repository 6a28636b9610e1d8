//! Rows accepted by the bulk import endpoints, read from CSV by column position.
use error_stack::Report;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

#[derive(Debug, thiserror::Error)]
pub enum CsvImportError {
    #[error("invalid CSV format")]
    InvalidFormat,
}

/// A percent-control measurement row.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProfileCsvRecord {
    pub compound_name: String,
    pub discoverx_gene_symbol: String,
    pub entrez_gene_symbol: String,
    #[serde(default)]
    pub percent_control: Option<f64>,
    #[serde(default)]
    pub compound_concentration: Option<i64>,
}

/// A Kd measurement row. `modifier` is the relation reported by the assay, normally `=`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KdCsvRecord {
    pub compound_name: String,
    pub discoverx_gene_symbol: String,
    pub entrez_gene_symbol: String,
    #[serde(default)]
    pub modifier: Option<String>,
    #[serde(default)]
    pub kd: Option<f64>,
}

impl KdCsvRecord {
    pub fn is_exact(&self) -> bool {
        self.modifier.as_deref().is_none_or(|m| m.trim() == "=")
    }
}

/// Reads every row of `bytes` into `T`, mapping columns to fields by position.
///
/// When `header_row` is set the first line is skipped. Empty cells become `None`
/// for optional fields.
pub fn read_records<T>(bytes: &[u8], header_row: bool) -> Result<Vec<T>, Report<CsvImportError>>
where
    T: DeserializeOwned,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(header_row)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let line = index + if header_row { 2 } else { 1 };

        let record = row
            .and_then(|row| row.deserialize(None))
            .map_err(|e| {
                Report::new(e)
                    .change_context(CsvImportError::InvalidFormat)
                    .attach(format!("row {line}"))
            })?;

        records.push(record);
    }

    debug!("read {} rows from CSV", records.len());
    Ok(records)
}
