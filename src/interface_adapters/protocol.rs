use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{Column, ColumnType, DataTable, QueryStatus};

// Status payload returned by the data endpoint. Only the message is
// guaranteed; the rest of the fields appear as the query progresses.
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    #[serde(default)]
    pub data: Option<DataTableDto>,
    #[serde(default)]
    pub failed: Option<bool>,
    #[serde(default, rename = "lastRun")]
    pub last_run: Option<String>,
}

// Table wire format: the visualization-library column/row shape the
// service emits.
#[derive(Debug, Deserialize)]
pub struct DataTableDto {
    pub cols: Vec<ColumnDto>,
    pub rows: Vec<RowDto>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnDto {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

#[derive(Debug, Deserialize)]
pub struct RowDto {
    pub c: Vec<CellDto>,
}

#[derive(Debug, Deserialize)]
pub struct CellDto {
    #[serde(default)]
    pub v: Option<Value>,
}

impl From<StatusResponse> for QueryStatus {
    fn from(payload: StatusResponse) -> Self {
        QueryStatus {
            message: payload.message,
            table: payload.data.map(DataTable::from),
            failed: payload.failed.unwrap_or(false),
            last_run: payload.last_run,
        }
    }
}

impl From<DataTableDto> for DataTable {
    fn from(dto: DataTableDto) -> Self {
        DataTable {
            columns: dto
                .cols
                .into_iter()
                .map(|col| Column {
                    id: col.id,
                    label: col.label,
                    column_type: parse_column_type(&col.column_type),
                })
                .collect(),
            rows: dto
                .rows
                .into_iter()
                .map(|row| row.c.into_iter().map(|cell| cell_text(cell.v)).collect())
                .collect(),
        }
    }
}

fn parse_column_type(raw: &str) -> ColumnType {
    match raw {
        "number" => ColumnType::Number,
        // Unknown tags degrade to plain text rather than failing the poll.
        _ => ColumnType::Text,
    }
}

fn cell_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Null) | None => String::new(),
        // Nested values are not part of the table contract; keep them visible.
        Some(other) => other.to_string(),
    }
}
