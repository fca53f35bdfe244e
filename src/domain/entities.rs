// Column type tags carried by the dashboard's table format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Number,
}

// One column of the result table.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub id: String,
    pub label: String,
    pub column_type: ColumnType,
}

// Tabular query results as returned by the status endpoint.
// Every row holds exactly one cell per column; absent cells are empty strings.
#[derive(Clone, Debug, PartialEq)]
pub struct DataTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

// One status response from the dashboard service.
#[derive(Clone, Debug)]
pub struct QueryStatus {
    pub message: String,
    pub table: Option<DataTable>,
    pub failed: bool,
    pub last_run: Option<String>,
}

impl QueryStatus {
    // A response is terminal once it carries results or reports failure.
    pub fn is_terminal(&self) -> bool {
        self.failed || self.table.is_some()
    }
}
