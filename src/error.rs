use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("unsupported file type: {} (expected one of xlsx, xlsm, xls, xlsb, ods)", path.display())]
    UnsupportedFile { path: PathBuf },

    #[error("failed to open workbook {}: {source}", path.display())]
    WorkbookOpen {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("failed to read sheet '{sheet}': {source}")]
    SheetRead {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("no sheet in {} has both '{account_column}' and '{value_column}' columns", path.display())]
    NoStatementSheets {
        path: PathBuf,
        account_column: String,
        value_column: String,
    },

    #[error("sheet '{0}' is not part of the loaded workbook")]
    TabNotFound(String),

    #[error("CSV export error: {source}")]
    Export {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to resolve the configuration directory")]
    NoConfigDir,

    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
