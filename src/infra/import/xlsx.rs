use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::domain::entities::layout::StatementLayout;
use crate::domain::entities::statement::{LineItem, SkippedSheet, Tab, Workbook};
use crate::domain::money::parse_currency;
use crate::error::DashboardError;
use crate::usecase::ports::workbook::WorkbookLoader;

pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xls", "xlsb", "ods"];

pub fn is_supported_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Numeric reading of a `Value` cell. `None` when the cell holds something
/// that is not an amount.
pub fn cell_to_amount(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        Data::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
        Data::Empty => Some(0.0),
        Data::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Some(0.0);
            }
            match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => parse_currency(trimmed).ok(),
            }
        }
        _ => None,
    }
}

/// Reads statement rows below the header row. `Err` names the first
/// required column the header lacks.
pub fn read_statement_rows(
    sheet: &str,
    range: &Range<Data>,
    layout: &StatementLayout,
) -> Result<Vec<LineItem>, String> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(layout.account_column.clone());
    };

    let column_idx = |name: &str| {
        header
            .iter()
            .position(|cell| cell_to_string(cell) == name)
            .ok_or_else(|| name.to_string())
    };
    let account_idx = column_idx(&layout.account_column)?;
    let value_idx = column_idx(&layout.value_column)?;

    let mut items = Vec::new();
    for (row_idx, row) in rows.enumerate() {
        let account = row.get(account_idx).map(cell_to_string).unwrap_or_default();
        if account.is_empty() {
            continue;
        }
        let value = match row.get(value_idx) {
            None => 0.0,
            Some(cell) => cell_to_amount(cell).unwrap_or_else(|| {
                // Header is row 1, data starts at row 2.
                tracing::warn!(
                    sheet,
                    row = row_idx + 2,
                    cell = %cell_to_string(cell),
                    "value is not a number, counting it as zero"
                );
                0.0
            }),
        };
        items.push(LineItem { account, value });
    }
    Ok(items)
}

/// Loads every worksheet that looks like an income statement.
#[derive(Debug, Clone, Default)]
pub struct XlsxWorkbookLoader {
    layout: StatementLayout,
}

impl XlsxWorkbookLoader {
    pub fn new(layout: StatementLayout) -> Self {
        Self { layout }
    }
}

impl WorkbookLoader for XlsxWorkbookLoader {
    fn load(&self, path: &Path) -> Result<Workbook, DashboardError> {
        if !is_supported_workbook(path) {
            return Err(DashboardError::UnsupportedFile {
                path: path.to_path_buf(),
            });
        }

        let mut workbook =
            open_workbook_auto(path).map_err(|source| DashboardError::WorkbookOpen {
                path: path.to_path_buf(),
                source,
            })?;

        let mut tabs = Vec::new();
        let mut skipped = Vec::new();
        for sheet in workbook.sheet_names() {
            let range =
                workbook
                    .worksheet_range(&sheet)
                    .map_err(|source| DashboardError::SheetRead {
                        sheet: sheet.clone(),
                        source,
                    })?;

            match read_statement_rows(&sheet, &range, &self.layout) {
                Ok(rows) => tabs.push(Tab::new(sheet, rows)),
                Err(missing_column) => {
                    tracing::warn!(
                        sheet = %sheet,
                        column = %missing_column,
                        "sheet skipped, required column not found"
                    );
                    skipped.push(SkippedSheet {
                        name: sheet,
                        missing_column,
                    });
                }
            }
        }

        if tabs.is_empty() {
            return Err(DashboardError::NoStatementSheets {
                path: path.to_path_buf(),
                account_column: self.layout.account_column.clone(),
                value_column: self.layout.value_column.clone(),
            });
        }

        let source_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("workbook")
            .to_string();

        Ok(Workbook {
            source_name,
            tabs,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{unique_test_dir, write_statement_workbook, FixtureCell, FixtureSheet};
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_workbook(Path::new("DRE.XLSX")));
        assert!(is_supported_workbook(Path::new("dre.ods")));
        assert!(!is_supported_workbook(Path::new("dre.csv")));
        assert!(!is_supported_workbook(Path::new("dre")));
    }

    #[test]
    fn amounts_from_text_cells() {
        assert_eq!(cell_to_amount(&Data::String("1500.5".to_string())), Some(1500.5));
        assert_eq!(cell_to_amount(&Data::String("R$ 1.234,56".to_string())), Some(1234.56));
        assert_eq!(cell_to_amount(&Data::String("n/a".to_string())), None);
        assert_eq!(cell_to_amount(&Data::String("-1.500,75".to_string())), Some(-1500.75));
        assert_eq!(cell_to_amount(&Data::Int(7)), Some(7.0));
        assert_eq!(cell_to_amount(&Data::Empty), Some(0.0));
    }

    #[test]
    fn misgrouped_text_amounts_are_not_numbers() {
        for text in ["1,234.56", "1.2.3,4", "12.34,5,6"] {
            assert_eq!(cell_to_amount(&Data::String(text.to_string())), None, "{text}");
        }
    }

    #[test]
    fn unsupported_extension_fails_before_opening() {
        let loader = XlsxWorkbookLoader::default();
        let err = loader
            .load(Path::new("does-not-exist.csv"))
            .unwrap_err();
        assert!(matches!(err, DashboardError::UnsupportedFile { .. }));
    }

    #[test]
    fn corrupt_file_is_an_open_error() {
        let temp_dir = unique_test_dir("corrupt-xlsx");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let path = temp_dir.join("broken.xlsx");
        fs::write(&path, b"this is not a zip archive").expect("should write fixture");

        let err = XlsxWorkbookLoader::default().load(&path).unwrap_err();
        assert!(matches!(err, DashboardError::WorkbookOpen { .. }));

        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }

    #[test]
    fn loads_statement_sheets_and_skips_others() {
        let temp_dir = unique_test_dir("load-xlsx");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let path: PathBuf = temp_dir.join("dre.xlsx");

        write_statement_workbook(
            &path,
            &[
                FixtureSheet {
                    name: "Capa",
                    header: &["Empresa", "Observação"],
                    rows: &[&[FixtureCell::Text("ACME"), FixtureCell::Text("2023")]],
                },
                FixtureSheet {
                    name: "2023",
                    header: &["Notes", "Value", "Account"],
                    rows: &[
                        &[
                            FixtureCell::Text("x"),
                            FixtureCell::Number(1000.0),
                            FixtureCell::Text("Net Revenue from Sales"),
                        ],
                        &[
                            FixtureCell::Empty,
                            FixtureCell::Text("1.234,50"),
                            FixtureCell::Text("Gross Profit"),
                        ],
                        &[
                            FixtureCell::Empty,
                            FixtureCell::Number(99.0),
                            FixtureCell::Empty,
                        ],
                        &[
                            FixtureCell::Empty,
                            FixtureCell::Text("n/a"),
                            FixtureCell::Text("Operating Result (EBIT)"),
                        ],
                        &[
                            FixtureCell::Empty,
                            FixtureCell::Text("1,234.56"),
                            FixtureCell::Text("Net Result for the Period"),
                        ],
                    ],
                },
            ],
        );

        let workbook = XlsxWorkbookLoader::default()
            .load(&path)
            .expect("load should succeed");

        assert_eq!(workbook.source_name, "dre.xlsx");
        assert_eq!(workbook.tab_names(), ["2023"]);
        assert_eq!(workbook.skipped.len(), 1);
        assert_eq!(workbook.skipped[0].name, "Capa");
        assert_eq!(workbook.skipped[0].missing_column, "Account");

        let tab = workbook.tab("2023").expect("tab should exist");
        assert_eq!(
            tab.rows,
            vec![
                LineItem::new("Net Revenue from Sales", 1000.0),
                LineItem::new("Gross Profit", 1234.5),
                LineItem::new("Operating Result (EBIT)", 0.0),
                LineItem::new("Net Result for the Period", 0.0),
            ]
        );

        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }

    #[test]
    fn workbook_without_statement_sheets_fails() {
        let temp_dir = unique_test_dir("no-statement");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let path = temp_dir.join("other.xlsx");

        write_statement_workbook(
            &path,
            &[FixtureSheet {
                name: "Plan1",
                header: &["Conta", "Valor"],
                rows: &[&[FixtureCell::Text("Lucro Bruto"), FixtureCell::Number(1.0)]],
            }],
        );

        let err = XlsxWorkbookLoader::default().load(&path).unwrap_err();
        assert!(matches!(err, DashboardError::NoStatementSheets { .. }));

        let workbook = XlsxWorkbookLoader::new(StatementLayout::portuguese())
            .load(&path)
            .expect("portuguese layout should accept the sheet");
        assert_eq!(workbook.tabs[0].rows[0].value, 1.0);

        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }
}
