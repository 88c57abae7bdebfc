use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::domain::entities::statement::Workbook;
use crate::error::DashboardError;
use crate::usecase::ports::workbook::WorkbookLoader;

/// The workbook currently on screen, parsed once per load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedWorkbook {
    pub path: PathBuf,
    pub loaded_at: DateTime<Local>,
    pub workbook: Arc<Workbook>,
}

/// Holds at most one loaded workbook. A failed load leaves the current one
/// untouched.
pub struct WorkbookSession {
    loader: Arc<dyn WorkbookLoader>,
    current: Option<LoadedWorkbook>,
}

impl WorkbookSession {
    pub fn new(loader: Arc<dyn WorkbookLoader>) -> Self {
        Self {
            loader,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&LoadedWorkbook> {
        self.current.as_ref()
    }

    pub fn load(&mut self, path: &Path) -> Result<&LoadedWorkbook, DashboardError> {
        let workbook = self.loader.load(path)?;
        tracing::info!(
            path = %path.display(),
            tabs = workbook.tabs.len(),
            skipped = workbook.skipped.len(),
            "workbook loaded"
        );
        Ok(&*self.current.insert(LoadedWorkbook {
            path: path.to_path_buf(),
            loaded_at: Local::now(),
            workbook: Arc::new(workbook),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::statement::{LineItem, Tab};

    struct FakeLoader;

    impl WorkbookLoader for FakeLoader {
        fn load(&self, path: &Path) -> Result<Workbook, DashboardError> {
            if path.ends_with("broken.xlsx") {
                return Err(DashboardError::TabNotFound("broken".to_string()));
            }
            Ok(Workbook {
                source_name: path.display().to_string(),
                tabs: vec![Tab::new("2023", vec![LineItem::new("Gross Profit", 1.0)])],
                skipped: Vec::new(),
            })
        }
    }

    #[test]
    fn failed_load_keeps_previous_workbook() {
        let mut session = WorkbookSession::new(Arc::new(FakeLoader));
        assert!(session.current().is_none());

        session
            .load(Path::new("good.xlsx"))
            .expect("first load should succeed");
        let result = session.load(Path::new("broken.xlsx"));

        assert!(result.is_err());
        let current = session.current().expect("previous workbook kept");
        assert_eq!(current.path, PathBuf::from("good.xlsx"));
        assert_eq!(current.workbook.tab_names(), ["2023"]);
    }

    #[test]
    fn new_load_replaces_workbook() {
        let mut session = WorkbookSession::new(Arc::new(FakeLoader));
        session.load(Path::new("first.xlsx")).expect("should load");
        session.load(Path::new("second.xlsx")).expect("should load");
        assert_eq!(
            session.current().map(|c| c.workbook.source_name.clone()),
            Some("second.xlsx".to_string())
        );
    }
}
