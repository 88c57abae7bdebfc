use std::path::Path;

use crate::domain::entities::statement::Workbook;
use crate::error::DashboardError;

/// Source of parsed statement workbooks.
pub trait WorkbookLoader {
    fn load(&self, path: &Path) -> Result<Workbook, DashboardError>;
}
