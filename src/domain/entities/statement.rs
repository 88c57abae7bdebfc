/// One row of an income-statement worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub account: String,
    pub value: f64,
}

impl LineItem {
    pub fn new(account: impl Into<String>, value: f64) -> Self {
        Self {
            account: account.into(),
            value,
        }
    }
}

/// A worksheet holding one period's (or one entity's) statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub name: String,
    pub rows: Vec<LineItem>,
}

impl Tab {
    pub fn new(name: impl Into<String>, rows: Vec<LineItem>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSheet {
    pub name: String,
    pub missing_column: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    pub source_name: String,
    pub tabs: Vec<Tab>,
    pub skipped: Vec<SkippedSheet>,
}

impl Workbook {
    pub fn tab(&self, name: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.name == name)
    }

    pub fn tab_names(&self) -> Vec<String> {
        self.tabs.iter().map(|tab| tab.name.clone()).collect()
    }
}
