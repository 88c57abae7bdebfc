/// Tabs picked for comparison, in the order the user picked them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabSelection {
    names: Vec<String>,
}

impl TabSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Selects `name` at the end, or drops it if it was already selected.
    pub fn toggle(&mut self, name: &str) {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
        } else {
            self.names.push(name.to_string());
        }
    }

    /// Keeps only names still offered by the current workbook.
    pub fn retain_available(&mut self, available: &[String]) {
        self.names.retain(|n| available.contains(n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_appends_in_click_order() {
        let mut selection = TabSelection::new();
        selection.toggle("2024");
        selection.toggle("2022");
        selection.toggle("2023");
        assert_eq!(selection.names(), ["2024", "2022", "2023"]);

        selection.toggle("2022");
        assert_eq!(selection.names(), ["2024", "2023"]);

        selection.toggle("2022");
        assert_eq!(selection.names(), ["2024", "2023", "2022"]);
    }

    #[test]
    fn retain_drops_unknown_tabs() {
        let mut selection = TabSelection::new();
        selection.toggle("A");
        selection.toggle("B");
        selection.retain_available(&["B".to_string(), "C".to_string()]);
        assert_eq!(selection.names(), ["B"]);
        assert!(!selection.contains("A"));
    }
}
