use crate::domain::entities::indicators::{IndicatorField, IndicatorSet, TabIndicators};
use crate::domain::money::format_currency;

pub const TAB_COLUMN_HEADER: &str = "Guia";

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub tab: String,
    pub indicators: IndicatorSet,
}

impl ComparisonRow {
    /// Cells in column order: amounts as `R$`, margins as a plain number
    /// with two decimals (`40.50`). Table and CSV both use these.
    pub fn formatted_cells(&self) -> Vec<String> {
        IndicatorField::ALL
            .iter()
            .map(|field| {
                let value = self.indicators.get(*field);
                if field.is_currency() {
                    format_currency(value)
                } else {
                    format_margin(value)
                }
            })
            .collect()
    }
}

fn format_margin(value: f64) -> String {
    format!("{value:.2}")
}

/// Indicator sets keyed by tab, rows kept in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComparisonTable {
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn tab_names(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.tab.clone()).collect()
    }

    pub fn column(&self, field: IndicatorField) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.indicators.get(field))
            .collect()
    }

    pub fn headers() -> Vec<&'static str> {
        std::iter::once(TAB_COLUMN_HEADER)
            .chain(IndicatorField::ALL.iter().map(|field| field.header()))
            .collect()
    }

    /// A tab already present keeps its position and takes the new values.
    fn upsert(&mut self, tab: &str, indicators: IndicatorSet) {
        match self.rows.iter_mut().find(|row| row.tab == tab) {
            Some(row) => row.indicators = indicators,
            None => self.rows.push(ComparisonRow {
                tab: tab.to_string(),
                indicators,
            }),
        }
    }
}

/// Ordered `(tab, amount)` points for the trend chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    pub points: Vec<(String, f64)>,
}

impl TrendSeries {
    fn upsert(&mut self, tab: &str, amount: f64) {
        match self.points.iter_mut().find(|(name, _)| name == tab) {
            Some(point) => point.1 = amount,
            None => self.points.push((tab.to_string(), amount)),
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, value)| *value).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comparison {
    pub table: ComparisonTable,
    pub gross_revenue: TrendSeries,
    pub net_income: TrendSeries,
}

/// Collects per-tab results into one table plus the two trend series.
///
/// Any input is accepted, empty and single-tab included; deciding whether a
/// comparison is worth showing is up to the caller.
pub fn build_comparison(entries: &[TabIndicators]) -> Comparison {
    let mut comparison = Comparison::default();
    for entry in entries {
        comparison.table.upsert(&entry.tab, entry.indicators);
        comparison
            .gross_revenue
            .upsert(&entry.tab, entry.gross_revenue);
        comparison.net_income.upsert(&entry.tab, entry.net_income);
    }
    comparison
}
