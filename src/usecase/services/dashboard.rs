use crate::config::ThemePalette;
use crate::domain::entities::balance::BankBalance;
use crate::domain::entities::indicators::TabIndicators;
use crate::domain::entities::statement::Workbook;
use crate::domain::money::format_currency;
use crate::error::DashboardError;
use crate::usecase::services::charts::{amounts_chart, margins_chart, trend_chart, Chart};
use crate::usecase::services::comparison::{build_comparison, Comparison};
use crate::usecase::services::indicators::IndicatorCalculator;

/// Comparison is only shown once this many tabs are selected.
pub const MIN_TABS_FOR_COMPARISON: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceCard {
    pub label: String,
    pub amount: f64,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub comparison: Comparison,
    pub amounts_chart: Chart,
    pub margins_chart: Chart,
    pub trend_chart: Chart,
}

/// Everything the page renders for one set of inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewModel {
    pub balances: Vec<BalanceCard>,
    pub tabs: Vec<TabIndicators>,
    pub comparison: Option<ComparisonView>,
}

impl ViewModel {
    pub fn can_export(&self) -> bool {
        self.comparison.is_some()
    }
}

/// Stateless `(workbook, selection, balances) -> ViewModel` step, run again
/// on every input change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardPipeline {
    calculator: IndicatorCalculator,
    palette: ThemePalette,
}

impl DashboardPipeline {
    pub fn new(calculator: IndicatorCalculator, palette: ThemePalette) -> Self {
        Self {
            calculator,
            palette,
        }
    }

    pub fn build_view_model(
        &self,
        workbook: Option<&Workbook>,
        selected_tabs: &[String],
        balances: &[BankBalance],
    ) -> Result<ViewModel, DashboardError> {
        let balances = balance_cards(balances);

        let Some(workbook) = workbook else {
            return Ok(ViewModel {
                balances,
                ..ViewModel::default()
            });
        };

        let tabs = selected_tabs
            .iter()
            .map(|name| {
                workbook
                    .tab(name)
                    .map(|tab| self.calculator.compute_tab(tab))
                    .ok_or_else(|| DashboardError::TabNotFound(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let comparison = if tabs.len() >= MIN_TABS_FOR_COMPARISON {
            let comparison = build_comparison(&tabs);
            Some(ComparisonView {
                amounts_chart: amounts_chart(&comparison.table, &self.palette),
                margins_chart: margins_chart(&comparison.table, &self.palette),
                trend_chart: trend_chart(&comparison, &self.palette),
                comparison,
            })
        } else {
            None
        };

        tracing::debug!(
            selected = tabs.len(),
            comparison = comparison.is_some(),
            "view model rebuilt"
        );

        Ok(ViewModel {
            balances,
            tabs,
            comparison,
        })
    }
}

fn balance_cards(balances: &[BankBalance]) -> Vec<BalanceCard> {
    balances
        .iter()
        .enumerate()
        .map(|(idx, entry)| BalanceCard {
            label: entry.display_name(idx),
            amount: entry.balance,
            formatted: format_currency(entry.balance),
        })
        .collect()
}
