use crate::domain::entities::indicators::{IndicatorSet, TabIndicators};
use crate::domain::entities::layout::AccountLabels;
use crate::domain::entities::statement::{LineItem, Tab};

/// Derives an [`IndicatorSet`] from statement rows using a fixed label set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndicatorCalculator {
    labels: AccountLabels,
}

impl IndicatorCalculator {
    pub fn new(labels: AccountLabels) -> Self {
        Self { labels }
    }

    pub fn compute(&self, rows: &[LineItem]) -> IndicatorSet {
        let net_revenue = sum_account(rows, &self.labels.net_revenue);
        let gross_profit = sum_account(rows, &self.labels.gross_profit);
        let ebit = sum_account(rows, &self.labels.ebit);
        let net_income = sum_account(rows, &self.labels.net_income);

        IndicatorSet {
            net_revenue,
            gross_profit,
            ebit,
            net_income,
            gross_margin: margin(gross_profit, net_revenue),
            operating_margin: margin(ebit, net_revenue),
            net_margin: margin(net_income, net_revenue),
        }
    }

    pub fn compute_tab(&self, tab: &Tab) -> TabIndicators {
        let indicators = self.compute(&tab.rows);
        tracing::debug!(
            tab = %tab.name,
            rows = tab.rows.len(),
            net_revenue = indicators.net_revenue,
            "computed indicators"
        );
        TabIndicators {
            tab: tab.name.clone(),
            indicators,
            gross_revenue: sum_account(&tab.rows, &self.labels.gross_revenue),
            net_income: indicators.net_income,
        }
    }
}

/// Indicators with the default (English) account labels.
#[allow(dead_code)]
pub fn compute_indicators(rows: &[LineItem]) -> IndicatorSet {
    IndicatorCalculator::default().compute(rows)
}

/// Sum of every row whose account equals `label` exactly; zero when absent.
pub fn sum_account(rows: &[LineItem], label: &str) -> f64 {
    rows.iter()
        .filter(|row| row.account == label)
        .map(|row| row.value)
        .sum()
}

fn margin(numerator: f64, net_revenue: f64) -> f64 {
    if net_revenue == 0.0 {
        0.0
    } else {
        numerator / net_revenue * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(items: &[(&str, f64)]) -> Vec<LineItem> {
        items
            .iter()
            .map(|(account, value)| LineItem::new(*account, *value))
            .collect()
    }

    #[test]
    fn margins_are_zero_without_net_revenue() {
        let set = compute_indicators(&rows(&[
            ("Gross Profit", 400.0),
            ("Operating Result (EBIT)", 150.0),
            ("Net Result for the Period", 90.0),
        ]));

        assert_eq!(set.net_revenue, 0.0);
        assert_eq!(set.gross_margin, 0.0);
        assert_eq!(set.operating_margin, 0.0);
        assert_eq!(set.net_margin, 0.0);
        assert_eq!(set.gross_profit, 400.0);
    }

    #[test]
    fn gross_margin_is_share_of_net_revenue() {
        let set = compute_indicators(&rows(&[
            ("Net Revenue from Sales", 1000.0),
            ("Gross Profit", 400.0),
        ]));
        assert_eq!(set.gross_margin, 40.0);
        assert_eq!(set.operating_margin, 0.0);
    }

    #[test]
    fn duplicate_labels_are_summed() {
        let set = compute_indicators(&rows(&[
            ("Gross Profit", 10.0),
            ("Gross Profit", 20.0),
        ]));
        assert_eq!(set.gross_profit, 30.0);
    }

    #[test]
    fn matching_is_exact() {
        let set = compute_indicators(&rows(&[
            ("net revenue from sales", 500.0),
            ("Net Revenue from Sales ", 500.0),
            ("Gross Profit", 100.0),
        ]));
        assert_eq!(set.net_revenue, 0.0);
        assert_eq!(set.gross_margin, 0.0);
    }

    #[test]
    fn negative_results_give_negative_margins() {
        let set = compute_indicators(&rows(&[
            ("Net Revenue from Sales", 200.0),
            ("Operating Result (EBIT)", -50.0),
            ("Net Result for the Period", -80.0),
        ]));
        assert_eq!(set.operating_margin, -25.0);
        assert_eq!(set.net_margin, -40.0);
    }

    #[test]
    fn tab_indicators_carry_trend_sums() {
        let tab = Tab::new(
            "2023",
            rows(&[
                ("Gross Revenue from Sales", 1200.0),
                ("Net Revenue from Sales", 1000.0),
                ("Net Result for the Period", 75.0),
            ]),
        );
        let result = IndicatorCalculator::default().compute_tab(&tab);

        assert_eq!(result.tab, "2023");
        assert_eq!(result.gross_revenue, 1200.0);
        assert_eq!(result.net_income, 75.0);
        assert_eq!(result.indicators.net_margin, 7.5);
    }

    #[test]
    fn portuguese_preset_matches_brazilian_sheets() {
        let calculator = IndicatorCalculator::new(AccountLabels::portuguese());
        let set = calculator.compute(&rows(&[
            ("Receita Líquida de Vendas", 800.0),
            ("Lucro Bruto", 200.0),
            ("Resultado Operacional (EBIT)", 100.0),
            ("Resultado Líquido do Exercício", 40.0),
        ]));
        assert_eq!(set.gross_margin, 25.0);
        assert_eq!(set.operating_margin, 12.5);
        assert_eq!(set.net_margin, 5.0);
    }
}
