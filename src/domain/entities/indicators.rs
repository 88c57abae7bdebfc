/// Ratios and absolute amounts derived from one tab.
///
/// Margins are percentages of `net_revenue` and are `0.0` whenever
/// `net_revenue` is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorSet {
    pub net_revenue: f64,
    pub gross_profit: f64,
    pub ebit: f64,
    pub net_income: f64,
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub net_margin: f64,
}

impl IndicatorSet {
    pub fn get(&self, field: IndicatorField) -> f64 {
        match field {
            IndicatorField::NetRevenue => self.net_revenue,
            IndicatorField::GrossProfit => self.gross_profit,
            IndicatorField::Ebit => self.ebit,
            IndicatorField::NetIncome => self.net_income,
            IndicatorField::GrossMargin => self.gross_margin,
            IndicatorField::OperatingMargin => self.operating_margin,
            IndicatorField::NetMargin => self.net_margin,
        }
    }
}

/// Indicators of a named tab plus the raw sums feeding the trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TabIndicators {
    pub tab: String,
    pub indicators: IndicatorSet,
    pub gross_revenue: f64,
    pub net_income: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorField {
    NetRevenue,
    GrossProfit,
    Ebit,
    NetIncome,
    GrossMargin,
    OperatingMargin,
    NetMargin,
}

impl IndicatorField {
    pub const ALL: [IndicatorField; 7] = [
        IndicatorField::NetRevenue,
        IndicatorField::GrossProfit,
        IndicatorField::Ebit,
        IndicatorField::NetIncome,
        IndicatorField::GrossMargin,
        IndicatorField::OperatingMargin,
        IndicatorField::NetMargin,
    ];

    pub const AMOUNTS: [IndicatorField; 4] = [
        IndicatorField::NetRevenue,
        IndicatorField::GrossProfit,
        IndicatorField::Ebit,
        IndicatorField::NetIncome,
    ];

    pub const MARGINS: [IndicatorField; 3] = [
        IndicatorField::GrossMargin,
        IndicatorField::OperatingMargin,
        IndicatorField::NetMargin,
    ];

    pub fn header(self) -> &'static str {
        match self {
            IndicatorField::NetRevenue => "Receita Líquida",
            IndicatorField::GrossProfit => "Lucro Bruto",
            IndicatorField::Ebit => "EBIT",
            IndicatorField::NetIncome => "Lucro Líquido",
            IndicatorField::GrossMargin => "Margem Bruta (%)",
            IndicatorField::OperatingMargin => "Margem Operacional (%)",
            IndicatorField::NetMargin => "Margem Líquida (%)",
        }
    }

    pub fn is_currency(self) -> bool {
        Self::AMOUNTS.contains(&self)
    }
}
