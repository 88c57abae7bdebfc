use crate::config::ThemePalette;
use crate::domain::entities::indicators::IndicatorField;
use crate::usecase::services::comparison::{Comparison, ComparisonTable, TrendSeries};

pub const AMOUNTS_TITLE: &str = "Comparativo de Indicadores Financeiros (Valores Absolutos)";
pub const MARGINS_TITLE: &str = "Comparativo de Margens (%)";
pub const TREND_TITLE: &str = "Evolução da Receita Bruta e Lucro Líquido";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    GroupedBar,
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

/// Chart-ready data: one value per category in every series.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl Chart {
    /// Smallest and largest plotted value, always spanning zero.
    pub fn value_range(&self) -> (f64, f64) {
        self.series
            .iter()
            .flat_map(|series| series.values.iter().copied())
            .filter(|value| value.is_finite())
            .fold((0.0_f64, 0.0_f64), |(min, max), value| {
                (min.min(value), max.max(value))
            })
    }
}

pub fn amounts_chart(table: &ComparisonTable, palette: &ThemePalette) -> Chart {
    indicator_bars(
        table,
        &IndicatorField::AMOUNTS,
        &palette.amount_series,
        palette,
        AMOUNTS_TITLE,
        "Valor em R$",
    )
}

pub fn margins_chart(table: &ComparisonTable, palette: &ThemePalette) -> Chart {
    indicator_bars(
        table,
        &IndicatorField::MARGINS,
        &palette.margin_series,
        palette,
        MARGINS_TITLE,
        "Percentual (%)",
    )
}

pub fn trend_chart(comparison: &Comparison, palette: &ThemePalette) -> Chart {
    let lines: [(&str, &TrendSeries); 2] = [
        ("Receita Bruta", &comparison.gross_revenue),
        ("Lucro Líquido", &comparison.net_income),
    ];
    Chart {
        kind: ChartKind::Line,
        title: TREND_TITLE.to_string(),
        x_label: "Guias".to_string(),
        y_label: "Valor em R$".to_string(),
        categories: comparison.gross_revenue.labels(),
        series: lines
            .iter()
            .enumerate()
            .map(|(idx, (name, trend))| ChartSeries {
                name: name.to_string(),
                color: palette.color_at(&palette.trend_series, idx).to_string(),
                values: trend.values(),
            })
            .collect(),
    }
}

fn indicator_bars(
    table: &ComparisonTable,
    fields: &[IndicatorField],
    colors: &[String],
    palette: &ThemePalette,
    title: &str,
    y_label: &str,
) -> Chart {
    Chart {
        kind: ChartKind::GroupedBar,
        title: title.to_string(),
        x_label: "Guias".to_string(),
        y_label: y_label.to_string(),
        categories: table.tab_names(),
        series: fields
            .iter()
            .enumerate()
            .map(|(idx, field)| ChartSeries {
                name: field.header().to_string(),
                color: palette.color_at(colors, idx).to_string(),
                values: table.column(*field),
            })
            .collect(),
    }
}
