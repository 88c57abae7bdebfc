use serde::{Deserialize, Serialize};

/// Account labels looked up in a statement sheet. Matching is exact:
/// case, accents and surrounding whitespace all count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLabels {
    pub net_revenue: String,
    pub gross_profit: String,
    pub ebit: String,
    pub net_income: String,
    pub gross_revenue: String,
}

impl AccountLabels {
    pub fn english() -> Self {
        Self {
            net_revenue: "Net Revenue from Sales".to_string(),
            gross_profit: "Gross Profit".to_string(),
            ebit: "Operating Result (EBIT)".to_string(),
            net_income: "Net Result for the Period".to_string(),
            gross_revenue: "Gross Revenue from Sales".to_string(),
        }
    }

    pub fn portuguese() -> Self {
        Self {
            net_revenue: "Receita Líquida de Vendas".to_string(),
            gross_profit: "Lucro Bruto".to_string(),
            ebit: "Resultado Operacional (EBIT)".to_string(),
            net_income: "Resultado Líquido do Exercício".to_string(),
            gross_revenue: "Receita Bruta de Vendas".to_string(),
        }
    }
}

impl Default for AccountLabels {
    fn default() -> Self {
        Self::english()
    }
}

/// Column names and account labels of a statement worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLayout {
    pub account_column: String,
    pub value_column: String,
    pub labels: AccountLabels,
}

impl StatementLayout {
    pub fn english() -> Self {
        Self {
            account_column: "Account".to_string(),
            value_column: "Value".to_string(),
            labels: AccountLabels::english(),
        }
    }

    pub fn portuguese() -> Self {
        Self {
            account_column: "Conta".to_string(),
            value_column: "Valor".to_string(),
            labels: AccountLabels::portuguese(),
        }
    }
}

impl Default for StatementLayout {
    fn default() -> Self {
        Self::english()
    }
}
