use crate::domain::money::parse_currency;

pub const MIN_BANK_ACCOUNTS: usize = 1;
pub const MAX_BANK_ACCOUNTS: usize = 10;

/// A manually entered bank balance. Never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BankBalance {
    pub bank_name: String,
    pub balance: f64,
}

impl BankBalance {
    /// Name shown on the balance card; blank names fall back to `Banco N`.
    pub fn display_name(&self, position: usize) -> String {
        let trimmed = self.bank_name.trim();
        if trimmed.is_empty() {
            format!("Banco {}", position + 1)
        } else {
            trimmed.to_string()
        }
    }
}

pub fn clamp_account_count(count: usize) -> usize {
    count.clamp(MIN_BANK_ACCOUNTS, MAX_BANK_ACCOUNTS)
}

/// Reads a balance typed by the user. Accepts `1234.56` as well as the
/// display form `1.234,56`; anything else is zero.
pub fn parse_balance_input(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let value = match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => parse_currency(trimmed).unwrap_or(0.0),
    };
    (value * 100.0).round() / 100.0
}

/// The editable list behind the sidebar, sized between 1 and 10 entries.
#[derive(Debug, Clone, PartialEq)]
pub struct BankBalances {
    entries: Vec<BankBalance>,
}

impl BankBalances {
    pub fn with_count(count: usize) -> Self {
        Self {
            entries: vec![BankBalance::default(); clamp_account_count(count)],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[BankBalance] {
        &self.entries
    }

    /// Grows or shrinks the list, keeping whatever was typed in the slots
    /// that survive.
    pub fn resize(&mut self, count: usize) {
        self.entries
            .resize(clamp_account_count(count), BankBalance::default());
    }

    pub fn set_name(&mut self, idx: usize, name: String) {
        if let Some(entry) = self.entries.get_mut(idx) {
            entry.bank_name = name;
        }
    }

    pub fn set_balance(&mut self, idx: usize, balance: f64) {
        if let Some(entry) = self.entries.get_mut(idx) {
            entry.balance = balance;
        }
    }
}

impl Default for BankBalances {
    fn default() -> Self {
        Self::with_count(3)
    }
}
