use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::balance::BankBalances;
use crate::domain::entities::selection::TabSelection;
use crate::usecase::services::session::LoadedWorkbook;

pub const READY_STATUS: &str = "Pronto";

pub struct AppState {
    pub loaded: Signal<Option<LoadedWorkbook>>,
    pub selection: Signal<TabSelection>,
    pub balances: Signal<BankBalances>,
    /// Raw text of each balance field, kept apart so typing `1.234,` is not
    /// reformatted mid-edit.
    pub balance_inputs: Signal<Vec<String>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(initial_accounts: usize) -> Self {
        let balances = BankBalances::with_count(initial_accounts);
        let inputs = vec![String::new(); balances.len()];
        Self {
            loaded: use_signal(|| None::<LoadedWorkbook>),
            selection: use_signal(TabSelection::new),
            balances: use_signal(move || balances),
            balance_inputs: use_signal(move || inputs),
            busy: use_signal(|| false),
            status: use_signal(|| READY_STATUS.to_string()),
        }
    }
}

/// Grows or shrinks the raw balance texts alongside `BankBalances::resize`.
pub fn resize_inputs(inputs: &mut Vec<String>, count: usize) {
    inputs.resize(count, String::new());
}
