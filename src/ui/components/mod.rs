pub mod balances;
pub mod charts;
pub mod comparison_table;
