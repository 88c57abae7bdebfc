pub mod charts;
pub mod comparison;
pub mod dashboard;
pub mod indicators;
pub mod session;
