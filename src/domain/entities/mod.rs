pub mod balance;
pub mod indicators;
pub mod layout;
pub mod selection;
pub mod statement;
