pub mod capital_gains;
pub mod dashboard;
pub mod harvest;
pub mod holding;
pub mod selection;
pub mod settings;
pub mod table;
