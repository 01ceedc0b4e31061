pub mod ephemeral;
pub mod ui;
