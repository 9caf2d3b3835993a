pub mod generate;
pub mod import;
pub mod terminal;
