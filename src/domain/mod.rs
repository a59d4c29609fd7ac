pub mod error;
pub mod import_config;

// Employee spreadsheet records
pub mod employee;
