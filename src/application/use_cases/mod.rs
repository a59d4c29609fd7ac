pub mod employee_import;
pub mod header_aliases;
pub mod record_normalizer;
