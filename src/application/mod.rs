pub mod use_cases;

pub use use_cases::employee_import::EmployeeImportUseCase;
