//! Command-line front end
//!
//! Reads one spreadsheet, prints the normalized records as a JSON array on
//! stdout and reports failures with the same text the upload page shows.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::application::EmployeeImportUseCase;
use crate::domain::employee::ParseResult;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::{AppConfig, ConfigService};
use crate::infrastructure::upload::LocalUpload;

#[derive(Debug, Parser)]
#[command(
    name = "payroll-import",
    about = "Normalize an employee spreadsheet into JSON records"
)]
pub struct Cli {
    /// Spreadsheet to import (.xlsx, .xls or .csv)
    pub file: PathBuf,

    /// Config file (default: payroll-import.toml in the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the JSON array on a single line
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, PartialEq)]
pub enum ImportOutcome {
    Records(String),
    NoValidRows,
}

pub async fn run(cli: Cli) -> ExitCode {
    let _ = dotenvy::dotenv();

    let loaded = match cli.config.as_deref() {
        Some(path) => ConfigService::load_from(path),
        None => ConfigService::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.user_message());
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_level);

    match execute(&cli, &config).await {
        Ok(ImportOutcome::Records(json)) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Ok(ImportOutcome::NoValidRows) => {
            eprintln!("No valid employee rows found in {}", cli.file.display());
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(error = %err, file = %cli.file.display(), "Import failed");
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn execute(cli: &Cli, config: &AppConfig) -> Result<ImportOutcome> {
    let use_case = EmployeeImportUseCase::new(config.import.clone());
    let records = use_case.parse_file(&LocalUpload::new(&cli.file)).await?;

    if records.is_empty() {
        return Ok(ImportOutcome::NoValidRows);
    }

    render_records(&records, cli.compact).map(ImportOutcome::Records)
}

pub fn render_records(records: &ParseResult, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(records)
    } else {
        serde_json::to_string_pretty(records)
    };
    rendered.map_err(|e| AppError::IoError(format!("Failed to serialize records: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::NormalizedRecord;
    use std::io::Write;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from(["payroll-import", "staff.xlsx", "--compact"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("staff.xlsx"));
        assert!(cli.compact);
        assert!(cli.config.is_none());

        assert!(Cli::try_parse_from(["payroll-import"]).is_err());
    }

    #[test]
    fn test_render_compact() {
        let records = vec![NormalizedRecord {
            employee_id: "E1".to_string(),
            salary: 45000.5,
            ..Default::default()
        }];
        assert_eq!(
            render_records(&records, true).unwrap(),
            r#"[{"employeeId":"E1","employeeName":"","designation":"","emailId":"","accountNumber":"","salary":45000.5}]"#
        );
    }

    #[tokio::test]
    async fn test_execute_renders_records() {
        let file = csv_file("EmployeeID,Name,Salary\nE1,Alice,50000\n");
        let cli = Cli {
            file: file.path().to_path_buf(),
            config: None,
            compact: true,
        };

        let outcome = execute(&cli, &AppConfig::default()).await.unwrap();
        match outcome {
            ImportOutcome::Records(json) => {
                let value: serde_json::Value = serde_json::from_str(&json).unwrap();
                assert_eq!(value[0]["employeeName"], "Alice");
                assert_eq!(value[0]["salary"], 50000.0);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_reports_no_valid_rows() {
        let file = csv_file("EmployeeID,Name,Salary\n,,1000\n");
        let cli = Cli {
            file: file.path().to_path_buf(),
            config: None,
            compact: false,
        };

        let outcome = execute(&cli, &AppConfig::default()).await.unwrap();
        assert_eq!(outcome, ImportOutcome::NoValidRows);
    }
}
