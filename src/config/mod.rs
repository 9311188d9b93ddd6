pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "babynames")]
#[command(about = "Extracts and alphabetizes baby names from html")]
pub struct CliConfig {
    /// Write each result to <file>.summary instead of stdout
    #[arg(long)]
    pub summaryfile: bool,

    /// Report file(s) to parse
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<String>,
}

impl ConfigProvider for CliConfig {
    fn files(&self) -> &[String] {
        &self.files
    }

    fn summary_file(&self) -> bool {
        self.summaryfile
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("files", &self.files)?;
        for file in &self.files {
            validate_path("files", file)?;
        }
        Ok(())
    }
}
