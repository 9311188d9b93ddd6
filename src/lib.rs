#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::core::{
    etl::EtlEngine,
    extract::{extract_file, extract_names},
    pipeline::BabyNamesPipeline,
};
pub use crate::domain::model::{summary_path, Destination, NameReport, RankEntry};
pub use crate::utils::error::{BabyNamesError, Result};
