use crate::domain::model::{Destination, NameReport};
use crate::utils::error::Result;
use std::io::Write;

pub trait Storage {
    fn read_to_string(&self, path: &str) -> Result<String>;
    /// Creates the file or truncates an existing one.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn files(&self) -> &[String];
    fn summary_file(&self) -> bool;
}

pub trait Pipeline {
    fn files(&self) -> &[String];
    fn extract(&self, path: &str) -> Result<String>;
    fn transform(&self, path: &str, text: &str) -> Result<NameReport>;
    fn load(&self, path: &str, report: &NameReport, out: &mut dyn Write) -> Result<Destination>;
}
