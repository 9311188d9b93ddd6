use crate::core::extract::extract_names;
use crate::core::{ConfigProvider, Destination, NameReport, Pipeline, Storage};
use crate::domain::model::summary_path;
use crate::utils::error::{BabyNamesError, Result};
use std::io::Write;

pub struct BabyNamesPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BabyNamesPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for BabyNamesPipeline<S, C> {
    fn files(&self) -> &[String] {
        self.config.files()
    }

    fn extract(&self, path: &str) -> Result<String> {
        let text = self.storage.read_to_string(path)?;
        tracing::debug!("Read {} bytes from {}", text.len(), path);
        Ok(text)
    }

    fn transform(&self, path: &str, text: &str) -> Result<NameReport> {
        extract_names(text, path)
    }

    fn load(&self, path: &str, report: &NameReport, out: &mut dyn Write) -> Result<Destination> {
        let mut text = report.render();
        text.push('\n');

        if self.config.summary_file() {
            let target = summary_path(path);
            self.storage.write_file(&target, text.as_bytes())?;
            tracing::info!("Wrote {} names to {}", report.entries.len(), target);
            Ok(Destination::SummaryFile(target))
        } else {
            out.write_all(text.as_bytes())
                .map_err(|e| BabyNamesError::io("<stdout>", e))?;
            Ok(Destination::Stdout)
        }
    }
}
