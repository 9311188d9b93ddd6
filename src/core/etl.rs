use crate::core::{Destination, Pipeline};
use crate::utils::error::{BabyNamesError, Result};
use std::io::Write;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<Vec<Destination>> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_writer(&mut out)
    }

    /// Processes files in order and stops at the first error. Files before
    /// the failing one have already been printed or written.
    pub fn run_with_writer(&self, out: &mut dyn Write) -> Result<Vec<Destination>> {
        let files = self.pipeline.files();
        let mut destinations = Vec::with_capacity(files.len());

        for path in files {
            tracing::debug!("Processing {}", path);
            let text = self.pipeline.extract(path)?;
            let report = self.pipeline.transform(path, &text)?;
            destinations.push(self.pipeline.load(path, &report, out)?);
        }

        out.flush()
            .map_err(|e| BabyNamesError::io("<stdout>", e))?;
        tracing::debug!("Processed {} file(s)", destinations.len());
        Ok(destinations)
    }
}
