//! Site build step: generate both pages and write them to disk.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use plinth_html::Document;
use walkdir::WalkDir;

use crate::pages;

/// Pages emitted by a build, in output order.
const PAGES: [(&str, fn() -> Document); 2] =
    [("index.html", pages::home), ("about.html", pages::about)];

/// Marker file that keeps GitHub Pages from running the output through
/// Jekyll.
const MARKER_FILE: &str = ".nojekyll";

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Output directory
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs"),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read output directory: {0}")]
    ReadError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct SiteBuilder {
    config: SiteConfig,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Build the site: ensure the output directory exists, write both
    /// pages and the marker file, then report the directory contents.
    ///
    /// Writes are plain overwrites; a failure part-way leaves earlier
    /// files in place, which is fine for an idempotent generator.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        for (filename, page) in PAGES {
            let path = self.config.output_dir.join(filename);
            let html = page().to_html();
            fs::write(&path, html).map_err(|e| {
                BuildError::WriteError(format!("{}: {}", path.display(), e))
            })?;
            tracing::debug!("Wrote {}", path.display());
        }

        let marker_path = self.config.output_dir.join(MARKER_FILE);
        fs::write(&marker_path, "").map_err(|e| {
            BuildError::WriteError(format!("{}: {}", marker_path.display(), e))
        })?;

        self.report()?;

        Ok(BuildResult {
            pages: PAGES.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Log the files now present in the output directory, pre-existing
    /// ones included.
    fn report(&self) -> Result<(), BuildError> {
        tracing::info!("Static site generated successfully!");
        tracing::info!("Files in {}:", self.config.output_dir.display());

        for entry in WalkDir::new(&self.config.output_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| BuildError::ReadError(e.to_string()))?;
            tracing::info!("  - {}", entry.file_name().to_string_lossy());
        }

        Ok(())
    }
}
