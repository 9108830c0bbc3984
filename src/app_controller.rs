use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::diff::{self, DiffSummary, GranularityMode, Segment, TextStats};
use crate::file_utils::FileManager;
use crate::render::Renderer;
use crate::subtitle_processor;

// @module: Application controller for transcript comparison

/// One-shot text transformations applied to a single input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextUtility {
    /// Remove SRT sequence numbers and timestamps
    StripSrt,
    /// One sentence per paragraph
    Reformat,
}

impl TextUtility {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::StripSrt => subtitle_processor::strip_srt(text),
            Self::Reformat => subtitle_processor::reformat(text),
        }
    }

    // @returns: Tag inserted into generated output file names
    pub fn output_tag(&self) -> &'static str {
        match self {
            Self::StripSrt => "stripped",
            Self::Reformat => "reformatted",
        }
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Granularity used for the next comparison
    pub fn granularity(&self) -> GranularityMode {
        self.config.effective_granularity()
    }

    /// Compare two in-memory texts with the configured options
    pub fn compare_texts(&self, left: &str, right: &str) -> Vec<Segment> {
        diff::compare_with_mode(left, right, &self.config.diff, self.granularity())
    }

    /// Read both files and compare their contents
    pub fn compare_files(&self, left_path: &Path, right_path: &Path) -> Result<Vec<Segment>> {
        let (left, right) = self.load_inputs(left_path, right_path)?;
        Ok(self.compare_texts(&left, &right))
    }

    fn load_inputs(&self, left_path: &Path, right_path: &Path) -> Result<(String, String)> {
        let left = FileManager::read_to_string(left_path)
            .with_context(|| format!("Failed to load original text: {:?}", left_path))?;
        let right = FileManager::read_to_string(right_path)
            .with_context(|| format!("Failed to load modified text: {:?}", right_path))?;

        if left.trim().is_empty() && right.trim().is_empty() {
            warn!("Both inputs are empty");
        }

        debug!(
            "Comparing {:?} ({} chars) with {:?} ({} chars) in {} mode",
            left_path,
            left.len(),
            right_path,
            right.len(),
            self.granularity()
        );

        Ok((left, right))
    }

    /// Input sizes, the summary (when enabled) and the diff in the configured view
    pub fn render_report(&self, left: &str, right: &str, segments: &[Segment]) -> String {
        let renderer = Renderer::new(self.config.color);
        let mut report = renderer.render_input_stats(&TextStats::of(left), &TextStats::of(right));
        report.push('\n');

        if self.config.show_summary {
            report.push_str(&renderer.render_summary(&DiffSummary::from_segments(segments)));
            report.push('\n');
        }

        report.push_str(&renderer.render(segments, self.config.view));
        if !report.ends_with('\n') {
            report.push('\n');
        }
        report
    }

    /// Compare two files and return the rendered report
    pub fn run_diff(&self, left_path: &Path, right_path: &Path) -> Result<String> {
        let start_time = std::time::Instant::now();
        let (left, right) = self.load_inputs(left_path, right_path)?;
        let segments = self.compare_texts(&left, &right);
        let summary = DiffSummary::from_segments(&segments);

        info!(
            "Compared in {:.1?}: {} added, {} removed",
            start_time.elapsed(),
            summary.added_count,
            summary.removed_count
        );

        Ok(self.render_report(&left, &right, &segments))
    }

    /// Apply a text utility to a file and return the result
    pub fn run_utility(&self, utility: TextUtility, input_path: &Path) -> Result<String> {
        let content = FileManager::read_to_string(input_path)
            .with_context(|| format!("Failed to load input: {:?}", input_path))?;
        Ok(utility.apply(&content))
    }

    /// Apply a text utility to a file and write the result.
    ///
    /// Without an explicit output path the result goes next to the input,
    /// e.g. `talk.srt` becomes `talk.stripped.srt`.
    pub fn write_utility_output(
        &self,
        utility: TextUtility,
        input_path: &Path,
        output_path: Option<PathBuf>,
    ) -> Result<PathBuf> {
        let output_path = output_path
            .unwrap_or_else(|| FileManager::generate_output_path(input_path, utility.output_tag()));

        let result = self.run_utility(utility, input_path)?;
        FileManager::write_to_file(&output_path, &result)
            .with_context(|| format!("Failed to save output: {:?}", output_path))?;

        info!("Success: {:?}", output_path);
        Ok(output_path)
    }
}
