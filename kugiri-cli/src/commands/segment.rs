//! Segment command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use kugiri_api::config::parse_granularity;
use kugiri_api::locale::{best_available, canonicalize_tag};
use kugiri_api::{Granularity, LocaleRegistry, SegmentData, Segmenter, SegmenterOptions};
use rayon::prelude::*;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, InputSource};
use crate::locale_source::select_locale;
use crate::output::{OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob); `-` reads standard input
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Segmentation granularity [default: sentence]
    #[arg(short, long, value_parser = ["grapheme", "word", "sentence"])]
    pub granularity: Option<String>,

    /// Locale tag, e.g. `en` or `ja-JP` [default: en]
    #[arg(short, long, value_name = "TAG")]
    pub locale: Option<String>,

    /// External locale configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub locale_config: Option<PathBuf>,

    /// Only emit word-like segments (word granularity)
    #[arg(long)]
    pub word_like_only: bool,

    /// Segment multiple files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "KUGIRI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Segments of one source, ready for output
struct SourceResult {
    name: String,
    segments: Vec<SegmentData>,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        crate::init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {self:?}");

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let segmenter = self.build_segmenter(&config)?;
        let granularity = segmenter.granularity();

        if self.word_like_only && granularity != Granularity::Word {
            log::warn!("--word-like-only has no effect at {granularity} granularity");
        }

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.format)?,
        };

        let sources = resolve_patterns(&self.input)?;
        log::info!(
            "segmenting {} source(s) as {} with locale {}",
            sources.len(),
            granularity,
            segmenter.resolved_options().locale
        );

        let results = self.segment_sources(&segmenter, &sources)?;

        let writer = self.open_output()?;
        let mut formatter = format.create_formatter(writer, config.output.pretty_json);
        self.write_results(formatter.as_mut(), &results)?;
        formatter.finish()?;

        Ok(())
    }

    /// Build the segmenter from flags, falling back to the config file
    fn build_segmenter(&self, config: &CliConfig) -> Result<Segmenter> {
        let granularity = self
            .granularity
            .as_deref()
            .unwrap_or(&config.segment.granularity);
        // Surface a bad config value before any input is read
        parse_granularity(granularity)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let requested = self.locale.as_deref().or_else(|| {
            self.locale_config
                .is_none()
                .then_some(config.segment.locale.as_str())
        });
        let selection = select_locale(requested, self.locale_config.as_deref())?;
        log::debug!("locale source: {}", selection.origin.display_name());

        let segmenter = Segmenter::with_registry(
            &selection.registry,
            &[selection.origin.tag()],
            SegmenterOptions::new().granularity(granularity),
        )
        .map_err(|e| CliError::LocaleError(e.to_string()))?;

        if falls_back_to_default(&selection.registry, selection.origin.tag()) {
            log::warn!(
                "locale {} is not available, using {}",
                selection.origin.tag(),
                segmenter.resolved_options().locale
            );
        }
        Ok(segmenter)
    }

    fn segment_sources(
        &self,
        segmenter: &Segmenter,
        sources: &[InputSource],
    ) -> Result<Vec<SourceResult>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let segment_one = |source: &InputSource| -> Result<SourceResult> {
            let text = source.read_text()?;
            let segments = segmenter
                .segment(&text)
                .iter()
                .filter(|segment| !self.word_like_only || segment.is_word_like() != Some(false))
                .map(|segment| segment.to_data())
                .collect();
            let name = source.to_string();
            progress.file_completed(&name);
            Ok(SourceResult { name, segments })
        };

        let results = if self.parallel && sources.len() > 1 {
            log::debug!("segmenting in parallel on {} threads", rayon::current_num_threads());
            sources.par_iter().map(segment_one).collect::<Result<Vec<_>>>()
        } else {
            sources.iter().map(segment_one).collect::<Result<Vec<_>>>()
        };

        progress.finish();
        results
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout()))),
        }
    }

    fn write_results(
        &self,
        formatter: &mut dyn OutputFormatter,
        results: &[SourceResult],
    ) -> Result<()> {
        for result in results {
            formatter.begin_source(&result.name)?;
            for segment in &result.segments {
                formatter.format_segment(segment)?;
            }
        }
        Ok(())
    }
}

/// Whether no truncation of `requested` is available in `registry`
fn falls_back_to_default(registry: &LocaleRegistry, requested: &str) -> bool {
    canonicalize_tag(requested).map_or(true, |tag| best_available(registry, &tag).is_none())
}
