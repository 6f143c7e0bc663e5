//! Resolve command: builds the rate indexes and reports the SLCSP per query ZIP

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, info};

use crate::config::SourcesConfig;
use crate::data_paths::DataPaths;
use crate::rates::source::{load_plan_rows, load_query_zips, load_zip_rows};
use crate::rates::{resolve_all, SilverRateIndex, ZipRateAreaIndex};
use crate::report::write_results;

#[derive(Args, Clone)]
pub struct ResolveArgs {
    /// CSV file with the query ZIP codes (default: <data-dir>/slcsp.csv)
    pub queries: Option<PathBuf>,

    /// CSV file with the plan rate table (default: <data-dir>/plans.csv)
    #[arg(long)]
    pub plans: Option<PathBuf>,

    /// CSV file with the ZIP-to-rate-area reference (default: <data-dir>/zips.csv)
    #[arg(long)]
    pub zips: Option<PathBuf>,

    /// YAML config naming the dataset files
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub struct ResolveCommand {
    args: ResolveArgs,
}

impl ResolveCommand {
    pub fn new(args: ResolveArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let sources = self.sources(&data_paths)?;
        info!(
            plans = %sources.plans.display(),
            zips = %sources.zips.display(),
            queries = %sources.queries.display(),
            "Resolving SLCSP rates"
        );

        // The two indexes come from independent files with no data dependency
        // on each other; build them in parallel, joined before resolution.
        let zips_path = sources.zips.clone();
        let plans_path = sources.plans.clone();
        let zip_task = tokio::task::spawn_blocking(move || -> Result<ZipRateAreaIndex> {
            Ok(ZipRateAreaIndex::from_rows(load_zip_rows(&zips_path)?))
        });
        let plan_task = tokio::task::spawn_blocking(move || -> Result<SilverRateIndex> {
            Ok(SilverRateIndex::from_rows(load_plan_rows(&plans_path)?)?)
        });

        let (zip_index, silver_index) =
            tokio::try_join!(zip_task, plan_task).context("index build task failed")?;
        let (zip_index, silver_index) = (zip_index?, silver_index?);

        let queries = load_query_zips(&sources.queries)?;
        debug!(
            zips = zip_index.len(),
            rate_areas = silver_index.len(),
            queries = queries.len(),
            "Indexes built"
        );

        let results = resolve_all(&zip_index, &silver_index, queries);
        let resolved = results.iter().filter(|r| r.rate.is_some()).count();

        match &self.args.output {
            Some(path) => {
                let file = std::fs::File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                let mut writer = std::io::BufWriter::new(file);
                write_results(&mut writer, &results)?;
                // Flush before claiming success so write failures surface
                // instead of being discarded by Drop
                writer
                    .flush()
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!(
                    "{} Wrote {} results ({} resolved) to {}",
                    "✅".bright_green(),
                    results.len(),
                    resolved,
                    path.display().to_string().bright_yellow()
                );
            }
            None => {
                // Report goes to stdout; status stays on stderr/logs so the
                // output remains a clean CSV
                let stdout = std::io::stdout();
                write_results(stdout.lock(), &results)?;
            }
        }

        info!(
            total = results.len(),
            resolved,
            unresolved = results.len() - resolved,
            "Resolution complete"
        );
        Ok(())
    }

    /// Effective dataset locations: explicit flag, then YAML config, then the
    /// data-directory defaults
    fn sources(&self, data_paths: &DataPaths) -> Result<ResolvedSources> {
        let config = match &self.args.config {
            Some(path) => SourcesConfig::load(path)?,
            None => SourcesConfig::default(),
        };

        Ok(ResolvedSources {
            plans: self
                .args
                .plans
                .clone()
                .or(config.plans_file)
                .unwrap_or_else(|| data_paths.plans_file()),
            zips: self
                .args
                .zips
                .clone()
                .or(config.zips_file)
                .unwrap_or_else(|| data_paths.zips_file()),
            queries: self
                .args
                .queries
                .clone()
                .or(config.queries_file)
                .unwrap_or_else(|| data_paths.queries_file()),
        })
    }
}

struct ResolvedSources {
    plans: PathBuf,
    zips: PathBuf,
    queries: PathBuf,
}
