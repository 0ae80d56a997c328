//! Work-log form - Entry Point

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use worklog_form::config::{CliOverrides, ResolvedConfig};
use worklog_form::model::{AppError, ClockMode, TimeValue};
use worklog_form::source::{CandidateSource, FailingSource, JsonFileSource, SourceLoader, StaticSource};
use worklog_form::state::ScreenController;
use worklog_form::view::{ColorConfig, ScreenStyles};

/// Work-log form - pick a user and a start/end time
#[derive(Parser, Debug)]
#[command(name = "wlform")]
#[command(version)]
#[command(about = "Terminal form for logging work: user search with history, start/end time pickers")]
pub struct Args {
    /// JSON file holding an array of user names
    pub source: Option<PathBuf>,

    /// Offer this user name (repeatable); overrides SOURCE
    #[arg(short, long = "user", value_name = "NAME")]
    pub users: Vec<String>,

    /// Use the 24-hour clock
    #[arg(long = "24h")]
    pub twenty_four_hour: bool,

    /// Initial start time, HH:MM (24-hour)
    #[arg(long, value_name = "HH:MM")]
    pub start: Option<String>,

    /// Initial end time, HH:MM (24-hour)
    #[arg(long, value_name = "HH:MM")]
    pub end: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// CLI layer of the config precedence chain.
    fn overrides(&self) -> Result<CliOverrides, AppError> {
        let parse = |raw: &Option<String>| raw.as_deref().map(str::parse::<TimeValue>).transpose();
        Ok(CliOverrides {
            time_mode: self.twenty_four_hour.then_some(ClockMode::TwentyFourHour),
            default_start: parse(&self.start)?,
            default_end: parse(&self.end)?,
            source_path: self.source.clone(),
        })
    }
}

/// Pick the candidate source: `--user` names, then a JSON file, else a source
/// that reports the missing configuration on screen.
fn select_source(users: &[String], config: &ResolvedConfig) -> Arc<dyn CandidateSource> {
    if !users.is_empty() {
        return Arc::new(StaticSource::new(users.to_vec()));
    }
    match &config.source_path {
        Some(path) => Arc::new(JsonFileSource::new(path)),
        None => Arc::new(FailingSource::new(
            "no user source configured (pass SOURCE, --user, or set source_path)",
        )),
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = worklog_form::config::load_config_with_precedence(args.config.clone())?;
        let merged = worklog_form::config::merge_config(config_file);
        let with_env = worklog_form::config::apply_env_overrides(merged);
        worklog_form::config::apply_cli_overrides(with_env, args.overrides()?)
    };

    worklog_form::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let source = select_source(&args.users, &config);
    let controller = ScreenController::new(config.screen_settings());
    let styles = ScreenStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));

    worklog_form::view::run_screen(controller, SourceLoader::new(source), styles)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}
