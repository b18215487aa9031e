use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scope_tag::config::{self, Config};
use scope_tag::git::Git2Repository;
use scope_tag::{ui, ScopeResolver};

#[derive(clap::Parser)]
#[command(
    name = "scope-tag",
    version,
    about = "Compute the next scoped version tag from the latest conventional commit"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Path inside the git repository")]
    repo: String,

    #[arg(short, long, help = "Branch whose head commit is analyzed")]
    branch: Option<String>,

    #[arg(long, help = "Pre-release name appended to the new version")]
    pre_release_name: Option<String>,

    #[arg(
        long,
        help = "Pre-release timestamp layout: strftime pattern, 'datetime' or 'epoch'"
    )]
    pre_release_timestamp: Option<String>,

    #[arg(long, help = "Build metadata appended to the new version")]
    build_metadata: Option<String>,

    #[arg(short, long, help = "Log resolution details to stderr")]
    verbose: bool,
}

impl Args {
    /// Command-line values take precedence over the configuration file
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(branch) = &self.branch {
            config.branch = branch.clone();
        }
        if let Some(name) = &self.pre_release_name {
            config.pre_release.name = Some(name.clone());
        }
        if let Some(layout) = &self.pre_release_timestamp {
            config.pre_release.timestamp_layout = Some(layout.clone());
        }
        if let Some(metadata) = &self.build_metadata {
            config.build_metadata = Some(metadata.clone());
        }
        config
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => args.apply_to(cfg),
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    let repo = Git2Repository::open(&args.repo)
        .with_context(|| format!("Git repository error at '{}'", args.repo))?;

    let resolver = ScopeResolver::new(config.decoration());
    let resolution = match resolver.resolve(&repo, &config.branch) {
        Ok(resolution) => resolution,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.verbose {
        for event in &resolution.skipped {
            ui::display_skip_event(event);
        }
    }
    ui::display_resolution(&resolution);

    Ok(())
}
