use clap::{Parser, Subcommand};
use docnav::sidebar::{self, SidebarBuilder};
use docnav::{config, output, snapshot_index};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Derive documentation sidebars from a Markdown directory tree")]
#[command(long_about = "\
Derive documentation sidebars from a Markdown directory tree

Your filesystem is the data source. Directories become collapsible groups,
index.md becomes an \"Overview\" entry, and filenames become labels.

Content structure:

  docs/
  ├── docnav.toml                  # Config (optional)
  └── develop/main/                # One sidebar root ([[sidebars]] dir)
      ├── index.md                 # Overview → /develop/main/
      ├── messages/                # Category (known: fixed position + label)
      │   ├── index.md             # Overview → /develop/main/messages/
      │   └── wire_format.md       # \"Wire Format\" → /develop/main/messages/wire_format
      ├── zz_extras/               # Category (unknown: title-cased, alphabetical)
      ├── .drafts/                 # Hidden = skipped
      └── snapshots/               # Versioned copies, newest name first
          └── v1.2.0/
              └── messages/

Run 'docnav gen-config' to generate a documented docnav.toml.")]
#[command(version)]
struct Cli {
    /// Documentation root; sidebar directories resolve against it
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file [default: <root>/docnav.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (otherwise RUST_LOG applies)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build all configured sidebars and write them as JSON
    Build {
        /// Output file for the sidebar JSON
        #[arg(long, default_value = "sidebar.json")]
        output: PathBuf,
    },
    /// Build all configured sidebars and print them without writing
    Check,
    /// Print the sidebar items of a single directory as JSON
    Dir {
        /// Directory to walk
        path: PathBuf,
        /// Route prefix for links (no trailing slash)
        #[arg(long, default_value = "")]
        route: String,
        /// Directory levels to expand [default: from config]
        #[arg(long, value_parser = max_depth_parser())]
        max_depth: Option<usize>,
    },
    /// Write snapshots/index.md for every sidebar root that has snapshots
    SnapshotIndex {
        /// Repository named in the page's intro line
        #[arg(long)]
        repo: Option<String>,
    },
    /// Copy the current docs into snapshots/<TAG>/ and rewrite the snapshots index
    Snapshot {
        /// Release tag naming the snapshot directory
        tag: String,
        /// Only snapshot the sidebar with this route [default: all]
        #[arg(long)]
        route: Option<String>,
        /// Repository named in the index page's intro line
        #[arg(long)]
        repo: Option<String>,
    },
    /// Print a stock docnav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build { output: out_path } => {
            let site_config = load_site_config(&cli.root, cli.config.as_deref())?;
            let builder = SidebarBuilder::from_config(&site_config);
            let manifest = sidebar::build_manifest(&builder, &site_config.sidebars, &cli.root);
            let json = serde_json::to_string_pretty(&manifest)?;
            if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out_path, json + "\n")?;
            output::print_manifest_output(&manifest);
            println!("==> Wrote {}", out_path.display());
        }
        Command::Check => {
            let site_config = load_site_config(&cli.root, cli.config.as_deref())?;
            let builder = SidebarBuilder::from_config(&site_config);
            let manifest = sidebar::build_manifest(&builder, &site_config.sidebars, &cli.root);
            output::print_manifest_output(&manifest);
        }
        Command::Dir {
            path,
            route,
            max_depth,
        } => {
            let site_config = load_site_config(&cli.root, cli.config.as_deref())?;
            let mut builder = SidebarBuilder::from_config(&site_config);
            if let Some(depth) = max_depth {
                builder = builder.with_max_depth(depth);
            }
            let route = route.trim_end_matches('/');
            let items = builder.build_dir_items(&path, route, 0);
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Command::SnapshotIndex { repo } => {
            let site_config = load_site_config(&cli.root, cli.config.as_deref())?;
            let mut written = 0;
            for source in &site_config.sidebars {
                let fs_base = cli.root.join(&source.dir);
                if let Some(path) = snapshot_index::write_snapshot_index(
                    &source.route,
                    &fs_base,
                    &site_config.suffix,
                    repo.as_deref(),
                )? {
                    println!("Wrote {}", path.display());
                    written += 1;
                }
            }
            if written == 0 {
                println!("No snapshots directories found");
            }
        }
        Command::Snapshot { tag, route, repo } => {
            let site_config = load_site_config(&cli.root, cli.config.as_deref())?;
            let route = route.as_deref().map(|r| r.trim_end_matches('/'));
            let sources: Vec<_> = site_config
                .sidebars
                .iter()
                .filter(|source| route.is_none_or(|r| r == source.route))
                .collect();
            if sources.is_empty() {
                let route = route.unwrap_or("");
                return Err(format!("no sidebar configured for route {route:?}").into());
            }
            for source in sources {
                let fs_base = cli.root.join(&source.dir);
                let dir = snapshot_index::create_snapshot(
                    &source.route,
                    &fs_base,
                    &tag,
                    &site_config.suffix,
                    repo.as_deref(),
                )?;
                println!("Created {}", dir.display());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// `--max-depth` accepts the same range as `max_depth` in docnav.toml.
fn max_depth_parser() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::<usize>::new().range(0..=config::MAX_DEPTH_LIMIT as u64)
}

/// `--verbose` enables debug events; otherwise `RUST_LOG` or warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the explicit config file (which must exist), or `<root>/docnav.toml`
/// when none is given (stock defaults if that is missing too).
fn load_site_config(
    root: &Path,
    explicit: Option<&Path>,
) -> Result<config::SiteConfig, config::ConfigError> {
    match explicit {
        Some(path) if !path.exists() => Err(config::ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("config file not found: {}", path.display()),
        ))),
        Some(path) => config::load_config(path),
        None => config::load_config(&root.join(config::CONFIG_FILE_NAME)),
    }
}
