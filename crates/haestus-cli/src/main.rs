//! haestus CLI: terminal showcase and content tooling for the haestus site

use clap::{Parser, Subcommand};
use haestus_engine::config::DEFAULT_CONFIG_PATH;
use haestus_engine::{article_url, hex_to_hsl, hsl_to_hex, SiteCatalog, SiteConfig};
use haestus_tui::Theme;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, Level};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Interactive showcase of the haestus site sections
#[derive(Parser)]
#[command(name = "haestus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log debug output
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the showcase (default when no command specified)
    Tui {
        /// Use the high-contrast palette
        #[arg(long)]
        high_contrast: bool,
    },

    /// Write a default config file
    Init,

    /// Convert between HSL and hex colors
    Color {
        #[command(subcommand)]
        conversion: ColorCommand,
    },

    /// List gradient presets
    Presets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize the content catalog
    Catalog {
        /// Dump the whole catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the shareable link of a blog post
    Link {
        /// Post id
        post_id: u64,
    },
}

#[derive(Subcommand)]
enum ColorCommand {
    /// `hsl(H, S%, L%)` to `#rrggbb`
    ToHex { hsl: String },

    /// `#rrggbb` to `hsl(H, S%, L%)`
    ToHsl { hex: String },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Install the fmt subscriber. The TUI owns the terminal, so it only logs
/// when a log file is given.
fn init_logging(cli: &Cli) -> std::io::Result<()> {
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = tracing_subscriber::fmt().with_max_level(level);

    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        subscriber
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if !matches!(cli.command, None | Some(Commands::Tui { .. })) {
        subscriber.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn load_config(path: &Path) -> CliResult<SiteConfig> {
    let mut config = SiteConfig::load_or_default(path)?;
    config.apply_env();
    Ok(config)
}

fn load_catalog(config: &SiteConfig) -> CliResult<SiteCatalog> {
    Ok(SiteCatalog::load_or_builtin(config.catalog_path.as_deref())?)
}

fn run(cli: Cli) -> CliResult<()> {
    debug!(
        engine = haestus_engine::engine_version(),
        tui = haestus_tui::tui_version(),
        "haestus starting"
    );

    match cli.command {
        None => cmd_tui(&cli.config, false),
        Some(Commands::Tui { high_contrast }) => cmd_tui(&cli.config, high_contrast),
        Some(Commands::Init) => {
            println!("{}", cmd_init(&cli.config)?);
            Ok(())
        }
        Some(Commands::Color { conversion }) => {
            println!("{}", cmd_color(&conversion));
            Ok(())
        }
        Some(Commands::Presets { json }) => {
            let catalog = load_catalog(&load_config(&cli.config)?)?;
            println!("{}", cmd_presets(&catalog, json)?);
            Ok(())
        }
        Some(Commands::Catalog { json }) => {
            let catalog = load_catalog(&load_config(&cli.config)?)?;
            println!("{}", cmd_catalog(&catalog, json)?);
            Ok(())
        }
        Some(Commands::Link { post_id }) => {
            let config = load_config(&cli.config)?;
            let catalog = load_catalog(&config)?;
            println!("{}", cmd_link(&config, &catalog, post_id)?);
            Ok(())
        }
    }
}

fn cmd_tui(config_path: &Path, high_contrast: bool) -> CliResult<()> {
    let config = load_config(config_path)?;
    let catalog = load_catalog(&config)?;
    let theme = if high_contrast {
        Theme::high_contrast()
    } else {
        Theme::site()
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(haestus_tui::run_tui(config, catalog, theme))
}

fn cmd_init(config_path: &Path) -> CliResult<String> {
    if config_path.exists() {
        return Ok(format!("Config already exists at {}", config_path.display()));
    }
    SiteConfig::default().save(config_path)?;
    Ok(format!("Wrote default config to {}", config_path.display()))
}

fn cmd_color(conversion: &ColorCommand) -> String {
    match conversion {
        ColorCommand::ToHex { hsl } => hsl_to_hex(hsl),
        ColorCommand::ToHsl { hex } => hex_to_hsl(hex),
    }
}

fn cmd_presets(catalog: &SiteCatalog, json: bool) -> CliResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&catalog.presets)?);
    }

    let width = catalog
        .presets
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = catalog
        .presets
        .iter()
        .map(|preset| {
            let stops: Vec<String> = preset.colors.colors.iter().map(|c| c.to_hex()).collect();
            format!(
                "{:<width$}  {}  on {}",
                preset.name,
                stops.join(" "),
                preset.colors.color_back.to_hex()
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

fn cmd_catalog(catalog: &SiteCatalog, json: bool) -> CliResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(catalog)?);
    }

    let mut out = vec![format!("Projects ({})", catalog.projects.len())];
    out.extend(
        catalog
            .projects
            .iter()
            .map(|p| format!("  {:<10} {} - {}", p.id, p.title, p.company)),
    );
    out.push(format!("Posts ({})", catalog.posts.len()));
    out.extend(
        catalog
            .posts
            .iter()
            .map(|p| format!("  {:<10} {} ({})", p.id, p.title, p.read_time)),
    );
    out.push(format!("Process steps: {}", catalog.process_steps.len()));
    out.push(format!("Timeline steps: {}", catalog.timeline.len()));
    out.push(format!("Table rows: {}", catalog.table_rows.len()));
    out.push(format!("Presets: {}", catalog.presets.len()));
    out.push(format!("Fonts: {}", catalog.fonts.len()));
    Ok(out.join("\n"))
}

fn cmd_link(config: &SiteConfig, catalog: &SiteCatalog, post_id: u64) -> CliResult<String> {
    let post = catalog
        .post(post_id)
        .ok_or_else(|| format!("no blog post with id {post_id}"))?;
    Ok(article_url(&config.base_url, post))
}
