//! Folio CLI - Render a portfolio site from a CSV dataset
//!
//! ```bash
//! folio render                      # Render data/portfolio.csv to stdout
//! folio render me.csv -t dark -o index.html
//! folio serve                       # Start HTTP server (port 3000)
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! folio parse me.csv                # Validated rows as JSON
//! folio inspect me.csv              # Shaped portfolio as JSON
//! folio theme -t dark               # Stylesheet only
//! ```

use clap::{Parser, Subcommand};
use folio::{
    load_portfolio, parse_file_auto, render_page, stylesheet, AppConfig, RenderOptions, Theme,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Render a personal portfolio site from a CSV dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the portfolio page as HTML
    Render {
        /// Dataset CSV file (default: FOLIO_DATA or data/portfolio.csv)
        data: Option<PathBuf>,

        /// Color theme: light or dark
        #[arg(short, long)]
        theme: Option<Theme>,

        /// Browser tab title
        #[arg(long)]
        title: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the shaped portfolio as JSON
    Inspect {
        /// Dataset CSV file
        data: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse the dataset and print the validated rows as JSON
    Parse {
        /// Dataset CSV file
        data: Option<PathBuf>,
    },

    /// Print the stylesheet for a theme
    Theme {
        /// Color theme: light or dark
        #[arg(short, long)]
        theme: Option<Theme>,
    },

    /// Start HTTP server
    Serve {
        /// Dataset CSV file
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory served under /assets
        #[arg(long)]
        assets: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let result = match cli.command {
        Commands::Render {
            data,
            theme,
            title,
            output,
        } => cmd_render(&config, data, theme, title, output.as_deref()),

        Commands::Inspect { data, output } => cmd_inspect(&config, data, output.as_deref()),

        Commands::Parse { data } => cmd_parse(&config, data),

        Commands::Theme { theme } => cmd_theme(&config, theme),

        Commands::Serve { data, port, assets } => cmd_serve(config, data, port, assets).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn dataset_path(config: &AppConfig, data: Option<PathBuf>) -> PathBuf {
    data.unwrap_or_else(|| config.data_path.clone())
}

fn cmd_render(
    config: &AppConfig,
    data: Option<PathBuf>,
    theme: Option<Theme>,
    title: Option<String>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset_path(config, data);
    let report = load_portfolio(&path)?;

    let options = RenderOptions::default()
        .with_theme(theme.unwrap_or(config.theme))
        .with_page_title(title.unwrap_or_else(|| config.page_title.clone()));

    eprintln!("🎨 Rendering {} theme", options.theme);
    let html = render_page(&report.portfolio, &options);
    write_output(&html, output)?;

    eprintln!("✨ Done!");
    Ok(())
}

fn cmd_inspect(
    config: &AppConfig,
    data: Option<PathBuf>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = load_portfolio(dataset_path(config, data))?;

    let json = serde_json::to_string_pretty(&report.portfolio)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_parse(config: &AppConfig, data: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset_path(config, data);
    eprintln!("📄 Parsing dataset: {}", path.display());

    let result = parse_file_auto(&path)?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!("   Delimiter: '{}'", folio::transform::format_delimiter(result.delimiter));
    eprintln!("   Columns: {}", result.headers.join(", "));
    for skipped in &result.skipped {
        eprintln!("   ⚠️  Line {} skipped: {}", skipped.line, skipped.reason);
    }
    eprintln!("✅ Parsed {} rows", result.rows.len());

    let json = serde_json::to_string_pretty(&result.rows)?;
    write_output(&json, None)?;

    Ok(())
}

fn cmd_theme(config: &AppConfig, theme: Option<Theme>) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", stylesheet(theme.unwrap_or(config.theme)));
    Ok(())
}

async fn cmd_serve(
    mut config: AppConfig,
    data: Option<PathBuf>,
    port: Option<u16>,
    assets: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(data) = data {
        config.data_path = data;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(assets) = assets {
        config.assets_dir = assets;
    }

    folio::server::start_server(config).await
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
