use clap::{Parser, Subcommand};
use folio_one::{config, output, render};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio-one")]
#[command(about = "Single-page static site generator for photography portfolios")]
#[command(long_about = "\
Single-page static site generator for photography portfolios

One config.json describes the whole site; the generator emits a single
self-contained page (inline CSS, small vanilla JS runtime) plus a generated
favicon and any local assets.

Config structure:

  {
    \"profile\":     { \"name\", \"title\", \"bio\", \"photo\", \"location\",
                     \"email\", \"instagram\", \"whatsapp\" },
    \"texts\":       { optional copy overrides; every field has a default },
    \"featured\":    [ hero slider items ],
    \"categories\":  [ { \"id\", \"name\", \"media\": [ items and folders ] } ],
    \"socialMedia\": [ contact links ]
  }

Media src values may be Google Drive share links; they are resolved to
directly embeddable URLs at build time. Folders group items into one gallery
card with a rotating cover and their own detail view.

Run 'folio-one gen-config' to print a complete sample config.json.")]
#[command(version = version_string())]
struct Cli {
    /// Site configuration file
    #[arg(long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the site from config.json
    Build,
    /// Validate config.json and print the content inventory without building
    Check,
    /// Print a complete sample config.json
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.config.display());
            let site = config::load_config(&cli.config)?;

            println!("==> Generating HTML → {}", cli.output.display());
            let config_dir = config_dir(&cli.config);
            let report = render::build(&site, &config_dir, &cli.output)?;
            output::print_build_output(&report);

            println!("==> Site generated at {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let site = config::load_config(&cli.config)?;
            output::print_check_output(&site);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            println!("{}", config::stock_config_json());
        }
    }

    Ok(())
}

/// Directory containing the config file; its `assets/` sibling is copied
/// into the output.
fn config_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
