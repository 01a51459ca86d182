use album_index::config::{self, GalleryConfig, Overrides};
use album_index::generate::{self, RenderOptions};
use album_index::{output, scan};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "album-index")]
#[command(about = "Static gallery page generator for photo albums")]
#[command(long_about = "\
Static gallery page generator for photo albums

Every directory holding images becomes an album. Albums with a date come
first, newest first; the rest follow in directory order. Images inside an
album are ordered naturally (img2 before img10).

Content structure:

  static/images/
  ├── 2024-city/
  │   ├── album.json            # Album descriptor (optional)
  │   ├── night.png
  │   └── dusk.webp
  └── 2023-lake/
      ├── album.yml             # title: / date: / description:
      ├── img1.jpg
      ├── img2.jpg
      └── img2.yml              # Image sidecar (optional)

Descriptor lookup (first usable wins): album.json → album.yaml → album.yml

Run 'album-index gen-config' to print a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Config file (optional; defaults apply when missing)
    #[arg(long, default_value = "gallery.toml", global = true)]
    config: PathBuf,

    /// Image root to scan
    #[arg(long, global = true)]
    images: Option<PathBuf>,

    /// Site source directory that image URLs are relative to
    #[arg(long, global = true)]
    site_source: Option<PathBuf>,

    /// Output file for the generated page
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Front-matter page title
    #[arg(long, global = true)]
    title: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the image root and write the gallery page
    Build,
    /// Scan the image root and list albums without writing anything
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Build => {
            let gallery = scan::scan(&config.images_dir)?;
            let options = RenderOptions {
                title: &config.title,
                site_source: &config.site_source,
                expand_albums: config.expand_albums,
            };
            let today = chrono::Local::now().date_naive();
            let page = generate::render(&gallery, &options, today);
            generate::write_page(&config.output, &page)?;
            println!("{}", output::summary_line(&gallery));
        }
        Command::Check => {
            let gallery = scan::scan(&config.images_dir)?;
            output::print_scan_output(&gallery, &config.images_dir);
        }
        Command::GenConfig => {}
    }

    Ok(())
}

/// Load `gallery.toml` and layer the command-line flags on top.
fn resolve_config(cli: &Cli) -> Result<GalleryConfig, config::ConfigError> {
    let config = config::load_config(&cli.config)?.apply_overrides(Overrides {
        images_dir: cli.images.clone(),
        site_source: cli.site_source.clone(),
        output: cli.output.clone(),
        title: cli.title.clone(),
    });
    config.validate()?;
    Ok(config)
}

/// Initialize env_logger: `RUST_LOG` wins, then `--verbose`, then `warn`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
