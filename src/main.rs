mod app;

use std::path::{Path, PathBuf};

use clap::Parser;
use eframe::egui;

use swipe_carousel::carousel::options::load_options;
use swipe_carousel::dom::parser::{load_html_file, parse_html};
use swipe_carousel::{CarouselController, CarouselError, CarouselOptions, DomSurface};

use app::PreviewApp;

const DEMO_PAGE: &str = include_str!("../assets/demo.html");

/// Options file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "carousel.toml";

/// Preview a page's swipe carousel in a native window.
#[derive(Debug, Parser)]
#[command(name = "carousel-preview", version, about)]
struct Cli {
    /// HTML page to load (defaults to the bundled demo page)
    page: Option<PathBuf>,

    /// Carousel options (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 420.0)]
    width: f32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 720.0)]
    height: f32,
}

fn resolve_options(explicit: Option<&Path>) -> Result<CarouselOptions, CarouselError> {
    if let Some(path) = explicit {
        return load_options(path);
    }
    let fallback = Path::new(DEFAULT_CONFIG);
    if !fallback.exists() {
        return Ok(CarouselOptions::default());
    }
    load_options(fallback).or_else(|e| {
        log::warn!("ignoring {}: {}", DEFAULT_CONFIG, e);
        Ok(CarouselOptions::default())
    })
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = match resolve_options(cli.config.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let tree = match cli.page.as_deref() {
        Some(path) => match load_html_file(path) {
            Ok(tree) => tree,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => parse_html(DEMO_PAGE, "demo.html"),
    };

    let title = if tree.title.is_empty() {
        "Carousel Preview".to_string()
    } else {
        format!("{} - Carousel Preview", tree.title)
    };
    let surface = DomSurface::bind(tree, &options.selectors);
    let controller = CarouselController::new(surface, options);

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([cli.width, cli.height]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new(controller)))),
    )
}
