use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use eframe::egui::{self, CentralPanel, Key};
use egui_carousel::{Carousel, CarouselConfig, CarouselState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Drag and drop carousel demo
#[derive(Parser)]
#[command(name = "carousel-demo")]
#[command(about = "Reorder cards by dragging, step through them with Next / Previous", long_about = None)]
struct Cli {
    /// TOML file with card and viewport geometry
    #[arg(long)]
    config: Option<PathBuf>,

    /// Card labels, in display order
    #[arg(long, num_args = 1.., default_values = ["A", "B", "C"])]
    items: Vec<String>,
}

struct CarouselApp {
    config: CarouselConfig,
    state: CarouselState<String>,
}

impl CarouselApp {
    fn new(config: CarouselConfig, items: Vec<String>) -> Self {
        let mut state = CarouselState::new(items, config.stride());
        state.on_commit(|index, items| tracing::info!(index, ?items, "carousel changed"));
        Self { config, state }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (next, previous, first, last) = {
            let input = ctx.input();
            (
                input.key_pressed(Key::ArrowRight),
                input.key_pressed(Key::ArrowLeft),
                input.key_pressed(Key::Home),
                input.key_pressed(Key::End),
            )
        };
        if next {
            self.state.next();
        }
        if previous {
            self.state.previous();
        }
        if first {
            self.state.select(0);
        }
        if last {
            self.state.select(self.state.len().saturating_sub(1));
        }
    }
}

impl eframe::App for CarouselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        CentralPanel::default().show(ctx, |ui| {
            let free_height = ui.available_height() - self.config.viewport_height - 60.0;
            ui.add_space(free_height.max(0.0) / 2.0);
            Carousel::new("carousel")
                .config(self.config.clone())
                .show_labels(ui, &mut self.state);
        });
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<CarouselConfig> {
    let Some(path) = path else {
        return Ok(CarouselConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = CarouselConfig::from_toml_str(&source)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,egui_carousel=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    tracing::info!(items = ?cli.items, stride = config.stride(), "starting carousel demo");

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(
            config.viewport_width + 200.0,
            config.viewport_height + 200.0,
        )),
        ..Default::default()
    };
    let items = cli.items;
    eframe::run_native(
        "Carousel",
        options,
        Box::new(|_| Box::new(CarouselApp::new(config, items))),
    );
    Ok(())
}
