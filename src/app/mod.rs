//! Application entry point wiring logging and egui/eframe to launch the invite UI.

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use egui_phosphor::Variant;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::ui::InviteApp;

/// Install the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")
}

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 520.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    info!("starting team invite window");
    eframe::run_native(
        "Team Invite",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(InviteApp::default()))
        }),
    )
    .map_err(|err| anyhow!("Event loop terminated with an error: {err}"))
}
