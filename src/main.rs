//! Terminal cube runner (default binary).
//!
//! Uses crossterm for raw mode, input and output, and the workspace's
//! software rasterizer for everything drawn.

use std::io::{self, Write};
use std::thread;
use std::time::Instant;

use anyhow::Result;
use crossterm::terminal;

use tui_cube::config::{load, Command, Config, USAGE};
use tui_cube::engine::{Engine, RenderState, Tick};
use tui_cube::input::poll_action;
use tui_cube::logging;
use tui_cube::term::{queue_restore, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match load(&args, |key| std::env::var(key).ok())? {
        Command::Run(config) => config,
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
    };
    logging::init(config.log_path.as_deref())?;

    // Allocate before touching the terminal; a failure here leaves it as is.
    let viewport = Viewport::detect();
    let mut engine = Engine::new(
        viewport.width,
        viewport.height,
        RenderState::with_zoom(config.zoom),
    )?;
    tracing::info!(
        width = viewport.width,
        height = viewport.height,
        zoom = config.zoom,
        frame_us = config.frame_interval.as_micros() as u64,
        "starting"
    );

    install_panic_hook();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    match &result {
        Ok(()) => tracing::info!("stopped"),
        Err(e) => tracing::error!("stopped with error: {:#}", e),
    }
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine, config: &Config) -> Result<()> {
    let mut last = Instant::now();
    let mut frames: u64 = 0;

    loop {
        let now = Instant::now();
        let elapsed = now.duration_since(last);
        last = now;

        let action = poll_action()?;
        if let Some(action) = action {
            tracing::debug!(action = action.as_str(), "key");
        }
        let stats = match engine.tick(elapsed, action) {
            Tick::Quit => return Ok(()),
            Tick::Drawn(stats) => stats,
        };

        let bytes = term.present(engine.framebuffer())?;
        tracing::trace!(
            frame = frames,
            faces = stats.visible_faces,
            edges = stats.silhouette_edges,
            bytes,
            "frame"
        );

        frames += 1;
        if config.max_frames.is_some_and(|max| frames >= max) {
            return Ok(());
        }
        thread::sleep(config.frame_interval);
    }
}

/// Release builds abort on panic, which skips `Drop`; restore the terminal
/// from the hook before the default report is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let mut buf = Vec::new();
        if queue_restore(&mut buf).is_ok() {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(&buf);
            let _ = stdout.flush();
        }
        let _ = terminal::disable_raw_mode();
        default_hook(info);
    }));
}
