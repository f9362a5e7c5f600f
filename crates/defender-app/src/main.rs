use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;

use defender_app::config::{AppConfig, RendererKind};
use defender_app::error::AppError;
use defender_app::game_loop;
use defender_app::input::{Autopilot, Idle, InputSource};
use defender_app::render::{JsonLinesRenderer, LogRenderer, Renderer};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading configuration from {path}");
            AppConfig::load(Path::new(&path))?
        }
        None => AppConfig::default(),
    };

    let mut input: Box<dyn InputSource> = if config.autopilot.enabled {
        Box::new(Autopilot::new(config.autopilot.fire_every_frames))
    } else {
        Box::new(Idle)
    };
    let mut renderer: Box<dyn Renderer> = match config.renderer {
        RendererKind::Log => Box::new(LogRenderer),
        RendererKind::Json => Box::new(JsonLinesRenderer::new(BufWriter::new(io::stdout()))),
    };

    let outcome = game_loop::run(&config, input.as_mut(), renderer.as_mut())?;
    println!("{outcome}");
    Ok(())
}
