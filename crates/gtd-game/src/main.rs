mod game;

use anyhow::Result;
use winit::dpi::LogicalSize;

use gtd_engine::device::GpuInit;
use gtd_engine::logging::{init_logging, LoggingConfig};
use gtd_engine::window::{Runtime, RuntimeConfig};

use crate::game::Game;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Generic TowerDefense".to_string(),
        initial_size: LogicalSize::new(1920.0, 1080.0),
    };

    Runtime::run(config, GpuInit::default(), Game::new())?;

    log::info!("App Closed");
    Ok(())
}
