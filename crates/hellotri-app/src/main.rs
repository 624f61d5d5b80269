use anyhow::Result;

use hellotri_engine::device::GpuInit;
use hellotri_engine::logging::{init_logging, LoggingConfig};
use hellotri_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("hellotri {}", env!("CARGO_PKG_VERSION"));

    Runtime::run(RuntimeConfig::default(), GpuInit::default())
}
