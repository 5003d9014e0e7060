//! Basic logging example exercising every severity and the facade lifecycle.
//!
//! Run with: cargo run --example basic_logging

use chromalog::{log_debug, log_error, log_info, log_warn, Logger};

fn main() -> anyhow::Result<()> {
    let core = Logger::new("core")?;
    let net = Logger::new("net")?;

    log_info!(core, "engine starting");
    log_debug!(core, "loaded {} assets in {}ms", 312, 48);

    simulate_connection(&net);

    // A channel handle can be passed around and used without the facade.
    let handle = core.handle();
    handle.log(
        chromalog::Level::Info,
        "logged through a shared handle",
        chromalog::SourceLocation::new(file!(), line!(), "main"),
    );

    log_info!(core, "engine stopping");
    Logger::shutdown();
    Ok(())
}

fn simulate_connection(net: &Logger) {
    log_info!(net, "listening on {}", 8080);
    log_warn!(net, "peer {} slow to respond", "10.0.0.7");
    log_error!(net, "connection lost");
}
