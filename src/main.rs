#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use anyhow::Context;

use dialettami::{logger, ui, Config, Controller, ProxyClient};

fn main() -> anyhow::Result<()> {
    logger::init();

    // Config: config.json next to the exe, env vars override.
    let cfg = Config::load();
    tracing::info!(
        endpoint = %cfg.endpoint(),
        dialect = %cfg.default_dialect,
        timeout_secs = cfg.request_timeout_secs,
        "config loaded"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    let client = ProxyClient::new(cfg.endpoint(), cfg.request_timeout())
        .context("failed to build HTTP client")?;
    let controller = Controller::new(cfg.default_dialect.clone());

    // Run UI on main thread (blocks)
    ui::run(controller, client, runtime)
}
