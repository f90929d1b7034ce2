use std::sync::Arc;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod server;
mod translator;

fn main() {
    if let Err(e) = run() {
        logger::log_fatal(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Worker count follows the CPU count unless configured
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)
        .map_err(|e| format!("listen tcp {}: {e}", cfg.bind_address()))?;

    logger::log_listening(&cfg.bind_address(), &cfg);

    let state = Arc::new(config::AppState::new(&cfg));
    server::start_server_loop(listener, state).await;
    Ok(())
}
