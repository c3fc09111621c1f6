use crate::api::PropertyApi;
use crate::config::AppConfig;
use crate::router::{handle, AppCtx};
use astra::Server;
use std::net::SocketAddr;
use tracing::{error, info, Level};

mod api;
mod auth;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cfg = AppConfig::from_env();

    let api = match PropertyApi::new(cfg.api_base_url.clone()) {
        Ok(api) => api,
        Err(e) => {
            error!("HTTP client setup failed: {e}");
            std::process::exit(1);
        }
    };
    let ctx = AppCtx { api };

    let addr: SocketAddr = match cfg.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid bind address {:?}: {e}", cfg.bind_addr);
            std::process::exit(1);
        }
    };

    info!("Starting server at http://{addr}");
    info!("Forwarding submissions to {}", cfg.api_base_url);

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
