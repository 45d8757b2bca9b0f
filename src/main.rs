use clap::Parser;
use cli::Args;
use tokio::net::TcpListener;

mod app_context;
mod browse;
mod cli;
mod games;
mod gbif;
mod geo;
mod health;
mod http;
mod logging;
mod personal_best;
mod scoring;
mod search;
mod storage;
mod wikipedia;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(&args);
    let app_context = app_context::init(&args).await;
    let router = http::router::new(&args, app_context);
    let listener = TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!(address = %args.listen_address, "Listening");
    axum::serve(listener, router)
        .await
        .expect("Failed to start the HTTP server.");
}
