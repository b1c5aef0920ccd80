use portal_core::{config::ServerConfig, http, init};

#[tokio::main]
async fn main() {
    init();

    let config = ServerConfig::from_env();
    if let Err(err) = http::serve(config).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
