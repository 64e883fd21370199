use tracing_subscriber::EnvFilter;

use two_sum_mcp::config::ServerConfig;
use two_sum_mcp::server::McpServer;
use two_sum_mcp::tools::ToolRegistry;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout carries protocol frames, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("two-sum-mcp: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let registry = match ToolRegistry::with_builtin_tools() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("two-sum-mcp: tool registry error: {e}");
            std::process::exit(1);
        }
    };

    let server = McpServer::new(config, registry);
    if let Err(e) = server.run().await {
        eprintln!("two-sum-mcp: fatal error: {e}");
        std::process::exit(1);
    }
}
