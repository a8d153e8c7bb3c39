#[tokio::main]
async fn main() {
    tailgrids_mcp_server::init_logging();

    if let Err(err) = tailgrids_mcp_server::run().await {
        log::error!("Failed to run MCP server: {:#}", err);
        std::process::exit(1);
    }
}
