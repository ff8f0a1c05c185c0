#[tokio::main]
async fn main() -> std::io::Result<()> {
    gateway_server::run_with_config().await
}
