#[tokio::main]
async fn main() -> std::io::Result<()> {
    backend_server::run_with_config().await
}
