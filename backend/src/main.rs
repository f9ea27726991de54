#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::start_server().await?;

    Ok(())
}
