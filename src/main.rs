#[tokio::main]
async fn main() -> anyhow::Result<()> {
    healthbot::run().await
}
