#[tokio::main]
async fn main() -> anyhow::Result<()> {
    awsquiz_backend::run().await
}
