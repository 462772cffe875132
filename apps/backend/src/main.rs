#[tokio::main]
async fn main() -> anyhow::Result<()> {
    daily_trivia_backend::run().await
}
