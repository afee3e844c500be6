#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tense_drill_server::run().await
}
