#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kanji_quiz_server::run().await
}
