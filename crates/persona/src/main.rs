use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    persona::run().await
}
