use anyhow::Result;
use gitgrab::handle;

#[tokio::main]
async fn main() -> Result<()> {
    handle(std::env::args()).await?;
    Ok(())
}
