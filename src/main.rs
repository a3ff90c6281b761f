/*
 * Responsibility
 * - tokio runtime
 * - app::run() only; a returned error exits non-zero
 */
use anyhow::Result;

use health_service::app;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
