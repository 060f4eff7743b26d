use std::io;

use anyhow::Context;

use stockroom_cli::MenuController;
use stockroom_infra::StockroomConfig;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = StockroomConfig::default();
    tracing::debug!(path = %config.data_path.display(), capacity = config.capacity, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = MenuController::new(
        config.repository(),
        config.capacity,
        stdin.lock(),
        stdout.lock(),
    )
    .run()
    .context("console I/O failed")?;

    tracing::debug!(?end, "session finished");
    Ok(())
}
