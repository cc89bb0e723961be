//! Catalog seeding command.
//!
//! Writes the bundled tool catalog into the key-value store. Without
//! `--force` an already-seeded catalog is left untouched, so the command is
//! safe to run on every deploy.

use toolscout_server::catalog::{ToolCatalog, seed_tools};
use toolscout_server::db::PgKvStore;

use super::{CliError, connect};

/// Seed the catalog.
///
/// # Errors
///
/// Returns an error if the connection or the store write fails.
pub async fn run(force: bool) -> Result<(), CliError> {
    let pool = connect().await?;
    let catalog = ToolCatalog::new(PgKvStore::new(pool));

    if force {
        catalog.replace_all(seed_tools()).await?;
        tracing::info!(
            count = seed_tools().len(),
            "Catalog overwritten from bundled seed"
        );
        return Ok(());
    }

    // `all()` auto-initializes an empty store from the bundled seed and
    // leaves an existing catalog untouched.
    let tools = catalog.all().await;
    tracing::info!(count = tools.len(), "Catalog present");
    Ok(())
}
