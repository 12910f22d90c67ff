//! Schema migrations applied at startup

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Apply every pending migration found in `dir`.
///
/// Migrations are plain `<version>_<description>.sql` files read at runtime,
/// so the binary does not need the SQL embedded at compile time.
pub async fn run_migrations(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), MigrateError> {
    let dir = dir.as_ref();
    let migrator = Migrator::new(dir).await?;
    info!(
        path = %dir.display(),
        count = migrator.iter().count(),
        "Applying database migrations"
    );
    migrator.run(pool).await
}
