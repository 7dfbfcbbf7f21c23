use crate::configuration::DatabaseSettings;
use anyhow::Context;
use diesel::{Connection, PgConnection};
use secrecy::ExposeSecret;

embed_migrations!("migrations");

#[tracing::instrument(
    name = "Connecting to Postgres",
    skip(settings),
    fields(host = %settings.host, port = settings.port, database = %settings.database_name)
)]
pub fn connect(settings: &DatabaseSettings) -> Result<PgConnection, anyhow::Error> {
    PgConnection::establish(settings.connection_string().expose_secret())
        .context("Failed to connect to Postgres.")
}

/// Applies every embedded migration that has not run yet.
#[tracing::instrument(name = "Applying pending migrations", skip(conn))]
pub fn run_migrations(conn: &PgConnection) -> Result<(), anyhow::Error> {
    embedded_migrations::run(conn).context("Failed to apply the account schema migrations.")
}
