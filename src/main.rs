use account_model::configuration::get_configuration;
use account_model::startup::{connect, run_migrations};
use account_model::telemetry::{get_subscriber, init_subscriber};
use anyhow::Context;

fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("account_model".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let connection = connect(&configuration.database)?;
    run_migrations(&connection)?;

    tracing::info!(
        database = %configuration.database.database_name,
        "Account schema is up to date"
    );
    Ok(())
}
