use std::time::Duration;

use mongodb::{bson::doc, options::ClientOptions, Client, Collection};

use crate::config;
use crate::error::OpsError;
use crate::models::AdminUser;
use crate::redact;

/// Build a client with the driver's default timeouts (seeding path). The
/// driver connects lazily, so failures surface on the first command.
pub async fn connect(uri: &str) -> Result<Client, OpsError> {
    tracing::info!("connecting to MongoDB at {}", redact::redact_mongo_uri(uri));
    let options = ClientOptions::parse(uri).await?;
    Ok(Client::with_options(options)?)
}

/// Build a client with short probe timeouts so an unreachable endpoint
/// fails within seconds instead of blocking indefinitely.
pub async fn connect_with_probe_timeouts(uri: &str) -> Result<Client, OpsError> {
    let mut options = ClientOptions::parse(uri).await?;
    options.server_selection_timeout = Some(Duration::from_secs(config::PROBE_TIMEOUT_SECS));
    options.connect_timeout = Some(Duration::from_secs(config::PROBE_TIMEOUT_SECS));
    Ok(Client::with_options(options)?)
}

/// Lightweight liveness check against the admin database.
pub async fn ping(client: &Client) -> Result<(), OpsError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(())
}

/// Liveness check that also confirms we can talk to the primary.
pub async fn is_master(client: &Client) -> Result<(), OpsError> {
    client
        .database("admin")
        .run_command(doc! { "ismaster": 1 })
        .await?;
    Ok(())
}

/// Typed handle to the users collection in the application database.
pub fn users_collection(client: &Client) -> Collection<AdminUser> {
    client
        .database(config::DB_NAME)
        .collection(config::USERS_COLLECTION)
}
