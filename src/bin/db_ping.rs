//! MongoDB connectivity probe.
//!
//! Exit codes: 0 = ping succeeded, 1 = ping failed, 2 = MONGO_URI missing.

use std::process::ExitCode;

use powerloom_server::config;
use powerloom_server::db;
use powerloom_server::redact;
use powerloom_server::OpsError;

#[tokio::main]
async fn main() -> ExitCode {
    config::load_dotenv();
    tracing_subscriber::fmt::init();

    // Misconfiguration is reported before any network I/O happens.
    let Some(uri) = config::mongo_uri_from_env() else {
        println!("❌ MONGO_URI is not set");
        return ExitCode::from(2);
    };

    println!("Testing MongoDB connection...");
    println!("MONGO_URI: {}", redact::redact_mongo_uri(&uri));

    match ping(&uri).await {
        Ok(()) => {
            println!("✅ MongoDB ping OK");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("❌ MongoDB ping FAILED");
            println!("{e}");
            ExitCode::from(1)
        }
    }
}

/// Connect with short timeouts, ping, and release the client before the
/// result is reported. Shutdown itself cannot alter the exit code.
async fn ping(uri: &str) -> Result<(), OpsError> {
    let client = db::connect_with_probe_timeouts(uri).await?;
    let outcome = db::ping(&client).await;
    client.shutdown().await;
    outcome
}
