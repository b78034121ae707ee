//! Create or reset the powerloom admin account.
//!
//! One-off bootstrap tool: upserts the admin record with a freshly salted
//! hash of the fixed dev password and echoes the credentials so the operator
//! can log in immediately.

use clap::Parser;
use mongodb::Client;

use powerloom_server::config;
use powerloom_server::db;
use powerloom_server::seed::{self, SeedOutcome};
use powerloom_server::OpsError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Create or reset the powerloom admin account", long_about = None)]
struct Args {
    /// MongoDB connection string
    #[arg(long, env = "MONGO_URI", default_value = config::DEFAULT_MONGO_URI)]
    mongo_uri: String,
}

#[tokio::main]
async fn main() {
    config::load_dotenv();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    println!();
    println!(
        "--- Attempting to connect to MongoDB to manage {}.{} ---",
        config::DB_NAME,
        config::USERS_COLLECTION
    );

    // Client construction only fails on a bad URI; there is no connection to
    // release yet on that path.
    let client = match db::connect(&args.mongo_uri).await {
        Ok(client) => client,
        Err(e) => {
            println!("❌ Error during MongoDB operation: {e}");
            tracing::error!(error = ?e, "could not construct a MongoDB client");
            return;
        }
    };

    match run(&client).await {
        Ok(outcome) => report(outcome),
        Err(e) => {
            println!("❌ Error during MongoDB operation: {e}");
            tracing::error!(error = ?e, "admin seeding failed");
        }
    }

    // Release the connection on every path, success or failure.
    client.shutdown().await;
    println!("✅ MongoDB client connection closed.");
}

async fn run(client: &Client) -> Result<SeedOutcome, OpsError> {
    // Test the connection to the primary just to be sure.
    db::is_master(client).await?;
    println!("✅ MongoDB connection successful.");

    let users = db::users_collection(client);
    seed::seed_admin(&users).await
}

fn report(outcome: SeedOutcome) {
    match outcome {
        SeedOutcome::Created => println!(
            "✅ Admin user '{}' created with a new password.",
            config::ADMIN_USERNAME
        ),
        SeedOutcome::PasswordReset => println!(
            "🔁 Admin user '{}' found. Password has been reset/updated.",
            config::ADMIN_USERNAME
        ),
        SeedOutcome::AlreadyCurrent => println!(
            "ℹ️ Admin user '{}' already exists and password was already up-to-date (no changes made).",
            config::ADMIN_USERNAME
        ),
    }

    // The plaintext is echoed on purpose so the operator can use it right
    // away. These are fixed dev-bootstrap credentials; rotate them before
    // exposing the application anywhere real.
    println!();
    println!("🔑 Use these credentials to log in to the application:");
    println!("   Username: {}", config::ADMIN_USERNAME);
    println!("   Password: {}", config::ADMIN_PASSWORD);
}
