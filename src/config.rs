//! Fixed deployment constants plus the environment-backed configuration the
//! command-line tools are handed at startup.

// ─── Database ───

pub const DB_NAME: &str = "powerloom";
pub const USERS_COLLECTION: &str = "users";

/// Safe local default for development (requires a local MongoDB instance).
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";

/// Per-attempt bound for the connectivity probe (server selection and
/// initial connect), so a dead endpoint fails fast instead of hanging.
pub const PROBE_TIMEOUT_SECS: u64 = 5;

// ─── Admin bootstrap ───
// Fixed dev-bootstrap credentials; every seeding run resets the password to
// this plaintext. Not meant for production accounts.

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "adminpass";
pub const ADMIN_ROLE: &str = "admin";

// ─── Server ───

pub const BIND_ADDR: &str = "0.0.0.0";
pub const SERVER_PORT: u16 = 8080;

/// Optional local dev support: load environment variables from a `.env`
/// file. A missing or unreadable file is fine; the tools proceed either way.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Read `MONGO_URI`, treating an empty value the same as an unset one.
pub fn mongo_uri_from_env() -> Option<String> {
    std::env::var("MONGO_URI").ok().filter(|uri| !uri.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns the MONGO_URI mutations so parallel tests cannot race.
    #[test]
    fn test_mongo_uri_from_env_treats_empty_as_unset() {
        std::env::remove_var("MONGO_URI");
        assert_eq!(mongo_uri_from_env(), None);

        std::env::set_var("MONGO_URI", "");
        assert_eq!(mongo_uri_from_env(), None);

        std::env::set_var("MONGO_URI", "mongodb://localhost:27017");
        assert_eq!(
            mongo_uri_from_env().as_deref(),
            Some("mongodb://localhost:27017")
        );
        std::env::remove_var("MONGO_URI");
    }
}
