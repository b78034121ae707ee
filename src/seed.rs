//! Admin account seeding: an idempotent upsert keyed by username that either
//! creates the admin record or resets its password to the fixed bootstrap
//! plaintext.

use mongodb::bson::{doc, DateTime};
use mongodb::Collection;

use crate::config;
use crate::error::OpsError;
use crate::models::AdminUser;
use crate::password;

/// Operator-facing classification of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No admin record existed; one was inserted.
    Created,
    /// A record existed but its hash no longer matched the bootstrap
    /// password (or the role was off), so the password was reset.
    PasswordReset,
    /// The stored hash already verifies against the bootstrap password;
    /// it was reused so nothing about the credentials changed.
    AlreadyCurrent,
}

/// What to write for the password hash, decided from the existing record.
#[derive(Debug)]
enum HashPlan {
    Fresh,
    Reuse(String),
}

fn plan_hash(existing: Option<&AdminUser>) -> HashPlan {
    match existing {
        Some(user)
            if user.role == config::ADMIN_ROLE
                && password::verify_password(config::ADMIN_PASSWORD, &user.password_hash) =>
        {
            HashPlan::Reuse(user.password_hash.clone())
        }
        _ => HashPlan::Fresh,
    }
}

/// Upsert the admin record. The query filter plus upsert semantics guarantee
/// at most one document per username, no matter how often this runs.
pub async fn seed_admin(users: &Collection<AdminUser>) -> Result<SeedOutcome, OpsError> {
    let existing = users
        .find_one(doc! { "username": config::ADMIN_USERNAME })
        .await?;

    let (password_hash, reused) = match plan_hash(existing.as_ref()) {
        HashPlan::Reuse(hash) => (hash, true),
        HashPlan::Fresh => (password::hash_password(config::ADMIN_PASSWORD)?, false),
    };

    // created_at records the last reset time, so it is refreshed every run.
    let result = users
        .update_one(
            doc! { "username": config::ADMIN_USERNAME },
            doc! { "$set": {
                "password_hash": password_hash.as_str(),
                "role": config::ADMIN_ROLE,
                "created_at": DateTime::from_chrono(chrono::Utc::now()),
            }},
        )
        .upsert(true)
        .await?;

    if result.upserted_id.is_some() {
        Ok(SeedOutcome::Created)
    } else if reused {
        Ok(SeedOutcome::AlreadyCurrent)
    } else {
        Ok(SeedOutcome::PasswordReset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_record(password_hash: String, role: &str) -> AdminUser {
        AdminUser {
            username: config::ADMIN_USERNAME.to_string(),
            password_hash,
            role: role.to_string(),
            created_at: DateTime::now(),
        }
    }

    #[test]
    fn test_missing_record_gets_a_fresh_hash() {
        assert!(matches!(plan_hash(None), HashPlan::Fresh));
    }

    #[test]
    fn test_matching_record_reuses_the_stored_hash() {
        let hash = password::hash_password(config::ADMIN_PASSWORD).unwrap();
        let user = admin_record(hash.clone(), config::ADMIN_ROLE);
        match plan_hash(Some(&user)) {
            HashPlan::Reuse(kept) => assert_eq!(kept, hash),
            other => panic!("expected reuse, got {other:?}"),
        }
    }

    #[test]
    fn test_stale_hash_forces_a_reset() {
        let hash = password::hash_password("some-old-password").unwrap();
        let user = admin_record(hash, config::ADMIN_ROLE);
        assert!(matches!(plan_hash(Some(&user)), HashPlan::Fresh));
    }

    #[test]
    fn test_wrong_role_forces_a_reset() {
        let hash = password::hash_password(config::ADMIN_PASSWORD).unwrap();
        let user = admin_record(hash, "viewer");
        assert!(matches!(plan_hash(Some(&user)), HashPlan::Fresh));
    }
}
