use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, error};
use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

/// Claims describing the logged-in user, serialized into the identity
/// cookie at login and recovered by the extractor on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let claims = Identity::from_request(req, payload)
            .into_inner()
            .and_then(|identity| identity.id().map_err(error::ErrorUnauthorized))
            .and_then(|raw| serde_json::from_str(&raw).map_err(error::ErrorUnauthorized));
        ready(claims)
    }
}

/// Attach the claims to the current session, logging the user in.
pub fn login(req: &HttpRequest, claims: &AuthenticatedUser) -> Result<(), Error> {
    let raw = serde_json::to_string(claims).map_err(error::ErrorInternalServerError)?;
    Identity::login(&req.extensions(), raw).map_err(error::ErrorInternalServerError)?;
    Ok(())
}

/// Hash a password into a PHC string with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Check a password against a stored PHC string. Unparseable hashes
/// count as a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_round_trip() {
        let hash = hash_password("hunter2").expect("hashing failed");
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn malformed_hash_is_rejected() {
        assert!(!verify_password("hunter2", "not-a-phc-string"));
    }
}
