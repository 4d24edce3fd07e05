use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};
use crate::shared::config::parse_or;

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_kib, iterations, parallelism, None)?;
        Ok(Self { params })
    }

    /// Budget VPS friendly defaults: 4MB memory, 3 iterations, 1 thread
    pub fn from_env() -> anyhow::Result<Self> {
        let memory_kib: u32 = parse_or("ARGON2_MEMORY_KIB", 4 * 1024)?;
        let iterations: u32 = parse_or("ARGON2_ITERATIONS", 3)?;
        let parallelism: u32 = parse_or("ARGON2_PARALLELISM", 1)?;

        Self::with_params(memory_kib, iterations, parallelism)
            .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {}", e))
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            // Cost parameters are read back from the PHC string
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
