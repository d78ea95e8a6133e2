//! Shared fixtures for unit tests

use std::path::PathBuf;

use crate::{
    config::{Config, DatabaseConfig, JwtConfig, ServerConfig, StorageConfig},
    constants::{DEFAULT_MAX_UPLOAD_SIZE_KB, DEFAULT_STORAGE_PUBLIC_PREFIX},
    middleware::auth::AuthenticatedUser,
};

/// Configuration that needs no environment
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://localhost/coursework_test".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_for_testing_only".to_string(),
        },
        storage: StorageConfig {
            root: PathBuf::from("/nonexistent"),
            public_prefix: DEFAULT_STORAGE_PUBLIC_PREFIX.to_string(),
            max_upload_size_kb: DEFAULT_MAX_UPLOAD_SIZE_KB,
        },
    }
}

/// A caller with the student role
pub fn student(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id,
        username: Some(format!("student{}", id)),
        role: "student".to_string(),
    }
}
