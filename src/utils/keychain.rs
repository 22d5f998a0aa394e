//! Secure API key storage using OS keychain
//!
//! One credential authenticates every backend call. Sources, in order:
//! the `ANTHROPIC_API_KEY` environment variable, then the OS keychain
//! (Windows Credential Manager, Secret Service on Linux, macOS Keychain).

use crate::error::{AppError, Result};
use keyring::Entry;
use std::sync::Mutex;

/// Keychain service name for the synthesizer
const SERVICE_NAME: &str = "interview-synth";

/// Keychain account under which the key is stored
const ACCOUNT: &str = "anthropic";

/// Environment variable consulted before the keychain
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Trait for credential operations - allows for mocking in tests
pub trait CredentialPort: Send + Sync {
    fn save_api_key(&self, api_key: &str) -> Result<()>;
    /// Returns the stored key, or None when none has been saved.
    fn api_key(&self) -> Result<Option<String>>;
    fn delete_api_key(&self) -> Result<()>;
    fn has_api_key(&self) -> bool;
}

/// Credential store backed by the OS keychain
pub struct KeychainCredentials;

impl KeychainCredentials {
    pub fn new() -> Self {
        Self
    }

    fn entry() -> Result<Entry> {
        Entry::new(SERVICE_NAME, ACCOUNT).map_err(|e| AppError::Keychain(e.to_string()))
    }
}

impl Default for KeychainCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialPort for KeychainCredentials {
    fn save_api_key(&self, api_key: &str) -> Result<()> {
        Self::entry()?
            .set_password(api_key)
            .map_err(|e| AppError::Keychain(format!("Failed to save API key: {}", e)))?;

        log::info!("API key saved to keychain");
        Ok(())
    }

    fn api_key(&self) -> Result<Option<String>> {
        match Self::entry()?.get_password() {
            Ok(key) => Ok(Some(key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(AppError::Keychain(format!(
                "Failed to retrieve API key: {}",
                e
            ))),
        }
    }

    fn delete_api_key(&self) -> Result<()> {
        Self::entry()?
            .delete_password()
            .map_err(|e| AppError::Keychain(format!("Failed to delete API key: {}", e)))?;

        log::info!("API key deleted from keychain");
        Ok(())
    }

    fn has_api_key(&self) -> bool {
        matches!(self.api_key(), Ok(Some(_)))
    }
}

/// Mock credential store for testing (in-memory storage)
#[derive(Default)]
pub struct MockCredentials {
    key: Mutex<Option<String>>,
}

impl MockCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(api_key: &str) -> Self {
        Self {
            key: Mutex::new(Some(api_key.to_string())),
        }
    }
}

impl CredentialPort for MockCredentials {
    fn save_api_key(&self, api_key: &str) -> Result<()> {
        *self.key.lock().unwrap() = Some(api_key.to_string());
        Ok(())
    }

    fn api_key(&self) -> Result<Option<String>> {
        Ok(self.key.lock().unwrap().clone())
    }

    fn delete_api_key(&self) -> Result<()> {
        *self.key.lock().unwrap() = None;
        Ok(())
    }

    fn has_api_key(&self) -> bool {
        self.key.lock().unwrap().is_some()
    }
}

/// Resolves the backend credential: environment first, keychain second.
///
/// Absence is `ConfigurationMissing`, kept distinct from backend call
/// failures so callers can refuse to dispatch.
pub fn resolve_api_key(store: &dyn CredentialPort) -> Result<String> {
    let env_value = std::env::var(API_KEY_ENV).ok();
    resolve_from(env_value, store)
}

fn resolve_from(env_value: Option<String>, store: &dyn CredentialPort) -> Result<String> {
    if let Some(value) = env_value {
        if !value.trim().is_empty() {
            return Ok(value);
        }
    }

    match store.api_key()? {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(AppError::ConfigurationMissing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_save_and_retrieve_api_key() {
        let store = MockCredentials::new();
        assert!(!store.has_api_key());

        store.save_api_key("sk-test-123").unwrap();
        assert!(store.has_api_key());
        assert_eq!(store.api_key().unwrap().as_deref(), Some("sk-test-123"));
    }

    #[test]
    fn test_mock_delete_api_key() {
        let store = MockCredentials::with_key("sk-test-123");
        store.delete_api_key().unwrap();
        assert!(!store.has_api_key());
        assert_eq!(store.api_key().unwrap(), None);
    }

    #[test]
    fn test_resolve_prefers_environment() {
        let store = MockCredentials::with_key("from-keychain");
        let key = resolve_from(Some("from-env".to_string()), &store).unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_resolve_falls_back_to_keychain() {
        let store = MockCredentials::with_key("from-keychain");
        let key = resolve_from(None, &store).unwrap();
        assert_eq!(key, "from-keychain");

        let key = resolve_from(Some("   ".to_string()), &store).unwrap();
        assert_eq!(key, "from-keychain");
    }

    #[test]
    fn test_resolve_without_any_source_is_configuration_missing() {
        let store = MockCredentials::new();
        let err = resolve_from(None, &store).unwrap_err();
        assert!(matches!(err, AppError::ConfigurationMissing));
    }
}
