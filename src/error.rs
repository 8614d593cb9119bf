//! Error types for registry operations

use thiserror::Error;

/// Error type for registry operations
///
/// Covers the three failure modes of the registry: the discovery scope
/// cannot be resolved, a lookup key is unknown, or a factory fails to
/// build an instance. Nothing is swallowed; every error surfaces to the
/// immediate caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Discovery scope could not be resolved or enumerated
    ///
    /// Fatal: surfaced from `ensure_loaded`/`create` and never retried by
    /// the registry. The registry stays unloaded so a later call observes
    /// the same failure.
    #[error("scope resolution failed: {0}")]
    Scope(String),

    /// No factory registered for the requested key
    ///
    /// Recoverable: the caller can react, e.g. by presenting the known
    /// keys, which are carried alongside the offending key.
    #[error("no capability registered for key '{key}' (known keys: [{}])", .known.join(", "))]
    UnknownKey {
        /// The key that was requested
        key: String,
        /// All keys present in the mapping, sorted
        known: Vec<String>,
    },

    /// A factory failed to build an instance
    ///
    /// Produced by factories themselves, including parameter validation
    /// failures. The registry propagates it unchanged and adds no context.
    #[error("construction failed: {0}")]
    Construction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_error_display() {
        let err = RegistryError::Scope("root not reachable".to_string());
        assert_eq!(err.to_string(), "scope resolution failed: root not reachable");
    }

    #[test]
    fn unknown_key_display_names_key_and_lists_known() {
        let err = RegistryError::UnknownKey {
            key: "uniform".to_string(),
            known: vec!["lognormal".to_string(), "normal".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "no capability registered for key 'uniform' (known keys: [lognormal, normal])"
        );
    }

    #[test]
    fn construction_error_display() {
        let err = RegistryError::Construction("sigma must be positive".to_string());
        assert_eq!(err.to_string(), "construction failed: sigma must be positive");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RegistryError>();
    }
}
