//! Construction parameters forwarded to factories
//!
//! [`Params`] is an ordered name→value map standing in for keyword
//! arguments. The registry never inspects it; it is passed verbatim to
//! the resolved factory, which validates what it needs. Accessor
//! failures are [`RegistryError::Construction`] since a bad parameter is
//! a construction failure.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Named construction parameters
///
/// # Example
///
/// ```
/// use kyky::Params;
///
/// let params = Params::new().set("mean", 0.0).set("std_dev", 1.0);
/// assert_eq!(params.get_f64("mean").unwrap(), 0.0);
/// assert!(params.get_f64("shape").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    values: BTreeMap<String, Value>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, returning the updated set (builder style)
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Look up a raw parameter value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Check whether a parameter is present
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the parameter set is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Require a numeric parameter
    pub fn get_f64(&self, name: &str) -> Result<f64, RegistryError> {
        self.require(name)?
            .as_f64()
            .ok_or_else(|| not_a(name, "number"))
    }

    /// Numeric parameter with a default when absent
    ///
    /// A present but non-numeric value is still an error.
    pub fn get_f64_or(&self, name: &str, default: f64) -> Result<f64, RegistryError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(value) => value.as_f64().ok_or_else(|| not_a(name, "number")),
        }
    }

    /// Require an unsigned integer parameter
    pub fn get_u64(&self, name: &str) -> Result<u64, RegistryError> {
        self.require(name)?
            .as_u64()
            .ok_or_else(|| not_a(name, "unsigned integer"))
    }

    /// Require a string parameter
    pub fn get_str(&self, name: &str) -> Result<&str, RegistryError> {
        self.require(name)?
            .as_str()
            .ok_or_else(|| not_a(name, "string"))
    }

    /// Require a boolean parameter
    pub fn get_bool(&self, name: &str) -> Result<bool, RegistryError> {
        self.require(name)?
            .as_bool()
            .ok_or_else(|| not_a(name, "boolean"))
    }

    fn require(&self, name: &str) -> Result<&Value, RegistryError> {
        self.values
            .get(name)
            .ok_or_else(|| RegistryError::Construction(format!("missing parameter '{name}'")))
    }
}

fn not_a(name: &str, expected: &str) -> RegistryError {
    RegistryError::Construction(format!("parameter '{name}' is not a {expected}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_params() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert!(!params.contains("anything"));
    }

    #[test]
    fn set_and_get_typed_values() {
        let params = Params::new()
            .set("mean", 2.5)
            .set("count", 7u64)
            .set("label", "heavy-tail")
            .set("truncated", true);

        assert_eq!(params.get_f64("mean").unwrap(), 2.5);
        assert_eq!(params.get_u64("count").unwrap(), 7);
        assert_eq!(params.get_str("label").unwrap(), "heavy-tail");
        assert!(params.get_bool("truncated").unwrap());
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn missing_parameter_is_construction_error() {
        let params = Params::new();
        let err = params.get_f64("sigma").unwrap_err();
        assert_eq!(
            err,
            RegistryError::Construction("missing parameter 'sigma'".to_string())
        );
    }

    #[test]
    fn wrong_type_is_construction_error() {
        let params = Params::new().set("sigma", "not-a-number");
        let err = params.get_f64("sigma").unwrap_err();
        assert_eq!(
            err,
            RegistryError::Construction("parameter 'sigma' is not a number".to_string())
        );
    }

    #[test]
    fn default_used_only_when_absent() {
        let params = Params::new().set("scale", 3.0);
        assert_eq!(params.get_f64_or("scale", 1.0).unwrap(), 3.0);
        assert_eq!(params.get_f64_or("shift", 1.0).unwrap(), 1.0);

        // Present but mistyped is still an error, not the default
        let bad = Params::new().set("scale", "three");
        assert!(bad.get_f64_or("scale", 1.0).is_err());
    }

    #[test]
    fn params_round_trip_through_json() {
        let params = Params::new().set("mean", 0.0).set("std_dev", 1.0);
        let json = serde_json::to_string(&params).unwrap();
        let back: Params = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
