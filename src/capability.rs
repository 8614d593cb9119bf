//! The capability contract
//!
//! A pluggable implementation satisfies two halves of a contract:
//!
//! - [`Capability`]: instances report a stable identifying key. Domain
//!   traits extend it with whatever operations consumers actually call;
//!   the registry never needs to know about those.
//! - [`Factory`]: the "callable without an instance" half. It reports
//!   the same key and builds instances on demand. Discovery inspects
//!   factories only and never builds anything.

use crate::error::RegistryError;
use crate::params::Params;

/// Instance-level half of the capability contract
///
/// Extend this in a domain trait to describe what consumers can do with
/// an instance:
///
/// ```
/// use kyky::Capability;
///
/// trait Distribution: Capability {
///     fn quantile(&self, p: f64) -> f64;
/// }
/// ```
pub trait Capability: Send + Sync {
    /// Stable, non-empty key identifying this implementation
    ///
    /// Must be deterministic and must match the key reported by the
    /// factory that built the instance.
    fn key(&self) -> &'static str;
}

impl core::fmt::Debug for dyn Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Capability").field("key", &self.key()).finish()
    }
}

/// Builds instances of a capability type `C`
///
/// `C` is usually a trait object type such as `dyn Distribution`. The
/// factory's key is what the registry maps; instances it builds must
/// report the same key.
pub trait Factory<C: ?Sized>: Send + Sync {
    /// The identifying key, readable without an instance
    fn key(&self) -> &'static str;

    /// Build a fresh instance from the supplied parameters
    ///
    /// Parameter validation failures should be reported as
    /// [`RegistryError::Construction`]; the registry propagates them
    /// unchanged.
    fn build(&self, params: &Params) -> Result<Box<C>, RegistryError>;
}

/// Factory backed by a closure
///
/// Lightweight registration without a dedicated factory struct:
///
/// ```ignore
/// let factory = FnFactory::new("normal", |params| {
///     let mean = params.get_f64_or("mean", 0.0)?;
///     Ok(Box::new(Normal { mean }) as Box<dyn Distribution>)
/// });
/// ```
pub struct FnFactory<C: ?Sized> {
    key: &'static str,
    build: BuildFn<C>,
}

type BuildFn<C> = Box<dyn Fn(&Params) -> Result<Box<C>, RegistryError> + Send + Sync>;

impl<C: ?Sized> FnFactory<C> {
    /// Wrap a closure as a factory for `key`
    pub fn new(
        key: &'static str,
        build: impl Fn(&Params) -> Result<Box<C>, RegistryError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            build: Box::new(build),
        }
    }
}

impl<C: ?Sized> Factory<C> for FnFactory<C> {
    fn key(&self) -> &'static str {
        self.key
    }

    fn build(&self, params: &Params) -> Result<Box<C>, RegistryError> {
        (self.build)(params)
    }
}
