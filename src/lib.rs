//! kyky - keyed capability registry
//!
//! A small registry that maps stable string keys to pluggable
//! implementations of a capability contract:
//!
//! - [`Capability`] - the contract instances satisfy (a stable
//!   identifying key; domain traits extend it with real operations)
//! - [`Factory`] - builds instances without the registry knowing the
//!   concrete type; [`FnFactory`] wraps a closure
//! - [`Scope`] - where factories are discovered; [`StaticScope`] is an
//!   explicit, ordered list resolved at wiring time
//! - [`Registry`] - discovers factories exactly once, lazily, and
//!   builds instances by key with [`Params`] forwarded verbatim
//! - [`RegistryError`] - scope, lookup, and construction failures
//!
//! # Design
//!
//! The registry is an explicit object, not process-wide state: top-level
//! wiring constructs it once and hands it to consumers. Discovery is the
//! one-way Unloaded → Loaded transition, guarded so concurrent first
//! callers perform a single pass. On key collision the factory later in
//! scan order wins, deterministically, with a warning logged.
//!
//! ```
//! use kyky::{Capability, FnFactory, Params, Registry, StaticScope};
//!
//! trait Distribution: Capability {
//!     fn quantile(&self, p: f64) -> f64;
//! }
//!
//! struct Uniform {
//!     width: f64,
//! }
//!
//! impl Capability for Uniform {
//!     fn key(&self) -> &'static str {
//!         "uniform"
//!     }
//! }
//!
//! impl Distribution for Uniform {
//!     fn quantile(&self, p: f64) -> f64 {
//!         p * self.width
//!     }
//! }
//!
//! let scope = StaticScope::new().with(FnFactory::new("uniform", |params: &Params| {
//!     let width = params.get_f64_or("width", 1.0)?;
//!     Ok(Box::new(Uniform { width }) as Box<dyn Distribution>)
//! }));
//! let registry: Registry<dyn Distribution> = Registry::new(scope);
//!
//! let uniform = registry
//!     .create("uniform", &Params::new().set("width", 4.0))
//!     .unwrap();
//! assert_eq!(uniform.key(), "uniform");
//! assert_eq!(uniform.quantile(0.5), 2.0);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![warn(missing_docs)]

mod capability;
mod error;
mod params;
mod registry;
mod scope;

pub use capability::{Capability, Factory, FnFactory};
pub use error::RegistryError;
pub use params::Params;
pub use registry::Registry;
pub use scope::{Scope, StaticScope};
