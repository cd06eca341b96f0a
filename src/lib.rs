//! Configurable – JSON-compatible configuration dictionaries for pluggable implementations.
//!
//! A plugin-style design has several interchangeable implementations of one
//! abstraction. This crate lets each of them be selected and configured the
//! same way, through dictionaries that can be read from and written to files:
//! * A [`Configurable`] type declares its construction [`Parameter`]s, builds
//!   itself from [`Arguments`] and exports its current configuration as a
//!   *bare* dictionary (parameter name to value).
//! * The [`standard`] helpers wrap bare dictionaries into the *standard*
//!   dictionary, where a `"type"` key picks one of several per-implementation
//!   blocks keyed by type key (`"<namespace>.<name>"`).
//! * An [`Implementation`] describes one candidate of a candidate set. Sets are
//!   assembled by the caller; there is no global registry.
//!
//! Configuration dictionaries are plain [`serde_json`] maps ([`ConfigDict`]).
//!
//! ## Quick Start
//! ```
//! use configurable::{Arguments, Configurable, ConfigDict, Parameter, Result};
//! use configurable::standard::{from_config_dict, make_default_config};
//! use serde_json::json;
//!
//! trait Shape { fn area(&self) -> f64; }
//!
//! struct Square { side: f64 }
//! impl Shape for Square { fn area(&self) -> f64 { self.side * self.side } }
//! impl Configurable for Square {
//!     const NAMESPACE: &'static str = "shapes";
//!     const NAME: &'static str = "Square";
//!     type Runtime = ();
//!     fn parameters() -> Vec<Parameter> { vec![Parameter::with_default("side", 1.0)] }
//!     fn construct(mut args: Arguments, _: ()) -> Result<Self> {
//!         Ok(Self { side: args.take("side")? })
//!     }
//!     fn get_config(&self) -> ConfigDict {
//!         json!({"side": self.side}).as_object().cloned().unwrap_or_default()
//!     }
//! }
//!
//! let candidates = vec![configurable::implementation!(Square as dyn Shape)];
//! let defaults = make_default_config(&candidates);
//! assert_eq!(defaults["type"], json!(null));
//! assert_eq!(defaults["shapes.Square"], json!({"side": 1.0}));
//!
//! let config = json!({"type": "shapes.Square", "shapes.Square": {"side": 3.0}});
//! let shape = from_config_dict(config.as_object().unwrap(), &candidates).unwrap();
//! assert_eq!(shape.area(), 9.0);
//! ```
//!
//! ## Testing
//! [`testing::configuration_test_helper`] cross-checks a type's default
//! configuration, exported configuration and construction round trips.

pub mod configurable;
pub mod dict;
pub mod error;
pub mod implementation;
pub mod parameter;
pub mod standard;
pub mod testing;

pub use configurable::{Configurable, base_from_config, type_key};
pub use dict::{ConfigDict, merge_dict};
pub use error::{ConfigError, Result};
pub use implementation::{Candidate, Implementation};
pub use parameter::{Arguments, Parameter};
