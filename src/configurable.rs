//! The [`Configurable`] capability.
//!
//! A conforming type declares its construction parameters, builds itself from
//! an [`Arguments`] bag and exports its current configuration as a bare
//! dictionary. The remaining operations have base implementations:
//!
//! * [`Configurable::default_config`] maps the declared parameters to their
//!   defaults. Override it to post-process, e.g. to put a nested type's own
//!   default configuration under the parameter that holds it.
//! * [`Configurable::from_config_with`] merges the defaults underneath the given
//!   configuration, checks it against the declared parameters and calls
//!   [`Configurable::construct`]. Overrides should copy the input before
//!   changing it and finish through [`base_from_config`].

use tracing::trace;

use crate::dict::{ConfigDict, merge_dict};
use crate::error::Result;
use crate::parameter::{Arguments, Parameter, param_map};

/// Render a namespace and a type name as a type key, `"<namespace>.<name>"`.
/// Rust path separators in the namespace become dots.
pub fn type_key(namespace: &str, name: &str) -> String {
    format!("{}.{}", namespace.replace("::", "."), name)
}

pub trait Configurable: Sized + 'static {
    // static stuff which needs to be implemented downstream
    /// Defining namespace, normally `module_path!()`.
    const NAMESPACE: &'static str;
    const NAME: &'static str;
    /// Arguments supplied by the caller at construction time that never appear
    /// in a configuration. Most types use `()`.
    type Runtime;

    /// The primary constructor.
    fn construct(args: Arguments, runtime: Self::Runtime) -> Result<Self>;

    /// A bare configuration that rebuilds an equivalent instance through
    /// [`Configurable::from_config_with`]. Runtime-only parameters are left out.
    fn get_config(&self) -> ConfigDict;

    // pre-made implementations
    fn type_key() -> String {
        type_key(Self::NAMESPACE, Self::NAME)
    }

    /// Declared construction parameters. None unless the type declares a constructor.
    fn parameters() -> Vec<Parameter> {
        Vec::new()
    }

    fn default_config() -> ConfigDict {
        param_map(&Self::parameters())
    }

    fn from_config_with(
        config: &ConfigDict,
        merge_default: bool,
        runtime: Self::Runtime,
    ) -> Result<Self> {
        base_from_config(config, merge_default, runtime)
    }

    fn from_config(config: &ConfigDict, merge_default: bool) -> Result<Self>
    where
        Self: Configurable<Runtime = ()>,
    {
        Self::from_config_with(config, merge_default, ())
    }
}

/// Base construction: optionally lay `config` over the default configuration,
/// bind the result to the declared parameters and call the constructor.
/// Neither `config` nor the default configuration is modified.
pub fn base_from_config<C: Configurable>(
    config: &ConfigDict,
    merge_default: bool,
    runtime: C::Runtime,
) -> Result<C> {
    let key = C::type_key();
    let merged = if merge_default {
        merge_dict(&C::default_config(), config)
    } else {
        config.clone()
    };
    trace!(implementation = %key, merge_default, keys = merged.len(), "constructing from config");
    let args = Arguments::bind(key, &C::parameters(), merged)?;
    C::construct(args, runtime)
}
