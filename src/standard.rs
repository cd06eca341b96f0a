//! Helpers for the standard configuration dictionary.
//!
//! A standard dictionary selects one implementation out of several through its
//! `"type"` key and carries a bare configuration block per implementation:
//!
//! ```json
//! {
//!     "type": "my_crate.scoring.Linear",
//!     "my_crate.scoring.Linear": { "slope": 2.0 },
//!     "my_crate.scoring.Constant": { "value": null }
//! }
//! ```
//!
//! Blocks for unselected implementations may stay in the dictionary.

use std::any::Any;
use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::configurable::Configurable;
use crate::dict::ConfigDict;
use crate::error::{ConfigError, Result};
use crate::implementation::{Candidate, Implementation};

pub const TYPE_KEY: &str = "type";

/// Default standard configuration for a candidate set: `"type"` is `null` and
/// every candidate contributes its default configuration under its type key.
///
/// No implementation is preselected, not even when there is only one
/// candidate, so the caller has to choose and configure one explicitly.
pub fn make_default_config<'a, T, A>(
    candidates: impl IntoIterator<Item = &'a Implementation<T, A>>,
) -> ConfigDict
where
    T: ?Sized + 'static,
    A: 'static,
{
    let mut config = ConfigDict::new();
    config.insert(TYPE_KEY.to_string(), Value::Null);
    for candidate in candidates {
        config.insert(candidate.type_key().to_string(), Value::Object(candidate.default_config()));
    }
    config
}

/// Wrap a bare configuration for the implementation `key` into standard form.
pub fn compose_config_dict(key: &str, config: ConfigDict) -> ConfigDict {
    let mut standard = ConfigDict::new();
    standard.insert(TYPE_KEY.to_string(), Value::String(key.to_string()));
    standard.insert(key.to_string(), Value::Object(config));
    standard
}

pub fn config_dict_for<C: Configurable>(config: ConfigDict) -> ConfigDict {
    compose_config_dict(&C::type_key(), config)
}

/// Standard configuration of an instance.
pub fn to_config_dict<C: Configurable>(instance: &C) -> ConfigDict {
    config_dict_for::<C>(instance.get_config())
}

/// Standard configuration of a type-erased value.
///
/// Fails with [`ConfigError::InvalidArgument`] when `value` is itself an
/// implementation descriptor rather than an instance, or when none of the
/// candidates describes its concrete type.
pub fn to_config_dict_erased<'a, T, A>(
    value: &dyn Any,
    candidates: impl IntoIterator<Item = &'a Implementation<T, A>>,
) -> Result<ConfigDict>
where
    T: ?Sized + 'static,
    A: 'static,
{
    if value.is::<Implementation<T, A>>() {
        return Err(ConfigError::InvalidArgument(
            "value must be an instance and its type must implement Configurable. \
             Was given an implementation descriptor."
                .to_string(),
        ));
    }
    for candidate in candidates {
        if candidate.describes(value) {
            if let Some(config) = candidate.export(value) {
                return Ok(compose_config_dict(candidate.type_key(), config));
            }
        }
    }
    Err(ConfigError::InvalidArgument(
        "value must be an instance and its type must implement Configurable. \
         Was given a value of a type outside the candidate set."
            .to_string(),
    ))
}

/// Pick the candidate named by `config["type"]` and return it together with
/// its configuration block.
///
/// Checks, in order: `"type"` is present, is not `null`, names a block present
/// in `config`, and names one of the candidates.
pub fn resolve_implementation<'a, 'c, K>(
    config: &'c ConfigDict,
    candidates: impl IntoIterator<Item = &'a K>,
) -> Result<(&'a K, &'c ConfigDict)>
where
    K: Candidate + ?Sized + 'a,
{
    let requested = config.get(TYPE_KEY).ok_or(ConfigError::MissingType)?;
    // last candidate wins on a key collision
    let type_map: HashMap<&str, &'a K> = candidates.into_iter().map(|c| (c.type_key(), c)).collect();
    let block_options = || -> Vec<String> {
        config.keys().filter(|k| k.as_str() != TYPE_KEY).cloned().collect()
    };
    let requested = match requested {
        Value::Null => return Err(ConfigError::UnsetType { options: block_options() }),
        Value::String(name) => name.clone(),
        // block keys are strings, so no other value can name one
        other => {
            return Err(ConfigError::NoConfigBlock { requested: other.to_string(), options: block_options() });
        }
    };
    let Some(block) = config.get(&requested).filter(|_| requested != TYPE_KEY) else {
        return Err(ConfigError::NoConfigBlock { requested, options: block_options() });
    };
    let Some(candidate) = type_map.get(requested.as_str()).copied() else {
        let mut options: Vec<String> = type_map.keys().map(|k| k.to_string()).collect();
        options.sort();
        return Err(ConfigError::UnknownImplementation { requested, options });
    };
    match block {
        Value::Object(block) => {
            debug!(implementation = %requested, "resolved implementation");
            Ok((candidate, block))
        }
        other => Err(ConfigError::invalid_arguments(
            requested,
            format!("configuration block must be a mapping, found {other}"),
        )),
    }
}

/// Construct the implementation selected by a standard configuration.
pub fn from_config_dict<'a, T>(
    config: &ConfigDict,
    candidates: impl IntoIterator<Item = &'a Implementation<T>>,
) -> Result<Box<T>>
where
    T: ?Sized + 'static,
{
    from_config_dict_with(config, candidates, ())
}

/// Like [`from_config_dict`], forwarding `runtime` to the selected
/// implementation for parameters that are not part of its configuration.
pub fn from_config_dict_with<'a, T, A>(
    config: &ConfigDict,
    candidates: impl IntoIterator<Item = &'a Implementation<T, A>>,
    runtime: A,
) -> Result<Box<T>>
where
    T: ?Sized + 'static,
    A: 'static,
{
    let (implementation, block) = resolve_implementation(config, candidates)?;
    implementation.from_config_with(block, true, runtime)
}
