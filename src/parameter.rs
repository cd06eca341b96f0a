//! Declared construction parameters and the argument bag handed to a
//! constructor.
//!
//! A [`Parameter`] list stands in for the constructor signature: it names every
//! argument the constructor accepts and carries the defaults that make up the
//! default configuration.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::configurable::Configurable;
use crate::dict::ConfigDict;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    /// A named argument, optionally with a declared default.
    Named { name: &'static str, default: Option<Value> },
    /// Supplied at construction time by the caller, never part of a configuration.
    Runtime { name: &'static str },
    /// Absorbs every configuration key that matches no named parameter.
    CatchAll { name: &'static str },
}

impl Parameter {
    pub fn required(name: &'static str) -> Self {
        Self::Named { name, default: None }
    }
    pub fn with_default(name: &'static str, default: impl Into<Value>) -> Self {
        Self::Named { name, default: Some(default.into()) }
    }
    pub fn runtime(name: &'static str) -> Self {
        Self::Runtime { name }
    }
    pub fn catch_all(name: &'static str) -> Self {
        Self::CatchAll { name }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Named { name, .. } | Self::Runtime { name } | Self::CatchAll { name } => *name,
        }
    }
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll { .. })
    }
}

/// Map every named parameter to its default, or `null` when it has none.
/// Runtime and catch-all parameters do not appear.
pub fn param_map(parameters: &[Parameter]) -> ConfigDict {
    parameters
        .iter()
        .filter_map(|p| match p {
            Parameter::Named { name, default } => {
                Some((name.to_string(), default.clone().unwrap_or(Value::Null)))
            }
            _ => None,
        })
        .collect()
}

/// Named constructor arguments checked against a parameter list.
#[derive(Debug)]
pub struct Arguments {
    target: String,
    values: ConfigDict,
}

impl Arguments {
    /// Check `config` against `parameters`: every named parameter without a
    /// default must be present, an absent parameter with a default takes that
    /// default, and keys matching no named parameter are only accepted when a
    /// catch-all parameter is declared.
    pub fn bind(target: impl Into<String>, parameters: &[Parameter], mut config: ConfigDict) -> Result<Self> {
        let target = target.into();
        for parameter in parameters {
            let Parameter::Named { name, default } = parameter else {
                continue;
            };
            if config.contains_key(*name) {
                continue;
            }
            match default {
                Some(value) => {
                    config.insert(name.to_string(), value.clone());
                }
                None => {
                    return Err(ConfigError::invalid_arguments(
                        target,
                        format!("missing required argument '{name}'"),
                    ));
                }
            }
        }
        if !parameters.iter().any(Parameter::is_catch_all) {
            let unexpected = config.keys().find(|key| {
                !parameters
                    .iter()
                    .any(|p| matches!(p, Parameter::Named { name, .. } if *name == key.as_str()))
            });
            if let Some(key) = unexpected {
                return Err(ConfigError::invalid_arguments(
                    target,
                    format!("unexpected argument '{key}'"),
                ));
            }
        }
        Ok(Self { target, values: config })
    }

    /// Type key of the implementation being constructed.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn take_value(&mut self, name: &str) -> Result<Value> {
        self.values.remove(name).ok_or_else(|| {
            ConfigError::invalid_arguments(&self.target, format!("no argument named '{name}'"))
        })
    }

    /// Remove and deserialize a named argument.
    pub fn take<T: DeserializeOwned>(&mut self, name: &str) -> Result<T> {
        let value = self.take_value(name)?;
        serde_json::from_value(value).map_err(|e| {
            ConfigError::invalid_arguments(&self.target, format!("argument '{name}': {e}"))
        })
    }

    /// Like [`Arguments::take`], but a `null` value yields `T::default()`.
    pub fn take_or_default<T: DeserializeOwned + Default>(&mut self, name: &str) -> Result<T> {
        match self.take_value(name)? {
            Value::Null => Ok(T::default()),
            value => serde_json::from_value(value).map_err(|e| {
                ConfigError::invalid_arguments(&self.target, format!("argument '{name}': {e}"))
            }),
        }
    }

    /// Remove a named argument that must hold a nested mapping.
    pub fn take_config(&mut self, name: &str) -> Result<ConfigDict> {
        match self.take_value(name)? {
            Value::Object(map) => Ok(map),
            other => Err(ConfigError::invalid_arguments(
                &self.target,
                format!("argument '{name}' must be a mapping, found {other}"),
            )),
        }
    }

    /// Construct a nested configurable value from the mapping held by a named
    /// argument, merging that type's defaults underneath it.
    pub fn take_nested<C>(&mut self, name: &str) -> Result<C>
    where
        C: Configurable<Runtime = ()>,
    {
        let config = self.take_config(name)?;
        C::from_config(&config, true)
    }

    /// Keys not yet taken. For a type with a catch-all parameter these are the
    /// extra keys it absorbed.
    pub fn remaining(self) -> ConfigDict {
        self.values
    }
}
