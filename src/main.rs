use std::error::Error;
use std::path::Path;

use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use configurable::standard::{from_config_dict, make_default_config, to_config_dict_erased};
use configurable::{Arguments, ConfigDict, Configurable, Implementation, Parameter, Result, implementation};

// ------------- Settings -------------
// Read from an optional `configurable.{json,toml,yaml}` next to the binary,
// overridden by CONFIGURABLE_* environment variables.
#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(default = "default_greeter_file")]
    greeter_file: String,
    #[serde(default = "default_log_filter")]
    log_filter: String,
    #[serde(default)]
    write_defaults: bool,
}

fn default_greeter_file() -> String {
    "greeter.json".into()
}
fn default_log_filter() -> String {
    "info".into()
}

fn load_settings() -> std::result::Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("configurable").required(false))
        .add_source(config::Environment::with_prefix("CONFIGURABLE"))
        .build()?
        .try_deserialize()
}

// ------------- Greeters -------------
trait Greeter {
    fn greet(&self, name: &str) -> String;
    fn as_any(&self) -> &dyn std::any::Any;
}

#[derive(Debug)]
struct Plain {
    greeting: String,
    punctuation: String,
}

impl Greeter for Plain {
    fn greet(&self, name: &str) -> String {
        format!("{}, {}{}", self.greeting, name, self.punctuation)
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Configurable for Plain {
    const NAMESPACE: &'static str = module_path!();
    const NAME: &'static str = "Plain";
    type Runtime = ();
    fn parameters() -> Vec<Parameter> {
        vec![
            Parameter::with_default("greeting", "Hello"),
            Parameter::with_default("punctuation", "!"),
        ]
    }
    fn construct(mut args: Arguments, _: ()) -> Result<Self> {
        Ok(Self { greeting: args.take("greeting")?, punctuation: args.take("punctuation")? })
    }
    fn get_config(&self) -> ConfigDict {
        let mut config = ConfigDict::new();
        config.insert("greeting".into(), json!(self.greeting));
        config.insert("punctuation".into(), json!(self.punctuation));
        config
    }
}

/// Repeats what a nested plain greeter says.
#[derive(Debug)]
struct Repeating {
    inner: Plain,
    times: u32,
}

impl Greeter for Repeating {
    fn greet(&self, name: &str) -> String {
        vec![self.inner.greet(name); self.times as usize].join(" ")
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Configurable for Repeating {
    const NAMESPACE: &'static str = module_path!();
    const NAME: &'static str = "Repeating";
    type Runtime = ();
    fn parameters() -> Vec<Parameter> {
        vec![
            Parameter::with_default("inner", Plain::default_config()),
            Parameter::with_default("times", 2),
        ]
    }
    fn construct(mut args: Arguments, _: ()) -> Result<Self> {
        Ok(Self { inner: args.take_nested("inner")?, times: args.take("times")? })
    }
    fn get_config(&self) -> ConfigDict {
        let mut config = ConfigDict::new();
        config.insert("inner".into(), self.inner.get_config().into());
        config.insert("times".into(), json!(self.times));
        config
    }
}

fn candidates() -> Vec<Implementation<dyn Greeter>> {
    vec![implementation!(Plain as dyn Greeter), implementation!(Repeating as dyn Greeter)]
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let settings = load_settings()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let candidates = candidates();
    let path = Path::new(&settings.greeter_file);
    if !path.exists() {
        let defaults = serde_json::to_string_pretty(&make_default_config(&candidates))?;
        warn!(file = %settings.greeter_file, "no greeter configuration found");
        if settings.write_defaults {
            std::fs::write(path, &defaults)?;
            info!(file = %settings.greeter_file, "wrote default configuration, select a \"type\" to use it");
        } else {
            println!("{defaults}");
        }
        return Ok(());
    }

    let text = std::fs::read_to_string(path)?;
    let config: ConfigDict = serde_json::from_str(&text)?;
    let greeter = from_config_dict(&config, &candidates)?;
    println!("{}", greeter.greet("world"));

    let exported = to_config_dict_erased(greeter.as_any(), &candidates)?;
    info!(config = %serde_json::Value::Object(exported), "greeter configuration");
    Ok(())
}
