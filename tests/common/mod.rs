#![allow(dead_code)]

use serde_json::json;

use configurable::parameter::param_map;
use configurable::{Arguments, ConfigDict, Configurable, Implementation, Parameter, Result, implementation};

pub trait Algorithm {
    fn describe(&self) -> String;
    fn as_any(&self) -> &dyn std::any::Any;
}

#[derive(Debug, PartialEq)]
pub struct T1 {
    pub foo: i64,
    pub bar: String,
}

impl T1 {
    pub fn new(foo: i64, bar: &str) -> Self {
        Self { foo, bar: bar.to_string() }
    }
}

impl Algorithm for T1 {
    fn describe(&self) -> String {
        format!("T1({}, {})", self.foo, self.bar)
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Configurable for T1 {
    const NAMESPACE: &'static str = "tests.configuration";
    const NAME: &'static str = "T1";
    type Runtime = ();
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::with_default("foo", 1), Parameter::with_default("bar", "baz")]
    }
    fn construct(mut args: Arguments, _: ()) -> Result<Self> {
        Ok(Self { foo: args.take("foo")?, bar: args.take("bar")? })
    }
    fn get_config(&self) -> ConfigDict {
        to_dict(json!({"foo": self.foo, "bar": self.bar}))
    }
}

/// Nested algorithm: `child` holds a T1.
#[derive(Debug, PartialEq)]
pub struct T2 {
    pub child: T1,
    pub alpha: f64,
    pub beta: String,
}

impl Algorithm for T2 {
    fn describe(&self) -> String {
        format!("T2({}, {}, {})", self.child.describe(), self.alpha, self.beta)
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Configurable for T2 {
    const NAMESPACE: &'static str = "tests.configuration";
    const NAME: &'static str = "T2";
    type Runtime = ();
    fn parameters() -> Vec<Parameter> {
        vec![
            Parameter::required("child"),
            Parameter::with_default("alpha", 0.0001),
            Parameter::with_default("beta", "default"),
        ]
    }
    fn default_config() -> ConfigDict {
        let mut default = param_map(&Self::parameters());
        // the child defaults to a default T1
        default.insert("child".into(), T1::default_config().into());
        default
    }
    fn construct(mut args: Arguments, _: ()) -> Result<Self> {
        Ok(Self { child: args.take_nested("child")?, alpha: args.take("alpha")?, beta: args.take("beta")? })
    }
    fn get_config(&self) -> ConfigDict {
        to_dict(json!({"child": self.child.get_config(), "alpha": self.alpha, "beta": self.beta}))
    }
}

pub fn candidates() -> Vec<Implementation<dyn Algorithm>> {
    vec![implementation!(T1 as dyn Algorithm), implementation!(T2 as dyn Algorithm)]
}

pub fn to_dict(value: serde_json::Value) -> ConfigDict {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
