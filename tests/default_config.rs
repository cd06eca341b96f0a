mod common;

use serde_json::json;

use common::{T1, T2, to_dict};
use configurable::{Arguments, ConfigDict, ConfigError, Configurable, Parameter, Result};

// Types that only matter for their declared parameters.
macro_rules! declared {
    ($name:ident, [$($param:expr),* $(,)?]) => {
        #[derive(Debug)]
        struct $name;
        impl Configurable for $name {
            const NAMESPACE: &'static str = module_path!();
            const NAME: &'static str = stringify!($name);
            type Runtime = ();
            fn parameters() -> Vec<Parameter> {
                vec![$($param),*]
            }
            fn construct(_: Arguments, _: ()) -> Result<Self> {
                Ok($name)
            }
            fn get_config(&self) -> ConfigDict {
                ConfigDict::new()
            }
        }
    };
}

declared!(NoConstructor, []);
declared!(Positional, [Parameter::required("a"), Parameter::required("b"), Parameter::required("cat")]);
declared!(KeywordOnly, [Parameter::required("a"), Parameter::with_default("b", 0)]);
declared!(WithCatchAll, [
    Parameter::required("a"),
    Parameter::required("b"),
    Parameter::required("cat"),
    Parameter::catch_all("args"),
    Parameter::catch_all("kwargs"),
]);
declared!(WithDefaults, [
    Parameter::required("a"),
    Parameter::required("b"),
    Parameter::with_default("c", 0),
    Parameter::with_default("d", "foobar"),
]);
declared!(WithDefaultsAndCatchAll, [
    Parameter::required("a"),
    Parameter::required("b"),
    Parameter::with_default("c", 0),
    Parameter::with_default("d", "foobar"),
    Parameter::catch_all("kwargs"),
]);

#[test]
fn no_constructor_gives_empty_default() {
    assert!(NoConstructor::default_config().is_empty());
}

#[test]
fn parameters_without_defaults_map_to_null() {
    assert_eq!(Positional::default_config(), to_dict(json!({"a": null, "b": null, "cat": null})));
}

#[test]
fn keyword_defaults_are_kept() {
    assert_eq!(KeywordOnly::default_config(), to_dict(json!({"a": null, "b": 0})));
}

#[test]
fn catch_all_parameters_are_excluded() {
    assert_eq!(WithCatchAll::default_config(), Positional::default_config());
}

#[test]
fn declared_defaults_are_introspected() {
    let expected = to_dict(json!({"a": null, "b": null, "c": 0, "d": "foobar"}));
    assert_eq!(WithDefaults::default_config(), expected);
    assert_eq!(WithDefaultsAndCatchAll::default_config(), expected);
}

#[test]
fn overridden_default_config_nests_child_default() {
    assert_eq!(T1::default_config(), to_dict(json!({"foo": 1, "bar": "baz"})));
    assert_eq!(
        T2::default_config(),
        to_dict(json!({"child": {"foo": 1, "bar": "baz"}, "alpha": 0.0001, "beta": "default"}))
    );
}

#[test]
fn type_key_joins_namespace_and_name() {
    assert_eq!(T1::type_key(), "tests.configuration.T1");
    assert_eq!(Positional::type_key(), "default_config.Positional");
    assert_eq!(configurable::type_key("my_crate::scoring", "Linear"), "my_crate.scoring.Linear");
}

#[test]
fn from_config_merges_defaults() {
    let t1 = T1::from_config(&to_dict(json!({"foo": 8})), true).expect("construct");
    assert_eq!(t1, T1::new(8, "baz"));
}

#[test]
fn from_config_does_not_mutate_input() {
    let config = to_dict(json!({"child": {"foo": 3}, "beta": "x"}));
    let before = config.clone();
    let t2 = T2::from_config(&config, true).expect("construct");
    assert_eq!(config, before);
    assert_eq!(t2.child, T1::new(3, "baz"));
    assert_eq!(t2.alpha, 0.0001);
}

#[test]
fn declared_default_fills_omitted_argument_without_merge() {
    let t1 = T1::from_config(&to_dict(json!({"foo": 2})), false).expect("construct");
    assert_eq!(t1, T1::new(2, "baz"));
}

#[test]
fn missing_required_argument_without_merge() {
    let err = Positional::from_config(&to_dict(json!({"a": 1, "cat": 3})), false).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidArguments { .. }));
    assert!(format!("{err}").contains("missing required argument 'b'"), "{err}");
}

#[test]
fn unexpected_argument_is_rejected() {
    let err = T1::from_config(&to_dict(json!({"foo": 2, "qux": true})), true).unwrap_err();
    assert!(format!("{err}").contains("unexpected argument 'qux'"));
}

#[test]
fn catch_all_accepts_extra_keys() {
    struct Extras {
        extra: ConfigDict,
    }
    impl Configurable for Extras {
        const NAMESPACE: &'static str = module_path!();
        const NAME: &'static str = "Extras";
        type Runtime = ();
        fn parameters() -> Vec<Parameter> {
            vec![Parameter::with_default("a", 1), Parameter::catch_all("kwargs")]
        }
        fn construct(mut args: Arguments, _: ()) -> Result<Self> {
            let _a: i64 = args.take("a")?;
            Ok(Self { extra: args.remaining() })
        }
        fn get_config(&self) -> ConfigDict {
            self.extra.clone()
        }
    }
    let extras = Extras::from_config(&to_dict(json!({"z": [1, 2], "y": null})), true).expect("construct");
    assert_eq!(extras.extra, to_dict(json!({"z": [1, 2], "y": null})));
}

#[test]
fn null_for_required_typed_argument_fails() {
    // child of T2 has a default, but T1's foo is typed as an integer
    let err = T2::from_config(&to_dict(json!({"child": {"foo": null}})), true).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("tests.configuration.T1"), "{msg}");
    assert!(msg.contains("argument 'foo'"), "{msg}");
}

#[test]
fn construction_errors_surface_unchanged() {
    #[derive(Debug)]
    struct Positive(u32);
    impl Configurable for Positive {
        const NAMESPACE: &'static str = module_path!();
        const NAME: &'static str = "Positive";
        type Runtime = ();
        fn parameters() -> Vec<Parameter> {
            vec![Parameter::with_default("value", 1)]
        }
        fn construct(mut args: Arguments, _: ()) -> Result<Self> {
            match args.take("value")? {
                0 => Err(ConfigError::Construction("value must be positive".into())),
                v => Ok(Self(v)),
            }
        }
        fn get_config(&self) -> ConfigDict {
            to_dict(json!({"value": self.0}))
        }
    }
    let err = Positive::from_config(&to_dict(json!({"value": 0})), true).unwrap_err();
    assert!(matches!(err, ConfigError::Construction(ref m) if m == "value must be positive"));
    assert_eq!(Positive::from_config(&ConfigDict::new(), true).expect("construct").0, 1);
}

#[test]
fn overridden_from_config_renames_legacy_key() {
    #[derive(Debug)]
    struct Scaled {
        factor: f64,
    }
    impl Configurable for Scaled {
        const NAMESPACE: &'static str = module_path!();
        const NAME: &'static str = "Scaled";
        type Runtime = ();
        fn parameters() -> Vec<Parameter> {
            vec![Parameter::with_default("factor", 1.0)]
        }
        fn from_config_with(config: &ConfigDict, merge_default: bool, runtime: ()) -> Result<Self> {
            // shallow copy, the caller's dictionary stays as it was
            let mut config = config.clone();
            if let Some(scale) = config.remove("scale") {
                config.insert("factor".into(), scale);
            }
            configurable::base_from_config(&config, merge_default, runtime)
        }
        fn construct(mut args: Arguments, _: ()) -> Result<Self> {
            Ok(Self { factor: args.take("factor")? })
        }
        fn get_config(&self) -> ConfigDict {
            to_dict(json!({"factor": self.factor}))
        }
    }
    let legacy = to_dict(json!({"scale": 2.5}));
    let scaled = Scaled::from_config(&legacy, true).expect("construct");
    assert_eq!(scaled.factor, 2.5);
    assert!(legacy.contains_key("scale"));
    configurable::testing::configuration_test_helper(&scaled, &[], || ());
}
