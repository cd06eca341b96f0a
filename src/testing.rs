//! Cross-check of a Configurable type's default configuration, exported
//! configuration and construction, for use in downstream test suites.

use std::collections::BTreeSet;

use crate::configurable::Configurable;
use crate::dict::is_json_round_trippable;
use crate::parameter::Parameter;

/// Check `inst`'s type and build three more instances from it:
///
/// ```text
/// inst -> inst2 -> inst4
///      -> inst3
/// ```
///
/// `inst2` and `inst3` come from `inst`'s configuration, `inst4` from
/// `inst2`'s. Every exported configuration must equal every other one.
/// Before that, the default configuration keys must match the declared
/// constructor parameters minus `ignored_params`, the default configuration
/// must survive a JSON round trip, and `inst`'s configuration must have the
/// same keys as the default one.
///
/// `runtime` supplies the runtime arguments for each construction.
///
/// Panics on the first failed check. Returns `(inst2, inst3, inst4)`.
pub fn configuration_test_helper<C, F>(inst: &C, ignored_params: &[&str], mut runtime: F) -> (C, C, C)
where
    C: Configurable,
    F: FnMut() -> C::Runtime,
{
    let key = C::type_key();
    let default_config = C::default_config();
    let parameter_names: BTreeSet<&str> = C::parameters()
        .iter()
        .filter(|p| !p.is_catch_all())
        .map(Parameter::name)
        .filter(|name| !ignored_params.contains(name))
        .collect();
    let default_keys: BTreeSet<&str> = default_config.keys().map(String::as_str).collect();
    assert_eq!(
        default_keys, parameter_names,
        "Default configuration dictionary keys of {key} do not match the constructor parameters."
    );
    assert!(
        is_json_round_trippable(&default_config),
        "Default config JSON serialize -> deserialize did not match original config for {key}."
    );

    let inst_config = inst.get_config();
    let inst_keys: BTreeSet<&str> = inst_config.keys().map(String::as_str).collect();
    assert_eq!(inst_keys, default_keys, "Instance configuration keys of {key} do not match the default configuration keys.");

    let inst2 = C::from_config_with(&inst_config, true, runtime())
        .unwrap_or_else(|e| panic!("Failed to construct {key} from instance config: {e}"));
    let inst2_config = inst2.get_config();
    let inst3 = C::from_config_with(&inst_config, true, runtime())
        .unwrap_or_else(|e| panic!("Failed to construct {key} from instance config: {e}"));
    let inst3_config = inst3.get_config();
    let inst4 = C::from_config_with(&inst2_config, true, runtime())
        .unwrap_or_else(|e| panic!("Failed to construct {key} from second instance config: {e}"));
    let inst4_config = inst4.get_config();

    assert_eq!(inst_config, inst2_config);
    assert_eq!(inst_config, inst3_config);
    assert_eq!(inst2_config, inst3_config);
    assert_eq!(inst_config, inst4_config);
    assert_eq!(inst2_config, inst4_config);
    assert_eq!(inst3_config, inst4_config);

    (inst2, inst3, inst4)
}
