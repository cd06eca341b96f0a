//! Candidate implementations of a pluggable abstraction.
//!
//! An [`Implementation`] stands in for a Configurable type inside a candidate
//! set. It carries the type key, the default configuration and a constructor
//! producing the shared abstraction `T` (usually a trait object).

use std::any::{Any, TypeId};
use std::fmt;

use crate::configurable::Configurable;
use crate::dict::ConfigDict;
use crate::error::Result;

/// Anything that can be picked out of a candidate set by type key.
pub trait Candidate {
    fn type_key(&self) -> &str;
}

type Build<T, A> = dyn Fn(&ConfigDict, bool, A) -> Result<Box<T>> + Send + Sync;

pub struct Implementation<T: ?Sized, A = ()> {
    key: String,
    name: &'static str,
    type_id: TypeId,
    default_config: fn() -> ConfigDict,
    export: fn(&dyn Any) -> Option<ConfigDict>,
    build: Box<Build<T, A>>,
}

fn export_as<C: Configurable>(value: &dyn Any) -> Option<ConfigDict> {
    value.downcast_ref::<C>().map(C::get_config)
}

impl<T: ?Sized + 'static, A: 'static> Implementation<T, A> {
    /// Describe `C` as an implementation of `T`; `upcast` turns a constructed
    /// `C` into the shared abstraction.
    pub fn new<C>(upcast: fn(C) -> Box<T>) -> Self
    where
        C: Configurable<Runtime = A>,
    {
        Self {
            key: C::type_key(),
            name: C::NAME,
            type_id: TypeId::of::<C>(),
            default_config: C::default_config,
            export: export_as::<C>,
            build: Box::new(move |config: &ConfigDict, merge_default: bool, runtime: A| {
                C::from_config_with(config, merge_default, runtime).map(upcast)
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_config(&self) -> ConfigDict {
        (self.default_config)()
    }

    /// Construct through the implementation's `from_config_with`.
    pub fn from_config_with(&self, config: &ConfigDict, merge_default: bool, runtime: A) -> Result<Box<T>> {
        (self.build)(config, merge_default, runtime)
    }

    /// True when `value` is an instance of the described type.
    pub fn describes(&self, value: &dyn Any) -> bool {
        value.type_id() == self.type_id
    }

    /// Export the configuration of `value` if it is an instance of the described type.
    pub fn export(&self, value: &dyn Any) -> Option<ConfigDict> {
        (self.export)(value)
    }
}

impl<T: ?Sized, A> Candidate for Implementation<T, A> {
    fn type_key(&self) -> &str {
        &self.key
    }
}

impl<T: ?Sized, A> fmt::Debug for Implementation<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Implementation").field("key", &self.key).finish()
    }
}

impl<C: Candidate + ?Sized> Candidate for &C {
    fn type_key(&self) -> &str {
        (**self).type_key()
    }
}

/// Build an [`Implementation`] of a boxed abstraction from a Configurable type.
///
/// ```
/// use configurable::{Arguments, Candidate, ConfigDict, Configurable, Implementation, Parameter, Result, implementation};
///
/// trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// struct Plain {
///     greeting: String,
/// }
///
/// impl Greeter for Plain {
///     fn greet(&self) -> String {
///         self.greeting.clone()
///     }
/// }
///
/// impl Configurable for Plain {
///     const NAMESPACE: &'static str = "demo";
///     const NAME: &'static str = "Plain";
///     type Runtime = ();
///     fn parameters() -> Vec<Parameter> {
///         vec![Parameter::with_default("greeting", "Hello")]
///     }
///     fn construct(mut args: Arguments, _: ()) -> Result<Self> {
///         Ok(Self { greeting: args.take("greeting")? })
///     }
///     fn get_config(&self) -> ConfigDict {
///         let mut config = ConfigDict::new();
///         config.insert("greeting".into(), self.greeting.clone().into());
///         config
///     }
/// }
///
/// let candidates: Vec<Implementation<dyn Greeter>> = vec![implementation!(Plain as dyn Greeter)];
/// assert_eq!(candidates[0].type_key(), "demo.Plain");
/// let greeter = candidates[0].from_config_with(&ConfigDict::new(), true, ()).unwrap();
/// assert_eq!(greeter.greet(), "Hello");
/// ```
#[macro_export]
macro_rules! implementation {
    ($ty:ty as $target:ty) => {
        $crate::Implementation::<$target, _>::new::<$ty>(|c| ::std::boxed::Box::new(c))
    };
}
