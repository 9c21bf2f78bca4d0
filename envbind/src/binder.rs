//! Field traversal and value resolution

use crate::directive::Directive;
use crate::error::BindError;
use crate::source::{Lookup, ProcessEnv};
use crate::Bind;
use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::debug;

/// Binds records against a variable source.
///
/// `Binder::new()` reads the process environment; [`Binder::with_source`]
/// accepts any [`Lookup`], such as a `HashMap<String, String>`.
#[derive(Debug, Clone, Default)]
pub struct Binder<L = ProcessEnv> {
    source: L,
}

impl Binder {
    /// Binder over the process environment.
    pub fn new() -> Self {
        Self { source: ProcessEnv }
    }
}

impl<L: Lookup> Binder<L> {
    /// Binder over a custom source.
    pub fn with_source(source: L) -> Self {
        Self { source }
    }

    /// Populate `target` in place.
    ///
    /// # Errors
    ///
    /// - A resolved literal cannot be coerced into its field's type
    /// - A field with a directive has a type without a coercion rule
    ///
    /// Fields assigned before the error keep their new values.
    pub fn bind<T: Bind>(&self, target: &mut T) -> Result<(), BindError> {
        walk(target, &self.source)
    }
}

/// Walk a record's field table, recursing into nested records.
pub(crate) fn walk<T: Bind>(record: &mut T, source: &dyn Lookup) -> Result<(), BindError> {
    for field in T::fields() {
        field.apply(record, source)?;
    }
    Ok(())
}

/// Pick the environment value if set and non-empty, the default otherwise.
pub(crate) fn resolve<'d>(
    field: &str,
    directive: &Directive<'d>,
    source: &dyn Lookup,
) -> Cow<'d, str> {
    let variable = directive.variable();
    let found = if variable.is_empty() {
        None
    } else {
        source.lookup(variable)
    };

    match found {
        Some(value) if !value.is_empty() => {
            debug!(field, variable, source = "environment", "Resolved field");
            Cow::Owned(value)
        }
        _ => {
            debug!(field, variable, source = "default", "Resolved field");
            Cow::Borrowed(directive.default_literal())
        }
    }
}

type ErasedBind = fn(&mut dyn Any, &dyn Lookup) -> Result<(), BindError>;

#[derive(Clone, Copy)]
struct Entry {
    type_name: &'static str,
    bind: ErasedBind,
}

fn bind_erased<T: Bind>(target: &mut dyn Any, source: &dyn Lookup) -> Result<(), BindError> {
    match target.downcast_mut::<T>() {
        Some(record) => walk(record, source),
        None => Err(BindError::InvalidTargetShape {
            type_name: describe(target),
        }),
    }
}

/// Type-erased entry point over a set of registered record types.
///
/// Binding through `&mut dyn Any` keeps the target checks observable: a
/// missing reference is [`BindError::InvalidTargetKind`] and a value whose
/// type was never registered is [`BindError::InvalidTargetShape`]. Neither
/// case mutates anything.
///
/// ```rust
/// use envbind::{Bind, BindError, Registry};
/// use std::any::Any;
///
/// #[derive(Debug, Default, Bind)]
/// struct Config {
///     #[conf("EXAMPLE_REGISTRY_PORT,8080")]
///     port: u16,
/// }
///
/// let mut registry = Registry::new();
/// registry.register::<Config>();
///
/// let mut config = Config::default();
/// registry.bind_any(Some(&mut config as &mut dyn Any)).unwrap();
/// assert_eq!(config.port, 8080);
///
/// let mut port = 0u16;
/// let err = registry.bind_any(Some(&mut port as &mut dyn Any)).unwrap_err();
/// assert!(matches!(err, BindError::InvalidTargetShape { .. }));
/// ```
#[derive(Default)]
pub struct Registry {
    records: HashMap<TypeId, Entry>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.type_names()).finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record type. Registering twice is a no-op.
    pub fn register<T: Bind>(&mut self) -> &mut Self {
        self.records.entry(TypeId::of::<T>()).or_insert(Entry {
            type_name: std::any::type_name::<T>(),
            bind: bind_erased::<T>,
        });
        self
    }

    /// Whether `T` has been registered.
    pub fn contains<T: Bind>(&self) -> bool {
        self.records.contains_key(&TypeId::of::<T>())
    }

    /// Names of the registered record types, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.records.values().map(|entry| entry.type_name)
    }

    /// Bind `target` against the process environment.
    pub fn bind_any(&self, target: Option<&mut dyn Any>) -> Result<(), BindError> {
        self.bind_any_with(target, &ProcessEnv)
    }

    /// Bind `target` against `source`.
    ///
    /// # Errors
    ///
    /// - `None` target: [`BindError::InvalidTargetKind`]
    /// - Target of an unregistered type: [`BindError::InvalidTargetShape`]
    /// - Any error of [`Binder::bind`]
    pub fn bind_any_with(
        &self,
        target: Option<&mut dyn Any>,
        source: &dyn Lookup,
    ) -> Result<(), BindError> {
        let Some(target) = target else {
            return Err(BindError::InvalidTargetKind {
                type_name: "None (null reference)".to_string(),
            });
        };

        let type_id = (*target).type_id();
        match self.records.get(&type_id) {
            Some(entry) => {
                debug!(record = entry.type_name, "Binding registered record");
                (entry.bind)(target, source)
            }
            None => Err(BindError::InvalidTargetShape {
                type_name: describe(target),
            }),
        }
    }
}

/// Best-effort name for an erased value; `dyn Any` carries no type name.
fn describe(value: &dyn Any) -> String {
    macro_rules! known {
        ($($ty:ty),+ $(,)?) => {
            $(
                if value.is::<$ty>() {
                    return std::any::type_name::<$ty>().to_string();
                }
            )+
        };
    }

    known!(
        String, &'static str, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64,
        u128, usize, f32, f64, Vec<String>, (),
    );
    "unregistered type".to_string()
}
