//! Explicit per-record field tables
//!
//! A [`Fields`] table lists the fields of one record type in declaration
//! order, each with its directive and a setter. `#[derive(Bind)]` generates
//! the table; it can also be written by hand:
//!
//! ```rust
//! use envbind::{Bind, Fields};
//! use std::sync::OnceLock;
//!
//! #[derive(Debug, Default)]
//! struct Config {
//!     port: u16,
//!     hosts: Vec<String>,
//! }
//!
//! impl Bind for Config {
//!     fn fields() -> &'static Fields<Self> {
//!         static FIELDS: OnceLock<Fields<Config>> = OnceLock::new();
//!         FIELDS.get_or_init(|| {
//!             Fields::<Config>::new()
//!                 .value("port", "EXAMPLE_FIELDS_PORT,8080", |c| &mut c.port)
//!                 .value("hosts", "EXAMPLE_FIELDS_HOSTS,a;b", |c| &mut c.hosts)
//!         })
//!     }
//! }
//!
//! # fn main() -> Result<(), envbind::BindError> {
//! let mut config = Config::default();
//! envbind::bind(&mut config)?;
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.hosts, vec!["a", "b"]);
//! # Ok(())
//! # }
//! ```

use crate::binder::{resolve, walk};
use crate::coerce::FromLiteral;
use crate::directive::Directive;
use crate::error::BindError;
use crate::source::Lookup;
use crate::Bind;
use tracing::trace;

type Assign<T> = Box<dyn Fn(&mut T, &str) -> Result<(), BindError> + Send + Sync>;
type Recurse<T> = Box<dyn Fn(&mut T, &dyn Lookup) -> Result<(), BindError> + Send + Sync>;

enum Slot<T> {
    Value { directive: String, assign: Assign<T> },
    Record { directive: Option<String>, recurse: Recurse<T> },
    Unsupported { directive: String, kind: &'static str },
}

/// One entry of a [`Fields`] table.
pub struct Field<T> {
    name: &'static str,
    slot: Slot<T>,
}

impl<T> Field<T> {
    /// Name of the field in its record.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw directive, if the field carries one.
    ///
    /// A nested record only has one when it was declared with a directive,
    /// which binding ignores.
    pub fn directive(&self) -> Option<&str> {
        match &self.slot {
            Slot::Value { directive, .. } | Slot::Unsupported { directive, .. } => {
                Some(directive.as_str())
            }
            Slot::Record { directive, .. } => directive.as_deref(),
        }
    }

    /// Resolve, coerce and assign this field on `record`.
    pub(crate) fn apply(&self, record: &mut T, source: &dyn Lookup) -> Result<(), BindError> {
        match &self.slot {
            Slot::Record { directive, recurse } => {
                if directive.as_deref().is_some_and(|d| !d.is_empty()) {
                    trace!(field = self.name, "Ignoring directive on nested record");
                }
                trace!(field = self.name, "Entering nested record");
                recurse(record, source)
            }
            Slot::Value { directive, assign } => {
                let Some(directive) = Directive::parse(directive) else {
                    trace!(field = self.name, "Skipping field without directive");
                    return Ok(());
                };
                let literal = resolve(self.name, &directive, source);
                assign(record, &*literal)
            }
            Slot::Unsupported { directive, kind } => {
                if Directive::parse(directive).is_none() {
                    trace!(field = self.name, "Skipping field without directive");
                    return Ok(());
                }
                Err(BindError::unsupported(self.name, *kind))
            }
        }
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.slot {
            Slot::Value { .. } => "value",
            Slot::Record { .. } => "record",
            Slot::Unsupported { kind, .. } => *kind,
        };
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("directive", &self.directive())
            .field("kind", &kind)
            .finish()
    }
}

/// Field table of a record type, in declaration order.
pub struct Fields<T> {
    entries: Vec<Field<T>>,
}

impl<T: 'static> Fields<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a field coerced from its resolved literal.
    ///
    /// `access` returns the field to overwrite. An empty `directive` leaves
    /// the field untouched at bind time.
    pub fn value<V>(
        mut self,
        name: &'static str,
        directive: impl Into<String>,
        access: fn(&mut T) -> &mut V,
    ) -> Self
    where
        V: FromLiteral + 'static,
    {
        let assign = move |record: &mut T, literal: &str| -> Result<(), BindError> {
            let value = V::from_literal(literal)
                .map_err(|message| BindError::coercion::<V>(name, literal, V::KIND, message))?;
            *access(record) = value;
            Ok(())
        };
        self.entries.push(Field {
            name,
            slot: Slot::Value {
                directive: directive.into(),
                assign: Box::new(assign),
            },
        });
        self
    }

    /// Add a nested record, bound with the same rules as its parent.
    pub fn record<R>(self, name: &'static str, access: fn(&mut T) -> &mut R) -> Self
    where
        R: Bind,
    {
        self.push_record(name, None, access)
    }

    /// Add a nested record that was declared with a directive.
    ///
    /// The directive is kept for [`Field::directive`] but never resolved: the
    /// record is bound through its own fields, exactly as with
    /// [`Fields::record`].
    pub fn record_with_directive<R>(
        self,
        name: &'static str,
        directive: impl Into<String>,
        access: fn(&mut T) -> &mut R,
    ) -> Self
    where
        R: Bind,
    {
        self.push_record(name, Some(directive.into()), access)
    }

    fn push_record<R>(
        mut self,
        name: &'static str,
        directive: Option<String>,
        access: fn(&mut T) -> &mut R,
    ) -> Self
    where
        R: Bind,
    {
        let recurse = move |record: &mut T, source: &dyn Lookup| walk(access(record), source);
        self.entries.push(Field {
            name,
            slot: Slot::Record {
                directive,
                recurse: Box::new(recurse),
            },
        });
        self
    }

    /// Add a field whose type has no coercion rule.
    ///
    /// Binding fails with [`BindError::UnsupportedFieldType`] when the
    /// directive is non-empty.
    pub fn unsupported(
        mut self,
        name: &'static str,
        directive: impl Into<String>,
        kind: &'static str,
    ) -> Self {
        self.entries.push(Field {
            name,
            slot: Slot::Unsupported {
                directive: directive.into(),
                kind,
            },
        });
        self
    }
}

impl<T> Fields<T> {
    /// Iterate over the entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: 'static> Default for Fields<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Fields<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Fields<T> {
    type Item = &'a Field<T>;
    type IntoIter = std::slice::Iter<'a, Field<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
