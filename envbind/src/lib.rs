//! Populate struct fields in place from environment variables
//!
//! `envbind` fills the fields of an existing struct from environment
//! variables, falling back to a literal written next to each field. Every
//! field carries a **directive** of the form `"VARIABLE[,default]"`:
//!
//! - `"DATABASE_URL,localhost:5432"`: read `DATABASE_URL`, else `localhost:5432`
//! - `"TIMEOUT"`: read `TIMEOUT`, else the empty literal
//!
//! A variable that is unset **or set to the empty string** yields the default.
//! Only the first comma separates the variable from the default, so
//! `"HOSTS,a,b"` defaults to `a,b`.
//!
//! # Features
//!
//! - **In place**: fields without a directive keep their current value
//! - **Declarative**: generate the field table with `#[derive(Bind)]`
//! - **Explicit tables**: or register fields by hand with [`Fields`]
//! - **Nested records**: fields whose type is itself `Bind` are bound recursively
//! - **Strict coercion**: no silent truncation, no `1` for `true`
//!
//! # Value Coercion
//!
//! | Field type | Rule |
//! |---|---|
//! | `String` | verbatim |
//! | `i8`..`i128`, `u8`..`u128`, `isize`, `usize` | base-10 with an optional `-`; a `+`, whitespace, stray characters and overflow are errors |
//! | `bool` | exactly `true` or `false` |
//! | `f32`, `f64` | decimal or exponential form |
//! | `Vec<String>` | split on `;` (`"a;b"` becomes `["a", "b"]`) |
//!
//! Any other type with a directive fails with
//! [`BindError::UnsupportedFieldType`].
//!
//! # Example
//!
//! ```rust
//! use envbind::Bind;
//!
//! #[derive(Debug, Default, Bind)]
//! struct Config {
//!     #[conf("EXAMPLE_DATABASE_URL,localhost:5432")]
//!     pub database_url: String,
//!
//!     #[conf("EXAMPLE_DEBUG,false")]
//!     pub debug: bool,
//!
//!     #[conf("EXAMPLE_ALLOWED_IPS,127.0.0.1;192.168.1.1")]
//!     pub allowed_ips: Vec<String>,
//!
//!     // No directive: left as is
//!     pub build_id: u32,
//! }
//!
//! # fn main() -> Result<(), envbind::BindError> {
//! #     std::env::set_var("EXAMPLE_DEBUG", "true");
//! let mut config = Config::default();
//! envbind::bind(&mut config)?;
//! #     assert_eq!(config.database_url, "localhost:5432");
//! #     assert!(config.debug);
//! #     assert_eq!(config.allowed_ips, vec!["127.0.0.1", "192.168.1.1"]);
//! #     assert_eq!(config.build_id, 0);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[conf("VARIABLE,default")]`
//!
//! Bind the field to `VARIABLE`, falling back to `default`.
//!
//! ## Nested records
//!
//! A field whose type is itself a `Bind` record is bound through its own
//! fields, with the same rules, at any depth. This needs no attribute. A
//! directive on such a field is accepted and ignored. `#[conf(nested)]`
//! states the intent explicitly and fails to compile when the type is not
//! `Bind`.
//!
//! A struct field whose type does not implement `Bind` is never recursed
//! into; without a directive it is left untouched like any other field.
//! Hand-written tables list records with [`Fields::record`], and a record
//! missing from the table is not bound.
//!
//! ```rust
//! use envbind::Bind;
//!
//! #[derive(Debug, Default, Bind)]
//! struct Database {
//!     #[conf("EXAMPLE_NESTED_DB_HOST,localhost")]
//!     pub host: String,
//! }
//!
//! #[derive(Debug, Default, Bind)]
//! struct Replica {
//!     #[conf("EXAMPLE_NESTED_REPLICA_HOST,replica")]
//!     pub host: String,
//! }
//!
//! #[derive(Debug, Default, Bind)]
//! struct Config {
//!     #[conf(nested)]
//!     pub database: Database,
//!
//!     // Bound through its own fields; the directive has no effect
//!     #[conf("EXAMPLE_NESTED_REPLICA,unused")]
//!     pub replica: Replica,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! assert_eq!(config.database.host, "localhost");
//! assert_eq!(config.replica.host, "replica");
//! # Ok(())
//! # }
//! ```

mod binder;
mod coerce;
mod directive;
mod dispatch;
mod error;
mod field;
mod source;

pub use binder::{Binder, Registry};
pub use coerce::{FieldKind, FromLiteral};
pub use directive::Directive;
pub use envbind_derive::Bind;
pub use error::BindError;
pub use field::{Field, Fields};
pub use source::{Lookup, ProcessEnv};

#[doc(hidden)]
pub mod __private {
    pub use crate::dispatch::{Dispatch, RecordField, SkippedField, ValueField};
}

/// A record whose fields can be bound from environment variables.
///
/// Usually derived with `#[derive(Bind)]`; see [`Fields`] for a hand-written
/// table.
pub trait Bind: Sized + 'static {
    /// Field table of this record, built once and shared.
    fn fields() -> &'static Fields<Self>;

    /// Build a record from `Default` and bind it against the process
    /// environment.
    ///
    /// # Errors
    ///
    /// - Environment variable values cannot be coerced into field types
    /// - A field with a directive has an unsupported type
    fn from_env() -> anyhow::Result<Self>
    where
        Self: Default,
    {
        let mut record = Self::default();
        bind(&mut record)?;
        Ok(record)
    }
}

/// Populate `target` in place from the process environment.
///
/// Shorthand for `Binder::new().bind(target)`.
///
/// # Errors
///
/// See [`Binder::bind`]. The first error aborts the walk; fields assigned
/// before it keep their new values.
pub fn bind<T: Bind>(target: &mut T) -> Result<(), BindError> {
    Binder::new().bind(target)
}
