//! Field-kind dispatch for `#[derive(Bind)]`
//!
//! The derive sees field types only as syntax, so it cannot tell a record
//! from a scalar. Generated code calls `bind_field`/`bind_untagged` on
//! `&&&Dispatch::<V>::new()` and method resolution picks the first trait
//! whose bounds hold for `V`:
//!
//! | Call | `V: Bind` | `V: FromLiteral` | otherwise |
//! |---|---|---|---|
//! | `bind_field` | record, directive ignored | value | compile error |
//! | `bind_untagged` | record | skipped | skipped |
//!
//! Records sit one reference deeper than the fallbacks, so they win.

use crate::coerce::FromLiteral;
use crate::field::Fields;
use crate::Bind;
use std::marker::PhantomData;

/// Carrier for a field type; never constructed outside generated code.
pub struct Dispatch<V: ?Sized>(PhantomData<fn(&mut V)>);

impl<V: ?Sized> Dispatch<V> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

pub trait RecordField {
    type Value;

    fn bind_field<S: 'static>(
        &self,
        fields: Fields<S>,
        name: &'static str,
        directive: &'static str,
        access: fn(&mut S) -> &mut Self::Value,
    ) -> Fields<S>;

    fn bind_untagged<S: 'static>(
        &self,
        fields: Fields<S>,
        name: &'static str,
        access: fn(&mut S) -> &mut Self::Value,
    ) -> Fields<S>;
}

impl<V: Bind> RecordField for &&Dispatch<V> {
    type Value = V;

    fn bind_field<S: 'static>(
        &self,
        fields: Fields<S>,
        name: &'static str,
        directive: &'static str,
        access: fn(&mut S) -> &mut V,
    ) -> Fields<S> {
        fields.record_with_directive(name, directive, access)
    }

    fn bind_untagged<S: 'static>(
        &self,
        fields: Fields<S>,
        name: &'static str,
        access: fn(&mut S) -> &mut V,
    ) -> Fields<S> {
        fields.record(name, access)
    }
}

pub trait ValueField {
    type Value;

    fn bind_field<S: 'static>(
        &self,
        fields: Fields<S>,
        name: &'static str,
        directive: &'static str,
        access: fn(&mut S) -> &mut Self::Value,
    ) -> Fields<S>;
}

impl<V: FromLiteral + 'static> ValueField for &Dispatch<V> {
    type Value = V;

    fn bind_field<S: 'static>(
        &self,
        fields: Fields<S>,
        name: &'static str,
        directive: &'static str,
        access: fn(&mut S) -> &mut V,
    ) -> Fields<S> {
        fields.value(name, directive, access)
    }
}

pub trait SkippedField {
    type Value: ?Sized;

    fn bind_untagged<S: 'static>(
        &self,
        fields: Fields<S>,
        name: &'static str,
        access: fn(&mut S) -> &mut Self::Value,
    ) -> Fields<S>;
}

impl<V: ?Sized> SkippedField for &Dispatch<V> {
    type Value = V;

    fn bind_untagged<S: 'static>(
        &self,
        fields: Fields<S>,
        _name: &'static str,
        _access: fn(&mut S) -> &mut V,
    ) -> Fields<S> {
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::OnceLock;

    #[derive(Debug, Default)]
    struct Leaf {
        value: String,
    }

    impl Bind for Leaf {
        fn fields() -> &'static Fields<Self> {
            static FIELDS: OnceLock<Fields<Leaf>> = OnceLock::new();
            FIELDS.get_or_init(|| Fields::<Leaf>::new().value("value", "LEAF,leaf", |l| &mut l.value))
        }
    }

    #[derive(Debug, Default)]
    struct Opaque {
        value: String,
    }

    #[derive(Debug, Default)]
    struct Holder {
        port: u16,
        leaf: Leaf,
        tagged_leaf: Leaf,
        opaque: Opaque,
        count: i32,
    }

    #[allow(clippy::needless_borrow)]
    fn table() -> Fields<Holder> {
        let fields = Fields::<Holder>::new();
        let fields = (&&&Dispatch::<u16>::new()).bind_field(fields, "port", "PORT,80", |h| &mut h.port);
        let fields = (&&&Dispatch::<Leaf>::new()).bind_untagged(fields, "leaf", |h| &mut h.leaf);
        let fields = (&&&Dispatch::<Leaf>::new()).bind_field(
            fields,
            "tagged_leaf",
            "IGNORED,x",
            |h| &mut h.tagged_leaf,
        );
        let fields = (&&&Dispatch::<Opaque>::new()).bind_untagged(fields, "opaque", |h| &mut h.opaque);
        (&&&Dispatch::<i32>::new()).bind_untagged(fields, "count", |h| &mut h.count)
    }

    #[test]
    fn test_dispatch_picks_entry_kind() {
        let fields = table();
        let entries: Vec<_> = fields.iter().map(|f| format!("{f:?}")).collect();

        assert_eq!(entries.len(), 3);
        assert!(entries[0].contains("\"port\"") && entries[0].contains("\"value\""));
        assert!(entries[1].contains("\"leaf\"") && entries[1].contains("\"record\""));
        assert!(entries[2].contains("\"tagged_leaf\"") && entries[2].contains("\"record\""));
    }

    #[test]
    fn test_dispatch_binds_through_table() {
        let fields = table();
        let source: HashMap<String, String> = [("IGNORED", "x"), ("LEAF", "set")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let mut holder = Holder {
            opaque: Opaque {
                value: "kept".to_string(),
            },
            count: 5,
            ..Holder::default()
        };
        for field in &fields {
            field.apply(&mut holder, &source).unwrap();
        }

        assert_eq!(holder.port, 80);
        assert_eq!(holder.leaf.value, "set");
        assert_eq!(holder.tagged_leaf.value, "set");
        assert_eq!(holder.opaque.value, "kept");
        assert_eq!(holder.count, 5);
    }
}
