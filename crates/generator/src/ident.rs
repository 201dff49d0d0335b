//! Naming scheme for generated items.
//!
//! Every entity of the plan maps to exactly one symbol. Type names carry the
//! exec-time count (and for adapters the bind-time count first); factory
//! names carry the lifetime, so no two entities can collide.

use proc_macro2::Ident;
use quote::format_ident;

use crate::plan::Entity;
use crate::table::{ArityPair, Lifetime};

// =========================================================================
// Item names
// =========================================================================

pub(crate) fn base_ident(exec: usize) -> Ident {
    format_ident!("BaseCallback{}", exec)
}

pub(crate) fn variant_ident(exec: usize, lifetime: Lifetime) -> Ident {
    match lifetime {
        Lifetime::Reusable => format_ident!("Callback{}", exec),
        Lifetime::SingleUse => format_ident!("SingleUseCallback{}", exec),
        Lifetime::SingleUseNoValue => format_ident!("SingleUseVoidCallback{}", exec),
    }
}

pub(crate) fn adapter_ident(pair: ArityPair) -> Ident {
    format_ident!("MethodCallback{}_{}", pair.bind_count(), pair.exec_count())
}

/// Factory name for `pair`. There is no no-value factory; the single-use
/// callback converts into the no-value variant instead.
pub(crate) fn factory_ident(pair: ArityPair, lifetime: Lifetime) -> Ident {
    let (bind, exec) = (pair.bind_count(), pair.exec_count());
    match lifetime {
        Lifetime::Reusable => format_ident!("new_callback_{}_{}", bind, exec),
        Lifetime::SingleUse | Lifetime::SingleUseNoValue => {
            format_ident!("new_single_callback_{}_{}", bind, exec)
        }
    }
}

/// The symbol an entity is emitted under.
pub fn symbol(entity: &Entity) -> String {
    match *entity {
        Entity::BaseInterface(exec) => base_ident(exec),
        Entity::Variant(v) => variant_ident(v.exec_count(), v.lifetime()),
        Entity::Adapter(pair) => adapter_ident(pair),
        Entity::Factory(pair, lifetime) => factory_ident(pair, lifetime),
    }
    .to_string()
}

// =========================================================================
// Parameter names
// =========================================================================

/// Exec-time type parameters `Arg0, Arg1, ...`.
pub(crate) fn exec_types(exec: usize) -> Vec<Ident> {
    (0..exec).map(|i| format_ident!("Arg{}", i)).collect()
}

/// Exec-time value parameters `arg0, arg1, ...`.
pub(crate) fn exec_args(exec: usize) -> Vec<Ident> {
    (0..exec).map(|i| format_ident!("arg{}", i)).collect()
}

/// Bind-time type parameters `A0, A1, ...`.
pub(crate) fn bind_types(bind: usize) -> Vec<Ident> {
    (0..bind).map(|i| format_ident!("A{}", i)).collect()
}

/// Bind-time values `a0, a1, ...`, used both as constructor parameters and
/// as the adapter's field names.
pub(crate) fn bind_args(bind: usize) -> Vec<Ident> {
    (0..bind).map(|i| format_ident!("a{}", i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::plan;
    use crate::table::{ArityTable, CallbackVariant};
    use std::collections::HashSet;

    #[test]
    fn symbols_follow_the_scheme() {
        let pair = ArityPair::new(1, 2);
        assert_eq!(symbol(&Entity::BaseInterface(2)), "BaseCallback2");
        assert_eq!(
            symbol(&Entity::Variant(CallbackVariant::new(
                3,
                Lifetime::SingleUseNoValue
            ))),
            "SingleUseVoidCallback3"
        );
        assert_eq!(symbol(&Entity::Adapter(pair)), "MethodCallback1_2");
        assert_eq!(
            symbol(&Entity::Factory(pair, Lifetime::Reusable)),
            "new_callback_1_2"
        );
        assert_eq!(
            symbol(&Entity::Factory(pair, Lifetime::SingleUse)),
            "new_single_callback_1_2"
        );
    }

    #[test]
    fn symbols_are_unique_across_default_table() {
        let symbols: Vec<String> = plan(&ArityTable::default()).iter().map(symbol).collect();
        let unique: HashSet<&String> = symbols.iter().collect();
        assert_eq!(unique.len(), symbols.len());
    }

    #[test]
    fn parameter_names() {
        let names = |ids: Vec<Ident>| ids.iter().map(Ident::to_string).collect::<Vec<_>>();
        assert_eq!(names(exec_types(2)), vec!["Arg0", "Arg1"]);
        assert_eq!(names(exec_args(1)), vec!["arg0"]);
        assert_eq!(names(bind_types(3)), vec!["A0", "A1", "A2"]);
        assert!(bind_args(0).is_empty());
    }
}
