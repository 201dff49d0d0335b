//! Emission plan: the ordered list of entities a generation run produces.
//!
//! Rendering walks this list front to back, so the order here is the order
//! of the output text.

use std::fmt;

use crate::table::{ArityPair, ArityTable, CallbackVariant, Lifetime};

/// One emitted item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entity {
    /// The `BaseCallback{N}` trait.
    BaseInterface(usize),
    /// One of the lifetime wrappers around a `BaseCallback{N}`.
    Variant(CallbackVariant),
    /// A `MethodCallback{B}_{N}` adapter.
    Adapter(ArityPair),
    /// A creation function for an adapter, reusable or single-use.
    Factory(ArityPair, Lifetime),
}

impl Entity {
    pub fn exec_count(&self) -> usize {
        match self {
            Entity::BaseInterface(exec) => *exec,
            Entity::Variant(variant) => variant.exec_count(),
            Entity::Adapter(pair) | Entity::Factory(pair, _) => pair.exec_count(),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::BaseInterface(exec) => write!(f, "base interface (exec={exec})"),
            Entity::Variant(v) => write!(f, "{} variant (exec={})", v.lifetime(), v.exec_count()),
            Entity::Adapter(pair) => write!(f, "adapter {pair}"),
            Entity::Factory(pair, lifetime) => write!(f, "{lifetime} factory {pair}"),
        }
    }
}

/// Build the emission order for `table`.
///
/// Per exec-time count, ascending: the base interface, the reusable,
/// single-use and no-value variants, then per bind-time count, ascending,
/// the adapter followed by its two factories.
pub fn plan(table: &ArityTable) -> Vec<Entity> {
    let mut entities = Vec::new();
    for exec in table.exec_counts() {
        entities.push(Entity::BaseInterface(exec));
        entities.extend(
            Lifetime::ALL
                .iter()
                .map(|&lifetime| Entity::Variant(CallbackVariant::new(exec, lifetime))),
        );
        for bind in table.bind_counts(exec) {
            let pair = ArityPair::new(bind, exec);
            entities.push(Entity::Adapter(pair));
            entities.extend(
                Lifetime::FACTORIES
                    .iter()
                    .map(|&lifetime| Entity::Factory(pair, lifetime)),
            );
        }
    }
    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(exec: usize, lifetime: Lifetime) -> Entity {
        Entity::Variant(CallbackVariant::new(exec, lifetime))
    }

    #[test]
    fn single_exec_count_plan_is_exact() {
        let table = ArityTable::new([(1, vec![0, 1])]).expect("valid table");
        let p0 = ArityPair::new(0, 1);
        let p1 = ArityPair::new(1, 1);
        assert_eq!(
            plan(&table),
            vec![
                Entity::BaseInterface(1),
                variant(1, Lifetime::Reusable),
                variant(1, Lifetime::SingleUse),
                variant(1, Lifetime::SingleUseNoValue),
                Entity::Adapter(p0),
                Entity::Factory(p0, Lifetime::SingleUse),
                Entity::Factory(p0, Lifetime::Reusable),
                Entity::Adapter(p1),
                Entity::Factory(p1, Lifetime::SingleUse),
                Entity::Factory(p1, Lifetime::Reusable),
            ]
        );
    }

    #[test]
    fn exec_counts_never_interleave() {
        let entities = plan(&ArityTable::default());
        let execs: Vec<usize> = entities.iter().map(Entity::exec_count).collect();
        assert!(execs.windows(2).all(|w| w[0] <= w[1]));
        // 4 per exec count, 3 per adapter.
        assert_eq!(entities.len(), 4 * 4 + 3 * 10);
    }

    #[test]
    fn empty_bind_set_still_plans_variants() {
        let table = ArityTable::new([(2, Vec::<usize>::new())]).expect("valid table");
        let entities = plan(&table);
        assert_eq!(entities.len(), 4);
        assert!(!entities
            .iter()
            .any(|e| matches!(e, Entity::Adapter(_) | Entity::Factory(..))));
    }
}
