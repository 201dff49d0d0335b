//! Callback Generator Library
//! Emits Rust source for a family of closure-like callback types over a
//! target object's method, parameterized by how many arguments are bound at
//! creation time and how many are supplied at run time.
//!
//! The set of generated arities comes from an [`ArityTable`] handed to
//! [`Generator::new`]; output is a deterministic function of that table.

// =========================================================================
// Module Declarations
// =========================================================================
mod adapter;
mod error;
mod factory;
mod ident;
mod interface;
mod output;
mod plan;
mod scaffold;
mod table;


// =========================================================================
// Imports
// =========================================================================
use proc_macro2::TokenStream;
use quote::quote;
use tracing::{debug, info, trace, warn};

use adapter::gen_adapter;
use factory::gen_factory;
use interface::{gen_base_interface, gen_variant};

pub use error::{GeneratorError, Result, TableError};
pub use ident::symbol;
pub use output::{output_targets, write_targets, OutputTarget};
pub use plan::Entity;
pub use scaffold::{render_cargo_toml, write_output, write_project, NAMESPACE};
pub use table::{
    ArityPair, ArityTable, CallbackVariant, Lifetime, MAX_BIND_COUNT, MAX_EXEC_COUNT,
};

pub struct Generator {
    /// Which (bind-time, exec-time) arities to emit.
    table: ArityTable,
}

impl Generator {
    pub fn new(table: ArityTable) -> Self {
        Generator { table }
    }

    /// Entities in emission order.
    pub fn plan(&self) -> Vec<Entity> {
        plan::plan(&self.table)
    }

    /// Symbols in emission order.
    pub fn symbols(&self) -> Vec<String> {
        self.plan().iter().map(symbol).collect()
    }

    /// Generate the complete source text: header, namespace module holding
    /// every planned item, footer.
    pub fn render(&self) -> Result<String> {
        let entities = self.plan();
        info!(
            "Generating {} callback items for arity table '{}'",
            entities.len(),
            self.table
        );
        if self.table.is_empty() {
            warn!("Arity table is empty, only the namespace module will be emitted");
        }

        for exec in self.table.exec_counts() {
            debug!(
                "exec-time count {}: bind-time counts {:?}",
                exec,
                self.table.bind_counts(exec).collect::<Vec<_>>()
            );
        }

        let items: Vec<TokenStream> = entities
            .iter()
            .map(|entity| {
                trace!("emit {} as {}", entity, symbol(entity));
                gen_entity(entity)
            })
            .collect();

        scaffold::render_file(quote! { #(#items)* })
    }
}

/// Dispatch one entity to its emitter.
fn gen_entity(entity: &Entity) -> TokenStream {
    match *entity {
        Entity::BaseInterface(exec) => gen_base_interface(exec),
        Entity::Variant(variant) => gen_variant(variant),
        Entity::Adapter(pair) => gen_adapter(pair),
        Entity::Factory(pair, lifetime) => gen_factory(pair, lifetime),
    }
}
