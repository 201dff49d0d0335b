//! Bound-method adapters.
//!
//! `MethodCallback{B}_{N}` borrows a target object, holds a plain function
//! pointer to one of its `&self` methods and owns `B` bound values. Running
//! it calls the method with the bound values first, in construction order,
//! followed by the `N` exec-time values, in call order.
//!
//! The target is shared, so a method that changes its target keeps that
//! state behind a `Cell`, `RefCell` or lock.

use proc_macro2::TokenStream;
use quote::quote;

use crate::ident::{adapter_ident, base_ident, bind_args, bind_types, exec_args, exec_types};
use crate::interface::plural;
use crate::table::ArityPair;

/// The `fn(&C, A0.., Arg0..) -> R` type of the bound method.
pub(crate) fn method_type(pair: ArityPair) -> TokenStream {
    let bind_tys = bind_types(pair.bind_count());
    let exec_tys = exec_types(pair.exec_count());
    quote! { fn(&C, #(#bind_tys,)* #(#exec_tys),*) -> R }
}

/// Type parameters shared by the adapter and its factories, after `'a, C, R`.
pub(crate) fn arg_generics(pair: ArityPair) -> TokenStream {
    let bind_tys = bind_types(pair.bind_count());
    let exec_tys = exec_types(pair.exec_count());
    quote! { #(#bind_tys,)* #(#exec_tys),* }
}

/// Generate the adapter struct, its constructor and its `do_run`.
pub(crate) fn gen_adapter(pair: ArityPair) -> TokenStream {
    let (bind, exec) = (pair.bind_count(), pair.exec_count());
    let name = adapter_ident(pair);
    let base = base_ident(exec);
    let method_ty = method_type(pair);
    let generics = arg_generics(pair);

    let bind_tys = bind_types(bind);
    let bind_vals = bind_args(bind);
    let exec_tys = exec_types(exec);
    let exec_vals = exec_args(exec);

    // Bound values are handed out by clone so the adapter stays runnable.
    let clone_bounds = if bind == 0 {
        quote! {}
    } else {
        quote! { where #(#bind_tys: Clone),* }
    };

    let doc = format!(
        " A method callback with {} create-time argument{} and {} exec-time argument{}.",
        bind,
        plural(bind),
        exec,
        plural(exec)
    );

    quote! {
        #[doc = #doc]
        pub struct #name<'a, C, R, #generics> {
            object: &'a C,
            method: #method_ty,
            #(#bind_vals: #bind_tys,)*
        }

        impl<'a, C, R, #generics> #name<'a, C, R, #generics> {
            pub fn new(object: &'a C, method: #method_ty #(, #bind_vals: #bind_tys)*) -> Self {
                Self {
                    object,
                    method,
                    #(#bind_vals,)*
                }
            }
        }

        impl<'a, C, R, #generics> #base<R, #(#exec_tys),*> for #name<'a, C, R, #generics>
        #clone_bounds
        {
            fn do_run(&mut self, #(#exec_vals: #exec_tys),*) -> R {
                (self.method)(self.object, #(self.#bind_vals.clone(),)* #(#exec_vals),*)
            }
        }
    }
}
