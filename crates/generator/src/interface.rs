//! Base interface and lifetime variants for one exec-time argument count.
//!
//! `BaseCallback{N}` is the single extension point (`do_run`). The three
//! variants box a `BaseCallback{N}` and expose `run`, whose receiver encodes
//! the lifetime policy:
//! - `Callback{N}::run(&mut self, ..)` may be called any number of times;
//! - `SingleUseCallback{N}::run(self, ..)` consumes the callback, dropping it
//!   after the call and before returning the result;
//! - `SingleUseVoidCallback{N}::run(self, ..)` does the same for calls that
//!   return nothing, without holding a result.

use proc_macro2::TokenStream;
use quote::quote;

use crate::ident::{base_ident, exec_args, exec_types, variant_ident};
use crate::table::{CallbackVariant, Lifetime};

pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Generate the `BaseCallback{N}` trait.
pub(crate) fn gen_base_interface(exec: usize) -> TokenStream {
    let name = base_ident(exec);
    let tys = exec_types(exec);
    let args = exec_args(exec);
    let doc = format!(
        " Callbacks taking {} exec-time argument{}.",
        exec,
        plural(exec)
    );
    let run_doc = format!(
        " Run it through [`{}`], [`{}`] or [`{}`].",
        variant_ident(exec, Lifetime::Reusable),
        variant_ident(exec, Lifetime::SingleUse),
        variant_ident(exec, Lifetime::SingleUseNoValue)
    );

    quote! {
        #[doc = #doc]
        ///
        /// Implementors provide `do_run`; the wrapper types decide how many
        /// times it may be reached.
        ///
        #[doc = #run_doc]
        pub trait #name<R, #(#tys),*> {
            /// Performs the call.
            fn do_run(&mut self, #(#args: #tys),*) -> R;
        }
    }
}

/// Generate one lifetime variant wrapping a `BaseCallback{N}`.
pub(crate) fn gen_variant(variant: CallbackVariant) -> TokenStream {
    match variant.lifetime() {
        Lifetime::Reusable => gen_reusable(variant.exec_count()),
        Lifetime::SingleUse => gen_single_use(variant.exec_count()),
        Lifetime::SingleUseNoValue => gen_single_use_no_value(variant.exec_count()),
    }
}

fn gen_reusable(exec: usize) -> TokenStream {
    let base = base_ident(exec);
    let name = variant_ident(exec, Lifetime::Reusable);
    let tys = exec_types(exec);
    let args = exec_args(exec);

    quote! {
        /// A callback that may be run any number of times.
        pub struct #name<'a, R, #(#tys),*> {
            inner: Box<dyn #base<R, #(#tys),*> + 'a>,
        }

        impl<'a, R, #(#tys),*> #name<'a, R, #(#tys),*> {
            pub fn new<T>(inner: T) -> Self
            where
                T: #base<R, #(#tys),*> + 'a,
            {
                Self {
                    inner: Box::new(inner),
                }
            }

            pub fn run(&mut self, #(#args: #tys),*) -> R {
                self.inner.do_run(#(#args),*)
            }
        }
    }
}

fn gen_single_use(exec: usize) -> TokenStream {
    let base = base_ident(exec);
    let name = variant_ident(exec, Lifetime::SingleUse);
    let tys = exec_types(exec);
    let args = exec_args(exec);

    quote! {
        /// A single use callback, dropped as soon as it has run.
        pub struct #name<'a, R, #(#tys),*> {
            inner: Box<dyn #base<R, #(#tys),*> + 'a>,
        }

        impl<'a, R, #(#tys),*> #name<'a, R, #(#tys),*> {
            pub fn new<T>(inner: T) -> Self
            where
                T: #base<R, #(#tys),*> + 'a,
            {
                Self {
                    inner: Box::new(inner),
                }
            }

            /// Runs the callback, then drops it before handing back the result.
            pub fn run(self, #(#args: #tys),*) -> R {
                let mut inner = self.inner;
                let ret = inner.do_run(#(#args),*);
                drop(inner);
                ret
            }
        }
    }
}

fn gen_single_use_no_value(exec: usize) -> TokenStream {
    let base = base_ident(exec);
    let single = variant_ident(exec, Lifetime::SingleUse);
    let name = variant_ident(exec, Lifetime::SingleUseNoValue);
    let tys = exec_types(exec);
    let args = exec_args(exec);

    quote! {
        /// A single use callback returning nothing.
        pub struct #name<'a, #(#tys),*> {
            inner: Box<dyn #base<(), #(#tys),*> + 'a>,
        }

        impl<'a, #(#tys),*> #name<'a, #(#tys),*> {
            pub fn new<T>(inner: T) -> Self
            where
                T: #base<(), #(#tys),*> + 'a,
            {
                Self {
                    inner: Box::new(inner),
                }
            }

            pub fn run(self, #(#args: #tys),*) {
                let mut inner = self.inner;
                inner.do_run(#(#args),*);
                drop(inner);
            }
        }

        impl<'a, #(#tys),*> From<#single<'a, (), #(#tys),*>> for #name<'a, #(#tys),*> {
            fn from(callback: #single<'a, (), #(#tys),*>) -> Self {
                Self {
                    inner: callback.inner,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squash(ts: TokenStream) -> String {
        ts.to_string().chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn base_interface_has_single_extension_point() {
        let ts = squash(gen_base_interface(2));
        assert!(ts.contains("pubtraitBaseCallback2<R,Arg0,Arg1>"));
        assert!(ts.contains("fndo_run(&mutself,arg0:Arg0,arg1:Arg1)->R;"));
        assert!(!ts.contains("fnrun"));
    }

    #[test]
    fn base_interface_doc_names_its_runners() {
        let text = gen_base_interface(2).to_string();
        assert!(text.contains("Run it through [`Callback2`], [`SingleUseCallback2`] or [`SingleUseVoidCallback2`]."));
    }

    #[test]
    fn reusable_borrows_single_use_consumes() {
        let reusable = squash(gen_variant(CallbackVariant::new(1, Lifetime::Reusable)));
        assert!(reusable.contains("pubfnrun(&mutself,arg0:Arg0)->R"));

        let single = squash(gen_variant(CallbackVariant::new(1, Lifetime::SingleUse)));
        assert!(single.contains("pubfnrun(self,arg0:Arg0)->R"));
        assert!(single.contains("letret=inner.do_run(arg0);drop(inner);ret"));
    }

    #[test]
    fn no_value_variant_holds_no_result() {
        let ts = squash(gen_variant(CallbackVariant::new(
            3,
            Lifetime::SingleUseNoValue,
        )));
        assert!(ts.contains("pubstructSingleUseVoidCallback3<'a,Arg0,Arg1,Arg2>"));
        assert!(ts.contains("dynBaseCallback3<(),Arg0,Arg1,Arg2>"));
        assert!(ts.contains("inner.do_run(arg0,arg1,arg2);drop(inner);"));
        assert!(!ts.contains("letret"));
        assert!(ts.contains("From<SingleUseCallback3<'a,(),Arg0,Arg1,Arg2>>"));
    }
}
