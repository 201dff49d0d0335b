//! Factory functions: one single-use and one reusable constructor per adapter.

use proc_macro2::TokenStream;
use quote::quote;

use crate::adapter::{arg_generics, method_type};
use crate::ident::{adapter_ident, bind_args, bind_types, exec_types, factory_ident, variant_ident};
use crate::table::{ArityPair, Lifetime};

/// Generate the factory creating a `lifetime` callback around the adapter
/// for `pair`. The no-value lifetime shares the single-use factory.
pub(crate) fn gen_factory(pair: ArityPair, lifetime: Lifetime) -> TokenStream {
    let lifetime = match lifetime {
        Lifetime::Reusable => Lifetime::Reusable,
        Lifetime::SingleUse | Lifetime::SingleUseNoValue => Lifetime::SingleUse,
    };
    let (bind, exec) = (pair.bind_count(), pair.exec_count());
    let name = factory_ident(pair, lifetime);
    let adapter = adapter_ident(pair);
    let variant = variant_ident(exec, lifetime);
    let method_ty = method_type(pair);
    let generics = arg_generics(pair);

    let bind_tys = bind_types(bind);
    let bind_vals = bind_args(bind);
    let exec_tys = exec_types(exec);

    let doc = match lifetime {
        Lifetime::Reusable => format!(
            " Creates a new `{variant}` calling `method` on `object` with {bind} bound argument(s)."
        ),
        _ => format!(
            " Creates a new `{variant}` calling `method` on `object` with {bind} bound argument(s). \
             It is dropped after its one run."
        ),
    };

    quote! {
        #[doc = #doc]
        pub fn #name<'a, C, R, #generics>(
            object: &'a C,
            method: #method_ty,
            #(#bind_vals: #bind_tys,)*
        ) -> #variant<'a, R, #(#exec_tys),*>
        where
            C: 'a,
            R: 'a,
            #(#bind_tys: Clone + 'a,)*
            #(#exec_tys: 'a,)*
        {
            #variant::new(#adapter::new(object, method #(, #bind_vals)*))
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
    fn reusable_factory_returns_reusable_variant() {
        let ts = squash(gen_factory(ArityPair::new(1, 2), Lifetime::Reusable));
        assert!(ts.contains("pubfnnew_callback_1_2<'a,C,R,A0,Arg0,Arg1>"));
        assert!(ts.contains("->Callback2<'a,R,Arg0,Arg1>"));
        assert!(ts.contains("Callback2::new(MethodCallback1_2::new(object,method,a0))"));
    }

    #[test]
    fn single_use_factory_returns_single_use_variant() {
        let ts = squash(gen_factory(ArityPair::new(0, 1), Lifetime::SingleUse));
        assert!(ts.contains("pubfnnew_single_callback_0_1<'a,C,R,Arg0>"));
        assert!(ts.contains("->SingleUseCallback1<'a,R,Arg0>"));
        assert!(ts.contains("SingleUseCallback1::new(MethodCallback0_1::new(object,method))"));
    }

    #[test]
    fn no_value_lifetime_maps_to_single_use_factory() {
        let pair = ArityPair::new(1, 1);
        assert_eq!(
            gen_factory(pair, Lifetime::SingleUseNoValue).to_string(),
            gen_factory(pair, Lifetime::SingleUse).to_string()
        );
    }
}
