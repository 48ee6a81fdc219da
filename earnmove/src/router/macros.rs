/// Generate a router async method that walks the registered connectors and calls a
/// single-provider method on the first ones advertising the capability.
///
/// Notes on `not_found` label:
/// - Pass a noun only (e.g., "snapshot", "price history").
/// - The orchestrator formats the final error as "{label} for {SYMBOL}".
/// - `capability` must be a string literal.
macro_rules! earnmove_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $sym_ident:ident : $sym_ty:ty $(, $arg_ident:ident : $arg_ty:ty )* ) -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:literal,
        not_found: $not_found:expr,
        call: $call_name:ident( $call_first:ident $(, $call_rest:ident )* )
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                target = "earnmove::router",
                skip(self, $sym_ident $(, $arg_ident)*),
                fields(symbol = %$sym_ident),
            )
        )]
        ///
        /// # Errors
        /// Returns an error if no connector succeeds or none support the capability.
        pub async fn $name(
            &self,
            $sym_ident: $sym_ty,
            $( $arg_ident: $arg_ty ),*
        ) -> Result<$ret, earnmove_core::EarnmoveError> {
            self.fetch_single(
                $sym_ident,
                $capability,
                $not_found,
                move |c, $call_first| {
                    c.$accessor()?;
                    $( let $arg_ident = $arg_ident.clone(); )*
                    Some(async move {
                        match c.$accessor() {
                            Some(p) => p.$call_name(&$call_first $(, $call_rest )*).await,
                            None => Err(earnmove_core::EarnmoveError::connector(
                                c.name(),
                                concat!("missing ", $capability, " capability during call"),
                            )),
                        }
                    })
                },
            )
            .await
        }
    };
}

pub(crate) use earnmove_router_method;
