#![allow(dead_code)]

use std::sync::Arc;
use tensorname_core::{backend::DispatchKey, default::DefaultTypeConfig, dtype::ScalarType, error::Result};
use tensorname_types::TypeNameResolver;

/// A resolver with its own default configuration, isolated from the global one.
pub fn setup_resolver() -> TypeNameResolver {
    TypeNameResolver::new(Arc::new(DefaultTypeConfig::default()))
}

pub fn setup_resolver_with_default(dispatch_key: DispatchKey, scalar_type: ScalarType) -> Result<TypeNameResolver> {
    let config = DefaultTypeConfig::new(dispatch_key, scalar_type)?;
    Ok(TypeNameResolver::new(Arc::new(config)))
}

#[macro_export]
macro_rules! test_scalar_types {
    ($test_fn:ident, [$($variant:ident),*]) => {
        $(
            paste::paste! {
                #[test]
                fn [<$variant:lower>]() -> Result<()> {
                    $test_fn(ScalarType::$variant)
                }
            }
        )*
    };
}
