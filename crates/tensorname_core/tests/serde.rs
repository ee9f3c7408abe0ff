#![cfg(feature = "serde")]

use tensorname_core::{
    backend::Backend,
    dtype::ScalarType,
    options::{TensorOptions, TypeKey},
};

#[test]
fn type_key_serializes_by_name() -> Result<(), serde_json::Error> {
    let key = TypeKey::new(Backend::SparseCUDA, ScalarType::ComplexDouble);
    let json = serde_json::to_string(&key)?;

    assert_eq!(json, r#"{"backend":"SparseCUDA","scalar_type":"ComplexDouble"}"#);
    assert_eq!(serde_json::from_str::<TypeKey>(&json)?, key);
    Ok(())
}

#[test]
fn options_deserialize() -> Result<(), serde_json::Error> {
    let json = r#"{"backend":"CUDA","scalar_type":"Half","requires_grad":true}"#;
    let options: TensorOptions = serde_json::from_str(json)?;

    assert_eq!(options.backend(), Backend::CUDA);
    assert_eq!(options.scalar_type(), ScalarType::Half);
    assert!(options.requires_grad());
    Ok(())
}
