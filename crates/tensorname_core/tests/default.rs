use std::sync::Arc;
use tensorname_core::{
    backend::{Backend, DispatchKey},
    default::DefaultTypeConfig,
    dtype::ScalarType,
    error::{Error, Result},
};

#[test]
fn starts_as_cpu_float() -> Result<()> {
    let config = DefaultTypeConfig::default();

    assert_eq!(config.default_dispatch_key()?, DispatchKey::CPU);
    assert_eq!(config.default_scalar_type()?, ScalarType::Float);
    Ok(())
}

#[test]
fn setters_update_defaults() -> Result<()> {
    let config = DefaultTypeConfig::default();

    config.set_default_dispatch_key(DispatchKey::CUDA)?;
    config.set_default_scalar_type(ScalarType::Double)?;
    assert_eq!(config.default_dispatch_key()?, DispatchKey::CUDA);
    assert_eq!(config.default_scalar_type()?, ScalarType::Double);

    config.set_default_type(Backend::CPU, ScalarType::BFloat16)?;
    assert_eq!(config.default_type()?, (DispatchKey::CPU, ScalarType::BFloat16));
    Ok(())
}

#[test]
fn rejects_backends_without_legacy_names() -> Result<()> {
    let config = DefaultTypeConfig::default();

    let rejected = [
        Backend::XPU,
        Backend::HIP,
        Backend::QuantizedCPU,
        Backend::MkldnnCPU,
        Backend::Meta,
        Backend::XLA,
    ];
    for backend in rejected {
        assert!(matches!(
            config.set_default_type(backend, ScalarType::Float),
            Err(Error::InvalidDefaultType(_))
        ));
        assert!(matches!(
            config.set_default_dispatch_key(backend.dispatch_key()),
            Err(Error::InvalidDefaultType(_))
        ));
        assert!(DefaultTypeConfig::new(backend.dispatch_key(), ScalarType::Float).is_err());
    }
    assert!(matches!(
        config.set_default_dispatch_key(DispatchKey::AutogradXPU),
        Err(Error::InvalidDefaultType(_))
    ));
    assert_eq!(config.default_type()?, (DispatchKey::CPU, ScalarType::Float));
    Ok(())
}

#[test]
fn rejects_non_floating_scalar_types() -> Result<()> {
    let config = DefaultTypeConfig::default();

    let rejected = [ScalarType::Long, ScalarType::Bool, ScalarType::ComplexFloat, ScalarType::QInt8];
    for scalar_type in rejected {
        assert!(matches!(
            config.set_default_scalar_type(scalar_type),
            Err(Error::InvalidDefaultType(_))
        ));
    }
    assert_eq!(config.default_scalar_type()?, ScalarType::Float);
    Ok(())
}

#[test]
fn rejects_sparse_and_undefined_backends() -> Result<()> {
    let config = DefaultTypeConfig::default();

    assert!(matches!(
        config.set_default_dispatch_key(DispatchKey::SparseCPU),
        Err(Error::InvalidDefaultType(_))
    ));
    assert!(matches!(
        config.set_default_type(Backend::Undefined, ScalarType::Float),
        Err(Error::InvalidDefaultType(_))
    ));
    assert_eq!(
        config.set_default_dispatch_key(DispatchKey::Autocast),
        Err(Error::UnrecognizedDispatchKey(DispatchKey::Autocast))
    );
    assert_eq!(config.default_dispatch_key()?, DispatchKey::CPU);
    Ok(())
}

#[test]
fn autograd_keys_are_accepted() -> Result<()> {
    let config = DefaultTypeConfig::new(DispatchKey::AutogradCUDA, ScalarType::Half)?;

    assert_eq!(config.default_dispatch_key()?, DispatchKey::AutogradCUDA);
    Ok(())
}

#[test]
fn global_config_is_shared() {
    let a = DefaultTypeConfig::global();
    let b = DefaultTypeConfig::global();

    assert!(Arc::ptr_eq(&a, &b));
}
