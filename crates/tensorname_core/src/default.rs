use crate::{
    backend::{dispatch_key_to_backend, Backend, DispatchKey},
    dtype::ScalarType,
    error::{Error, Result},
};
use std::sync::{Arc, LazyLock, RwLock};

/// The active default tensor type: which dispatch key and scalar type a bare
/// `torch.Tensor` stands for.
///
/// Reads and writes go through an internal lock, so a shared handle can be
/// consulted from any thread.
#[derive(Debug)]
pub struct DefaultTypeConfig {
    inner: RwLock<DefaultType>,
}

#[derive(Debug, Clone, Copy)]
struct DefaultType {
    dispatch_key: DispatchKey,
    scalar_type: ScalarType,
}

static GLOBAL_CONFIG: LazyLock<Arc<DefaultTypeConfig>> = LazyLock::new(|| Arc::new(DefaultTypeConfig::default()));

impl Default for DefaultTypeConfig {
    fn default() -> Self {
        Self {
            inner: RwLock::new(DefaultType {
                dispatch_key: DispatchKey::CPU,
                scalar_type: ScalarType::Float,
            }),
        }
    }
}

impl DefaultTypeConfig {
    /// Creates a configuration with the given defaults, validated the same way
    /// as the setters.
    pub fn new(dispatch_key: DispatchKey, scalar_type: ScalarType) -> Result<Self> {
        check_default_backend(dispatch_key_to_backend(dispatch_key)?)?;
        check_default_scalar_type(scalar_type)?;

        Ok(Self {
            inner: RwLock::new(DefaultType {
                dispatch_key,
                scalar_type,
            }),
        })
    }

    /// The process-wide configuration.
    pub fn global() -> Arc<DefaultTypeConfig> {
        Arc::clone(&GLOBAL_CONFIG)
    }

    /// Both defaults, read under one guard so a concurrent
    /// [`set_default_type`](Self::set_default_type) is never seen half applied.
    pub fn default_type(&self) -> Result<(DispatchKey, ScalarType)> {
        let inner = self.inner.read().map_err(|_| Error::Lock)?;
        Ok((inner.dispatch_key, inner.scalar_type))
    }

    pub fn default_dispatch_key(&self) -> Result<DispatchKey> {
        Ok(self.inner.read().map_err(|_| Error::Lock)?.dispatch_key)
    }

    pub fn default_scalar_type(&self) -> Result<ScalarType> {
        Ok(self.inner.read().map_err(|_| Error::Lock)?.scalar_type)
    }

    pub fn set_default_dispatch_key(&self, dispatch_key: DispatchKey) -> Result<()> {
        check_default_backend(dispatch_key_to_backend(dispatch_key)?)?;

        self.inner.write().map_err(|_| Error::Lock)?.dispatch_key = dispatch_key;
        log::info!("default dispatch key set to {}", dispatch_key);
        Ok(())
    }

    pub fn set_default_scalar_type(&self, scalar_type: ScalarType) -> Result<()> {
        check_default_scalar_type(scalar_type)?;

        self.inner.write().map_err(|_| Error::Lock)?.scalar_type = scalar_type;
        log::info!("default scalar type set to {}", scalar_type);
        Ok(())
    }

    /// Replaces both defaults under a single write lock.
    pub fn set_default_type(&self, backend: Backend, scalar_type: ScalarType) -> Result<()> {
        check_default_backend(backend)?;
        check_default_scalar_type(scalar_type)?;

        let mut inner = self.inner.write().map_err(|_| Error::Lock)?;
        inner.dispatch_key = backend.dispatch_key();
        inner.scalar_type = scalar_type;
        log::info!("default tensor type set to ({}, {})", backend, scalar_type);
        Ok(())
    }
}

fn check_default_backend(backend: Backend) -> Result<()> {
    if backend == Backend::Undefined {
        return Err(Error::InvalidDefaultType("default type cannot be undefined".into()));
    }
    if backend.is_sparse() || backend.is_sparse_csr() {
        return Err(Error::InvalidDefaultType(
            "only dense types are supported as the default type".into(),
        ));
    }
    if !matches!(backend, Backend::CPU | Backend::CUDA) {
        return Err(Error::InvalidDefaultType(format!(
            "only CPU and CUDA types are supported as the default type, got {}",
            backend
        )));
    }
    Ok(())
}

fn check_default_scalar_type(scalar_type: ScalarType) -> Result<()> {
    if !scalar_type.is_floating_point() {
        return Err(Error::InvalidDefaultType(
            "only floating-point types are supported as the default type".into(),
        ));
    }
    Ok(())
}
