use crate::{
    backend::{Backend, Layout},
    dtype::{Element, ScalarType},
};

/// A `(backend, scalar type)` pair identifying one legacy tensor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeKey {
    pub backend: Backend,
    pub scalar_type: ScalarType,
}

impl TypeKey {
    pub const fn new(backend: Backend, scalar_type: ScalarType) -> Self {
        Self { backend, scalar_type }
    }
}

impl From<(Backend, ScalarType)> for TypeKey {
    fn from((backend, scalar_type): (Backend, ScalarType)) -> Self {
        Self::new(backend, scalar_type)
    }
}

impl From<TypeKey> for (Backend, ScalarType) {
    fn from(key: TypeKey) -> Self {
        (key.backend, key.scalar_type)
    }
}

/// Anything that names a backend and a scalar type.
pub trait TypeKeyed {
    fn type_key(&self) -> TypeKey;
}

impl TypeKeyed for TypeKey {
    fn type_key(&self) -> TypeKey {
        *self
    }
}

impl TypeKeyed for (Backend, ScalarType) {
    fn type_key(&self) -> TypeKey {
        TypeKey::from(*self)
    }
}

impl TypeKeyed for TensorOptions {
    fn type_key(&self) -> TypeKey {
        TypeKey::new(self.backend, self.scalar_type)
    }
}

/// Settings sufficient to construct a tensor of a given type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TensorOptions {
    backend: Backend,
    scalar_type: ScalarType,
    requires_grad: bool,
}

impl TensorOptions {
    pub fn new(backend: Backend, scalar_type: ScalarType) -> Self {
        Self {
            backend,
            scalar_type,
            requires_grad: false,
        }
    }

    /// Options for the element type `T`.
    pub fn of<T: Element>(backend: Backend) -> Self {
        Self::new(backend, T::SCALAR_TYPE)
    }

    pub fn with_requires_grad(mut self, requires_grad: bool) -> Self {
        self.requires_grad = requires_grad;
        self
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    pub fn layout(&self) -> Layout {
        self.backend.layout()
    }

    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }
}
