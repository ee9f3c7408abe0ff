use crate::{
    backend::Backend,
    dtype::ScalarType,
    options::{TensorOptions, TypeKey, TypeKeyed},
};
use std::sync::LazyLock;

/// The canonical per-type object of the framework.
///
/// Exactly one instance exists for every `(backend, scalar type)` pair; use
/// [`type_properties`] to get it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TypeProperties {
    backend: Backend,
    scalar_type: ScalarType,
}

impl TypeProperties {
    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    pub fn options(&self) -> TensorOptions {
        TensorOptions::new(self.backend, self.scalar_type)
    }
}

impl TypeKeyed for TypeProperties {
    fn type_key(&self) -> TypeKey {
        TypeKey::new(self.backend, self.scalar_type)
    }
}

impl TypeKeyed for &TypeProperties {
    fn type_key(&self) -> TypeKey {
        (*self).type_key()
    }
}

// ────────────────────────────────────────────────────────────────────────────
//  Properties registry
// ────────────────────────────────────────────────────────────────────────────

static TYPE_PROPERTIES: LazyLock<Vec<TypeProperties>> = LazyLock::new(|| {
    Backend::ALL
        .iter()
        .flat_map(|&backend| {
            ScalarType::ALL
                .iter()
                .map(move |&scalar_type| TypeProperties { backend, scalar_type })
        })
        .collect()
});

fn index_of(backend: Backend, scalar_type: ScalarType) -> usize {
    backend as usize * ScalarType::ALL.len() + scalar_type as usize
}

/// Returns the process-wide properties object for `(backend, scalar_type)`.
pub fn type_properties(backend: Backend, scalar_type: ScalarType) -> &'static TypeProperties {
    &TYPE_PROPERTIES[index_of(backend, scalar_type)]
}

fn all_types_for_backends(backends: &[Backend]) -> Vec<&'static TypeProperties> {
    let mut types = Vec::with_capacity(backends.len() * ScalarType::ALL.len());
    for &backend in backends {
        for scalar_type in ScalarType::ALL {
            // there is no sparse bool type
            if backend.is_sparse() && scalar_type == ScalarType::Bool {
                continue;
            }
            types.push(type_properties(backend, scalar_type));
        }
    }
    types
}

/// Every concrete type of the CPU family (dense and sparse).
pub fn all_cpu_types() -> Vec<&'static TypeProperties> {
    all_types_for_backends(&[Backend::CPU, Backend::SparseCPU])
}

/// Every concrete type of the CUDA family (dense and sparse).
pub fn all_cuda_types() -> Vec<&'static TypeProperties> {
    all_types_for_backends(&[Backend::CUDA, Backend::SparseCUDA])
}
