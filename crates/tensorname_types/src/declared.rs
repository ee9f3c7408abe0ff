use tensorname_core::{backend::Backend, dtype::ScalarType};

/// Backends covered by [`enumerate_declared_types`].
///
/// Narrower than the set of backends with a name namespace: XPU, HPU and
/// quantized backends are not declared here.
pub const DECLARED_BACKENDS: [Backend; 4] = [Backend::CPU, Backend::CUDA, Backend::SparseCPU, Backend::SparseCUDA];

/// Lists the `(backend, scalar type)` combinations that can be instantiated as
/// empty dense or sparse tensors, backend-major in declaration order.
///
/// Quantized scalar types are left out because empty tensors of them cannot be
/// created.
pub fn enumerate_declared_types() -> Vec<(Backend, ScalarType)> {
    let scalar_types = ScalarType::WITH_COMPLEX_EXCEPT_COMPLEX_HALF;
    let mut declared = Vec::with_capacity(DECLARED_BACKENDS.len() * scalar_types.len());

    for backend in DECLARED_BACKENDS {
        for scalar_type in scalar_types {
            // there is no sparse bool type
            if scalar_type == ScalarType::Bool && matches!(backend, Backend::SparseCPU | Backend::SparseCUDA) {
                continue;
            }
            declared.push((backend, scalar_type));
        }
    }

    declared
}
