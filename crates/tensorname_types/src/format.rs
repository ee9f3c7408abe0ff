use tensorname_core::{
    backend::Backend,
    error::{Error, Result},
    options::TypeKeyed,
};

/// Namespace prefix of a backend's legacy type names.
///
/// Only backends that ever had legacy type objects have a namespace; every
/// other backend yields [`Error::UnimplementedBackend`].
pub fn backend_namespace(backend: Backend) -> Result<&'static str> {
    match backend {
        Backend::CPU => Ok("torch"),
        Backend::CUDA => Ok("torch.cuda"),
        Backend::XPU => Ok("torch.xpu"),
        Backend::SparseCPU => Ok("torch.sparse"),
        Backend::SparseCUDA => Ok("torch.cuda.sparse"),
        Backend::SparseXPU => Ok("torch.xpu.sparse"),
        Backend::QuantizedCPU => Ok("torch.quantized"),
        Backend::HPU => Ok("torch.hpu"),
        _ => Err(Error::UnimplementedBackend(backend)),
    }
}

/// Formats the legacy type name, `<namespace>.<ScalarType>Tensor`.
///
/// Accepts tensor options, type properties, a [`TypeKey`](tensorname_core::options::TypeKey)
/// or a plain `(Backend, ScalarType)` pair.
///
/// # Examples
/// ```
/// use tensorname_core::{backend::Backend, dtype::ScalarType};
/// use tensorname_types::format_type_name;
///
/// assert_eq!(format_type_name(&(Backend::CUDA, ScalarType::Double)).unwrap(), "torch.cuda.DoubleTensor");
/// ```
pub fn format_type_name<T: TypeKeyed + ?Sized>(value: &T) -> Result<String> {
    let key = value.type_key();
    let namespace = backend_namespace(key.backend)?;
    Ok(format!("{}.{}Tensor", namespace, key.scalar_type.as_str()))
}
