use crate::error::{Error, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backend {
    CPU,
    CUDA,
    HIP,
    XPU,
    SparseCPU,
    SparseCUDA,
    SparseHIP,
    SparseXPU,
    SparseCsrCPU,
    SparseCsrCUDA,
    QuantizedCPU,
    QuantizedCUDA,
    MkldnnCPU,
    XLA,
    Vulkan,
    Metal,
    Meta,
    MPS,
    HPU,
    Lazy,
    Undefined,
}

impl Backend {
    pub const ALL: [Backend; 21] = [
        Self::CPU,
        Self::CUDA,
        Self::HIP,
        Self::XPU,
        Self::SparseCPU,
        Self::SparseCUDA,
        Self::SparseHIP,
        Self::SparseXPU,
        Self::SparseCsrCPU,
        Self::SparseCsrCUDA,
        Self::QuantizedCPU,
        Self::QuantizedCUDA,
        Self::MkldnnCPU,
        Self::XLA,
        Self::Vulkan,
        Self::Metal,
        Self::Meta,
        Self::MPS,
        Self::HPU,
        Self::Lazy,
        Self::Undefined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CPU => "CPU",
            Self::CUDA => "CUDA",
            Self::HIP => "HIP",
            Self::XPU => "XPU",
            Self::SparseCPU => "SparseCPU",
            Self::SparseCUDA => "SparseCUDA",
            Self::SparseHIP => "SparseHIP",
            Self::SparseXPU => "SparseXPU",
            Self::SparseCsrCPU => "SparseCsrCPU",
            Self::SparseCsrCUDA => "SparseCsrCUDA",
            Self::QuantizedCPU => "QuantizedCPU",
            Self::QuantizedCUDA => "QuantizedCUDA",
            Self::MkldnnCPU => "MkldnnCPU",
            Self::XLA => "XLA",
            Self::Vulkan => "Vulkan",
            Self::Metal => "Metal",
            Self::Meta => "Meta",
            Self::MPS => "MPS",
            Self::HPU => "HPU",
            Self::Lazy => "Lazy",
            Self::Undefined => "UNKNOWN_BACKEND",
        }
    }

    #[allow(clippy::match_like_matches_macro)]
    pub fn is_sparse(&self) -> bool {
        match self {
            Self::SparseCPU | Self::SparseCUDA | Self::SparseHIP | Self::SparseXPU => true,
            _ => false,
        }
    }

    pub fn is_sparse_csr(&self) -> bool {
        matches!(self, Self::SparseCsrCPU | Self::SparseCsrCUDA)
    }

    pub fn layout(&self) -> Layout {
        match self {
            Self::SparseCPU | Self::SparseCUDA | Self::SparseHIP | Self::SparseXPU => Layout::Sparse,
            Self::SparseCsrCPU | Self::SparseCsrCUDA => Layout::SparseCsr,
            Self::MkldnnCPU => Layout::Mkldnn,
            _ => Layout::Strided,
        }
    }

    /// The dispatch key that selects kernels for this backend.
    pub fn dispatch_key(&self) -> DispatchKey {
        match self {
            Self::CPU => DispatchKey::CPU,
            Self::CUDA => DispatchKey::CUDA,
            Self::HIP => DispatchKey::HIP,
            Self::XPU => DispatchKey::XPU,
            Self::SparseCPU => DispatchKey::SparseCPU,
            Self::SparseCUDA => DispatchKey::SparseCUDA,
            Self::SparseHIP => DispatchKey::SparseHIP,
            Self::SparseXPU => DispatchKey::SparseXPU,
            Self::SparseCsrCPU => DispatchKey::SparseCsrCPU,
            Self::SparseCsrCUDA => DispatchKey::SparseCsrCUDA,
            Self::QuantizedCPU => DispatchKey::QuantizedCPU,
            Self::QuantizedCUDA => DispatchKey::QuantizedCUDA,
            Self::MkldnnCPU => DispatchKey::MkldnnCPU,
            Self::XLA => DispatchKey::XLA,
            Self::Vulkan => DispatchKey::Vulkan,
            Self::Metal => DispatchKey::Metal,
            Self::Meta => DispatchKey::Meta,
            Self::MPS => DispatchKey::MPS,
            Self::HPU => DispatchKey::HPU,
            Self::Lazy => DispatchKey::Lazy,
            Self::Undefined => DispatchKey::Undefined,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    Strided,
    Sparse,
    SparseCsr,
    Mkldnn,
}

// ────────────────────────────────────────────────────────────────────────────
//  Dispatch keys
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchKey {
    Undefined,
    CPU,
    CUDA,
    HIP,
    XPU,
    SparseCPU,
    SparseCUDA,
    SparseHIP,
    SparseXPU,
    SparseCsrCPU,
    SparseCsrCUDA,
    QuantizedCPU,
    QuantizedCUDA,
    MkldnnCPU,
    XLA,
    Vulkan,
    Metal,
    Meta,
    MPS,
    HPU,
    Lazy,
    AutogradCPU,
    AutogradCUDA,
    AutogradXPU,
    AutogradXLA,
    AutogradMPS,
    AutogradHPU,
    AutogradLazy,
    Python,
    Autocast,
    BackendSelect,
}

impl DispatchKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::CPU => "CPU",
            Self::CUDA => "CUDA",
            Self::HIP => "HIP",
            Self::XPU => "XPU",
            Self::SparseCPU => "SparseCPU",
            Self::SparseCUDA => "SparseCUDA",
            Self::SparseHIP => "SparseHIP",
            Self::SparseXPU => "SparseXPU",
            Self::SparseCsrCPU => "SparseCsrCPU",
            Self::SparseCsrCUDA => "SparseCsrCUDA",
            Self::QuantizedCPU => "QuantizedCPU",
            Self::QuantizedCUDA => "QuantizedCUDA",
            Self::MkldnnCPU => "MkldnnCPU",
            Self::XLA => "XLA",
            Self::Vulkan => "Vulkan",
            Self::Metal => "Metal",
            Self::Meta => "Meta",
            Self::MPS => "MPS",
            Self::HPU => "HPU",
            Self::Lazy => "Lazy",
            Self::AutogradCPU => "AutogradCPU",
            Self::AutogradCUDA => "AutogradCUDA",
            Self::AutogradXPU => "AutogradXPU",
            Self::AutogradXLA => "AutogradXLA",
            Self::AutogradMPS => "AutogradMPS",
            Self::AutogradHPU => "AutogradHPU",
            Self::AutogradLazy => "AutogradLazy",
            Self::Python => "Python",
            Self::Autocast => "Autocast",
            Self::BackendSelect => "BackendSelect",
        }
    }
}

impl fmt::Display for DispatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a dispatch key to the backend it selects.
///
/// Autograd keys resolve to the backend they wrap. Keys that do not name a
/// backend at all (`Python`, `Autocast`, ...) are rejected.
pub fn dispatch_key_to_backend(key: DispatchKey) -> Result<Backend> {
    let backend = match key {
        DispatchKey::Undefined => Backend::Undefined,
        DispatchKey::CPU | DispatchKey::AutogradCPU => Backend::CPU,
        DispatchKey::CUDA | DispatchKey::AutogradCUDA => Backend::CUDA,
        DispatchKey::HIP => Backend::HIP,
        DispatchKey::XPU | DispatchKey::AutogradXPU => Backend::XPU,
        DispatchKey::SparseCPU => Backend::SparseCPU,
        DispatchKey::SparseCUDA => Backend::SparseCUDA,
        DispatchKey::SparseHIP => Backend::SparseHIP,
        DispatchKey::SparseXPU => Backend::SparseXPU,
        DispatchKey::SparseCsrCPU => Backend::SparseCsrCPU,
        DispatchKey::SparseCsrCUDA => Backend::SparseCsrCUDA,
        DispatchKey::QuantizedCPU => Backend::QuantizedCPU,
        DispatchKey::QuantizedCUDA => Backend::QuantizedCUDA,
        DispatchKey::MkldnnCPU => Backend::MkldnnCPU,
        DispatchKey::XLA | DispatchKey::AutogradXLA => Backend::XLA,
        DispatchKey::Vulkan => Backend::Vulkan,
        DispatchKey::Metal => Backend::Metal,
        DispatchKey::Meta => Backend::Meta,
        DispatchKey::MPS | DispatchKey::AutogradMPS => Backend::MPS,
        DispatchKey::HPU | DispatchKey::AutogradHPU => Backend::HPU,
        DispatchKey::Lazy | DispatchKey::AutogradLazy => Backend::Lazy,
        DispatchKey::Python | DispatchKey::Autocast | DispatchKey::BackendSelect => {
            return Err(Error::UnrecognizedDispatchKey(key));
        },
    };

    Ok(backend)
}
