use crate::format::format_type_name;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, LazyLock, OnceLock,
    },
};
use tensorname_core::{
    backend::dispatch_key_to_backend,
    default::DefaultTypeConfig,
    error::{Error, Result},
    options::TensorOptions,
    properties::{all_cpu_types, all_cuda_types, type_properties, TypeProperties},
};

/// Name that stands for the current default tensor type.
pub const DEFAULT_TYPE_NAME: &str = "torch.Tensor";

const CUDA_PREFIX: &str = "torch.cuda.";

/// Which name registry a type name is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Cpu,
    Cuda,
}

impl Family {
    /// Classifies a name by prefix alone.
    ///
    /// Anything not under `torch.cuda.` belongs to the CPU family, including
    /// quantized, XPU and unknown namespaces.
    pub fn of_name(name: &str) -> Self {
        if name.starts_with(CUDA_PREFIX) {
            Self::Cuda
        } else {
            Self::Cpu
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Cuda => "cuda",
        }
    }

    fn types(&self) -> Vec<&'static TypeProperties> {
        match self {
            Self::Cpu => all_cpu_types(),
            Self::Cuda => all_cuda_types(),
        }
    }
}

type NameMap = HashMap<String, &'static TypeProperties>;

struct FamilyRegistry {
    family: Family,
    names: OnceLock<Result<NameMap>>,
    builds: AtomicUsize,
}

impl FamilyRegistry {
    const fn new(family: Family) -> Self {
        Self {
            family,
            names: OnceLock::new(),
            builds: AtomicUsize::new(0),
        }
    }

    fn names(&self) -> Result<&NameMap> {
        self.names.get_or_init(|| self.build()).as_ref().map_err(Clone::clone)
    }

    fn build(&self) -> Result<NameMap> {
        self.builds.fetch_add(1, Ordering::SeqCst);

        let types = self.family.types();
        let mut names = HashMap::with_capacity(types.len());
        for properties in types {
            names.insert(format_type_name(properties)?, properties);
        }

        log::debug!("built {} type name registry with {} entries", self.family.as_str(), names.len());
        Ok(names)
    }
}

/// Resolves legacy type names back to tensor options.
///
/// Each family registry is built on first use and never changes afterwards.
/// Concurrent first lookups of the same family wait for a single build.
pub struct TypeNameResolver {
    config: Arc<DefaultTypeConfig>,
    cpu: FamilyRegistry,
    cuda: FamilyRegistry,
}

static GLOBAL_RESOLVER: LazyLock<TypeNameResolver> =
    LazyLock::new(|| TypeNameResolver::new(DefaultTypeConfig::global()));

impl TypeNameResolver {
    pub fn new(config: Arc<DefaultTypeConfig>) -> Self {
        Self {
            config,
            cpu: FamilyRegistry::new(Family::Cpu),
            cuda: FamilyRegistry::new(Family::Cuda),
        }
    }

    /// The process-wide resolver, bound to [`DefaultTypeConfig::global`].
    pub fn global() -> &'static TypeNameResolver {
        &GLOBAL_RESOLVER
    }

    pub fn config(&self) -> &Arc<DefaultTypeConfig> {
        &self.config
    }

    fn registry(&self, family: Family) -> &FamilyRegistry {
        match family {
            Family::Cpu => &self.cpu,
            Family::Cuda => &self.cuda,
        }
    }

    /// Resolves `name` to the options of the type it names.
    ///
    /// `torch.Tensor` follows the injected default configuration as it is at
    /// call time.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidType`] carrying `name` when no type has that name.
    pub fn resolve(&self, name: &str) -> Result<TensorOptions> {
        self.resolve_properties(name).map(TypeProperties::options)
    }

    /// Like [`resolve`](Self::resolve) but returns the canonical properties object.
    pub fn resolve_properties(&self, name: &str) -> Result<&'static TypeProperties> {
        if name == DEFAULT_TYPE_NAME {
            let (dispatch_key, scalar_type) = self.config.default_type()?;
            let backend = dispatch_key_to_backend(dispatch_key)?;
            return Ok(type_properties(backend, scalar_type));
        }

        let names = self.registry(Family::of_name(name)).names()?;
        names.get(name).copied().ok_or_else(|| Error::InvalidType(name.to_string()))
    }

    /// Makes the named type the default tensor type of the injected configuration.
    ///
    /// Only dense CPU or CUDA floating-point types are accepted.
    pub fn set_default_tensor_type(&self, name: &str) -> Result<()> {
        let properties = self.resolve_properties(name)?;
        self.config.set_default_type(properties.backend(), properties.scalar_type())
    }

    /// Names held by a family registry, sorted. Builds the registry if needed.
    pub fn family_names(&self, family: Family) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.registry(family).names()?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// How many times a family registry has been built; at most one.
    pub fn build_count(&self, family: Family) -> usize {
        self.registry(family).builds.load(Ordering::SeqCst)
    }
}

/// Resolves `name` with the process-wide resolver.
pub fn resolve_type_name(name: &str) -> Result<TensorOptions> {
    TypeNameResolver::global().resolve(name)
}
