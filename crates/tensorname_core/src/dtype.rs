use half::{bf16, f16};
use std::fmt;

macro_rules! scalar_types {
    (@count) => { 0usize };
    (@count $head:ident $($tail:ident)*) => { 1usize + scalar_types!(@count $($tail)*) };

    ($($variant:ident => $size:expr),* $(,)?) => {
        /// Element data type of a tensor.
        ///
        /// Variants are declared in framework order; [`ScalarType::ALL`] preserves it.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum ScalarType {
            $($variant,)*
        }

        impl ScalarType {
            pub const ALL: [ScalarType; scalar_types!(@count $($variant)*)] = [$(Self::$variant,)*];

            /// Textual name used in legacy type names, e.g. `Float` in `torch.FloatTensor`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            pub fn size_in_bytes(&self) -> usize {
                match self {
                    $(Self::$variant => $size,)*
                }
            }
        }
    };
}

scalar_types! {
    Byte => 1,
    Char => 1,
    Short => 2,
    Int => 4,
    Long => 8,
    Half => 2,
    Float => 4,
    Double => 8,
    ComplexHalf => 4,
    ComplexFloat => 8,
    ComplexDouble => 16,
    Bool => 1,
    QInt8 => 1,
    QUInt8 => 1,
    QInt32 => 4,
    BFloat16 => 2,
    QUInt4x2 => 1,
    QUInt2x4 => 1,
}

impl ScalarType {
    /// Every real and complex type except `ComplexHalf`; quantized types are not included.
    pub const WITH_COMPLEX_EXCEPT_COMPLEX_HALF: [ScalarType; 12] = [
        Self::Byte,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Half,
        Self::Float,
        Self::Double,
        Self::ComplexFloat,
        Self::ComplexDouble,
        Self::Bool,
        Self::BFloat16,
    ];

    pub fn is_floating_point(&self) -> bool {
        matches!(self, Self::Half | Self::Float | Self::Double | Self::BFloat16)
    }

    pub fn is_quantized(&self) -> bool {
        matches!(
            self,
            Self::QInt8 | Self::QUInt8 | Self::QInt32 | Self::QUInt4x2 | Self::QUInt2x4
        )
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rust element types with a scalar type counterpart.
pub trait Element: Copy + 'static {
    const SCALAR_TYPE: ScalarType;
}

macro_rules! impl_element {
    ($($type:ty => $variant:ident),* $(,)?) => {
        $(
            impl Element for $type {
                const SCALAR_TYPE: ScalarType = ScalarType::$variant;
            }
        )*
    };
}

impl_element! {
    u8 => Byte,
    i8 => Char,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f16 => Half,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    bf16 => BFloat16,
}
