use std::borrow::Cow;

use crate::registry::{BaseType, TypeDescriptor};

/// Rust spelling of the address sized handle every pointer-bearing declaration maps to.
pub const ADDRESS_TYPE: &str = "*const std::ffi::c_void";

/// Maps a parsed declaration type to the Rust type used in generated signatures.
pub fn rust_type(ty: &TypeDescriptor) -> Cow<'_, str> {
    if ty.modifier.is_pointer() {
        return Cow::Borrowed(ADDRESS_TYPE);
    }
    let name = match &ty.base {
        BaseType::Boolean => "bool",
        BaseType::UnsignedInt32Like => "u32",
        BaseType::SignedInt32Like => "i32",
        BaseType::Float32 => "f32",
        BaseType::Float64 => "f64",
        BaseType::UInt8 => "u8",
        BaseType::Int8 => "i8",
        BaseType::UInt16 => "u16",
        BaseType::Int16 => "i16",
        BaseType::UInt64 => "u64",
        BaseType::Int64 => "i64",
        BaseType::Char => "std::os::raw::c_char",
        BaseType::AddressSized => ADDRESS_TYPE,
        BaseType::Void => "()",
        BaseType::Unrecognized(raw) => return Cow::Borrowed(raw.as_str()),
    };
    Cow::Borrowed(name)
}

/// Storage width of an enum constant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntWidth {
    /// Fits `u32`.
    Narrow,
    /// Needs `u64`.
    Wide,
}

impl IntWidth {
    /// Classifies a decimal or `0x` hex literal. Anything that does not parse as `u32` is wide.
    pub fn classify(literal: &str) -> Self {
        let (digits, radix) = match literal.strip_prefix("0x") {
            Some(hex) => {
                if hex.trim_start_matches('0').len() > 8 {
                    return IntWidth::Wide;
                }
                (hex, 16)
            }
            None => (literal, 10),
        };
        match u32::from_str_radix(digits, radix) {
            Ok(_) => IntWidth::Narrow,
            Err(_) => IntWidth::Wide,
        }
    }

    pub fn rust_type(self) -> &'static str {
        match self {
            IntWidth::Narrow => "u32",
            IntWidth::Wide => "u64",
        }
    }
}
