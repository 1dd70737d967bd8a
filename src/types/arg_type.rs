use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The closed set of argument types a pin can carry.
///
/// `None` marks a flow-control pin. The persisted program stores these as
/// their integer code, catalog declarations may also spell them by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum ArgType {
    None = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    Float2 = 4,
    Float3 = 5,
    Float4 = 6,
    Matrix4x4 = 7,
    String = 8,
    ResourceIndex = 9,
}

impl ArgType {
    /// Cardinality of the enum. Not a valid pin type.
    pub const COUNT: usize = 10;

    pub const ALL: [ArgType; Self::COUNT] = [
        ArgType::None,
        ArgType::Bool,
        ArgType::Int,
        ArgType::Float,
        ArgType::Float2,
        ArgType::Float3,
        ArgType::Float4,
        ArgType::Matrix4x4,
        ArgType::String,
        ArgType::ResourceIndex,
    ];

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ArgType::None => "none",
            ArgType::Bool => "bool",
            ArgType::Int => "int",
            ArgType::Float => "float",
            ArgType::Float2 => "float2",
            ArgType::Float3 => "float3",
            ArgType::Float4 => "float4",
            ArgType::Matrix4x4 => "matrix4x4",
            ArgType::String => "string",
            ArgType::ResourceIndex => "resource_index",
        }
    }

    /// Resolves a type name, accepting the short spellings used by the text grammar.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "matr" => Some(ArgType::Matrix4x4),
            "index" => Some(ArgType::ResourceIndex),
            "flow" => Some(ArgType::None),
            other => Self::ALL.iter().copied().find(|t| t.name() == other),
        }
    }

    /// Flow pins sequence execution and never hold a value.
    pub fn is_flow(self) -> bool {
        self == ArgType::None
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Serialize for ArgType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

struct ArgTypeVisitor;

impl Visitor<'_> for ArgTypeVisitor {
    type Value = ArgType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "an argument type code below {} or a type name",
            ArgType::COUNT
        )
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ArgType, E> {
        u32::try_from(v)
            .ok()
            .and_then(ArgType::from_code)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ArgType, E> {
        u32::try_from(v)
            .ok()
            .and_then(ArgType::from_code)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ArgType, E> {
        ArgType::from_name(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for ArgType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ArgTypeVisitor)
    }
}
