use super::arg_type::ArgType;
use super::grammar::{format_tagged, parse_tagged};
use super::math::{Float2, Float3, Float4, Matrix4x4, ResourceIndex};
use crate::error::ValueError;
use std::fmt;
use tracing::warn;

/// A constant held by an unlinked input pin.
///
/// Exactly one representation is live at a time. The canonical string form is
/// always derivable from it through `Display`, and `Float`/`ResourceIndex`
/// can be read back as each other.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Float(f32),
    Float2(Float2),
    Float3(Float3),
    Float4(Float4),
    Matrix4x4(Matrix4x4),
    ResourceIndex(ResourceIndex),
    Text(String),
}

impl Default for Value {
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl Value {
    /// The zero constant a freshly spawned pin of `arg_type` starts with.
    pub fn default_for(arg_type: ArgType) -> Self {
        match arg_type {
            ArgType::Bool => Value::Bool(false),
            ArgType::Int => Value::Int(0),
            ArgType::Float => Value::Float(0.0),
            ArgType::Float2 => Value::Float2(Float2::default()),
            ArgType::Float3 => Value::Float3(Float3::default()),
            ArgType::Float4 => Value::Float4(Float4::default()),
            ArgType::Matrix4x4 => Value::Matrix4x4(Matrix4x4::default()),
            ArgType::ResourceIndex => Value::ResourceIndex(ResourceIndex::default()),
            ArgType::None | ArgType::String => Value::default(),
        }
    }

    /// Parses the canonical text form, degrading to free text when no grammar matches.
    pub fn parse(text: &str) -> Self {
        parse_tagged(text).unwrap_or_else(|| Value::Text(text.to_string()))
    }

    /// The argument type of the live representation.
    pub fn arg_type(&self) -> ArgType {
        match self {
            Value::Bool(_) => ArgType::Bool,
            Value::Int(_) => ArgType::Int,
            Value::Float(_) => ArgType::Float,
            Value::Float2(_) => ArgType::Float2,
            Value::Float3(_) => ArgType::Float3,
            Value::Float4(_) => ArgType::Float4,
            Value::Matrix4x4(_) => ArgType::Matrix4x4,
            Value::ResourceIndex(_) => ArgType::ResourceIndex,
            Value::Text(_) => ArgType::String,
        }
    }

    /// Replaces the value. Strings go through [`Value::parse`].
    pub fn set(&mut self, value: impl Into<Value>) {
        *self = value.into();
    }

    /// Whether `T` can be read without falling back to a default.
    pub fn holds<T: FromValue>(&self) -> bool {
        T::from_value(self).is_some()
    }

    /// Reads the value as `T`.
    ///
    /// Reading a representation that the last `set` did not populate is a soft
    /// error: it is logged and `T::default()` is returned so callers can keep
    /// rendering.
    pub fn get<T: FromValue>(&self) -> T {
        T::from_value(self).unwrap_or_else(|| {
            warn!(
                requested = T::TYPE_NAME,
                held = %self.arg_type(),
                "cannot convert constant value"
            );
            T::default()
        })
    }

    pub fn try_get<T: FromValue>(&self) -> Result<T, ValueError> {
        T::from_value(self).ok_or_else(|| ValueError::NotPopulated {
            requested: T::TYPE_NAME,
            held: self.arg_type(),
        })
    }

    /// The canonical string form written into programs.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Value::Bool(b) => format_tagged("bool", [b]),
            Value::Int(i) => format_tagged("int", [i]),
            Value::Float(v) => format_tagged("float", [v]),
            Value::Float2(v) => format_tagged("float2", v.to_array()),
            Value::Float3(v) => format_tagged("float3", v.to_array()),
            Value::Float4(v) => format_tagged("float4", v.to_array()),
            Value::Matrix4x4(m) => format_tagged("matr", m.to_array()),
            Value::ResourceIndex(i) => format_tagged("index", [i.0]),
            Value::Text(s) => return f.write_str(s),
        };
        f.write_str(&text)
    }
}

/// A native type that can be read out of a [`Value`].
pub trait FromValue: Default + Sized {
    const TYPE_NAME: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_value {
    ($( $ty:ty => $name:literal, $variant:ident ),* $(,)?) => {
        $(
            impl FromValue for $ty {
                const TYPE_NAME: &'static str = $name;

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v.clone()),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_value! {
    bool => "bool", Bool,
    i32 => "int", Int,
    Float2 => "float2", Float2,
    Float3 => "float3", Float3,
    Float4 => "float4", Float4,
    Matrix4x4 => "matrix4x4", Matrix4x4,
}

impl FromValue for f32 {
    const TYPE_NAME: &'static str = "float";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            Value::ResourceIndex(i) => Some(i.0 as f32),
            _ => None,
        }
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl FromValue for ResourceIndex {
    const TYPE_NAME: &'static str = "resource_index";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::ResourceIndex(i) => Some(*i),
            // saturating cast, negative floats land on 0
            Value::Float(v) => Some(ResourceIndex(*v as u32)),
            _ => None,
        }
    }
}

impl From<ResourceIndex> for Value {
    fn from(v: ResourceIndex) -> Self {
        Value::ResourceIndex(v)
    }
}

impl FromValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.canonical())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::parse(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::parse(&text)
    }
}
