//! The `kind{field, field, ...}` text form of constant values.

use super::math::{Float2, Float3, Float4, Matrix4x4, ResourceIndex};
use super::value::Value;
use itertools::Itertools;
use std::fmt::Display;

pub(crate) const FIELD_SEPARATOR: &str = ", ";

/// Parses one of the tagged grammars. `None` means the text is free-form.
pub(crate) fn parse_tagged(text: &str) -> Option<Value> {
    let (kind, inner) = split_tagged(text)?;
    let fields = split_fields(inner);

    match kind {
        "bool" => single(&fields)?.parse().ok().map(Value::Bool),
        "int" => single(&fields)?.parse().ok().map(Value::Int),
        "float" => single(&fields)?.parse().ok().map(Value::Float),
        "float2" => floats::<2>(&fields).map(|v| Value::Float2(Float2::from(v))),
        "float3" => floats::<3>(&fields).map(|v| Value::Float3(Float3::from(v))),
        "float4" => floats::<4>(&fields).map(|v| Value::Float4(Float4::from(v))),
        "matr" | "matrix4x4" => floats::<16>(&fields).map(|v| Value::Matrix4x4(Matrix4x4::from(v))),
        "index" | "resource_index" => single(&fields)?
            .parse()
            .ok()
            .map(|i| Value::ResourceIndex(ResourceIndex(i))),
        _ => None,
    }
}

/// Renders `kind{a, b, c}`.
pub(crate) fn format_tagged<T: Display>(kind: &str, fields: impl IntoIterator<Item = T>) -> String {
    format!("{}{{{}}}", kind, fields.into_iter().join(FIELD_SEPARATOR))
}

fn split_tagged(text: &str) -> Option<(&str, &str)> {
    let open = text.find('{')?;
    let inner = text[open + 1..].strip_suffix('}')?;
    Some((&text[..open], inner))
}

fn split_fields(inner: &str) -> Vec<&str> {
    inner.split(',').map(str::trim).collect()
}

fn single<'a>(fields: &[&'a str]) -> Option<&'a str> {
    match fields {
        [only] => Some(*only),
        _ => None,
    }
}

fn floats<const N: usize>(fields: &[&str]) -> Option<[f32; N]> {
    if fields.len() != N {
        return None;
    }
    let mut out = [0.0; N];
    for (slot, field) in out.iter_mut().zip(fields) {
        *slot = field.parse().ok()?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_kind_and_body() {
        assert_eq!(split_tagged("float3{1, 2, 3}"), Some(("float3", "1, 2, 3")));
        assert_eq!(split_tagged("float{1"), None);
        assert_eq!(split_tagged("plain text"), None);
    }

    #[test]
    fn fields_tolerate_missing_spaces() {
        assert_eq!(split_fields("1,2, 3"), vec!["1", "2", "3"]);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert_eq!(floats::<2>(&["1", "2", "3"]), None);
        assert_eq!(floats::<2>(&["1", "x"]), None);
        assert_eq!(floats::<2>(&["1", "-2.5"]), Some([1.0, -2.5]));
    }

    #[test]
    fn formats_with_separator() {
        assert_eq!(format_tagged("float2", [1.5f32, 2.0]), "float2{1.5, 2}");
    }
}
