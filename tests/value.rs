//! Tests for constant values and their text grammar.
use blueprint_graph::prelude::*;

#[cfg(test)]
mod value_tests {
    use super::*;

    fn reparse(value: &Value) -> Value {
        Value::parse(&value.canonical())
    }

    #[test]
    fn test_native_values_read_back_unchanged() {
        assert!(Value::from(true).get::<bool>());
        assert_eq!(Value::from(-42).get::<i32>(), -42);
        assert_eq!(Value::from(1.5f32).get::<f32>(), 1.5);
        assert_eq!(
            Value::from(Float2::new(1.0, -2.5)).get::<Float2>(),
            Float2::new(1.0, -2.5)
        );
        assert_eq!(
            Value::from(Float4::new(0.25, 0.5, 0.75, 1.0)).get::<Float4>(),
            Float4::new(0.25, 0.5, 0.75, 1.0)
        );
        assert_eq!(
            Value::from(Matrix4x4::identity()).get::<Matrix4x4>(),
            Matrix4x4::identity()
        );
        assert_eq!(
            Value::from(ResourceIndex(7)).get::<ResourceIndex>(),
            ResourceIndex(7)
        );
        assert_eq!(Value::from("free text").get::<String>(), "free text");
    }

    #[test]
    fn test_canonical_text_reparses_to_the_same_value() {
        let samples = [
            Value::Bool(true),
            Value::Int(-3),
            Value::Float(1.5),
            Value::Float(0.1),
            Value::Float2(Float2::new(1.0, 2.0)),
            Value::Float3(Float3::new(1.0, 2.0, 3.0)),
            Value::Float4(Float4::new(-1.0, 0.0, 1e-3, 12345.5)),
            Value::Matrix4x4(Matrix4x4::from([
                1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,
                16.0,
            ])),
            Value::ResourceIndex(ResourceIndex(7)),
            Value::Text("hello".to_string()),
        ];

        for value in samples {
            assert_eq!(reparse(&value), value, "canonical form {}", value);
        }
    }

    #[test]
    fn test_canonical_forms() {
        assert_eq!(Value::Float(1.5).canonical(), "float{1.5}");
        assert_eq!(
            Value::Float3(Float3::new(1.0, 2.0, 3.0)).canonical(),
            "float3{1, 2, 3}"
        );
        assert_eq!(Value::ResourceIndex(ResourceIndex(7)).canonical(), "index{7}");
        assert_eq!(Value::Bool(false).canonical(), "bool{false}");
        assert!(Value::Matrix4x4(Matrix4x4::identity())
            .canonical()
            .starts_with("matr{1, 0, 0, 0, 0, 1"));
    }

    #[test]
    fn test_parse_accepts_long_aliases_and_loose_spacing() {
        assert_eq!(
            Value::parse("resource_index{7}"),
            Value::ResourceIndex(ResourceIndex(7))
        );
        assert_eq!(
            Value::parse("float3{1,2,  3}"),
            Value::Float3(Float3::new(1.0, 2.0, 3.0))
        );
        let long = format!("matrix4x4{{{}}}", vec!["0"; 16].join(", "));
        assert_eq!(Value::parse(&long), Value::Matrix4x4(Matrix4x4::default()));
    }

    #[test]
    fn test_unrecognised_text_degrades_to_string() {
        for text in ["hello", "vec3{1, 2, 3}", "float3{1, 2}", "float{abc}", "int{", ""] {
            let value = Value::parse(text);
            assert_eq!(value, Value::Text(text.to_string()));
            assert_eq!(value.arg_type(), ArgType::String);
        }
    }

    #[test]
    fn test_float_and_resource_index_read_each_other() {
        let index = Value::from(ResourceIndex(12));
        assert_eq!(index.get::<f32>(), 12.0);

        let float = Value::from(3.9f32);
        assert_eq!(float.get::<ResourceIndex>(), ResourceIndex(3));
        assert!(float.holds::<ResourceIndex>());
        assert!(!float.holds::<Float2>());
    }

    #[test]
    fn test_reading_an_unpopulated_representation_returns_zero() {
        let value = Value::from(Float3::new(1.0, 2.0, 3.0));
        assert_eq!(value.get::<i32>(), 0);
        assert_eq!(value.get::<Float2>(), Float2::default());
        assert!(!value.get::<bool>());
        // every representation also populates the string form
        assert_eq!(value.get::<String>(), "float3{1, 2, 3}");
    }

    #[test]
    fn test_try_get_reports_the_held_type() {
        let value = Value::from(5);
        let err = value.try_get::<Float4>().unwrap_err();
        assert_eq!(
            err,
            ValueError::NotPopulated {
                requested: "float4",
                held: ArgType::Int,
            }
        );
        assert_eq!(value.try_get::<i32>(), Ok(5));
    }

    #[test]
    fn test_set_replaces_the_live_representation() {
        let mut value = Value::from(1.0f32);
        value.set(Float2::new(4.0, 5.0));
        assert_eq!(value.arg_type(), ArgType::Float2);
        assert!(!value.holds::<f32>());

        value.set("int{9}");
        assert_eq!(value, Value::Int(9));
    }

    #[test]
    fn test_defaults_per_arg_type() {
        for arg_type in ArgType::ALL {
            let value = Value::default_for(arg_type);
            let expected = if arg_type.is_flow() {
                ArgType::String
            } else {
                arg_type
            };
            assert_eq!(value.arg_type(), expected);
        }
    }

    #[test]
    fn test_arg_type_codes_and_names() {
        assert_eq!(ArgType::COUNT, ArgType::ALL.len());
        for (code, arg_type) in ArgType::ALL.iter().enumerate() {
            assert_eq!(arg_type.code(), code as u32);
            assert_eq!(ArgType::from_code(code as u32), Some(*arg_type));
            assert_eq!(ArgType::from_name(arg_type.name()), Some(*arg_type));
        }
        assert_eq!(ArgType::from_code(ArgType::COUNT as u32), None);
        assert_eq!(ArgType::from_name("matr"), Some(ArgType::Matrix4x4));
        assert_eq!(serde_json::to_string(&ArgType::String).unwrap(), "8");
        assert_eq!(
            serde_json::from_str::<ArgType>("\"float3\"").unwrap(),
            ArgType::Float3
        );
        assert!(serde_json::from_str::<ArgType>("10").is_err());
    }
}
