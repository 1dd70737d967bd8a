//! Tests for building, loading and querying the node catalog.
mod common;
use blueprint_graph::library::PrototypeDeclaration;
use blueprint_graph::prelude::*;
use common::*;
use std::fs;

#[cfg(test)]
mod catalog_tests {
    use super::*;

    const CATALOG_JSON: &str = r#"[
        { "kind": "event", "category": "Event", "name": "OnStart" },
        {
            "kind": "function", "category": "IO", "name": "Print",
            "input_types": [8], "input_names": ["msg"]
        },
        {
            "kind": "none", "category": "Math", "name": "Add",
            "input_types": ["float", "float"], "input_names": ["a", "b"],
            "output_types": ["float"], "output_names": ["sum"]
        },
        {
            "kind": "workflow", "category": "Flow", "name": "Branch",
            "input_types": ["bool"], "input_names": ["cond"]
        }
    ]"#;

    #[test]
    fn test_indices_follow_declaration_order() {
        let catalog = rich_catalog();
        assert_eq!(catalog.len(), 8);

        let names: Vec<_> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["OnStart", "OnTick", "Print", "Draw", "Branch", "Add", "Greater", "MakeVec"]
        );
        for (expected, prototype) in catalog.iter().enumerate() {
            assert_eq!(prototype.library_index, expected as u32);
            assert_eq!(catalog.resolve(expected as u32), Some(prototype));
        }
    }

    #[test]
    fn test_resolve_walks_categories() {
        let catalog = rich_catalog();
        // Event has 2 entries and IO has 2, so 4 is the first Flow entry.
        let branch = catalog.resolve(4).unwrap();
        assert_eq!(branch.display_name(), "Flow: Branch");
        assert_eq!(branch.kind, NodeKind::Workflow);

        assert_eq!(catalog.resolve(7).unwrap().name, "MakeVec");
        assert!(catalog.resolve(8).is_none());
        assert!(catalog.resolve(u32::MAX).is_none());
    }

    #[test]
    fn test_scenario_indices() {
        let catalog = scenario_catalog();
        assert_eq!(catalog.find("Event", "OnStart").unwrap().library_index, 0);
        assert_eq!(catalog.find("IO", "Print").unwrap().library_index, 1);
    }

    #[test]
    fn test_browser_hides_events() {
        let catalog = rich_catalog();
        let browsable: Vec<_> = catalog.browsable().map(|(name, _)| name).collect();
        assert_eq!(browsable, ["IO", "Flow", "Math"]);

        let categories: Vec<_> = catalog.categories().map(|(name, _)| name).collect();
        assert_eq!(categories, ["Event", "IO", "Flow", "Math"]);
        assert_eq!(catalog.events().len(), 2);
    }

    #[test]
    fn test_lookup_reports_missing_prototypes() {
        let catalog = rich_catalog();
        assert!(catalog.lookup("Math", "Add").is_ok());
        assert!(matches!(
            catalog.lookup("Math", "Divide"),
            Err(CatalogError::UnknownPrototype { ref name, .. }) if name == "Divide"
        ));
        assert!(catalog.category("Nope").is_empty());
    }

    #[test]
    fn test_arity_mismatch_is_rejected() {
        let declaration = PrototypeDeclaration {
            kind: NodeKind::Function,
            category: "IO".to_string(),
            name: "Print".to_string(),
            input_types: vec![ArgType::String, ArgType::Int],
            output_types: vec![],
            input_names: vec!["msg".to_string()],
            output_names: vec![],
        };
        let result = Catalog::from_declarations([declaration]);
        assert!(matches!(
            result,
            Err(CatalogError::ArityMismatch {
                side: "input",
                names: 1,
                types: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_scattered_category_is_rejected_by_the_macro() {
        let result = catalog! {
            (Function, "IO", "Print", [], []),
            (Plain, "Math", "Add", [], []),
            (Function, "IO", "Read", [], []),
        };
        assert!(matches!(result, Err(CatalogError::ScatteredCategory(ref c)) if c == "IO"));
    }

    #[test]
    fn test_json_catalog_accepts_codes_and_names() {
        let catalog = Catalog::from_json_str(CATALOG_JSON).expect("catalog parses");
        assert_eq!(catalog.len(), 4);

        let print = catalog.find("IO", "Print").unwrap();
        assert_eq!(print.inputs[0].arg_type, ArgType::String);
        assert_eq!(print.inputs[0].name, "msg");

        let add = catalog.resolve(2).unwrap();
        assert_eq!(add.kind, NodeKind::Plain);
        assert_eq!(add.outputs[0].arg_type, ArgType::Float);
    }

    #[test]
    fn test_json_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, CATALOG_JSON).unwrap();

        let catalog = Catalog::from_file(&path).unwrap();
        assert_eq!(catalog.events().len(), 1);

        let missing = Catalog::from_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_malformed_json_catalog() {
        let result = Catalog::from_json_str(r#"[{ "kind": "gadget", "category": "X", "name": "Y" }]"#);
        assert!(matches!(result, Err(CatalogError::JsonParseError(_))));
    }
}
