use super::declaration::PrototypeDeclaration;
use super::prototype::{ArgumentSpec, NodeKind, NodePrototype};
use crate::error::CatalogError;
use crate::types::ArgType;
use ahash::AHashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// The read-only library of node prototypes, grouped by category.
///
/// Built once at start-up and passed by reference to whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: AHashMap<String, Vec<Arc<NodePrototype>>>,
    insert_order: Vec<String>,
    len: usize,
}

impl Catalog {
    /// Category whose prototypes are auto-instantiated as program roots.
    pub const EVENT_CATEGORY: &'static str = "Event";

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub fn from_declarations(
        declarations: impl IntoIterator<Item = PrototypeDeclaration>,
    ) -> Result<Self, CatalogError> {
        declarations
            .into_iter()
            .fold(CatalogBuilder::new(), CatalogBuilder::with_declaration)
            .build()
    }

    /// Loads a JSON array of [`PrototypeDeclaration`]s.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let declarations: Vec<PrototypeDeclaration> = serde_json::from_str(json)
            .map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::from_declarations(declarations)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolves a global library index by walking categories in declaration
    /// order and subtracting each category's size.
    pub fn resolve(&self, index: u32) -> Option<&Arc<NodePrototype>> {
        let mut remaining = index as usize;
        for category in &self.insert_order {
            let entries = self.category(category);
            if remaining < entries.len() {
                return entries.get(remaining);
            }
            remaining -= entries.len();
        }
        None
    }

    pub fn find(&self, category: &str, name: &str) -> Option<&Arc<NodePrototype>> {
        self.category(category).iter().find(|p| p.name == name)
    }

    /// Like [`Catalog::find`] but reports the miss as an error.
    pub fn lookup(&self, category: &str, name: &str) -> Result<&Arc<NodePrototype>, CatalogError> {
        self.find(category, name)
            .ok_or_else(|| CatalogError::UnknownPrototype {
                category: category.to_string(),
                name: name.to_string(),
            })
    }

    pub fn category(&self, category: &str) -> &[Arc<NodePrototype>] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Categories in first-declared order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[Arc<NodePrototype>])> {
        self.insert_order
            .iter()
            .map(|name| (name.as_str(), self.category(name)))
    }

    /// Categories offered by the "create node" browser; events are excluded.
    pub fn browsable(&self) -> impl Iterator<Item = (&str, &[Arc<NodePrototype>])> {
        self.categories()
            .filter(|(name, _)| *name != Self::EVENT_CATEGORY)
    }

    pub fn events(&self) -> &[Arc<NodePrototype>] {
        self.category(Self::EVENT_CATEGORY)
    }

    /// Every prototype in global index order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<NodePrototype>> {
        self.categories().flat_map(|(_, entries)| entries.iter())
    }
}

/// Collects declarations and assigns global indices in declaration order.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    declarations: Vec<PrototypeDeclaration>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(
        self,
        kind: NodeKind,
        category: &str,
        name: &str,
        inputs: &[(&str, ArgType)],
        outputs: &[(&str, ArgType)],
    ) -> Self {
        self.with_declaration(PrototypeDeclaration::new(kind, category, name, inputs, outputs))
    }

    pub fn with_declaration(mut self, declaration: PrototypeDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::default();

        for (index, decl) in self.declarations.into_iter().enumerate() {
            let inputs = zip_arguments(&decl, "input", &decl.input_names, &decl.input_types)?;
            let outputs = zip_arguments(&decl, "output", &decl.output_names, &decl.output_types)?;

            // Index arithmetic in `resolve` relies on each category being one contiguous run.
            if catalog.insert_order.last() != Some(&decl.category) {
                if catalog.categories.contains_key(&decl.category) {
                    return Err(CatalogError::ScatteredCategory(decl.category));
                }
                catalog.insert_order.push(decl.category.clone());
            }

            let prototype = NodePrototype {
                kind: decl.kind,
                library_index: index as u32,
                inputs,
                outputs,
                category: decl.category,
                name: decl.name,
            };
            catalog
                .categories
                .entry(prototype.category.clone())
                .or_default()
                .push(Arc::new(prototype));
            catalog.len += 1;
        }

        Ok(catalog)
    }
}

fn zip_arguments(
    decl: &PrototypeDeclaration,
    side: &'static str,
    names: &[String],
    types: &[ArgType],
) -> Result<Vec<ArgumentSpec>, CatalogError> {
    if names.len() != types.len() {
        return Err(CatalogError::ArityMismatch {
            category: decl.category.clone(),
            name: decl.name.clone(),
            side,
            names: names.len(),
            types: types.len(),
        });
    }
    Ok(names
        .iter()
        .zip(types)
        .map(|(name, arg_type)| ArgumentSpec {
            name: name.clone(),
            arg_type: *arg_type,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::builder()
            .declare(NodeKind::Event, "Event", "OnStart", &[], &[])
            .declare(NodeKind::Event, "Event", "OnTick", &[], &[("dt", ArgType::Float)])
            .declare(NodeKind::Function, "IO", "Print", &[("msg", ArgType::String)], &[])
            .declare(
                NodeKind::Plain,
                "Math",
                "Add",
                &[("a", ArgType::Int), ("b", ArgType::Int)],
                &[("sum", ArgType::Int)],
            )
            .build()
            .unwrap()
    }

    #[test]
    fn index_walk_matches_declaration_order() {
        let catalog = sample();
        for i in 0..catalog.len() as u32 {
            assert_eq!(catalog.resolve(i).unwrap().library_index, i);
        }
        assert!(catalog.resolve(4).is_none());
    }

    #[test]
    fn scattered_category_is_rejected() {
        let result = Catalog::builder()
            .declare(NodeKind::Function, "IO", "Print", &[], &[])
            .declare(NodeKind::Plain, "Math", "Add", &[], &[])
            .declare(NodeKind::Function, "IO", "Read", &[], &[])
            .build();
        assert!(matches!(result, Err(CatalogError::ScatteredCategory(c)) if c == "IO"));
    }
}
