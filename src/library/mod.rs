//! The node library: prototypes nodes are instantiated from.

mod catalog;
mod declaration;
mod prototype;

pub use catalog::{Catalog, CatalogBuilder};
pub use declaration::PrototypeDeclaration;
pub use prototype::{ArgumentSpec, NodeKind, NodePrototype};

/// Declares a [`Catalog`] inline, in the same shape as the external node list.
///
/// Each entry is `(Kind, "Category", "Name", [inputs], [outputs])` where an
/// argument is `("name", ArgType)`. Evaluates to `Result<Catalog, CatalogError>`.
///
/// ```rust
/// use blueprint_graph::catalog;
///
/// let catalog = catalog! {
///     (Event, "Event", "OnStart", [], []),
///     (Function, "IO", "Print", [("msg", String)], []),
/// }
/// .unwrap();
/// assert_eq!(catalog.resolve(1).unwrap().name, "Print");
/// ```
#[macro_export]
macro_rules! catalog {
    ( $( ($kind:ident, $category:expr, $name:expr,
          [ $( ($in_name:expr, $in_ty:ident) ),* $(,)? ],
          [ $( ($out_name:expr, $out_ty:ident) ),* $(,)? ] ) ),* $(,)? ) => {
        $crate::library::CatalogBuilder::new()
        $(
            .declare(
                $crate::library::NodeKind::$kind,
                $category,
                $name,
                &[ $( ($in_name, $crate::types::ArgType::$in_ty) ),* ],
                &[ $( ($out_name, $crate::types::ArgType::$out_ty) ),* ],
            )
        )*
        .build()
    };
}
