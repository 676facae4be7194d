//! SVG envelope shared by every icon source.
//!
//! All markup handed to callers uses the same namespace and a 24×24 view box,
//! whether it came from the built-in table or from an extraction heuristic.

/// SVG namespace written on every envelope.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Coordinate space of Material icons.
pub const VIEW_BOX: &str = "0 0 24 24";

/// Build a single `<path>` element.
pub fn path_element(data: &str) -> String {
    format!(r#"<path d="{data}"/>"#)
}

/// Wrap already-rendered children in the standard SVG envelope.
pub fn svg_document(children: &str) -> String {
    format!(r#"<svg xmlns="{SVG_NAMESPACE}" viewBox="{VIEW_BOX}">{children}</svg>"#)
}

/// Wrap one or more path data strings in the standard envelope.
pub fn svg_from_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> String {
    let children: String = paths.into_iter().map(path_element).collect();
    svg_document(&children)
}
