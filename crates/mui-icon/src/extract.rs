//! Recovering SVG markup from icon module source text.
//!
//! The package ships each icon as a JavaScript module, and the way the path
//! data is serialized differs between builds and layouts. Module text is never
//! parsed; instead an ordered chain of independent pattern heuristics is tried
//! and the first one that matches wins.
//!
//! The order runs from the most specific pattern to the broadest. The final
//! [`Heuristic::GenericAttribute`] matches any `d="..."` in the text and is the
//! most likely to produce a false positive, so it only runs when everything
//! else has missed.
//!
//! # Example
//!
//! ```
//! use mui_icon::extract::{extract_markup, Heuristic};
//!
//! let extraction = extract_markup(r#"d: "M1 2L3 4""#).unwrap();
//! assert_eq!(extraction.heuristic, Heuristic::PropertyAssignment);
//! assert!(extraction.markup.contains(r#"<path d="M1 2L3 4"/>"#));
//! ```

use std::sync::OnceLock;

use regex::Regex;

use super::markup::{path_element, svg_document, svg_from_paths};

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

fn regex_property_assignment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"d:\s*["']([^"']+)["']"#))
}

fn regex_inline_svg() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?s)<svg[^>]*>.*?</svg>"))
}

fn regex_create_element() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"React\.createElement\("path",[^)]*\{[^}]*d:\s*"[^"]+"[^}]*\}[^)]*\)"#)
    })
}

fn regex_element_path_data() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"d:\s*"([^"]+)""#))
}

fn regex_svg_icon_factory() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"createSvgIcon\(\s*_\w+\.jsx\(\s*"([^"]+)""#))
}

fn regex_commonjs_export() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"module\.exports\s*=\s*\{\s*"d"\s*:\s*"([^"]+)""#))
}

fn regex_generic_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"d=["']([^"']+)["']"#))
}

/// One way a module may encode its path data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// `d: "<path>"` object property.
    PropertyAssignment,
    /// A complete `<svg>…</svg>` fragment, returned verbatim.
    InlineSvg,
    /// `React.createElement("path", { d: "…" })` calls, possibly several.
    CreateElement,
    /// `createSvgIcon(_jsx("<path>"` with the path as a positional argument.
    SvgIconFactory,
    /// `module.exports = { "d": "<path>" }`.
    CommonJsExport,
    /// Any `d="<path>"` attribute.
    GenericAttribute,
}

impl Heuristic {
    /// All heuristics in the order they are attempted.
    pub const ALL: [Heuristic; 6] = [
        Heuristic::PropertyAssignment,
        Heuristic::InlineSvg,
        Heuristic::CreateElement,
        Heuristic::SvgIconFactory,
        Heuristic::CommonJsExport,
        Heuristic::GenericAttribute,
    ];

    /// Short name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Heuristic::PropertyAssignment => "property-assignment",
            Heuristic::InlineSvg => "inline-svg",
            Heuristic::CreateElement => "create-element",
            Heuristic::SvgIconFactory => "svg-icon-factory",
            Heuristic::CommonJsExport => "commonjs-export",
            Heuristic::GenericAttribute => "generic-attribute",
        }
    }

    /// Apply this heuristic alone.
    pub fn apply(&self, text: &str) -> Option<String> {
        match self {
            Heuristic::PropertyAssignment => single_capture(regex_property_assignment(), text),
            Heuristic::InlineSvg => inline_svg(text),
            Heuristic::CreateElement => create_element_paths(text),
            Heuristic::SvgIconFactory => single_capture(regex_svg_icon_factory(), text),
            Heuristic::CommonJsExport => single_capture(regex_commonjs_export(), text),
            Heuristic::GenericAttribute => single_capture(regex_generic_attribute(), text),
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markup recovered from module text, tagged with the heuristic that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Heuristic that matched.
    pub heuristic: Heuristic,
    /// Self-contained SVG markup.
    pub markup: String,
}

/// Run the heuristic chain over module text.
///
/// Returns `None` when no heuristic matches.
pub fn extract_markup(text: &str) -> Option<Extraction> {
    for heuristic in Heuristic::ALL {
        if let Some(markup) = heuristic.apply(text) {
            tracing::trace!(target: "mui_icon::extract", %heuristic, "heuristic matched");
            return Some(Extraction { heuristic, markup });
        }
        tracing::trace!(target: "mui_icon::extract", %heuristic, "heuristic missed");
    }
    None
}

fn single_capture(re: &Regex, text: &str) -> Option<String> {
    let data = re.captures(text)?.get(1)?.as_str();
    Some(svg_from_paths([data]))
}

fn inline_svg(text: &str) -> Option<String> {
    regex_inline_svg()
        .find(text)
        .map(|m| m.as_str().to_string())
}

fn create_element_paths(text: &str) -> Option<String> {
    // First `d:` of each element
    let children: String = regex_create_element()
        .find_iter(text)
        .filter_map(|element| regex_element_path_data().captures(element.as_str()))
        .filter_map(|caps| caps.get(1))
        .map(|data| path_element(data.as_str()))
        .collect();

    if children.is_empty() {
        None
    } else {
        Some(svg_document(&children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE_START: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"#;

    #[test]
    fn test_property_assignment() {
        let extraction = extract_markup(r#"d: "M1 2L3 4""#).unwrap();
        assert_eq!(extraction.heuristic, Heuristic::PropertyAssignment);
        assert_eq!(
            extraction.markup,
            format!(r#"{ENVELOPE_START}<path d="M1 2L3 4"/></svg>"#)
        );
    }

    #[test]
    fn test_property_assignment_single_quotes() {
        let markup = Heuristic::PropertyAssignment
            .apply("{ d:'M0 0h24v24H0z' }")
            .unwrap();
        assert!(markup.contains(r#"<path d="M0 0h24v24H0z"/>"#));
    }

    #[test]
    fn test_real_esm_module() {
        let module = r#"
"use client";

import createSvgIcon from "./utils/createSvgIcon.js";
import { jsx as _jsx } from "react/jsx-runtime";
export default createSvgIcon(/*#__PURE__*/_jsx("path", {
  d: "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z"
}), 'Home');
"#;
        let extraction = extract_markup(module).unwrap();
        assert_eq!(extraction.heuristic, Heuristic::PropertyAssignment);
        assert!(extraction.markup.contains("M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z"));
    }

    #[test]
    fn test_inline_svg_returned_verbatim() {
        let text = "const icon = `<svg width=\"24\">\n<circle r=\"4\"/>\n</svg>`; trailing";
        let extraction = extract_markup(text).unwrap();
        assert_eq!(extraction.heuristic, Heuristic::InlineSvg);
        assert_eq!(extraction.markup, "<svg width=\"24\">\n<circle r=\"4\"/>\n</svg>");
    }

    #[test]
    fn test_create_element_collects_every_path() {
        let text = r#"React.createElement("path",{d:"M1 1"}),React.createElement("path",{fill:"none",d:"M2 2"})"#;
        let markup = Heuristic::CreateElement.apply(text).unwrap();
        assert_eq!(
            markup,
            format!(r#"{ENVELOPE_START}<path d="M1 1"/><path d="M2 2"/></svg>"#)
        );
    }

    #[test]
    fn test_create_element_takes_first_path_data_of_each_element() {
        let text = r#"React.createElement("path",{d:"M1 1",id:"x"})"#;
        let markup = Heuristic::CreateElement.apply(text).unwrap();
        assert_eq!(
            markup,
            format!(r#"{ENVELOPE_START}<path d="M1 1"/></svg>"#)
        );
    }

    #[test]
    fn test_svg_icon_factory_positional_argument() {
        let text = r#"var _default = createSvgIcon( _react.jsx("M3 3h18"), 'Box');"#;
        let extraction = extract_markup(text).unwrap();
        assert_eq!(extraction.heuristic, Heuristic::SvgIconFactory);
        assert!(extraction.markup.contains(r#"<path d="M3 3h18"/>"#));
    }

    #[test]
    fn test_commonjs_export() {
        let text = r#"module.exports = { "d" : "M4 4v16" };"#;
        let extraction = extract_markup(text).unwrap();
        // `"d" : "` has no `d:` and no `d="`, so only the export pattern fits
        assert_eq!(extraction.heuristic, Heuristic::CommonJsExport);
        assert!(extraction.markup.contains(r#"<path d="M4 4v16"/>"#));
    }

    #[test]
    fn test_generic_attribute_last_resort() {
        let text = r#"const html = '<path d="M5 5L6 6"/>';"#;
        let extraction = extract_markup(text).unwrap();
        assert_eq!(extraction.heuristic, Heuristic::GenericAttribute);
        assert!(extraction.markup.contains(r#"<path d="M5 5L6 6"/>"#));
    }

    #[test]
    fn test_earliest_heuristic_wins() {
        // Matches property assignment, inline svg and the generic attribute.
        let text = r#"x = { d: "M1 1" }; y = '<svg><path d="M9 9"/></svg>';"#;
        let extraction = extract_markup(text).unwrap();
        assert_eq!(extraction.heuristic, Heuristic::PropertyAssignment);
        assert!(extraction.markup.contains("M1 1"));
        assert!(!extraction.markup.contains("M9 9"));

        // Inline svg beats the generic attribute it contains.
        let text = r#"'<svg viewBox="0 0 24 24"><path d="M9 9"/></svg>'"#;
        let extraction = extract_markup(text).unwrap();
        assert_eq!(extraction.heuristic, Heuristic::InlineSvg);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_markup(""), None);
        assert_eq!(extract_markup("export default function Icon() { return null; }"), None);
        assert_eq!(extract_markup("<svg unterminated"), None);
    }

    #[test]
    fn test_heuristic_order_is_stable() {
        assert_eq!(Heuristic::ALL[0], Heuristic::PropertyAssignment);
        assert_eq!(Heuristic::ALL[5], Heuristic::GenericAttribute);
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.apply("nothing here"), None, "{heuristic}");
        }
    }
}
