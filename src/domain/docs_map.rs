//! Lookup tables resolving version variants and documentation kinds to
//! destination URLs.

use std::collections::HashMap;

/// Documentation base shared by all pydantic v2 pre-release and release
/// variants.
const DEV_V2_DOCS: &str = "https://docs.pydantic.dev/dev-v2";

/// Version variants recognized in redirect paths, with the documentation
/// base each one resolves to. Matching is case-sensitive.
const SUPPORTED_VARIANTS: &[(&str, &str)] = &[
    ("v2.0a1", DEV_V2_DOCS),
    ("v2.0a2", DEV_V2_DOCS),
    ("v2.0a3", DEV_V2_DOCS),
    ("v2.0a4", DEV_V2_DOCS),
    ("v2.0b1", DEV_V2_DOCS),
    ("v2.0b2", DEV_V2_DOCS),
    ("v2.0b3", DEV_V2_DOCS),
    ("v2.0", DEV_V2_DOCS),
];

/// Category of documentation a redirect points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Usage errors, code `u`.
    Usage,
    /// Validation errors, code `v`.
    Validation,
    /// The migration guide; selected by the literal `migration` path
    /// segment, not by a code.
    Migration,
}

impl Kind {
    /// Resolves the short code embedded in a redirect path.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "u" => Some(Self::Usage),
            "v" => Some(Self::Validation),
            _ => None,
        }
    }

    /// Documentation section this kind lives under, relative to a docs base.
    pub fn section(self) -> &'static str {
        match self {
            Self::Usage => "usage/errors",
            Self::Validation => "usage/validation_errors",
            Self::Migration => "migration",
        }
    }

    /// Builds the destination URL for this kind under `docs_base`.
    ///
    /// The anchor is appended as a fragment only when non-empty, with
    /// surrounding slashes stripped. It arrives already URL-decoded and is
    /// passed through verbatim, so `-` and `_` survive unchanged.
    pub fn target_url(self, docs_base: &str, anchor: &str) -> String {
        let mut url = format!("{}/{}/", docs_base, self.section());

        let anchor = anchor.trim_matches('/');
        if !anchor.is_empty() {
            url.push('#');
            url.push_str(anchor);
        }

        url
    }
}

/// Read-only table resolving a version variant to its documentation base
/// URL.
///
/// Built once at startup and shared across requests; concurrent reads need
/// no synchronization.
#[derive(Debug, Clone)]
pub struct DocsMap {
    bases: HashMap<String, String>,
}

impl DocsMap {
    pub fn new(bases: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            bases: bases.into_iter().collect(),
        }
    }

    /// Table of all currently supported variants.
    pub fn builtin() -> Self {
        Self::new(
            SUPPORTED_VARIANTS
                .iter()
                .map(|&(variant, base)| (variant.to_string(), base.to_string())),
        )
    }

    /// Looks up the documentation base for a variant. Case-sensitive.
    pub fn docs_base(&self, variant: &str) -> Option<&str> {
        self.bases.get(variant).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_code() {
        assert_eq!(Kind::from_code("u"), Some(Kind::Usage));
        assert_eq!(Kind::from_code("v"), Some(Kind::Validation));
        assert_eq!(Kind::from_code("z"), None);
        assert_eq!(Kind::from_code(""), None);
        // The migration guide has its own path form, not a code.
        assert_eq!(Kind::from_code("migration"), None);
        // Codes are case-sensitive.
        assert_eq!(Kind::from_code("U"), None);
    }

    #[test]
    fn test_target_url_with_anchor() {
        assert_eq!(
            Kind::Usage.target_url(DEV_V2_DOCS, "decorator-missing-field"),
            "https://docs.pydantic.dev/dev-v2/usage/errors/#decorator-missing-field"
        );
        assert_eq!(
            Kind::Validation.target_url(DEV_V2_DOCS, "decorator-missing-field"),
            "https://docs.pydantic.dev/dev-v2/usage/validation_errors/#decorator-missing-field"
        );
    }

    #[test]
    fn test_target_url_empty_anchor_has_no_fragment() {
        let url = Kind::Usage.target_url(DEV_V2_DOCS, "");
        assert_eq!(url, "https://docs.pydantic.dev/dev-v2/usage/errors/");
        assert!(!url.contains('#'));
    }

    #[test]
    fn test_target_url_strips_surrounding_slashes() {
        assert_eq!(
            Kind::Migration.target_url(DEV_V2_DOCS, "anchor/"),
            "https://docs.pydantic.dev/dev-v2/migration/#anchor"
        );
        // An anchor that is nothing but slashes counts as empty.
        assert_eq!(
            Kind::Migration.target_url(DEV_V2_DOCS, "/"),
            "https://docs.pydantic.dev/dev-v2/migration/"
        );
    }

    #[test]
    fn test_target_url_preserves_dashes_and_underscores() {
        assert_eq!(
            Kind::Migration.target_url(DEV_V2_DOCS, "validator-and-root_validator-are-deprecated"),
            "https://docs.pydantic.dev/dev-v2/migration/#validator-and-root_validator-are-deprecated"
        );
    }

    #[test]
    fn test_builtin_variants() {
        let docs = DocsMap::builtin();

        assert_eq!(docs.docs_base("v2.0"), Some(DEV_V2_DOCS));
        assert_eq!(docs.docs_base("v2.0a3"), Some(DEV_V2_DOCS));
        assert_eq!(docs.docs_base("v2.0b1"), Some(DEV_V2_DOCS));

        assert_eq!(docs.docs_base("v1.10"), None);
        assert_eq!(docs.docs_base(""), None);
        // Matching is case-sensitive.
        assert_eq!(docs.docs_base("V2.0"), None);
    }

    #[test]
    fn test_custom_table() {
        let docs = DocsMap::new([(
            "v3.0".to_string(),
            "https://docs.pydantic.dev/3.0".to_string(),
        )]);

        assert_eq!(docs.docs_base("v3.0"), Some("https://docs.pydantic.dev/3.0"));
        assert_eq!(docs.docs_base("v2.0"), None);
    }
}
