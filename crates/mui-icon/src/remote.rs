//! Candidate module locations and sequential remote lookup.
//!
//! The package does not publish a stable mapping from export names to module
//! files, so each resolved name expands into an ordered list of plausible
//! paths. They are fetched strictly one after another and the first
//! transport-level success ends the search; the payload is judged later by
//! the extractor.

use std::future::Future;

use mui_icon_net::{CdnClient, NetworkError};

use super::error::LookupError;
use super::name::{ResolvedName, SYMBOL_SUFFIX};

/// How a candidate path is derived from the resolved name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateVariant {
    /// `esm/{name}.js`
    Canonical,
    /// `esm/{name}.js` with the `Icon` suffix removed.
    WithoutIconSuffix,
    /// `lib/{name}/index.js`
    LibLayout,
    /// `esm/…OutlinedIcon.js`
    Outlined,
    /// `esm/…RoundedIcon.js`
    Rounded,
    /// `esm/…SharpIcon.js`
    Sharp,
    /// `esm/…TwoToneIcon.js`
    TwoTone,
    /// `esm/{name}.js` with a lowercase first letter.
    LowercaseFirst,
}

impl CandidateVariant {
    /// All variants in the order they are attempted.
    pub const ALL: [CandidateVariant; 8] = [
        CandidateVariant::Canonical,
        CandidateVariant::WithoutIconSuffix,
        CandidateVariant::LibLayout,
        CandidateVariant::Outlined,
        CandidateVariant::Rounded,
        CandidateVariant::Sharp,
        CandidateVariant::TwoTone,
        CandidateVariant::LowercaseFirst,
    ];

    /// Short name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateVariant::Canonical => "canonical",
            CandidateVariant::WithoutIconSuffix => "without-icon-suffix",
            CandidateVariant::LibLayout => "lib-layout",
            CandidateVariant::Outlined => "outlined",
            CandidateVariant::Rounded => "rounded",
            CandidateVariant::Sharp => "sharp",
            CandidateVariant::TwoTone => "two-tone",
            CandidateVariant::LowercaseFirst => "lowercase-first",
        }
    }

    /// Build the module path, relative to the package root.
    pub fn path_for(&self, name: &ResolvedName) -> String {
        let name = name.as_str();
        match self {
            CandidateVariant::Canonical => format!("esm/{name}.js"),
            CandidateVariant::WithoutIconSuffix => {
                format!("esm/{}.js", name.replacen(SYMBOL_SUFFIX, "", 1))
            }
            CandidateVariant::LibLayout => format!("lib/{name}/index.js"),
            CandidateVariant::Outlined => styled(name, "Outlined"),
            CandidateVariant::Rounded => styled(name, "Rounded"),
            CandidateVariant::Sharp => styled(name, "Sharp"),
            CandidateVariant::TwoTone => styled(name, "TwoTone"),
            CandidateVariant::LowercaseFirst => {
                let mut chars = name.chars();
                let lowered: String = match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                };
                format!("esm/{lowered}.js")
            }
        }
    }
}

impl std::fmt::Display for CandidateVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn styled(name: &str, style: &str) -> String {
    let replacement = format!("{style}{SYMBOL_SUFFIX}");
    format!("esm/{}.js", name.replacen(SYMBOL_SUFFIX, &replacement, 1))
}

/// One guessed module location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateLocation {
    /// Rule that produced this path.
    pub variant: CandidateVariant,
    /// Path relative to the package base URL.
    pub path: String,
}

impl std::fmt::Display for CandidateLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.path, self.variant)
    }
}

/// Expand a resolved name into its candidate locations, in attempt order.
///
/// Variants that collapse onto the same path are kept so the ordering stays
/// fixed.
pub fn candidate_locations(name: &ResolvedName) -> Vec<CandidateLocation> {
    CandidateVariant::ALL
        .iter()
        .map(|variant| CandidateLocation {
            variant: *variant,
            path: variant.path_for(name),
        })
        .collect()
}

/// A failed fetch of one candidate.
#[derive(Debug, Clone)]
pub struct CandidateAttempt {
    /// Location that was tried.
    pub location: CandidateLocation,
    /// Why it was unusable.
    pub error: NetworkError,
}

/// Module text from the first candidate that answered successfully.
#[derive(Debug, Clone)]
pub struct FetchedModule {
    /// Location that answered.
    pub location: CandidateLocation,
    /// Raw module source.
    pub text: String,
    /// Candidates that failed before this one, in order.
    pub failed_attempts: Vec<CandidateAttempt>,
}

/// Source of raw module text for a relative path.
///
/// Implementations report any transport problem, including non-success
/// statuses, as an error.
pub trait ModuleFetcher {
    /// Fetch the module at `path`, relative to the package root.
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, NetworkError>> + Send;
}

/// [`ModuleFetcher`] backed by the package CDN.
#[derive(Debug, Clone)]
pub struct HttpModuleFetcher {
    cdn: CdnClient,
}

impl HttpModuleFetcher {
    /// Create a fetcher for a configured CDN client.
    pub fn new(cdn: CdnClient) -> Self {
        Self { cdn }
    }

    /// The CDN client used for requests.
    pub fn cdn(&self) -> &CdnClient {
        &self.cdn
    }
}

impl ModuleFetcher for HttpModuleFetcher {
    async fn fetch(&self, path: &str) -> Result<String, NetworkError> {
        self.cdn.fetch_text(path).await
    }
}

/// Sequential lookup over the candidate locations of a name.
#[derive(Debug)]
pub struct RemoteLookup<F> {
    fetcher: F,
}

impl<F: ModuleFetcher> RemoteLookup<F> {
    /// Create a lookup over the given fetcher.
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// The underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch the first candidate that succeeds at the transport level.
    ///
    /// Failed candidates are skipped and recorded. Only when every candidate
    /// fails does the lookup itself fail.
    pub async fn fetch_first(&self, name: &ResolvedName) -> Result<FetchedModule, LookupError> {
        let mut failed_attempts = Vec::new();

        for location in candidate_locations(name) {
            match self.fetcher.fetch(&location.path).await {
                Ok(text) => {
                    tracing::debug!(
                        target: "mui_icon::remote",
                        symbol = %name,
                        %location,
                        bytes = text.len(),
                        "candidate fetched"
                    );
                    return Ok(FetchedModule {
                        location,
                        text,
                        failed_attempts,
                    });
                }
                Err(error) => {
                    tracing::debug!(
                        target: "mui_icon::remote",
                        symbol = %name,
                        %location,
                        %error,
                        "candidate unusable"
                    );
                    failed_attempts.push(CandidateAttempt { location, error });
                }
            }
        }

        Err(LookupError::NotFound {
            symbol: name.to_string(),
            attempts: failed_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(name: &str) -> Vec<String> {
        candidate_locations(&ResolvedName::new(name))
            .into_iter()
            .map(|location| location.path)
            .collect()
    }

    #[test]
    fn test_candidate_order() {
        assert_eq!(
            paths("ShoppingCartIcon"),
            vec![
                "esm/ShoppingCartIcon.js",
                "esm/ShoppingCart.js",
                "lib/ShoppingCartIcon/index.js",
                "esm/ShoppingCartOutlinedIcon.js",
                "esm/ShoppingCartRoundedIcon.js",
                "esm/ShoppingCartSharpIcon.js",
                "esm/ShoppingCartTwoToneIcon.js",
                "esm/shoppingCartIcon.js",
            ]
        );
    }

    #[test]
    fn test_variants_tagged_in_order() {
        let locations = candidate_locations(&ResolvedName::new("HomeIcon"));
        let variants: Vec<_> = locations.iter().map(|l| l.variant).collect();
        assert_eq!(variants, CandidateVariant::ALL.to_vec());
    }

    #[test]
    fn test_only_first_icon_occurrence_replaced() {
        // "Icon" inside the name itself is the first occurrence.
        let paths = paths("IconsIcon");
        assert_eq!(paths[1], "esm/sIcon.js");
        assert_eq!(paths[3], "esm/OutlinedIconsIcon.js");
    }

    #[test]
    fn test_name_without_suffix_keeps_duplicates() {
        let paths = paths("Home");
        assert_eq!(paths.len(), 8);
        assert_eq!(paths[0], "esm/Home.js");
        assert_eq!(paths[1], "esm/Home.js");
        assert_eq!(paths[3], "esm/Home.js");
        assert_eq!(paths[7], "esm/home.js");
    }

    #[test]
    fn test_location_display() {
        let location = CandidateLocation {
            variant: CandidateVariant::LibLayout,
            path: "lib/HomeIcon/index.js".to_string(),
        };
        assert_eq!(location.to_string(), "lib/HomeIcon/index.js (lib-layout)");
    }
}
