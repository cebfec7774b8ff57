//! Tag generation and category classification.

/// Keywords that mark an entry as multimodal when contained in any of its tags.
pub const DEFAULT_CATEGORY_KEYWORDS: &[&str] = &[
    "multi", "vision", "vl", "visual", "image", "audio", "sound", "speech",
];

/// Display-name tokens that imply a tag the catalog did not list.
const NAME_MARKERS: &[(&str, &str)] = &[
    ("vl", "vision"),
    ("vision", "vision"),
    ("audio", "audio"),
    ("omni", "multimodal"),
    ("coder", "code"),
    ("math", "math"),
];

/// Pure classification functions applied once per entry at build time.
pub trait TagClassifier: Send + Sync {
    /// Produce the tags used for search and classification.
    fn derive_tags(&self, display_name: &str, tags: &[String]) -> Vec<String>;

    /// Whether any of `tags` marks the entry as belonging to the flagged category.
    fn is_flagged(&self, tags: &[String]) -> bool;
}

/// Keyword-containment classifier.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    /// Keywords are matched case-insensitively; blank keywords are dropped
    /// since they would match every tag.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_KEYWORDS)
    }
}

impl TagClassifier for KeywordClassifier {
    fn derive_tags(&self, display_name: &str, tags: &[String]) -> Vec<String> {
        let mut derived: Vec<String> = Vec::with_capacity(tags.len());
        let mut push_unique = |tag: &str| {
            let lowered = tag.to_lowercase();
            if !derived.iter().any(|t| t.to_lowercase() == lowered) {
                derived.push(tag.to_string());
            }
        };

        for tag in tags {
            let tag = tag.trim();
            if !tag.is_empty() {
                push_unique(tag);
            }
        }

        for token in display_name
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let token = token.to_lowercase();
            for (marker, tag) in NAME_MARKERS {
                if token == *marker {
                    push_unique(tag);
                }
            }
        }

        derived
    }

    fn is_flagged(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| {
            let tag = tag.to_lowercase();
            self.keywords.iter().any(|keyword| tag.contains(keyword.as_str()))
        })
    }
}
