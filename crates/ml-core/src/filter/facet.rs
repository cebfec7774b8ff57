use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::LifecycleState;
use crate::filter::FacetError;

/// One independent filter dimension with a fixed, ordered set of values.
///
/// The first value is always the pass-through `All`.
pub trait Facet: Copy + Eq + Send + Sync + 'static {
    /// Human-readable facet name, used in errors and picker titles.
    const NAME: &'static str;

    fn all() -> &'static [Self];

    fn label(self) -> &'static str;

    fn is_all(self) -> bool {
        self.index() == 0
    }

    fn index(self) -> usize {
        Self::all()
            .iter()
            .position(|v| *v == self)
            .unwrap_or_default()
    }

    fn from_index(index: usize) -> Result<Self, FacetError> {
        Self::all()
            .get(index)
            .copied()
            .ok_or(FacetError::IndexOutOfRange {
                index,
                len: Self::all().len(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleFacet {
    #[default]
    All,
    Downloading,
    Downloaded,
    NotDownloaded,
}

impl LifecycleFacet {
    pub fn accepts(self, state: LifecycleState) -> bool {
        match self {
            Self::All => true,
            Self::Downloading => state == LifecycleState::Downloading,
            Self::Downloaded => state == LifecycleState::Completed,
            Self::NotDownloaded => {
                matches!(state, LifecycleState::None | LifecycleState::Failed)
            }
        }
    }
}

impl Facet for LifecycleFacet {
    const NAME: &'static str = "lifecycle";

    fn all() -> &'static [Self] {
        &[
            Self::All,
            Self::Downloading,
            Self::Downloaded,
            Self::NotDownloaded,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Downloading => "Downloading",
            Self::Downloaded => "Downloaded",
            Self::NotDownloaded => "Not downloaded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFacet {
    #[default]
    All,
    Flagged,
    NotFlagged,
}

impl CategoryFacet {
    pub fn accepts(self, flagged: bool) -> bool {
        match self {
            Self::All => true,
            Self::Flagged => flagged,
            Self::NotFlagged => !flagged,
        }
    }
}

impl Facet for CategoryFacet {
    const NAME: &'static str = "category";

    fn all() -> &'static [Self] {
        &[Self::All, Self::Flagged, Self::NotFlagged]
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Flagged => "Multimodal",
            Self::NotFlagged => "Text only",
        }
    }
}

impl FromStr for LifecycleFacet {
    type Err = FacetError;

    /// Accepts the snake_case names used in config files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "downloading" => Ok(Self::Downloading),
            "downloaded" => Ok(Self::Downloaded),
            "not_downloaded" => Ok(Self::NotDownloaded),
            _ => Err(FacetError::UnknownValue {
                facet: Self::NAME,
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for CategoryFacet {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "flagged" | "multimodal" => Ok(Self::Flagged),
            "not_flagged" | "non_multimodal" | "text_only" => Ok(Self::NotFlagged),
            _ => Err(FacetError::UnknownValue {
                facet: Self::NAME,
                value: s.to_string(),
            }),
        }
    }
}

impl Display for LifecycleFacet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Display for CategoryFacet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
