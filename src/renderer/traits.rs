use serde::Deserialize;
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::debug;

/// Deepest heading Markdown supports
pub const MAX_HEADING_LEVEL: usize = 6;

/// An optional part of the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Name,
    Description,
    Keywords,
    Props,
    Data,
    Computed,
    Slots,
    Events,
    Methods,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Feature::Name,
        Feature::Description,
        Feature::Keywords,
        Feature::Props,
        Feature::Data,
        Feature::Computed,
        Feature::Slots,
        Feature::Events,
        Feature::Methods,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Name => "name",
            Feature::Description => "description",
            Feature::Keywords => "keywords",
            Feature::Props => "props",
            Feature::Data => "data",
            Feature::Computed => "computed",
            Feature::Slots => "slots",
            Feature::Events => "events",
            Feature::Methods => "methods",
        }
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .iter()
            .copied()
            .find(|feature| feature.as_str() == s)
            .ok_or_else(|| format!("unknown feature: {}", s))
    }
}

/// Set of enabled features
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct Features(BTreeSet<Feature>);

impl Features {
    pub fn all() -> Self {
        Self(Feature::ALL.into_iter().collect())
    }

    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    /// Builds a set from feature identifiers, skipping the ones we don't know.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut features = Self::none();
        for name in names {
            let name = name.as_ref().trim();
            match name.parse::<Feature>() {
                Ok(feature) => {
                    features.0.insert(feature);
                }
                Err(_) => debug!(feature = name, "ignoring unknown feature"),
            }
        }
        features
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    pub fn without(mut self, feature: Feature) -> Self {
        self.0.remove(&feature);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Vec<String>> for Features {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

impl FromIterator<Feature> for Features {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Options controlling a single render
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Heading level of the main title
    pub level: usize,
    pub features: Features,
    /// Emit the title of an enabled section even when it has no entries
    pub show_empty_sections: bool,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self {
            level: 1,
            features: Features::all(),
            show_empty_sections: false,
        }
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn with_empty_sections(mut self, show: bool) -> Self {
        self.show_empty_sections = show;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamps a heading level into the range Markdown supports.
pub fn clamp_level(level: usize) -> usize {
    level.clamp(1, MAX_HEADING_LEVEL)
}

/// Configuration context for rendering operations
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub level: usize,
    pub features: Features,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::from_config(&RenderConfig::default())
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            level: clamp_level(config.level),
            features: config.features.clone(),
        }
    }

    /// Context for the sections nested below the current heading
    pub fn nested(&self) -> Self {
        Self {
            level: clamp_level(self.level + 1),
            features: self.features.clone(),
        }
    }

    pub fn heading(&self, title: &str) -> String {
        format!("{} {}", "#".repeat(self.level), title)
    }

    pub fn enabled(&self, feature: Feature) -> bool {
        self.features.contains(feature)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Core rendering trait for all parsed entries
pub trait Render {
    fn render(&self, context: &RenderContext) -> String;
}
