//! Field map types.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::coerce::{lenient_bool, lenient_string};

/// Frontmatter key for the free-text day summary.
pub const SUMMARY_KEY: &str = "Summary";
/// Frontmatter key for the overall day rating.
pub const RATING_KEY: &str = "Rating";
/// Frontmatter list the storyworthy tag is added to.
pub const TAGS_KEY: &str = "tags";
/// Tag added when a day is marked storyworthy.
pub const STORYWORTHY_TAG: &str = "storyworthy";

/// The ten numeric trait scores tracked per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Trait {
    Mindfulness,
    Discipline,
    Engagement,
    Focus,
    Courage,
    Authenticity,
    Purpose,
    Energy,
    Communication,
    Uniqueness,
}

impl Trait {
    /// All traits, in the order they are written to frontmatter.
    pub const ALL: [Trait; 10] = [
        Trait::Mindfulness,
        Trait::Discipline,
        Trait::Engagement,
        Trait::Focus,
        Trait::Courage,
        Trait::Authenticity,
        Trait::Purpose,
        Trait::Energy,
        Trait::Communication,
        Trait::Uniqueness,
    ];

    /// Name used in incoming field maps.
    pub fn field_name(self) -> &'static str {
        match self {
            Trait::Mindfulness => "mindfulness",
            Trait::Discipline => "discipline",
            Trait::Engagement => "engagement",
            Trait::Focus => "focus",
            Trait::Courage => "courage",
            Trait::Authenticity => "authenticity",
            Trait::Purpose => "purpose",
            Trait::Energy => "energy",
            Trait::Communication => "communication",
            Trait::Uniqueness => "uniqueness",
        }
    }

    /// Capitalized name used as the frontmatter key.
    pub fn frontmatter_key(self) -> String {
        let name = self.field_name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.field_name() == name)
    }
}

/// Field updates for one daily note.
///
/// Every field is optional; an absent field never touches the note. Trait
/// scores and unrecognized keys land in [`FieldUpdates::scores`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldUpdates {
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,

    /// Overall rating; falls back to `overall` when absent or null.
    #[serde(default)]
    pub rating: Option<Value>,

    #[serde(default)]
    pub overall: Option<Value>,

    /// Free text rendered as the `### Improvements` bullet list.
    #[serde(default, deserialize_with = "lenient_string")]
    pub improvements: Option<String>,

    /// Free text rendered as the `### Accomplishments` bullet list.
    #[serde(default, deserialize_with = "lenient_string")]
    pub accomplishments: Option<String>,

    /// When true, tag the note `storyworthy` (only if it already has a tag list).
    #[serde(default, deserialize_with = "lenient_bool")]
    pub storyworthy: Option<bool>,

    #[serde(flatten)]
    pub scores: BTreeMap<String, Value>,
}

impl FieldUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_rating(mut self, rating: impl Into<Value>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_score(mut self, t: Trait, value: impl Into<Value>) -> Self {
        self.scores.insert(t.field_name().to_string(), value.into());
        self
    }

    pub fn with_improvements(mut self, text: impl Into<String>) -> Self {
        self.improvements = Some(text.into());
        self
    }

    pub fn with_accomplishments(mut self, text: impl Into<String>) -> Self {
        self.accomplishments = Some(text.into());
        self
    }

    pub fn with_storyworthy(mut self, storyworthy: bool) -> Self {
        self.storyworthy = Some(storyworthy);
        self
    }

    pub fn score(&self, t: Trait) -> Option<&Value> {
        self.scores.get(t.field_name())
    }

    /// The rating value, honouring the `overall` alias.
    pub fn rating_value(&self) -> Option<&Value> {
        match &self.rating {
            Some(v) if !v.is_null() => Some(v),
            _ => self.overall.as_ref(),
        }
    }

    /// Keys present in the map that this crate does not recognize.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.scores
            .keys()
            .map(String::as_str)
            .filter(|k| Trait::from_field_name(k).is_none())
    }
}
