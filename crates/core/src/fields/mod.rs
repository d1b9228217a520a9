//! Translation of incoming field maps into frontmatter operations.
//!
//! This is the only place that knows the daily note schema: which keys are
//! numeric, how names are capitalized, and what `storyworthy` means. The
//! frontmatter store below it treats every value as an opaque string.

pub mod coerce;
pub mod types;

use tracing::{debug, warn};

use crate::frontmatter::FrontmatterOp;

pub use coerce::{FieldError, coerce_int, yaml_scalar};
pub use types::{
    FieldUpdates, RATING_KEY, STORYWORTHY_TAG, SUMMARY_KEY, TAGS_KEY, Trait,
};

/// Frontmatter operations derived from a field map, plus the fields skipped
/// because their values could not be coerced.
#[derive(Debug, Clone, Default)]
pub struct FieldPlan {
    pub ops: Vec<FrontmatterOp>,
    pub skipped: Vec<FieldError>,
}

impl FieldUpdates {
    /// Build the ordered frontmatter operations for this map.
    ///
    /// Order: `Summary`, the ten trait scores, `Rating`, then the storyworthy
    /// tag. Absent values produce no operation.
    pub fn frontmatter_ops(&self) -> FieldPlan {
        let mut plan = FieldPlan::default();

        if let Some(summary) = self.summary.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            plan.ops.push(FrontmatterOp::set(SUMMARY_KEY, Some(yaml_scalar(summary))));
        }

        for t in Trait::ALL {
            if let Some(value) = self.score(t) {
                plan.push_int(t.field_name(), t.frontmatter_key(), value);
            }
        }

        if let Some(value) = self.rating_value() {
            plan.push_int("rating", RATING_KEY.to_string(), value);
        }

        if self.storyworthy == Some(true) {
            plan.ops.push(FrontmatterOp::append(TAGS_KEY, STORYWORTHY_TAG));
        }

        for key in self.unknown_keys() {
            debug!(key, "ignoring unrecognized field");
        }

        plan
    }
}

impl FieldPlan {
    fn push_int(&mut self, field: &str, key: String, value: &serde_json::Value) {
        match coerce_int(field, value) {
            Ok(Some(n)) => self.ops.push(FrontmatterOp::set(key, Some(n.to_string()))),
            Ok(None) => {}
            Err(e) => {
                warn!("skipping field: {e}");
                self.skipped.push(e);
            }
        }
    }
}
