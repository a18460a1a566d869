use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::ids::CourseId;

/// Course ids the user marked for quick access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(BTreeSet<CourseId>);

impl Favorites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: CourseId) -> bool {
        self.0.contains(&id)
    }

    /// Flips membership and returns the new state (`true` = favorite).
    pub fn toggle(&mut self, id: CourseId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<CourseId> for Favorites {
    fn from_iter<T: IntoIterator<Item = CourseId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
