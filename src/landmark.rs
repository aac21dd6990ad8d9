//! Ready-made catalog record.
//!
//! Loaders that have no record type of their own can produce [`Landmark`]s
//! and hand a slice of them to the planner.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::traits::{CategoryId, PointOfInterest};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: CategoryId,
    pub location: Coordinate,
}

impl Landmark {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: CategoryId,
        location: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category,
            location,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl PointOfInterest for Landmark {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> CategoryId {
        self.category
    }

    fn location(&self) -> Coordinate {
        self.location
    }
}
