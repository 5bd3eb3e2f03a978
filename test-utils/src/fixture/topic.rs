//! Topic fixtures for creating in-memory test data.

use entity::topic;

/// Default test topic slug.
pub const DEFAULT_SLUG: &str = "mitch";

/// Default test topic description.
pub const DEFAULT_DESCRIPTION: &str = "The man, the Mitch, the legend";

/// Creates a topic entity model with default values.
pub fn entity() -> topic::Model {
    topic::Model {
        slug: DEFAULT_SLUG.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
    }
}
