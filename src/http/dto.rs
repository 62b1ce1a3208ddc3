//! Request bodies accepted by the task routes.
//!
//! Every field is optional at the wire level so that missing values reach
//! the store's validation instead of failing JSON decoding.

use serde::Deserialize;

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateTaskBody {
    /// Required title.
    pub title: Option<String>,
    /// Optional description, empty when absent.
    pub description: Option<String>,
    /// Optional status token, `todo` when absent.
    pub status: Option<String>,
}

/// Body of `PUT /tasks/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description; an empty string clears it.
    pub description: Option<String>,
    /// Replacement status token.
    pub status: Option<String>,
}

/// Body of `PATCH /tasks/{id}/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusBody {
    /// Target status token.
    pub status: Option<String>,
}
