//! Project snapshots
//!
//! A snapshot is the parsed file set of one compiled project, serialized as
//! JSON by whatever resolves and parses the project's files.

use serde::{Deserialize, Serialize};

use crate::declaration::Document;

/// Error loading or querying a project snapshot
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("Invalid project snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document not in project: {0}")]
    UnknownDocument(String),
}

/// All parsed documents of one compiled project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub documents: Vec<Document>,
}

impl Project {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn from_json(json_str: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(json_str)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Find a document by its path
    pub fn document(&self, path: &str) -> Result<&Document, ProjectError> {
        self.documents
            .iter()
            .find(|document| document.path == path)
            .ok_or_else(|| ProjectError::UnknownDocument(path.to_string()))
    }
}
