//! Roster data model
//!
//! A directory is a titled list of departments; each department holds
//! its staff and declares how it renders, as a grid of cards or as a
//! table. Rosters are plain JSON on disk.

pub mod error;

pub use error::RosterError;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One person in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    /// Correlation code, an internal routing identifier
    #[serde(default)]
    pub corr_code: String,
    /// Extra searchable terms not shown on the entry itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl Person {
    /// The text this person is matched against
    ///
    /// Explicit keywords take precedence over the visible fields.
    #[must_use]
    pub fn search_text(&self) -> String {
        if let Some(keywords) = &self.keywords {
            return keywords.clone();
        }
        [
            self.name.as_str(),
            self.position.as_str(),
            self.email.as_str(),
            self.location.as_str(),
            self.corr_code.as_str(),
        ]
        .iter()
        .filter(|f| !f.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// How a department's staff is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    Table,
}

/// A named group of people rendered together in one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    #[serde(default)]
    pub layout: Layout,
    pub staff: Vec<Person>,
}

/// The whole staff directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub departments: Vec<Department>,
}

impl Directory {
    /// Parse a directory from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ParseError`] when the JSON does not
    /// match the roster schema.
    pub fn from_json_str(raw: &str) -> Result<Self, RosterError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load a directory from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::IoError`] when the file cannot be read,
    /// or [`RosterError::ParseError`] when its contents do not parse.
    pub fn from_json_file(path: &Path) -> Result<Self, RosterError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// A small built-in directory, used when no roster file is given
    #[must_use]
    pub fn sample() -> Self {
        let person = |name: &str, position: &str, email: &str, location: &str, corr: &str| Person {
            name: name.to_string(),
            position: position.to_string(),
            email: email.to_string(),
            location: location.to_string(),
            corr_code: corr.to_string(),
            keywords: None,
        };
        Self {
            title: Some("Staff directory".to_string()),
            departments: vec![
                Department {
                    name: "Engineering".to_string(),
                    layout: Layout::Grid,
                    staff: vec![
                        person(
                            "Ada Lovelace",
                            "Engineer",
                            "ada@example.org",
                            "London",
                            "AL-01",
                        ),
                        person(
                            "Grace Hopper",
                            "Admiral",
                            "grace@example.org",
                            "Arlington",
                            "GH-02",
                        ),
                        person(
                            "Alan Turing",
                            "Engineer",
                            "alan@example.org",
                            "Manchester",
                            "AT-03",
                        ),
                    ],
                },
                Department {
                    name: "Operations".to_string(),
                    layout: Layout::Table,
                    staff: vec![
                        person(
                            "Jean Bartik",
                            "Programmer",
                            "jean@example.org",
                            "Philadelphia",
                            "JB-04",
                        ),
                        person(
                            "Katherine Johnson",
                            "Analyst",
                            "katherine@example.org",
                            "Hampton",
                            "KJ-05",
                        ),
                    ],
                },
            ],
        }
    }
}
