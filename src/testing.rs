//! Testing utilities for staffdir
//!
//! Shared fixtures for controller and page tests: a small directory
//! with one grid department and one table department, and helpers to
//! build an attached page/controller pair.
//!
//! Only available when compiled with `cfg(test)`.

use crate::page::PageTree;
use crate::roster::{Department, Directory, Layout, Person};
use crate::search::{DirectoryController, SearchOptions};

/// Build a person with only name and position filled in
#[must_use]
pub fn person(name: &str, position: &str) -> Person {
    Person {
        name: name.to_string(),
        position: position.to_string(),
        email: String::new(),
        location: String::new(),
        corr_code: String::new(),
        keywords: None,
    }
}

/// A two-department directory, one grid and one table
#[must_use]
pub fn sample_directory() -> Directory {
    Directory {
        title: Some("Test directory".to_string()),
        departments: vec![
            Department {
                name: "Engineering".to_string(),
                layout: Layout::Grid,
                staff: vec![
                    person("Ada Lovelace", "Engineer"),
                    person("Grace Hopper", "Admiral"),
                    person("Alan Turing", "Engineer"),
                ],
            },
            Department {
                name: "Operations".to_string(),
                layout: Layout::Table,
                staff: vec![
                    person("Jean Bartik", "Programmer"),
                    person("Katherine Johnson", "Analyst"),
                ],
            },
        ],
    }
}

/// A page built from [`sample_directory`]
#[must_use]
pub fn sample_page() -> PageTree {
    PageTree::build(&sample_directory())
}

/// Attach a controller with default options
///
/// # Panics
///
/// Panics if the page lacks the required root elements.
#[must_use]
pub fn attach(page: &mut PageTree) -> DirectoryController {
    DirectoryController::attach(page, SearchOptions::default())
        .expect("page has all required roots")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RenderSurface, ViewMode};

    #[test]
    fn test_sample_page_structure() {
        let page = sample_page();
        assert_eq!(page.sections().len(), 3);
        assert_eq!(page.containers(ViewMode::Grid).len(), 1);
        assert_eq!(page.containers(ViewMode::Table).len(), 1);
    }

    #[test]
    fn test_attach_succeeds_on_sample() {
        let mut page = sample_page();
        let controller = attach(&mut page);
        assert_eq!(controller.mode(), ViewMode::Grid);
    }
}
