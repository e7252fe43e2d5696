//! Resolves user-supplied project names against a fetched project list.

use crate::error::ResolveError;
use crate::types::{Permalink, ProjectRecord};

/// Finds the project `candidate` refers to.
///
/// A record matches when its permalink equals the candidate's derived
/// permalink, or when its name equals the candidate ignoring case. The first
/// match in listing order wins.
///
/// # Errors
///
/// Returns [`ResolveError::NotFound`] carrying every listed name when nothing
/// matches.
pub fn resolve<'a>(
    candidate: &str,
    projects: &'a [ProjectRecord],
) -> Result<&'a ProjectRecord, ResolveError> {
    let wanted = Permalink::from_name(candidate);
    let lowered = candidate.to_lowercase();

    projects
        .iter()
        .find(|p| p.permalink == wanted || p.name.to_lowercase() == lowered)
        .ok_or_else(|| ResolveError::NotFound {
            name: candidate.to_string(),
            available: projects.iter().map(|p| p.name.clone()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<ProjectRecord> {
        vec![
            ProjectRecord::new("main", "/home/u/main"),
            ProjectRecord::new("work-notes", "/home/u/work"),
            ProjectRecord::new("My Project", "/home/u/mine"),
        ]
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let list = projects();
        let found = resolve("Work-Notes", &list).unwrap();
        assert_eq!(found.name, "work-notes");
    }

    #[test]
    fn test_resolve_by_permalink() {
        let list = projects();
        let found = resolve("my-project", &list).unwrap();
        assert_eq!(found.name, "My Project");
    }

    #[test]
    fn test_resolve_exact_name_with_spaces() {
        let list = projects();
        assert_eq!(resolve("MY PROJECT", &list).unwrap().name, "My Project");
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let mut list = projects();
        list.push(ProjectRecord::new("Main", "/elsewhere"));
        assert_eq!(resolve("MAIN", &list).unwrap().path, "/home/u/main");
    }

    #[test]
    fn test_resolve_backend_permalink_is_authoritative() {
        // The backend may store a permalink that differs from the derived one.
        let mut record = ProjectRecord::new("Archive 2023", "/a");
        record.permalink = Permalink::from("old-archive");
        let list = vec![record];
        assert_eq!(resolve("old-archive", &list).unwrap().name, "Archive 2023");
        assert!(resolve("archive-2023", &list).is_err());
    }

    #[test]
    fn test_resolve_not_found_lists_names() {
        let list = projects();
        let err = resolve("missing", &list).unwrap_err();
        assert_eq!(
            err.available(),
            &["main".to_string(), "work-notes".to_string(), "My Project".to_string()]
        );
    }

    #[test]
    fn test_resolve_empty_list() {
        let err = resolve("anything", &[]).unwrap_err();
        assert!(err.available().is_empty());
    }
}
