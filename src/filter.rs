use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{Category, Project};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
    Personal,
    Professional,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown project filter: {0}")]
pub struct UnknownFilter(pub String);

impl ProjectFilter {
    /// Filters in the order the gallery shows their buttons.
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Featured,
        ProjectFilter::Personal,
        ProjectFilter::Professional,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Featured => "featured",
            ProjectFilter::Personal => "personal",
            ProjectFilter::Professional => "professional",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Featured => "Featured",
            ProjectFilter::Personal => "Personal",
            ProjectFilter::Professional => "Professional",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
            ProjectFilter::Personal => project.category == Category::Personal,
            ProjectFilter::Professional => project.category == Category::Professional,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProjectFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectFilter::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

/// Visible subset of `projects` for `filter`, in the original order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{portfolio, ProjectLinks};

    fn project(id: &str, category: Category, featured: bool) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            technologies: vec![],
            category,
            featured,
            links: ProjectLinks::default(),
            image: None,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("a", Category::Personal, true),
            project("b", Category::Professional, false),
            project("c", Category::Personal, false),
        ]
    }

    fn ids(projects: Vec<&Project>) -> Vec<&str> {
        projects.into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_filter_example() {
        let projects = sample();
        assert_eq!(
            ids(filter_projects(&projects, ProjectFilter::Personal)),
            vec!["a", "c"]
        );
        assert_eq!(
            ids(filter_projects(&projects, ProjectFilter::Featured)),
            vec!["a"]
        );
        assert_eq!(
            ids(filter_projects(&projects, ProjectFilter::All)),
            vec!["a", "b", "c"]
        );
        assert_eq!(
            ids(filter_projects(&projects, ProjectFilter::Professional)),
            vec!["b"]
        );
    }

    #[test]
    fn test_empty_list() {
        for filter in ProjectFilter::ALL {
            assert!(filter_projects(&[], filter).is_empty());
        }
    }

    #[test]
    fn test_filter_properties_on_content() {
        let projects = &portfolio().projects;

        let all = filter_projects(projects, ProjectFilter::All);
        assert_eq!(all.len(), projects.len());
        assert!(all.iter().zip(projects.iter()).all(|(a, b)| a.id == b.id));

        let featured = filter_projects(projects, ProjectFilter::Featured);
        assert!(featured.iter().all(|p| p.featured));
        assert_eq!(
            featured.len(),
            projects.iter().filter(|p| p.featured).count()
        );

        for (filter, category) in [
            (ProjectFilter::Personal, Category::Personal),
            (ProjectFilter::Professional, Category::Professional),
        ] {
            let expected: Vec<&Project> =
                projects.iter().filter(|p| p.category == category).collect();
            assert_eq!(filter_projects(projects, filter), expected);
        }
    }

    #[test]
    fn test_filter_idempotent() {
        let projects = sample();
        for filter in ProjectFilter::ALL {
            let first = filter_projects(&projects, filter);
            let second = filter_projects(&projects, filter);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_keys_round_trip_and_default() {
        assert_eq!(ProjectFilter::default(), ProjectFilter::All);
        for filter in ProjectFilter::ALL {
            assert_eq!(filter.key().parse::<ProjectFilter>(), Ok(filter));
        }
        assert_eq!(
            "archived".parse::<ProjectFilter>(),
            Err(UnknownFilter("archived".to_string()))
        );
    }
}
