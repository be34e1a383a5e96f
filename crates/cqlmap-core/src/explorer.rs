// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity discovery.

use std::collections::HashSet;

use tracing::debug;

use crate::meta::{AnnotationsExt, ClassMeta};

/// Selects entity classes among candidates by package.
///
/// A package is a module path prefix: `app::model` matches `app::model::User`
/// and `app::model::audit::Entry`, never `app::modeling::User`. Both `::` and
/// `.` separators are accepted.
#[derive(Debug, Clone, Default)]
pub struct EntityExplorer {
    packages: Vec<String>
}

impl EntityExplorer {
    /// Explorer over `packages`. An explorer without packages discovers
    /// nothing.
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            packages: packages.into_iter().map(Into::into).collect()
        }
    }

    /// Scanned packages.
    #[must_use]
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Whether `canonical_name` lies in one of the packages.
    #[must_use]
    pub fn in_packages(&self, canonical_name: &str) -> bool {
        self.packages.iter().any(|package| {
            canonical_name == package
                || canonical_name
                    .strip_prefix(package.as_str())
                    .is_some_and(|rest| rest.starts_with("::") || rest.starts_with('.'))
        })
    }

    /// Entity classes among `candidates`, in input order and without
    /// duplicates.
    pub fn discover<'a, I>(&self, candidates: I) -> Vec<&'a ClassMeta>
    where
        I: IntoIterator<Item = &'a ClassMeta>
    {
        let mut seen = HashSet::new();
        let found: Vec<&ClassMeta> = candidates
            .into_iter()
            .filter(|class| class.annotations.entity().is_some())
            .filter(|class| self.in_packages(&class.canonical_name))
            .filter(|class| seen.insert(class.canonical_name.clone()))
            .collect();

        debug!(packages = ?self.packages, found = found.len(), "entities discovered");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::Annotation;

    fn entity(name: &str) -> ClassMeta {
        ClassMeta::new(name).annotated(Annotation::Entity {
            keyspace: None,
            table:    None
        })
    }

    #[test]
    fn package_prefix_matching() {
        let explorer = EntityExplorer::new(["app::model", "legacy.beans"]);
        assert!(explorer.in_packages("app::model::User"));
        assert!(explorer.in_packages("app::model::audit::Entry"));
        assert!(explorer.in_packages("legacy.beans.Account"));
        assert!(!explorer.in_packages("app::modeling::User"));
        assert!(!explorer.in_packages("other::User"));
    }

    #[test]
    fn discover_keeps_annotated_classes_once() {
        let user = entity("app::model::User");
        let duplicate = entity("app::model::User");
        let plain = ClassMeta::new("app::model::Helper");
        let outside = entity("other::Account");

        let explorer = EntityExplorer::new(["app::model"]);
        let found = explorer.discover([&user, &plain, &outside, &duplicate]);
        let names: Vec<&str> = found.iter().map(|c| c.canonical_name.as_str()).collect();
        assert_eq!(names, ["app::model::User"]);
    }

    #[test]
    fn no_packages_discovers_nothing() {
        let user = entity("app::model::User");
        assert!(EntityExplorer::default().discover([&user]).is_empty());
    }
}
