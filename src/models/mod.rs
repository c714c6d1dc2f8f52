use crate::state::Store;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Serialized page entry, as found in configuration.
///
/// `id` may be omitted; it is then derived from `name`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct PageRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ProjectRecord {
    pub name: String,
    #[serde(default)]
    pub pages: Vec<PageRecord>,
}

impl ProjectRecord {
    /// Project shown when no configuration is provided.
    pub fn demo() -> Self {
        Self {
            name: "Untitled project".to_string(),
            pages: vec![
                PageRecord {
                    id: None,
                    name: "Home".to_string(),
                },
                PageRecord {
                    id: None,
                    name: "About".to_string(),
                },
            ],
        }
    }
}

/// Reactive handle to one page of a project.
///
/// Handles are `Copy`; two handles compare equal only when they point at the
/// same page, not when the pages merely share a name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PageRef {
    id: RwSignal<String>,
    name: RwSignal<String>,
}

impl PageRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RwSignal::new(id.into()),
            name: RwSignal::new(name.into()),
        }
    }

    pub fn name(&self) -> String {
        self.name.get()
    }

    pub fn name_untracked(&self) -> String {
        self.name.get_untracked()
    }

    pub fn set_name(&self, name: &str) {
        self.name.set(name.to_string());
    }

    pub fn id(&self) -> String {
        self.id.get()
    }

    pub fn id_untracked(&self) -> String {
        self.id.get_untracked()
    }

    pub fn set_id(&self, id: &str) {
        self.id.set(id.to_string());
    }
}

/// The page the store has opened.
///
/// Built from a [`PageRef`] but owns its own signals, so a rename has to be
/// applied to both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Page {
    id: RwSignal<String>,
    name: RwSignal<String>,
}

impl Page {
    pub fn open(page_ref: &PageRef) -> Self {
        Self {
            id: RwSignal::new(page_ref.id_untracked()),
            name: RwSignal::new(page_ref.name_untracked()),
        }
    }

    pub fn name(&self) -> String {
        self.name.get()
    }

    #[cfg(test)]
    pub fn name_untracked(&self) -> String {
        self.name.get_untracked()
    }

    pub fn set_name(&self, name: &str) {
        self.name.set(name.to_string());
    }

    pub fn id_untracked(&self) -> String {
        self.id.get_untracked()
    }

    pub fn set_id(&self, id: &str) {
        self.id.set(id.to_string());
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Project {
    name: RwSignal<String>,
    pages: RwSignal<Vec<PageRef>>,
}

impl Project {
    pub fn new(name: impl Into<String>, pages: Vec<PageRef>) -> Self {
        Self {
            name: RwSignal::new(name.into()),
            pages: RwSignal::new(pages),
        }
    }

    pub fn from_record(record: &ProjectRecord) -> Self {
        let pages = record
            .pages
            .iter()
            .map(|p| {
                let id = p
                    .id
                    .clone()
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(|| Store::convert_to_id(&p.name));
                PageRef::new(id, p.name.clone())
            })
            .collect();

        Self::new(record.name.clone(), pages)
    }

    pub fn name_untracked(&self) -> String {
        self.name.get_untracked()
    }

    /// Pages in project order. Tracked.
    pub fn pages(&self) -> Vec<PageRef> {
        self.pages.get()
    }

    pub fn pages_untracked(&self) -> Vec<PageRef> {
        self.pages.get_untracked()
    }

    pub fn page_by_id(&self, id: &str) -> Option<PageRef> {
        self.pages
            .with_untracked(|pages| pages.iter().find(|p| p.id_untracked() == id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ref_equality_is_identity() {
        let a = PageRef::new("home", "Home");
        let b = PageRef::new("home", "Home");
        assert_eq!(a, a);
        assert_ne!(a, b);
    }

    #[test]
    fn test_opened_page_does_not_follow_ref() {
        let r = PageRef::new("home", "Home");
        let page = Page::open(&r);
        r.set_name("Start");
        assert_eq!(page.name_untracked(), "Home");
        assert_eq!(page.id_untracked(), "home");
    }

    #[test]
    fn test_project_from_record_derives_missing_ids() {
        let record = ProjectRecord {
            name: "Site".to_string(),
            pages: vec![
                PageRecord {
                    id: None,
                    name: "Contact Us".to_string(),
                },
                PageRecord {
                    id: Some("landing".to_string()),
                    name: "Home".to_string(),
                },
                PageRecord {
                    id: Some("  ".to_string()),
                    name: "Blog".to_string(),
                },
            ],
        };

        let project = Project::from_record(&record);
        let pages = project.pages_untracked();
        let ids: Vec<String> = pages.iter().map(|p| p.id_untracked()).collect();
        assert_eq!(ids, vec!["contact-us", "landing", "blog"]);
        assert_eq!(project.name_untracked(), "Site");
    }

    #[test]
    fn test_project_page_by_id() {
        let home = PageRef::new("home", "Home");
        let about = PageRef::new("about", "About");
        let project = Project::new("Site", vec![home, about]);

        assert_eq!(project.page_by_id("about"), Some(about));
        assert!(project.page_by_id("missing").is_none());
    }

    #[test]
    fn test_project_record_deserialize_without_ids() {
        let json = r#"{"name": "Site", "pages": [{"name": "Home"}, {"id": "x", "name": "About"}]}"#;
        let parsed: ProjectRecord = serde_json::from_str(json).expect("record should parse");
        assert_eq!(parsed.pages.len(), 2);
        assert!(parsed.pages[0].id.is_none());
        assert_eq!(parsed.pages[1].id.as_deref(), Some("x"));
    }
}
