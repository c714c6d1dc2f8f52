use crate::models::{Page, Project};
use leptos::logging::warn;
use leptos::prelude::*;

/// Workspace state shared by every view.
///
/// All fields are signals, so the store is `Copy` and can be captured by any
/// number of event handlers.
#[derive(Clone, Copy)]
pub(crate) struct Store {
    current_project: RwSignal<Option<Project>>,
    current_page: RwSignal<Option<Page>>,

    /// Page id the UI should be showing (drives the `/page/:page_id` route).
    location: RwSignal<Option<String>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            current_project: RwSignal::new(None),
            current_page: RwSignal::new(None),
            location: RwSignal::new(None),
        }
    }

    pub fn with_project(project: Project) -> Self {
        let store = Self::new();
        store.set_project(project);
        store
    }

    pub fn current_project(&self) -> Option<Project> {
        self.current_project.get()
    }

    pub fn current_project_untracked(&self) -> Option<Project> {
        self.current_project.get_untracked()
    }

    /// Replaces the project. Whatever page was open belongs to the old one.
    pub fn set_project(&self, project: Project) {
        self.current_project.set(Some(project));
        self.current_page.set(None);
        self.location.set(None);
    }

    pub fn current_page(&self) -> Option<Page> {
        self.current_page.get()
    }

    pub fn current_page_untracked(&self) -> Option<Page> {
        self.current_page.get_untracked()
    }

    pub fn location(&self) -> Option<String> {
        self.location.get()
    }

    pub fn location_untracked(&self) -> Option<String> {
        self.location.get_untracked()
    }

    /// Opens the page with `id`. Returns `false` when the project has no such
    /// page; the open page and location are then left as they were.
    pub fn open_page(&self, id: &str) -> bool {
        let already_open = self
            .current_page
            .with_untracked(|p| p.as_ref().map(|p| p.id_untracked() == id))
            .unwrap_or(false);
        if already_open && self.location_untracked().as_deref() == Some(id) {
            return true;
        }

        let Some(page_ref) = self
            .current_project
            .get_untracked()
            .and_then(|project| project.page_by_id(id))
        else {
            warn!("open_page: no page with id {id:?} in the current project");
            return false;
        };

        self.current_page.set(Some(Page::open(&page_ref)));
        self.location.set(Some(id.to_string()));
        true
    }

    /// Moves navigation to the renamed page's new id.
    ///
    /// The open page's own name/id are updated by the caller.
    pub fn rename_page(&self, id: &str) {
        self.location.set(Some(id.to_string()));
    }

    /// Derives a page id from its display name.
    ///
    /// Trimmed and lowercased; each whitespace run becomes one `-`; anything
    /// other than alphanumerics, `-` and `_` is dropped.
    pub fn convert_to_id(name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut pending_dash = false;

        for c in name.trim().chars() {
            if c.is_whitespace() {
                pending_dash = true;
                continue;
            }
            if !(c.is_alphanumeric() || c == '-' || c == '_') {
                continue;
            }
            if pending_dash {
                out.push('-');
                pending_dash = false;
            }
            out.extend(c.to_lowercase());
        }

        out
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct StoreContext(pub Store);
