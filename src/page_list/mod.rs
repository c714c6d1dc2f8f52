mod item;

use item::PageListItem;
#[cfg(test)]
pub(crate) use item::{PageItemEditor, PageItemProps};

use crate::components::ui::Dropdown;
use crate::models::PageRef;
use crate::state::Store;
use leptos::prelude::*;

/// Pages of the current project, in project order; empty without a project.
///
/// Reads are tracked, so calling this inside a view closure re-renders on
/// any change to the project or its page list.
pub(crate) fn project_pages(store: &Store) -> Vec<PageRef> {
    store
        .current_project()
        .map(|project| project.pages())
        .unwrap_or_default()
}

/// Dropdown label: the open page's name, or empty when no page is open.
/// Tracked, like [`project_pages`].
pub(crate) fn current_page_label(store: &Store) -> String {
    store
        .current_page()
        .map(|page| page.name())
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
pub(crate) struct PageListState {
    pub page_list_visible: RwSignal<bool>,
}

impl PageListState {
    pub fn new() -> Self {
        Self {
            page_list_visible: RwSignal::new(false),
        }
    }

    pub fn toggle(&self) {
        self.page_list_visible.update(|v| *v = !*v);
    }
}

impl Default for PageListState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub(crate) fn PageList(store: Store) -> impl IntoView {
    let state = PageListState::new();

    let label = Signal::derive(move || current_page_label(&store));
    let on_toggle = Callback::new(move |_: ()| state.toggle());

    view! {
        <Dropdown label=label open=state.page_list_visible on_toggle=on_toggle>
            {move || {
                project_pages(&store)
                    .into_iter()
                    .map(|page| {
                        view! {
                            <PageListItem
                                name=page.name()
                                page_id=page.id()
                                page_ref=page
                                project_pages=project_pages(&store)
                                store=store
                            />
                        }
                    })
                    .collect_view()
            }}
        </Dropdown>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    #[test]
    fn test_project_pages_without_project() {
        let store = Store::new();
        assert!(project_pages(&store).is_empty());
    }

    #[test]
    fn test_project_pages_preserves_order() {
        let pages = vec![
            PageRef::new("home", "Home"),
            PageRef::new("about", "About"),
            PageRef::new("blog", "Blog"),
        ];
        let store = Store::with_project(Project::new("Site", pages.clone()));

        assert_eq!(project_pages(&store), pages);
    }

    #[test]
    fn test_project_pages_reflects_live_store() {
        let store = Store::with_project(Project::new("One", vec![PageRef::new("a", "A")]));
        assert_eq!(project_pages(&store).len(), 1);

        store.set_project(Project::new("Two", vec![]));
        assert!(project_pages(&store).is_empty());
    }

    #[test]
    fn test_label_without_open_page_is_empty() {
        let store = Store::with_project(Project::new("Site", vec![PageRef::new("home", "Home")]));
        assert_eq!(current_page_label(&store), "");
        assert_eq!(current_page_label(&Store::new()), "");
    }

    #[test]
    fn test_label_shows_open_page_name() {
        let store = Store::with_project(Project::new(
            "Site",
            vec![PageRef::new("home", "Home"), PageRef::new("about", "About")],
        ));
        store.open_page("about");
        assert_eq!(current_page_label(&store), "About");
    }

    #[test]
    fn test_label_follows_rename_of_open_page() {
        let home = PageRef::new("home", "Home");
        let about = PageRef::new("about", "About");
        let store = Store::with_project(Project::new("Site", vec![home, about]));
        store.open_page("about");
        let editor = PageItemEditor::new(PageItemProps {
            name: about.name_untracked(),
            page_id: about.id_untracked(),
            page_ref: about,
            project_pages: project_pages(&store),
            store,
        });

        editor.handle_double_click();
        editor.handle_input("Team".to_string());
        editor.handle_key_down("Enter");

        assert_eq!(current_page_label(&store), "Team");
    }

    #[test]
    fn test_toggle_dropdown() {
        let state = PageListState::new();
        assert!(!state.page_list_visible.get_untracked());
        state.toggle();
        assert!(state.page_list_visible.get_untracked());
        state.toggle();
        assert!(!state.page_list_visible.get_untracked());
    }
}
