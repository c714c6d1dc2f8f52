use crate::components::ui::DropdownItemEditableLink;
use crate::models::PageRef;
use crate::state::Store;
use leptos::logging::log;
use leptos::prelude::*;
use std::str::FromStr;
use strum::EnumString;

/// Keys that mean something while a page name is being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString)]
pub(crate) enum EditKey {
    #[strum(serialize = "Escape", serialize = "Esc")]
    Escape,
    Enter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PageNameCheck {
    Empty,
    /// Another page of the project already uses this name.
    Taken,
    Available,
}

/// Decides whether `page` may be renamed to `value`.
///
/// Only committed names of the other pages count; `page` itself is skipped so
/// confirming an unchanged name is not a conflict.
pub(crate) fn check_page_name(value: &str, page: &PageRef, project_pages: &[PageRef]) -> PageNameCheck {
    if value.is_empty() {
        return PageNameCheck::Empty;
    }

    let taken = project_pages
        .iter()
        .any(|p| p != page && p.name_untracked() == value);

    if taken {
        PageNameCheck::Taken
    } else {
        PageNameCheck::Available
    }
}

#[derive(Clone)]
pub(crate) struct PageItemProps {
    pub name: String,
    pub page_id: String,
    pub page_ref: PageRef,
    pub project_pages: Vec<PageRef>,
    pub store: Store,
}

/// Local edit state of one page entry plus its event handlers.
#[derive(Clone, Copy)]
pub(crate) struct PageItemEditor {
    pub editable: RwSignal<bool>,
    pub name_error: RwSignal<bool>,
    pub input_value: RwSignal<String>,
    props: StoredValue<PageItemProps>,
}

impl PageItemEditor {
    pub fn new(props: PageItemProps) -> Self {
        Self {
            editable: RwSignal::new(false),
            name_error: RwSignal::new(false),
            input_value: RwSignal::new(props.name.clone()),
            props: StoredValue::new(props),
        }
    }

    fn committed_name(&self) -> String {
        self.props.with_value(|p| p.name.clone())
    }

    fn revert(&self) {
        self.input_value.set(self.committed_name());
        self.editable.set(false);
        self.name_error.set(false);
    }

    pub fn handle_click(&self) {
        let (store, page_id) = self.props.with_value(|p| (p.store, p.page_id.clone()));
        store.open_page(&page_id);
    }

    pub fn handle_double_click(&self) {
        self.editable.update(|e| *e = !*e);
    }

    pub fn handle_input(&self, value: String) {
        if !self.editable.get_untracked() {
            return;
        }
        self.input_value.set(value);
    }

    pub fn handle_blur(&self) {
        // A re-render after a commit can dispose this item before the input blurs.
        let name = self.props.try_with_value(|p| p.name.clone());
        self.editable.try_set(false);
        self.name_error.try_set(false);
        if let Some(name) = name {
            self.input_value.try_set(name);
        }
    }

    pub fn handle_key_down(&self, key: &str) {
        if !self.editable.get_untracked() {
            return;
        }
        let Ok(key) = EditKey::from_str(key) else {
            return;
        };

        match key {
            EditKey::Escape => self.revert(),
            EditKey::Enter => {
                let value = self.input_value.get_untracked();
                let check = self
                    .props
                    .with_value(|p| check_page_name(&value, &p.page_ref, &p.project_pages));

                match check {
                    PageNameCheck::Empty => self.revert(),
                    PageNameCheck::Taken => {
                        log!("page name {value:?} is already taken");
                        self.name_error.set(true);
                    }
                    PageNameCheck::Available => {
                        self.rename_page(&value);
                        self.editable.set(false);
                        self.name_error.set(false);
                    }
                }
            }
        }
    }

    /// Renames the page, and the store's open page too if it is this one.
    pub fn rename_page(&self, name: &str) {
        let (page_ref, store) = self.props.with_value(|p| (p.page_ref, p.store));
        let id = Store::convert_to_id(name);

        let previous_id = page_ref.id_untracked();
        let current_page = store
            .current_page_untracked()
            .filter(|page| page.id_untracked() == previous_id);

        page_ref.set_name(name);
        page_ref.set_id(&id);

        if let Some(current_page) = current_page {
            current_page.set_name(name);
            store.rename_page(&id);
            current_page.set_id(&id);
        }
    }
}

#[component]
pub(crate) fn PageListItem(
    name: String,
    page_id: String,
    page_ref: PageRef,
    project_pages: Vec<PageRef>,
    store: Store,
) -> impl IntoView {
    let editor = PageItemEditor::new(PageItemProps {
        name: name.clone(),
        page_id,
        page_ref,
        project_pages,
        store,
    });

    let on_click = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        editor.handle_click();
    });
    let on_double_click = Callback::new(move |_: web_sys::MouseEvent| editor.handle_double_click());
    let on_change = Callback::new(move |value: String| editor.handle_input(value));
    let on_blur = Callback::new(move |_: ()| editor.handle_blur());
    let on_key_down = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
        }
        editor.handle_key_down(&ev.key());
    });

    view! {
        <DropdownItemEditableLink
            name=name
            value=editor.input_value
            editable=editor.editable
            error=editor.name_error
            focused=editor.editable
            on_click=on_click
            on_double_click=on_double_click
            on_change=on_change
            on_blur=on_blur
            on_key_down=on_key_down
        />
    }
}
