use crate::config::EnvConfig;
use crate::models::Project;
use crate::page_list::PageList;
use crate::state::{Store, StoreContext};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate, use_params_map};
use leptos_router::path;
use leptos_router::NavigateOptions;

pub(crate) fn page_path(id: &str) -> String {
    format!("/page/{}", urlencoding::encode(id))
}

/// Path for a store location. A page whose id is empty (a name made only of
/// punctuation) has no `/page/:page_id` path and is shown at `/`.
pub(crate) fn location_path(id: &str) -> String {
    if id.is_empty() {
        "/".to_string()
    } else {
        page_path(id)
    }
}

/// Applies the page requested by the URL to the store.
///
/// Returns the path the URL should be replaced with when it no longer
/// matches the open page: an unknown id (e.g. an old id reached through
/// history after a rename), or `/` while a page is already open.
pub(crate) fn open_requested_page(store: &Store, requested: Option<&str>) -> Option<String> {
    match requested {
        Some(id) => {
            if store.open_page(id) {
                None
            } else {
                store.location_untracked().map(|id| location_path(&id))
            }
        }
        None => match store.location_untracked() {
            Some(id) => Some(location_path(&id)).filter(|path| path != "/"),
            None => {
                let first = store
                    .current_project_untracked()
                    .and_then(|project| project.pages_untracked().first().copied());
                if let Some(first) = first {
                    store.open_page(&first.id_untracked());
                }
                None
            }
        },
    }
}

pub(crate) fn decode_page_id(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|id| id.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
pub fn App() -> impl IntoView {
    let config = EnvConfig::new();
    provide_context(StoreContext(Store::with_project(Project::from_record(
        &config.project,
    ))));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("page/:page_id") view=Workspace />
                <Route path=path!("") view=Workspace />
            </Routes>
        </Router>
    }
}

#[component]
fn Workspace() -> impl IntoView {
    let store = expect_context::<StoreContext>().0;
    let params = use_params_map();
    let location = use_location();
    let navigate = use_navigate();

    let replace_path = move |path: &str| {
        if location.pathname.get_untracked() != path {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    };
    let replace_path_for_route = replace_path.clone();

    // Route -> store. Without a page in the URL, open the first one.
    Effect::new(move |_| {
        let requested = params.with(|p| p.get("page_id")).map(|raw| decode_page_id(&raw));
        if let Some(path) = open_requested_page(&store, requested.as_deref()) {
            replace_path_for_route(&path);
        }
    });

    // Store -> route. Renaming the open page moves the location.
    Effect::new(move |_| {
        if let Some(id) = store.location() {
            replace_path(&location_path(&id));
        }
    });

    let project_name = move || {
        store
            .current_project()
            .map(|project| project.name_untracked())
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen bg-background">
            <header class="flex items-center gap-3 border-b px-4 py-2">
                <div class="text-sm font-medium text-foreground">{project_name}</div>
                <PageList store=store />
            </header>
        </div>
    }
}
