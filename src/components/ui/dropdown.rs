use icons::ChevronDown;
use leptos::html;
use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::*;

use crate::components::hooks::use_random::use_random_id_for;

mod components {
    use super::*;
    clx! {DropdownItem, li, "inline-flex gap-2 items-center w-full rounded-sm px-2 py-1.5 text-sm no-underline transition-colors duration-200 text-popover-foreground hover:bg-accent hover:text-accent-foreground"}
}

pub use components::*;

/* ========================================================== */
/*                     ✨ DROPDOWN ✨                         */
/* ========================================================== */

/// Dropdown whose open state is owned by the caller.
///
/// Children stay mounted while closed so item state survives toggling.
#[component]
pub fn Dropdown(
    children: Children,
    #[prop(into)] label: Signal<String>,
    #[prop(into)] open: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let content_id = use_random_id_for("dropdown");
    let state = move || if open.get() { "open" } else { "closed" };

    let class = tw_merge!("group relative inline-block", class);

    view! {
        <div data-name="Dropdown" class=class data-state=state>
            <button
                type="button"
                data-name="DropdownTrigger"
                class="px-4 py-2 h-9 inline-flex gap-2 items-center text-sm font-medium whitespace-nowrap rounded-md border bg-background border-input transition-colors hover:bg-accent hover:text-accent-foreground focus:outline-none focus-visible:ring-1 focus-visible:ring-ring"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                aria-controls=content_id.clone()
                on:click=move |_| on_toggle.run(())
            >
                <span class="truncate min-w-[4rem] text-left">{move || label.get()}</span>
                <ChevronDown class="size-4 opacity-70 transition-transform group-data-[state=open]:rotate-180" />
            </button>

            <ul
                id=content_id
                role="menu"
                data-name="DropdownContent"
                data-state=state
                class="absolute z-50 mt-1.5 w-[200px] p-1 rounded-md border bg-card shadow-md data-[state=closed]:hidden"
            >
                {children()}
            </ul>
        </div>
    }
}

/* ========================================================== */
/*                  ✨ EDITABLE LINK ITEM ✨                  */
/* ========================================================== */

/// Dropdown entry that shows a link, or a text input while `editable`.
#[component]
pub fn DropdownItemEditableLink(
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] editable: Signal<bool>,
    #[prop(into)] error: Signal<bool>,
    #[prop(into)] focused: Signal<bool>,
    on_click: Callback<web_sys::MouseEvent>,
    on_double_click: Callback<web_sys::MouseEvent>,
    on_change: Callback<String>,
    on_blur: Callback<()>,
    on_key_down: Callback<web_sys::KeyboardEvent>,
) -> impl IntoView {
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    Effect::new(move |_| {
        if focused.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    let input_class = move || {
        let state_class = if error.get() {
            "border-destructive ring-destructive/20 focus-visible:border-destructive focus-visible:ring-destructive/40"
        } else {
            ""
        };
        tw_merge!(
            "h-7 w-full min-w-0 rounded-md border border-input bg-transparent px-2 py-1 text-sm shadow-xs outline-none focus-visible:border-ring focus-visible:ring-2 focus-visible:ring-ring/50",
            state_class
        )
    };

    view! {
        <DropdownItem attr:role="menuitem">
            {move || {
                if editable.get() {
                    view! {
                        <input
                            node_ref=input_ref
                            type="text"
                            class=input_class
                            aria-invalid=move || error.get().to_string()
                            prop:value=move || value.get()
                            on:input=move |ev| on_change.run(event_target_value(&ev))
                            on:blur=move |_| on_blur.run(())
                            on:keydown=move |ev: web_sys::KeyboardEvent| on_key_down.run(ev)
                        />
                    }
                        .into_any()
                } else {
                    view! {
                        <a
                            href="#"
                            class="w-full truncate no-underline text-inherit"
                            on:click=move |ev: web_sys::MouseEvent| on_click.run(ev)
                            on:dblclick=move |ev: web_sys::MouseEvent| on_double_click.run(ev)
                        >
                            {name.clone()}
                        </a>
                    }
                        .into_any()
                }
            }}
        </DropdownItem>
    }
}
