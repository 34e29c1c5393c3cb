//! Leptos Pagination Kit
//!
//! Stateless pagination building blocks plus a ready-made `PageNavigator`.
//! All state is owned by the caller; components only report clicks.

mod model;

use leptos::prelude::*;

pub use model::{EllipsisSide, PageSlot, PaginationState};

/// Navigation landmark wrapping the whole control
#[component]
pub fn Pagination(children: Children) -> impl IntoView {
    view! {
        <nav role="navigation" aria-label="pagination" class="pagination">
            {children()}
        </nav>
    }
}

/// Horizontal list holding the pagination items
#[component]
pub fn PaginationContent(children: Children) -> impl IntoView {
    view! {
        <ul class="pagination-content">{children()}</ul>
    }
}

#[component]
pub fn PaginationItem(
    #[prop(into)] is_active: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <li class="pagination-item" class:active=move || is_active.get()>
            {children()}
        </li>
    }
}

/// Clickable page link
///
/// A disabled link is announced with `aria-disabled`, removed from the tab
/// order, and never runs `on_click`.
#[component]
pub fn PaginationLink(
    #[prop(into)] is_active: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional, into)] variant_class: String,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href="#"
            class=format!("pagination-link {}", variant_class)
            class:active=move || is_active.get()
            class:disabled=move || disabled.get()
            aria-label=aria_label
            aria-current=move || is_active.get().then_some("page")
            aria-disabled=move || disabled.get().to_string()
            tabindex=move || disabled.get().then_some("-1")
            on:click=move |ev| {
                ev.prevent_default();
                if !disabled.get_untracked() {
                    on_click.run(());
                }
            }
        >
            {children()}
        </a>
    }
}

#[component]
pub fn PaginationPrevious(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <PaginationLink
            is_active=Signal::derive(|| false)
            disabled=disabled
            on_click=on_click
            variant_class="pagination-previous"
            aria_label="Go to previous page"
        >
            <span aria-hidden="true">"‹"</span>
            <span>"Previous"</span>
        </PaginationLink>
    }
}

#[component]
pub fn PaginationNext(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <PaginationLink
            is_active=Signal::derive(|| false)
            disabled=disabled
            on_click=on_click
            variant_class="pagination-next"
            aria_label="Go to next page"
        >
            <span>"Next"</span>
            <span aria-hidden="true">"›"</span>
        </PaginationLink>
    }
}

#[component]
pub fn PaginationEllipsis() -> impl IntoView {
    view! {
        <span class="pagination-ellipsis" aria-hidden="true">
            "…"
            <span class="sr-only">"More pages"</span>
        </span>
    }
}

/// Previous / page numbers / next, driven entirely by the caller
///
/// # Arguments
/// * `current` - 1-based current page
/// * `total` - page count
/// * `window` - pages shown around the current one; `None` shows all
/// * `on_select` - receives the target page of every enabled click
#[component]
pub fn PageNavigator(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    #[prop(default = None)] window: Option<u32>,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    let state = Memo::new(move |_| PaginationState::new(current.get(), total.get()));

    let on_previous = Callback::new(move |_: ()| {
        if let Some(page) = state.get_untracked().prev_target() {
            on_select.run(page);
        }
    });
    let on_next = Callback::new(move |_: ()| {
        if let Some(page) = state.get_untracked().next_target() {
            on_select.run(page);
        }
    });

    view! {
        <Pagination>
            <PaginationContent>
                <PaginationItem is_active=Signal::derive(|| false)>
                    <PaginationPrevious
                        disabled=Signal::derive(move || state.get().prev_disabled())
                        on_click=on_previous
                    />
                </PaginationItem>
                <For
                    each=move || state.get().slots(window)
                    key=|slot| *slot
                    children=move |slot| {
                        match slot {
                            PageSlot::Page(page) => {
                                let is_active = Signal::derive(move || state.get().is_current(page));
                                view! {
                                    <PaginationItem is_active=is_active>
                                        <PaginationLink
                                            is_active=is_active
                                            disabled=Signal::derive(|| false)
                                            on_click=Callback::new(move |_: ()| on_select.run(page))
                                        >
                                            {page}
                                        </PaginationLink>
                                    </PaginationItem>
                                }.into_any()
                            }
                            PageSlot::Ellipsis(_) => view! {
                                <PaginationItem is_active=Signal::derive(|| false)>
                                    <PaginationEllipsis />
                                </PaginationItem>
                            }.into_any(),
                        }
                    }
                />
                <PaginationItem is_active=Signal::derive(|| false)>
                    <PaginationNext
                        disabled=Signal::derive(move || state.get().next_disabled())
                        on_click=on_next
                    />
                </PaginationItem>
            </PaginationContent>
        </Pagination>
    }
}
