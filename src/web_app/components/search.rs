// web_app/components/search.rs - Search and paging components
//
// - SearchBar: Input field that searches on button click or Enter
// - ListSummaryLine: "Showing x to y of z products"
// - PaginationControls: Previous, up to five page links, Next

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::view::{ListSummary, PaginationView};

/// Search bar component
///
/// Keeps the typed text locally and hands the term to `on_search` when
/// the button is clicked or Enter is pressed.
#[component]
pub fn SearchBar(
    /// Callback receiving the raw search term
    on_search: Callback<String>,
) -> impl IntoView {
    let local_query = RwSignal::new(String::new());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_search.run(local_query.get_untracked());
        }
    };

    view! {
        <div class="flex gap-4">
            <input
                type="text"
                placeholder="Search by SKU or name..."
                class="flex-1 px-4 py-2 border-2 border-gray-200 rounded-xl \
                       focus:ring-4 focus:ring-blue-100 focus:border-blue-500 outline-none"
                prop:value=move || local_query.get()
                on:input=move |ev| local_query.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                type="button"
                class="px-6 py-2 bg-blue-600 text-white rounded-xl hover:bg-blue-700 font-semibold"
                on:click=move |_| on_search.run(local_query.get_untracked())
            >
                "Search"
            </button>
        </div>
    }
}

#[component]
pub fn ListSummaryLine(summary: ListSummary) -> impl IntoView {
    view! {
        <p class="text-sm text-gray-600">{summary.to_string()}</p>
    }
}

/// Class of a page item
pub fn page_item_class(active: bool, disabled: bool) -> &'static str {
    if disabled {
        "px-3 py-1 rounded-lg text-gray-300 cursor-not-allowed"
    } else if active {
        "px-3 py-1 rounded-lg bg-blue-600 text-white"
    } else {
        "px-3 py-1 rounded-lg text-blue-600 hover:bg-blue-50 cursor-pointer"
    }
}

/// Pagination component
///
/// Renders a `PaginationView`; disabled controls never call `on_page`.
#[component]
pub fn PaginationControls(
    pagination: PaginationView,
    /// Called with the page number to show
    on_page: Callback<u32>,
) -> impl IntoView {
    let previous = pagination.previous;
    let next = pagination.next;

    view! {
        <nav aria-label="Product pages">
            <ul class="flex items-center gap-1">
                <li>
                    <a
                        href="#"
                        aria-label="Previous"
                        class=page_item_class(false, previous.disabled)
                        on:click=move |ev| {
                            ev.prevent_default();
                            if !previous.disabled {
                                on_page.run(previous.target);
                            }
                        }
                    >
                        "«"
                    </a>
                </li>

                {pagination.pages.into_iter().map(|link| view! {
                    <li>
                        <a
                            href="#"
                            class=page_item_class(link.active, false)
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_page.run(link.number);
                            }
                        >
                            {link.number}
                        </a>
                    </li>
                }).collect_view()}

                <li>
                    <a
                        href="#"
                        aria-label="Next"
                        class=page_item_class(false, next.disabled)
                        on:click=move |ev| {
                            ev.prevent_default();
                            if !next.disabled {
                                on_page.run(next.target);
                            }
                        }
                    >
                        "»"
                    </a>
                </li>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_item_class_priority() {
        // A disabled control never looks active
        assert!(page_item_class(true, true).contains("cursor-not-allowed"));
        assert!(page_item_class(true, false).contains("bg-blue-600"));
        assert!(page_item_class(false, false).contains("hover:bg-blue-50"));
    }
}
