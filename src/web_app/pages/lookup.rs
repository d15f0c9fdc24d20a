// web_app/pages/lookup.rs - SKU lookup page
//
// Staff type a SKU and see the display case, column and row it is kept in.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::KeyboardEvent;

use super::browser_admin;
use crate::web_app::components::{alert, LocationCard};
use crate::web_app::model::normalize_sku;
use crate::web_app::view::ProductRow;

/// Result of the last lookup
#[derive(Clone, Debug, PartialEq)]
enum LookupOutcome {
    Found(ProductRow),
    NotFound(String),
}

#[component]
pub fn LookupPage() -> impl IntoView {
    let (_, admin) = browser_admin();
    let admin = StoredValue::new_local(Rc::new(admin));

    let sku = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<LookupOutcome>);
    let searching = RwSignal::new(false);

    let run_lookup = move || {
        let raw = sku.get_untracked();
        let admin = admin.get_value();
        searching.set(true);
        spawn_local(async move {
            match admin.lookup_sku(&raw).await {
                Ok(Some(row)) => outcome.set(Some(LookupOutcome::Found(row))),
                Ok(None) => outcome.set(Some(LookupOutcome::NotFound(normalize_sku(&raw)))),
                Err(e) => {
                    outcome.set(None);
                    alert(&e.to_string());
                }
            }
            searching.set(false);
        });
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            run_lookup();
        }
    };

    view! {
        <div class="max-w-xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">"Find a product"</h1>
            <p class="text-gray-500 mb-8">"Enter a SKU to see where it is displayed."</p>

            <div class="flex gap-3 mb-8">
                <input
                    type="text"
                    placeholder="SKU"
                    class="flex-1 px-4 py-3 text-lg font-mono border-2 border-gray-200 rounded-xl \
                           focus:ring-4 focus:ring-blue-100 focus:border-blue-500 outline-none"
                    prop:value=move || sku.get()
                    on:input=move |ev| sku.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    type="button"
                    class="px-6 py-3 bg-blue-600 text-white rounded-xl hover:bg-blue-700 \
                           font-semibold disabled:bg-gray-400"
                    disabled=move || searching.get()
                    on:click=move |_| run_lookup()
                >
                    "Find"
                </button>
            </div>

            {move || outcome.get().map(|outcome| match outcome {
                LookupOutcome::Found(row) => view! { <LocationCard row=row /> }.into_any(),
                LookupOutcome::NotFound(sku) => view! {
                    <div class="bg-yellow-50 border border-yellow-200 text-yellow-800 rounded-xl p-6">
                        "No product with SKU "
                        <span class="font-mono font-semibold">{sku}</span>
                        " was found."
                    </div>
                }.into_any(),
            })}
        </div>
    }
}
