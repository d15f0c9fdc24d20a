// web_app/components/product.rs - Product display and form components
//
// Components for products including:
// - ProductTable: One row per product with edit/delete buttons
// - EmptyStateNotice: Message shown instead of an empty table
// - ProductFormFields: The five inputs shared by the add and edit dialogs
// - LocationCard: Result of a single-SKU lookup
//
// All product text is passed to the view as text nodes and attribute
// values, which Leptos escapes.

use leptos::prelude::*;

use super::common::TextInput;
use crate::web_app::admin::ProductForm;
use crate::web_app::view::{EmptyState, ProductRow};

/// Input signals of an add or edit form
#[derive(Clone, Copy)]
pub struct ProductFormSignals {
    pub sku: RwSignal<String>,
    pub name: RwSignal<String>,
    pub display_case: RwSignal<String>,
    pub column: RwSignal<String>,
    pub row: RwSignal<String>,
}

impl ProductFormSignals {
    pub fn new() -> Self {
        Self {
            sku: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            display_case: RwSignal::new(String::new()),
            column: RwSignal::new(String::new()),
            row: RwSignal::new(String::new()),
        }
    }

    /// Current contents as a form
    pub fn snapshot(&self) -> ProductForm {
        ProductForm {
            sku: self.sku.get_untracked(),
            name: self.name.get_untracked(),
            display_case: self.display_case.get_untracked(),
            column: self.column.get_untracked(),
            row: self.row.get_untracked(),
        }
    }

    pub fn fill(&self, form: &ProductForm) {
        self.sku.set(form.sku.clone());
        self.name.set(form.name.clone());
        self.display_case.set(form.display_case.clone());
        self.column.set(form.column.clone());
        self.row.set(form.row.clone());
    }

    pub fn reset(&self) {
        self.fill(&ProductForm::default());
    }
}

impl Default for ProductFormSignals {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ProductFormFields(fields: ProductFormSignals) -> impl IntoView {
    view! {
        <TextInput value=fields.sku label="SKU" />
        <TextInput value=fields.name label="Name" />
        <TextInput value=fields.display_case label="Display case" placeholder="I, II, III..." />
        <div class="grid grid-cols-2 gap-4">
            <TextInput value=fields.column label="Column" input_type="number" />
            <TextInput value=fields.row label="Row" input_type="number" />
        </div>
    }
}

/// Product table
///
/// The edit and delete buttons hand their row back to the page and stay
/// disabled while `busy`.
#[component]
pub fn ProductTable(
    rows: Vec<ProductRow>,
    on_edit: Callback<ProductRow>,
    on_delete: Callback<ProductRow>,
    #[prop(into, default = Signal::stored(false))]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-gray-200">
            <thead class="bg-gray-50">
                <tr>
                    <th class="px-4 py-2 text-left text-xs font-semibold text-gray-500 uppercase">"SKU"</th>
                    <th class="px-4 py-2 text-left text-xs font-semibold text-gray-500 uppercase">"Name"</th>
                    <th class="px-4 py-2 text-left text-xs font-semibold text-gray-500 uppercase">"Display case"</th>
                    <th class="px-4 py-2 text-left text-xs font-semibold text-gray-500 uppercase">"Row"</th>
                    <th class="px-4 py-2 text-left text-xs font-semibold text-gray-500 uppercase">"Column"</th>
                    <th class="px-4 py-2"></th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-100">
                {rows.into_iter().map(|row| {
                    let edit_row = row.clone();
                    let delete_row = row.clone();
                    view! {
                        <tr data-id=row.id.to_string()>
                            <td class="px-4 py-2 font-mono">{row.sku}</td>
                            <td class="px-4 py-2">{row.name}</td>
                            <td class="px-4 py-2">{row.display_case}</td>
                            <td class="px-4 py-2">{row.row}</td>
                            <td class="px-4 py-2">{row.column}</td>
                            <td class="px-4 py-2 text-right whitespace-nowrap">
                                <button
                                    type="button"
                                    title="Edit"
                                    disabled=move || busy.get()
                                    class="px-2 py-1 text-sm bg-blue-600 text-white rounded mr-2 disabled:bg-gray-400"
                                    on:click=move |_| on_edit.run(edit_row.clone())
                                >
                                    "Edit"
                                </button>
                                <button
                                    type="button"
                                    title="Delete"
                                    disabled=move || busy.get()
                                    class="px-2 py-1 text-sm bg-red-600 text-white rounded disabled:bg-gray-400"
                                    on:click=move |_| on_delete.run(delete_row.clone())
                                >
                                    "Delete"
                                </button>
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn EmptyStateNotice(empty: EmptyState) -> impl IntoView {
    view! {
        <div class="bg-blue-50 border border-blue-100 text-blue-800 rounded-xl p-6 text-center">
            {empty.message()}
        </div>
    }
}

/// Lookup result card
#[component]
pub fn LocationCard(row: ProductRow) -> impl IntoView {
    let location = row.location();
    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6">
            <p class="text-sm text-gray-500">"SKU"</p>
            <p class="text-2xl font-bold font-mono mb-2">{row.sku}</p>
            <p class="text-gray-700 mb-4">{row.name}</p>
            <p class="text-lg font-semibold text-blue-700">{location}</p>
        </div>
    }
}
