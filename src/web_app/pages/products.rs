// web_app/pages/products.rs - Product administration page
//
// Owns the AdminState signal and wires every button to a controller
// handler. Handlers run on a copy of the state inside `spawn_local`. When
// one finishes, the parts it changed are merged into the live state (so
// dialogs opened in the meantime survive) and any error is shown as an
// alert.

use std::future::Future;
use std::rc::Rc;

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::browser_admin;
use crate::web_app::admin::{AdminResult, AdminState, EditForm, Modal, ProductAdmin};
use crate::web_app::api::HttpProductApi;
use crate::web_app::components::*;
use crate::web_app::view::ProductRow;

type Admin = ProductAdmin<HttpProductApi>;

/// Run one handler and merge its outcome. `pending` counts handlers
/// still running.
fn dispatch<F, Fut>(
    admin: Rc<Admin>,
    state: RwSignal<AdminState>,
    pending: RwSignal<u32>,
    handler: F,
) where
    F: FnOnce(Rc<Admin>, AdminState) -> Fut + 'static,
    Fut: Future<Output = (AdminState, AdminResult<()>)> + 'static,
{
    pending.update(|n| *n += 1);
    spawn_local(async move {
        let before = state.get_untracked();
        let (after, result) = handler(admin, before.clone()).await;
        state.update(|live| live.merge_outcome(&before, after));
        pending.update(|n| *n = n.saturating_sub(1));
        if let Err(e) = result {
            alert(&e.to_string());
        }
    });
}

/// Product administration page component
///
/// Orchestrates:
/// - Search bar
/// - Product table with edit/delete buttons
/// - Summary and pagination
/// - Add, edit, delete-confirmation and CSV upload dialogs
#[component]
pub fn ProductsPage() -> impl IntoView {
    let (config, admin) = browser_admin();
    let admin = StoredValue::new_local(Rc::new(admin));

    let state = RwSignal::new(AdminState::new(config.items_per_page));
    let pending = RwSignal::new(0u32);
    let busy = Signal::derive(move || pending.get() > 0);

    let add_fields = ProductFormSignals::new();
    let edit_fields = ProductFormSignals::new();
    let file_input: NodeRef<Input> = NodeRef::new();

    // Only re-render a region when its own slice of the state changes
    let listing = Memo::new(move |_| state.with(|s| s.listing.clone()));
    let modal = Memo::new(move |_| state.with(|s| s.modal.clone()));
    let csv_result = Memo::new(move |_| state.with(|s| s.csv_result.clone()));

    // Initial load
    dispatch(admin.get_value(), state, pending, |admin, mut st| async move {
        let result = admin.load_products(&mut st).await;
        (st, result)
    });

    let on_search = Callback::new(move |term: String| {
        dispatch(admin.get_value(), state, pending, move |admin, mut st| async move {
            let result = admin.search(&mut st, &term).await;
            (st, result)
        });
    });

    let on_page = Callback::new(move |page: u32| {
        dispatch(admin.get_value(), state, pending, move |admin, mut st| async move {
            let result = admin.go_to_page(&mut st, page).await.map(|_| ());
            (st, result)
        });
    });

    let on_close = Callback::new(move |()| {
        state.update(|s| s.close_modal());
        add_fields.reset();
    });

    let on_open_add = Callback::new(move |()| {
        add_fields.reset();
        state.update(|s| s.open_add());
    });

    let on_open_upload = Callback::new(move |()| {
        state.update(|s| s.open_upload());
    });

    let on_edit = Callback::new(move |row: ProductRow| {
        edit_fields.fill(&EditForm::from(&row).form);
        state.update(|s| s.open_edit(&row));
    });

    let on_delete = Callback::new(move |row: ProductRow| {
        state.update(|s| s.open_delete(&row));
    });

    let on_save = Callback::new(move |()| {
        let form = add_fields.snapshot();
        dispatch(admin.get_value(), state, pending, move |admin, mut st| async move {
            let result = admin.create_product(&mut st, &form).await;
            if result.is_ok() {
                add_fields.reset();
            }
            (st, result)
        });
    });

    let on_update = Callback::new(move |()| {
        let Some(Modal::EditProduct(edit)) = state.with_untracked(|s| s.modal.clone()) else {
            return;
        };
        let edit = EditForm {
            form: edit_fields.snapshot(),
            ..edit
        };
        dispatch(admin.get_value(), state, pending, move |admin, mut st| async move {
            let result = admin.update_product(&mut st, &edit).await;
            (st, result)
        });
    });

    let on_confirm_delete = Callback::new(move |()| {
        dispatch(admin.get_value(), state, pending, |admin, mut st| async move {
            let result = admin.confirm_delete(&mut st).await;
            (st, result)
        });
    });

    let on_upload = Callback::new(move |()| {
        dispatch(admin.get_value(), state, pending, move |admin, mut st| async move {
            let result = match read_selected_file(file_input).await {
                Ok(upload) => admin.upload_csv(&mut st, upload).await,
                Err(e) => Err(e),
            };
            (st, result)
        });
    });

    view! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Products"</h1>
                <div class="flex gap-2">
                    <Button on_click=on_open_add disabled=busy>"Add product"</Button>
                    <Button variant="secondary" on_click=on_open_upload disabled=busy>"Upload CSV"</Button>
                </div>
            </div>

            <section class="bg-white rounded-2xl shadow-sm p-6 mb-6 border border-gray-100">
                <SearchBar on_search=on_search />
            </section>

            <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                {move || match listing.get() {
                    None => view! { <Loading message="Loading products..." /> }.into_any(),
                    Some(listing) => match listing.empty {
                        Some(empty) => view! { <EmptyStateNotice empty=empty /> }.into_any(),
                        None => {
                            let summary = listing.summary;
                            let pagination = listing.pagination;
                            view! {
                                <div class="overflow-x-auto">
                                    <ProductTable rows=listing.rows on_edit=on_edit on_delete=on_delete busy=busy />
                                </div>
                                <div class="flex flex-wrap items-center justify-between gap-4 mt-4">
                                    {summary.map(|summary| view! { <ListSummaryLine summary=summary /> })}
                                    {pagination.map(|pagination| view! {
                                        <PaginationControls pagination=pagination on_page=on_page />
                                    })}
                                </div>
                            }.into_any()
                        }
                    },
                }}
            </section>

            {move || modal.get().map(|modal| match modal {
                Modal::AddProduct => view! {
                    <Dialog heading="Add product" on_close=on_close>
                        <ProductFormFields fields=add_fields />
                        <div class="flex justify-end gap-2">
                            <Button variant="secondary" on_click=on_close>"Cancel"</Button>
                            <Button on_click=on_save disabled=busy>"Save"</Button>
                        </div>
                    </Dialog>
                }.into_any(),
                Modal::EditProduct(_) => view! {
                    <Dialog heading="Edit product" on_close=on_close>
                        <ProductFormFields fields=edit_fields />
                        <div class="flex justify-end gap-2">
                            <Button variant="secondary" on_click=on_close>"Cancel"</Button>
                            <Button on_click=on_update disabled=busy>"Update"</Button>
                        </div>
                    </Dialog>
                }.into_any(),
                Modal::ConfirmDelete(target) => view! {
                    <Dialog heading="Delete product" on_close=on_close>
                        <p class="mb-6 text-gray-700">
                            "Delete the product with SKU "
                            <strong class="font-mono">{target.sku}</strong>
                            "? This cannot be undone."
                        </p>
                        <div class="flex justify-end gap-2">
                            <Button variant="secondary" on_click=on_close>"Cancel"</Button>
                            <Button variant="danger" on_click=on_confirm_delete disabled=busy>"Delete"</Button>
                        </div>
                    </Dialog>
                }.into_any(),
                Modal::UploadCsv => view! {
                    <Dialog heading="Upload CSV" on_close=on_close>
                        <CsvUploadForm file_input=file_input on_upload=on_upload busy=busy />
                        {move || csv_result.get().map(|result| view! { <CsvResults result=result /> })}
                    </Dialog>
                }.into_any(),
            })}
        </div>
    }
}
