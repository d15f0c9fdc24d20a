// web_app/components/csv.rs - Bulk import components
//
// The page owns the file input's NodeRef so it can read the selected file
// when the upload button fires.

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::web_app::admin::{AdminError, AdminResult};
use crate::web_app::model::CsvUpload;
use crate::web_app::view::CsvResultView;

/// Read the first selected file of a file input. `Ok(None)` when nothing
/// is picked; a picked file that cannot be read is an error of its own.
pub async fn read_selected_file(file_input: NodeRef<Input>) -> AdminResult<Option<CsvUpload>> {
    let Some(file) = file_input
        .get_untracked()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
    else {
        return Ok(None);
    };

    match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => Ok(Some(CsvUpload {
            file_name: file.name(),
            contents: js_sys::Uint8Array::new(&buffer).to_vec(),
        })),
        Err(e) => {
            tracing::error!("Could not read {}: {:?}", file.name(), e);
            Err(AdminError::FileUnreadable(file.name()))
        }
    }
}

#[component]
pub fn CsvUploadForm(
    file_input: NodeRef<Input>,
    on_upload: Callback<()>,
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <p class="text-sm text-gray-600">
                "Columns: sku, display_case, column, row. The first line is treated as a header."
            </p>
            <input
                type="file"
                accept=".csv"
                node_ref=file_input
                class="block w-full text-sm text-gray-700"
            />
            <button
                type="button"
                class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:bg-gray-400"
                disabled=move || busy.get()
                on:click=move |_| on_upload.run(())
            >
                "Upload"
            </button>
        </div>
    }
}

/// Import summary with one list item per rejected row
#[component]
pub fn CsvResults(result: CsvResultView) -> impl IntoView {
    let show_errors = result.show_errors();
    let errors = result.errors;

    view! {
        <div class="mt-6 rounded-xl border border-gray-200 p-4">
            <p class="font-medium text-gray-800">{result.message}</p>
            {show_errors.then(|| view! {
                <div class="mt-3 bg-red-50 border border-red-200 rounded-lg p-3">
                    <p class="text-red-800 font-semibold mb-1">"Errors"</p>
                    <ul class="list-disc pl-5 text-sm text-red-700">
                        {errors.into_iter().map(|error| view! { <li>{error}</li> }).collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}
