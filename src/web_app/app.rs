// web_app/app.rs - Root application component
//
// Sets up the document title, the top navigation and the two routes:
// - /          SKU lookup
// - /products  Product administration

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{LookupPage, ProductsPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Inventory Admin" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Router>
            <nav class="bg-white border-b border-gray-200">
                <div class="max-w-6xl mx-auto px-4 py-3 flex gap-6">
                    <A href="/">"Lookup"</A>
                    <A href="/products">"Products"</A>
                </div>
            </nav>
            <main class="min-h-screen bg-gray-50">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LookupPage />
                    <Route path=path!("/products") view=ProductsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Unknown path: point back at the two real screens
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="max-w-md mx-auto py-24 text-center space-y-4">
            <p class="text-sm uppercase tracking-wide text-gray-400">"Nothing here"</p>
            <p class="text-gray-600">"That page does not exist."</p>
            <p class="space-x-4">
                <a class="text-blue-600 underline" href="/">"Find a product"</a>
                <a class="text-blue-600 underline" href="/products">"Manage products"</a>
            </p>
        </section>
    }
}
