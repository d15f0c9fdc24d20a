// web_app/components/common.rs - Building blocks shared by the admin pages
//
// Alerts, buttons, the dialog frame and labelled inputs. None of these
// hold state of their own beyond what is passed in.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

/// Blocking browser alert, used for every error the controller reports
pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        tracing::error!("Could not show alert: {}", message);
    }
}

/// Placeholder shown until the first list reply arrives
#[component]
pub fn Loading(#[prop(default = "Loading...")] message: &'static str) -> impl IntoView {
    view! {
        <p class="py-10 text-center text-gray-400 italic" aria-busy="true">{message}</p>
    }
}

/// Class list for a button variant
pub fn button_class(variant: &str) -> &'static str {
    match variant {
        "danger" => "px-4 py-2 rounded-lg font-medium text-white bg-red-600 hover:bg-red-700 \
                     disabled:bg-red-300 disabled:cursor-wait",
        "secondary" => "px-4 py-2 rounded-lg font-medium text-gray-700 bg-white border \
                        border-gray-300 hover:bg-gray-100",
        _ => "px-4 py-2 rounded-lg font-medium text-white bg-blue-600 hover:bg-blue-700 \
              disabled:bg-blue-300 disabled:cursor-wait",
    }
}

/// `variant` is one of "primary", "secondary" or "danger"
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] on_click: Option<Callback<()>>,
    /// Kept disabled while a request is in flight
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(default = "primary")] variant: &'static str,
) -> impl IntoView {
    let click = move |_| {
        if let Some(on_click) = on_click {
            on_click.run(());
        }
    };

    view! {
        <button type="button" class=button_class(variant) disabled=move || disabled.get() on:click=click>
            {children()}
        </button>
    }
}

/// Dialog frame for the add, edit, delete and upload steps
///
/// Escape, the backdrop and the header's close button all call
/// `on_close`; whether the dialog is mounted at all is up to the page.
#[component]
pub fn Dialog(
    children: Children,
    on_close: Callback<()>,
    heading: &'static str,
) -> impl IntoView {
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div class="fixed inset-0 z-40 bg-black/50" on:click=move |_| on_close.run(())></div>
        <section
            role="dialog"
            aria-modal="true"
            aria-label=heading
            tabindex="-1"
            class="fixed z-50 top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 \
                   w-[min(32rem,92vw)] bg-white rounded-xl shadow-xl"
            on:keydown=on_keydown
        >
            <header class="flex items-center justify-between border-b px-5 py-3">
                <h2 class="text-lg font-semibold">{heading}</h2>
                <button
                    type="button"
                    aria-label="Close"
                    class="text-2xl leading-none text-gray-400 hover:text-gray-700"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
            </header>
            <div class="px-5 py-4">{children()}</div>
        </section>
    }
}

/// Labelled input bound to a string signal
#[component]
pub fn TextInput(
    value: RwSignal<String>,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block mb-3 text-sm text-gray-700">
            {label}
            <input
                class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 \
                       focus:border-blue-500 focus:outline-none"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_variants() {
        assert!(button_class("primary").contains("bg-blue-600"));
        assert!(button_class("danger").contains("bg-red-600"));
        assert!(button_class("secondary").contains("bg-white"));
        // Unknown variants fall back to primary
        assert_eq!(button_class("unknown"), button_class("primary"));
    }
}
