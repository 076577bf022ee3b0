use leptos::prelude::*;

/// Centered spinner shown while page data loads.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-32">
            <div class="w-10 h-10 border-4 border-slate-700 border-t-blue-400 rounded-full animate-spin"></div>
            <p class="text-slate-400 mt-4">"Loading..."</p>
        </div>
    }
}
