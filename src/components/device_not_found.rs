use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback when the requested codename is not in the device catalog.
#[component]
pub fn DeviceNotFound(codename: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-32 text-center px-6">
            <h2 class="text-3xl font-bold text-white mb-4">"Device not found"</h2>
            <p class="text-slate-400 mb-8">
                "No device with codename \"" {codename} "\" is supported."
            </p>
            <A
                href="/downloads"
                attr:class="px-8 py-3 bg-slate-800 text-white font-bold rounded-full border border-slate-700 hover:bg-slate-700 transition-colors"
            >
                "Back to Downloads"
            </A>
        </div>
    }
}
