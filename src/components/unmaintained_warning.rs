use leptos::prelude::*;

use super::icons::AlertTriangle;
use super::{lock_body_scroll, unlock_body_scroll};

/// Modal gate shown before downloading a build whose maintainer has
/// stepped away. `on_acknowledge` fires once the visitor accepts; the
/// caller persists the acknowledgement and starts the download.
#[component]
pub fn UnmaintainedWarning(on_acknowledge: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    lock_body_scroll();
    on_cleanup(unlock_body_scroll);

    view! {
        <div class="fixed inset-0 z-50 bg-slate-950/90 backdrop-blur-sm flex items-center justify-center p-6">
            <div class="bg-slate-900 border border-amber-700/50 rounded-2xl max-w-lg w-full p-8 text-center">
                <AlertTriangle class="w-12 h-12 text-amber-400 mx-auto mb-4" />
                <h3 class="text-xl font-bold text-white mb-4">"Unmaintained Build"</h3>
                <p class="text-slate-400 leading-relaxed mb-8">
                    "This build is no longer maintained. It will not receive updates or "
                    "security patches, and issues you hit will not be fixed. Flash it at "
                    "your own risk."
                </p>
                <div class="flex justify-center gap-4">
                    <button
                        on:click=move |_| on_close.run(())
                        class="px-6 py-2 bg-slate-800 text-white font-bold rounded-full border border-slate-700 hover:bg-slate-700 transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        on:click=move |_| on_acknowledge.run(())
                        class="px-6 py-2 bg-amber-600 text-white font-bold rounded-full hover:bg-amber-500 transition-colors"
                    >
                        "I understand, download"
                    </button>
                </div>
            </div>
        </div>
    }
}
