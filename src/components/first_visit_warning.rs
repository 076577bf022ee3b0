use leptos::prelude::*;

use super::icons::AlertTriangle;
use super::{lock_body_scroll, unlock_body_scroll};

/// One-time dialog shown the first time a visitor reaches a download page.
/// Dismissing it persists; it never reappears on the same browser.
#[component]
pub fn FirstVisitWarning(on_dismiss: Callback<()>) -> impl IntoView {
    lock_body_scroll();
    on_cleanup(unlock_body_scroll);

    view! {
        <div class="fixed inset-0 z-50 bg-slate-950/90 backdrop-blur-sm flex items-center justify-center p-6">
            <div class="bg-slate-900 border border-red-800/50 rounded-2xl max-w-lg w-full p-8 text-center">
                <AlertTriangle class="w-12 h-12 text-red-400 mx-auto mb-4" />
                <h3 class="text-xl font-bold text-white mb-4">"Before you flash"</h3>
                <p class="text-slate-400 leading-relaxed mb-8">
                    "Flashing a custom ROM wipes your device and can brick it if done "
                    "wrong. Read the flashing instructions for your device carefully and "
                    "back up your data first. We are not responsible for thermonuclear "
                    "war, your alarm not going off, or bricked devices."
                </p>
                <button
                    on:click=move |_| on_dismiss.run(())
                    class="px-8 py-3 bg-white text-black font-bold rounded-full hover:bg-slate-200 transition-colors"
                >
                    "Got it"
                </button>
            </div>
        </div>
    }
}
