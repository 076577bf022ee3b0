use evox_data::endpoints;
use leptos::prelude::*;

use super::icons::Close;
use super::{lock_body_scroll, unlock_body_scroll};
use crate::fetch::fetch_text_optional;

/// Full-screen overlay showing the plain-text changelog for one
/// device/branch pair. Fetches on mount and locks body scroll while open.
#[component]
pub fn ChangelogPanel(
    branch: String,
    codename: String,
    version: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let (content, set_content) = signal(None::<String>);
    let (loading, set_loading) = signal(true);

    lock_body_scroll();
    on_cleanup(unlock_body_scroll);

    let url = endpoints::changelog_url(&branch, &codename);
    Effect::new(move || {
        let url = url.clone();
        leptos::task::spawn_local(async move {
            set_content.set(fetch_text_optional(&url).await);
            set_loading.set(false);
        });
    });

    view! {
        <div class="fixed inset-0 z-50 bg-slate-950/90 backdrop-blur-sm flex items-center justify-center p-6">
            <div class="bg-slate-900 border border-slate-800 rounded-2xl max-w-3xl w-full max-h-[80vh] flex flex-col">
                <div class="flex justify-between items-center px-6 py-4 border-b border-slate-800">
                    <h3 class="text-lg font-bold text-white">
                        "Changelog \u{2022} " {version}
                    </h3>
                    <button
                        on:click=move |_| on_close.run(())
                        class="text-slate-400 hover:text-white transition-colors"
                    >
                        <Close class="w-5 h-5" />
                    </button>
                </div>
                <div class="p-6 overflow-y-auto">
                    {move || {
                        if loading.get() {
                            view! { <p class="text-slate-400">"Loading changelog..."</p> }.into_any()
                        } else {
                            match content.get() {
                                Some(text) => view! {
                                    <pre class="text-sm font-mono text-slate-300 whitespace-pre-wrap">{text}</pre>
                                }.into_any(),
                                None => view! {
                                    <p class="text-slate-400">"No changelog available for this build."</p>
                                }.into_any(),
                            }
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
