use evox_data::endpoints;
use futures_util::future;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icons::{ChevronLeft, ChevronRight, Download};
use crate::fetch::fetch_json_optional;

/// Landing page: hero with the current release label, a short pitch, and a
/// screenshot carousel with manual navigation.
#[component]
pub fn Home() -> impl IntoView {
    let (latest_version, set_latest_version) = signal(None::<String>);
    let (screenshots, set_screenshots) = signal(Vec::<String>::new());
    let (current, set_current) = signal(0_usize);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let (latest, names) = future::join(
                fetch_json_optional::<serde_json::Value>(&endpoints::latest_version_url()),
                fetch_json_optional::<Vec<String>>(&endpoints::screenshots_url()),
            )
            .await;
            // `latestversion.json` is an object with a single version key.
            set_latest_version.set(latest.and_then(|value| {
                value
                    .as_object()
                    .and_then(|obj| obj.keys().next().cloned())
            }));
            set_screenshots.set(names.unwrap_or_default());
        });
    });

    let prev = move |_| {
        let len = screenshots.with(Vec::len);
        if len > 0 {
            set_current.update(|i| *i = (*i + len - 1) % len);
        }
    };
    let next = move |_| {
        let len = screenshots.with(Vec::len);
        if len > 0 {
            set_current.update(|i| *i = (*i + 1) % len);
        }
    };

    view! {
        <div class="space-y-24 pb-24 pt-16">
            // Hero Section
            <section class="pt-20 px-6 text-center relative overflow-hidden">
                <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-blue-600/10 blur-[120px] rounded-full pointer-events-none"></div>

                <div class="relative z-10 flex flex-col items-center">
                    <img src="/public/logo.svg" alt="Evolution X" class="w-24 h-24 mb-8" />

                    <h1 class="text-5xl md:text-7xl font-black text-white tracking-tight mb-6">
                        "Evolution "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-400">
                            "X"
                        </span>
                    </h1>

                    <p class="text-xl text-slate-400 max-w-2xl mx-auto mb-4 font-light leading-relaxed">
                        "A flashable custom Android ROM bringing a true Pixel feel to "
                        "your device, with the customization you have always wanted."
                    </p>

                    {move || latest_version.get().map(|version| view! {
                        <p class="text-sm text-blue-400 font-mono mb-8">
                            "Latest release: " {version}
                        </p>
                    })}

                    <div class="flex flex-wrap justify-center gap-4 mb-12">
                        <A
                            href="/downloads"
                            attr:class="px-8 py-3 bg-white text-black font-bold rounded-full hover:bg-slate-200 transition-colors flex items-center"
                        >
                            <Download class="w-5 h-5 mr-2" />
                            "Get Evolution X"
                        </A>
                        <a
                            href="https://github.com/Evolution-X"
                            target="_blank"
                            rel="noreferrer"
                            class="px-8 py-3 bg-slate-800 text-white font-bold rounded-full border border-slate-700 hover:bg-slate-700 transition-colors flex items-center"
                        >
                            "View Source"
                            <ChevronRight class="w-4 h-4 ml-1" />
                        </a>
                    </div>
                </div>
            </section>

            // Screenshot carousel
            <section class="px-6 max-w-4xl mx-auto">
                {move || {
                    let names = screenshots.get();
                    if names.is_empty() {
                        return ().into_any();
                    }
                    let index = current.get().min(names.len() - 1);
                    let name = names[index].clone();
                    view! {
                        <div class="text-center mb-8">
                            <h2 class="text-3xl font-bold text-white mb-4">"See it in action"</h2>
                        </div>
                        <div class="flex items-center justify-center gap-6">
                            <button
                                on:click=prev
                                class="text-slate-400 hover:text-white transition-colors"
                            >
                                <ChevronLeft class="w-8 h-8" />
                            </button>
                            <img
                                src=endpoints::screenshot_image_url(&name)
                                alt=name
                                class="max-h-[600px] rounded-2xl border border-slate-800"
                            />
                            <button
                                on:click=next
                                class="text-slate-400 hover:text-white transition-colors"
                            >
                                <ChevronRight class="w-8 h-8" />
                            </button>
                        </div>
                        <p class="text-center text-slate-500 text-sm mt-4">
                            {format!("{} / {}", index + 1, names.len())}
                        </p>
                    }
                    .into_any()
                }}
            </section>

            // Pitch
            <section class="px-6 max-w-6xl mx-auto">
                <div class="grid md:grid-cols-3 gap-8">
                    <div class="bg-slate-900/50 border border-slate-800 p-8 rounded-2xl hover:border-slate-700 transition-colors">
                        <h3 class="text-xl font-bold text-white mb-2">"Pixel feel"</h3>
                        <p class="text-slate-400 leading-relaxed">
                            "The Pixel experience on devices Google never shipped it to."
                        </p>
                    </div>
                    <div class="bg-slate-900/50 border border-slate-800 p-8 rounded-2xl hover:border-slate-700 transition-colors">
                        <h3 class="text-xl font-bold text-white mb-2">"Customization"</h3>
                        <p class="text-slate-400 leading-relaxed">
                            "Tune the statusbar, lockscreen, and themes to exactly your taste."
                        </p>
                    </div>
                    <div class="bg-slate-900/50 border border-slate-800 p-8 rounded-2xl hover:border-slate-700 transition-colors">
                        <h3 class="text-xl font-bold text-white mb-2">"Frequent updates"</h3>
                        <p class="text-slate-400 leading-relaxed">
                            "Official builds ship regularly across a wide device fleet."
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}
