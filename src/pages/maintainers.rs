use evox_data::{endpoints, Maintainer};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::icons::Github;
use crate::components::loading::Loading;
use crate::fetch::fetch_json;

/// Maintainer roster, split into active and retired.
#[component]
pub fn Maintainers() -> impl IntoView {
    let (maintainers, set_maintainers) = signal(None::<Vec<Maintainer>>);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match fetch_json::<Vec<Maintainer>>(&endpoints::maintainers_url()).await {
                Ok(data) => set_maintainers.set(Some(data)),
                Err(err) => {
                    log::error!("failed to load maintainers: {err}");
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    });

    view! {
        <Title text="Maintainers | Evolution X" />
        <div class="pt-24 pb-24 px-6 max-w-6xl mx-auto">
            <div class="text-center mb-16">
                <h1 class="text-4xl font-bold text-white mb-4">"Maintainers"</h1>
                <p class="text-slate-400">"The developers keeping your device evolving."</p>
            </div>

            {move || {
                if let Some(err) = error.get() {
                    return view! {
                        <p class="text-center text-red-400">"Failed to load maintainers: " {err}</p>
                    }
                    .into_any();
                }
                let Some(all) = maintainers.get() else {
                    return view! { <Loading /> }.into_any();
                };
                let (active, retired): (Vec<_>, Vec<_>) =
                    all.into_iter().partition(Maintainer::is_active);
                view! {
                    <section class="mb-16">
                        <h2 class="text-2xl font-bold text-white text-center mb-8">"Active"</h2>
                        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                            {active.into_iter().map(maintainer_card).collect_view()}
                        </div>
                    </section>
                    <section>
                        <h2 class="text-2xl font-bold text-white text-center mb-8">"Retired"</h2>
                        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                            {retired.into_iter().map(maintainer_card).collect_view()}
                        </div>
                    </section>
                }
                .into_any()
            }}
        </div>
    }
}

fn maintainer_card(maintainer: Maintainer) -> impl IntoView {
    let devices = if maintainer.is_active() {
        maintainer.currently_maintains.clone()
    } else {
        maintainer.used_to_maintain.clone()
    };
    view! {
        <div class="bg-slate-900/50 border border-slate-800 rounded-2xl p-8 hover:border-slate-700 transition-colors">
            <div class="flex items-center gap-4 mb-4">
                <img
                    src=endpoints::avatar_url(&maintainer.github)
                    alt=maintainer.name.clone()
                    class="w-12 h-12 rounded-full border border-slate-700"
                />
                <div>
                    <h3 class="text-lg font-bold text-white">{maintainer.name.clone()}</h3>
                    <a
                        href=endpoints::github_profile_url(&maintainer.github)
                        target="_blank"
                        rel="noreferrer"
                        class="text-slate-400 hover:text-white transition-colors inline-flex items-center text-sm"
                    >
                        <Github class="w-4 h-4 mr-1" />
                        {maintainer.github.clone()}
                    </a>
                </div>
            </div>
            <div class="flex flex-wrap gap-2">
                {devices.into_iter().map(|device| {
                    let href = format!("/downloads/{}", device.codename);
                    view! {
                        <A
                            href=href
                            attr:class="text-xs bg-slate-800 text-slate-300 rounded-full px-3 py-1 hover:bg-slate-700 transition-colors"
                        >
                            {device.device.clone()} " (" {device.codename.clone()} ")"
                        </A>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
