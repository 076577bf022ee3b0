use evox_data::{endpoints, MerchItem};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::loading::Loading;
use crate::fetch::fetch_json;

/// Merchandise catalog, linking out to the store.
#[component]
pub fn Merch() -> impl IntoView {
    let (items, set_items) = signal(None::<Vec<MerchItem>>);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match fetch_json::<Vec<MerchItem>>(&endpoints::merch_url()).await {
                Ok(data) => set_items.set(Some(data)),
                Err(err) => {
                    log::error!("failed to load merch catalog: {err}");
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    });

    view! {
        <Title text="Merch | Evolution X" />
        <div class="pt-24 pb-24 px-6 max-w-6xl mx-auto">
            <div class="text-center mb-16">
                <h1 class="text-4xl font-bold text-white mb-4">"Merch"</h1>
                <p class="text-slate-400">"Wear the evolution."</p>
            </div>

            {move || {
                if let Some(err) = error.get() {
                    return view! {
                        <p class="text-center text-red-400">"Failed to load merch: " {err}</p>
                    }
                    .into_any();
                }
                let Some(items) = items.get() else {
                    return view! { <Loading /> }.into_any();
                };
                if items.is_empty() {
                    return view! {
                        <p class="text-center text-slate-400">"Nothing in the store right now."</p>
                    }
                    .into_any();
                }
                view! {
                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                        {items.into_iter().map(|item| view! {
                            <a
                                href=item.link.clone()
                                target="_blank"
                                rel="noreferrer"
                                class="block bg-slate-900/50 border border-slate-800 rounded-2xl p-8 text-center hover:border-slate-700 transition-colors"
                            >
                                <img
                                    src=endpoints::merch_image_url(&item.image)
                                    alt=item.name.clone()
                                    class="h-48 mx-auto mb-4 object-contain"
                                />
                                <h3 class="text-lg font-bold text-white">{item.name.clone()}</h3>
                                {item.price.map(|price| view! {
                                    <p class="text-sm text-slate-400 mt-1">{format!("${price:.2}")}</p>
                                })}
                            </a>
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
