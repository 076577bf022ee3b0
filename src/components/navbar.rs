use evox_data::endpoints;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::icons::Github;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let link_class = move |active: bool| {
        if active {
            "text-sm font-medium transition-colors text-white"
        } else {
            "text-sm font-medium transition-colors text-slate-400 hover:text-white"
        }
    };

    let is_home = move || pathname() == "/";
    let is_downloads = move || pathname().starts_with("/downloads");
    let is_team = move || pathname() == "/team";
    let is_maintainers = move || pathname() == "/maintainers";
    let is_merch = move || pathname() == "/merch";

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-slate-950/80 backdrop-blur-md border-b border-slate-800">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center space-x-2 group">
                    <img
                        src="/public/logo.svg"
                        alt="Evolution X"
                        class="w-8 h-8 group-hover:scale-110 transition-transform"
                    />
                    <span class="font-bold text-white text-lg tracking-tight">
                        "Evolution X"
                    </span>
                    <img src=endpoints::latest_version_badge_url() alt="Latest version" class="h-5 hidden sm:block" />
                </A>

                <nav class="hidden md:flex items-center space-x-8">
                    <A href="/" attr:class=move || link_class(is_home())>
                        "Home"
                    </A>
                    <A href="/downloads" attr:class=move || link_class(is_downloads())>
                        "Downloads"
                    </A>
                    <A href="/team" attr:class=move || link_class(is_team())>
                        "Team"
                    </A>
                    <A href="/maintainers" attr:class=move || link_class(is_maintainers())>
                        "Maintainers"
                    </A>
                    <A href="/merch" attr:class=move || link_class(is_merch())>
                        "Merch"
                    </A>
                    <a
                        href="https://github.com/Evolution-X"
                        target="_blank"
                        rel="noreferrer"
                        class="text-slate-400 hover:text-white transition-colors"
                    >
                        <Github class="w-5 h-5" />
                    </a>
                </nav>
            </div>
        </header>
    }
}
