pub mod components;
pub mod fetch;
pub mod hooks;
pub mod pages;
pub mod storage;

use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::device::Device;
use pages::downloads::Downloads;
use pages::home::Home;
use pages::maintainers::Maintainers;
use pages::merch::Merch;
use pages::team::Team;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Evolution X" />
        <Router>
            <ScrollToTop />
            <div class="min-h-screen bg-slate-950 text-slate-200 selection:bg-blue-500/30 font-sans">
                <Navbar />
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/downloads") view=Downloads />
                    <Route path=path!("/downloads/:codename") view=Device />
                    <Route path=path!("/team") view=Team />
                    <Route path=path!("/maintainers") view=Maintainers />
                    <Route path=path!("/merch") view=Merch />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    ()
}
