use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-900 bg-slate-950 py-12 mt-auto">
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center text-slate-500 text-sm">
                <p>"\u{00A9} 2026 Evolution X. Keep Evolving."</p>
                <div class="flex space-x-6 mt-4 md:mt-0">
                    <a
                        href="https://github.com/Evolution-X"
                        target="_blank"
                        rel="noreferrer"
                        class="hover:text-white transition-colors"
                    >
                        "GitHub"
                    </a>
                    <a
                        href="https://sourceforge.net/projects/evolution-x/"
                        target="_blank"
                        rel="noreferrer"
                        class="hover:text-white transition-colors"
                    >
                        "SourceForge"
                    </a>
                    <a
                        href="https://xdaforums.com/"
                        target="_blank"
                        rel="noreferrer"
                        class="hover:text-white transition-colors"
                    >
                        "XDA Forums"
                    </a>
                </div>
            </div>
        </footer>
    }
}
