use leptos::prelude::*;

use crate::app::Page;
use crate::theme::{next_theme, ThemeContext};

/// Pages reachable from the top bar. Result and Error are only entered
/// through the upload flow.
const NAV_ITEMS: [Page; 4] = [Page::Home, Page::About, Page::Upload, Page::Team];

#[component]
pub fn Navigation(current_page: Signal<Page>, on_navigate: Callback<Page>) -> impl IntoView {
    let theme_ctx = expect_context::<ThemeContext>();

    let cycle_theme = move |_| {
        let current = theme_ctx.theme.get();
        theme_ctx.set_theme.set(next_theme(&current).to_string());
    };

    view! {
        <nav class="top-nav">
            <button class="brand" on:click=move |_| on_navigate.run(Page::Home)>
                "DentaScan - Dental AI Diagnosis"
            </button>

            <div class="nav-items">
                {NAV_ITEMS
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="nav-link"
                                class:nav-link-active=move || current_page.get() == page
                                on:click=move |_| on_navigate.run(page)
                            >
                                {page.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}

                <button class="nav-link theme-toggle" on:click=cycle_theme title="Cycle theme">
                    {move || match theme_ctx.theme.get().as_str() {
                        "light" => "Light",
                        "dark" => "Dark",
                        _ => "Auto",
                    }}
                </button>
            </div>
        </nav>
    }
}
