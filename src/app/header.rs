use leptos::prelude::*;

use crate::content::portfolio;

use super::nav::{scroll_into_view, Section};
use super::theme::ThemeToggle;

fn menu_line_class(index: usize, open: bool) -> &'static str {
    match (open, index) {
        (true, 0) => "menu-line rotate-45 translate-x-1.5 translate-y-1.5",
        (true, 1) => "menu-line opacity-0",
        (true, _) => "menu-line -rotate-45 translate-x-1.5 -translate-y-1.5",
        (false, _) => "menu-line",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let initials = portfolio().personal_info.initials();

    let go = move |section: Section| {
        scroll_into_view(section.id());
        set_menu_open(false);
    };

    let nav_links = move || {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <a class="nav-link cursor-pointer" on:click=move |_| go(section)>
                        {section.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header fixed top-0 inset-x-0 z-50 backdrop-blur">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <button
                    class="text-2xl font-bold text-accent hover:text-primary"
                    on:click=move |_| go(Section::Home)
                >
                    {initials}
                </button>

                <nav class="hidden md:flex items-center gap-8">
                    {nav_links()}
                    <ThemeToggle />
                </nav>

                <button
                    class="md:hidden flex flex-col gap-1.5 z-[10000]"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {(0..3)
                        .map(|i| view! { <span class=move || menu_line_class(i, menu_open())></span> })
                        .collect_view()}
                </button>

                <nav class=move || {
                    if menu_open() { "mobile-nav mobile-nav-open" } else { "mobile-nav" }
                }>
                    {nav_links()}
                    <ThemeToggle />
                </nav>
            </div>
        </header>
    }
}
