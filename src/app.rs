mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod nav;
mod projects;
mod scroll_to_top;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::analytics::{Analytics, AnalyticsConfig};
use crate::content::portfolio;

use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use scroll_to_top::ScrollToTop;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let posthog_src = AnalyticsConfig::from_build_env()
        .map(|config| format!("{}/static/array.js", config.api_host));
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                {posthog_src.map(|src| view! { <script src=src></script> })}
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// The analytics client for this build: PostHog in the browser when a key
/// was provided, otherwise a client that stays uninitialized.
fn analytics_client() -> Analytics {
    #[cfg(feature = "hydrate")]
    {
        let analytics = Analytics::new(crate::analytics::posthog::PosthogBackend);
        if let Some(config) = AnalyticsConfig::from_build_env() {
            analytics.init(&config);
        }
        analytics
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Analytics::noop()
    }
}

pub fn use_analytics() -> Analytics {
    expect_context::<Analytics>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // PostHog records the page view on load
    provide_context(analytics_client());
    let theme = provide_theme();

    let name = portfolio().personal_info.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />

        <Router>
            <div
                class="page min-h-screen flex flex-col"
                class:dark=move || theme.current().is_dark()
                style=move || theme.current().palette().css_variables()
            >
                <Header />
                <main class="flex flex-col flex-grow w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
                <ScrollToTop />
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Projects />
        <Contact />
    }
}
