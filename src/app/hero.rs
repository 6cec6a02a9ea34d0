use leptos::{ev, prelude::*};

use crate::analytics::{CtaAction, Event};
use crate::content::portfolio;

use super::nav::{scroll_into_view, Section};
use super::use_analytics;

#[component]
pub fn Hero() -> impl IntoView {
    let info = &portfolio().personal_info;
    let typed = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        use crate::schedule::BrowserScheduler;
        use crate::typewriter::{PhraseCycler, Typewriter, TypewriterTiming};

        match PhraseCycler::new(
            portfolio().hero_phrases.iter().cloned(),
            TypewriterTiming::default(),
        ) {
            Ok(cycler) => {
                let typewriter =
                    Typewriter::start(cycler, BrowserScheduler, move |text| typed.set(text.to_string()));
                on_cleanup(move || typewriter.stop());
            }
            Err(e) => log::error!("hero typewriter disabled: {e}"),
        }
    }

    let cta = move |action: CtaAction, section: Section| {
        let analytics = use_analytics();
        move |_: ev::MouseEvent| {
            analytics.record(Event::HeroCtaClick(action));
            scroll_into_view(section.id());
        }
    };

    view! {
        <section
            id=Section::Home.id()
            class="hero relative min-h-[85vh] md:min-h-[90vh] lg:min-h-screen flex items-center overflow-hidden pt-16 md:pt-20"
        >
            <div class="hero-pattern absolute inset-0 opacity-5"></div>
            <div class="relative z-10 mx-auto max-w-6xl px-4 text-center">
                <h1 class="hero-name text-5xl md:text-7xl font-bold mb-2 fade-in-up">
                    {info.name.clone()}
                </h1>
                <p class="text-lg md:text-2xl text-secondary max-w-2xl mx-auto mb-8 fade-in-up delay-200">
                    {info.tagline.clone()}
                </p>
                <div class="min-h-[2em] mb-12 flex items-center justify-center text-lg md:text-xl text-accent fade-in-up delay-400">
                    <span class="typewriter font-mono font-medium">{move || typed.get()}</span>
                </div>
                <div class="flex flex-wrap gap-4 justify-center fade-in-up delay-600">
                    <button
                        class="btn btn-primary btn-lg"
                        on:click=cta(CtaAction::ViewProjects, Section::Projects)
                    >
                        "View My Work"
                    </button>
                    <button
                        class="btn btn-secondary btn-lg"
                        on:click=cta(CtaAction::GetInTouch, Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
            <button
                class="scroll-indicator absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center text-secondary hover:text-primary"
                on:click=move |_| scroll_into_view(Section::About.id())
            >
                <span class="text-sm mb-1">"Scroll to explore"</span>
                <span class="text-lg">"↓"</span>
            </button>
        </section>
    }
}
