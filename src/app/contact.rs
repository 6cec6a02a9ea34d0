use leptos::prelude::*;

use crate::analytics::{ContactAction, Event};
use crate::content::{portfolio, SocialPlatform};

use super::nav::{open_external, Section};
use super::use_analytics;

#[component]
pub fn Contact() -> impl IntoView {
    let analytics = use_analytics();
    let content = portfolio();
    let info = &content.personal_info;

    let github_url = content
        .social_links
        .iter()
        .find(|link| link.platform == SocialPlatform::GitHub)
        .map(|link| link.url.clone());
    let email = info.email.clone();

    let social_cards = content
        .social_links
        .iter()
        .map(|link| {
            let analytics = analytics.clone();
            let event = Event::SocialLinkClick {
                platform: link.platform,
                url: link.url.clone(),
            };
            let url = link.url.clone();
            view! {
                <div
                    class="social-card card cursor-pointer relative overflow-hidden p-6"
                    on:click=move |_| {
                        analytics.record(event.clone());
                        open_external(&url);
                    }
                >
                    <div class="text-2xl mb-2">{link.platform.icon()}</div>
                    <h3 class="text-lg font-semibold mb-1">{link.platform.name()}</h3>
                    <p class="text-sm text-secondary font-mono">{link.handle()}</p>
                </div>
            }
        })
        .collect_view();

    let github_button = github_url.map(|url| {
        let analytics = analytics.clone();
        view! {
            <button
                class="btn btn-primary btn-lg"
                on:click=move |_| {
                    analytics.record(Event::Contact(ContactAction::GithubVisit));
                    open_external(&url);
                }
            >
                "View My GitHub"
            </button>
        }
    });

    let email_button = email.map(|email| {
        let analytics = analytics.clone();
        view! {
            <button
                class="btn btn-secondary btn-lg"
                on:click=move |_| {
                    analytics.record(Event::Contact(ContactAction::EmailClick));
                    open_external(&format!("mailto:{email}"));
                }
            >
                "Send an Email"
            </button>
        }
    });

    view! {
        <section id=Section::Contact.id() class="section contact relative overflow-hidden">
            <div class="relative z-10 mx-auto max-w-6xl px-4 text-center">
                <div class="mb-12">
                    <h2 class="text-3xl font-bold mb-4">"Let's Connect"</h2>
                    <p class="text-lg max-w-2xl mx-auto mb-6">
                        <span class="text-primary font-semibold italic">
                            {format!("\"{}\"", info.tagline)}
                        </span>
                    </p>
                    <p class="text-lg max-w-2xl mx-auto leading-relaxed">
                        "I'm always interested in new opportunities, collaborations, and exciting projects. Whether you want to discuss technology, share ideas, or explore potential partnerships, I'd love to hear from you!"
                    </p>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-[repeat(auto-fit,minmax(200px,1fr))] gap-4 mb-12 max-w-3xl mx-auto">
                    {social_cards}
                </div>

                <div class="cta card p-8 mt-12">
                    <h3 class="text-2xl font-semibold mb-4">"Ready to Start Something Amazing?"</h3>
                    <p class="text-lg text-secondary mb-6">
                        "Let's build the future together. Check out my latest work or drop me a message!"
                    </p>
                    <div class="flex flex-wrap gap-4 justify-center">{github_button} {email_button}</div>
                </div>
            </div>
        </section>
    }
}
