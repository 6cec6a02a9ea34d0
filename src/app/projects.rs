use leptos::prelude::*;

use crate::analytics::Event;
use crate::content::{portfolio, Category, LinkKind, Project};
use crate::filter::{filter_projects, ProjectFilter};

use super::nav::{open_external, Section};
use super::use_analytics;

#[component]
pub fn Projects() -> impl IntoView {
    let analytics = use_analytics();
    let (filter, set_filter) = signal(ProjectFilter::default());
    let visible = Memo::new(move |_| {
        filter_projects(&portfolio().projects, filter.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <section id=Section::Projects.id() class="section">
            <div class="mx-auto max-w-6xl px-4 text-center">
                <h2 class="text-3xl font-bold mb-6">"My Projects"</h2>
                <p class="text-lg text-secondary max-w-3xl mx-auto">
                    "A collection of projects I've worked on, ranging from personal experiments to professional solutions that serve thousands of users."
                </p>

                <div class="flex flex-wrap justify-center gap-2 my-8">
                    {ProjectFilter::ALL
                        .into_iter()
                        .map(|key| {
                            let analytics = analytics.clone();
                            view! {
                                <button
                                    class=move || {
                                        if filter() == key { "btn btn-primary" } else { "btn btn-secondary" }
                                    }
                                    on:click=move |_| {
                                        set_filter(key);
                                        analytics.record(Event::ProjectFilterChange(key));
                                    }
                                >
                                    {key.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-[repeat(auto-fit,minmax(280px,1fr))] lg:grid-cols-[repeat(auto-fit,minmax(300px,1fr))] gap-4 lg:gap-6 mt-8">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let analytics = use_analytics();
    let category_class = match project.category {
        Category::Personal => "category-tag category-personal",
        Category::Professional => "category-tag category-professional",
    };

    let links = project
        .links
        .iter()
        .map(|(kind, url)| {
            let event = Event::ProjectLinkClick {
                project_id: project.id.clone(),
                project_title: project.title.clone(),
                link: kind,
                url: url.to_string(),
            };
            let url = url.to_string();
            let analytics = analytics.clone();
            let variant = match kind {
                LinkKind::GitHub => "btn btn-ghost flex-1 text-sm",
                LinkKind::Live => "btn btn-primary flex-1 text-sm",
                LinkKind::Demo => "btn btn-secondary flex-1 text-sm",
            };
            view! {
                <button
                    class=variant
                    on:click=move |_| {
                        analytics.record(event.clone());
                        open_external(&url);
                    }
                >
                    {kind.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <article class="project-card card relative overflow-hidden flex flex-col h-full text-left p-6">
            {project
                .featured
                .then(|| view! { <div class="featured-badge absolute top-2 right-2">"Featured"</div> })}
            <header class="mb-4">
                <h3 class="text-xl font-semibold mb-1">{project.title.clone()}</h3>
                <span class=category_class>{project.category.as_str()}</span>
            </header>
            <p class="flex-grow mb-4 leading-relaxed">{project.description.clone()}</p>
            <div class="flex flex-wrap gap-1 mb-4">
                {project
                    .technologies
                    .iter()
                    .map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
                    .collect_view()}
            </div>
            <div class="flex gap-2 mt-auto">{links}</div>
        </article>
    }
}
