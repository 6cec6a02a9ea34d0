use leptos::prelude::*;

use crate::content::portfolio;

use super::nav::Section;

#[component]
pub fn About() -> impl IntoView {
    let content = portfolio();
    let info = &content.personal_info;

    view! {
        <section id=Section::About.id() class="section section-tinted">
            <div class="mx-auto max-w-6xl px-4 grid grid-cols-1 lg:grid-cols-2 gap-8 md:gap-12 lg:items-center">
                <div>
                    <h2 class="text-3xl font-bold mb-6">"About Me"</h2>
                    <p class="text-lg leading-relaxed mb-4">{info.bio.clone()}</p>
                    <p class="text-lg leading-relaxed mb-4 text-secondary">
                        "Based in " <span class="highlight">{info.location.clone()}</span>
                        ". When I'm not coding, you'll find me exploring new technologies, contributing to open-source projects, or tinkering with circuit designs."
                    </p>
                    <div class="grid grid-cols-[repeat(auto-fit,minmax(150px,1fr))] gap-4 mt-8">
                        {content
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="text-center p-4">
                                        <h3 class="text-3xl font-bold text-primary mb-1">
                                            {stat.value.clone()}
                                        </h3>
                                        <p class="text-sm text-secondary">{stat.label.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="flex flex-col gap-8">
                    <div>
                        <h3 class="text-xl font-semibold mb-4 text-center">"Skills & Technologies"</h3>
                        <div class="grid grid-cols-[repeat(auto-fit,minmax(120px,1fr))] gap-2">
                            {info
                                .skills
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="skill card text-center p-2">
                                            <span class="text-sm font-medium">{skill.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h3 class="text-xl font-semibold mb-4 text-center">"Experience"</h3>
                        <ul class="space-y-4">
                            {content
                                .experience
                                .iter()
                                .map(|job| {
                                    view! {
                                        <li class="card p-4">
                                            <div class="flex justify-between items-baseline gap-4">
                                                <span class="font-semibold">{job.title.clone()}</span>
                                                <span class="text-sm text-secondary whitespace-nowrap">
                                                    {job.period.clone()}
                                                </span>
                                            </div>
                                            <div class="text-accent text-sm">{job.company.clone()}</div>
                                            <p class="text-sm mt-2">{job.description.clone()}</p>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
