use leptos::prelude::*;

use crate::{
    content::{PROJECTS, PROJECT_STACK},
    stack::StackConfig,
};

use super::scroll_stack::{ScrollStack, ScrollStackItem};

#[component]
pub fn Projects() -> impl IntoView {
    let config = StackConfig::from_json(PROJECT_STACK).unwrap_or_else(|err| {
        log::warn!("invalid project stack options: {err}");
        StackConfig::default().with_window_scroll()
    });

    view! {
        <div class="py-20">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-8">
                    "Featured " <span class="text-gradient">"Projects"</span>
                </h2>
                <ScrollStack
                    config
                    on_stack_complete=Callback::new(|_| log::debug!("project stack completed"))
                >
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <ScrollStackItem class="card-gradient border border-border/50">
                                    <div class="grid lg:grid-cols-2 gap-8 items-center h-full">
                                        <img
                                            src=project.image
                                            alt=project.title
                                            class="w-full h-48 md:h-64 object-cover rounded-xl"
                                        />
                                        <div>
                                            <h3 class="text-2xl font-bold mb-4">{project.title}</h3>
                                            <p class="text-muted-foreground mb-4">
                                                {project.description}
                                            </p>
                                            <ul class="space-y-1 mb-4">
                                                {project
                                                    .features
                                                    .iter()
                                                    .map(|feature| {
                                                        view! {
                                                            <li class="text-sm text-muted-foreground">
                                                                "• " {*feature}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                            <div class="flex flex-wrap gap-2 mb-4">
                                                {project
                                                    .technologies
                                                    .iter()
                                                    .map(|tech| {
                                                        view! {
                                                            <span class="px-3 py-1 rounded-full bg-primary/10 text-primary text-xs">
                                                                {*tech}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                            {project
                                                .link
                                                .map(|href| {
                                                    view! {
                                                        <a
                                                            href=href
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                            class="btn-hero inline-block px-6 py-2 rounded-lg"
                                                        >
                                                            "Live Demo"
                                                        </a>
                                                    }
                                                })}
                                        </div>
                                    </div>
                                </ScrollStackItem>
                            }
                        })
                        .collect_view()}
                </ScrollStack>
            </div>
        </div>
    }
}
