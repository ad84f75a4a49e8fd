use leptos::prelude::*;

use crate::content::{SKILL_CATEGORIES, TECH_STACK};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <div class="py-20">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">
                    "Skills & " <span class="text-gradient">"Expertise"</span>
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-16">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="card-gradient p-6 rounded-xl border border-border/50 hover-lift">
                                    <div class="text-3xl mb-4">{category.icon}</div>
                                    <h3 class="font-semibold text-lg mb-4">{category.title}</h3>
                                    <ul class="space-y-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <li class="text-sm text-muted-foreground">{*skill}</li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap justify-center gap-3">
                    {TECH_STACK
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-4 py-2 rounded-full bg-primary/10 text-primary text-sm">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
