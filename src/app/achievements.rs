use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{
    content::{Achievement, ACHIEVEMENTS, HACKATHON_SLIDES},
    page::{next_slide, SLIDE_INTERVAL_MS},
};

#[component]
fn Slideshow() -> impl IntoView {
    let (current, set_current) = signal(0usize);
    let _ = use_interval_fn(
        move || set_current.update(|i| *i = next_slide(*i, HACKATHON_SLIDES.len())),
        SLIDE_INTERVAL_MS,
    );

    view! {
        <div class="relative w-full h-64 md:h-80 overflow-hidden rounded-xl">
            {HACKATHON_SLIDES
                .iter()
                .enumerate()
                .map(|(i, src)| {
                    view! {
                        <img
                            src=*src
                            alt=format!("Hackathon photo {}", i + 1)
                            class=move || {
                                if current.get() == i {
                                    "absolute inset-0 w-full h-full object-cover transition-opacity duration-1000 opacity-100"
                                } else {
                                    "absolute inset-0 w-full h-full object-cover transition-opacity duration-1000 opacity-0"
                                }
                            }
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FeaturedCard(achievement: &'static Achievement) -> impl IntoView {
    view! {
        <div class="card-gradient p-8 rounded-2xl border border-primary/30 hover-lift">
            <div class="flex items-start gap-4 mb-4">
                <div class="text-4xl">{achievement.icon}</div>
                <div>
                    <h3 class="text-2xl font-bold">{achievement.title}</h3>
                    <p class="text-primary">
                        {achievement.organization} " · " {achievement.year}
                    </p>
                </div>
            </div>
            <p class="text-muted-foreground mb-4">{achievement.description}</p>
            <div class="flex flex-wrap gap-2">
                {achievement
                    .badges
                    .iter()
                    .map(|badge| {
                        view! {
                            <span class="px-3 py-1 rounded-full bg-primary/10 text-primary text-xs">
                                {*badge}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Achievements() -> impl IntoView {
    let (featured, regular): (Vec<_>, Vec<_>) = ACHIEVEMENTS.iter().partition(|a| a.featured);

    view! {
        <div class="py-20 bg-gradient-to-b from-muted/20 to-background">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">
                    "Achievements & " <span class="text-gradient">"Recognition"</span>
                </h2>
                <div class="grid lg:grid-cols-2 gap-8 mb-12 items-center">
                    <Slideshow />
                    <div class="space-y-8">
                        {featured
                            .into_iter()
                            .map(|achievement| view! { <FeaturedCard achievement /> })
                            .collect_view()}
                    </div>
                </div>
                <div class="grid md:grid-cols-3 gap-6">
                    {regular
                        .into_iter()
                        .map(|achievement| {
                            view! {
                                <div class="card-gradient p-6 rounded-xl border border-border/50 hover-lift">
                                    <div class="text-3xl mb-3">{achievement.icon}</div>
                                    <h3 class="font-semibold text-lg">{achievement.title}</h3>
                                    <p class="text-sm text-primary mb-2">
                                        {achievement.organization} " · " {achievement.year}
                                    </p>
                                    <p class="text-sm text-muted-foreground">
                                        {achievement.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
