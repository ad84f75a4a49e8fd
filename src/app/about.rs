use leptos::prelude::*;

use crate::content::ABOUT_HIGHLIGHTS;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="py-20 bg-gradient-to-b from-background to-muted/20">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">
                    "About " <span class="text-gradient">"Me"</span>
                </h2>
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <p class="text-lg text-muted-foreground leading-relaxed">
                            "I'm a third-year BTech student who loves mathematics, algorithms and building things for the web. Most days you'll find me solving problems on competitive programming platforms or exploring new ideas in artificial intelligence."
                        </p>
                        <p class="text-lg text-muted-foreground leading-relaxed">
                            "Winning a national level hackathon taught me how much a focused team can ship in a weekend, and organizing one showed me how much work goes into making that possible for others."
                        </p>
                    </div>
                    <div class="grid sm:grid-cols-2 gap-6">
                        {ABOUT_HIGHLIGHTS
                            .iter()
                            .map(|highlight| {
                                view! {
                                    <div class="card-gradient p-6 rounded-xl border border-border/50 hover-lift">
                                        <div class="text-3xl mb-3">{highlight.icon}</div>
                                        <h3 class="font-semibold text-lg mb-2">{highlight.title}</h3>
                                        <p class="text-sm text-muted-foreground">
                                            {highlight.description}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
