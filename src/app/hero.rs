use leptos::prelude::*;

use crate::content::{CV_PATH, OWNER, SOCIAL_LINKS};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center relative overflow-hidden pt-16">
            <div class="absolute inset-0 bg-gradient-to-br from-primary/10 via-background to-accent/10" />
            <div class="container mx-auto px-6 relative z-10 text-center">
                <p class="text-lg text-muted-foreground mb-4 fade-in">"Hello, I'm"</p>
                <h1 class="text-5xl md:text-7xl font-bold mb-6 text-gradient fade-in">{OWNER}</h1>
                <p class="text-xl md:text-2xl text-muted-foreground mb-8 max-w-2xl mx-auto fade-in">
                    "BTech student, competitive programmer and AI enthusiast who enjoys turning hard problems into working software."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <a href="#projects" class="btn-hero px-8 py-3 rounded-lg">
                        "View My Work"
                    </a>
                    <a
                        href=CV_PATH
                        download=""
                        class="px-8 py-3 rounded-lg border border-primary text-primary hover:bg-primary/10 transition-colors"
                    >
                        "Download CV"
                    </a>
                </div>
                <div class="flex justify-center gap-6">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class="text-2xl text-muted-foreground hover:text-primary transition-colors"
                                >
                                    <i class=link.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
