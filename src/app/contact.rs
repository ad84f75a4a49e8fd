use leptos::prelude::*;

use crate::content::{CONTACT_INFO, EMAIL, SOCIAL_LINKS};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <div class="py-20">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">
                    "Get In " <span class="text-gradient">"Touch"</span>
                </h2>
                <div class="grid lg:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <div class="space-y-6">
                        <p class="text-lg text-muted-foreground">
                            "Open to internships, collaborations and interesting problems. The fastest way to reach me is email."
                        </p>
                        {CONTACT_INFO
                            .iter()
                            .map(|entry| {
                                let body = view! {
                                    <div class="flex items-center gap-4">
                                        <span class="text-2xl">{entry.icon}</span>
                                        <div>
                                            <p class="text-sm text-muted-foreground">{entry.label}</p>
                                            <p class="font-medium">{entry.value}</p>
                                        </div>
                                    </div>
                                };
                                match entry.action {
                                    Some(href) => {
                                        view! {
                                            <a href=href class="block hover:text-primary transition-colors">
                                                {body}
                                            </a>
                                        }
                                            .into_any()
                                    }
                                    None => view! { <div>{body}</div> }.into_any(),
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="card-gradient p-8 rounded-2xl border border-border/50 text-center">
                        <h3 class="text-2xl font-bold mb-4">"Let's build something"</h3>
                        <a
                            href=format!("mailto:{EMAIL}")
                            class="btn-hero inline-block px-8 py-3 rounded-lg mb-8"
                        >
                            "Send an Email"
                        </a>
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
            </div>
        </div>
    }
}
