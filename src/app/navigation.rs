use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::{
    content::{EMAIL, NAV_ITEMS, OWNER},
    page::{active_section, is_scrolled},
};

use super::dom::{document_offset, element_by_id};

fn section_offsets() -> Vec<(&'static str, f64)> {
    NAV_ITEMS
        .iter()
        .filter_map(|item| element_by_id(item.id).map(|el| (item.id, document_offset(&el))))
        .collect()
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (active, set_active) = signal("home");
    let (menu_open, set_menu_open) = signal(false);

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        set_scrolled.set(is_scrolled(offset));
        if let Some(id) = active_section(offset, &section_offsets()) {
            if active.get_untracked() != id {
                set_active.set(id);
            }
        }
    });

    let link_class = move |id: &'static str| {
        if active.get() == id {
            "text-primary font-medium transition-colors"
        } else {
            "text-muted-foreground hover:text-primary transition-colors"
        }
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-background/80 backdrop-blur-md shadow-lg"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="container mx-auto px-6 h-16 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold text-gradient">
                    {OWNER}
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a href=format!("#{}", item.id) class=move || link_class(item.id)>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=format!("mailto:{EMAIL}") class="btn-hero px-4 py-2 rounded-lg">
                        "Hire Me"
                    </a>
                </div>
                <button
                    class="md:hidden text-foreground"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-background/95 backdrop-blur-md border-t border-border/50">
                    <div class="container mx-auto px-6 py-4 flex flex-col gap-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=format!("#{}", item.id)
                                        class=move || link_class(item.id)
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=format!("mailto:{EMAIL}")
                            class="btn-hero px-4 py-2 rounded-lg text-center"
                        >
                            "Hire Me"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
