mod about;
mod achievements;
mod contact;
mod dom;
mod hero;
mod navigation;
mod projects;
mod scroll_stack;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content::OWNER, page::build_year};

use about::About;
use achievements::Achievements;
use contact::Contact;
use hero::Hero;
use navigation::Navigation;
use projects::Projects;
use skills::Skills;

pub use scroll_stack::{ScrollStack, ScrollStackItem};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=IndexPage />
            </Routes>
        </Router>
    }
}

#[component]
fn IndexPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen">
            <Navigation />
            <main>
                <section id="home">
                    <Hero />
                </section>
                <section id="about">
                    <About />
                </section>
                <section id="skills">
                    <Skills />
                </section>
                <section id="projects">
                    <Projects />
                </section>
                <section id="achievements">
                    <Achievements />
                </section>
                <section id="contact">
                    <Contact />
                </section>
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-background border-t border-border/50 py-8">
            <div class="container mx-auto px-6 text-center">
                <p class="text-muted-foreground">
                    {format!("© {} {OWNER}. Built with love❤️.", build_year())}
                </p>
            </div>
        </footer>
    }
}
