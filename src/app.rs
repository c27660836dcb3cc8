use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};

use crate::components::layout::Layout;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
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
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/league-theory-crafter.css" />
        <Title text="League Theory Crafter" />
        <Layout>
            <HomePage />
        </Layout>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <h1 class="home-title">"League Theory Crafter"</h1>
            <p class="home-tagline">"Theory craft champion builds for League of Legends."</p>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_inside_layout() {
        let html = view! {
            <Layout>
                <HomePage />
            </Layout>
        }
        .to_html();

        let title = html.find("League Theory Crafter</h1>").unwrap();
        let footer = html.find("<footer").unwrap();
        assert!(title < footer);
    }
}
