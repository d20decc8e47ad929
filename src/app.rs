use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::{Header, ProjectFeed, ProjectFeedEmpty, ProjectsPlaceholder};
use crate::github::{GitHubPages, PagesProject};

/// Active colour scheme for the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Shared handle to the colour mode, provided by [`HomePage`] and read by any
/// component below it.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: ReadSignal<ColorMode>,
    pub set_mode: WriteSignal<ColorMode>,
}

/// Progress of the one-shot repository fetch. Kept explicit so the zero-result
/// case is distinguishable from a fetch that has not completed yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Loaded(Vec<PagesProject>),
    Failed,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/vitrin.css"/>

        <Title text="My GitHub Pages Projects"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let (mode, set_mode) = signal(ColorMode::Light);
    provide_context(ThemeContext { mode, set_mode });

    let (projects, set_projects) = signal(FetchState::Loading);

    // Runs once, client-side, after the page is mounted. If the view is torn
    // down before the response arrives, the write lands in a dead signal and
    // is discarded.
    Effect::new(move |_| {
        spawn_local(async move {
            match GitHubPages::default().fetch_projects().await {
                Ok(list) => set_projects.set(FetchState::Loaded(list)),
                Err(err) => {
                    leptos::logging::error!("failed to fetch repositories: {err}");
                    set_projects.set(FetchState::Failed);
                }
            }
        });
    });

    let page_class = move || {
        if mode.get().is_dark() {
            "page page--dark"
        } else {
            "page page--light"
        }
    };

    view! {
        <div class=page_class>
            <div class="container">
                <Header/>
                {move || match projects.get() {
                    FetchState::Loading => view! { <ProjectsPlaceholder/> }.into_any(),
                    FetchState::Failed => view! { <ProjectFeedEmpty/> }.into_any(),
                    FetchState::Loaded(list) if list.is_empty() => {
                        view! { <ProjectFeedEmpty/> }.into_any()
                    }
                    FetchState::Loaded(list) => {
                        view! { <ProjectFeed projects=list/> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
