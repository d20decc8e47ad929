use leptos::prelude::*;

use super::ProjectCard;
use crate::github::PagesProject;
use crate::theme::Palette;

/// Width, in pixels, of every device frame in the feed.
const FRAME_WIDTH: f64 = 600.0;

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.open_with_url_and_target(url, "_blank").is_err() {
        leptos::logging::warn!("failed to open {url}");
    }
}

#[component]
pub fn ProjectFeed(projects: Vec<PagesProject>) -> impl IntoView {
    view! {
        <ul class="project-feed">
            {projects
                .into_iter()
                .enumerate()
                .map(|(index, project)| {
                    let repo_url = project.repo_url.clone();
                    let site_url = project.site_url.clone();
                    view! {
                        <li class="project-feed__item">
                            <ProjectCard
                                title=project.name.to_uppercase()
                                description=project.description
                                preview_src=project.site_url
                                width=FRAME_WIDTH
                                color=Palette::cycle(index)
                                index=index
                                on_repo=Callback::new(move |()| open_in_new_tab(&repo_url))
                                on_site=Callback::new(move |()| open_in_new_tab(&site_url))
                            />
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn ProjectFeedEmpty() -> impl IntoView {
    view! {
        <div class="project-empty">
            <svg viewBox="0 0 200 200" class="project-empty__art" aria-hidden="true">
                <rect x="40" y="55" width="120" height="80" rx="6" fill="none" stroke="#b5b5b5" stroke-width="2"/>
                <line x1="40" y1="72" x2="160" y2="72" stroke="#b5b5b5" stroke-width="2"/>
                <circle cx="49" cy="64" r="2" fill="#b5b5b5"/>
                <circle cx="57" cy="64" r="2" fill="#b5b5b5"/>
                <line x1="85" y1="95" x2="115" y2="115" stroke="#b5b5b5" stroke-width="2"/>
                <line x1="115" y1="95" x2="85" y2="115" stroke="#b5b5b5" stroke-width="2"/>
                <rect x="88" y="135" width="24" height="6" rx="2" fill="#b5b5b5"/>
            </svg>
            <p class="project-empty__text">"No GitHub Pages projects found."</p>
        </div>
    }
}
