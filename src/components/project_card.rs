use leptos::prelude::*;

use super::{DeviceFrame, FrameGeometry};
use crate::app::ThemeContext;
use crate::theme::{self, Palette};

/// Shown in place of a missing repository description.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description provided.";

/// Native resolution at which published sites are embedded before scaling.
pub const PREVIEW_WIDTH: f64 = 1920.0;
pub const PREVIEW_HEIGHT: f64 = 1080.0;

/// Odd positions flip the card so frames alternate sides down the feed.
pub fn is_reversed(index: usize) -> bool {
    index % 2 == 1
}

/// One feed row: the device frame with its live preview on one side, the
/// title/description/actions panel on the other. Both buttons only run the
/// actions supplied by the caller.
#[component]
pub fn ProjectCard(
    title: String,
    description: Option<String>,
    preview_src: String,
    width: f64,
    color: Palette,
    index: usize,
    #[prop(into)] on_repo: Callback<()>,
    #[prop(into)] on_site: Callback<()>,
) -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    let description = description.unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string());

    // The preview renders at its native resolution and is scaled down as one
    // block; it never re-flows to the frame width.
    let scale = FrameGeometry::for_width(width).content_scale(PREVIEW_WIDTH);
    let preview_style = format!(
        "width:{PREVIEW_WIDTH}px;height:{PREVIEW_HEIGHT}px;transform:scale({scale});transform-origin:0 0;border:none;"
    );

    let mode_palette = move || theme::for_mode(theme.mode.get());

    let panel_style = move || {
        let palette = mode_palette();
        format!("background-color:{};color:{};", palette.panel, palette.text)
    };
    let banner_style = move || {
        format!(
            "background-color:{};color:{};",
            color.primary(),
            mode_palette().text
        )
    };
    let description_style = move || format!("color:{};", mode_palette().muted);
    let filled_style = format!("background-color:{};", color.primary());
    let outlined_style = format!(
        "border-color:{0};color:{0};",
        color.secondary()
    );

    let row_class = if is_reversed(index) {
        "project-card project-card--reversed"
    } else {
        "project-card"
    };

    view! {
        <article class=row_class>
            <DeviceFrame color=color width=width>
                <div class="live-preview">
                    // Sits behind the embed so a preview that never loads
                    // shows artwork instead of a blank screen.
                    <PreviewFallback/>
                    <iframe
                        class="live-preview__frame"
                        src=preview_src
                        style={preview_style}
                        {..leptos::attr::loading("lazy")}
                    ></iframe>
                </div>
            </DeviceFrame>

            <div class="project-card__panel" style=panel_style>
                <div class="project-card__banner" style=banner_style>
                    <h2>{title}</h2>
                </div>
                <p class="project-card__description" style=description_style>
                    {description}
                </p>
                <div class="project-card__actions">
                    <button
                        class="project-card__button project-card__button--filled"
                        style=filled_style
                        on:click=move |_| on_repo.run(())
                    >
                        "View Repository"
                    </button>
                    <button
                        class="project-card__button project-card__button--outlined"
                        style=outlined_style
                        on:click=move |_| on_site.run(())
                    >
                        "View Project"
                    </button>
                </div>
            </div>
        </article>
    }
}

#[component]
fn PreviewFallback() -> impl IntoView {
    view! {
        <svg viewBox="0 0 192 108" class="live-preview__fallback" aria-hidden="true" preserveAspectRatio="none">
            <rect x="0" y="0" width="192" height="108" fill="#e8e8e8"/>
            <rect x="0" y="0" width="192" height="14" fill="#d4d4d4"/>
            <circle cx="8" cy="7" r="2.5" fill="#bdbdbd"/>
            <circle cx="16" cy="7" r="2.5" fill="#bdbdbd"/>
            <circle cx="24" cy="7" r="2.5" fill="#bdbdbd"/>
            <rect x="14" y="26" width="100" height="8" rx="2" fill="#cfcfcf"/>
            <rect x="14" y="42" width="164" height="5" rx="2" fill="#dcdcdc"/>
            <rect x="14" y="52" width="150" height="5" rx="2" fill="#dcdcdc"/>
            <rect x="14" y="62" width="158" height="5" rx="2" fill="#dcdcdc"/>
        </svg>
    }
}
