use leptos::prelude::*;

/// Loading indicator shown while the repository fetch is still in flight.
#[component]
pub fn ProjectsPlaceholder() -> impl IntoView {
    view! {
        <div class="projects-placeholder">
            <svg viewBox="0 0 400 300" class="projects-placeholder__art" aria-label="Loading illustration">
                <defs>
                    <linearGradient id="screenGrad" x1="0%" y1="0%" x2="0%" y2="100%">
                        <stop offset="0%" style="stop-color:#f4f4f4;stop-opacity:1" />
                        <stop offset="100%" style="stop-color:#dcdcdc;stop-opacity:1" />
                    </linearGradient>
                </defs>

                // Bezel outline
                <rect x="80" y="50" width="240" height="164" rx="10" fill="none" stroke="#b5b5b5" stroke-width="3"/>
                <rect x="90" y="60" width="220" height="124" rx="4" fill="url(#screenGrad)"/>

                // Stand
                <rect x="186" y="214" width="28" height="30" fill="#c9c9c9"/>
                <rect x="150" y="244" width="100" height="8" rx="4" fill="#b5b5b5"/>

                // Skeleton content lines
                <rect x="104" y="76" width="120" height="10" rx="3" fill="#c9c9c9"/>
                <rect x="104" y="98" width="190" height="6" rx="3" fill="#d6d6d6"/>
                <rect x="104" y="112" width="170" height="6" rx="3" fill="#d6d6d6"/>
                <rect x="104" y="126" width="184" height="6" rx="3" fill="#d6d6d6"/>
                <rect x="104" y="152" width="64" height="16" rx="8" fill="#c9c9c9"/>
            </svg>
            <p class="projects-placeholder__text">"Projects loading..."</p>
        </div>
    }
}
