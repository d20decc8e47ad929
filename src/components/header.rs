use leptos::prelude::*;

use super::ThemeToggle;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="header__title">"My GitHub Pages Projects"</h1>
            <ThemeToggle />
        </header>
    }
}
