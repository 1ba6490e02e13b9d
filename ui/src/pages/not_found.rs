use leptos::prelude::*;
use leptos_meta::Title;

use super::page_title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text=page_title("Page not found")/>
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 text-center">
            <p class="text-6xl font-bold text-amber-600 mb-4">"404"</p>
            <h1 class="text-2xl font-semibold mb-6">"We couldn't find that page."</h1>
            <a href="/" class="px-6 py-3 rounded-lg bg-gray-900 text-white">"Back home"</a>
        </section>
    }
}
