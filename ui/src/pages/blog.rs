use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::{PageHeading, page_title};

#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <Title text=page_title("Journal")/>
        <PageHeading
            title="Journal"
            blurb="Grooming tips, ingredient deep-dives and product news."
        />
    }
}

#[component]
pub fn BlogDetail() -> impl IntoView {
    let params = use_params_map();
    let title = move || params.with(|p| p.get("slug")).unwrap_or_default().replace('-', " ");

    view! {
        <Title text=page_title("Journal")/>
        <PageHeading title/>
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <a href="/blog" class="text-amber-600 hover:underline">"← All articles"</a>
        </div>
    }
}
