use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::{PageHeading, page_title};
use crate::links::CATEGORIES;

/// Display label for a category slug, `None` for anything not in the menu.
pub fn category_label(slug: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|c| c.path.rsplit('/').next() == Some(slug))
        .map(|c| c.label)
}

fn shop_heading(category: Option<&str>) -> &'static str {
    category.and_then(category_label).unwrap_or("Shop")
}

/// Catalogue landing, narrowed to one category when the route captured one.
#[component]
pub fn Shop() -> impl IntoView {
    let params = use_params_map();
    let category = Memo::new(move |_| params.with(|p| p.get("category")));
    let heading = move || category.with(|c| shop_heading(c.as_deref()));

    view! {
        <Title text=move || page_title(heading())/>
        <PageHeading title=heading blurb="Everything you need for a sharper routine."/>
        <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-wrap gap-3">
            {CATEGORIES.iter().map(move |c| {
                let selected = move || heading() == c.label;
                view! {
                    <a
                        href=c.path
                        class="px-4 py-2 rounded-full border text-sm"
                        class=("border-amber-600", selected)
                        class=("text-amber-600", selected)
                    >
                        {c.label}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}

#[component]
pub fn ProductDetail() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id")).unwrap_or_default();

    view! {
        <Title text=page_title("Product")/>
        <PageHeading title=move || format!("Product #{}", id())/>
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <a href="/shop" class="text-amber-600 hover:underline">"← Back to shop"</a>
        </div>
    }
}
