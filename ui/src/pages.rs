pub mod about;
pub mod account;
pub mod blog;
pub mod cart;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod shop;

use leptos::prelude::*;

use crate::links::BRAND;

/// Document title for a page other than the home page.
pub fn page_title(name: &str) -> String {
    format!("{name} | {BRAND}")
}

/// Heading block shared by the simple pages.
#[component]
pub fn PageHeading(#[prop(into)] title: TextProp, #[prop(optional)] blurb: &'static str) -> impl IntoView {
    view! {
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <h1 class="text-3xl md:text-4xl font-bold text-gray-900 mb-2">{move || title.get().to_string()}</h1>
            {(!blurb.is_empty()).then(|| view! { <p class="text-gray-600 max-w-2xl">{blurb}</p> })}
        </section>
    }
}
