use leptos::prelude::*;
use leptos_meta::Title;

use super::{PageHeading, page_title};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Title text=page_title("About")/>
        <PageHeading
            title="About us"
            blurb="Premium men's grooming essentials crafted with natural ingredients."
        />
    }
}
