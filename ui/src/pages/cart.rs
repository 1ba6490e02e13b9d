use leptos::prelude::*;
use leptos_meta::Title;

use super::{PageHeading, page_title};

#[component]
pub fn Cart() -> impl IntoView {
    view! {
        <Title text=page_title("Cart")/>
        <PageHeading title="Your cart"/>
    }
}

#[component]
pub fn Checkout() -> impl IntoView {
    view! {
        <Title text=page_title("Checkout")/>
        <PageHeading title="Checkout"/>
    }
}
