use leptos::prelude::*;
use leptos_meta::Title;

use super::{PageHeading, page_title};

#[component]
pub fn Login() -> impl IntoView {
    view! {
        <Title text=page_title("Sign in")/>
        <PageHeading title="Sign in"/>
        <p class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-gray-600">
            "New here? " <a href="/register" class="text-amber-600 hover:underline">"Create an account"</a>
        </p>
    }
}

#[component]
pub fn Register() -> impl IntoView {
    view! {
        <Title text=page_title("Create account")/>
        <PageHeading title="Create account"/>
        <p class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-gray-600">
            "Already registered? " <a href="/login" class="text-amber-600 hover:underline">"Sign in"</a>
        </p>
    }
}
