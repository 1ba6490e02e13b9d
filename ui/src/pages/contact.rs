use leptos::prelude::*;
use leptos_meta::Title;

use super::{PageHeading, page_title};
use crate::links::CONTACT;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <Title text=page_title("Contact")/>
        <PageHeading title="Contact" blurb="We usually reply within one working day."/>
        <dl class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-[auto_1fr] gap-x-6 gap-y-2">
            <dt class="font-medium">"Email"</dt>
            <dd><a href=format!("mailto:{}", CONTACT.email) class="text-amber-600">{CONTACT.email}</a></dd>
            <dt class="font-medium">"Phone"</dt>
            <dd>{CONTACT.phone}</dd>
            <dt class="font-medium">"Address"</dt>
            <dd>{CONTACT.address}</dd>
        </dl>
    }
}
