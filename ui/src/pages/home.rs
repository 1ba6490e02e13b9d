use leptos::prelude::ElementChild;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::component;
use leptos::IntoView;
use leptos::view;
use leptos_meta::Title;

use crate::links::{BRAND, CATEGORIES};

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <Title text=BRAND/>
      <section class="bg-gradient-to-br from-amber-50 to-orange-100">
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24">
          <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-4 leading-tight">
            "Grooming, done right."
          </h1>
          <p class="mb-8 text-lg text-gray-700 max-w-xl">
            "Natural ingredients, honest formulas, made for the everyday routine."
          </p>
          <div class="flex gap-3">
            <a href="/shop" class="px-6 py-3 rounded-lg bg-gradient-to-r from-amber-600 to-orange-700 text-white font-medium hover:brightness-90">"Shop now"</a>
            <a href="/about" class="px-6 py-3 rounded-lg border border-gray-300 hover:bg-white">"Our story"</a>
          </div>
        </div>
      </section>

      <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
        <h2 class="text-2xl font-bold mb-6">"Shop by category"</h2>
        <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
          {CATEGORIES.iter().map(|c| view! {
            <a href=c.path class="block p-6 rounded-xl border border-gray-200 text-center font-medium hover:border-amber-600 hover:text-amber-600">
              {c.label}
            </a>
          }).collect_view()}
        </div>
      </section>
    }
}
