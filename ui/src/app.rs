use leptos::prelude::*;
use leptos_meta::{Meta, provide_meta_context};
use leptos_router::components::Router;

use crate::components::{footer::Footer, header::Header};
use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Meta
        name="description"
        content="Premium men's grooming essentials crafted with natural ingredients."
      />
      <Router>
        <Header/>

        // header is fixed, so push content below it
        <main class="min-h-screen pt-16 md:pt-20">
          <RoutesMenu/>
        </main>

        <Footer/>
      </Router>
    }
}
