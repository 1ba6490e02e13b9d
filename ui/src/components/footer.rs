use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::header::Logo;
use crate::icons::{Glyph, Icon};
use crate::links::{CONTACT, FOOTER_COLUMNS, FooterGroup, LEGAL, PAYMENT_METHODS, SOCIAL_LINKS};

/// Trimmed address if it is worth handing to a subscriber.
fn subscription_email(raw: &str) -> Option<String> {
    let email = raw.trim();
    let (user, domain) = email.split_once('@')?;
    (!user.is_empty() && !domain.is_empty()).then(|| email.to_owned())
}

#[component]
pub fn Footer(
    /// Receives the address typed into the newsletter field. Without it the
    /// form renders but submitting does nothing.
    #[prop(optional)]
    on_subscribe: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white">
            <Newsletter on_subscribe/>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-8">
                    <div class="lg:col-span-2">
                        <div class="mb-6">
                            <Logo large=true/>
                        </div>
                        <p class="text-gray-400 mb-6 max-w-md">
                            "Premium men's grooming essentials crafted with natural ingredients \
                             to enhance your daily routine and boost your confidence."
                        </p>
                        <ContactDetails/>
                    </div>

                    {FOOTER_COLUMNS.iter().map(|group| view! { <LinkColumn group/> }).collect_view()}
                </div>

                <div class="mt-12 pt-8 border-t border-gray-800">
                    <div class="flex flex-col lg:flex-row justify-between items-center space-y-6 lg:space-y-0">
                        <SocialLinks/>
                        <PaymentBadges/>
                    </div>
                </div>
            </div>

            <BottomBar/>
        </footer>
    }
}

#[component]
fn Newsletter(on_subscribe: Option<Callback<String>>) -> impl IntoView {
    let email = RwSignal::new(String::new());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(address) = email.with_untracked(|raw| subscription_email(raw)) else {
            warn!("newsletter: ignoring submission without a usable address");
            return;
        };
        match on_subscribe {
            Some(cb) => {
                cb.run(address);
                email.set(String::new());
            }
            None => warn!("newsletter: no subscriber registered; dropping submission"),
        }
    };

    view! {
        <div class="border-b border-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-center">
                    <div>
                        <h3 class="text-2xl font-bold mb-2">"Stay Updated"</h3>
                        <p class="text-gray-400">
                            "Get the latest grooming tips, product launches, and exclusive offers."
                        </p>
                    </div>
                    <form class="flex flex-col sm:flex-row gap-4" on:submit=submit>
                        <div class="flex-1">
                            <input
                                type="email"
                                placeholder="Enter your email"
                                aria-label="Email address"
                                class="w-full px-4 py-3 bg-gray-800 border border-gray-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-amber-600 focus:border-transparent"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="px-6 py-3 bg-gradient-to-r from-amber-600 to-orange-700 text-white rounded-lg font-medium flex items-center justify-center space-x-2 hover:from-amber-700 hover:to-orange-800 transition-all duration-300"
                        >
                            <span>"Subscribe"</span>
                            <Glyph icon=Icon::ArrowRight classes="w-4 h-4"/>
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    let row = |icon: Icon, text: &'static str| {
        view! {
            <div class="flex items-center space-x-3">
                <Glyph icon classes="w-5 h-5 text-amber-600"/>
                <span class="text-gray-400">{text}</span>
            </div>
        }
    };

    view! {
        <div class="space-y-3">
            {row(Icon::Mail, CONTACT.email)}
            {row(Icon::Phone, CONTACT.phone)}
            {row(Icon::MapPin, CONTACT.address)}
        </div>
    }
}

#[component]
fn LinkColumn(group: &'static FooterGroup) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-lg font-semibold mb-6">{group.title}</h4>
            <ul class="space-y-3">
                {group
                    .links
                    .iter()
                    .map(|link| view! {
                        <li>
                            <a
                                href=link.path
                                class="text-gray-400 hover:text-white transition-colors duration-300 text-left"
                            >
                                {link.label}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-6">
            <span class="text-gray-400 font-medium">"Follow Us:"</span>
            <div class="flex space-x-4">
                {SOCIAL_LINKS
                    .iter()
                    .map(|social| view! {
                        <a
                            href=social.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=social.label
                            class=format!(
                                "text-gray-400 {} transition-all duration-300 hover:-translate-y-0.5 hover:scale-110",
                                social.hover_class,
                            )
                        >
                            <Glyph icon=social.icon classes="w-6 h-6"/>
                        </a>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PaymentBadges() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4">
            <span class="text-gray-400 font-medium">"We Accept:"</span>
            <div class="flex space-x-3">
                {PAYMENT_METHODS
                    .iter()
                    .map(|method| view! {
                        <div class="px-3 py-1 bg-gray-800 rounded text-xs text-gray-300 border border-gray-700">
                            {*method}
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn BottomBar() -> impl IntoView {
    view! {
        <div class="bg-gray-800 border-t border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <div class="flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                    <div class="flex items-center space-x-1 text-gray-400 text-sm">
                        <span>"© 2024 The Man Company. Made with"</span>
                        <Glyph icon=Icon::Heart classes="w-4 h-4 text-red-500 fill-current"/>
                        <span>"in India. All rights reserved."</span>
                    </div>
                    <div class="flex space-x-6">
                        {LEGAL
                            .links
                            .iter()
                            .map(|link| view! {
                                <a
                                    href=link.path
                                    class="text-gray-400 hover:text-white transition-colors duration-300 text-sm"
                                >
                                    {link.label}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_email;

    #[test]
    fn trims_and_accepts_plausible_addresses() {
        assert_eq!(
            subscription_email("  groom@example.com \n").as_deref(),
            Some("groom@example.com")
        );
    }

    #[test]
    fn rejects_blank_or_partial_addresses() {
        for raw in ["", "   ", "groom", "@example.com", "groom@"] {
            assert_eq!(subscription_email(raw), None, "{raw:?}");
        }
    }
}
