// ui/src/components/header.rs
use leptos::ev::{MouseEvent, PointerEvent};
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use leptos_use::use_window_scroll;

pub mod state;

use self::state::HeaderState;
use crate::icons::{Glyph, Icon};
use crate::links::{BRAND, CATEGORIES, NAV_LINKS, NavLink};

/// Touch pointers have no hover; their dropdowns open from the chevron.
fn hovers(pointer_type: &str) -> bool {
    pointer_type != "touch"
}

fn on_hover(state: RwSignal<HeaderState>, link: &'static NavLink, pointer_type: &str, entering: bool) {
    if !hovers(pointer_type) {
        return;
    }
    if entering {
        state.update(|s| s.pointer_enter(link));
    } else {
        state.update(|s| s.pointer_leave(link));
    }
}

fn on_chevron_down(state: RwSignal<HeaderState>, link: &'static NavLink, pointer_type: &str) {
    if !hovers(pointer_type) {
        state.update(|s| s.tap_submenu(link));
    }
}

/// Folds a scroll offset into the state. Subscribers are only notified when
/// `scrolled` flips.
fn follow_scroll(state: RwSignal<HeaderState>, y: f64) {
    state.maybe_update(|s| {
        let before = s.scrolled;
        s.on_scroll(y);
        before != s.scrolled
    });
}

/// One run of the navigation effect. The first run only records the path;
/// later runs close the menus whenever it differs from the previous one.
fn follow_navigation(state: RwSignal<HeaderState>, prev: Option<String>, path: String) -> String {
    if prev.is_some_and(|p| p != path) {
        log!("navigated to {path}; closing header menus");
        state.update(HeaderState::on_navigate);
    }
    path
}

fn link_class(active: bool, base: &str) -> String {
    let color = if active { "text-amber-600" } else { "text-gray-700" };
    format!("{base} transition-colors {color}")
}

#[component]
pub fn Header() -> impl IntoView {
    let state = RwSignal::new(HeaderState::default());
    // the router's location drives both highlighting and the reset
    let pathname = use_location().pathname;

    // the window listener is dropped together with this component's owner
    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| follow_scroll(state, scroll_y.get()));
    Effect::new(move |prev: Option<String>| follow_navigation(state, prev, pathname.get()));

    let scrolled = Memo::new(move |_| state.with(|s| s.scrolled));
    let menu_open = Memo::new(move |_| state.with(|s| s.mobile_menu_open));

    let header_class = move || {
        let skin = if scrolled.get() {
            "bg-white/95 backdrop-blur-md shadow-lg border-b border-gray-100"
        } else {
            "bg-transparent"
        };
        format!("fixed top-0 left-0 right-0 z-50 transition-all duration-300 {skin}")
    };

    view! {
        <header class=header_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 md:h-20">
                    <Logo/>

                    <nav class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(move |link| view! { <DesktopNavItem link state pathname/> })
                            .collect_view()}
                    </nav>

                    <DesktopActions/>

                    <button
                        type="button"
                        class="md:hidden p-2 text-gray-600 hover:text-amber-600"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| state.update(HeaderState::toggle_mobile_menu)
                    >
                        {move || {
                            let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                            view! { <Glyph icon classes="w-6 h-6"/> }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <MobilePanel state pathname/>
            </Show>
        </header>
    }
}

/// Brand mark linking home.
#[component]
pub fn Logo(#[prop(optional)] large: bool) -> impl IntoView {
    let (tile, letter, word) = if large {
        ("w-12 h-12", "text-xl", "text-2xl")
    } else {
        ("w-10 h-10", "text-lg", "text-xl md:text-2xl")
    };

    view! {
        <a href="/" class="flex items-center space-x-2 transition-transform hover:scale-105 active:scale-95">
            <div class=format!("{tile} bg-gradient-to-br from-amber-600 to-orange-700 rounded-lg flex items-center justify-center")>
                <span class=format!("text-white font-bold {letter}")>"T"</span>
            </div>
            <span class=format!("{word} font-bold bg-gradient-to-r from-amber-600 to-orange-700 bg-clip-text text-transparent")>
                {BRAND}
            </span>
        </a>
    }
}

#[component]
fn DesktopNavItem(
    link: &'static NavLink,
    state: RwSignal<HeaderState>,
    pathname: Memo<String>,
) -> impl IntoView {
    let open = move || state.with(|s| s.is_open(link));
    let class = move || {
        link_class(
            link.is_active(&pathname.get()),
            "flex items-center space-x-1 text-sm font-medium hover:text-amber-600",
        )
    };

    // mouse and pen disclose on hover; touch has no hover and uses the chevron
    view! {
        <div
            class="relative"
            on:pointerenter=move |ev: PointerEvent| on_hover(state, link, &ev.pointer_type(), true)
            on:pointerleave=move |ev: PointerEvent| on_hover(state, link, &ev.pointer_type(), false)
        >
            <div class="flex items-center">
                <a href=link.path class=class>
                    <span>{link.label}</span>
                </a>
                {link.has_submenu.then(move || view! {
                    <button
                        type="button"
                        class="p-1 text-gray-700 hover:text-amber-600"
                        aria-label=format!("{} categories", link.label)
                        aria-haspopup="true"
                        aria-expanded=move || open().to_string()
                        on:pointerdown=move |ev: PointerEvent| {
                            on_chevron_down(state, link, &ev.pointer_type())
                        }
                        // keyboard activation arrives as a click with no pointer detail
                        on:click=move |ev: MouseEvent| {
                            if ev.detail() == 0 {
                                state.update(|s| s.tap_submenu(link));
                            }
                        }
                    >
                        <Glyph icon=Icon::ChevronDown classes="w-4 h-4"/>
                    </button>
                })}
            </div>

            <Show when=open>
                <div class="absolute top-full left-0 mt-2 w-48 bg-white rounded-lg shadow-xl border border-gray-100 py-2 z-50">
                    {CATEGORIES
                        .iter()
                        .map(move |category| view! {
                            <a
                                href=category.path
                                class="block px-4 py-2 text-sm text-gray-700 hover:bg-amber-50 hover:text-amber-600 transition-colors"
                                on:click=move |_| state.update(HeaderState::close_menus)
                            >
                                {category.label}
                            </a>
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn DesktopActions() -> impl IntoView {
    let class = "p-2 text-gray-600 hover:text-amber-600 transition-colors";

    view! {
        <div class="hidden md:flex items-center space-x-4">
            <button type="button" class=class aria-label="Search">
                <Glyph icon=Icon::Search classes="w-5 h-5"/>
            </button>
            <button type="button" class=class aria-label="Wishlist">
                <Glyph icon=Icon::Heart classes="w-5 h-5"/>
            </button>
            <a href="/cart" class=class aria-label="Cart">
                <Glyph icon=Icon::Cart classes="w-5 h-5"/>
            </a>
            <a href="/login" class=class aria-label="Account">
                <Glyph icon=Icon::User classes="w-5 h-5"/>
            </a>
        </div>
    }
}

#[component]
fn MobilePanel(state: RwSignal<HeaderState>, pathname: Memo<String>) -> impl IntoView {
    let close = move |_: MouseEvent| state.update(HeaderState::close_menus);

    let item = move |link: &'static NavLink| {
        let class = move || link_class(link.is_active(&pathname.get()), "block text-lg font-medium");
        view! {
            <div>
                <a href=link.path class=class on:click=close>
                    {link.label}
                </a>
                {link.has_submenu.then(move || view! {
                    <div class="mt-2 pl-4 space-y-2">
                        {CATEGORIES
                            .iter()
                            .map(move |category| view! {
                                <a
                                    href=category.path
                                    class="block text-sm text-gray-600 hover:text-amber-600"
                                    on:click=close
                                >
                                    {category.label}
                                </a>
                            })
                            .collect_view()}
                    </div>
                })}
            </div>
        }
    };

    let action = "flex flex-col items-center space-y-1 text-gray-600";

    view! {
        <div class="md:hidden bg-white border-t border-gray-100">
            <div class="px-4 py-6 space-y-6">
                <div class="space-y-4">
                    {NAV_LINKS.iter().map(item).collect_view()}
                </div>

                <div class="flex items-center justify-around pt-4 border-t border-gray-100">
                    <button type="button" class=action>
                        <Glyph icon=Icon::Search classes="w-6 h-6"/>
                        <span class="text-xs">"Search"</span>
                    </button>
                    <button type="button" class=action>
                        <Glyph icon=Icon::Heart classes="w-6 h-6"/>
                        <span class="text-xs">"Wishlist"</span>
                    </button>
                    <a href="/cart" class=action on:click=close>
                        <Glyph icon=Icon::Cart classes="w-6 h-6"/>
                        <span class="text-xs">"Cart"</span>
                    </a>
                    <a href="/login" class=action on:click=close>
                        <Glyph icon=Icon::User classes="w-6 h-6"/>
                        <span class="text-xs">"Account"</span>
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::NAV_LINKS;

    fn shop() -> &'static NavLink {
        NAV_LINKS.iter().find(|l| l.has_submenu).unwrap()
    }

    #[test]
    fn only_touch_skips_hover() {
        assert!(hovers("mouse"));
        assert!(hovers("pen"));
        assert!(!hovers("touch"));
    }

    #[test]
    fn touch_hover_is_ignored() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(HeaderState::default());

            on_hover(state, shop(), "touch", true);
            assert_eq!(state.with_untracked(|s| s.active_submenu), None);

            on_hover(state, shop(), "mouse", true);
            assert!(state.with_untracked(|s| s.is_open(shop())));

            // a stray touch leave must not close what the mouse opened
            on_hover(state, shop(), "touch", false);
            assert!(state.with_untracked(|s| s.is_open(shop())));

            on_hover(state, shop(), "pen", false);
            assert_eq!(state.with_untracked(|s| s.active_submenu), None);
        });
    }

    #[test]
    fn chevron_toggles_for_touch_only() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(HeaderState::default());

            on_chevron_down(state, shop(), "mouse");
            assert_eq!(state.with_untracked(|s| s.active_submenu), None);

            on_chevron_down(state, shop(), "touch");
            assert!(state.with_untracked(|s| s.is_open(shop())));

            on_chevron_down(state, shop(), "touch");
            assert_eq!(state.with_untracked(|s| s.active_submenu), None);
        });
    }

    #[test]
    fn first_navigation_run_keeps_menus() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(HeaderState::default());
            state.update(HeaderState::toggle_mobile_menu);

            let seen = follow_navigation(state, None, "/shop".into());
            assert_eq!(seen, "/shop");
            assert!(state.with_untracked(|s| s.mobile_menu_open));
        });
    }

    #[test]
    fn same_path_keeps_menus_and_new_path_closes_them() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(HeaderState::default());
            state.update(|s| {
                s.toggle_mobile_menu();
                s.tap_submenu(shop());
            });

            let prev = follow_navigation(state, Some("/shop".into()), "/shop".into());
            assert!(state.with_untracked(|s| s.mobile_menu_open && s.is_open(shop())));

            follow_navigation(state, Some(prev), "/about".into());
            state.with_untracked(|s| {
                assert!(!s.mobile_menu_open);
                assert_eq!(s.active_submenu, None);
            });
        });
    }

    #[test]
    fn scroll_only_flips_past_the_threshold() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(HeaderState::default());

            follow_scroll(state, 50.0);
            assert!(!state.with_untracked(|s| s.scrolled));

            follow_scroll(state, 51.0);
            assert!(state.with_untracked(|s| s.scrolled));

            follow_scroll(state, 400.0);
            assert!(state.with_untracked(|s| s.scrolled));

            follow_scroll(state, 0.0);
            assert!(!state.with_untracked(|s| s.scrolled));
        });
    }
}
