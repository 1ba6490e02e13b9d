// ui/src/routes.rs
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::{
    NestedRoute, ParamSegment, PartialPathMatch, PathSegment, PossibleRouteMatch, RouteDefs,
    StaticSegment, path,
};

use crate::pages::{
    about::About,
    account::{Login, Register},
    blog::{Blog, BlogDetail},
    cart::{Cart, Checkout},
    contact::Contact,
    home::Home,
    not_found::NotFound,
    shop::{ProductDetail, Shop, category_label},
};

/// One path segment naming a menu category, captured as `category`.
/// Any other slug leaves the path to the not-found fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySegment;

const CATEGORY: ParamSegment = ParamSegment("category");

impl PossibleRouteMatch for CategorySegment {
    fn optional(&self) -> bool {
        false
    }

    fn test<'a>(&self, path: &'a str) -> Option<PartialPathMatch<'a>> {
        let slug = path.strip_prefix('/')?.split('/').next()?;
        category_label(slug)?;
        CATEGORY.test(path)
    }

    fn generate_path(&self, path: &mut Vec<PathSegment>) {
        CATEGORY.generate_path(path);
    }
}

// Each row becomes a `<Route>` under the shell's `<Routes>` and a
// `NestedRoute` in `is_routed`, so both sides match with the router's rules.
macro_rules! route_table {
    ($($segments:expr => $page:ident,)+) => {
        #[component]
        pub fn RoutesMenu() -> impl IntoView {
            view! {
                <Routes fallback=|| view! { <NotFound/> }>
                    $(<Route path=$segments view=$page/>)+
                </Routes>
            }
        }

        /// Whether the router mounts a page for `path` instead of the fallback.
        pub fn is_routed(path: &str) -> bool {
            RouteDefs::new(($(NestedRoute::new($segments, $page),)+))
                .match_route(path)
                .is_some()
        }
    };
}

route_table! {
    path!("/") => Home,
    path!("/shop") => Shop,
    (StaticSegment("shop"), CategorySegment) => Shop,
    path!("/product/:id") => ProductDetail,
    path!("/blog") => Blog,
    path!("/blog/:slug") => BlogDetail,
    path!("/about") => About,
    path!("/contact") => Contact,
    path!("/cart") => Cart,
    path!("/checkout") => Checkout,
    path!("/login") => Login,
    path!("/register") => Register,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::{CATEGORIES, FOOTER_COLUMNS, NAV_LINKS};

    #[test]
    fn static_routes_are_routed() {
        for path in [
            "/", "/shop", "/blog", "/about", "/contact", "/cart", "/checkout", "/login",
            "/register",
        ] {
            assert!(is_routed(path), "{path}");
        }
    }

    #[test]
    fn parameter_routes_take_one_segment() {
        assert!(is_routed("/product/42"));
        assert!(is_routed("/blog/beard-care-101"));
        assert!(!is_routed("/product"));
        assert!(!is_routed("/product/"));
        assert!(!is_routed("/product/42/reviews"));
        assert!(!is_routed("/blog/a/b"));
    }

    #[test]
    fn unknown_paths_fall_back() {
        for path in ["/nonexistent", "/careers", "/cart/items/3", "/shopping", "/about-us"] {
            assert!(!is_routed(path), "{path}");
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert!(is_routed("/shop/"));
        assert!(is_routed("/about/"));
        assert!(is_routed("/shop/skincare/"));
    }

    #[test]
    fn only_menu_categories_are_routed() {
        for category in CATEGORIES {
            assert!(is_routed(category.path), "{}", category.path);
        }
        assert!(!is_routed("/shop/not-a-category"));
        assert!(!is_routed("/shop/Skincare"));
    }

    #[test]
    fn category_segment_captures_the_slug() {
        let matched = (StaticSegment("shop"), CategorySegment)
            .test("/shop/haircare")
            .expect("known category");
        assert!(matched.is_complete());
        let params = matched.params();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].0, "category");
        assert_eq!(params[0].1, "haircare");

        assert!(CategorySegment.test("/fragrances/extra").is_some());
        assert!(CategorySegment.test("/").is_none());
        assert!(CategorySegment.test("fragrances").is_none());
    }

    #[test]
    fn header_links_all_land_on_pages() {
        for link in NAV_LINKS {
            assert!(is_routed(link.path), "{}", link.path);
        }
        // footer columns point at pages the shop does not have yet
        let missing: Vec<_> = FOOTER_COLUMNS
            .iter()
            .flat_map(|g| g.links)
            .filter(|l| !is_routed(l.path))
            .map(|l| l.path)
            .collect();
        assert!(missing.contains(&"/careers"));
        assert!(!missing.contains(&"/blog"));
    }
}
