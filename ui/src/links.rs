// ui/src/links.rs
//! Static link tables shared by the header and the footer.
use crate::icons::Icon;

pub const BRAND: &str = "The Man Company";

/// A top-level navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub has_submenu: bool,
}

impl NavLink {
    const fn new(label: &'static str, path: &'static str) -> Self {
        Self { label, path, has_submenu: false }
    }

    const fn with_submenu(label: &'static str, path: &'static str) -> Self {
        Self { label, path, has_submenu: true }
    }

    /// Whether this link points at `current` (trailing slashes ignored).
    pub fn is_active(&self, current: &str) -> bool {
        trim_path(self.path) == trim_path(current)
    }
}

/// A plain (label, path) link: product categories and footer entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub path: &'static str,
}

pub type CategoryLink = Link;

const fn link(label: &'static str, path: &'static str) -> Link {
    Link { label, path }
}

fn trim_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink::new("Home", "/"),
    NavLink::with_submenu("Shop", "/shop"),
    NavLink::new("About", "/about"),
    NavLink::new("Contact", "/contact"),
];

pub const CATEGORIES: &[CategoryLink] = &[
    link("Skincare", "/shop/skincare"),
    link("Hair Care", "/shop/haircare"),
    link("Fragrances", "/shop/fragrances"),
    link("Body Care", "/shop/bodycare"),
    link("Grooming", "/shop/grooming"),
];

pub struct FooterGroup {
    pub title: &'static str,
    pub links: &'static [Link],
}

pub const COMPANY: FooterGroup = FooterGroup {
    title: "Company",
    links: &[
        link("About Us", "/about"),
        link("Careers", "/careers"),
        link("Press", "/press"),
        link("Blog", "/blog"),
    ],
};

pub const CUSTOMER_CARE: FooterGroup = FooterGroup {
    title: "Customer Care",
    links: &[
        link("Contact Us", "/contact"),
        link("FAQ", "/faq"),
        link("Shipping Info", "/shipping"),
        link("Returns", "/returns"),
        link("Size Guide", "/size-guide"),
    ],
};

pub const CATEGORY_GROUP: FooterGroup = FooterGroup {
    title: "Categories",
    links: CATEGORIES,
};

// rendered in the bottom bar rather than as a column
pub const LEGAL: FooterGroup = FooterGroup {
    title: "Legal",
    links: &[
        link("Privacy Policy", "/privacy"),
        link("Terms of Service", "/terms"),
        link("Cookie Policy", "/cookies"),
    ],
};

pub const FOOTER_COLUMNS: &[FooterGroup] = &[COMPANY, CUSTOMER_CARE, CATEGORY_GROUP];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub hover_class: &'static str,
    pub icon: Icon,
}

// TODO: replace the "#" placeholders once the brand accounts are confirmed
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", href: "#", hover_class: "hover:text-blue-600", icon: Icon::Facebook },
    SocialLink { label: "Twitter", href: "#", hover_class: "hover:text-blue-400", icon: Icon::Twitter },
    SocialLink { label: "Instagram", href: "#", hover_class: "hover:text-pink-600", icon: Icon::Instagram },
    SocialLink { label: "YouTube", href: "#", hover_class: "hover:text-red-600", icon: Icon::YouTube },
];

pub const PAYMENT_METHODS: &[&str] = &["Visa", "Mastercard", "PayPal", "GPay"];

pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

pub const CONTACT: Contact = Contact {
    email: "support@themancompany.com",
    phone: "+91 8000-123-456",
    address: "Mumbai, Maharashtra, India",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_links() -> impl Iterator<Item = Link> {
        FOOTER_COLUMNS
            .iter()
            .chain(std::iter::once(&LEGAL))
            .flat_map(|g| g.links.iter().copied())
            .chain(NAV_LINKS.iter().map(|l| link(l.label, l.path)))
    }

    #[test]
    fn no_empty_labels_or_paths() {
        for l in all_links() {
            assert!(!l.label.is_empty(), "empty label for {}", l.path);
            assert!(l.path.starts_with('/'), "{} has path {:?}", l.label, l.path);
        }
    }

    #[test]
    fn nav_labels_are_unique() {
        let labels: HashSet<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels.len(), NAV_LINKS.len());
    }

    #[test]
    fn only_shop_owns_a_submenu() {
        let owners: Vec<_> = NAV_LINKS.iter().filter(|l| l.has_submenu).map(|l| l.label).collect();
        assert_eq!(owners, ["Shop"]);
    }

    #[test]
    fn categories_live_under_shop() {
        for c in CATEGORIES {
            assert!(c.path.starts_with("/shop/"), "{}", c.path);
        }
    }

    #[test]
    fn active_ignores_trailing_slash() {
        let about = NAV_LINKS[2];
        assert!(about.is_active("/about"));
        assert!(about.is_active("/about/"));
        assert!(!about.is_active("/about/team"));

        let home = NAV_LINKS[0];
        assert!(home.is_active("/"));
        assert!(home.is_active(""));
        assert!(!home.is_active("/shop"));
    }
}
