use crate::links::NavLink;

/// Vertical scroll offset, in CSS pixels, past which the header turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// View state owned by one mounted header.
///
/// The three fields change on unrelated triggers and are reset by
/// [`HeaderState::on_navigate`]; they are deliberately not folded into a
/// single enum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub mobile_menu_open: bool,
    pub scrolled: bool,
    /// Label of the [`NavLink`] whose dropdown is disclosed. Only ever set
    /// from a link with `has_submenu`.
    pub active_submenu: Option<&'static str>,
}

impl HeaderState {
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// Hover disclosure for mouse and pen pointers.
    pub fn pointer_enter(&mut self, link: &'static NavLink) {
        if link.has_submenu {
            self.active_submenu = Some(link.label);
        }
    }

    pub fn pointer_leave(&mut self, link: &'static NavLink) {
        if self.active_submenu == Some(link.label) {
            self.active_submenu = None;
        }
    }

    /// Tap-to-toggle disclosure for touch pointers, which have no hover.
    pub fn tap_submenu(&mut self, link: &'static NavLink) {
        if !link.has_submenu {
            return;
        }
        self.active_submenu = match self.active_submenu {
            Some(open) if open == link.label => None,
            _ => Some(link.label),
        };
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.active_submenu = None;
    }

    /// A link inside the dropdown or the mobile panel was selected.
    pub fn close_menus(&mut self) {
        self.mobile_menu_open = false;
        self.active_submenu = None;
    }

    pub fn on_navigate(&mut self) {
        self.close_menus();
    }

    pub fn is_open(&self, link: &NavLink) -> bool {
        self.active_submenu == Some(link.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::NAV_LINKS;

    fn link(label: &str) -> &'static NavLink {
        NAV_LINKS.iter().find(|l| l.label == label).unwrap()
    }

    static CATALOG: NavLink = NavLink {
        label: "Catalog",
        path: "/catalog",
        has_submenu: true,
    };

    #[test]
    fn scrolled_tracks_threshold_without_hysteresis() {
        let mut s = HeaderState::default();
        for offset in [0.0, 49.9, 50.0, 50.1, 400.0, 50.0, 51.0, 0.0, -12.0] {
            s.on_scroll(offset);
            assert_eq!(s.scrolled, offset > 50.0, "offset {offset}");
        }

        let mut from_true = HeaderState { scrolled: true, ..Default::default() };
        from_true.on_scroll(50.0);
        assert!(!from_true.scrolled);
    }

    #[test]
    fn hover_on_plain_link_is_ignored() {
        let mut s = HeaderState::default();
        s.pointer_enter(link("Home"));
        assert_eq!(s.active_submenu, None);

        s.pointer_enter(link("Shop"));
        s.pointer_enter(link("About"));
        assert_eq!(s.active_submenu, Some("Shop"));

        s.tap_submenu(link("Contact"));
        assert_eq!(s.active_submenu, Some("Shop"));
    }

    #[test]
    fn last_entered_submenu_wins() {
        let mut s = HeaderState::default();
        s.pointer_enter(link("Shop"));
        s.pointer_enter(&CATALOG);
        assert_eq!(s.active_submenu, Some("Catalog"));
        assert!(!s.is_open(link("Shop")));

        // a late leave from the first region must not close the second
        s.pointer_leave(link("Shop"));
        assert_eq!(s.active_submenu, Some("Catalog"));

        s.pointer_leave(&CATALOG);
        assert_eq!(s.active_submenu, None);
    }

    #[test]
    fn tap_toggles_and_replaces() {
        let mut s = HeaderState::default();
        s.tap_submenu(link("Shop"));
        assert!(s.is_open(link("Shop")));
        s.tap_submenu(&CATALOG);
        assert_eq!(s.active_submenu, Some("Catalog"));
        s.tap_submenu(&CATALOG);
        assert_eq!(s.active_submenu, None);
    }

    #[test]
    fn navigation_resets_disclosure() {
        let states = [
            HeaderState::default(),
            HeaderState { mobile_menu_open: true, scrolled: true, active_submenu: Some("Shop") },
            HeaderState { mobile_menu_open: false, scrolled: false, active_submenu: Some("Shop") },
            HeaderState { mobile_menu_open: true, scrolled: false, active_submenu: None },
        ];
        for mut s in states {
            let scrolled = s.scrolled;
            s.on_navigate();
            assert!(!s.mobile_menu_open);
            assert_eq!(s.active_submenu, None);
            assert_eq!(s.scrolled, scrolled, "scroll style is not navigation state");
        }
    }

    #[test]
    fn double_toggle_restores_mobile_menu() {
        for open in [false, true] {
            let mut s = HeaderState { mobile_menu_open: open, ..Default::default() };
            s.toggle_mobile_menu();
            assert_eq!(s.mobile_menu_open, !open);
            s.toggle_mobile_menu();
            assert_eq!(s.mobile_menu_open, open);
        }
    }

    #[test]
    fn toggling_mobile_menu_clears_submenu() {
        let mut s = HeaderState::default();
        s.pointer_enter(link("Shop"));
        s.toggle_mobile_menu();
        assert!(s.mobile_menu_open);
        assert_eq!(s.active_submenu, None);
    }

    #[test]
    fn selecting_a_link_closes_everything() {
        let mut s = HeaderState::default();
        s.toggle_mobile_menu();
        s.tap_submenu(link("Shop"));
        s.close_menus();
        assert_eq!(s, HeaderState::default());
    }
}
