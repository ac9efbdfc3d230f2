//! Transient panels: the mobile menu, the theme dropdown and the project
//! modal, plus the Escape key that closes them.
//!
//! The three panels are independent. Opening one does not close another;
//! Escape closes whichever are open.

use crate::projects::{ProjectCatalog, ProjectRecord};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayAction {
    ToggleMenu,
    CloseMenu,
    ToggleDropdown,
    CloseDropdown,
    OpenProject(String),
    CloseProject,
    Escape,
}

/// Modal content survives closing, the way the rendered fields do.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectModal {
    content: Option<Rc<ProjectRecord>>,
    visible: bool,
}

impl ProjectModal {
    pub fn content(&self) -> Option<&ProjectRecord> {
        self.content.as_deref()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Overlays {
    catalog: Rc<ProjectCatalog>,
    menu_open: bool,
    dropdown_open: bool,
    modal: ProjectModal,
}

impl Overlays {
    pub fn new(catalog: Rc<ProjectCatalog>) -> Self {
        Self {
            catalog,
            menu_open: false,
            dropdown_open: false,
            modal: ProjectModal::default(),
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn modal(&self) -> &ProjectModal {
        &self.modal
    }

    /// Page scrolling is suppressed while the menu or the modal is up.
    pub fn scroll_locked(&self) -> bool {
        self.menu_open || self.modal.visible
    }

    /// Returns whether anything changed.
    pub fn apply(&mut self, action: OverlayAction) -> bool {
        let before = (self.menu_open, self.dropdown_open, self.modal.clone());

        match action {
            OverlayAction::ToggleMenu => self.menu_open = !self.menu_open,
            OverlayAction::CloseMenu => self.menu_open = false,
            OverlayAction::ToggleDropdown => self.dropdown_open = !self.dropdown_open,
            OverlayAction::CloseDropdown => self.dropdown_open = false,
            OverlayAction::OpenProject(id) => self.open_project(&id),
            OverlayAction::CloseProject => self.modal.visible = false,
            OverlayAction::Escape => {
                if self.menu_open {
                    self.menu_open = false;
                }
                if self.dropdown_open {
                    self.dropdown_open = false;
                }
                if self.modal.visible {
                    self.modal.visible = false;
                }
            }
        }

        before != (self.menu_open, self.dropdown_open, self.modal.clone())
    }

    // Unknown ids leave the modal exactly as it was.
    fn open_project(&mut self, id: &str) {
        let Some(record) = self.catalog.get(id) else {
            return;
        };

        self.modal.content = Some(Rc::clone(record));
        self.modal.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{fixtures::site_document, SiteConfig};

    fn overlays() -> Overlays {
        let config = SiteConfig::from_json(&site_document().to_string()).expect("fixture loads");
        Overlays::new(Rc::new(config.projects))
    }

    #[test]
    fn opening_a_known_project_fills_the_modal() {
        let mut overlays = overlays();

        assert!(overlays.apply(OverlayAction::OpenProject("webae".to_string())));

        let modal = overlays.modal();
        let content = modal.content().expect("modal has content");
        assert!(modal.visible());
        assert_eq!(content.title, "Web AE Client");
        assert_eq!(content.company, "Supracontrols Private Limited");
        assert_eq!(content.features, ["Radar Plot visualization", "PDF/Excel export"]);
        assert!(overlays.scroll_locked());
    }

    #[test]
    fn unknown_project_is_a_silent_no_op() {
        let mut overlays = overlays();
        let before = overlays.clone();

        assert!(!overlays.apply(OverlayAction::OpenProject("nonexistent".to_string())));
        assert_eq!(overlays, before);
        assert!(!overlays.modal().visible());
    }

    #[test]
    fn closing_keeps_the_last_content() {
        let mut overlays = overlays();
        overlays.apply(OverlayAction::OpenProject("graciebjj".to_string()));
        overlays.apply(OverlayAction::CloseProject);

        assert!(!overlays.modal().visible());
        assert!(!overlays.scroll_locked());
        assert_eq!(
            overlays.modal().content().map(|record| record.id.as_str()),
            Some("graciebjj")
        );
    }

    #[test]
    fn escape_with_menu_open_closes_it_and_unlocks_scroll() {
        let mut overlays = overlays();
        overlays.apply(OverlayAction::ToggleMenu);
        assert!(overlays.scroll_locked());

        assert!(overlays.apply(OverlayAction::Escape));
        assert!(!overlays.menu_open());
        assert!(!overlays.scroll_locked());
    }

    #[test]
    fn escape_closes_every_open_panel() {
        let mut overlays = overlays();
        overlays.apply(OverlayAction::ToggleMenu);
        overlays.apply(OverlayAction::ToggleDropdown);
        overlays.apply(OverlayAction::OpenProject("webae".to_string()));

        overlays.apply(OverlayAction::Escape);

        assert!(!overlays.menu_open());
        assert!(!overlays.dropdown_open());
        assert!(!overlays.modal().visible());
    }

    #[test]
    fn escape_with_nothing_open_changes_nothing() {
        let mut overlays = overlays();

        assert!(!overlays.apply(OverlayAction::Escape));
    }

    #[test]
    fn panels_do_not_close_each_other() {
        let mut overlays = overlays();
        overlays.apply(OverlayAction::ToggleMenu);
        overlays.apply(OverlayAction::OpenProject("webae".to_string()));
        overlays.apply(OverlayAction::CloseProject);

        // The menu still holds the scroll lock on its own.
        assert!(overlays.menu_open());
        assert!(overlays.scroll_locked());

        overlays.apply(OverlayAction::ToggleMenu);
        assert!(!overlays.menu_open());
    }
}
