//! Scroll-driven page state: navbar shading, active nav links, reveals and
//! anchor scrolling. Everything here is recomputed per event; nothing is
//! debounced.

pub const NAVBAR_SCROLLED_AFTER: f64 = 100.0;
pub const SECTION_ACTIVATION_OFFSET: f64 = 150.0;
pub const REVEAL_POINT: f64 = 150.0;
pub const HEADER_OFFSET: f64 = 80.0;

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Sections are tested one by one, so overlapping sections can both match.
    pub fn is_current(&self, scroll_y: f64) -> bool {
        let top = self.offset_top - SECTION_ACTIVATION_OFFSET;
        scroll_y > top && scroll_y <= top + self.height
    }
}

pub fn active_section_ids<'a, I>(scroll_y: f64, sections: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, SectionBounds)>,
{
    sections
        .into_iter()
        .filter(|(_, bounds)| bounds.is_current(scroll_y))
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Element groups that fade in as they scroll into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealGroup {
    AboutContent,
    SkillCategory,
    ProjectCard,
    TimelineItem,
    ContactContent,
}

impl RevealGroup {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::AboutContent => "about-content",
            Self::SkillCategory => "skill-category",
            Self::ProjectCard => "project-card",
            Self::TimelineItem => "timeline-item",
            Self::ContactContent => "contact-content",
        }
    }
}

/// Staggered `transition-delay` for the `index`th member of a group.
pub fn reveal_delay(index: usize) -> String {
    format!("{}s", index as f64 / 10.0)
}

/// Latches once the element's top edge comes within [`REVEAL_POINT`] of the
/// viewport bottom. Scrolling back up never clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealGate {
    revealed: bool,
}

impl RevealGate {
    pub fn observe(&mut self, element_top: f64, viewport_height: f64) -> bool {
        if element_top < viewport_height - REVEAL_POINT {
            self.revealed = true;
        }
        self.revealed
    }
}

/// Document offset for an anchor jump that clears the fixed header.
pub fn smooth_scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - HEADER_OFFSET
}

/// `#about` -> `about`; anything that is not a same-page anchor is `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
