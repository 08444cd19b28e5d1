//! Maps section visibility to animation classes and card view models.

use crate::content::{ContactEntry, ContentItem, StatusBadge};
use crate::visibility::{SectionId, VisibilitySet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl RevealState {
    /// Revealed iff `section` has been seen. Pure; call it on every render.
    pub fn of(section: &SectionId, visible: &VisibilitySet) -> Self {
        if visible.contains(section) {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }

    pub fn container_class(self) -> &'static str {
        match self {
            RevealState::Hidden => "section-inner concealed",
            RevealState::Revealed => "section-inner shown",
        }
    }

    pub fn heading_class(self) -> &'static str {
        match self {
            RevealState::Hidden => "section-heading",
            RevealState::Revealed => "section-heading slide-in-left",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            RevealState::Hidden => "card concealed",
            RevealState::Revealed => "card slide-in-up",
        }
    }
}

pub fn animation_delay(index: usize, step_ms: u32, offset_ms: u32) -> String {
    let delay = index as u64 * u64::from(step_ms) + u64::from(offset_ms);
    format!("animation-delay: {}ms", delay)
}

/// Which table a card comes from; drives its `data-testid` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Project,
    Subsidiary,
    Contact,
    Media,
}

impl CardKind {
    fn slug(self) -> &'static str {
        match self {
            CardKind::Project => "project",
            CardKind::Subsidiary => "subsidiary",
            CardKind::Contact => "contact",
            CardKind::Media => "media",
        }
    }
}

/// A status badge ready to draw. Only built for items that carry a status.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeView {
    pub label: &'static str,
    pub class: String,
    pub test_id: String,
}

/// Everything a card needs to render, computed without touching the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub kind: CardKind,
    pub index: usize,
    pub title: &'static str,
    pub body: &'static str,
    pub image: Option<&'static str>,
    pub badge: Option<BadgeView>,
    pub link: Option<&'static str>,
    pub class: String,
    pub style: String,
}

impl CardView {
    pub fn from_item(
        kind: CardKind,
        index: usize,
        item: &ContentItem,
        reveal: RevealState,
        stagger_ms: u32,
    ) -> Self {
        Self::new(kind, index, reveal, stagger_ms, item.title, item.description)
            .with_image(item.image)
            .with_badge(item.status)
            .with_link(item.link)
    }

    pub fn from_contact(
        index: usize,
        contact: &ContactEntry,
        reveal: RevealState,
        stagger_ms: u32,
    ) -> Self {
        Self::new(CardKind::Contact, index, reveal, stagger_ms, contact.title, contact.info)
            .with_link(Some(contact.link))
    }

    fn new(
        kind: CardKind,
        index: usize,
        reveal: RevealState,
        stagger_ms: u32,
        title: &'static str,
        body: &'static str,
    ) -> Self {
        Self {
            kind,
            index,
            title,
            body,
            image: None,
            badge: None,
            link: None,
            class: reveal.card_class().to_string(),
            style: animation_delay(index, stagger_ms, 0),
        }
    }

    fn with_image(mut self, image: Option<&'static str>) -> Self {
        self.image = image;
        self
    }

    fn with_badge(mut self, status: Option<StatusBadge>) -> Self {
        self.badge = status.map(|status| BadgeView {
            label: status.label,
            class: format!("status-badge {}", status.color.css_class()),
            test_id: format!("status-{}-{}", self.kind.slug(), self.index),
        });
        self
    }

    fn with_link(mut self, link: Option<&'static str>) -> Self {
        if link.is_some() {
            self.class.push_str(" clickable");
        }
        self.link = link;
        self
    }

    pub fn test_id(&self) -> String {
        format!("card-{}-{}", self.kind.slug(), self.index)
    }

    pub fn title_test_id(&self) -> String {
        format!("text-{}-title-{}", self.kind.slug(), self.index)
    }

    pub fn body_test_id(&self) -> String {
        format!("text-{}-body-{}", self.kind.slug(), self.index)
    }
}

/// One view per item, in table order.
pub fn item_cards(
    kind: CardKind,
    items: &[ContentItem],
    reveal: RevealState,
    stagger_ms: u32,
) -> Vec<CardView> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| CardView::from_item(kind, index, item, reveal, stagger_ms))
        .collect()
}

pub fn contact_cards(
    contacts: &[ContactEntry],
    reveal: RevealState,
    stagger_ms: u32,
) -> Vec<CardView> {
    contacts
        .iter()
        .enumerate()
        .map(|(index, contact)| CardView::from_contact(index, contact, reveal, stagger_ms))
        .collect()
}
