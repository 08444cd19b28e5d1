use log::{debug, warn};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::error::{current_document, SiteError, SiteResult};

pub trait AnchorTarget {
    fn scroll_into_view_smoothly(&self);
}

/// Looks anchors up by id. Implemented by the DOM document.
pub trait AnchorSource {
    type Target: AnchorTarget;

    fn find_anchor(&self, id: &str) -> Option<Self::Target>;
}

impl AnchorTarget for Element {
    fn scroll_into_view_smoothly(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl AnchorSource for Document {
    type Target = Element;

    fn find_anchor(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}

/// Accepts both `about` and `#about`.
pub fn anchor_id(anchor: &str) -> &str {
    anchor.strip_prefix('#').unwrap_or(anchor)
}

/// Scrolls to the anchor if it exists. Returns whether anything happened.
pub fn scroll_to_in<S: AnchorSource>(source: &S, anchor: &str) -> bool {
    let id = anchor_id(anchor);
    if id.is_empty() {
        return false;
    }
    match source.find_anchor(id) {
        Some(target) => {
            target.scroll_into_view_smoothly();
            true
        }
        None => {
            debug!("No anchor #{}, ignoring scroll", id);
            false
        }
    }
}

/// Smooth-scrolls the current document to `anchor`. Missing anchors are a no-op.
pub fn scroll_to(anchor: &str) {
    match current_document() {
        Ok(document) => {
            scroll_to_in(&document, anchor);
        }
        Err(err) => debug!("Cannot scroll to {}: {}", anchor, err),
    }
}

/// Opens `link` in a new browsing context.
pub fn open_external(link: &str) {
    if let Err(err) = try_open(link) {
        warn!("{}", err);
    }
}

fn try_open(link: &str) -> SiteResult<()> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    window
        .open_with_url_and_target(link, "_blank")
        .map_err(SiteError::popup)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeAnchor {
        id: &'static str,
        scrolled: Rc<RefCell<Vec<&'static str>>>,
    }

    impl AnchorTarget for FakeAnchor {
        fn scroll_into_view_smoothly(&self) {
            self.scrolled.borrow_mut().push(self.id);
        }
    }

    struct FakePage {
        ids: Vec<&'static str>,
        scrolled: Rc<RefCell<Vec<&'static str>>>,
    }

    impl FakePage {
        fn with(ids: &[&'static str]) -> Self {
            Self { ids: ids.to_vec(), scrolled: Rc::default() }
        }
    }

    impl AnchorSource for FakePage {
        type Target = FakeAnchor;

        fn find_anchor(&self, id: &str) -> Option<FakeAnchor> {
            self.ids.iter().find(|known| **known == id).map(|found| FakeAnchor {
                id: *found,
                scrolled: self.scrolled.clone(),
            })
        }
    }

    #[test]
    fn scrolls_existing_anchor_into_view() {
        let page = FakePage::with(&["about", "projects"]);
        assert!(scroll_to_in(&page, "about"));
        assert_eq!(*page.scrolled.borrow(), ["about"]);
    }

    #[test]
    fn missing_anchor_is_a_silent_no_op() {
        let page = FakePage::with(&["about"]);
        assert!(!scroll_to_in(&page, "nonexistent"));
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn hash_prefixed_anchors_resolve() {
        let page = FakePage::with(&["subsidiaries"]);
        assert!(scroll_to_in(&page, "#subsidiaries"));
        assert_eq!(*page.scrolled.borrow(), ["subsidiaries"]);
    }

    #[test]
    fn bare_hash_is_ignored() {
        let page = FakePage::with(&[""]);
        assert!(!scroll_to_in(&page, "#"));
        assert!(!scroll_to_in(&page, ""));
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn anchor_id_strips_one_hash() {
        assert_eq!(anchor_id("#contact"), "contact");
        assert_eq!(anchor_id("contact"), "contact");
        assert_eq!(anchor_id("##x"), "#x");
    }
}
