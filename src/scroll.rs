use log::debug;
use web_sys::{window, Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::Callback;

/// Anchored sections of the page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Software,
    Design,
    Customization,
    Signage,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Software,
        Section::Design,
        Section::Customization,
        Section::Signage,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "inicio",
            Section::Software => "software",
            Section::Design => "design",
            Section::Customization => "personalizacao",
            Section::Signage => "sinalizacao",
            Section::Contact => "contato",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Início",
            Section::Software => "Software",
            Section::Design => "Design",
            Section::Customization => "Personalização",
            Section::Signage => "Sinalização",
            Section::Contact => "Contato",
        }
    }
}

pub trait ScrollAnchor {
    fn scroll_into_view_smooth(&self);
}

pub trait Anchors {
    type Anchor: ScrollAnchor;

    fn anchor(&self, id: &str) -> Option<Self::Anchor>;
}

impl ScrollAnchor for Element {
    fn scroll_into_view_smooth(&self) {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth).block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl Anchors for Document {
    type Anchor = Element;

    fn anchor(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}

/// Smoothly brings the element with `section_id` to the top of the viewport.
/// Unknown ids are ignored; returns whether anything was scrolled.
pub fn scroll_to_section<A: Anchors + ?Sized>(anchors: &A, section_id: &str) -> bool {
    match anchors.anchor(section_id) {
        Some(anchor) => {
            anchor.scroll_into_view_smooth();
            true
        }
        None => {
            debug!("no section `{section_id}` to scroll to");
            false
        }
    }
}

pub fn scroll_to(section: Section) {
    if let Some(document) = window().and_then(|w| w.document()) {
        scroll_to_section(&document, section.id());
    }
}

/// Click handler for links and buttons that jump to a section.
pub fn on_click(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to(section);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakePage {
        ids: Vec<&'static str>,
        scrolled: Rc<RefCell<Vec<String>>>,
    }

    struct FakeAnchor {
        id: String,
        scrolled: Rc<RefCell<Vec<String>>>,
    }

    impl ScrollAnchor for FakeAnchor {
        fn scroll_into_view_smooth(&self) {
            self.scrolled.borrow_mut().push(self.id.clone());
        }
    }

    impl Anchors for FakePage {
        type Anchor = FakeAnchor;

        fn anchor(&self, id: &str) -> Option<FakeAnchor> {
            self.ids.iter().any(|known| *known == id).then(|| FakeAnchor {
                id: id.to_string(),
                scrolled: Rc::clone(&self.scrolled),
            })
        }
    }

    #[test]
    fn scrolls_to_existing_section() {
        let page = FakePage {
            ids: vec!["inicio", "contato"],
            ..FakePage::default()
        };
        assert!(scroll_to_section(&page, Section::Contact.id()));
        assert_eq!(*page.scrolled.borrow(), vec!["contato".to_string()]);
    }

    #[test]
    fn unknown_section_is_a_no_op() {
        let page = FakePage {
            ids: vec!["inicio"],
            ..FakePage::default()
        };
        assert!(!scroll_to_section(&page, "precos"));
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn repeated_calls_scroll_again() {
        let page = FakePage {
            ids: vec!["design"],
            ..FakePage::default()
        };
        scroll_to_section(&page, "design");
        scroll_to_section(&page, "design");
        assert_eq!(page.scrolled.borrow().len(), 2);
    }

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
