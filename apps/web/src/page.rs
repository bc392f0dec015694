use std::cell::RefCell;

use portfolio_core::effects::stagger_delay;
use portfolio_core::{LoadError, SiteConfig, SiteState};
use web_sys::{Document, HtmlElement, IntersectionObserver, Window};

use crate::dom;

/// Handles shared by every listener on the page.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: SiteConfig,
    pub state: RefCell<SiteState>,
    card_observer: RefCell<Option<IntersectionObserver>>,
}

impl Page {
    pub fn new(window: Window, document: Document, config: SiteConfig) -> Self {
        Self {
            window,
            document,
            config,
            state: RefCell::new(SiteState::new()),
            card_observer: RefCell::new(None),
        }
    }

    pub fn element(&self, id: &str) -> Result<HtmlElement, LoadError> {
        dom::by_id(&self.document, id)
    }

    pub fn set_card_observer(&self, observer: IntersectionObserver) {
        *self.card_observer.borrow_mut() = Some(observer);
    }

    /// Gives a freshly rendered card the staggered fade-in.
    pub fn observe_card(&self, card: &HtmlElement, index: usize) {
        let observer = self.card_observer.borrow();
        let Some(observer) = observer.as_ref() else {
            return;
        };
        dom::set_style(card, "animation-delay", &stagger_delay(index));
        dom::add_class(card, "fade-in-card");
        observer.observe(card);
    }
}
