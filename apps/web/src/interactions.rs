use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use portfolio_core::effects::{
    anchor_scroll_top, hero_parallax, is_same_page_anchor, photo_parallax, ripple_offset,
    scroll_indicator_visible, should_fade_navigation, FrameGate, FADE_CARD_SELECTOR,
    FADE_SECTION_SELECTOR, OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLD, PAGE_FADE_IN_DELAY_MS,
    PAGE_FADE_OUT_MS,
};
use portfolio_core::DisplayMode;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Event, HtmlAnchorElement, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Node, Window,
};

use crate::dom;
use crate::error::{report, WebError};
use crate::page::Page;

/// Installs every page effect. Each one is independent of the others.
pub fn install(page: &Rc<Page>) {
    report("fade-in", install_fade_in(page));
    for mode in [DisplayMode::Featured, DisplayMode::Standard] {
        report("card previews", install_previews(page, mode));
        report("card ripples", install_ripples(page, mode));
    }
    report("anchor scrolling", install_link_handling(page));
    report("scroll indicator", install_scroll_indicator(page));
    report("page fade-in", fade_page_in(page));
    report("parallax", install_parallax(page));
}

/// Observer that marks targets `is-visible` the first time they enter the
/// viewport and then stops watching them.
fn reveal_observer() -> Result<IntersectionObserver, WebError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::add_class(&target, "is-visible");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    options.set_root_margin(OBSERVER_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

fn install_fade_in(page: &Rc<Page>) -> Result<(), WebError> {
    let sections = reveal_observer()?;
    for section in dom::query_all(&page.document, FADE_SECTION_SELECTOR) {
        dom::add_class(&section, "fade-in-section");
        sections.observe(&section);
    }

    // Cards rendered later go through the same observer via Page::observe_card.
    page.set_card_observer(reveal_observer()?);
    for (index, card) in dom::query_all(&page.document, FADE_CARD_SELECTOR)
        .iter()
        .enumerate()
    {
        page.observe_card(card, index);
    }
    Ok(())
}

fn container(page: &Page, mode: DisplayMode) -> Result<HtmlElement, WebError> {
    let id = match mode {
        DisplayMode::Featured => &page.config.elements.featured_cards,
        DisplayMode::Standard => &page.config.elements.project_cards,
    };
    Ok(page.element(id)?)
}

/// Preview image of the card the pointer crossed into or out of, unless the
/// move stayed inside that card.
fn preview_image(event: &Event) -> Option<HtmlElement> {
    let card = dom::closest(event, ".project-card")?;
    let related = event
        .dyn_ref::<MouseEvent>()
        .and_then(MouseEvent::related_target)
        .and_then(|target| target.dyn_into::<Node>().ok());
    if card.contains(related.as_ref()) {
        return None;
    }

    card.query_selector("img[data-preview]")
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn install_previews(page: &Rc<Page>, mode: DisplayMode) -> Result<(), WebError> {
    let cards = container(page, mode)?;

    dom::listen(&cards, "mouseover", |event| {
        let Some(image) = preview_image(&event) else {
            return;
        };
        if let Some(preview) = image.get_attribute("data-preview") {
            image.set_attribute("src", &preview).ok();
            dom::set_style(&image, "object-fit", "cover");
        }
    })?;

    dom::listen(&cards, "mouseout", |event| {
        let Some(image) = preview_image(&event) else {
            return;
        };
        if let Some(original) = image.get_attribute("data-src") {
            image.set_attribute("src", &original).ok();
        }
    })
}

fn install_ripples(page: &Rc<Page>, mode: DisplayMode) -> Result<(), WebError> {
    let cards = container(page, mode)?;
    let page = Rc::clone(page);

    dom::listen(&cards, "click", move |event| {
        let Some(card) = dom::closest(&event, ".project-card") else {
            return;
        };
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        if let Err(error) = spawn_ripple(&page, &card, mouse) {
            log::debug!("ripple skipped: {error}");
        }
    })
}

fn spawn_ripple(page: &Page, card: &HtmlElement, event: &MouseEvent) -> Result<(), WebError> {
    let rect = card.get_bounding_client_rect();
    let (x, y) = ripple_offset(
        (f64::from(event.client_x()), f64::from(event.client_y())),
        (rect.left(), rect.top()),
    );

    let ripple = dom::create_with_class(&page.document, "span", "ripple")?;
    dom::set_style(&ripple, "left", &format!("{x}px"));
    dom::set_style(&ripple, "top", &format!("{y}px"));
    card.append_child(&ripple)?;

    dom::set_timeout(&page.window, page.config.ripple_lifetime_ms, move || {
        ripple.remove();
    });
    Ok(())
}

/// Delegated at the document so links added by the renderer are covered too.
fn install_link_handling(page: &Rc<Page>) -> Result<(), WebError> {
    let page = Rc::clone(page);
    let document = page.document.clone();

    dom::listen(&document, "click", move |event| {
        let Some(anchor) = dom::closest(&event, "a[href]") else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };

        if href.starts_with('#') {
            if is_same_page_anchor(&href) {
                event.prevent_default();
                scroll_to_anchor(&page, &href);
            }
            return;
        }

        let Ok(anchor) = anchor.dyn_into::<HtmlAnchorElement>() else {
            return;
        };
        let page_host = page.window.location().hostname().unwrap_or_default();
        let target = anchor.target();
        let target = (!target.is_empty()).then_some(target.as_str());
        if !should_fade_navigation(&href, target, &anchor.hostname(), &page_host) {
            return;
        }

        event.prevent_default();
        fade_out_and_follow(&page, anchor.href());
    })
}

fn scroll_to_anchor(page: &Page, href: &str) {
    let Some(target) = dom::query(&page.document, href) else {
        log::debug!("no element for {href}");
        return;
    };
    let top = anchor_scroll_top(f64::from(target.offset_top()), page.config.header_offset);
    dom::smooth_scroll_to(&page.window, top);
}

fn fade_out_and_follow(page: &Page, destination: String) {
    match dom::body(&page.document) {
        Ok(body) => dom::set_style(&body, "opacity", "0"),
        Err(error) => log::debug!("page fade-out skipped: {error}"),
    }

    let window = page.window.clone();
    dom::set_timeout(&page.window, PAGE_FADE_OUT_MS, move || {
        if let Err(error) = window.location().set_href(&destination) {
            log::error!("navigation to {destination} failed: {error:?}");
        }
    });
}

fn install_scroll_indicator(page: &Rc<Page>) -> Result<(), WebError> {
    let Some(indicator) = dom::query(&page.document, ".scroll-indicator") else {
        return Ok(());
    };

    {
        let page = Rc::clone(page);
        dom::listen(&indicator, "click", move |_| {
            if let Ok(section) = page.element(&page.config.elements.featured_section) {
                dom::scroll_into_view(&section);
            }
        })?;
    }

    let window = page.window.clone();
    dom::listen(&page.window, "scroll", move |_| {
        let visible = scroll_indicator_visible(dom::scroll_y(&window));
        dom::set_style(&indicator, "opacity", if visible { "1" } else { "0" });
        dom::set_style(&indicator, "pointer-events", if visible { "auto" } else { "none" });
    })
}

fn fade_page_in(page: &Rc<Page>) -> Result<(), WebError> {
    let body = dom::body(&page.document)?;
    dom::set_style(&body, "opacity", "0");

    dom::set_timeout(&page.window, PAGE_FADE_IN_DELAY_MS, move || {
        dom::set_style(&body, "transition", "opacity 0.5s ease");
        dom::set_style(&body, "opacity", "1");
    });
    Ok(())
}

fn install_parallax(page: &Rc<Page>) -> Result<(), WebError> {
    let hero = page.element(&page.config.elements.hero_content).ok();
    let photo = dom::query(&page.document, ".about-photo");
    if hero.is_none() && photo.is_none() {
        return Ok(());
    }

    let gate = Rc::new(RefCell::new(FrameGate::new()));
    let window = page.window.clone();

    dom::listen(&page.window, "scroll", move |_| {
        if !gate.borrow_mut().try_schedule() {
            return;
        }

        let frame_gate = Rc::clone(&gate);
        let frame_window = window.clone();
        let hero = hero.clone();
        let photo = photo.clone();
        let scheduled = dom::request_frame(&window, move || {
            apply_parallax(&frame_window, hero.as_ref(), photo.as_ref());
            frame_gate.borrow_mut().complete();
        });
        if let Err(error) = scheduled {
            log::warn!("parallax frame not scheduled: {error}");
            gate.borrow_mut().complete();
        }
    })
}

fn apply_parallax(window: &Window, hero: Option<&HtmlElement>, photo: Option<&HtmlElement>) {
    let (_, viewport_height) = dom::viewport_size(window);

    if let Some(hero) = hero {
        if let Some(parallax) = hero_parallax(dom::scroll_y(window), viewport_height) {
            dom::set_style(hero, "transform", &format!("translateY({}px)", parallax.translate_y));
            dom::set_style(hero, "opacity", &parallax.opacity.to_string());
        }
    }

    if let Some(photo) = photo {
        let top = photo.get_bounding_client_rect().top();
        if let Some(offset) = photo_parallax(top, viewport_height) {
            dom::set_style(photo, "transform", &format!("translateY({offset}px)"));
        }
    }
}
