use std::rc::Rc;

use portfolio_core::{CloseTrigger, DisplayMode};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, Node};

use crate::dom;
use crate::error::{report, WebError};
use crate::page::Page;
use crate::render;

/// Wires the hero button, filter tabs, card containers and the modal.
/// Each part fails on its own if its elements are missing.
pub fn install(page: &Rc<Page>) {
    report("hero button", install_hero_button(page));
    report("filter tabs", install_tabs(page));
    report("featured container", install_cards(page, DisplayMode::Featured));
    report("project container", install_cards(page, DisplayMode::Standard));
    report("modal", install_modal(page));
}

fn install_hero_button(page: &Rc<Page>) -> Result<(), WebError> {
    let button = page.element(&page.config.elements.hero_button)?;
    let page = Rc::clone(page);
    dom::listen(&button, "click", move |_| {
        match page.element(&page.config.elements.featured_section) {
            Ok(section) => dom::scroll_into_view(&section),
            Err(error) => log::warn!("hero button: {error}"),
        }
    })
}

fn install_tabs(page: &Rc<Page>) -> Result<(), WebError> {
    let tabs = page.element(&page.config.elements.tabs)?;
    let page = Rc::clone(page);
    dom::listen(&tabs, "click", move |event| {
        let Some(tab) = dom::closest(&event, "[data-category]") else {
            return;
        };
        let Some(category) = tab.get_attribute("data-category") else {
            return;
        };

        let rendered = page.state.borrow_mut().select_category(&category);
        log::debug!("{}: {} cards", describe_filter(&page), rendered.card_count());
        report(
            "project cards",
            render::render_into(&page, &page.config.elements.project_cards, &rendered),
        );
        report("tab highlight", render::highlight_tabs(&page));
    })
}

/// One delegated listener per container: links pass through, tag buttons
/// filter the gallery, anything else on a card opens the modal.
fn install_cards(page: &Rc<Page>, mode: DisplayMode) -> Result<(), WebError> {
    let container_id = match mode {
        DisplayMode::Featured => &page.config.elements.featured_cards,
        DisplayMode::Standard => &page.config.elements.project_cards,
    };
    let container = page.element(container_id)?;
    let page = Rc::clone(page);

    dom::listen(&container, "click", move |event| {
        if dom::closest(&event, "a").is_some() {
            return;
        }

        if let Some(tag) = dom::closest(&event, ".tag[data-tag]") {
            event.stop_propagation();
            if let Some(tag) = tag.get_attribute("data-tag") {
                select_tag(&page, &tag);
            }
            return;
        }

        let Some(card) = dom::closest(&event, ".project-card[data-index]") else {
            return;
        };
        let Some(index) = card
            .get_attribute("data-index")
            .and_then(|index| index.parse::<usize>().ok())
        else {
            return;
        };

        let project = page.state.borrow().shown_project(mode, index).cloned();
        let Some(project) = project else {
            log::warn!("no {} project at index {index}", mode.as_str());
            return;
        };

        let view = page.state.borrow_mut().open_modal(project);
        report("modal", render::render_modal(&page, &view));
    })
}

fn select_tag(page: &Page, tag: &str) {
    let rendered = page.state.borrow_mut().select_tag(tag);
    log::debug!("{}: {} cards", describe_filter(page), rendered.card_count());
    report(
        "project cards",
        render::render_into(page, &page.config.elements.project_cards, &rendered),
    );
    report("tab highlight", render::highlight_tabs(page));
}

fn describe_filter(page: &Page) -> String {
    page.state
        .borrow()
        .filter
        .active()
        .map_or_else(|| "unfiltered".to_string(), ToString::to_string)
}

fn install_modal(page: &Rc<Page>) -> Result<(), WebError> {
    let modal = page.element(&page.config.elements.modal)?;
    let content: Node = page.element(&page.config.elements.modal_content)?.into();
    let close = page.element(&page.config.elements.modal_close)?;

    {
        let page = Rc::clone(page);
        dom::listen(&close, "click", move |_| close_modal(&page, CloseTrigger::Button))?;
    }

    {
        let page = Rc::clone(page);
        dom::listen(&modal, "click", move |event: Event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok());
            let inside_content = content.contains(target.as_ref());
            let closed = page.state.borrow_mut().modal.on_overlay_click(inside_content);
            if closed {
                report("modal", render::hide_modal(&page));
            }
        })?;
    }

    let page = Rc::clone(page);
    let document = page.document.clone();
    dom::listen(&document, "keydown", move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let closed = page.state.borrow_mut().modal.on_key(&event.key());
        if closed {
            report("modal", render::hide_modal(&page));
        }
    })
}

fn close_modal(page: &Page, trigger: CloseTrigger) {
    let closed = page.state.borrow_mut().close_modal(trigger);
    if closed {
        report("modal", render::hide_modal(page));
    }
}
