use portfolio_core::view::{CardView, DetailLine, LinkView};
use portfolio_core::{DisplayMode, ModalView, Rendered};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlImageElement};

use crate::dom;
use crate::error::{report, WebError};
use crate::page::Page;

/// Initial render once the catalog load has settled either way.
pub fn render_all(page: &Page) {
    if let Some(error) = page.state.borrow().error() {
        report("error region", show_error(page, &error.user_message()));
    }

    report("featured cards", render_mode(page, DisplayMode::Featured));
    report("project cards", render_mode(page, DisplayMode::Standard));
    report("tab highlight", highlight_tabs(page));
}

pub fn render_mode(page: &Page, mode: DisplayMode) -> Result<(), WebError> {
    let rendered = page.state.borrow().view(mode);
    let container_id = match mode {
        DisplayMode::Featured => &page.config.elements.featured_cards,
        DisplayMode::Standard => &page.config.elements.project_cards,
    };
    render_into(page, container_id, &rendered)
}

pub fn render_into(page: &Page, container_id: &str, rendered: &Rendered) -> Result<(), WebError> {
    let container = page.element(container_id)?;
    container.set_inner_html("");

    match rendered {
        Rendered::Empty { message } => {
            let placeholder = dom::create_with_text(&page.document, "p", "no-projects", message)?;
            container.append_child(&placeholder)?;
        }
        Rendered::Blank => {}
        Rendered::Cards(cards) => {
            for (index, card) in cards.iter().enumerate() {
                let element = build_card(page, card, index)?;
                container.append_child(&element)?;
                page.observe_card(&element, index);
            }
        }
    }

    Ok(())
}

fn build_card(page: &Page, card: &CardView, index: usize) -> Result<HtmlElement, WebError> {
    let document = &page.document;
    let element = dom::create_with_class(document, "div", &card.classes.join(" "))?;
    element.set_attribute("data-index", &index.to_string())?;

    let image = dom::create(document, "img")?;
    image.set_attribute("src", &card.image)?;
    image.set_attribute("alt", &card.alt)?;
    image.set_attribute("loading", "lazy")?;
    if let Some(preview) = &card.preview {
        image.set_attribute("data-src", &card.image)?;
        image.set_attribute("data-preview", preview)?;
        preload(preview);
    }
    element.append_child(&image)?;

    let content = dom::create_with_class(document, "div", "card-content")?;
    content.append_child(&dom::create_with_text(document, "h3", "", &card.title)?.into())?;
    content.append_child(&dom::create_with_text(
        document,
        "span",
        "category-tag",
        &card.category,
    )?.into())?;
    content.append_child(&dom::create_with_text(document, "p", "", &card.description)?.into())?;

    if !card.details.is_empty() {
        content.append_child(&details_list(page, "card-details", &card.details)?.into())?;
    }

    if !card.tags.is_empty() {
        let tags = dom::create_with_class(document, "div", "tags")?;
        for chip in &card.tags {
            let class = if chip.active { "tag active" } else { "tag" };
            let button = dom::create_with_text(document, "button", class, &chip.label)?;
            button.set_attribute("type", "button")?;
            button.set_attribute("data-tag", &chip.label)?;
            tags.append_child(&button)?;
        }
        content.append_child(&tags)?;
    }

    if !card.links.is_empty() {
        let links = dom::create_with_class(document, "div", "card-links")?;
        append_links(page, &links, &card.links)?;
        content.append_child(&links)?;
    }

    element.append_child(&content)?;
    Ok(element)
}

fn details_list(page: &Page, class: &str, details: &[DetailLine]) -> Result<HtmlElement, WebError> {
    let list = dom::create_with_class(&page.document, "ul", class)?;
    for line in details {
        let item = dom::create(&page.document, "li")?;
        let label = dom::create(&page.document, "strong")?;
        label.set_text_content(Some(format!("{}:", line.label).as_str()));
        item.append_child(&label)?;
        item.append_with_str_1(&format!(" {}", line.value))?;
        list.append_child(&item)?;
    }
    Ok(list)
}

fn append_links(page: &Page, parent: &HtmlElement, links: &[LinkView]) -> Result<(), WebError> {
    for link in links {
        let anchor = dom::create_with_class(&page.document, "a", &format!("btn {}", link.class))?;
        anchor.set_attribute("href", &link.href)?;
        if link.new_tab {
            anchor.set_attribute("target", "_blank")?;
            anchor.set_attribute("rel", "noopener noreferrer")?;
        }
        if let Some(icon) = link.icon {
            let glyph = dom::create_with_class(&page.document, "i", icon)?;
            anchor.append_child(&glyph)?;
            anchor.append_with_str_1(&format!(" {}", link.label))?;
        } else {
            anchor.set_text_content(Some(link.label.as_str()));
        }
        parent.append_child(&anchor)?;
    }
    Ok(())
}

fn preload(url: &str) {
    match HtmlImageElement::new() {
        Ok(image) => image.set_src(url),
        Err(error) => log::debug!("preview preload skipped: {error:?}"),
    }
}

pub fn show_error(page: &Page, message: &str) -> Result<(), WebError> {
    let region = page.element(&page.config.elements.error_region)?;
    region.set_text_content(Some(message));
    dom::set_style(&region, "display", "block");
    Ok(())
}

/// Exactly one tab carries `active`: the selected category, else `all`.
pub fn highlight_tabs(page: &Page) -> Result<(), WebError> {
    let tabs = page.element(&page.config.elements.tabs)?;
    let active = page.state.borrow().filter.active_tab().to_string();

    let buttons = tabs.query_selector_all("[data-category]")?;
    for index in 0..buttons.length() {
        let Some(button) = buttons.item(index) else {
            continue;
        };
        let Ok(button) = button.dyn_into::<Element>() else {
            continue;
        };
        let selected = button.get_attribute("data-category").as_deref() == Some(active.as_str());
        dom::toggle_class(&button, "active", selected);
    }
    Ok(())
}

pub fn render_modal(page: &Page, view: &ModalView) -> Result<(), WebError> {
    let ids = &page.config.elements;

    page.element(&ids.modal_title)?.set_text_content(Some(view.title.as_str()));

    let image = page.element(&ids.modal_image)?;
    image.set_attribute("src", &view.image)?;
    image.set_attribute("alt", &view.image_alt)?;

    page.element(&ids.modal_category)?.set_text_content(Some(view.category.as_str()));
    page.element(&ids.modal_description)?.set_text_content(Some(view.description.as_str()));

    let tags = page.element(&ids.modal_tags)?;
    tags.set_inner_html("");
    for tag in &view.tags {
        tags.append_child(&dom::create_with_text(&page.document, "span", "tag", tag)?.into())?;
    }

    let details = page.element(&ids.modal_details)?;
    details.set_inner_html("");
    if !view.details.is_empty() {
        details.append_child(&details_list(page, "modal-detail-list", &view.details)?.into())?;
    }

    let links = page.element(&ids.modal_links)?;
    links.set_inner_html("");
    append_links(page, &links, &view.links)?;

    sync_modal(page)
}

pub fn hide_modal(page: &Page) -> Result<(), WebError> {
    sync_modal(page)
}

/// Overlay visibility and body scroll follow the modal state.
fn sync_modal(page: &Page) -> Result<(), WebError> {
    let (open, locked) = {
        let state = page.state.borrow();
        (state.modal.is_open(), state.modal.scroll_locked())
    };

    dom::toggle_class(&page.element(&page.config.elements.modal)?.into(), "visible", open);
    let body = dom::body(&page.document)?;
    if locked {
        dom::set_style(&body, "overflow", "hidden");
    } else {
        dom::remove_style(&body, "overflow");
    }
    Ok(())
}
