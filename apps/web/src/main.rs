mod controller;
mod dom;
mod error;
mod hero;
mod interactions;
mod loader;
mod logger;
mod page;
mod render;

use std::rc::Rc;

use portfolio_core::config::CONFIG_ELEMENT_ID;
use portfolio_core::SiteConfig;
use wasm_bindgen_futures::spawn_local;

use crate::error::{report, WebError};
use crate::page::Page;

fn main() -> Result<(), WebError> {
    console_error_panic_hook::set_once();

    let window = dom::window()?;
    let document = dom::document(&window)?;

    let override_text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let config = SiteConfig::from_optional_json(override_text.as_deref());
    logger::init(config.debug);

    let page = Rc::new(Page::new(window, document, config));

    // Effects first so the card observer exists before the first render.
    interactions::install(&page);
    controller::install(&page);
    report("hero animation", hero::install(&page));

    spawn_local(loader::load_and_render(page));
    Ok(())
}
