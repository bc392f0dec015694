use std::rc::Rc;

use portfolio_core::catalog::check_status;
use portfolio_core::{Catalog, LoadError, Project};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

use crate::error::js_message;
use crate::page::Page;
use crate::render;

/// Loads the catalog once and performs the initial render. Failures are
/// shown on the page and never propagate out of the task.
pub async fn load_and_render(page: Rc<Page>) {
    match load_catalog(&page.window, &page.config.projects_url, page.config.featured_url.as_deref())
        .await
    {
        Ok(catalog) => page.state.borrow_mut().set_catalog(catalog),
        Err(error) => page.state.borrow_mut().set_error(error),
    }

    render::render_all(&page);
}

pub async fn load_catalog(
    window: &Window,
    projects_url: &str,
    featured_url: Option<&str>,
) -> Result<Catalog, LoadError> {
    let catalog = Catalog::new(fetch_projects(window, projects_url).await?);

    let Some(featured_url) = featured_url else {
        return Ok(catalog);
    };

    match fetch_projects(window, featured_url).await {
        Ok(featured) => Ok(catalog.with_featured(featured)),
        Err(error) => {
            log::warn!("{featured_url} unavailable, using featured flags: {error}");
            Ok(catalog)
        }
    }
}

pub async fn fetch_projects(window: &Window, url: &str) -> Result<Vec<Project>, LoadError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|error| LoadError::Network(js_message(&error)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|error| LoadError::Network(js_message(&error)))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| LoadError::Network(format!("{url}: fetch did not return a response")))?;

    if !response.ok() {
        let body = read_text(&response).await;
        check_status(response.status(), move || body)?;
    }

    let json_promise = response
        .json()
        .map_err(|error| LoadError::Parse(js_message(&error)))?;
    let json = JsFuture::from(json_promise)
        .await
        .map_err(|error| LoadError::Parse(js_message(&error)))?;

    let projects = serde_wasm_bindgen::from_value::<Vec<Project>>(json)
        .map_err(|error| LoadError::Parse(format!("{url}: {error}")))?;

    log::debug!("{url}: {} projects", projects.len());
    Ok(projects)
}

async fn read_text(response: &Response) -> String {
    let Ok(promise) = response.text() else {
        return String::new();
    };
    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|text| text.as_string())
        .unwrap_or_default()
}
