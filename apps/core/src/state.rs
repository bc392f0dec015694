use crate::catalog::{Catalog, LoadError};
use crate::domain::{DisplayMode, Project};
use crate::filter::FilterState;
use crate::modal::{CloseTrigger, ModalState};
use crate::view::{render_cards, ModalView, Rendered};

/// Where the catalog is in its single load per page view.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Catalog),
    Failed(LoadError),
}

/// Everything the page's controllers share for one page view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteState {
    pub load: LoadState,
    pub filter: FilterState,
    pub modal: ModalState,
}

impl SiteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        log::info!("catalog loaded with {} projects", catalog.len());
        self.load = LoadState::Loaded(catalog);
    }

    pub fn set_error(&mut self, error: LoadError) {
        log::error!("error loading projects: {error}");
        self.load = LoadState::Failed(error);
    }

    pub const fn catalog(&self) -> Option<&Catalog> {
        match &self.load {
            LoadState::Loaded(catalog) => Some(catalog),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }

    pub const fn error(&self) -> Option<&LoadError> {
        match &self.load {
            LoadState::Failed(error) => Some(error),
            LoadState::Loading | LoadState::Loaded(_) => None,
        }
    }

    /// Records currently shown for `mode`, in card order. Filters only ever
    /// narrow the gallery; the featured set is always shown whole.
    pub fn visible_projects(&self, mode: DisplayMode) -> Vec<&Project> {
        let Some(catalog) = self.catalog() else {
            return Vec::new();
        };
        match mode {
            DisplayMode::Featured => catalog.featured(),
            DisplayMode::Standard => self.filter.apply(catalog.standard()),
        }
    }

    /// Record behind the card at `index` of the `mode` container.
    pub fn shown_project(&self, mode: DisplayMode, index: usize) -> Option<&Project> {
        self.visible_projects(mode).get(index).copied()
    }

    /// Cards for the featured container. Blank until a catalog has loaded,
    /// so a failed load leaves both containers empty.
    pub fn featured_view(&self) -> Rendered {
        if self.catalog().is_none() {
            return Rendered::Blank;
        }
        let featured = self.visible_projects(DisplayMode::Featured);
        render_cards(&featured, DisplayMode::Featured, &FilterState::new())
    }

    pub fn standard_view(&self) -> Rendered {
        if self.catalog().is_none() {
            return Rendered::Blank;
        }
        let visible = self.visible_projects(DisplayMode::Standard);
        render_cards(&visible, DisplayMode::Standard, &self.filter)
    }

    pub fn view(&self, mode: DisplayMode) -> Rendered {
        match mode {
            DisplayMode::Featured => self.featured_view(),
            DisplayMode::Standard => self.standard_view(),
        }
    }

    pub fn select_category(&mut self, category: &str) -> Rendered {
        self.filter.select_category(category);
        self.standard_view()
    }

    pub fn select_tag(&mut self, tag: &str) -> Rendered {
        self.filter.select_tag(tag);
        self.standard_view()
    }

    pub fn open_modal(&mut self, project: Project) -> ModalView {
        self.modal.open(project)
    }

    pub fn close_modal(&mut self, trigger: CloseTrigger) -> bool {
        self.modal.close(trigger)
    }
}
