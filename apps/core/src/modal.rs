use crate::domain::Project;
use crate::view::ModalView;

/// What dismissed the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    Backdrop,
    Escape,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Box<Project>),
}

impl ModalState {
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Opens on `project`, replacing whatever was shown before.
    pub fn open(&mut self, project: Project) -> ModalView {
        let view = ModalView::from_project(&project);
        log::debug!("modal open: {}", project.title);
        *self = Self::Open(Box::new(project));
        view
    }

    /// Returns true when the overlay was open and is now closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if !self.is_open() {
            return false;
        }
        log::debug!("modal closed by {trigger:?}");
        *self = Self::Closed;
        true
    }

    /// A click on the overlay closes it only when it landed outside the
    /// content panel.
    pub fn on_overlay_click(&mut self, inside_content: bool) -> bool {
        if inside_content {
            return false;
        }
        self.close(CloseTrigger::Backdrop)
    }

    /// Escape closes an open overlay; every other key is ignored.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" {
            self.close(CloseTrigger::Escape)
        } else {
            false
        }
    }

    /// Background scrolling is locked exactly while the overlay is open.
    pub const fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::{CloseTrigger, ModalState};
    use crate::domain::Project;

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            description: format!("{title} description"),
            image: format!("{title}.png"),
            tags: Some(vec!["rust".to_string()]),
            ..Project::default()
        }
    }

    #[test]
    fn opening_shows_project_fields() {
        let mut modal = ModalState::default();
        let view = modal.open(project("A"));

        assert!(modal.is_open());
        assert!(modal.scroll_locked());
        assert_eq!(view.title, "A");
        assert_eq!(view.description, "A description");
        assert_eq!(view.image, "A.png");
        assert_eq!(view.tags, ["rust"]);
    }

    #[test]
    fn every_trigger_closes_and_unlocks_scroll() {
        for trigger in [
            CloseTrigger::Button,
            CloseTrigger::Backdrop,
            CloseTrigger::Escape,
        ] {
            let mut modal = ModalState::default();
            modal.open(project("A"));
            assert!(modal.close(trigger));
            assert!(!modal.is_open());
            assert!(!modal.scroll_locked());
        }
    }

    #[test]
    fn closing_when_closed_is_a_no_op() {
        let mut modal = ModalState::default();
        assert!(!modal.close(CloseTrigger::Button));
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn reopening_overwrites_project() {
        let mut modal = ModalState::default();
        modal.open(project("A"));
        modal.open(project("B"));
        assert!(matches!(&modal, ModalState::Open(project) if project.title == "B"));
    }

    #[test]
    fn only_clicks_outside_content_close() {
        let mut modal = ModalState::default();
        modal.open(project("A"));
        assert!(!modal.on_overlay_click(true));
        assert!(modal.scroll_locked());
        assert!(modal.on_overlay_click(false));
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn only_escape_key_closes() {
        let mut modal = ModalState::default();
        modal.open(project("A"));
        assert!(!modal.on_key("Enter"));
        assert!(modal.is_open());
        assert!(modal.on_key("Escape"));
        assert!(!modal.on_key("Escape"));
    }
}
