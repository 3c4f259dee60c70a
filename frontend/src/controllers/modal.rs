//! Case-study viewer opened from the portfolio grid.

use tracing::debug;

use super::{wrap_next, wrap_prev, Commands, Controller};
use crate::models::{CaseStudy, PortfolioProject};

#[derive(Debug, Clone, PartialEq)]
pub enum ModalEvent {
    Open(String),
    Close,
    NextImage,
    PreviousImage,
    ShowImage(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseStudyViewer {
    projects: Vec<PortfolioProject>,
    is_open: bool,
    selected: Option<usize>,
    image_index: usize,
}

impl CaseStudyViewer {
    pub fn new(projects: Vec<PortfolioProject>) -> Self {
        Self {
            projects,
            is_open: false,
            selected: None,
            image_index: 0,
        }
    }

    pub fn projects(&self) -> &[PortfolioProject] {
        &self.projects
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The last project opened. Kept after closing so the closing
    /// transition still has content to show.
    pub fn selected_project(&self) -> Option<&PortfolioProject> {
        self.selected.map(|i| &self.projects[i])
    }

    pub fn case_study(&self) -> Option<&CaseStudy> {
        self.selected_project().map(|p| &p.case_study)
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Returns whether a project with `id` exists. Unknown ids change nothing.
    pub fn open(&mut self, id: &str) -> bool {
        let Some(found) = self.projects.iter().position(|p| p.id == id) else {
            debug!(id, "no case study for project id");
            return false;
        };
        if self.selected != Some(found) {
            self.selected = Some(found);
            self.image_index = 0;
        }
        self.is_open = true;
        true
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    fn image_count(&self) -> usize {
        self.case_study().map_or(0, |c| c.images.len())
    }
}

impl Controller for CaseStudyViewer {
    type Event = ModalEvent;
    type Output = ();

    fn handle(&mut self, event: ModalEvent) -> Commands<Self> {
        let count = self.image_count();
        match event {
            ModalEvent::Open(id) => {
                self.open(&id);
            }
            ModalEvent::Close => self.close(),
            ModalEvent::NextImage => self.image_index = wrap_next(self.image_index, count),
            ModalEvent::PreviousImage => self.image_index = wrap_prev(self.image_index, count),
            ModalEvent::ShowImage(index) if index < count => self.image_index = index,
            ModalEvent::ShowImage(_) => {}
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, images: usize) -> PortfolioProject {
        PortfolioProject {
            id: id.to_string(),
            thumbnail: format!("/thumbs/{id}.jpg"),
            title: format!("Project {id}"),
            category: "Branding".to_string(),
            summary: "Summary".to_string(),
            case_study: CaseStudy {
                title: format!("Case {id}"),
                client: "Client".to_string(),
                description: "Description".to_string(),
                challenge: "Challenge".to_string(),
                solution: "Solution".to_string(),
                results: "Results".to_string(),
                images: (0..images).map(|i| format!("/cases/{id}/{i}.jpg")).collect(),
            },
        }
    }

    fn viewer() -> CaseStudyViewer {
        CaseStudyViewer::new(vec![project("1", 3), project("2", 1)])
    }

    #[test]
    fn open_selects_and_shows() {
        let mut viewer = viewer();
        assert!(viewer.open("2"));
        assert!(viewer.is_open());
        assert_eq!(viewer.case_study().unwrap().title, "Case 2");
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut viewer = viewer();
        assert!(!viewer.open("nonexistent-id"));
        assert!(!viewer.is_open());
        assert!(viewer.selected_project().is_none());

        viewer.open("1");
        viewer.close();
        let before = viewer.clone();
        assert!(!viewer.open("nonexistent-id"));
        assert_eq!(viewer, before);
    }

    #[test]
    fn close_keeps_the_selection() {
        let mut viewer = viewer();
        viewer.open("1");
        viewer.close();
        assert!(!viewer.is_open());
        assert_eq!(viewer.selected_project().unwrap().id, "1");
    }

    #[test]
    fn image_index_resets_only_for_a_different_project() {
        let mut viewer = viewer();
        viewer.handle(ModalEvent::Open("1".into()));
        viewer.handle(ModalEvent::NextImage);
        viewer.handle(ModalEvent::NextImage);
        assert_eq!(viewer.image_index(), 2);

        viewer.handle(ModalEvent::Close);
        viewer.handle(ModalEvent::Open("1".into()));
        assert_eq!(viewer.image_index(), 2);

        viewer.handle(ModalEvent::Open("2".into()));
        assert_eq!(viewer.image_index(), 0);
    }

    #[test]
    fn reopening_while_open_swaps_content() {
        let mut viewer = viewer();
        viewer.open("1");
        viewer.open("2");
        assert!(viewer.is_open());
        assert_eq!(viewer.selected_project().unwrap().id, "2");
    }

    #[test]
    fn image_navigation_wraps_both_ways() {
        let mut viewer = viewer();
        viewer.open("1");
        viewer.handle(ModalEvent::PreviousImage);
        assert_eq!(viewer.image_index(), 2);
        viewer.handle(ModalEvent::NextImage);
        assert_eq!(viewer.image_index(), 0);
        viewer.handle(ModalEvent::ShowImage(1));
        assert_eq!(viewer.image_index(), 1);
        viewer.handle(ModalEvent::ShowImage(9));
        assert_eq!(viewer.image_index(), 1);
    }
}
