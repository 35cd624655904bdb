use crate::core::image::ImageFailures;
use crate::core::loader::{DataLoader, LoadOutcome};
use crate::core::paginator::Paginator;
use crate::core::{
    ActiveTab, CertificateRecord, CertificateSource, ProjectRecord, CERTIFICATES_PER_PAGE,
};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

const PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(CERTIFICATES_PER_PAGE) {
    Some(size) => size,
    None => panic!("certificate page size must be non-zero"),
};

pub const SECTION_TITLE: &str = "Portfolio";
pub const SECTION_SUBTITLE: &str = "Explore my projects and certifications";
pub const NO_PROJECTS_MESSAGE: &str = "No projects found";
pub const NO_CERTIFICATES_MESSAGE: &str = "No certificates found";
pub const PROJECT_CALL_TO_ACTION: &str = "Lihat";
pub const CERTIFICATE_CALL_TO_ACTION: &str = "Lihat Sertifikat";

/// A user interaction on the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Previous,
    Page(usize),
    Tab(ActiveTab),
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavAction::Next => f.write_str("next"),
            NavAction::Previous => f.write_str("prev"),
            NavAction::Page(page) => write!(f, "page:{}", page),
            NavAction::Tab(tab) => write!(f, "tab:{}", tab),
        }
    }
}

impl FromStr for NavAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "next" => return Ok(NavAction::Next),
            "prev" | "previous" => return Ok(NavAction::Previous),
            _ => {}
        }

        match s.split_once(':') {
            Some((kind, value)) if kind.eq_ignore_ascii_case("page") => value
                .trim()
                .parse::<usize>()
                .map(NavAction::Page)
                .map_err(|_| format!("invalid page number in '{}'", s)),
            Some((kind, value)) if kind.eq_ignore_ascii_case("tab") => {
                value.parse::<ActiveTab>().map(NavAction::Tab)
            }
            _ => Err(format!(
                "unknown action '{}', expected next, prev, page:N or tab:NAME",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub tab: ActiveTab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateCard<'a> {
    pub id: i64,
    pub title: &'a str,
    pub image: &'a str,
    pub link: &'a str,
    pub call_to_action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard<'a> {
    pub id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub image: &'a str,
    pub link: &'a str,
    pub call_to_action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub current_page: usize,
    pub total_pages: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub pages: Vec<PageButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent<'a> {
    Loading,
    Empty { message: &'static str },
    ProjectGrid { cards: Vec<ProjectCard<'a>> },
    CertificateGrid {
        cards: Vec<CertificateCard<'a>>,
        pagination: Option<PaginationControls>,
    },
}

/// Everything needed to draw the section, derived from [`PortfolioView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionModel<'a> {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tabs: Vec<TabButton>,
    pub content: TabContent<'a>,
}

/// State of the projects/certificates section for one mount.
#[derive(Debug, Clone)]
pub struct PortfolioView {
    active_tab: ActiveTab,
    paginator: Paginator,
    certificates: Vec<CertificateRecord>,
    projects: Vec<ProjectRecord>,
    loading: bool,
    fetched: bool,
    last_error: Option<String>,
    image_failures: ImageFailures,
}

impl Default for PortfolioView {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioView {
    pub fn new() -> Self {
        Self {
            active_tab: ActiveTab::default(),
            paginator: Paginator::with_page_size(PAGE_SIZE),
            certificates: Vec::new(),
            projects: Vec::new(),
            loading: false,
            fetched: false,
            last_error: None,
            image_failures: ImageFailures::new(),
        }
    }

    /// Build the view and run its one certificate fetch.
    pub async fn mount<S: CertificateSource>(source: S) -> Self {
        let mut view = Self::new();
        view.begin_load();
        let outcome = DataLoader::new(source).load().await;
        view.finish_load(outcome);
        view
    }

    pub fn begin_load(&mut self) {
        if self.fetched {
            tracing::debug!("Certificates already fetched, ignoring load start");
            return;
        }
        self.loading = true;
    }

    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        if self.fetched {
            tracing::warn!("Certificates already fetched, ignoring second load result");
            return;
        }
        self.fetched = true;
        self.loading = false;

        match outcome {
            LoadOutcome::Loaded(records) => {
                self.certificates = records;
                self.last_error = None;
            }
            LoadOutcome::Failed { message } => {
                self.certificates = Vec::new();
                self.last_error = Some(message);
            }
        }
        self.paginator.set_item_count(self.certificates.len());
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    /// Why the fetch failed, if it did. The rendered section does not show this.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    /// Any tab write, including the current tab, goes back to page 1.
    pub fn set_active_tab(&mut self, tab: ActiveTab) {
        if tab != self.active_tab {
            tracing::debug!("Switching tab {} -> {}", self.active_tab, tab);
        }
        self.active_tab = tab;
        self.paginator.reset();
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    /// Only the certificates tab paginates; elsewhere paging is a no-op.
    fn paging(&mut self) -> Option<&mut Paginator> {
        match self.active_tab {
            ActiveTab::Certificates => Some(&mut self.paginator),
            ActiveTab::Projects => None,
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.paging().is_some_and(Paginator::advance)
    }

    pub fn previous_page(&mut self) -> bool {
        self.paging().is_some_and(Paginator::retreat)
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.paging().is_some_and(|p| p.jump_to(page))
    }

    /// Apply one user action. Returns whether any state changed.
    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Next => self.next_page(),
            NavAction::Previous => self.previous_page(),
            NavAction::Page(page) => self.go_to_page(page),
            NavAction::Tab(tab) => {
                let before = (self.active_tab, self.current_page());
                self.set_active_tab(tab);
                before != (self.active_tab, self.current_page())
            }
        }
    }

    pub fn certificates(&self) -> &[CertificateRecord] {
        &self.certificates
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn visible_certificates(&self) -> &[CertificateRecord] {
        self.paginator.slice(&self.certificates)
    }

    /// Mark a certificate's image as broken so its card shows the fallback.
    pub fn report_image_failure(&mut self, id: i64) -> bool {
        if !self.certificates.iter().any(|c| c.id == id) {
            return false;
        }
        if self.image_failures.mark_failed(id) {
            tracing::warn!("Image for certificate {} failed to load, using fallback", id);
        }
        true
    }

    pub fn displayed_image<'a>(&self, certificate: &'a CertificateRecord) -> &'a str {
        self.image_failures
            .displayed(certificate.id, certificate.img.as_deref())
    }

    pub fn section(&self) -> SectionModel<'_> {
        let tabs = ActiveTab::ALL
            .iter()
            .map(|&tab| TabButton {
                tab,
                label: tab.label(),
                active: tab == self.active_tab,
            })
            .collect();

        let content = match self.active_tab {
            ActiveTab::Projects => self.projects_content(),
            ActiveTab::Certificates => self.certificates_content(),
        };

        SectionModel {
            title: SECTION_TITLE,
            subtitle: SECTION_SUBTITLE,
            tabs,
            content,
        }
    }

    fn projects_content(&self) -> TabContent<'_> {
        if self.projects.is_empty() {
            return TabContent::Empty {
                message: NO_PROJECTS_MESSAGE,
            };
        }

        TabContent::ProjectGrid {
            cards: self
                .projects
                .iter()
                .map(|p| ProjectCard {
                    id: p.id,
                    title: &p.title,
                    description: &p.description,
                    image: &p.image,
                    link: &p.link,
                    call_to_action: PROJECT_CALL_TO_ACTION,
                })
                .collect(),
        }
    }

    fn certificates_content(&self) -> TabContent<'_> {
        if self.loading {
            return TabContent::Loading;
        }
        if self.certificates.is_empty() {
            return TabContent::Empty {
                message: NO_CERTIFICATES_MESSAGE,
            };
        }

        let cards = self
            .visible_certificates()
            .iter()
            .map(|c| CertificateCard {
                id: c.id,
                title: &c.title,
                image: self.displayed_image(c),
                link: &c.link,
                call_to_action: CERTIFICATE_CALL_TO_ACTION,
            })
            .collect();

        TabContent::CertificateGrid {
            cards,
            pagination: self.pagination_controls(),
        }
    }

    fn pagination_controls(&self) -> Option<PaginationControls> {
        if !self.paginator.controls_visible() {
            return None;
        }

        let current = self.paginator.current_page();
        Some(PaginationControls {
            current_page: current,
            total_pages: self.paginator.total_pages(),
            previous_enabled: self.paginator.has_previous(),
            next_enabled: self.paginator.has_next(),
            pages: self
                .paginator
                .page_numbers()
                .map(|number| PageButton {
                    number,
                    active: number == current,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FALLBACK_IMAGE_URL;

    fn certs(count: i64) -> Vec<CertificateRecord> {
        (1..=count)
            .rev()
            .map(|id| CertificateRecord {
                id,
                title: format!("Certificate {}", id),
                img: Some(format!("https://cdn.example.com/{}.png", id)),
                link: format!("https://verify.example.com/{}", id),
            })
            .collect()
    }

    fn loaded_view(count: i64) -> PortfolioView {
        let mut view = PortfolioView::new();
        view.begin_load();
        view.finish_load(LoadOutcome::Loaded(certs(count)));
        view
    }

    struct FixedSource(Vec<CertificateRecord>);

    #[async_trait::async_trait]
    impl CertificateSource for FixedSource {
        async fn list_certificates(&self) -> crate::utils::error::Result<Vec<CertificateRecord>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_mount_loads_and_stops_loading() {
        let mut rows = certs(5);
        rows.reverse();

        let view = tokio_test::block_on(PortfolioView::mount(FixedSource(rows)));

        assert!(view.is_fetched());
        assert!(!view.is_loading());
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.certificates()[0].id, 5);
        assert_eq!(view.total_pages(), 2);
    }

    #[test]
    fn test_initial_state() {
        let view = PortfolioView::new();
        assert_eq!(view.active_tab(), ActiveTab::Projects);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.page_size(), 3);
        assert!(!view.is_loading());
        assert!(view.certificates().is_empty());
        assert!(view.projects().is_empty());
    }

    #[test]
    fn test_loading_indicator_on_certificates_tab() {
        let mut view = PortfolioView::new();
        view.set_active_tab(ActiveTab::Certificates);
        view.begin_load();

        assert!(view.is_loading());
        assert_eq!(view.section().content, TabContent::Loading);
    }

    #[test]
    fn test_projects_tab_ignores_loading() {
        let mut view = PortfolioView::new();
        view.begin_load();
        assert_eq!(
            view.section().content,
            TabContent::Empty {
                message: NO_PROJECTS_MESSAGE
            }
        );
    }

    #[test]
    fn test_seven_certificates_paginate_in_threes() {
        let mut view = loaded_view(7);
        view.set_active_tab(ActiveTab::Certificates);
        assert_eq!(view.total_pages(), 3);

        let ids = |v: &PortfolioView| -> Vec<i64> {
            v.visible_certificates().iter().map(|c| c.id).collect()
        };
        assert_eq!(ids(&view), vec![7, 6, 5]);
        view.next_page();
        assert_eq!(ids(&view), vec![4, 3, 2]);
        view.next_page();
        assert_eq!(ids(&view), vec![1]);
        assert!(!view.next_page());
    }

    #[test]
    fn test_tab_switch_resets_page() {
        let mut view = loaded_view(9);
        view.set_active_tab(ActiveTab::Certificates);
        view.go_to_page(2);

        view.set_active_tab(ActiveTab::Projects);
        assert_eq!(view.current_page(), 1);

        view.set_active_tab(ActiveTab::Certificates);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_setting_same_tab_still_resets_page() {
        let mut view = loaded_view(9);
        view.set_active_tab(ActiveTab::Certificates);
        view.go_to_page(3);

        view.set_active_tab(ActiveTab::Certificates);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_empty_list_shows_empty_state_without_controls() {
        let mut view = loaded_view(0);
        view.set_active_tab(ActiveTab::Certificates);

        assert_eq!(view.total_pages(), 0);
        assert_eq!(
            view.section().content,
            TabContent::Empty {
                message: NO_CERTIFICATES_MESSAGE
            }
        );
    }

    #[test]
    fn test_failure_matches_empty_state() {
        let mut failed = PortfolioView::new();
        failed.set_active_tab(ActiveTab::Certificates);
        failed.begin_load();
        failed.finish_load(LoadOutcome::Failed {
            message: "API returned status 500: boom".to_string(),
        });

        let mut empty = loaded_view(0);
        empty.set_active_tab(ActiveTab::Certificates);

        assert!(!failed.is_loading());
        assert_eq!(failed.section(), empty.section());
        assert!(failed.last_error().is_some());
        assert!(empty.last_error().is_none());
    }

    #[test]
    fn test_second_load_result_is_ignored() {
        let mut view = loaded_view(4);
        view.begin_load();
        assert!(!view.is_loading());

        view.finish_load(LoadOutcome::Loaded(certs(1)));
        assert_eq!(view.certificates().len(), 4);
    }

    #[test]
    fn test_pagination_controls_only_with_multiple_pages() {
        let mut single = loaded_view(3);
        single.set_active_tab(ActiveTab::Certificates);
        match single.section().content {
            TabContent::CertificateGrid { cards, pagination } => {
                assert_eq!(cards.len(), 3);
                assert!(pagination.is_none());
            }
            other => panic!("unexpected content: {:?}", other),
        }

        let mut multi = loaded_view(5);
        multi.set_active_tab(ActiveTab::Certificates);
        multi.next_page();
        match multi.section().content {
            TabContent::CertificateGrid { cards, pagination } => {
                assert_eq!(cards.len(), 2);
                let controls = pagination.expect("controls for two pages");
                assert_eq!(controls.current_page, 2);
                assert!(controls.previous_enabled);
                assert!(!controls.next_enabled);
                assert_eq!(
                    controls.pages,
                    vec![
                        PageButton {
                            number: 1,
                            active: false
                        },
                        PageButton {
                            number: 2,
                            active: true
                        },
                    ]
                );
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_image_failure_uses_fallback_for_that_card_only() {
        let mut view = loaded_view(3);
        view.set_active_tab(ActiveTab::Certificates);

        assert!(view.report_image_failure(2));
        assert!(!view.report_image_failure(42));

        match view.section().content {
            TabContent::CertificateGrid { cards, .. } => {
                let by_id = |id: i64| cards.iter().find(|c| c.id == id).unwrap().image;
                assert_eq!(by_id(2), FALLBACK_IMAGE_URL);
                assert_eq!(by_id(1), "https://cdn.example.com/1.png");
                assert_eq!(by_id(3), "https://cdn.example.com/3.png");
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_tab_buttons_mark_active_tab() {
        let mut view = PortfolioView::new();
        view.set_active_tab(ActiveTab::Certificates);
        let section = view.section();

        assert_eq!(section.title, SECTION_TITLE);
        let active: Vec<ActiveTab> = section
            .tabs
            .iter()
            .filter(|t| t.active)
            .map(|t| t.tab)
            .collect();
        assert_eq!(active, vec![ActiveTab::Certificates]);
    }

    #[test]
    fn test_apply_actions() {
        let mut view = loaded_view(7);
        assert!(view.apply(NavAction::Tab(ActiveTab::Certificates)));
        assert!(view.apply(NavAction::Next));
        assert!(view.apply(NavAction::Page(3)));
        assert!(!view.apply(NavAction::Page(9)));
        assert!(view.apply(NavAction::Previous));
        assert_eq!(view.current_page(), 2);
        assert!(view.apply(NavAction::Tab(ActiveTab::Certificates)));
        assert_eq!(view.current_page(), 1);
        assert!(!view.apply(NavAction::Tab(ActiveTab::Certificates)));
    }

    #[test]
    fn test_projects_tab_never_paginates() {
        let mut view = loaded_view(7);
        assert_eq!(view.active_tab(), ActiveTab::Projects);

        assert!(!view.apply(NavAction::Next));
        assert!(!view.apply(NavAction::Page(3)));
        assert!(!view.apply(NavAction::Previous));
        assert!(!view.go_to_page(2));
        assert_eq!(view.current_page(), 1);

        view.set_active_tab(ActiveTab::Certificates);
        assert!(view.apply(NavAction::Page(3)));
        view.set_active_tab(ActiveTab::Projects);
        assert!(!view.next_page());
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_parse_nav_actions() {
        assert_eq!("next".parse::<NavAction>().unwrap(), NavAction::Next);
        assert_eq!("PREV".parse::<NavAction>().unwrap(), NavAction::Previous);
        assert_eq!("previous".parse::<NavAction>().unwrap(), NavAction::Previous);
        assert_eq!("page:2".parse::<NavAction>().unwrap(), NavAction::Page(2));
        assert_eq!(
            "tab:certificates".parse::<NavAction>().unwrap(),
            NavAction::Tab(ActiveTab::Certificates)
        );
        assert!("page:two".parse::<NavAction>().is_err());
        assert!("tab:awards".parse::<NavAction>().is_err());
        assert!("jump".parse::<NavAction>().is_err());
        assert_eq!(NavAction::Page(4).to_string(), "page:4");
    }
}
