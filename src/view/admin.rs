//! # Admin Dashboard
//!
//! Four tabs share one page. Selecting a tab fetches what that tab shows: the
//! overview runs a full aggregation cycle, the other tabs fetch their single
//! resource list.

use super::list_page::{ListPage, PageLabels};
use super::overview::{OverviewController, OverviewState};
use super::{ArticlesPage, DoctorsPage, FeedbackPage};
use crate::aggregation::Aggregate;
use crate::clients::{ArticleClient, DoctorClient, FeedbackClient};
use crate::error::AdminError;
use crate::forms::FormDraft;
use crate::model::Feedback;
use std::fmt;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Overview,
    Doctors,
    Articles,
    Feedback,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tab::Overview => "overview",
            Tab::Doctors => "doctors",
            Tab::Articles => "articles",
            Tab::Feedback => "feedback",
        })
    }
}

pub struct AdminDashboard<A: Aggregate> {
    active: Tab,
    overview: Arc<OverviewController<A>>,
    pub doctors: DoctorsPage,
    pub articles: ArticlesPage,
    pub feedback: FeedbackPage,
}

impl<A: Aggregate> AdminDashboard<A> {
    pub fn new(
        engine: Arc<A>,
        doctors: DoctorClient,
        articles: ArticleClient,
        feedback: FeedbackClient,
    ) -> Self {
        Self {
            active: Tab::default(),
            overview: Arc::new(OverviewController::new(engine)),
            doctors: ListPage::new(doctors, PageLabels::DOCTORS),
            articles: ListPage::new(articles, PageLabels::ARTICLES),
            feedback: ListPage::new(feedback, PageLabels::FEEDBACK),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    /// Fetches the initial tab.
    pub async fn mount(&mut self) {
        self.reload().await;
    }

    /// Switches tab and fetches it. Returns `false` (and fetches nothing) when `tab`
    /// is already active.
    pub async fn select_tab(&mut self, tab: Tab) -> bool {
        if tab == self.active {
            return false;
        }
        info!(from = %self.active, to = %tab, "Tab changed");
        self.active = tab;
        self.reload().await;
        true
    }

    /// Fetches the active tab again.
    pub async fn reload(&mut self) {
        match self.active {
            Tab::Overview => {
                self.overview.refresh().await;
            }
            Tab::Doctors => self.doctors.load().await,
            Tab::Articles => self.articles.load().await,
            Tab::Feedback => self.feedback.load().await,
        }
    }

    pub async fn overview(&self) -> OverviewState {
        self.overview.state().await
    }

    /// Stops applying overview results still in flight.
    pub fn unmount(&self) {
        self.overview.detach();
    }
}

impl<D: FormDraft<Feedback>> ListPage<Feedback, FeedbackClient, D> {
    /// `PUT /feedback/{id}/read`, then refetch.
    pub async fn mark_as_read(&mut self, id: &str) -> Result<(), AdminError> {
        let result = self.client().mark_as_read(id.to_string()).await;
        self.finish_mutation(result, "Error updating feedback").await
    }
}
