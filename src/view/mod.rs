//! Page state for the presentation layer.
//!
//! - [`Dashboard`]: overview refreshed on an interval while mounted.
//! - [`AdminDashboard`]: tabbed overview / doctors / articles / feedback.
//! - [`ListPage`]: CRUD page state shared by every management page.
//! - [`KidsPage`]: kid list filtered by parent.
//! - [`FeedbackForm`]: the public feedback form.

pub mod admin;
pub mod dashboard;
pub mod feedback_form;
pub mod kids;
pub mod list_page;
pub mod overview;
pub mod refresh;

pub use admin::{AdminDashboard, Tab};
pub use dashboard::Dashboard;
pub use feedback_form::{Banner, BannerKind, FeedbackForm};
pub use kids::KidsPage;
pub use list_page::{ListPage, ModalState, PageLabels};
pub use overview::{OverviewController, OverviewState, RefreshOutcome};
pub use refresh::{Refresh, RefreshTask};

use crate::clients::{ArticleClient, DoctorClient, FeedbackClient, UserClient};
use crate::forms::{ArticleDraft, DoctorDraft, FeedbackDraft, UserDraft};
use crate::model::{Article, Doctor, Feedback, User};

pub type UsersPage = ListPage<User, UserClient, UserDraft>;
pub type DoctorsPage = ListPage<Doctor, DoctorClient, DoctorDraft>;
pub type ArticlesPage = ListPage<Article, ArticleClient, ArticleDraft>;
pub type FeedbackPage = ListPage<Feedback, FeedbackClient, FeedbackDraft>;

impl UsersPage {
    pub fn users(client: UserClient) -> Self {
        ListPage::new(client, PageLabels::USERS)
    }
}
