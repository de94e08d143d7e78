use super::list_page::{ListPage, PageLabels};
use crate::clients::{KidClient, UserClient};
use crate::forms::KidDraft;
use crate::model::{Kid, User};
use luma_api::{ApiClient, ListQuery};
use tracing::warn;

/// Kids management: the kid list plus a parent filter.
pub struct KidsPage {
    pub list: ListPage<Kid, KidClient, KidDraft>,
    users: UserClient,
    parents: Vec<User>,
    selected_parent: Option<String>,
}

impl KidsPage {
    pub fn new(kids: KidClient, users: UserClient) -> Self {
        Self {
            list: ListPage::new(kids, PageLabels::KIDS),
            users,
            parents: Vec::new(),
            selected_parent: None,
        }
    }

    /// Loads the parent list once, then the kids.
    pub async fn mount(&mut self) {
        match self.users.list(None).await {
            Ok(envelope) => self.parents = envelope.into_items(),
            Err(e) => warn!(error = %e, "Could not load parents for the kid filter"),
        }
        self.list.load().await;
    }

    pub fn parents(&self) -> &[User] {
        &self.parents
    }

    pub fn selected_parent(&self) -> Option<&str> {
        self.selected_parent.as_deref()
    }

    /// Filters kids by parent (`?userId=`) and refetches. `None` shows everyone.
    pub async fn select_parent(&mut self, user_id: Option<String>) {
        let user_id = user_id.filter(|id| !id.is_empty());
        if user_id == self.selected_parent {
            return;
        }
        self.list
            .set_query(user_id.as_ref().map(|id| ListQuery::new().param("userId", id)));
        self.selected_parent = user_id;
        self.list.load().await;
    }

    /// Create modal, pre-assigned to the filtered parent.
    pub fn open_create(&mut self) {
        let draft = match &self.selected_parent {
            Some(id) => KidDraft::for_parent(id.clone()),
            None => KidDraft::default(),
        };
        self.list.open_create_with(draft);
    }
}
