//! # List Pages
//!
//! State behind every management page: the fetched records, the loading flag, the
//! create/edit modal with its draft, and the alert shown after a failure.
//!
//! Mutations follow one rule. On success the modal closes (draft and editing target
//! reset) and the whole list is fetched again; nothing is patched locally. On
//! failure the alert is set, the modal stays open with the draft as typed, and the
//! list is not touched.

use crate::error::AdminError;
use crate::forms::FormDraft;
use luma_api::{ApiClient, ApiEntity, ApiError, ListQuery};
use std::marker::PhantomData;
use tracing::{info, warn};

/// Alert texts used when the server sent no message of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLabels {
    pub fetch_error: &'static str,
    pub save_error: &'static str,
    pub delete_error: &'static str,
}

impl PageLabels {
    pub const USERS: Self = Self {
        fetch_error: "Error fetching users",
        save_error: "Error saving user",
        delete_error: "Error deleting user",
    };
    pub const KIDS: Self = Self {
        fetch_error: "Error fetching kids",
        save_error: "Error saving kid",
        delete_error: "Error deleting kid",
    };
    pub const DOCTORS: Self = Self {
        fetch_error: "Error fetching doctors",
        save_error: "Error saving doctor",
        delete_error: "Error deleting item",
    };
    pub const ARTICLES: Self = Self {
        fetch_error: "Error fetching articles",
        save_error: "Error saving article",
        delete_error: "Error deleting item",
    };
    pub const FEEDBACK: Self = Self {
        fetch_error: "Error fetching feedback",
        save_error: "Error saving feedback",
        delete_error: "Error deleting item",
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    /// Id of the record being edited; `None` while creating.
    pub editing: Option<String>,
}

pub struct ListPage<T, C, D>
where
    T: ApiEntity,
    C: ApiClient<T>,
    D: FormDraft<T>,
{
    client: C,
    labels: PageLabels,
    query: Option<ListQuery>,
    items: Vec<T>,
    loading: bool,
    modal: ModalState,
    draft: D,
    alert: Option<String>,
    _entity: PhantomData<fn() -> T>,
}

impl<T, C, D> ListPage<T, C, D>
where
    T: ApiEntity,
    C: ApiClient<T>,
    D: FormDraft<T>,
{
    pub fn new(client: C, labels: PageLabels) -> Self {
        Self {
            client,
            labels,
            query: None,
            items: Vec::new(),
            loading: false,
            modal: ModalState::default(),
            draft: D::default(),
            alert: None,
            _entity: PhantomData,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Query sent with every list fetch from now on.
    pub fn set_query(&mut self, query: Option<ListQuery>) {
        self.query = query;
    }

    /// Fetches the list. On failure the previous items stay and the alert is set.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.client.list(self.query.clone()).await {
            Ok(envelope) => {
                self.items = envelope.into_items();
                info!(resource = T::RESOURCE, items = self.items.len(), "Loaded");
            }
            Err(e) => {
                warn!(resource = T::RESOURCE, error = %e, "Load failed");
                self.alert = Some(self.labels.fetch_error.to_string());
            }
        }
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.open_create_with(D::default());
    }

    /// Opens the create modal with a pre-filled draft.
    pub fn open_create_with(&mut self, draft: D) {
        self.draft = draft;
        self.modal = ModalState {
            open: true,
            editing: None,
        };
    }

    pub fn open_edit(&mut self, record: &T) {
        self.draft = D::from_record(record);
        self.modal = ModalState {
            open: true,
            editing: record.id().map(str::to_string),
        };
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::default();
        self.draft = D::default();
    }

    /// Applies one field update: `page.edit(|d| d.with(DoctorField::Name, "Dr. Ali"))`.
    pub fn edit(&mut self, change: impl FnOnce(D) -> D) {
        let draft = std::mem::take(&mut self.draft);
        self.draft = change(draft);
    }

    /// Validates the draft, then creates or updates depending on the modal.
    pub async fn submit(&mut self) -> Result<(), AdminError> {
        self.alert = None;
        match self.save().await {
            Ok(()) => {
                self.close_modal();
                self.load().await;
                Ok(())
            }
            Err(e) => {
                warn!(resource = T::RESOURCE, error = %e, "Save failed");
                self.alert = Some(e.alert_text(self.labels.save_error));
                Err(e)
            }
        }
    }

    async fn save(&self) -> Result<(), AdminError> {
        match &self.modal.editing {
            Some(id) => {
                let payload = self.draft.to_update()?;
                self.client.update(id.clone(), payload).await?;
            }
            None => {
                let payload = self.draft.to_create()?;
                self.client.create(payload).await?;
            }
        }
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), AdminError> {
        let result = self.client.delete(id.to_string()).await;
        self.finish_mutation(result, self.labels.delete_error).await
    }

    /// Refetches after a successful mutation, or records the alert for a failed one.
    pub(crate) async fn finish_mutation(
        &mut self,
        result: Result<(), ApiError>,
        fallback: &str,
    ) -> Result<(), AdminError> {
        self.alert = None;
        match result {
            Ok(()) => {
                self.load().await;
                Ok(())
            }
            Err(e) => {
                warn!(resource = T::RESOURCE, error = %e, "Mutation failed");
                let e = AdminError::from(e);
                self.alert = Some(e.alert_text(fallback));
                Err(e)
            }
        }
    }
}
