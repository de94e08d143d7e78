//! Type-safe wrappers around [`ResourceClient`](luma_api::ResourceClient), one per
//! REST collection.
//!
//! Every wrapper gets the standard CRUD surface from [`ApiClient`]; the few
//! resource-specific calls live next to their wrapper.

use crate::model::{Article, CommunityPost, Doctor, Event, Feedback, GameProgress, Kid, User};
use luma_api::{ApiClient, HealthClient, ResourceClient};

/// Stamps out `<Entity>Client`, a cloneable wrapper implementing [`ApiClient`].
macro_rules! resource_client {
    ($($entity:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Client for the `" $entity "` resource."]
                #[derive(Clone)]
                pub struct [<$entity Client>] {
                    inner: ResourceClient<$entity>,
                }

                impl [<$entity Client>] {
                    pub fn new(inner: ResourceClient<$entity>) -> Self {
                        Self { inner }
                    }
                }

                impl ApiClient<$entity> for [<$entity Client>] {
                    fn inner(&self) -> &ResourceClient<$entity> {
                        &self.inner
                    }
                }
            )*
        }
    };
}

resource_client!(User, Kid, Doctor, Article, Feedback, Event, GameProgress, CommunityPost);

mod feedback_client;

/// Every client the admin core talks through, cloned out to pages and the engine.
#[derive(Clone)]
pub struct AdminClients {
    pub users: UserClient,
    pub kids: KidClient,
    pub doctors: DoctorClient,
    pub articles: ArticleClient,
    pub feedback: FeedbackClient,
    pub events: EventClient,
    pub game_progress: GameProgressClient,
    pub community: CommunityPostClient,
    pub health: HealthClient,
}
