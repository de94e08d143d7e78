#![allow(dead_code)]

use luma_admin::clients::{
    AdminClients, ArticleClient, CommunityPostClient, DoctorClient, EventClient, FeedbackClient,
    GameProgressClient, KidClient, UserClient,
};
use luma_admin::model::{Article, CommunityPost, Doctor, Event, Feedback, GameProgress, Kid, User};
use luma_api::mock::{MockClient, MockHealth};
use luma_api::ListEnvelope;
use serde_json::{json, Value};

/// One mock per resource, wired into an [`AdminClients`].
pub struct MockApi {
    pub users: MockClient<User>,
    pub kids: MockClient<Kid>,
    pub doctors: MockClient<Doctor>,
    pub articles: MockClient<Article>,
    pub feedback: MockClient<Feedback>,
    pub events: MockClient<Event>,
    pub game_progress: MockClient<GameProgress>,
    pub community: MockClient<CommunityPost>,
    pub health: MockHealth,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            users: MockClient::new(),
            kids: MockClient::new(),
            doctors: MockClient::new(),
            articles: MockClient::new(),
            feedback: MockClient::new(),
            events: MockClient::new(),
            game_progress: MockClient::new(),
            community: MockClient::new(),
            health: MockHealth::new(),
        }
    }

    pub fn clients(&self) -> AdminClients {
        AdminClients {
            users: UserClient::new(self.users.client()),
            kids: KidClient::new(self.kids.client()),
            doctors: DoctorClient::new(self.doctors.client()),
            articles: ArticleClient::new(self.articles.client()),
            feedback: FeedbackClient::new(self.feedback.client()),
            events: EventClient::new(self.events.client()),
            game_progress: GameProgressClient::new(self.game_progress.client()),
            community: CommunityPostClient::new(self.community.client()),
            health: self.health.client(),
        }
    }

    pub fn verify(&self) {
        self.users.verify();
        self.kids.verify();
        self.doctors.verify();
        self.articles.verify();
        self.feedback.verify();
        self.events.verify();
        self.game_progress.verify();
        self.community.verify();
        self.health.verify();
    }
}

pub fn raw(count: usize) -> Vec<Value> {
    (0..count).map(|i| json!({ "_id": format!("r{i}") })).collect()
}

pub fn events(count: usize) -> ListEnvelope<Event> {
    ListEnvelope::new(raw(count).into_iter().map(Event).collect())
}

pub fn game_progress(count: usize) -> ListEnvelope<GameProgress> {
    ListEnvelope::new(raw(count).into_iter().map(GameProgress).collect())
}

pub fn community(count: usize) -> ListEnvelope<CommunityPost> {
    ListEnvelope::new(raw(count).into_iter().map(CommunityPost).collect())
}

pub fn doctor(id: &str, name: &str) -> Doctor {
    Doctor {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        specialty: Some("Pediatrics".to_string()),
        ..Doctor::default()
    }
}

pub fn feedback(id: &str) -> Feedback {
    Feedback {
        id: Some(id.to_string()),
        subject: Some("App".to_string()),
        ..Feedback::default()
    }
}
