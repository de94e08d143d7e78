//! # Aggregation Engine
//!
//! Fans out one list fetch per resource plus the health probe, waits for all of
//! them, and reduces the answers into a [`StatsSnapshot`] and two location rollups.
//!
//! A failing resource never fails the cycle: its metric is `0` (and the health
//! status `offline`), and the error is logged at `warn`. Every fetch is bounded by
//! the transport's request timeout, so a cycle always finishes.

use super::count::ResourceResult;
use super::rollup::LocationRollup;
use super::snapshot::{ApiStatus, Metric, StatsSnapshot};
use crate::clients::AdminClients;
use crate::model::User;
use async_trait::async_trait;
use luma_api::{ApiClient, ApiError, ListEnvelope};
use tracing::{info, instrument, warn};

/// Output of one aggregation cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub snapshot: StatsSnapshot,
    pub by_country: LocationRollup,
    pub by_city: LocationRollup,
}

/// Anything that can produce an [`Aggregation`]; the view controllers only see this.
#[async_trait]
pub trait Aggregate: Send + Sync + 'static {
    async fn run_aggregation(&self) -> Aggregation;
}

/// Aggregates over the live resource clients.
#[derive(Clone)]
pub struct AggregationEngine {
    clients: AdminClients,
}

impl AggregationEngine {
    pub fn new(clients: AdminClients) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl Aggregate for AggregationEngine {
    #[instrument(name = "aggregation", skip(self))]
    async fn run_aggregation(&self) -> Aggregation {
        let c = &self.clients;
        let (users, events, game_progress, community, feedback, doctors, articles, health) = tokio::join!(
            c.users.list(None),
            c.events.list(None),
            c.game_progress.list(None),
            c.community.list(None),
            c.feedback.list(None),
            c.doctors.list(None),
            c.articles.list(None),
            c.health.check(),
        );

        let users: ResourceResult<User> = absorb(Metric::Users, users);
        let api_status = match health {
            Ok(envelope) => ApiStatus::from_probe(envelope.success),
            Err(e) => {
                warn!(metric = Metric::ApiStatus.name(), error = %e, "Health probe failed");
                ApiStatus::Offline
            }
        };

        let snapshot = StatsSnapshot {
            users: users.count,
            events: absorb(Metric::Events, events).count,
            game_progress: absorb(Metric::GameProgress, game_progress).count,
            community_posts: absorb(Metric::CommunityPosts, community).count,
            feedback: absorb(Metric::Feedback, feedback).count,
            doctors: absorb(Metric::Doctors, doctors).count,
            articles: absorb(Metric::Articles, articles).count,
            api_status,
        };

        let (by_country, by_city) = if users.succeeded {
            (
                LocationRollup::by_country(&users.items),
                LocationRollup::by_city(&users.items),
            )
        } else {
            (LocationRollup::default(), LocationRollup::default())
        };

        info!(
            users = snapshot.users,
            events = snapshot.events,
            game_progress = snapshot.game_progress,
            community_posts = snapshot.community_posts,
            feedback = snapshot.feedback,
            doctors = snapshot.doctors,
            articles = snapshot.articles,
            api_status = %snapshot.api_status,
            countries = by_country.len(),
            cities = by_city.len(),
            "Aggregation complete"
        );

        Aggregation {
            snapshot,
            by_country,
            by_city,
        }
    }
}

fn absorb<T>(metric: Metric, outcome: Result<ListEnvelope<T>, ApiError>) -> ResourceResult<T> {
    if let Err(e) = &outcome {
        warn!(metric = metric.name(), error = %e, "Fetch failed, counting as 0");
    }
    ResourceResult::from_outcome(outcome)
}
