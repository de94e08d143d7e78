use std::fmt;

/// Reachability of the REST API as seen by the last aggregation cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiStatus {
    /// Nothing probed yet.
    #[default]
    Checking,
    Online,
    Offline,
}

impl ApiStatus {
    /// Only an explicit healthy answer is `Online`.
    pub fn from_probe(healthy: Option<bool>) -> Self {
        match healthy {
            Some(true) => ApiStatus::Online,
            _ => ApiStatus::Offline,
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApiStatus::Checking => "checking",
            ApiStatus::Online => "online",
            ApiStatus::Offline => "offline",
        })
    }
}

/// The fixed set of dashboard metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Users,
    Events,
    GameProgress,
    CommunityPosts,
    Feedback,
    Doctors,
    Articles,
    ApiStatus,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::Users,
        Metric::Events,
        Metric::GameProgress,
        Metric::CommunityPosts,
        Metric::Feedback,
        Metric::Doctors,
        Metric::Articles,
        Metric::ApiStatus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Users => "users",
            Metric::Events => "events",
            Metric::GameProgress => "gameProgress",
            Metric::CommunityPosts => "communityPosts",
            Metric::Feedback => "feedback",
            Metric::Doctors => "doctors",
            Metric::Articles => "articles",
            Metric::ApiStatus => "apiStatus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricValue {
    Count(u64),
    Status(ApiStatus),
}

/// One aggregation cycle's counts. Built whole, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub users: u64,
    pub events: u64,
    pub game_progress: u64,
    pub community_posts: u64,
    pub feedback: u64,
    pub doctors: u64,
    pub articles: u64,
    pub api_status: ApiStatus,
}

impl StatsSnapshot {
    pub fn value(&self, metric: Metric) -> MetricValue {
        match metric {
            Metric::Users => MetricValue::Count(self.users),
            Metric::Events => MetricValue::Count(self.events),
            Metric::GameProgress => MetricValue::Count(self.game_progress),
            Metric::CommunityPosts => MetricValue::Count(self.community_posts),
            Metric::Feedback => MetricValue::Count(self.feedback),
            Metric::Doctors => MetricValue::Count(self.doctors),
            Metric::Articles => MetricValue::Count(self.articles),
            Metric::ApiStatus => MetricValue::Status(self.api_status),
        }
    }

    /// The count for `metric`; `None` for [`Metric::ApiStatus`].
    pub fn count(&self, metric: Metric) -> Option<u64> {
        match self.value(metric) {
            MetricValue::Count(count) => Some(count),
            MetricValue::Status(_) => None,
        }
    }

    /// Every metric by name, in [`Metric::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, MetricValue)> + '_ {
        Metric::ALL.into_iter().map(|m| (m.name(), self.value(m)))
    }
}
