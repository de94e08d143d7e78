use luma_api::{ApiEntity, NoAction};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::lenient::lenient;

/// A bilingual (fr/en) article, as served by `/articles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title_en: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub content: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub content_en: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub summary_en: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub category_fr: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub tags_en: Vec<String>,
    /// Free-form on the server: either `"5 min"` or a bare number.
    #[serde(deserialize_with = "lenient")]
    pub read_time: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub source: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub link: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub likes: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub comments: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub published_date: Option<String>,
}

impl Article {
    /// `read_time` as draft text.
    pub fn read_time_text(&self) -> String {
        match &self.read_time {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}

/// Body of `POST /articles` and `PUT /articles/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    pub title: String,
    pub title_en: String,
    pub author: String,
    pub content: String,
    pub content_en: String,
    pub summary: String,
    pub summary_en: String,
    pub category: String,
    pub category_fr: String,
    pub tags: Vec<String>,
    pub tags_en: Vec<String>,
    pub read_time: String,
    pub source: String,
    pub link: String,
    pub likes: u64,
    pub comments: u64,
}

impl ApiEntity for Article {
    const RESOURCE: &'static str = "articles";
    type Create = ArticlePayload;
    type Update = ArticlePayload;
    type Action = NoAction;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
