use super::{required, split_list, text, FormDraft};
use crate::error::DraftError;
use crate::model::{Article, ArticlePayload};

pub const DEFAULT_CATEGORY: &str = "General";

/// Article form. Tags are comma-separated text; likes and comments are raw input
/// parsed on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDraft {
    pub title: String,
    pub title_en: String,
    pub author: String,
    pub content: String,
    pub content_en: String,
    pub summary: String,
    pub summary_en: String,
    pub category: String,
    pub category_fr: String,
    pub tags: String,
    pub tags_en: String,
    pub read_time: String,
    pub source: String,
    pub link: String,
    pub likes: String,
    pub comments: String,
}

impl Default for ArticleDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_en: String::new(),
            author: String::new(),
            content: String::new(),
            content_en: String::new(),
            summary: String::new(),
            summary_en: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            category_fr: String::new(),
            tags: String::new(),
            tags_en: String::new(),
            read_time: String::new(),
            source: String::new(),
            link: String::new(),
            likes: "0".to_string(),
            comments: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleField {
    Title,
    TitleEn,
    Author,
    Content,
    ContentEn,
    Summary,
    SummaryEn,
    Category,
    CategoryFr,
    Tags,
    TagsEn,
    ReadTime,
    Source,
    Link,
    Likes,
    Comments,
}

impl ArticleDraft {
    pub fn with(mut self, field: ArticleField, value: impl Into<String>) -> Self {
        let value = value.into();
        let slot = match field {
            ArticleField::Title => &mut self.title,
            ArticleField::TitleEn => &mut self.title_en,
            ArticleField::Author => &mut self.author,
            ArticleField::Content => &mut self.content,
            ArticleField::ContentEn => &mut self.content_en,
            ArticleField::Summary => &mut self.summary,
            ArticleField::SummaryEn => &mut self.summary_en,
            ArticleField::Category => &mut self.category,
            ArticleField::CategoryFr => &mut self.category_fr,
            ArticleField::Tags => &mut self.tags,
            ArticleField::TagsEn => &mut self.tags_en,
            ArticleField::ReadTime => &mut self.read_time,
            ArticleField::Source => &mut self.source,
            ArticleField::Link => &mut self.link,
            ArticleField::Likes => &mut self.likes,
            ArticleField::Comments => &mut self.comments,
        };
        *slot = value;
        self
    }

    fn payload(&self) -> Result<ArticlePayload, DraftError> {
        Ok(ArticlePayload {
            title: required(&self.title, "title")?,
            title_en: self.title_en.clone(),
            author: self.author.clone(),
            content: required(&self.content, "content")?,
            content_en: self.content_en.clone(),
            summary: self.summary.clone(),
            summary_en: self.summary_en.clone(),
            category: self.category.clone(),
            category_fr: self.category_fr.clone(),
            tags: split_list(&self.tags),
            tags_en: split_list(&self.tags_en),
            read_time: self.read_time.clone(),
            source: self.source.clone(),
            link: self.link.clone(),
            likes: leading_count(&self.likes),
            comments: leading_count(&self.comments),
        })
    }
}

/// Leading digits of `input` as a count; `0` when there are none.
fn leading_count(input: &str) -> u64 {
    let digits: String = input
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

impl FormDraft<Article> for ArticleDraft {
    fn from_record(article: &Article) -> Self {
        let category = match article.category.as_deref() {
            Some(category) if !category.is_empty() => category.to_string(),
            _ => DEFAULT_CATEGORY.to_string(),
        };
        Self {
            title: text(&article.title),
            title_en: text(&article.title_en),
            author: text(&article.author),
            content: text(&article.content),
            content_en: text(&article.content_en),
            summary: text(&article.summary),
            summary_en: text(&article.summary_en),
            category,
            category_fr: text(&article.category_fr),
            tags: article.tags.join(", "),
            tags_en: article.tags_en.join(", "),
            read_time: article.read_time_text(),
            source: text(&article.source),
            link: text(&article.link),
            likes: article.likes.unwrap_or(0).to_string(),
            comments: article.comments.unwrap_or(0).to_string(),
        }
    }

    fn to_create(&self) -> Result<ArticlePayload, DraftError> {
        self.payload()
    }

    fn to_update(&self) -> Result<ArticlePayload, DraftError> {
        self.payload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_and_parsing() {
        let payload = ArticleDraft::default()
            .with(ArticleField::Title, "Routines")
            .with(ArticleField::Content, "Visual schedules help.")
            .with(ArticleField::Tags, "autism, routine, ")
            .with(ArticleField::Likes, "12abc")
            .with(ArticleField::Comments, "many")
            .to_create()
            .unwrap();
        assert_eq!(payload.category, "General");
        assert_eq!(payload.tags, vec!["autism", "routine"]);
        assert!(payload.tags_en.is_empty());
        assert_eq!(payload.likes, 12);
        assert_eq!(payload.comments, 0);
    }

    #[test]
    fn content_is_required() {
        let draft = ArticleDraft::default().with(ArticleField::Title, "Routines");
        assert_eq!(draft.to_update(), Err(DraftError::MissingField("content")));
    }

    #[test]
    fn record_fills_draft() {
        let article = Article {
            title: Some("Sommeil".into()),
            tags: vec!["sleep".into(), "kids".into()],
            read_time: Some(json!(5)),
            likes: Some(3),
            ..Article::default()
        };
        let draft = ArticleDraft::from_record(&article);
        assert_eq!(draft.category, "General");
        assert_eq!(draft.tags, "sleep, kids");
        assert_eq!(draft.read_time, "5");
        assert_eq!(draft.likes, "3");
        assert_eq!(draft.comments, "0");
    }
}
