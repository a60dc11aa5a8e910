//! Content record types.
//!
//! One struct per entity collection, mirroring the rows of the content store.
//! Translatable fields carry an explicit `Option<String>` Amharic override
//! next to the canonical English field; `resolve` collapses each pair into
//! the display string for a requested language.

use serde::{Deserialize, Serialize};

use crate::content::{resolve_field, Searchable};
use crate::i18n::Language;

// ==================== Teachings ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teaching {
    pub id: String,
    pub title: String,
    pub title_am: Option<String>,
    pub description: String,
    pub description_am: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub read_time: Option<String>,
    pub difficulty: Option<String>,
    pub created_at: String,
}

/// A teaching with its translatable fields resolved for one language.
#[derive(Debug, Clone, Serialize)]
pub struct TeachingView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub read_time: Option<String>,
    pub difficulty: Option<String>,
    pub created_at: String,
}

impl Teaching {
    pub fn resolve(&self, language: Language) -> TeachingView {
        TeachingView {
            id: self.id.clone(),
            title: resolve_field(language, &self.title, self.title_am.as_deref()).to_string(),
            description: resolve_field(language, &self.description, self.description_am.as_deref())
                .to_string(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            read_time: self.read_time.clone(),
            difficulty: self.difficulty.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

impl Searchable for Teaching {
    fn search_fields(&self, language: Language) -> Vec<&str> {
        vec![
            resolve_field(language, &self.title, self.title_am.as_deref()),
            resolve_field(language, &self.description, self.description_am.as_deref()),
            &self.category,
        ]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn category(&self) -> &str {
        &self.category
    }
}

// ==================== Articles ====================

/// Publication status. Only published articles are visible outside the admin
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Published,
    Draft,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Published => "published",
            ArticleStatus::Draft => "draft",
        }
    }

    /// Parse a stored status value. Unrecognized values are treated as drafts
    /// so malformed rows never leak to public listings.
    pub fn from_str_lossy(value: &str) -> ArticleStatus {
        match value {
            "published" => ArticleStatus::Published,
            _ => ArticleStatus::Draft,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub title_am: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_am: Option<String>,
    pub content: String,
    pub content_am: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub status: ArticleStatus,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl Article {
    pub fn resolve(&self, language: Language) -> ArticleView {
        let excerpt = self.excerpt.as_deref().map(|primary| {
            resolve_field(language, primary, self.excerpt_am.as_deref()).to_string()
        });
        ArticleView {
            id: self.id.clone(),
            title: resolve_field(language, &self.title, self.title_am.as_deref()).to_string(),
            excerpt,
            content: resolve_field(language, &self.content, self.content_am.as_deref())
                .to_string(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

impl Searchable for Article {
    fn search_fields(&self, language: Language) -> Vec<&str> {
        let mut fields = vec![resolve_field(language, &self.title, self.title_am.as_deref())];
        if let Some(excerpt) = self.excerpt.as_deref() {
            fields.push(resolve_field(language, excerpt, self.excerpt_am.as_deref()));
        }
        fields
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn category(&self) -> &str {
        &self.category
    }
}

// ==================== FAQs ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub question_am: Option<String>,
    pub answer: String,
    pub answer_am: Option<String>,
    /// Parent subject group, used purely for display grouping.
    pub subject: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqView {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub subject: String,
    pub created_at: String,
}

impl Faq {
    pub fn resolve(&self, language: Language) -> FaqView {
        FaqView {
            id: self.id.clone(),
            question: resolve_field(language, &self.question, self.question_am.as_deref())
                .to_string(),
            answer: resolve_field(language, &self.answer, self.answer_am.as_deref()).to_string(),
            subject: self.subject.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

impl Searchable for Faq {
    fn search_fields(&self, language: Language) -> Vec<&str> {
        vec![
            resolve_field(language, &self.question, self.question_am.as_deref()),
            resolve_field(language, &self.answer, self.answer_am.as_deref()),
            &self.subject,
        ]
    }

    fn category(&self) -> &str {
        &self.subject
    }
}

// ==================== eBooks ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ebook {
    pub id: String,
    pub title: String,
    pub title_am: Option<String>,
    pub description: Option<String>,
    pub description_am: Option<String>,
    pub author: Option<String>,
    pub category: String,
    pub file_size: Option<i64>,
    pub download_count: i64,
    pub cover_url: Option<String>,
    pub file_url: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EbookView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub category: String,
    pub file_size: Option<i64>,
    pub download_count: i64,
    pub cover_url: Option<String>,
    pub file_url: Option<String>,
    pub created_at: String,
}

impl Ebook {
    pub fn resolve(&self, language: Language) -> EbookView {
        let description = self.description.as_deref().map(|primary| {
            resolve_field(language, primary, self.description_am.as_deref()).to_string()
        });
        EbookView {
            id: self.id.clone(),
            title: resolve_field(language, &self.title, self.title_am.as_deref()).to_string(),
            description,
            author: self.author.clone(),
            category: self.category.clone(),
            file_size: self.file_size,
            download_count: self.download_count,
            cover_url: self.cover_url.clone(),
            file_url: self.file_url.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

impl Searchable for Ebook {
    fn search_fields(&self, language: Language) -> Vec<&str> {
        let mut fields = vec![resolve_field(language, &self.title, self.title_am.as_deref())];
        if let Some(description) = self.description.as_deref() {
            fields.push(resolve_field(
                language,
                description,
                self.description_am.as_deref(),
            ));
        }
        fields
    }

    fn category(&self) -> &str {
        &self.category
    }
}

// ==================== Contact Submissions ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Language the sender was browsing in when submitting.
    pub language: String,
    pub status: String,
    pub created_at: String,
}

// ==================== User Questions ====================

/// A visitor question together with the generated answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserQuestion {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub created_at: String,
}
