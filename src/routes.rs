//! Public JSON API.
//!
//! One endpoint per view of the original site: list endpoints accept
//! `lang`/`q`/`category` query parameters and run the content engine over a
//! fresh snapshot from the store; detail endpoints resolve a single record.
//! Everything returns resolved display strings for the requested language.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::answers;
use crate::content::{distinct_categories, filter_records, group_by, ALL_CATEGORIES};
use crate::db::{Database, NewContactSubmission};
use crate::error::AppError;
use crate::i18n::{Language, LanguageStrings};
use crate::models::{ArticleStatus, FaqView};
use crate::admin;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub admin_api_key: Option<String>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/i18n/:lang", get(i18n_strings))
        .route("/api/teachings", get(list_teachings))
        .route("/api/teachings/:id", get(get_teaching))
        .route("/api/articles", get(list_articles))
        .route("/api/articles/:id", get(get_article))
        .route("/api/faqs", get(list_faqs))
        .route("/api/faqs/:id", get(get_faq))
        .route("/api/ebooks", get(list_ebooks))
        .route("/api/ebooks/:id/download", post(download_ebook))
        .route("/api/search", get(search))
        .route("/api/contact", post(submit_contact))
        .route("/api/questions", post(ask_question))
        .merge(admin::router(state.clone()))
        .layer(TraceLayer::new_for_http())
        // The original site called its backend cross-origin with permissive
        // CORS; the API keeps that behavior.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Common query parameters for list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    lang: Option<String>,
    q: Option<String>,
    category: Option<String>,
}

impl ListParams {
    fn language(&self) -> Language {
        Language::from_code_or_canonical(self.lang.as_deref().unwrap_or_default())
    }

    fn search_term(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    fn category_filter(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }
}

// ==================== Health & i18n ====================

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn i18n_strings(Path(lang): Path<String>) -> impl IntoResponse {
    // Unknown codes fall back to the canonical language rather than erroring
    let language = Language::from_code_or_canonical(&lang);
    Json(json!({
        "language": language.code(),
        "strings": LanguageStrings::for_language(language),
    }))
}

// ==================== Teachings ====================

async fn list_teachings(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let language = params.language();
    let teachings = state.db.list_teachings()?;

    // Chips come from the full snapshot, filtering never narrows them
    let categories = distinct_categories(&teachings, |t| t.category.as_str());
    let items: Vec<_> = filter_records(
        &teachings,
        params.search_term(),
        params.category_filter(),
        language,
    )
    .into_iter()
    .map(|t| t.resolve(language))
    .collect();

    Ok(Json(json!({ "items": items, "categories": categories })))
}

async fn get_teaching(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let language = params.language();
    let teaching = state
        .db
        .get_teaching(&id)?
        .ok_or_else(|| AppError::not_found("teaching", &id))?;
    Ok(Json(teaching.resolve(language)))
}

// ==================== Articles ====================

async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let language = params.language();
    let articles = state.db.list_published_articles()?;

    let categories = distinct_categories(&articles, |a| a.category.as_str());
    let items: Vec<_> = filter_records(
        &articles,
        params.search_term(),
        params.category_filter(),
        language,
    )
    .into_iter()
    .map(|a| a.resolve(language))
    .collect();

    Ok(Json(json!({ "items": items, "categories": categories })))
}

async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let language = params.language();
    let article = state
        .db
        .get_article(&id)?
        // Drafts are invisible outside the admin surface
        .filter(|a| a.status == ArticleStatus::Published)
        .ok_or_else(|| AppError::not_found("article", &id))?;
    Ok(Json(article.resolve(language)))
}

// ==================== FAQs ====================

async fn list_faqs(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let language = params.language();
    let faqs = state.db.list_faqs()?;

    let filtered = filter_records(
        &faqs,
        params.search_term(),
        params.category_filter(),
        language,
    );

    // Group the surviving FAQs by subject for the accordion view
    let groups: BTreeMap<String, Vec<FaqView>> = group_by(&filtered, |f| f.subject.as_str())
        .into_iter()
        .map(|(subject, members)| {
            let views = members.iter().map(|f| f.resolve(language)).collect();
            (subject, views)
        })
        .collect();

    Ok(Json(json!({ "groups": groups })))
}

async fn get_faq(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let language = params.language();
    let faq = state
        .db
        .get_faq(&id)?
        .ok_or_else(|| AppError::not_found("faq", &id))?;

    let related: Vec<FaqView> = state
        .db
        .list_related_faqs(&faq.subject, &faq.id)?
        .iter()
        .map(|f| f.resolve(language))
        .collect();

    Ok(Json(json!({ "faq": faq.resolve(language), "related": related })))
}

// ==================== eBooks ====================

async fn list_ebooks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let language = params.language();
    let ebooks = state.db.list_ebooks()?;

    let categories = distinct_categories(&ebooks, |e| e.category.as_str());
    let items: Vec<_> = filter_records(
        &ebooks,
        params.search_term(),
        params.category_filter(),
        language,
    )
    .into_iter()
    .map(|e| e.resolve(language))
    .collect();

    Ok(Json(json!({ "items": items, "categories": categories })))
}

async fn download_ebook(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let count = state
        .db
        .increment_download_count(&id)?
        .ok_or_else(|| AppError::not_found("ebook", &id))?;
    Ok(Json(json!({ "download_count": count })))
}

// ==================== Cross-Entity Search ====================

async fn search(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let language = params.language();
    let term = params.search_term();

    // The search page shows nothing until the visitor types something,
    // unlike the list pages where an empty box means "show everything".
    if term.trim().is_empty() {
        return Ok(Json(json!({ "teachings": [], "faqs": [], "total": 0 })));
    }

    let teachings = state.db.list_teachings()?;
    let faqs = state.db.list_faqs()?;

    let teaching_hits: Vec<_> = filter_records(&teachings, term, ALL_CATEGORIES, language)
        .into_iter()
        .map(|t| t.resolve(language))
        .collect();
    let faq_hits: Vec<_> = filter_records(&faqs, term, ALL_CATEGORIES, language)
        .into_iter()
        .map(|f| f.resolve(language))
        .collect();

    let total = teaching_hits.len() + faq_hits.len();
    Ok(Json(json!({
        "teachings": teaching_hits,
        "faqs": faq_hits,
        "total": total,
    })))
}

// ==================== Contact ====================

async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<NewContactSubmission>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.message.trim().is_empty()
    {
        return Err(AppError::Validation(
            "name, email and message are required".to_string(),
        ));
    }

    let submission = state.db.insert_contact_submission(&payload)?;
    tracing::info!(id = %submission.id, "Contact submission received");
    Ok((StatusCode::CREATED, Json(submission)))
}

// ==================== Question Responder ====================

#[derive(Debug, Deserialize)]
struct AskQuestion {
    question: String,
    lang: Option<String>,
}

async fn ask_question(
    State(state): State<AppState>,
    Json(payload): Json<AskQuestion>,
) -> Result<impl IntoResponse, AppError> {
    let question = payload.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("Question is required".to_string()));
    }

    let language = Language::from_code_or_canonical(payload.lang.as_deref().unwrap_or_default());
    let answer = answers::answer_for(question, language);

    // Every asked question is kept for the admin review queue
    let stored = state.db.insert_user_question(question, &answer)?;
    tracing::info!(id = %stored.id, "Question answered");

    Ok(Json(json!({ "answer": answer })))
}
