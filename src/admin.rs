//! Admin CRUD surface.
//!
//! Raw records (both language variants, drafts included) for the dashboard
//! forms. Every route requires the configured API key in `x-api-key`; when
//! no key is configured the whole surface is disabled.

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

use crate::db::{NewArticle, NewEbook, NewFaq, NewTeaching};
use crate::error::AppError;
use crate::routes::AppState;
use crate::security::constant_time_compare;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/admin/teachings", get(list_teachings).post(create_teaching))
        .route(
            "/api/admin/teachings/:id",
            put(update_teaching).delete(delete_teaching),
        )
        .route("/api/admin/articles", get(list_articles).post(create_article))
        .route(
            "/api/admin/articles/:id",
            put(update_article).delete(delete_article),
        )
        .route("/api/admin/faqs", get(list_faqs).post(create_faq))
        .route("/api/admin/faqs/:id", put(update_faq).delete(delete_faq))
        .route("/api/admin/ebooks", get(list_ebooks).post(create_ebook))
        .route("/api/admin/ebooks/:id", put(update_ebook).delete(delete_ebook))
        .route("/api/admin/contacts", get(list_contacts))
        .route("/api/admin/questions", get(list_questions))
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}

/// Reject requests that don't carry the configured admin key.
async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok());

    match (&state.admin_api_key, provided) {
        (Some(expected), Some(given)) if constant_time_compare(expected, given) => {
            Ok(next.run(req).await)
        }
        _ => Err(AppError::Unauthorized),
    }
}

// ==================== Teachings ====================

async fn list_teachings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.db.list_teachings()?))
}

async fn create_teaching(
    State(state): State<AppState>,
    Json(payload): Json<NewTeaching>,
) -> Result<impl IntoResponse, AppError> {
    validate_required("title", &payload.title)?;
    validate_required("description", &payload.description)?;
    validate_required("category", &payload.category)?;

    let teaching = state.db.insert_teaching(&payload)?;
    tracing::info!(id = %teaching.id, "Teaching created");
    Ok((StatusCode::CREATED, Json(teaching)))
}

async fn update_teaching(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NewTeaching>,
) -> Result<impl IntoResponse, AppError> {
    validate_required("title", &payload.title)?;
    validate_required("description", &payload.description)?;
    validate_required("category", &payload.category)?;

    if !state.db.update_teaching(&id, &payload)? {
        return Err(AppError::not_found("teaching", &id));
    }
    Ok(Json(json!({ "updated": true })))
}

async fn delete_teaching(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.db.delete_teaching(&id)? {
        return Err(AppError::not_found("teaching", &id));
    }
    Ok(Json(json!({ "deleted": true })))
}

// ==================== Articles ====================

async fn list_articles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    // Includes drafts, unlike the public listing
    Ok(Json(state.db.list_articles()?))
}

async fn create_article(
    State(state): State<AppState>,
    Json(payload): Json<NewArticle>,
) -> Result<impl IntoResponse, AppError> {
    validate_required("title", &payload.title)?;
    validate_required("content", &payload.content)?;
    validate_required("category", &payload.category)?;

    let article = state.db.insert_article(&payload)?;
    tracing::info!(id = %article.id, status = article.status.as_str(), "Article created");
    Ok((StatusCode::CREATED, Json(article)))
}

async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NewArticle>,
) -> Result<impl IntoResponse, AppError> {
    validate_required("title", &payload.title)?;
    validate_required("content", &payload.content)?;
    validate_required("category", &payload.category)?;

    if !state.db.update_article(&id, &payload)? {
        return Err(AppError::not_found("article", &id));
    }
    Ok(Json(json!({ "updated": true })))
}

async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.db.delete_article(&id)? {
        return Err(AppError::not_found("article", &id));
    }
    Ok(Json(json!({ "deleted": true })))
}

// ==================== FAQs ====================

async fn list_faqs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.db.list_faqs()?))
}

async fn create_faq(
    State(state): State<AppState>,
    Json(payload): Json<NewFaq>,
) -> Result<impl IntoResponse, AppError> {
    validate_required("question", &payload.question)?;
    validate_required("answer", &payload.answer)?;
    validate_required("subject", &payload.subject)?;

    let faq = state.db.insert_faq(&payload)?;
    tracing::info!(id = %faq.id, "FAQ created");
    Ok((StatusCode::CREATED, Json(faq)))
}

async fn update_faq(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NewFaq>,
) -> Result<impl IntoResponse, AppError> {
    validate_required("question", &payload.question)?;
    validate_required("answer", &payload.answer)?;
    validate_required("subject", &payload.subject)?;

    if !state.db.update_faq(&id, &payload)? {
        return Err(AppError::not_found("faq", &id));
    }
    Ok(Json(json!({ "updated": true })))
}

async fn delete_faq(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.db.delete_faq(&id)? {
        return Err(AppError::not_found("faq", &id));
    }
    Ok(Json(json!({ "deleted": true })))
}

// ==================== eBooks ====================

async fn list_ebooks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.db.list_ebooks()?))
}

async fn create_ebook(
    State(state): State<AppState>,
    Json(payload): Json<NewEbook>,
) -> Result<impl IntoResponse, AppError> {
    validate_required("title", &payload.title)?;
    validate_required("category", &payload.category)?;

    let ebook = state.db.insert_ebook(&payload)?;
    tracing::info!(id = %ebook.id, "eBook created");
    Ok((StatusCode::CREATED, Json(ebook)))
}

async fn update_ebook(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NewEbook>,
) -> Result<impl IntoResponse, AppError> {
    validate_required("title", &payload.title)?;
    validate_required("category", &payload.category)?;

    if !state.db.update_ebook(&id, &payload)? {
        return Err(AppError::not_found("ebook", &id));
    }
    Ok(Json(json!({ "updated": true })))
}

async fn delete_ebook(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.db.delete_ebook(&id)? {
        return Err(AppError::not_found("ebook", &id));
    }
    Ok(Json(json!({ "deleted": true })))
}

// ==================== Review Queues ====================

async fn list_contacts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.db.list_contact_submissions()?))
}

async fn list_questions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.db.list_user_questions()?))
}

fn validate_required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
