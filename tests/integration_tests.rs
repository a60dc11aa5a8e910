//! Integration tests for the EOTC Answers content service.
//!
//! These tests drive the full router over a temp-file store, verifying the
//! filtering/resolution semantics through the HTTP surface, the submission
//! flows, and the admin surface's API-key guard.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use eotc_answers::db::{Database, NewArticle, NewEbook, NewFaq, NewTeaching};
use eotc_answers::models::ArticleStatus;
use eotc_answers::routes::{router, AppState};

// ==================== Test Helpers ====================

const ADMIN_KEY: &str = "test-admin-key";

/// Build an app over a fresh temp-file store
fn test_app(admin_key: Option<&str>) -> (TempDir, Database, Router) {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("test.db");
    let db = Database::new(path.to_str().unwrap()).expect("open db");
    let app = router(AppState {
        db: db.clone(),
        admin_api_key: admin_key.map(|s| s.to_string()),
    });
    (temp_dir, db, app)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    api_key: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

fn seed_teachings(db: &Database) {
    db.insert_teaching(&NewTeaching {
        title: "Fasting Basics".to_string(),
        title_am: Some("ፆም".to_string()),
        description: "An introduction to fasting".to_string(),
        description_am: None,
        category: "Fasting".to_string(),
        tags: vec!["fasting".to_string(), "discipline".to_string()],
        read_time: Some("5 min".to_string()),
        difficulty: Some("beginner".to_string()),
    })
    .expect("seed teaching");

    db.insert_teaching(&NewTeaching {
        title: "The Mystery of the Trinity".to_string(),
        title_am: None,
        description: "On the triune God".to_string(),
        description_am: None,
        category: "Theology".to_string(),
        tags: vec!["doctrine".to_string()],
        read_time: None,
        difficulty: None,
    })
    .expect("seed teaching");
}

fn seed_faqs(db: &Database) {
    for (question, subject) in [
        ("Why do we fast?", "Fasting"),
        ("When does the fast begin?", "Fasting"),
        ("What is Tewahedo?", "Doctrine"),
    ] {
        db.insert_faq(&NewFaq {
            question: question.to_string(),
            question_am: None,
            answer: "Answer body".to_string(),
            answer_am: None,
            subject: subject.to_string(),
        })
        .expect("seed faq");
    }
}

// ==================== Health ====================

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, _db, app) = test_app(None);
    let (status, body) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// ==================== Teachings ====================

#[tokio::test]
async fn test_teachings_listing_and_category_chips() {
    let (_dir, db, app) = test_app(None);
    seed_teachings(&db);

    let (status, body) = get_json(&app, "/api/teachings").await;
    assert_eq!(status, StatusCode::OK);

    let items = body["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    // Newest first
    assert_eq!(items[0]["title"], "The Mystery of the Trinity");
    assert_eq!(items[1]["title"], "Fasting Basics");

    // Sentinel first, then first-seen order over the newest-first listing
    let categories = body["categories"].as_array().expect("categories");
    assert_eq!(categories, &vec![json!("all"), json!("Theology"), json!("Fasting")]);
}

#[tokio::test]
async fn test_teachings_search_is_case_insensitive() {
    let (_dir, db, app) = test_app(None);
    seed_teachings(&db);

    let (status, body) = get_json(&app, "/api/teachings?q=Trin").await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "The Mystery of the Trinity");
}

#[tokio::test]
async fn test_teachings_category_filter_composes_with_search() {
    let (_dir, db, app) = test_app(None);
    seed_teachings(&db);

    let (_, body) = get_json(&app, "/api/teachings?category=Fasting").await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    // Matching category but non-matching term yields nothing
    let (_, body) = get_json(&app, "/api/teachings?q=trinity&category=Fasting").await;
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_teachings_amharic_resolution_with_fallback() {
    let (_dir, db, app) = test_app(None);
    seed_teachings(&db);

    let (_, body) = get_json(&app, "/api/teachings?lang=am").await;
    let items = body["items"].as_array().expect("items");
    // No Amharic title recorded, canonical text falls through
    assert_eq!(items[0]["title"], "The Mystery of the Trinity");
    assert_eq!(items[1]["title"], "ፆም");
}

#[tokio::test]
async fn test_teaching_detail_and_not_found() {
    let (_dir, db, app) = test_app(None);
    let inserted = db
        .insert_teaching(&NewTeaching {
            title: "Holy Week".to_string(),
            title_am: None,
            description: "Walking through Passion week".to_string(),
            description_am: None,
            category: "Fasting".to_string(),
            tags: Vec::new(),
            read_time: None,
            difficulty: None,
        })
        .expect("insert");

    let (status, body) = get_json(&app, &format!("/api/teachings/{}", inserted.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Holy Week");

    let (status, body) = get_json(&app, "/api/teachings/missing-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("not found"));
}

// ==================== Articles ====================

#[tokio::test]
async fn test_draft_articles_are_hidden_from_public_surface() {
    let (_dir, db, app) = test_app(None);

    let published = db
        .insert_article(&NewArticle {
            title: "On Icons".to_string(),
            title_am: None,
            excerpt: Some("Why the church venerates icons".to_string()),
            excerpt_am: None,
            content: "Body".to_string(),
            content_am: None,
            category: "Tradition".to_string(),
            tags: Vec::new(),
            status: ArticleStatus::Published,
        })
        .expect("insert");
    let draft = db
        .insert_article(&NewArticle {
            title: "Unfinished".to_string(),
            title_am: None,
            excerpt: None,
            excerpt_am: None,
            content: "Draft body".to_string(),
            content_am: None,
            category: "Tradition".to_string(),
            tags: Vec::new(),
            status: ArticleStatus::Draft,
        })
        .expect("insert");

    let (_, body) = get_json(&app, "/api/articles").await;
    let items = body["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "On Icons");

    let (status, _) = get_json(&app, &format!("/api/articles/{}", published.id)).await;
    assert_eq!(status, StatusCode::OK);

    // Draft detail looks exactly like a missing record
    let (status, _) = get_json(&app, &format!("/api/articles/{}", draft.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ==================== FAQs ====================

#[tokio::test]
async fn test_faqs_grouped_by_subject() {
    let (_dir, db, app) = test_app(None);
    seed_faqs(&db);

    let (status, body) = get_json(&app, "/api/faqs").await;
    assert_eq!(status, StatusCode::OK);

    let groups = body["groups"].as_object().expect("groups");
    // Keys iterate lexicographically
    let keys: Vec<&String> = groups.keys().collect();
    assert_eq!(keys, vec!["Doctrine", "Fasting"]);
    assert_eq!(groups["Fasting"].as_array().unwrap().len(), 2);
    assert_eq!(groups["Doctrine"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_faqs_search_narrows_groups() {
    let (_dir, db, app) = test_app(None);
    seed_faqs(&db);

    let (_, body) = get_json(&app, "/api/faqs?q=tewahedo").await;
    let groups = body["groups"].as_object().expect("groups");
    assert_eq!(groups.len(), 1);
    assert!(groups.contains_key("Doctrine"));
}

#[tokio::test]
async fn test_faq_detail_lists_related_questions() {
    let (_dir, db, app) = test_app(None);
    seed_faqs(&db);

    let faqs = db.list_faqs().expect("list");
    let fasting_faq = faqs
        .iter()
        .find(|f| f.question == "Why do we fast?")
        .expect("seeded faq");

    let (status, body) = get_json(&app, &format!("/api/faqs/{}", fasting_faq.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["faq"]["question"], "Why do we fast?");

    let related = body["related"].as_array().expect("related");
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["question"], "When does the fast begin?");
    assert_eq!(related[0]["subject"], "Fasting");
}

// ==================== eBooks ====================

#[tokio::test]
async fn test_ebook_download_counter() {
    let (_dir, db, app) = test_app(None);
    let ebook = db
        .insert_ebook(&NewEbook {
            title: "Prayer Book".to_string(),
            title_am: None,
            description: None,
            description_am: None,
            author: None,
            category: "Prayer".to_string(),
            file_size: Some(1024),
            cover_url: None,
            file_url: None,
        })
        .expect("insert");

    let uri = format!("/api/ebooks/{}/download", ebook.id);
    let (status, body) = send_json(&app, "POST", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["download_count"], 1);

    let (_, body) = send_json(&app, "POST", &uri, None, None).await;
    assert_eq!(body["download_count"], 2);

    let (status, _) = send_json(&app, "POST", "/api/ebooks/missing/download", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ==================== Cross-Entity Search ====================

#[tokio::test]
async fn test_search_requires_a_term() {
    let (_dir, db, app) = test_app(None);
    seed_teachings(&db);
    seed_faqs(&db);

    let (status, body) = get_json(&app, "/api/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert!(body["teachings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_spans_teachings_and_faqs() {
    let (_dir, db, app) = test_app(None);
    seed_teachings(&db);
    seed_faqs(&db);

    let (_, body) = get_json(&app, "/api/search?q=fast").await;
    let teachings = body["teachings"].as_array().expect("teachings");
    let faqs = body["faqs"].as_array().expect("faqs");
    assert_eq!(teachings.len(), 1);
    assert_eq!(teachings[0]["title"], "Fasting Basics");
    assert_eq!(faqs.len(), 2);
    assert_eq!(body["total"], 3);
}

// ==================== i18n ====================

#[tokio::test]
async fn test_i18n_tables_and_unknown_language_fallback() {
    let (_dir, _db, app) = test_app(None);

    let (status, body) = get_json(&app, "/api/i18n/am").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "am");
    assert_eq!(body["strings"]["nav_home"], "መነሻ");

    let (_, body) = get_json(&app, "/api/i18n/xx").await;
    assert_eq!(body["language"], "en");
    assert_eq!(body["strings"]["nav_home"], "Home");
}

// ==================== Contact ====================

#[tokio::test]
async fn test_contact_submission_flow() {
    let (_dir, db, app) = test_app(None);

    let payload = json!({
        "name": "Abebe",
        "email": "abebe@example.com",
        "message": "Thank you for the teachings"
    });
    let (status, body) = send_json(&app, "POST", "/api/contact", Some(payload), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["subject"], "General Inquiry");
    assert_eq!(body["status"], "pending");

    let stored = db.list_contact_submissions().expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Abebe");
}

#[tokio::test]
async fn test_contact_submission_requires_fields() {
    let (_dir, _db, app) = test_app(None);

    let payload = json!({ "name": "Abebe", "email": "", "message": "Hi" });
    let (status, _) = send_json(&app, "POST", "/api/contact", Some(payload), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ==================== Question Responder ====================

#[tokio::test]
async fn test_question_gets_templated_answer_and_is_stored() {
    let (_dir, db, app) = test_app(None);

    let payload = json!({ "question": "Why do we fast?" });
    let (status, body) = send_json(&app, "POST", "/api/questions", Some(payload), None).await;
    assert_eq!(status, StatusCode::OK);
    let answer = body["answer"].as_str().expect("answer");
    assert!(answer.contains("\"Why do we fast?\""));

    let stored = db.list_user_questions().expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].question, "Why do we fast?");
    assert_eq!(stored[0].answer, answer);
}

#[tokio::test]
async fn test_empty_question_is_rejected() {
    let (_dir, _db, app) = test_app(None);

    let payload = json!({ "question": "   " });
    let (status, body) = send_json(&app, "POST", "/api/questions", Some(payload), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("required"));
}

// ==================== Admin Surface ====================

#[tokio::test]
async fn test_admin_requires_api_key() {
    let (_dir, _db, app) = test_app(Some(ADMIN_KEY));

    let (status, _) = send_json(&app, "GET", "/api/admin/teachings", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(&app, "GET", "/api/admin/teachings", None, Some("wrong-key")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(&app, "GET", "/api/admin/teachings", None, Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_disabled_without_configured_key() {
    let (_dir, _db, app) = test_app(None);

    // Even a "correct" header cannot open a surface that has no key configured
    let (status, _) = send_json(&app, "GET", "/api/admin/teachings", None, Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_teaching_crud_roundtrip() {
    let (_dir, _db, app) = test_app(Some(ADMIN_KEY));

    // Create
    let payload = json!({
        "title": "Holy Week",
        "title_am": "ሰሙነ ሕማማት",
        "description": "Walking through Passion week",
        "category": "Fasting",
        "tags": ["fasting"]
    });
    let (status, created) =
        send_json(&app, "POST", "/api/admin/teachings", Some(payload), Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id").to_string();

    // Update
    let payload = json!({
        "title": "Holy Week, Revisited",
        "description": "Walking through Passion week",
        "category": "Fasting"
    });
    let uri = format!("/api/admin/teachings/{}", id);
    let (status, _) = send_json(&app, "PUT", &uri, Some(payload), Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, detail) = get_json(&app, &format!("/api/teachings/{}", id)).await;
    assert_eq!(detail["title"], "Holy Week, Revisited");

    // Delete
    let (status, _) = send_json(&app, "DELETE", &uri, None, Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get_json(&app, &format!("/api/teachings/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_sees_drafts_and_raw_records() {
    let (_dir, db, app) = test_app(Some(ADMIN_KEY));
    db.insert_article(&NewArticle {
        title: "Unfinished".to_string(),
        title_am: Some("ያላለቀ".to_string()),
        excerpt: None,
        excerpt_am: None,
        content: "Draft body".to_string(),
        content_am: None,
        category: "Tradition".to_string(),
        tags: Vec::new(),
        status: ArticleStatus::Draft,
    })
    .expect("insert");

    let (status, body) =
        send_json(&app, "GET", "/api/admin/articles", None, Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::OK);
    let articles = body.as_array().expect("articles");
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["status"], "draft");
    // Raw records carry both language variants
    assert_eq!(articles[0]["title_am"], "ያላለቀ");
}

#[tokio::test]
async fn test_admin_validation_rejects_blank_fields() {
    let (_dir, _db, app) = test_app(Some(ADMIN_KEY));

    let payload = json!({ "question": "", "answer": "A", "subject": "S" });
    let (status, _) =
        send_json(&app, "POST", "/api/admin/faqs", Some(payload), Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
