use anyhow::Result;
use tracing::info;

use eotc_answers::config::Config;
use eotc_answers::db::{Database, NewEbook, NewFaq, NewTeaching};
use eotc_answers::routes::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eotc_answers=info".parse()?),
        )
        .init();

    info!("Starting EOTC Answers content service");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Open the content store
    let db = Database::new(&config.database_path)?;

    if db.is_empty()? {
        info!("Empty content store, loading starter content");
        seed_starter_content(&db)?;
    }

    if config.admin_api_key.is_none() {
        info!("ADMIN_API_KEY not set, admin endpoints are disabled");
    }

    let state = AppState {
        db,
        admin_api_key: config.admin_api_key.clone(),
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Listening on port {}", config.port);

    axum::serve(listener, routes::router(state)).await?;

    Ok(())
}

/// Minimal first-run content so a fresh deployment isn't an empty site.
fn seed_starter_content(db: &Database) -> Result<()> {
    db.insert_teaching(&NewTeaching {
        title: "Fasting in the Orthodox Tradition".to_string(),
        title_am: Some("ፆም በኦርቶዶክስ ትውፊት".to_string()),
        description: "An introduction to the fasts of the church year and their spiritual purpose."
            .to_string(),
        description_am: None,
        category: "Fasting".to_string(),
        tags: vec!["fasting".to_string(), "discipline".to_string()],
        read_time: Some("5 min".to_string()),
        difficulty: Some("beginner".to_string()),
    })?;

    db.insert_teaching(&NewTeaching {
        title: "The Mystery of the Holy Trinity".to_string(),
        title_am: Some("የቅድስት ሥላሴ ምሥጢር".to_string()),
        description: "What the church teaches about the triune God.".to_string(),
        description_am: None,
        category: "Theology".to_string(),
        tags: vec!["doctrine".to_string()],
        read_time: Some("8 min".to_string()),
        difficulty: Some("intermediate".to_string()),
    })?;

    db.insert_faq(&NewFaq {
        question: "Why do we fast on Wednesdays and Fridays?".to_string(),
        question_am: Some("ለምን ረቡዕና ዓርብ እንጾማለን?".to_string()),
        answer: "Wednesday recalls the betrayal of our Lord and Friday His crucifixion."
            .to_string(),
        answer_am: None,
        subject: "Fasting".to_string(),
    })?;

    db.insert_faq(&NewFaq {
        question: "What is the meaning of Tewahedo?".to_string(),
        question_am: Some("ተዋሕዶ ማለት ምን ማለት ነው?".to_string()),
        answer: "Tewahedo means \"being made one\", confessing the one united nature of Christ."
            .to_string(),
        answer_am: None,
        subject: "Doctrine".to_string(),
    })?;

    db.insert_ebook(&NewEbook {
        title: "Introduction to Orthodox Prayer".to_string(),
        title_am: Some("የኦርቶዶክስ ጸሎት መግቢያ".to_string()),
        description: Some("A beginner's guide to the daily prayers.".to_string()),
        description_am: None,
        author: None,
        category: "Prayer".to_string(),
        file_size: None,
        cover_url: None,
        file_url: None,
    })?;

    info!("Starter content loaded");
    Ok(())
}
