use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::models::{
    Article, ArticleStatus, ContactSubmission, Ebook, Faq, Teaching, UserQuestion,
};

/// Write-side payload for a teaching (admin create/update).
#[derive(Debug, Clone, Deserialize)]
pub struct NewTeaching {
    pub title: String,
    pub title_am: Option<String>,
    pub description: String,
    pub description_am: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub read_time: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub title_am: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_am: Option<String>,
    pub content: String,
    pub content_am: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// New articles default to draft until explicitly published.
    #[serde(default = "default_article_status")]
    pub status: ArticleStatus,
}

fn default_article_status() -> ArticleStatus {
    ArticleStatus::Draft
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFaq {
    pub question: String,
    pub question_am: Option<String>,
    pub answer: String,
    pub answer_am: Option<String>,
    pub subject: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEbook {
    pub title: String,
    pub title_am: Option<String>,
    pub description: Option<String>,
    pub description_am: Option<String>,
    pub author: Option<String>,
    pub category: String,
    pub file_size: Option<i64>,
    pub cover_url: Option<String>,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub language: Option<String>,
}

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Initialize database connection and create tables
    pub fn new(database_path: &str) -> Result<Self> {
        let conn = Connection::open(database_path)
            .context(format!("Failed to open database at {}", database_path))?;

        // Check if migration is needed (pre-status articles schema)
        if Self::needs_migration(&conn)? {
            Self::run_migration(&conn)?;
        }

        conn.execute(
            "CREATE TABLE IF NOT EXISTS teachings (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                title_am TEXT,
                description TEXT NOT NULL,
                description_am TEXT,
                category TEXT NOT NULL,
                tags TEXT NOT NULL DEFAULT '[]',
                read_time TEXT,
                difficulty TEXT,
                created_at TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create teachings table")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS articles (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                title_am TEXT,
                excerpt TEXT,
                excerpt_am TEXT,
                content TEXT NOT NULL,
                content_am TEXT,
                category TEXT NOT NULL,
                tags TEXT NOT NULL DEFAULT '[]',
                status TEXT NOT NULL DEFAULT 'draft',
                created_at TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create articles table")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS faqs (
                id TEXT PRIMARY KEY,
                question TEXT NOT NULL,
                question_am TEXT,
                answer TEXT NOT NULL,
                answer_am TEXT,
                subject TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create faqs table")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS ebooks (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                title_am TEXT,
                description TEXT,
                description_am TEXT,
                author TEXT,
                category TEXT NOT NULL,
                file_size INTEGER,
                download_count INTEGER NOT NULL DEFAULT 0,
                cover_url TEXT,
                file_url TEXT,
                created_at TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create ebooks table")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS contact_submissions (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                subject TEXT NOT NULL,
                message TEXT NOT NULL,
                language TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'pending',
                created_at TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create contact_submissions table")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS user_questions (
                id TEXT PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create user_questions table")?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Check if database migration is needed
    fn needs_migration(conn: &Connection) -> Result<bool> {
        // Check if articles table exists
        let table_exists: bool = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='articles'",
            [],
            |row| row.get::<_, i64>(0).map(|count| count > 0),
        )?;

        if !table_exists {
            return Ok(false); // New database, no migration needed
        }

        // Check if status column exists
        let column_exists: bool = conn.query_row(
            "SELECT COUNT(*) FROM pragma_table_info('articles') WHERE name='status'",
            [],
            |row| row.get::<_, i64>(0).map(|count| count > 0),
        )?;

        Ok(!column_exists) // Need migration if status doesn't exist
    }

    /// Run database migration from old schema to new schema
    fn run_migration(conn: &Connection) -> Result<()> {
        conn.execute("BEGIN TRANSACTION", [])?;

        match Self::run_migration_inner(conn) {
            Ok(_) => {
                conn.execute("COMMIT", [])?;
                Ok(())
            }
            Err(e) => {
                conn.execute("ROLLBACK", [])?;
                Err(e).context("Migration failed and was rolled back")
            }
        }
    }

    fn run_migration_inner(conn: &Connection) -> Result<()> {
        // Existing articles predate the draft workflow and were always
        // visible, so they migrate as published.
        conn.execute(
            "ALTER TABLE articles ADD COLUMN status TEXT NOT NULL DEFAULT 'published'",
            [],
        )
        .context("Failed to add status column to articles")?;

        Ok(())
    }

    /// True when no content has been loaded yet (used for first-run seeding)
    pub fn is_empty(&self) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row(
            "SELECT (SELECT COUNT(*) FROM teachings)
                  + (SELECT COUNT(*) FROM articles)
                  + (SELECT COUNT(*) FROM faqs)
                  + (SELECT COUNT(*) FROM ebooks)",
            [],
            |row| row.get(0),
        )?;
        Ok(count == 0)
    }

    // ==================== Teachings ====================

    /// Get all teachings, newest first
    pub fn list_teachings(&self) -> Result<Vec<Teaching>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, title_am, description, description_am, category, tags,
                    read_time, difficulty, created_at
             FROM teachings
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let teachings = stmt
            .query_map([], teaching_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list teachings")?;

        Ok(teachings)
    }

    pub fn get_teaching(&self, id: &str) -> Result<Option<Teaching>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, title_am, description, description_am, category, tags,
                    read_time, difficulty, created_at
             FROM teachings WHERE id = ?1",
        )?;

        let teaching = stmt
            .query_row(params![id], teaching_from_row)
            .optional()
            .context("Failed to fetch teaching")?;

        Ok(teaching)
    }

    pub fn insert_teaching(&self, new: &NewTeaching) -> Result<Teaching> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let tags = serde_json::to_string(&new.tags)?;

        conn.execute(
            "INSERT INTO teachings (id, title, title_am, description, description_am,
                                    category, tags, read_time, difficulty, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                id,
                new.title,
                new.title_am,
                new.description,
                new.description_am,
                new.category,
                tags,
                new.read_time,
                new.difficulty,
                now
            ],
        )
        .context("Failed to insert teaching")?;

        Ok(Teaching {
            id,
            title: new.title.clone(),
            title_am: new.title_am.clone(),
            description: new.description.clone(),
            description_am: new.description_am.clone(),
            category: new.category.clone(),
            tags: new.tags.clone(),
            read_time: new.read_time.clone(),
            difficulty: new.difficulty.clone(),
            created_at: now,
        })
    }

    /// Returns false if no row with the given id exists
    pub fn update_teaching(&self, id: &str, new: &NewTeaching) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let tags = serde_json::to_string(&new.tags)?;
        let rows = conn
            .execute(
                "UPDATE teachings
                 SET title = ?1, title_am = ?2, description = ?3, description_am = ?4,
                     category = ?5, tags = ?6, read_time = ?7, difficulty = ?8
                 WHERE id = ?9",
                params![
                    new.title,
                    new.title_am,
                    new.description,
                    new.description_am,
                    new.category,
                    tags,
                    new.read_time,
                    new.difficulty,
                    id
                ],
            )
            .context("Failed to update teaching")?;
        Ok(rows > 0)
    }

    pub fn delete_teaching(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn
            .execute("DELETE FROM teachings WHERE id = ?1", params![id])
            .context("Failed to delete teaching")?;
        Ok(rows > 0)
    }

    // ==================== Articles ====================

    /// Get published articles, newest first (the public listing)
    pub fn list_published_articles(&self) -> Result<Vec<Article>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, title_am, excerpt, excerpt_am, content, content_am,
                    category, tags, status, created_at
             FROM articles
             WHERE status = 'published'
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let articles = stmt
            .query_map([], article_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list published articles")?;

        Ok(articles)
    }

    /// Get all articles regardless of status (admin listing)
    pub fn list_articles(&self) -> Result<Vec<Article>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, title_am, excerpt, excerpt_am, content, content_am,
                    category, tags, status, created_at
             FROM articles
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let articles = stmt
            .query_map([], article_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list articles")?;

        Ok(articles)
    }

    pub fn get_article(&self, id: &str) -> Result<Option<Article>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, title_am, excerpt, excerpt_am, content, content_am,
                    category, tags, status, created_at
             FROM articles WHERE id = ?1",
        )?;

        let article = stmt
            .query_row(params![id], article_from_row)
            .optional()
            .context("Failed to fetch article")?;

        Ok(article)
    }

    pub fn insert_article(&self, new: &NewArticle) -> Result<Article> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let tags = serde_json::to_string(&new.tags)?;

        conn.execute(
            "INSERT INTO articles (id, title, title_am, excerpt, excerpt_am, content,
                                   content_am, category, tags, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                id,
                new.title,
                new.title_am,
                new.excerpt,
                new.excerpt_am,
                new.content,
                new.content_am,
                new.category,
                tags,
                new.status.as_str(),
                now
            ],
        )
        .context("Failed to insert article")?;

        Ok(Article {
            id,
            title: new.title.clone(),
            title_am: new.title_am.clone(),
            excerpt: new.excerpt.clone(),
            excerpt_am: new.excerpt_am.clone(),
            content: new.content.clone(),
            content_am: new.content_am.clone(),
            category: new.category.clone(),
            tags: new.tags.clone(),
            status: new.status,
            created_at: now,
        })
    }

    pub fn update_article(&self, id: &str, new: &NewArticle) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let tags = serde_json::to_string(&new.tags)?;
        let rows = conn
            .execute(
                "UPDATE articles
                 SET title = ?1, title_am = ?2, excerpt = ?3, excerpt_am = ?4,
                     content = ?5, content_am = ?6, category = ?7, tags = ?8, status = ?9
                 WHERE id = ?10",
                params![
                    new.title,
                    new.title_am,
                    new.excerpt,
                    new.excerpt_am,
                    new.content,
                    new.content_am,
                    new.category,
                    tags,
                    new.status.as_str(),
                    id
                ],
            )
            .context("Failed to update article")?;
        Ok(rows > 0)
    }

    pub fn delete_article(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn
            .execute("DELETE FROM articles WHERE id = ?1", params![id])
            .context("Failed to delete article")?;
        Ok(rows > 0)
    }

    // ==================== FAQs ====================

    pub fn list_faqs(&self) -> Result<Vec<Faq>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, question, question_am, answer, answer_am, subject, created_at
             FROM faqs
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let faqs = stmt
            .query_map([], faq_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list faqs")?;

        Ok(faqs)
    }

    pub fn get_faq(&self, id: &str) -> Result<Option<Faq>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, question, question_am, answer, answer_am, subject, created_at
             FROM faqs WHERE id = ?1",
        )?;

        let faq = stmt
            .query_row(params![id], faq_from_row)
            .optional()
            .context("Failed to fetch faq")?;

        Ok(faq)
    }

    /// FAQs sharing a subject, excluding one record (the detail page's
    /// "related questions" list)
    pub fn list_related_faqs(&self, subject: &str, exclude_id: &str) -> Result<Vec<Faq>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, question, question_am, answer, answer_am, subject, created_at
             FROM faqs
             WHERE subject = ?1 AND id != ?2
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let faqs = stmt
            .query_map(params![subject, exclude_id], faq_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list related faqs")?;

        Ok(faqs)
    }

    pub fn insert_faq(&self, new: &NewFaq) -> Result<Faq> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO faqs (id, question, question_am, answer, answer_am, subject, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                id,
                new.question,
                new.question_am,
                new.answer,
                new.answer_am,
                new.subject,
                now
            ],
        )
        .context("Failed to insert faq")?;

        Ok(Faq {
            id,
            question: new.question.clone(),
            question_am: new.question_am.clone(),
            answer: new.answer.clone(),
            answer_am: new.answer_am.clone(),
            subject: new.subject.clone(),
            created_at: now,
        })
    }

    pub fn update_faq(&self, id: &str, new: &NewFaq) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn
            .execute(
                "UPDATE faqs
                 SET question = ?1, question_am = ?2, answer = ?3, answer_am = ?4, subject = ?5
                 WHERE id = ?6",
                params![
                    new.question,
                    new.question_am,
                    new.answer,
                    new.answer_am,
                    new.subject,
                    id
                ],
            )
            .context("Failed to update faq")?;
        Ok(rows > 0)
    }

    pub fn delete_faq(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn
            .execute("DELETE FROM faqs WHERE id = ?1", params![id])
            .context("Failed to delete faq")?;
        Ok(rows > 0)
    }

    // ==================== eBooks ====================

    pub fn list_ebooks(&self) -> Result<Vec<Ebook>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, title_am, description, description_am, author, category,
                    file_size, download_count, cover_url, file_url, created_at
             FROM ebooks
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let ebooks = stmt
            .query_map([], ebook_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list ebooks")?;

        Ok(ebooks)
    }

    pub fn get_ebook(&self, id: &str) -> Result<Option<Ebook>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, title_am, description, description_am, author, category,
                    file_size, download_count, cover_url, file_url, created_at
             FROM ebooks WHERE id = ?1",
        )?;

        let ebook = stmt
            .query_row(params![id], ebook_from_row)
            .optional()
            .context("Failed to fetch ebook")?;

        Ok(ebook)
    }

    pub fn insert_ebook(&self, new: &NewEbook) -> Result<Ebook> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO ebooks (id, title, title_am, description, description_am, author,
                                 category, file_size, download_count, cover_url, file_url,
                                 created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 0, ?9, ?10, ?11)",
            params![
                id,
                new.title,
                new.title_am,
                new.description,
                new.description_am,
                new.author,
                new.category,
                new.file_size,
                new.cover_url,
                new.file_url,
                now
            ],
        )
        .context("Failed to insert ebook")?;

        Ok(Ebook {
            id,
            title: new.title.clone(),
            title_am: new.title_am.clone(),
            description: new.description.clone(),
            description_am: new.description_am.clone(),
            author: new.author.clone(),
            category: new.category.clone(),
            file_size: new.file_size,
            download_count: 0,
            cover_url: new.cover_url.clone(),
            file_url: new.file_url.clone(),
            created_at: now,
        })
    }

    pub fn update_ebook(&self, id: &str, new: &NewEbook) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn
            .execute(
                "UPDATE ebooks
                 SET title = ?1, title_am = ?2, description = ?3, description_am = ?4,
                     author = ?5, category = ?6, file_size = ?7, cover_url = ?8, file_url = ?9
                 WHERE id = ?10",
                params![
                    new.title,
                    new.title_am,
                    new.description,
                    new.description_am,
                    new.author,
                    new.category,
                    new.file_size,
                    new.cover_url,
                    new.file_url,
                    id
                ],
            )
            .context("Failed to update ebook")?;
        Ok(rows > 0)
    }

    pub fn delete_ebook(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn
            .execute("DELETE FROM ebooks WHERE id = ?1", params![id])
            .context("Failed to delete ebook")?;
        Ok(rows > 0)
    }

    /// Increment an ebook's download counter, returning the new count,
    /// or None if the ebook does not exist
    pub fn increment_download_count(&self, id: &str) -> Result<Option<i64>> {
        let conn = self.conn.lock().unwrap();
        let rows = conn
            .execute(
                "UPDATE ebooks SET download_count = download_count + 1 WHERE id = ?1",
                params![id],
            )
            .context("Failed to increment download count")?;

        if rows == 0 {
            return Ok(None);
        }

        let count: i64 = conn.query_row(
            "SELECT download_count FROM ebooks WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(Some(count))
    }

    // ==================== Contact Submissions ====================

    pub fn insert_contact_submission(
        &self,
        new: &NewContactSubmission,
    ) -> Result<ContactSubmission> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let subject = new
            .subject
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "General Inquiry".to_string());
        let language = new.language.clone().unwrap_or_else(|| "en".to_string());

        conn.execute(
            "INSERT INTO contact_submissions (id, name, email, subject, message, language,
                                              status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'pending', ?7)",
            params![id, new.name, new.email, subject, new.message, language, now],
        )
        .context("Failed to insert contact submission")?;

        Ok(ContactSubmission {
            id,
            name: new.name.clone(),
            email: new.email.clone(),
            subject,
            message: new.message.clone(),
            language,
            status: "pending".to_string(),
            created_at: now,
        })
    }

    pub fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, name, email, subject, message, language, status, created_at
             FROM contact_submissions
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let submissions = stmt
            .query_map([], |row| {
                Ok(ContactSubmission {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    subject: row.get(3)?,
                    message: row.get(4)?,
                    language: row.get(5)?,
                    status: row.get(6)?,
                    created_at: row.get(7)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list contact submissions")?;

        Ok(submissions)
    }

    // ==================== User Questions ====================

    pub fn insert_user_question(&self, question: &str, answer: &str) -> Result<UserQuestion> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO user_questions (id, question, answer, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![id, question, answer, now],
        )
        .context("Failed to insert user question")?;

        Ok(UserQuestion {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            created_at: now,
        })
    }

    pub fn list_user_questions(&self) -> Result<Vec<UserQuestion>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, question, answer, created_at
             FROM user_questions
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let questions = stmt
            .query_map([], |row| {
                Ok(UserQuestion {
                    id: row.get(0)?,
                    question: row.get(1)?,
                    answer: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list user questions")?;

        Ok(questions)
    }
}

// ==================== Row Mappers ====================

/// Tags are stored as a JSON array; malformed values degrade to an empty list
fn parse_tags(raw: String) -> Vec<String> {
    serde_json::from_str(&raw).unwrap_or_default()
}

fn teaching_from_row(row: &Row<'_>) -> rusqlite::Result<Teaching> {
    Ok(Teaching {
        id: row.get(0)?,
        title: row.get(1)?,
        title_am: row.get(2)?,
        description: row.get(3)?,
        description_am: row.get(4)?,
        category: row.get(5)?,
        tags: parse_tags(row.get::<_, String>(6)?),
        read_time: row.get(7)?,
        difficulty: row.get(8)?,
        created_at: row.get(9)?,
    })
}

fn article_from_row(row: &Row<'_>) -> rusqlite::Result<Article> {
    Ok(Article {
        id: row.get(0)?,
        title: row.get(1)?,
        title_am: row.get(2)?,
        excerpt: row.get(3)?,
        excerpt_am: row.get(4)?,
        content: row.get(5)?,
        content_am: row.get(6)?,
        category: row.get(7)?,
        tags: parse_tags(row.get::<_, String>(8)?),
        status: ArticleStatus::from_str_lossy(&row.get::<_, String>(9)?),
        created_at: row.get(10)?,
    })
}

fn faq_from_row(row: &Row<'_>) -> rusqlite::Result<Faq> {
    Ok(Faq {
        id: row.get(0)?,
        question: row.get(1)?,
        question_am: row.get(2)?,
        answer: row.get(3)?,
        answer_am: row.get(4)?,
        subject: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn ebook_from_row(row: &Row<'_>) -> rusqlite::Result<Ebook> {
    Ok(Ebook {
        id: row.get(0)?,
        title: row.get(1)?,
        title_am: row.get(2)?,
        description: row.get(3)?,
        description_am: row.get(4)?,
        author: row.get(5)?,
        category: row.get(6)?,
        file_size: row.get(7)?,
        download_count: row.get(8)?,
        cover_url: row.get(9)?,
        file_url: row.get(10)?,
        created_at: row.get(11)?,
    })
}
