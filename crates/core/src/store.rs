//! Read access to the hosted pitch datastore.
//!
//! The service only ever needs one operation: fetch a pitch by identifier together with the idea
//! it was generated from. [`PitchStore`] abstracts that lookup so request handling can be
//! exercised against [`InMemoryPitchStore`] in tests and against Postgres ([`PgPitchStore`]) in
//! production.

use crate::config::CoreConfig;
use crate::error::PitchResult;
use crate::model::{Idea, Pitch, PitchRecord, Tone};
use chrono::{DateTime, Utc};
use pitch_types::PitchId;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::collections::HashMap;

/// Lookup of pitch records by identifier.
#[async_trait::async_trait]
pub trait PitchStore: Send + Sync {
    /// Returns the pitch with the given identifier and its related idea, if any.
    ///
    /// `Ok(None)` means no pitch matched. Errors are reserved for failures of the lookup itself.
    async fn find_pitch(&self, id: &PitchId) -> PitchResult<Option<PitchRecord>>;
}

/// Single-row select with a left join onto `ideas`.
///
/// Keys are compared as text so both `text` and `uuid` primary keys work. `created_at` is cast so
/// `timestamp` and `timestamptz` columns both decode.
const FIND_PITCH_SQL: &str = r#"
SELECT
    p.id::text AS id,
    p.idea_id::text AS idea_id,
    p.startup_name,
    p.tagline,
    p.pitch,
    p.problem,
    p.solution,
    p.target_audience,
    p.landing_copy,
    p.color_palette,
    p.logo_concept,
    p.language,
    p.created_at::timestamptz AS created_at,
    i.id::text AS idea_row_id,
    i.idea_name,
    i.description AS idea_description,
    i.industry AS idea_industry,
    i.tone AS idea_tone,
    i.language AS idea_language
FROM pitches p
LEFT JOIN ideas i ON i.id = p.idea_id
WHERE p.id::text = $1
LIMIT 1
"#;

/// Flat row produced by [`FIND_PITCH_SQL`].
#[derive(Debug, sqlx::FromRow)]
struct PitchRow {
    id: String,
    idea_id: Option<String>,
    startup_name: Option<String>,
    tagline: Option<String>,
    pitch: Option<String>,
    problem: Option<String>,
    solution: Option<String>,
    target_audience: Option<String>,
    landing_copy: Option<String>,
    color_palette: Option<String>,
    logo_concept: Option<String>,
    language: Option<String>,
    created_at: Option<DateTime<Utc>>,
    idea_row_id: Option<String>,
    idea_name: Option<String>,
    idea_description: Option<String>,
    idea_industry: Option<String>,
    idea_tone: Option<String>,
    idea_language: Option<String>,
}

impl From<PitchRow> for PitchRecord {
    fn from(row: PitchRow) -> Self {
        // A left join yields NULL for every idea column when there is no related row; the idea
        // primary key is the only reliable presence marker.
        let idea = row.idea_row_id.map(|_| Idea {
            idea_name: row.idea_name.unwrap_or_default(),
            description: row.idea_description.unwrap_or_default(),
            industry: row.idea_industry.unwrap_or_default(),
            tone: row.idea_tone.map(Tone::from).unwrap_or_default(),
            language: row.idea_language.unwrap_or_default(),
        });

        PitchRecord {
            pitch: Pitch {
                id: row.id,
                idea_id: row.idea_id,
                startup_name: row.startup_name,
                tagline: row.tagline,
                pitch: row.pitch,
                problem: row.problem,
                solution: row.solution,
                target_audience: row.target_audience,
                landing_copy: row.landing_copy,
                color_palette: row.color_palette,
                logo_concept: row.logo_concept,
                language: row.language,
                created_at: row.created_at,
            },
            idea,
        }
    }
}

/// Postgres-backed store.
#[derive(Clone, Debug)]
pub struct PgPitchStore {
    pool: PgPool,
}

impl PgPitchStore {
    /// Opens a connection pool against the configured database.
    ///
    /// # Errors
    ///
    /// Returns `PitchError::Store` if the database cannot be reached.
    pub async fn connect(cfg: &CoreConfig) -> PitchResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(cfg.db_max_connections())
            .connect(cfg.database_url())
            .await?;

        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PitchStore for PgPitchStore {
    async fn find_pitch(&self, id: &PitchId) -> PitchResult<Option<PitchRecord>> {
        let row = sqlx::query_as::<_, PitchRow>(FIND_PITCH_SQL)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(PitchRecord::from))
    }
}

/// Store holding a fixed set of records in memory.
///
/// Used by tests and by offline tooling that already has the records at hand.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPitchStore {
    records: HashMap<String, PitchRecord>,
}

impl InMemoryPitchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, keyed by its pitch identifier.
    pub fn with_record(mut self, record: PitchRecord) -> Self {
        self.records.insert(record.pitch.id.clone(), record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<PitchRecord> for InMemoryPitchStore {
    fn from_iter<I: IntoIterator<Item = PitchRecord>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |store, record| store.with_record(record))
    }
}

#[async_trait::async_trait]
impl PitchStore for InMemoryPitchStore {
    async fn find_pitch(&self, id: &PitchId) -> PitchResult<Option<PitchRecord>> {
        Ok(self.records.get(id.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(idea_row_id: Option<&str>) -> PitchRow {
        PitchRow {
            id: "abc123".into(),
            idea_id: idea_row_id.map(Into::into),
            startup_name: Some("Nova".into()),
            tagline: None,
            pitch: Some("We build rockets".into()),
            problem: None,
            solution: None,
            target_audience: None,
            landing_copy: None,
            color_palette: None,
            logo_concept: None,
            language: Some("en".into()),
            created_at: None,
            idea_row_id: idea_row_id.map(Into::into),
            idea_name: idea_row_id.map(|_| "Orbital".into()),
            idea_description: idea_row_id.map(|_| "Cheap launches".into()),
            idea_industry: None,
            idea_tone: idea_row_id.map(|_| "casual".into()),
            idea_language: idea_row_id.map(|_| "ur".into()),
        }
    }

    #[test]
    fn row_without_joined_idea_has_no_idea() {
        let record = PitchRecord::from(row(None));
        assert!(record.idea.is_none());
        assert_eq!(record.pitch.startup_name.as_deref(), Some("Nova"));
    }

    #[test]
    fn row_with_joined_idea_maps_idea_columns() {
        let record = PitchRecord::from(row(Some("idea-1")));
        let idea = record.idea.expect("joined idea");
        assert_eq!(idea.idea_name, "Orbital");
        assert_eq!(idea.industry, "");
        assert_eq!(idea.tone, Tone::Casual);
        assert_eq!(idea.language, "ur");
        assert_eq!(record.pitch.idea_id.as_deref(), Some("idea-1"));
    }

    #[tokio::test]
    async fn in_memory_store_finds_by_identifier() {
        let store: InMemoryPitchStore = [PitchRecord::from(row(None))].into_iter().collect();
        assert_eq!(store.len(), 1);

        let found = store
            .find_pitch(&PitchId::new("abc123").unwrap())
            .await
            .unwrap();
        assert!(found.is_some());

        let missing = store
            .find_pitch(&PitchId::new("nope").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    /// Runs the lookup query against temporary `ideas`/`pitches` tables.
    ///
    /// Needs a reachable Postgres in `PITCH_TEST_DATABASE_URL`; does nothing without it.
    #[tokio::test]
    async fn postgres_lookup_left_joins_idea() {
        let Ok(url) = std::env::var("PITCH_TEST_DATABASE_URL") else {
            return;
        };
        // Temporary tables live on one connection only.
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .unwrap();

        for statement in [
            "CREATE TEMP TABLE ideas (
                id uuid PRIMARY KEY,
                idea_name text,
                description text,
                industry text,
                tone text,
                language text
            )",
            "CREATE TEMP TABLE pitches (
                id uuid PRIMARY KEY,
                idea_id uuid,
                startup_name text,
                tagline text,
                pitch text,
                problem text,
                solution text,
                target_audience text,
                landing_copy text,
                color_palette text,
                logo_concept text,
                language text,
                created_at timestamp DEFAULT now()
            )",
            "INSERT INTO ideas VALUES
                ('00000000-0000-0000-0000-000000000001', 'Orbital', 'Cheap launches', NULL,
                 'casual', 'ur')",
            "INSERT INTO pitches (id, idea_id, startup_name, pitch, language) VALUES
                ('00000000-0000-0000-0000-0000000000a1', '00000000-0000-0000-0000-000000000001',
                 'Nova', 'We build rockets', 'en'),
                ('00000000-0000-0000-0000-0000000000a2', NULL, 'Solo', NULL, 'en')",
        ] {
            sqlx::query(statement).execute(&pool).await.unwrap();
        }

        let store = PgPitchStore::from_pool(pool);
        let find = |id: &str| {
            let id = PitchId::new(id).unwrap();
            let store = store.clone();
            async move { store.find_pitch(&id).await.unwrap() }
        };

        let joined = find("00000000-0000-0000-0000-0000000000a1")
            .await
            .expect("pitch with idea");
        assert!(joined.pitch.created_at.is_some());
        assert_eq!(
            joined.pitch.idea_id.as_deref(),
            Some("00000000-0000-0000-0000-000000000001")
        );
        let idea = joined.idea.expect("joined idea");
        assert_eq!(idea.idea_name, "Orbital");
        assert_eq!(idea.industry, "");
        assert_eq!(idea.tone, Tone::Casual);

        let alone = find("00000000-0000-0000-0000-0000000000a2")
            .await
            .expect("pitch without idea");
        assert!(alone.idea.is_none());
        assert!(alone.pitch.pitch.is_none());

        assert!(find("   ").await.is_none());
    }
}
