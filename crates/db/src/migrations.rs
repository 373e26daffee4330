// crates/db/src/migrations.rs
// Inline schema migrations, applied in order and tracked in `_migrations`.
//
// Session dates are stored as TEXT `YYYY-MM-DD`, timestamps as ISO-8601
// TEXT; both compare correctly as strings, so range predicates stay plain.

pub const MIGRATIONS: &[&str] = &[
    // 1: sessions
    r#"CREATE TABLE IF NOT EXISTS sessions (
        id TEXT PRIMARY KEY,
        date TEXT NOT NULL,
        intensity TEXT NOT NULL,
        performance TEXT NOT NULL,
        productivity TEXT NOT NULL,
        duration_minutes INTEGER,
        notes TEXT,
        max_grade TEXT,
        hard_attempts INTEGER,
        venue TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )"#,
    // 2: session type tags, one row per tag
    r#"CREATE TABLE IF NOT EXISTS session_types (
        session_id TEXT NOT NULL,
        type TEXT NOT NULL,
        PRIMARY KEY (session_id, type)
    )"#,
    // 3: injuries owned by a session
    r#"CREATE TABLE IF NOT EXISTS session_injuries (
        id TEXT PRIMARY KEY,
        session_id TEXT NOT NULL,
        location TEXT NOT NULL,
        note TEXT,
        severity INTEGER
    )"#,
    // 4: coaching insights
    r#"CREATE TABLE IF NOT EXISTS coach_insights (
        id TEXT PRIMARY KEY,
        content TEXT NOT NULL,
        pinned INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )"#,
    // 5-7: indexes for date-windowed analytics and owned-row lookups
    "CREATE INDEX IF NOT EXISTS idx_sessions_date ON sessions(date)",
    "CREATE INDEX IF NOT EXISTS idx_session_types_session ON session_types(session_id)",
    "CREATE INDEX IF NOT EXISTS idx_session_injuries_session ON session_injuries(session_id)",
];
