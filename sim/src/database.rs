// ═══════════════════════════════════════════════════════════════════════
// Database — SQLite storage for run results and difficulty summaries
// ═══════════════════════════════════════════════════════════════════════

use rusqlite::{params, Connection};

use crate::runner::RunResult;

pub struct Database {
    conn: Connection,
}

/// Aggregates for one difficulty row of the report.
#[derive(Debug, Clone)]
pub struct DifficultySummary {
    pub difficulty: String,
    pub runs: u32,
    pub completed: u32,
    pub avg_rounds: f64,
    pub avg_attacks: f64,
}

impl Database {
    /// Open (or create) a database at the given path.
    pub fn new(path: &str) -> Self {
        let conn = Connection::open(path).expect("Failed to open database");
        let db = Database { conn };
        db.create_schema();
        db
    }

    /// In-memory database (useful for tests).
    pub fn in_memory() -> Self {
        let conn = Connection::open_in_memory().expect("Failed to open in-memory database");
        let db = Database { conn };
        db.create_schema();
        db
    }

    fn create_schema(&self) {
        self.conn
            .execute_batch(
                "
            CREATE TABLE IF NOT EXISTS runs (
                id              INTEGER PRIMARY KEY,
                seed            INTEGER NOT NULL,
                difficulty      TEXT NOT NULL,
                agent           TEXT NOT NULL,
                completed       INTEGER NOT NULL,
                rounds          INTEGER NOT NULL,
                attacks_left    INTEGER NOT NULL,
                attacks_middle  INTEGER NOT NULL,
                attacks_right   INTEGER NOT NULL,
                renown          INTEGER NOT NULL,
                piety           INTEGER NOT NULL,
                valour          INTEGER NOT NULL,
                discipline      INTEGER NOT NULL,
                played_at       TEXT NOT NULL DEFAULT (datetime('now'))
            );
        ",
            )
            .expect("Failed to create schema");
    }

    /// Store one finished run.
    pub fn store_run(&self, result: &RunResult) -> i64 {
        self.conn
            .execute(
                "INSERT INTO runs (seed, difficulty, agent, completed, rounds,
                                   attacks_left, attacks_middle, attacks_right,
                                   renown, piety, valour, discipline)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    result.seed as i64,
                    result.difficulty.to_string(),
                    result.agent_name,
                    result.completed as i64,
                    result.rounds_completed as i64,
                    result.attacks_left as i64,
                    result.attacks_middle as i64,
                    result.attacks_right as i64,
                    result.final_renown as i64,
                    result.final_piety as i64,
                    result.final_valour as i64,
                    result.final_discipline as i64,
                ],
            )
            .expect("Failed to store run");
        self.conn.last_insert_rowid()
    }

    /// Per-difficulty aggregates over every stored run.
    pub fn summary(&self) -> Vec<DifficultySummary> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT difficulty,
                        COUNT(*),
                        SUM(completed),
                        AVG(rounds),
                        AVG(attacks_left + attacks_middle + attacks_right)
                 FROM runs
                 GROUP BY difficulty
                 ORDER BY difficulty",
            )
            .expect("Failed to prepare summary query");

        stmt.query_map([], |row| {
            Ok(DifficultySummary {
                difficulty: row.get::<_, String>(0)?,
                runs: row.get::<_, u32>(1)?,
                completed: row.get::<_, u32>(2)?,
                avg_rounds: row.get::<_, f64>(3)?,
                avg_attacks: row.get::<_, f64>(4)?,
            })
        })
        .expect("Failed to query summary")
        .filter_map(|r| r.ok())
        .collect()
    }

    /// Total number of runs stored.
    pub fn run_count(&self) -> u32 {
        self.conn
            .query_row("SELECT COUNT(*) FROM runs", [], |row| row.get(0))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vallum_engine::types::Difficulty;

    fn sample_result(seed: u64, completed: bool) -> RunResult {
        RunResult {
            seed,
            difficulty: Difficulty::Medium,
            agent_name: "Random".into(),
            completed,
            rounds_completed: if completed { 6 } else { 3 },
            attacks_left: 10,
            attacks_middle: 12,
            attacks_right: 9,
            final_renown: 2,
            final_piety: 0,
            final_valour: 1,
            final_discipline: 0,
        }
    }

    #[test]
    fn test_store_and_count() {
        let db = Database::in_memory();
        assert_eq!(db.run_count(), 0);

        db.store_run(&sample_result(1, true));
        db.store_run(&sample_result(2, false));
        assert_eq!(db.run_count(), 2);
    }

    #[test]
    fn test_summary_aggregates_by_difficulty() {
        let db = Database::in_memory();
        db.store_run(&sample_result(1, true));
        db.store_run(&sample_result(2, true));
        db.store_run(&sample_result(3, false));

        let summary = db.summary();
        assert_eq!(summary.len(), 1);
        let row = &summary[0];
        assert_eq!(row.difficulty, "medium");
        assert_eq!(row.runs, 3);
        assert_eq!(row.completed, 2);
        assert!((row.avg_rounds - 5.0).abs() < 1e-9);
        assert!((row.avg_attacks - 31.0).abs() < 1e-9);
    }
}
