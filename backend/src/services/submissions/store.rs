//! SQLite persistence for submissions.
//!
//! One connection is opened per call; the `submissions` table is created on demand.

use common::model::SubmissionRecord;
use rusqlite::{params, Connection};
use serde::Serialize;
use std::path::Path;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS submissions (
    id TEXT PRIMARY KEY,
    form_name TEXT NOT NULL,
    payload TEXT NOT NULL,
    received_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
)";

/// A submission as stored, returned by the listing endpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StoredSubmission {
    pub id: String,
    pub form_name: String,
    pub payload: SubmissionRecord,
    pub received_at: String,
}

fn open(database_path: &Path) -> Result<Connection, String> {
    let conn = Connection::open(database_path).map_err(|e| e.to_string())?;
    conn.execute(CREATE_TABLE, []).map_err(|e| e.to_string())?;
    Ok(conn)
}

/// Stores `record` under `form_name` and returns the generated submission id.
pub fn insert_submission(
    database_path: &Path,
    form_name: &str,
    record: &SubmissionRecord,
) -> Result<String, String> {
    let conn = open(database_path)?;
    let payload = serde_json::to_string(record).map_err(|e| e.to_string())?;
    let id = uuid::Uuid::new_v4().to_string();

    conn.execute(
        "INSERT INTO submissions (id, form_name, payload) VALUES (?1, ?2, ?3)",
        params![&id, form_name, &payload],
    )
    .map_err(|e| e.to_string())?;

    Ok(id)
}

/// All submissions of `form_name`, in insertion order.
pub fn list_submissions(database_path: &Path, form_name: &str) -> Result<Vec<StoredSubmission>, String> {
    let conn = open(database_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT id, form_name, payload, received_at FROM submissions
             WHERE form_name = ?1 ORDER BY rowid",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map(params![form_name], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })
        .map_err(|e| e.to_string())?;

    let mut submissions = Vec::new();
    for row in rows {
        let (id, form_name, payload, received_at) = row.map_err(|e| e.to_string())?;
        let payload = serde_json::from_str(&payload).map_err(|e| e.to_string())?;
        submissions.push(StoredSubmission {
            id,
            form_name,
            payload,
            received_at,
        });
    }
    Ok(submissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::ControlValue;
    use tempfile::TempDir;

    fn record(pairs: &[(&str, ControlValue)]) -> SubmissionRecord {
        SubmissionRecord {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    #[test]
    fn stores_and_lists_per_form() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("s.sqlite");

        let first = record(&[("email", ControlValue::Text("a@b.c".into()))]);
        let second = record(&[("agree", ControlValue::Checked(true))]);
        let other = record(&[("x", ControlValue::Selected(vec!["1".into()]))]);

        let first_id = insert_submission(&db, "contact", &first).unwrap();
        insert_submission(&db, "contact", &second).unwrap();
        insert_submission(&db, "survey", &other).unwrap();

        let stored = list_submissions(&db, "contact").unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, first_id);
        assert_eq!(stored[0].payload, first);
        assert_eq!(stored[1].payload, second);
        assert!(stored.iter().all(|s| s.form_name == "contact"));
        assert!(!stored[0].received_at.is_empty());
    }

    #[test]
    fn empty_database_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let stored = list_submissions(&dir.path().join("fresh.sqlite"), "contact").unwrap();
        assert!(stored.is_empty());
    }
}
