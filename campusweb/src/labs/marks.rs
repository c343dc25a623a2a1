//! Exam marks lab.
//!
//! Records per-subject marks and reports the low scorers and the full
//! grade sheet. Namespace: `exammarksdb` / `student_marks`.
//!
use axum::{Router, extract::Query, response::Html, routing::get};
use campusdb::{Client, Filter, doc};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::error::ServerError;
use crate::html::{self, BACK_LINK, Cell};
use crate::labs::{required, required_i64};

const DB: &str = "exammarksdb";
const COLLECTION: &str = "student_marks";

/// Routes for the marks lab
pub fn router() -> Router {
    Router::new()
        .route("/", get(form))
        .route("/insert", get(insert))
        .route("/low-marks", get(low_marks))
        .route("/all-marks", get(all_marks))
}

#[derive(Deserialize)]
struct InsertParams {
    name: Option<String>,
    usn: Option<String>,
    subject: Option<String>,
    marks: Option<String>,
}

/// Display the entry form
async fn form() -> Html<String> {
    Html(html::form_page(
        "Exam Marks",
        "/marks/insert",
        &[
            ("Name", "name"),
            ("USN", "usn"),
            ("Subject", "subject"),
            ("Marks", "marks"),
        ],
    ))
}

/// Insert one marks record after validating the input
async fn insert(Query(params): Query<InsertParams>) -> Result<Html<String>, ServerError> {
    let (Some(name), Some(usn), Some(subject)) = (
        required(&params.name),
        required(&params.usn),
        required(&params.subject),
    ) else {
        return Ok(Html(
            "All fields are required and marks must be a valid number".into(),
        ));
    };
    let Some(marks) = required_i64(&params.marks) else {
        return Ok(Html(
            "All fields are required and marks must be a valid number".into(),
        ));
    };
    if !(0..=100).contains(&marks) {
        return Ok(Html("Marks must be between 0 and 100".into()));
    }

    let client = Client::connect(&CONFIG.db_addr).await?;
    let outcome = client
        .database(DB)
        .collection(COLLECTION)
        .insert_one(doc! { "name": name, "usn": usn, "subject": subject, "marks": marks })
        .await;
    client.close().await;
    outcome?;

    Ok(Html(format!(
        "Student {} marks ({marks}) for {} added successfully!{BACK_LINK}",
        html::escape(name),
        html::escape(subject)
    )))
}

/// Table of students with marks below 20, with a status column
async fn low_marks() -> Result<Html<String>, ServerError> {
    let client = Client::connect(&CONFIG.db_addr).await?;
    let found = client
        .database(DB)
        .collection(COLLECTION)
        .find(&Filter::lt("marks", 20))
        .await;
    client.close().await;
    let students = found?;

    let rows = students
        .iter()
        .map(|student| {
            let marks = student.get_i64("marks").unwrap_or(0);
            let (status, color) = html::low_marks_status(marks);
            vec![
                Cell::plain(html::value_text(student.get("name"))),
                Cell::plain(html::value_text(student.get("usn"))),
                Cell::plain(html::value_text(student.get("subject"))),
                Cell::highlighted(marks.to_string(), color),
                Cell::highlighted(status, color),
            ]
        })
        .collect();

    let mut page = html::table_or_empty(
        "Students with Marks Less Than 20",
        &["Name", "USN", "Subject", "Marks", "Status"],
        rows,
        "No students found with marks less than 20.",
        Some("Total students with marks < 20"),
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}

/// Full grade sheet with a letter grade per row
async fn all_marks() -> Result<Html<String>, ServerError> {
    let client = Client::connect(&CONFIG.db_addr).await?;
    let found = client
        .database(DB)
        .collection(COLLECTION)
        .find(&Filter::All)
        .await;
    client.close().await;
    let students = found?;

    let rows = students
        .iter()
        .map(|student| {
            let marks = student.get_i64("marks").unwrap_or(0);
            let (grade, color) = html::marks_grade(marks);
            vec![
                Cell::plain(html::value_text(student.get("name"))),
                Cell::plain(html::value_text(student.get("usn"))),
                Cell::plain(html::value_text(student.get("subject"))),
                Cell::highlighted(marks.to_string(), color),
                Cell::highlighted(grade, color),
            ]
        })
        .collect();

    let mut page = html::table_or_empty(
        "All Student Marks",
        &["Name", "USN", "Subject", "Marks", "Grade"],
        rows,
        "No student marks found.",
        Some("Total student records"),
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusdb::{Client, Filter};

    fn params(name: &str, usn: &str, subject: &str, marks: &str) -> InsertParams {
        let field = |v: &str| (!v.is_empty()).then(|| v.to_string());
        InsertParams {
            name: field(name),
            usn: field(usn),
            subject: field(subject),
            marks: field(marks),
        }
    }

    /// The whole lab in one pass: invalid inserts persist nothing, then
    /// Alice (15) lands in the low-marks report while Bob (25) stays out,
    /// and the grade sheet letters both of them.
    #[tokio::test]
    async fn marks_lab_round_trip() {
        // rejected inputs, nothing persisted
        let page = insert(Query(params("Alice", "101", "DB", "abc"))).await.unwrap();
        assert!(page.0.contains("valid number"));
        let page = insert(Query(params("", "101", "DB", "15"))).await.unwrap();
        assert!(page.0.contains("All fields are required"));
        let page = insert(Query(params("Alice", "101", "DB", "120"))).await.unwrap();
        assert!(page.0.contains("between 0 and 100"));

        let client = Client::connect(&CONFIG.db_addr).await.unwrap();
        let collection = client.database(DB).collection(COLLECTION);
        assert_eq!(collection.find(&Filter::All).await.unwrap().len(), 0);
        client.close().await;

        // empty report branch
        let page = low_marks().await.unwrap();
        assert!(page.0.contains("No students found with marks less than 20."));
        assert!(!page.0.contains("<table"));

        // valid inserts round-trip
        let page = insert(Query(params("Alice", "101", "DB", "15"))).await.unwrap();
        assert!(page.0.contains("Alice"));
        assert!(page.0.contains("Go Back"));
        insert(Query(params("Bob", "102", "OS", "25"))).await.unwrap();

        let client = Client::connect(&CONFIG.db_addr).await.unwrap();
        let all = client
            .database(DB)
            .collection(COLLECTION)
            .find(&Filter::All)
            .await
            .unwrap();
        client.close().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].get_str("name"), Some("Alice"));
        assert_eq!(all[0].get_i64("marks"), Some(15));

        // the low-marks predicate includes Alice and excludes Bob
        let page = low_marks().await.unwrap();
        assert!(page.0.contains("Alice"));
        assert!(!page.0.contains("Bob"));
        assert!(page.0.contains("Needs Improvement"));
        assert!(page.0.contains("Total students with marks < 20: 1"));

        // the grade sheet letters every record
        let page = all_marks().await.unwrap();
        assert!(page.0.contains("Bob"));
        assert!(page.0.contains(">F<"));
        assert!(page.0.contains("Total student records: 2"));
    }
}
