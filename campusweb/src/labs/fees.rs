//! Exam fee registry lab.
//!
//! Stores fee payments with a derived paid flag, lists the unpaid
//! students, and bulk-deletes them. Namespace: `examdb` / `students`.
//!
use axum::{Router, extract::Query, response::Html, routing::get};
use campusdb::{Client, Filter, doc};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::error::ServerError;
use crate::html::{self, BACK_LINK};
use crate::labs::{required, required_f64, required_i64};

const DB: &str = "examdb";
const COLLECTION: &str = "students";

/// Routes for the fees lab
pub fn router() -> Router {
    Router::new()
        .route("/", get(form))
        .route("/insert", get(insert))
        .route("/unpaid", get(unpaid))
        .route("/delete-unpaid", get(delete_unpaid))
}

/// The unpaid predicate: a zero fee, a record predating the fee field,
/// or an explicit unpaid flag
fn unpaid_filter() -> Filter {
    Filter::Or(vec![
        Filter::eq("exam_fee", 0),
        Filter::missing("exam_fee"),
        Filter::eq("has_paid_fee", false),
    ])
}

#[derive(Deserialize)]
struct InsertParams {
    name: Option<String>,
    usn: Option<String>,
    semester: Option<String>,
    exam_fee: Option<String>,
}

/// Display the entry form
async fn form() -> Html<String> {
    Html(html::form_page(
        "Exam Fee Registry",
        "/fees/insert",
        &[
            ("Name", "name"),
            ("USN", "usn"),
            ("Semester", "semester"),
            ("Exam fee", "exam_fee"),
        ],
    ))
}

/// Insert one fee record with the derived paid flag
async fn insert(Query(params): Query<InsertParams>) -> Result<Html<String>, ServerError> {
    let (Some(name), Some(usn), Some(semester), Some(exam_fee)) = (
        required(&params.name),
        required(&params.usn),
        required_i64(&params.semester),
        required_f64(&params.exam_fee),
    ) else {
        return Ok(Html("Invalid input".into()));
    };

    let client = Client::connect(&CONFIG.db_addr).await?;
    let outcome = client
        .database(DB)
        .collection(COLLECTION)
        .insert_one(doc! {
            "name": name,
            "usn": usn,
            "semester": semester,
            "exam_fee": exam_fee,
            "has_paid_fee": exam_fee > 0.0,
        })
        .await;
    client.close().await;
    outcome?;

    Ok(Html(format!(
        "Student {} registered successfully!{BACK_LINK}",
        html::escape(name)
    )))
}

/// List of students who have not paid
async fn unpaid() -> Result<Html<String>, ServerError> {
    let client = Client::connect(&CONFIG.db_addr).await?;
    let found = client
        .database(DB)
        .collection(COLLECTION)
        .find(&unpaid_filter())
        .await;
    client.close().await;
    let students = found?;

    let items = students
        .iter()
        .map(|student| {
            let fee = student.get_f64("exam_fee").unwrap_or(0.0);
            format!(
                "Name: {}, USN: {}, Semester: {}, Fee: {}",
                html::escape(&html::value_text(student.get("name"))),
                html::escape(&html::value_text(student.get("usn"))),
                html::value_text(student.get("semester")),
                fee,
            )
        })
        .collect();

    let mut page = html::list_or_empty(
        "Students Who Haven't Paid Exam Fees",
        items,
        "No unpaid students found.",
        None,
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}

/// Bulk delete of the unpaid students, reporting the count removed
async fn delete_unpaid() -> Result<Html<String>, ServerError> {
    let client = Client::connect(&CONFIG.db_addr).await?;
    let deleted = client
        .database(DB)
        .collection(COLLECTION)
        .delete_many(&unpaid_filter())
        .await;
    client.close().await;
    let count = deleted?;

    Ok(Html(format!(
        "{count} students who haven't paid fees have been deleted.{BACK_LINK}"
    )))
}
