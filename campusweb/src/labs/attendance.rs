//! Attendance registry lab.
//!
//! Stores per-student class counts with a derived attendance percentage
//! and reports the students below 75%. Namespace: `attendancedb` /
//! `students`.
//!
use axum::{Router, extract::Query, response::Html, routing::get};
use campusdb::{Client, Filter, doc};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::error::ServerError;
use crate::html::{self, BACK_LINK, Cell};
use crate::labs::{required, required_i64};

const DB: &str = "attendancedb";
const COLLECTION: &str = "students";

/// Routes for the attendance lab
pub fn router() -> Router {
    Router::new()
        .route("/", get(form))
        .route("/insert", get(insert))
        .route("/low-attendance", get(low_attendance))
        .route("/all-students", get(all_students))
}

#[derive(Deserialize)]
struct InsertParams {
    name: Option<String>,
    usn: Option<String>,
    branch: Option<String>,
    total_classes: Option<String>,
    attended_classes: Option<String>,
}

/// Display the entry form
async fn form() -> Html<String> {
    Html(html::form_page(
        "Attendance Registry",
        "/attendance/insert",
        &[
            ("Name", "name"),
            ("USN", "usn"),
            ("Branch", "branch"),
            ("Total classes", "total_classes"),
            ("Attended classes", "attended_classes"),
        ],
    ))
}

/// Insert one attendance record with its derived percentage
async fn insert(Query(params): Query<InsertParams>) -> Result<Html<String>, ServerError> {
    let (Some(name), Some(usn), Some(branch)) = (
        required(&params.name),
        required(&params.usn),
        required(&params.branch),
    ) else {
        return Ok(Html(
            "All fields are required and class counts must be valid numbers".into(),
        ));
    };
    let (Some(total), Some(attended)) = (
        required_i64(&params.total_classes),
        required_i64(&params.attended_classes),
    ) else {
        return Ok(Html(
            "All fields are required and class counts must be valid numbers".into(),
        ));
    };
    if total < 1 {
        return Ok(Html("Total classes must be at least 1".into()));
    }
    if attended < 0 || attended > total {
        return Ok(Html("Attended classes cannot exceed total classes".into()));
    }

    // two-decimal rounding, as the report pages expect
    let percentage = ((attended as f64 / total as f64) * 100.0 * 100.0).round() / 100.0;

    let client = Client::connect(&CONFIG.db_addr).await?;
    let outcome = client
        .database(DB)
        .collection(COLLECTION)
        .insert_one(doc! {
            "name": name,
            "usn": usn,
            "branch": branch,
            "total_classes": total,
            "attended_classes": attended,
            "attendance_percentage": percentage,
        })
        .await;
    client.close().await;
    outcome?;

    Ok(Html(format!(
        "Student {} added successfully with {percentage:.2}% attendance!{BACK_LINK}",
        html::escape(name)
    )))
}

/// List of students whose percentage is below 75
async fn low_attendance() -> Result<Html<String>, ServerError> {
    let client = Client::connect(&CONFIG.db_addr).await?;
    let found = client
        .database(DB)
        .collection(COLLECTION)
        .find(&Filter::lt("attendance_percentage", 75))
        .await;
    client.close().await;
    let students = found?;

    let items = students
        .iter()
        .map(|student| {
            format!(
                "Name: {} | USN: {} | Branch: {} | Total Classes: {} | Class Attended: {}",
                html::escape(&html::value_text(student.get("name"))),
                html::escape(&html::value_text(student.get("usn"))),
                html::escape(&html::value_text(student.get("branch"))),
                html::value_text(student.get("total_classes")),
                html::value_text(student.get("attended_classes")),
            )
        })
        .collect();

    let mut page = html::list_or_empty(
        "Students with Attendance Below 75%",
        items,
        "No students found with attendance below 75%.",
        None,
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}

/// Table of every student with the percentage cell colored by band
async fn all_students() -> Result<Html<String>, ServerError> {
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
            let percentage = student.get_f64("attendance_percentage").unwrap_or(0.0);
            vec![
                Cell::plain(html::value_text(student.get("name"))),
                Cell::plain(html::value_text(student.get("usn"))),
                Cell::plain(html::value_text(student.get("branch"))),
                Cell::plain(html::value_text(student.get("total_classes"))),
                Cell::plain(html::value_text(student.get("attended_classes"))),
                Cell::highlighted(format!("{percentage:.2}%"), html::attendance_color(percentage)),
            ]
        })
        .collect();

    let mut page = html::table_or_empty(
        "All Students Attendance",
        &["Name", "USN", "Branch", "Total Classes", "Attended", "Percentage"],
        rows,
        "No students found.",
        Some("Total students"),
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusdb::{Client, Filter};

    fn params(
        name: &str,
        usn: &str,
        branch: &str,
        total: &str,
        attended: &str,
    ) -> InsertParams {
        let field = |v: &str| (!v.is_empty()).then(|| v.to_string());
        InsertParams {
            name: field(name),
            usn: field(usn),
            branch: field(branch),
            total_classes: field(total),
            attended_classes: field(attended),
        }
    }

    /// Derived percentage formula, cross-field rejection, and the <75
    /// threshold in one pass
    #[tokio::test]
    async fn attendance_lab_round_trip() {
        // attended > total is rejected before anything persists
        let page = insert(Query(params("Mira", "201", "CSE", "40", "45"))).await.unwrap();
        assert!(page.0.contains("cannot exceed total classes"));
        let page = insert(Query(params("Mira", "201", "CSE", "0", "0"))).await.unwrap();
        assert!(page.0.contains("at least 1"));

        let client = Client::connect(&CONFIG.db_addr).await.unwrap();
        let collection = client.database(DB).collection(COLLECTION);
        assert_eq!(collection.find(&Filter::All).await.unwrap().len(), 0);
        client.close().await;

        // percentage = round(attended / total * 100, 2): 2/3 of classes
        let page = insert(Query(params("Mira", "201", "CSE", "3", "2"))).await.unwrap();
        assert!(page.0.contains("66.67% attendance"));
        insert(Query(params("Dev", "202", "ECE", "40", "36"))).await.unwrap();

        let client = Client::connect(&CONFIG.db_addr).await.unwrap();
        let all = client
            .database(DB)
            .collection(COLLECTION)
            .find(&Filter::All)
            .await
            .unwrap();
        client.close().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].get_f64("attendance_percentage"), Some(66.67));
        assert_eq!(all[1].get_f64("attendance_percentage"), Some(90.0));

        // Mira (66.67) is below the bar, Dev (90) is not
        let page = low_attendance().await.unwrap();
        assert!(page.0.contains("Mira"));
        assert!(!page.0.contains("Dev"));

        let page = all_students().await.unwrap();
        assert!(page.0.contains("66.67%"));
        assert!(page.0.contains("#FFE4B5"));
        assert!(page.0.contains("#90EE90"));
        assert!(page.0.contains("Total students: 2"));
    }
}
