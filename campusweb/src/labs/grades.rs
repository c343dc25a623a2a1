//! Grade book lab.
//!
//! Stores student grades, updates a grade by student name, and displays
//! the book. Namespace: `studentdb` / `students`.
//!
use axum::{Router, extract::Query, response::Html, routing::get};
use campusdb::{Client, Filter, doc};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::error::ServerError;
use crate::html::{self, BACK_LINK, Cell};
use crate::labs::required;

const DB: &str = "studentdb";
const COLLECTION: &str = "students";

/// Routes for the grades lab
pub fn router() -> Router {
    Router::new()
        .route("/", get(form))
        .route("/insert", get(insert))
        .route("/update-grade", get(update_grade))
        .route("/display", get(display))
}

#[derive(Deserialize)]
struct InsertParams {
    name: Option<String>,
    usn: Option<String>,
    dept: Option<String>,
    grade: Option<String>,
}

#[derive(Deserialize)]
struct UpdateParams {
    name: Option<String>,
    grade: Option<String>,
}

/// Display the entry form
async fn form() -> Html<String> {
    Html(html::form_page(
        "Grade Book",
        "/grades/insert",
        &[
            ("Name", "name"),
            ("USN", "usn"),
            ("Department", "dept"),
            ("Grade", "grade"),
        ],
    ))
}

/// Insert one grade record
async fn insert(Query(params): Query<InsertParams>) -> Result<Html<String>, ServerError> {
    let (Some(name), Some(usn), Some(dept), Some(grade)) = (
        required(&params.name),
        required(&params.usn),
        required(&params.dept),
        required(&params.grade),
    ) else {
        return Ok(Html("All fields are required".into()));
    };

    let client = Client::connect(&CONFIG.db_addr).await?;
    let outcome = client
        .database(DB)
        .collection(COLLECTION)
        .insert_one(doc! { "name": name, "usn": usn, "dept": dept, "grade": grade })
        .await;
    client.close().await;
    outcome?;

    Ok(Html(format!(
        "Student {} added successfully!{BACK_LINK}",
        html::escape(name)
    )))
}

/// Set a new grade on the first record matching the name.
///
/// A miss is reported as "no such record" and changes nothing.
async fn update_grade(Query(params): Query<UpdateParams>) -> Result<Html<String>, ServerError> {
    let (Some(name), Some(grade)) = (required(&params.name), required(&params.grade)) else {
        return Ok(Html("Name and grade are required".into()));
    };

    let client = Client::connect(&CONFIG.db_addr).await?;
    let updated = client
        .database(DB)
        .collection(COLLECTION)
        .update_one(&Filter::eq("name", name), "grade", grade)
        .await;
    client.close().await;
    let matched = updated?;

    if matched {
        Ok(Html(format!(
            "Grade updated successfully for {}! New grade: {}{BACK_LINK}",
            html::escape(name),
            html::escape(grade)
        )))
    } else {
        Ok(Html(format!(
            "No student found with name: {}{BACK_LINK}",
            html::escape(name)
        )))
    }
}

/// Table of the whole grade book
async fn display() -> Result<Html<String>, ServerError> {
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
            vec![
                Cell::plain(html::value_text(student.get("name"))),
                Cell::plain(html::value_text(student.get("usn"))),
                Cell::plain(html::value_text(student.get("dept"))),
                Cell::plain(html::value_text(student.get("grade"))),
            ]
        })
        .collect();

    let mut page = html::table_or_empty(
        "All Students",
        &["Name", "USN", "Department", "Grade"],
        rows,
        "No students found.",
        None,
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusdb::{Client, Filter};

    /// Updating a missing name reports the miss; updating a present one
    /// rewrites its grade
    #[tokio::test]
    async fn grades_lab_round_trip() {
        // miss on an empty collection, nothing changes
        let page = update_grade(Query(UpdateParams {
            name: Some("Zed".into()),
            grade: Some("A".into()),
        }))
        .await
        .unwrap();
        assert!(page.0.contains("No student found with name: Zed"));

        let client = Client::connect(&CONFIG.db_addr).await.unwrap();
        let collection = client.database(DB).collection(COLLECTION);
        assert_eq!(collection.find(&Filter::All).await.unwrap().len(), 0);
        client.close().await;

        insert(Query(InsertParams {
            name: Some("Pooja".into()),
            usn: Some("501".into()),
            dept: Some("CSE".into()),
            grade: Some("B".into()),
        }))
        .await
        .unwrap();

        let page = update_grade(Query(UpdateParams {
            name: Some("Pooja".into()),
            grade: Some("A".into()),
        }))
        .await
        .unwrap();
        assert!(page.0.contains("Grade updated successfully for Pooja! New grade: A"));

        let page = display().await.unwrap();
        assert!(page.0.contains("Pooja"));
        assert!(page.0.contains(">A<"));
        assert!(!page.0.contains(">B<"));

        let page = update_grade(Query(UpdateParams {
            name: None,
            grade: Some("A".into()),
        }))
        .await
        .unwrap();
        assert!(page.0.contains("Name and grade are required"));
    }
}
