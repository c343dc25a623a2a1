//! Branch registry lab.
//!
//! Stores students by branch and semester and reports the CSE sixth
//! semester through a compound filter. Namespace: `studentbranchdb` /
//! `students`.
//!
use axum::{Router, extract::Query, response::Html, routing::get};
use campusdb::{Client, Filter, doc};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::error::ServerError;
use crate::html::{self, BACK_LINK};
use crate::labs::{required, required_i64};

const DB: &str = "studentbranchdb";
const COLLECTION: &str = "students";

/// Routes for the branches lab
pub fn router() -> Router {
    Router::new()
        .route("/", get(form))
        .route("/insert", get(insert))
        .route("/cse-6th-sem", get(cse_sixth_sem))
        .route("/all-students", get(all_students))
}

#[derive(Deserialize)]
struct InsertParams {
    name: Option<String>,
    branch: Option<String>,
    semester: Option<String>,
}

/// Display the entry form
async fn form() -> Html<String> {
    Html(html::form_page(
        "Branch Registry",
        "/branches/insert",
        &[
            ("Name", "name"),
            ("Branch", "branch"),
            ("Semester", "semester"),
        ],
    ))
}

/// Insert one student record
async fn insert(Query(params): Query<InsertParams>) -> Result<Html<String>, ServerError> {
    let (Some(name), Some(branch), Some(semester)) = (
        required(&params.name),
        required(&params.branch),
        required_i64(&params.semester),
    ) else {
        return Ok(Html("All fields are required".into()));
    };

    let client = Client::connect(&CONFIG.db_addr).await?;
    let outcome = client
        .database(DB)
        .collection(COLLECTION)
        .insert_one(doc! { "name": name, "branch": branch, "semester": semester })
        .await;
    client.close().await;
    outcome?;

    Ok(Html(format!(
        "Student {} from {} branch, {semester} semester added successfully!{BACK_LINK}",
        html::escape(name),
        html::escape(branch)
    )))
}

/// Render one student line for the list pages
fn student_line(student: &campusdb::Document) -> String {
    format!(
        "Name: {} | Branch: {} | Semester: {}",
        html::escape(&html::value_text(student.get("name"))),
        html::escape(&html::value_text(student.get("branch"))),
        html::value_text(student.get("semester")),
    )
}

/// List of CSE students in their sixth semester
async fn cse_sixth_sem() -> Result<Html<String>, ServerError> {
    let client = Client::connect(&CONFIG.db_addr).await?;
    let found = client
        .database(DB)
        .collection(COLLECTION)
        .find(&Filter::And(vec![
            Filter::eq("branch", "CSE"),
            Filter::eq("semester", 6),
        ]))
        .await;
    client.close().await;
    let students = found?;

    let items = students.iter().map(student_line).collect();
    let mut page = html::list_or_empty(
        "CSE 6th Semester Students",
        items,
        "No CSE 6th semester students found.",
        Some("Total CSE 6th semester students"),
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}

/// List of every student in the registry
async fn all_students() -> Result<Html<String>, ServerError> {
    let client = Client::connect(&CONFIG.db_addr).await?;
    let found = client
        .database(DB)
        .collection(COLLECTION)
        .find(&Filter::All)
        .await;
    client.close().await;
    let students = found?;

    let items = students.iter().map(student_line).collect();
    let mut page = html::list_or_empty(
        "All Students",
        items,
        "No students found.",
        Some("Total students"),
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, branch: &str, semester: &str) -> InsertParams {
        let field = |v: &str| (!v.is_empty()).then(|| v.to_string());
        InsertParams {
            name: field(name),
            branch: field(branch),
            semester: field(semester),
        }
    }

    /// Both legs of the compound filter must hold
    #[tokio::test]
    async fn branches_lab_round_trip() {
        let page = insert(Query(params("Hari", "CSE", "six"))).await.unwrap();
        assert!(page.0.contains("All fields are required"));

        insert(Query(params("Hari", "CSE", "6"))).await.unwrap();
        insert(Query(params("Uma", "CSE", "5"))).await.unwrap();
        insert(Query(params("Sana", "ECE", "6"))).await.unwrap();

        let page = cse_sixth_sem().await.unwrap();
        assert!(page.0.contains("Hari"));
        assert!(!page.0.contains("Uma"));
        assert!(!page.0.contains("Sana"));
        assert!(page.0.contains("Total CSE 6th semester students: 1"));

        let page = all_students().await.unwrap();
        assert!(page.0.contains("Total students: 3"));
    }
}
