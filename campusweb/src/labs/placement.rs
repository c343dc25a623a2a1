//! Placement records lab.
//!
//! Stores final-year placements and reports the Infosys selects through a
//! case-insensitive match. Namespace: `placementdb` / `finalyears`.
//!
use axum::{Router, extract::Query, response::Html, routing::get};
use campusdb::{Client, Filter, doc};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::error::ServerError;
use crate::html::{self, BACK_LINK, Cell};
use crate::labs::required;

const DB: &str = "placementdb";
const COLLECTION: &str = "finalyears";

/// Routes for the placement lab
pub fn router() -> Router {
    Router::new()
        .route("/", get(form))
        .route("/insert", get(insert))
        .route("/infosys-students", get(infosys_students))
        .route("/all-students", get(all_students))
}

#[derive(Deserialize)]
struct InsertParams {
    usn: Option<String>,
    name: Option<String>,
    company_name: Option<String>,
}

/// Display the entry form
async fn form() -> Html<String> {
    Html(html::form_page(
        "Placement Records",
        "/placement/insert",
        &[
            ("USN", "usn"),
            ("Name", "name"),
            ("Company", "company_name"),
        ],
    ))
}

/// Insert one placement record
async fn insert(Query(params): Query<InsertParams>) -> Result<Html<String>, ServerError> {
    let (Some(usn), Some(name), Some(company)) = (
        required(&params.usn),
        required(&params.name),
        required(&params.company_name),
    ) else {
        return Ok(Html("All fields are required".into()));
    };

    let client = Client::connect(&CONFIG.db_addr).await?;
    let outcome = client
        .database(DB)
        .collection(COLLECTION)
        .insert_one(doc! { "usn": usn, "name": name, "company_name": company })
        .await;
    client.close().await;
    outcome?;

    Ok(Html(format!(
        "Student {} placement with {} registered successfully!{BACK_LINK}",
        html::escape(name),
        html::escape(company)
    )))
}

/// Table of students selected for Infosys, however the company was cased
async fn infosys_students() -> Result<Html<String>, ServerError> {
    let client = Client::connect(&CONFIG.db_addr).await?;
    let found = client
        .database(DB)
        .collection(COLLECTION)
        .find(&Filter::eq_ignore_case("company_name", "infosys"))
        .await;
    client.close().await;
    let students = found?;

    let rows = students
        .iter()
        .map(|student| {
            vec![
                Cell::plain(html::value_text(student.get("usn"))),
                Cell::plain(html::value_text(student.get("name"))),
                Cell::highlighted(html::value_text(student.get("company_name")), "#ADD8E6"),
            ]
        })
        .collect();

    let mut page = html::table_or_empty(
        "Students Selected for Infosys",
        &["USN", "Name", "Company"],
        rows,
        "No students found selected for Infosys.",
        Some("Total students selected for Infosys"),
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}

/// Table of every placed student
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
            vec![
                Cell::plain(html::value_text(student.get("usn"))),
                Cell::plain(html::value_text(student.get("name"))),
                Cell::plain(html::value_text(student.get("company_name"))),
            ]
        })
        .collect();

    let mut page = html::table_or_empty(
        "All Placed Students",
        &["USN", "Name", "Company"],
        rows,
        "No students found.",
        Some("Total placed students"),
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(usn: &str, name: &str, company: &str) -> InsertParams {
        let field = |v: &str| (!v.is_empty()).then(|| v.to_string());
        InsertParams {
            usn: field(usn),
            name: field(name),
            company_name: field(company),
        }
    }

    /// The Infosys report matches any casing but nothing looser
    #[tokio::test]
    async fn placement_lab_round_trip() {
        let page = insert(Query(params("401", "Nisha", ""))).await.unwrap();
        assert!(page.0.contains("All fields are required"));

        insert(Query(params("401", "Nisha", "INFOSYS"))).await.unwrap();
        insert(Query(params("402", "Arun", "Infosys"))).await.unwrap();
        insert(Query(params("403", "Divya", "Infosys Ltd"))).await.unwrap();
        insert(Query(params("404", "Raj", "TCS"))).await.unwrap();

        let page = infosys_students().await.unwrap();
        assert!(page.0.contains("Nisha"));
        assert!(page.0.contains("Arun"));
        assert!(!page.0.contains("Divya"));
        assert!(!page.0.contains("Raj"));
        assert!(page.0.contains("Total students selected for Infosys: 2"));

        let page = all_students().await.unwrap();
        assert!(page.0.contains("Total placed students: 4"));
    }
}
