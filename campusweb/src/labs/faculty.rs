//! Faculty directory lab.
//!
//! Stores faculty records and reports the CSE professors via a compound
//! filter. Namespace: `facultydb` / `faculty`.
//!
use axum::{Router, extract::Query, response::Html, routing::get};
use campusdb::{Client, Filter, doc};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::error::ServerError;
use crate::html::{self, BACK_LINK, Cell};
use crate::labs::required;

const DB: &str = "facultydb";
const COLLECTION: &str = "faculty";

/// Routes for the faculty lab
pub fn router() -> Router {
    Router::new()
        .route("/", get(form))
        .route("/insert", get(insert))
        .route("/cse-professors", get(cse_professors))
        .route("/all-faculty", get(all_faculty))
}

#[derive(Deserialize)]
struct InsertParams {
    id: Option<String>,
    title: Option<String>,
    name: Option<String>,
    branch: Option<String>,
}

/// Display the entry form
async fn form() -> Html<String> {
    Html(html::form_page(
        "Faculty Directory",
        "/faculty/insert",
        &[
            ("Faculty ID", "id"),
            ("Title", "title"),
            ("Name", "name"),
            ("Branch", "branch"),
        ],
    ))
}

/// Insert one faculty record
async fn insert(Query(params): Query<InsertParams>) -> Result<Html<String>, ServerError> {
    let (Some(id), Some(title), Some(name), Some(branch)) = (
        required(&params.id),
        required(&params.title),
        required(&params.name),
        required(&params.branch),
    ) else {
        return Ok(Html("All fields are required".into()));
    };

    let client = Client::connect(&CONFIG.db_addr).await?;
    let outcome = client
        .database(DB)
        .collection(COLLECTION)
        .insert_one(doc! { "id": id, "title": title, "name": name, "branch": branch })
        .await;
    client.close().await;
    outcome?;

    Ok(Html(format!(
        "Faculty {} with title {} in {} branch added successfully!{BACK_LINK}",
        html::escape(name),
        html::escape(title),
        html::escape(branch)
    )))
}

/// Table of faculty whose branch is CSE and title is PROFESSOR
async fn cse_professors() -> Result<Html<String>, ServerError> {
    let client = Client::connect(&CONFIG.db_addr).await?;
    let found = client
        .database(DB)
        .collection(COLLECTION)
        .find(&Filter::And(vec![
            Filter::eq("branch", "CSE"),
            Filter::eq("title", "PROFESSOR"),
        ]))
        .await;
    client.close().await;
    let professors = found?;

    let rows = professors
        .iter()
        .map(|member| {
            vec![
                Cell::plain(html::value_text(member.get("id"))),
                Cell::plain(html::value_text(member.get("name"))),
                Cell::highlighted(html::value_text(member.get("title")), "#90EE90"),
                Cell::highlighted(html::value_text(member.get("branch")), "#ADD8E6"),
            ]
        })
        .collect();

    let mut page = html::table_or_empty(
        "CSE Department Professors",
        &["Faculty ID", "Name", "Title", "Branch"],
        rows,
        "No professors found in CSE department.",
        Some("Total CSE Professors"),
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}

/// Table of every faculty member
async fn all_faculty() -> Result<Html<String>, ServerError> {
    let client = Client::connect(&CONFIG.db_addr).await?;
    let found = client
        .database(DB)
        .collection(COLLECTION)
        .find(&Filter::All)
        .await;
    client.close().await;
    let members = found?;

    let rows = members
        .iter()
        .map(|member| {
            vec![
                Cell::plain(html::value_text(member.get("id"))),
                Cell::plain(html::value_text(member.get("name"))),
                Cell::plain(html::value_text(member.get("title"))),
                Cell::plain(html::value_text(member.get("branch"))),
            ]
        })
        .collect();

    let mut page = html::table_or_empty(
        "All Faculty Members",
        &["Faculty ID", "Name", "Title", "Branch"],
        rows,
        "No faculty found.",
        Some("Total faculty"),
    );
    page.push_str(BACK_LINK);
    Ok(Html(page))
}
