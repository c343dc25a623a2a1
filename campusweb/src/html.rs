//! HTML rendering helpers for the lab pages.
//!
//! Exports the static index page, the shared entry-form scaffolding, and
//! the list/table renderers used by every lab. The empty result set is an
//! explicit branch here: a query page either shows its records or its
//! "no records found" message, never an empty table shell. Keep markup in
//! this module so the lab modules stay focused on the
//! request/validate/persist/render cycle.
//!
use serde_json::Value;

/// Navigation link appended to every rendered report page
pub const BACK_LINK: &str = r#"<br><a href="/">Go Back</a>"#;

/// HTML page for the lab index with links to every exercise
pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Campus Web Labs</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; }
        nav { background-color: #333; padding: 10px; }
        nav a { color: white; text-decoration: none; margin: 0 15px; }
        nav a:hover { background-color: #555; padding: 5px; }
        .content { margin-top: 20px; }
        li { margin: 8px 0; }
    </style>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/tools">Tools</a>
    </nav>
    <div class="content">
        <h1>Campus Web Labs</h1>
        <p>Each lab keeps its own collection. Pick one:</p>
        <ul>
            <li><a href="/marks">Exam marks</a> (insert, low marks, grade sheet)</li>
            <li><a href="/attendance">Attendance registry</a> (insert, low attendance, overview)</li>
            <li><a href="/faculty">Faculty directory</a> (insert, CSE professors, all faculty)</li>
            <li><a href="/fees">Exam fee registry</a> (insert, unpaid list, delete unpaid)</li>
            <li><a href="/placement">Placement records</a> (insert, Infosys selects, all placed)</li>
            <li><a href="/grades">Grade book</a> (insert, update grade, display)</li>
            <li><a href="/branches">Branch registry</a> (insert, CSE 6th semester, all students)</li>
            <li><a href="/tools">Utility demos</a> (pluralizer, vowels, months, prices, translator)</li>
        </ul>
    </div>
</body>
</html>"#;

/// Inline style shared by the entry form pages
const FORM_STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 40px; }
        form { max-width: 400px; }
        label { display: block; margin-top: 10px; }
        input { width: 100%; padding: 8px; margin: 5px 0; }
        input[type=submit] { width: auto; padding: 8px 20px; margin-top: 15px; }
"#;

/// Render a lab's entry form page: one text input per `(label, name)`
/// pair, submitted as a GET query to `action`.
pub fn form_page(title: &str, action: &str, fields: &[(&str, &str)]) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str(&format!("    <title>{title}</title>\n    <style>"));
    page.push_str(FORM_STYLE);
    page.push_str("    </style>\n</head>\n<body>\n");
    page.push_str(&format!("    <h1>{title}</h1>\n"));
    page.push_str(&format!("    <form action=\"{action}\" method=\"GET\">\n"));
    for (label, name) in fields {
        page.push_str(&format!("        <label>{label}:</label>\n"));
        page.push_str(&format!("        <input type=\"text\" name=\"{name}\">\n"));
    }
    page.push_str("        <input type=\"submit\" value=\"Submit\">\n");
    page.push_str("    </form>\n");
    page.push_str(BACK_LINK);
    page.push_str("\n</body>\n</html>");
    page
}

/// Escape text for interpolation into HTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Field value as display text: strings verbatim, whole numbers without a
/// trailing fraction, absent/null values as `N/A`
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

/// One cell of a rendered table, optionally color-highlighted
pub struct Cell {
    text: String,
    highlight: Option<&'static str>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: None,
        }
    }

    pub fn highlighted(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            highlight: Some(color),
        }
    }
}

/// Render records as a bordered table under a heading, or the empty
/// message when there are none. `total_label`, when given, adds a
/// `Total ...: N` line below a non-empty table.
pub fn table_or_empty(
    heading: &str,
    headers: &[&str],
    rows: Vec<Vec<Cell>>,
    empty_message: &str,
    total_label: Option<&str>,
) -> String {
    let mut html = format!("<h2>{heading}</h2>");
    if rows.is_empty() {
        html.push_str(&format!("<p>{empty_message}</p>"));
        return html;
    }

    html.push_str(r#"<table border="1" style="border-collapse: collapse;">"#);
    html.push_str("<tr>");
    for header in headers {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr>");
    let count = rows.len();
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            match cell.highlight {
                Some(color) => html.push_str(&format!(
                    r#"<td style="background-color: {color}; font-weight: bold;">{}</td>"#,
                    escape(&cell.text)
                )),
                None => html.push_str(&format!("<td>{}</td>", escape(&cell.text))),
            }
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    if let Some(label) = total_label {
        html.push_str(&format!("<p><strong>{label}: {count}</strong></p>"));
    }
    html
}

/// Render records as an unordered list under a heading, or the empty
/// message when there are none. Items are inserted as-is; callers escape
/// the interpolated field values.
pub fn list_or_empty(
    heading: &str,
    items: Vec<String>,
    empty_message: &str,
    total_label: Option<&str>,
) -> String {
    let mut html = format!("<h2>{heading}</h2>");
    if items.is_empty() {
        html.push_str(&format!("<p>{empty_message}</p>"));
        return html;
    }

    html.push_str("<ul>");
    let count = items.len();
    for item in items {
        html.push_str(&format!("<li>{item}</li>"));
    }
    html.push_str("</ul>");
    if let Some(label) = total_label {
        html.push_str(&format!("<p><strong>{label}: {count}</strong></p>"));
    }
    html
}

/// Letter grade and cell color for a marks value
pub fn marks_grade(marks: i64) -> (&'static str, &'static str) {
    match marks {
        m if m >= 90 => ("A+", "#90EE90"),
        m if m >= 80 => ("A", "#ADD8E6"),
        m if m >= 70 => ("B", "#FFE4B5"),
        m if m >= 60 => ("C", "#DDA0DD"),
        m if m >= 50 => ("D", "#F0E68C"),
        m if m >= 35 => ("E", "#FFA07A"),
        _ => ("F", "#ffcccc"),
    }
}

/// Status label and cell color for a low-marks row
pub fn low_marks_status(marks: i64) -> (&'static str, &'static str) {
    if marks < 10 {
        ("Critical", "#ffcccc")
    } else {
        ("Needs Improvement", "#ffe6cc")
    }
}

/// Cell color for an attendance percentage: good at 75 and above,
/// warning from 50, critical below that
pub fn attendance_color(percentage: f64) -> &'static str {
    if percentage >= 75.0 {
        "#90EE90"
    } else if percentage >= 50.0 {
        "#FFE4B5"
    } else {
        "#ffcccc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// An empty result set renders the designated message, not a table shell
    #[test]
    fn empty_table_renders_the_message() {
        let page = table_or_empty("Heading", &["A"], Vec::new(), "No records found.", Some("Total"));
        assert!(page.contains("No records found."));
        assert!(!page.contains("<table"));
        assert!(!page.contains("Total"));
    }

    #[test]
    fn empty_list_renders_the_message() {
        let page = list_or_empty("Heading", Vec::new(), "Nothing here.", None);
        assert!(page.contains("Nothing here."));
        assert!(!page.contains("<ul>"));
    }

    #[test]
    fn non_empty_table_carries_highlight_and_total() {
        let rows = vec![vec![Cell::plain("Asha"), Cell::highlighted("15", "#ffcccc")]];
        let page = table_or_empty("H", &["Name", "Marks"], rows, "none", Some("Total students"));
        assert!(page.contains(r#"background-color: #ffcccc"#));
        assert!(page.contains("<strong>Total students: 1</strong>"));
    }

    /// Band boundaries fall exactly where the grading table puts them
    #[test]
    fn marks_grade_bands() {
        assert_eq!(marks_grade(90).0, "A+");
        assert_eq!(marks_grade(89).0, "A");
        assert_eq!(marks_grade(70).0, "B");
        assert_eq!(marks_grade(60).0, "C");
        assert_eq!(marks_grade(50).0, "D");
        assert_eq!(marks_grade(35).0, "E");
        assert_eq!(marks_grade(34).0, "F");
    }

    #[test]
    fn attendance_colors_by_band() {
        assert_eq!(attendance_color(75.0), "#90EE90");
        assert_eq!(attendance_color(74.99), "#FFE4B5");
        assert_eq!(attendance_color(50.0), "#FFE4B5");
        assert_eq!(attendance_color(49.9), "#ffcccc");
    }

    #[test]
    fn values_render_for_display() {
        assert_eq!(value_text(None), "N/A");
        assert_eq!(value_text(Some(&json!(null))), "N/A");
        assert_eq!(value_text(Some(&json!("CSE"))), "CSE");
        assert_eq!(value_text(Some(&json!(15))), "15");
        assert_eq!(value_text(Some(&json!(500.0))), "500");
        assert_eq!(value_text(Some(&json!(66.67))), "66.67");
        assert_eq!(value_text(Some(&json!(false))), "false");
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(escape("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }
}
