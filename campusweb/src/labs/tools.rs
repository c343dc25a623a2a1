//! Utility demos from the standalone exercises.
//!
//! Each route wraps one pure `campuskit` function in a minimal page: the
//! pluralizer, the vowel counter, the month-name converter, the tax/price
//! calculator, and the translator. No store involvement here.
//!
use axum::{Router, extract::Query, response::Html, routing::get};
use campuskit::month::month_converter;
use campuskit::pluralize::pluralize;
use campuskit::price::price_calculator;
use campuskit::translate::translate;
use campuskit::vowels::vowel_counts;
use serde::Deserialize;

use crate::html::{self, BACK_LINK};
use crate::labs::required;

/// Routes for the utility demos
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/pluralize", get(pluralize_page))
        .route("/vowels", get(vowels_page))
        .route("/month", get(month_page))
        .route("/price", get(price_page))
        .route("/translate", get(translate_page))
}

/// Display the tools index
async fn index() -> Html<String> {
    let page = format!(
        r#"<h1>Utility Demos</h1>
<ul>
    <li><a href="/tools/pluralize?noun=church&count=3">Pluralizer</a></li>
    <li><a href="/tools/vowels?text=education">Vowel counter</a></li>
    <li><a href="/tools/month?number=4">Month names</a></li>
    <li><a href="/tools/price?price=200&tax_rate=18">Price calculator</a></li>
    <li><a href="/tools/translate?text=hello">Translator</a></li>
</ul>{BACK_LINK}"#
    );
    Html(page)
}

#[derive(Deserialize)]
struct PluralizeParams {
    noun: Option<String>,
    count: Option<String>,
}

/// Pluralize a noun for a count
async fn pluralize_page(Query(params): Query<PluralizeParams>) -> Html<String> {
    let Some(noun) = required(&params.noun) else {
        return Html("Please enter a noun.".into());
    };
    let Some(count) = params.count.as_deref().and_then(|c| c.trim().parse::<u32>().ok()) else {
        return Html("Please enter a valid positive number.".into());
    };
    Html(format!(
        "<p>{}</p>{BACK_LINK}",
        html::escape(&pluralize(noun, count))
    ))
}

#[derive(Deserialize)]
struct TextParams {
    text: Option<String>,
}

/// Count the vowels of a piece of text
async fn vowels_page(Query(params): Query<TextParams>) -> Html<String> {
    let text = params.text.as_deref().unwrap_or("");
    let counts = vowel_counts(text);
    Html(format!("<p>{}</p>{BACK_LINK}", counts.summary()))
}

#[derive(Deserialize)]
struct MonthParams {
    number: Option<String>,
}

/// Convert a month number to its name
async fn month_page(Query(params): Query<MonthParams>) -> Html<String> {
    let convert = month_converter();
    let name = params
        .number
        .as_deref()
        .and_then(|n| n.trim().parse::<f64>().ok())
        .and_then(convert);
    match name {
        Some(name) => Html(format!("<p>{name}</p>{BACK_LINK}")),
        None => Html("Bad Number".into()),
    }
}

#[derive(Deserialize)]
struct PriceParams {
    price: Option<String>,
    tax_rate: Option<String>,
}

/// Break a price down into tax and net total
async fn price_page(Query(params): Query<PriceParams>) -> Html<String> {
    let parse = |value: &Option<String>| {
        value
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite() && *n >= 0.0)
    };
    let (Some(price), Some(tax_rate)) = (parse(&params.price), parse(&params.tax_rate)) else {
        return Html("Please enter valid positive numbers for both price and tax rate.".into());
    };

    let breakdown = price_calculator(tax_rate)(price);
    Html(format!(
        "<p>Original price: {:.2}</p><p>Tax: {:.2}</p><p>Net price: {:.2}</p>{BACK_LINK}",
        breakdown.original_price, breakdown.tax, breakdown.net_price
    ))
}

/// Translate text into the consonant-doubling play language
async fn translate_page(Query(params): Query<TextParams>) -> Html<String> {
    let text = params.text.as_deref().unwrap_or("");
    Html(format!(
        "<p>{}</p>{BACK_LINK}",
        html::escape(&translate(text))
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pluralize_page_formats_the_result() {
        let page = pluralize_page(Query(PluralizeParams {
            noun: Some("church".into()),
            count: Some("3".into()),
        }))
        .await;
        assert!(page.0.contains("3 churches"));

        let page = pluralize_page(Query(PluralizeParams {
            noun: None,
            count: Some("3".into()),
        }))
        .await;
        assert!(page.0.contains("Please enter a noun."));
    }

    /// Out-of-range and non-numeric months both report Bad Number
    #[tokio::test]
    async fn month_page_bounds_its_input() {
        let page = month_page(Query(MonthParams {
            number: Some("4".into()),
        }))
        .await;
        assert!(page.0.contains("April"));

        let page = month_page(Query(MonthParams {
            number: Some("13".into()),
        }))
        .await;
        assert!(page.0.contains("Bad Number"));

        let page = month_page(Query(MonthParams {
            number: Some("abc".into()),
        }))
        .await;
        assert!(page.0.contains("Bad Number"));
    }

    #[tokio::test]
    async fn price_page_reports_the_breakdown() {
        let page = price_page(Query(PriceParams {
            price: Some("200".into()),
            tax_rate: Some("18".into()),
        }))
        .await;
        assert!(page.0.contains("Tax: 36.00"));
        assert!(page.0.contains("Net price: 236.00"));

        let page = price_page(Query(PriceParams {
            price: Some("-1".into()),
            tax_rate: Some("18".into()),
        }))
        .await;
        assert!(page.0.contains("valid positive numbers"));
    }
}
