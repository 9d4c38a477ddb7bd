//! Browser pages
//!
//! `/web` lists terms sorted by reading with a search box; `/add` is a form
//! posting to the JSON API. Page shells are embedded at compile time.

use axum::{
    extract::{Query, State},
    response::Html,
};

use mydict_common::gojuon::{normalize_keyword, sorted_view};
use mydict_common::{db, Term};

use crate::api::terms::ListQuery;
use crate::api::TermError;
use crate::AppState;

const TERMS_HTML: &str = include_str!("../../ui/terms.html");
const ADD_HTML: &str = include_str!("../../ui/add.html");

/// GET /add
///
/// Serves the term registration form
pub async fn serve_add_page() -> Html<&'static str> {
    Html(ADD_HTML)
}

/// GET /web
///
/// Serves the term list, filtered by `q` when given
pub async fn serve_terms_page(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, TermError> {
    let keyword = normalize_keyword(query.q.as_deref());
    let terms = sorted_view(db::list_terms(&state.db).await?, keyword);

    Ok(Html(render_terms_page(&terms, keyword)))
}

/// Fill the page shell with the given terms
pub fn render_terms_page(terms: &[Term], keyword: Option<&str>) -> String {
    let rows = if terms.is_empty() {
        r#"<p class="empty">用語がありません。</p>"#.to_string()
    } else {
        terms.iter().map(render_term).collect::<Vec<_>>().join("\n")
    };

    // User text goes in last so placeholders inside it are never expanded
    TERMS_HTML
        .replace("{{COUNT}}", &terms.len().to_string())
        .replace("{{TERMS}}", &rows)
        .replace("{{QUERY}}", &escape_html(keyword.unwrap_or("")))
}

fn render_term(term: &Term) -> String {
    let reading = term
        .reading
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .map(|r| format!(r#"<span class="reading">（{}）</span>"#, escape_html(r)))
        .unwrap_or_default();

    let image = term
        .image_url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .map(|u| {
            format!(
                r#"<img src="{}" alt="{}" loading="lazy">"#,
                escape_html(u),
                escape_html(&term.word)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="term" id="term-{id}">
  <h2><a href="/term/{id}">{word}</a>{reading}</h2>
  <p>{description}</p>
  {image}
</article>"#,
        id = term.id,
        word = escape_html(&term.word),
        reading = reading,
        description = escape_html(&term.description),
        image = image,
    )
}

/// Escape text for HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(id: i64, word: &str, reading: Option<&str>) -> Term {
        Term {
            id,
            word: word.to_string(),
            reading: reading.map(str::to_string),
            description: format!("{}の説明", word),
            image_url: None,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("さくら"), "さくら");
    }

    #[test]
    fn test_render_escapes_user_text() {
        let mut t = term(1, "<script>", None);
        t.image_url = Some("javascript:\"x\"".to_string());
        let html = render_terms_page(&[t], Some("<b>"));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("javascript:&quot;x&quot;"));
    }

    #[test]
    fn test_render_keeps_given_order() {
        let html = render_terms_page(
            &[term(2, "あさひ", Some("あさひ")), term(1, "さくら", Some("さくら"))],
            None,
        );
        let first = html.find("あさひ").unwrap();
        let second = html.find("さくら").unwrap();
        assert!(first < second);
        assert!(html.contains(r#"href="/term/2""#));
    }

    #[test]
    fn test_render_keyword_placeholders_stay_literal() {
        let html = render_terms_page(&[], Some("{{TERMS}}{{COUNT}}"));
        assert!(html.contains(r#"name="q" value="{{TERMS}}{{COUNT}}" placeholder"#));
        assert_eq!(html.matches("用語がありません。").count(), 1);
    }

    #[test]
    fn test_render_empty_list() {
        let html = render_terms_page(&[], None);
        assert!(html.contains("用語がありません。"));
        assert!(!html.contains("{{TERMS}}"));
    }
}
