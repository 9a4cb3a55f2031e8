// src/services/renderer.rs
// DOCUMENTATION: Result rendering
// PURPOSE: Markdown listing of filtered places and the HTML search page around it

use crate::models::{DisplayPlace, DEFAULT_THRESHOLD};
use crate::services::weekday::EMPHASIS;
use std::fmt::Write;

pub const NO_RESULTS: &str = "該当する店舗が見つかりませんでした。";
pub const MAP_LINK_LABEL: &str = "Googleマップで見る";
pub const SOCIAL_LINK_LABEL: &str = "Instagramで検索";
pub const HOURS_HEADING: &str = "営業時間:";
pub const RATING_PREFIX: &str = "⭐ 評価:";
pub const FAILURE_PREFIX: &str = "APIリクエストに失敗しました:";

/// What the results area of the page shows
#[derive(Debug)]
pub enum Outcome<'a> {
    /// Form shown before any search
    Idle,
    Results(&'a [DisplayPlace]),
    Failure { status: u16, body: &'a str },
    /// Transport errors and invalid input
    Error(String),
}

/// Values echoed back into the form controls
#[derive(Debug, Clone)]
pub struct FormValues<'a> {
    pub threshold: f64,
    pub area: &'a str,
    pub keyword: &'a str,
}

impl Default for FormValues<'_> {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            area: "",
            keyword: "",
        }
    }
}

/// Render places as Markdown, one block per place followed by a separator
pub fn render_markdown(places: &[DisplayPlace]) -> String {
    if places.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut out = String::new();
    for place in places {
        let _ = writeln!(out, "### {}", place.name);
        let _ = writeln!(out, "{} {:.1}", RATING_PREFIX, place.rating);
        let _ = writeln!(out, "[{}]({})", MAP_LINK_LABEL, place.google_maps_link);
        let _ = writeln!(out, "[{}]({})", SOCIAL_LINK_LABEL, place.social_search_link);
        let _ = writeln!(out, "{EMPHASIS}{HOURS_HEADING}{EMPHASIS}");
        let _ = writeln!(out, "{}", place.opening_hours);
        let _ = writeln!(out, "---");
    }
    out
}

/// Render an upstream failure: status code, then the raw body
pub fn render_failure(status: u16, body: &str) -> String {
    format!("{} {}\n{}", FAILURE_PREFIX, status, body)
}

/// Render the full HTML page: form plus results area
pub fn render_page(form: &FormValues<'_>, outcome: &Outcome<'_>) -> String {
    let results = match outcome {
        Outcome::Idle => String::new(),
        Outcome::Results(places) => render_results_html(places),
        Outcome::Failure { status, body } => format!(
            "<div class=\"error\">{} {}</div>\n<pre>{}</pre>",
            FAILURE_PREFIX,
            status,
            escape_html(body)
        ),
        Outcome::Error(message) => {
            format!("<div class=\"error\">{}</div>", escape_html(message))
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<title>お店検索</title>
</head>
<body>
<form method="get" action="/search">
  <label>Googleマップ評価
    <input type="number" name="threshold" min="2.0" max="5.0" step="0.1" value="{threshold:.1}">
  </label>
  <label>エリア・駅（例:銀座、渋谷）
    <input type="text" name="area" value="{area}">
  </label>
  <label>キーワード（例:焼肉、店名）
    <input type="text" name="keyword" value="{keyword}">
  </label>
  <button type="submit">検索</button>
</form>
{results}
</body>
</html>
"#,
        threshold = form.threshold,
        area = escape_html(form.area),
        keyword = escape_html(form.keyword),
        results = results,
    )
}

fn render_results_html(places: &[DisplayPlace]) -> String {
    if places.is_empty() {
        return format!("<p>{}</p>", NO_RESULTS);
    }

    let mut out = String::new();
    for place in places {
        let hours = place
            .opening_hours
            .split('\n')
            .map(emphasis_to_html)
            .collect::<Vec<_>>()
            .join("<br>\n");

        let _ = write!(
            out,
            "<section>\n<h3>{name}</h3>\n<p>{prefix} {rating:.1}</p>\n\
             <p><a href=\"{map}\">{map_label}</a></p>\n\
             <p><a href=\"{social}\">{social_label}</a></p>\n\
             <p><strong>{hours_heading}</strong><br>\n{hours}</p>\n</section>\n<hr>\n",
            name = escape_html(&place.name),
            prefix = RATING_PREFIX,
            rating = place.rating,
            map = escape_html(&place.google_maps_link),
            map_label = MAP_LINK_LABEL,
            social = escape_html(&place.social_search_link),
            social_label = SOCIAL_LINK_LABEL,
            hours_heading = HOURS_HEADING,
            hours = hours,
        );
    }
    out
}

/// Escape one hours line, turning a "**...**" wrapped line into <strong>
fn emphasis_to_html(line: &str) -> String {
    match line
        .strip_prefix(EMPHASIS)
        .and_then(|rest| rest.strip_suffix(EMPHASIS))
    {
        Some(inner) => format!("<strong>{}</strong>", escape_html(inner)),
        None => escape_html(line),
    }
}

fn escape_html(text: &str) -> String {
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
