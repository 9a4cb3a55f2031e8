// src/handlers/search.rs
// DOCUMENTATION: HTTP handlers for the search form
// PURPOSE: Parse requests, call services, return HTML or JSON

use crate::errors::PlacesError;
use crate::models::{SearchForm, SearchRequest, SearchResponse};
use crate::services::renderer::{self, FormValues, Outcome};
use crate::services::{GooglePlacesClient, SearchService, WeekdayLabels};
use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

fn html(status: StatusCode, page: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(page)
}

/// GET /
/// Empty search form
pub async fn index() -> impl Responder {
    html(
        StatusCode::OK,
        renderer::render_page(&FormValues::default(), &Outcome::Idle),
    )
}

/// GET /search
/// Run a search and render the results below the form
pub async fn search_page(
    client: web::Data<GooglePlacesClient>,
    labels: web::Data<WeekdayLabels>,
    query: web::Query<SearchForm>,
) -> impl Responder {
    let form = query.into_inner();
    let values = FormValues {
        threshold: form.threshold,
        area: &form.area,
        keyword: &form.keyword,
    };

    if let Err(e) = form.validate() {
        let message = PlacesError::ValidationError(e.to_string()).to_string();
        return html(
            StatusCode::BAD_REQUEST,
            renderer::render_page(&values, &Outcome::Error(message)),
        );
    }

    let result = SearchService::search(
        client.get_ref(),
        labels.get_ref(),
        &form.area,
        &form.keyword,
        form.threshold,
    )
    .await;

    // Failures are shown on the page, never raised
    let page = match &result {
        Ok(places) => renderer::render_page(&values, &Outcome::Results(places)),
        Err(PlacesError::UpstreamFailure { status, body }) => renderer::render_page(
            &values,
            &Outcome::Failure {
                status: *status,
                body,
            },
        ),
        Err(e) => renderer::render_page(&values, &Outcome::Error(e.to_string())),
    };

    html(StatusCode::OK, page)
}

/// GET /search.md
/// Same search as the form page, rendered as Markdown text
pub async fn search_markdown(
    client: web::Data<GooglePlacesClient>,
    labels: web::Data<WeekdayLabels>,
    query: web::Query<SearchForm>,
) -> Result<impl Responder, PlacesError> {
    if let Err(e) = query.validate() {
        return Err(PlacesError::ValidationError(e.to_string()));
    }

    let form = query.into_inner();
    let result = SearchService::search(
        client.get_ref(),
        labels.get_ref(),
        &form.area,
        &form.keyword,
        form.threshold,
    )
    .await;

    let text = match result {
        Ok(places) => renderer::render_markdown(&places),
        Err(PlacesError::UpstreamFailure { status, body }) => {
            renderer::render_failure(status, &body)
        }
        Err(e) => return Err(e),
    };

    Ok(HttpResponse::Ok()
        .content_type("text/markdown; charset=utf-8")
        .body(text))
}

/// POST /api/search
/// Same search as the form, returned as JSON
pub async fn search_api(
    client: web::Data<GooglePlacesClient>,
    labels: web::Data<WeekdayLabels>,
    req: web::Json<SearchRequest>,
) -> Result<impl Responder, PlacesError> {
    if let Err(e) = req.validate() {
        return Err(PlacesError::ValidationError(e.to_string()));
    }

    let req = req.into_inner();
    let places = SearchService::search(
        client.get_ref(),
        labels.get_ref(),
        &req.area,
        &req.keyword,
        req.threshold,
    )
    .await?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        total: places.len(),
        places,
    }))
}

/// Configuration for search routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/search", web::get().to(search_page))
        .route("/search.md", web::get().to(search_markdown))
        .route("/api/search", web::post().to(search_api));
}
