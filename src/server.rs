//! HTTP surface for the crawl service
//!
//! One operation: `POST /crawl` takes `{"url": "..."}`, renders the page in
//! a browser session owned by that request, and returns the serialized HTML.
//! `GET /metrics` exposes render counters. `build_server` turns a `Config`
//! into a bound server, so tests can construct independent instances.

use crate::app_state::AppState;
use crate::browser::BrowserSession;
use crate::config::Config;
use crate::models::{CrawlRequest, CrawlResponse, ErrorResponse};
use actix_web::dev::Server;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use log::{error, info};
use std::time::Instant;

#[post("/crawl")]
async fn crawl(data: web::Data<AppState>, body: web::Json<CrawlRequest>) -> impl Responder {
    let url = match body.target_url() {
        Some(url) => url.to_string(),
        None => {
            error!("Missing \"url\" in request body");
            return HttpResponse::BadRequest().json(ErrorResponse::new("Missing URL"));
        }
    };

    info!("Received crawl request for: {}", url);

    let browser_config = data.config.create_browser_config();
    let started = Instant::now();

    // The browser engine is blocking, so the render runs on the blocking
    // thread pool; the async worker stays free for other requests.
    let render_url = url.clone();
    let result = web::block(move || {
        let session = BrowserSession::launch(&browser_config)?;
        session.render(&render_url)
        // Session drops here: the Chrome process is reaped whether the
        // render succeeded or failed.
    })
    .await;

    match result {
        Ok(Ok(html)) => {
            let elapsed = started.elapsed();
            info!("Loaded page in {}ms: {}", elapsed.as_millis(), url);
            data.metrics.record_success(elapsed);
            HttpResponse::Ok().json(CrawlResponse {
                success: true,
                html,
            })
        }
        Ok(Err(e)) => {
            error!("Error crawling {}: {}", url, e);
            data.metrics.record_failure(e.to_string());
            HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()))
        }
        Err(e) => {
            // Blocking task cancelled before the render completed
            error!("Render task failed for {}: {}", url, e);
            data.metrics.record_failure(e.to_string());
            HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()))
        }
    }
}

#[get("/metrics")]
async fn get_metrics(data: web::Data<AppState>) -> impl Responder {
    let m = data.metrics.snapshot();

    HttpResponse::Ok().json(serde_json::json!({
        "total_requests": m.total_requests,
        "successful_requests": m.successful_requests,
        "failed_requests": m.failed_requests,
        "success_rate": format!("{:.2}%", m.success_rate()),
        "average_response_time_ms": format!("{:.2}", m.average_response_time_ms),
        "timeout_count": m.timeout_count,
        "last_success": m.last_success,
        "last_failure": m.last_failure,
        "last_error": m.last_error,
    }))
}

/// Register the service routes; shared between the server and tests
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crawl).service(get_metrics);
}

/// Bind the HTTP server described by `config` and return it ready to await
pub fn build_server(config: Config) -> std::io::Result<Server> {
    let addr = config.bind_addr();
    let data = web::Data::new(AppState::new(config));

    let server = HttpServer::new(move || App::new().app_data(data.clone()).configure(routes))
        .bind(&addr)?
        .run();

    Ok(server)
}
