use std::collections::HashMap;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, Responder, web};
use askama::Template;
use log::{error, info, warn};

use crate::analysis::analyze;
use crate::color::{create_color, parse_hex};
use crate::config::Config;
use crate::name::NameSource;
use crate::templates::AnalysisTemplate;

pub struct AppState {
    pub config: Config,
    pub names: NameSource,
}

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let names = NameSource::from_config(&config)?;
        Ok(Self { config, names })
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_handler))
        .route("/analysis/{hex}", web::get().to(analysis_page_handler))
        .route("/api/color/{hex}", web::get().to(color_json_handler))
        .route("/api/analysis/{hex}", web::get().to(analysis_json_handler));
}

pub async fn run_api_server() -> std::io::Result<()> {
    let config = Config::from_env();
    let bind = (config.bind_address.clone(), config.port);

    info!("Starting API server on {}:{}", bind.0, bind.1);
    info!(
        "Name lookup enabled: {}, endpoint: {}, timeout: {}s",
        config.name_lookup_enabled, config.name_api_url, config.name_lookup_timeout_secs
    );

    let state = AppState::from_config(config).map_err(|e| {
        error!("Failed to build name lookup client: {:#}", e);
        std::io::Error::other(e.to_string())
    })?;
    let state = web::Data::new(state);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
        .bind(bind)?
        .run()
        .await
}

/// Rejects anything that is not six hex digits; the core would silently map it to black.
fn checked_hex(raw: &str) -> Result<&str, HttpResponse> {
    match parse_hex(raw) {
        Ok(_) => Ok(raw),
        Err(e) => {
            warn!("Rejected color input: {}", e);
            Err(HttpResponse::BadRequest().body(e.to_string()))
        }
    }
}

async fn render_page(hex: &str, state: &AppState) -> HttpResponse {
    let analysis = analyze(hex, &state.names).await;
    match AnalysisTemplate::new(&analysis).render() {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            error!("Template error for color '{}': {}", hex, e);
            HttpResponse::InternalServerError().body(format!("Template error: {}", e))
        }
    }
}

async fn index_handler(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let params: HashMap<_, _> = url::form_urlencoded::parse(req.query_string().as_bytes())
        .into_owned()
        .collect();
    let hex = params
        .get("hex")
        .cloned()
        .unwrap_or_else(|| state.config.default_color.clone());
    info!("Received / request for color: {}", hex);
    match checked_hex(&hex) {
        Ok(hex) => render_page(hex, &state).await,
        Err(resp) => resp,
    }
}

async fn analysis_page_handler(path: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    let hex = path.into_inner();
    info!("Received /analysis request for color: {}", hex);
    match checked_hex(&hex) {
        Ok(hex) => render_page(hex, &state).await,
        Err(resp) => resp,
    }
}

async fn color_json_handler(path: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    let hex = path.into_inner();
    match checked_hex(&hex) {
        Ok(hex) => HttpResponse::Ok().json(create_color(hex, &state.names).await),
        Err(resp) => resp,
    }
}

async fn analysis_json_handler(path: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    let hex = path.into_inner();
    match checked_hex(&hex) {
        Ok(hex) => HttpResponse::Ok().json(analyze(hex, &state.names).await),
        Err(resp) => resp,
    }
}
