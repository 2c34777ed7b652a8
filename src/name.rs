use std::future::Future;
use std::time::Duration;

use anyhow::{Result, anyhow};
use log::{debug, warn};
use serde::Deserialize;

use crate::config::Config;

/// Label used whenever no descriptive name can be obtained.
pub const FALLBACK_NAME: &str = "Custom Color";

pub const DEFAULT_ENDPOINT: &str = "https://www.thecolorapi.com/id";

/// Source of human-readable color names.
///
/// Implementations may fail freely; [`resolve_name`] is the boundary that turns
/// every failure into [`FALLBACK_NAME`].
pub trait NameLookup {
    /// Looks up `hex` (`#rrggbb`). `Ok(None)` means the service knows no name.
    fn lookup(&self, hex: &str) -> impl Future<Output = Result<Option<String>>> + Send;
}

/// Resolves the display name for `hex`, always producing a string.
pub async fn resolve_name<L: NameLookup>(lookup: &L, hex: &str) -> String {
    match lookup.lookup(hex).await {
        Ok(Some(name)) if !name.trim().is_empty() => name,
        Ok(_) => {
            debug!("No name known for {}, using fallback", hex);
            FALLBACK_NAME.to_string()
        }
        Err(e) => {
            warn!("Falling back color name for {}: {:#}", hex, e);
            FALLBACK_NAME.to_string()
        }
    }
}

#[derive(Debug, Deserialize)]
struct ColorApiResponse {
    name: Option<ColorApiName>,
}

#[derive(Debug, Deserialize)]
struct ColorApiName {
    value: Option<String>,
}

/// HTTP client for a thecolorapi.com-compatible `/id?hex=` endpoint.
#[derive(Debug, Clone)]
pub struct ColorApi {
    client: reqwest::Client,
    endpoint: String,
}

impl ColorApi {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl NameLookup for ColorApi {
    async fn lookup(&self, hex: &str) -> Result<Option<String>> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let url = url::Url::parse_with_params(&self.endpoint, &[("hex", digits)])?;
        debug!("Fetching color name for {} from {}", hex, url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("color name service returned {}", status));
        }
        let body: ColorApiResponse = resp.json().await?;
        Ok(body.name.and_then(|name| name.value))
    }
}

/// Lookup that never knows a name; every color gets the fallback label.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl NameLookup for NoLookup {
    async fn lookup(&self, _hex: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Name source selected by configuration.
#[derive(Debug, Clone)]
pub enum NameSource {
    Remote(ColorApi),
    Disabled(NoLookup),
}

impl NameSource {
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.name_lookup_enabled {
            Ok(Self::Remote(ColorApi::new(
                config.name_api_url.clone(),
                Duration::from_secs(config.name_lookup_timeout_secs),
            )?))
        } else {
            Ok(Self::Disabled(NoLookup))
        }
    }
}

impl NameLookup for NameSource {
    async fn lookup(&self, hex: &str) -> Result<Option<String>> {
        match self {
            Self::Remote(api) => api.lookup(hex).await,
            Self::Disabled(none) => none.lookup(hex).await,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, HttpServer, web};

    /// Answers every lookup with the same name.
    pub(crate) struct FixedName(pub &'static str);

    impl NameLookup for FixedName {
        async fn lookup(&self, _hex: &str) -> Result<Option<String>> {
            Ok(Some(self.0.to_string()))
        }
    }

    /// Names each color after its own hex code.
    pub(crate) struct EchoName;

    impl NameLookup for EchoName {
        async fn lookup(&self, hex: &str) -> Result<Option<String>> {
            Ok(Some(format!("name-of-{hex}")))
        }
    }

    struct Failing;

    impl NameLookup for Failing {
        async fn lookup(&self, _hex: &str) -> Result<Option<String>> {
            Err(anyhow!("connection reset"))
        }
    }

    #[tokio::test]
    async fn failure_resolves_to_fallback() {
        assert_eq!(resolve_name(&Failing, "#ff0000").await, FALLBACK_NAME);
    }

    #[tokio::test]
    async fn missing_or_blank_name_resolves_to_fallback() {
        assert_eq!(resolve_name(&NoLookup, "#ff0000").await, FALLBACK_NAME);
        assert_eq!(resolve_name(&FixedName("  "), "#ff0000").await, FALLBACK_NAME);
    }

    #[tokio::test]
    async fn known_name_is_returned() {
        assert_eq!(resolve_name(&FixedName("Red"), "#ff0000").await, "Red");
    }

    #[tokio::test]
    async fn disabled_source_never_names() {
        let config = Config {
            name_lookup_enabled: false,
            ..Config::default()
        };
        let source = NameSource::from_config(&config).unwrap();
        assert!(matches!(source, NameSource::Disabled(_)));
        assert_eq!(resolve_name(&source, "#123456").await, FALLBACK_NAME);
    }

    #[derive(Clone, Copy)]
    enum Stub {
        Named,
        Nameless,
        Status(StatusCode),
        Slow,
    }

    async fn spawn_stub(stub: Stub) -> String {
        let server = HttpServer::new(move || {
            App::new().route(
                "/id",
                web::get().to(move |query: web::Query<HashMap<String, String>>| async move {
                    let hex = query.get("hex").cloned().unwrap_or_default();
                    match stub {
                        Stub::Named => HttpResponse::Ok()
                            .json(serde_json::json!({ "name": { "value": format!("Stub {hex}") } })),
                        Stub::Nameless => HttpResponse::Ok().json(serde_json::json!({ "name": {} })),
                        Stub::Status(code) => HttpResponse::build(code).finish(),
                        Stub::Slow => {
                            actix_web::rt::time::sleep(Duration::from_secs(5)).await;
                            HttpResponse::Ok().finish()
                        }
                    }
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{addr}/id")
    }

    #[actix_web::test]
    async fn color_api_sends_bare_digits_and_reads_name() {
        let api = ColorApi::new(spawn_stub(Stub::Named).await, Duration::from_secs(5)).unwrap();
        let name = api.lookup("#00ff7f").await.unwrap();
        assert_eq!(name.as_deref(), Some("Stub 00ff7f"));
    }

    #[actix_web::test]
    async fn color_api_missing_name_field_is_none() {
        let api = ColorApi::new(spawn_stub(Stub::Nameless).await, Duration::from_secs(5)).unwrap();
        assert_eq!(api.lookup("#00ff7f").await.unwrap(), None);
        assert_eq!(resolve_name(&api, "#00ff7f").await, FALLBACK_NAME);
    }

    #[actix_web::test]
    async fn color_api_error_status_falls_back() {
        let url = spawn_stub(Stub::Status(StatusCode::SERVICE_UNAVAILABLE)).await;
        let api = ColorApi::new(url, Duration::from_secs(5)).unwrap();
        assert!(api.lookup("#00ff7f").await.is_err());
        assert_eq!(resolve_name(&api, "#00ff7f").await, FALLBACK_NAME);
    }

    #[actix_web::test]
    async fn color_api_timeout_falls_back() {
        let api = ColorApi::new(spawn_stub(Stub::Slow).await, Duration::from_millis(200)).unwrap();
        assert_eq!(resolve_name(&api, "#00ff7f").await, FALLBACK_NAME);
    }

    #[tokio::test]
    async fn unreachable_service_falls_back() {
        let api = ColorApi::new("http://127.0.0.1:1/id", Duration::from_secs(2)).unwrap();
        assert_eq!(resolve_name(&api, "#abcdef").await, FALLBACK_NAME);
    }
}
