//! Fire-and-forget usage analytics.
//!
//! [`Analytics`] is an explicitly constructed client over an
//! [`AnalyticsBackend`]. Every call is a no-op until [`Analytics::init`]
//! succeeds, and backend failures are logged and dropped so they never reach
//! the calling component.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::content::{LinkKind, SocialPlatform};
use crate::filter::ProjectFilter;

pub type Properties = serde_json::Map<String, Value>;

const DEFAULT_API_HOST: &str = "https://app.posthog.com";
const PAGEVIEW_EVENT: &str = "$pageview";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("analytics library unavailable: {0}")]
    Unavailable(String),
    #[error("analytics call failed: {0}")]
    CallFailed(String),
}

/// PostHog settings. The defaults let PostHog record the page view itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub api_key: String,
    pub api_host: String,
    pub autocapture: bool,
    pub capture_pageview: bool,
    pub disable_session_recording: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_host: DEFAULT_API_HOST.to_string(),
            autocapture: true,
            capture_pageview: true,
            disable_session_recording: false,
        }
    }
}

impl AnalyticsConfig {
    /// Config from the key baked in at build time, if one was provided.
    pub fn from_build_env() -> Option<Self> {
        Self::from_parts(option_env!("POSTHOG_API_KEY"), option_env!("POSTHOG_API_HOST"))
    }

    fn from_parts(key: Option<&str>, host: Option<&str>) -> Option<Self> {
        let api_key = key.map(str::trim).filter(|k| !k.is_empty())?;
        let mut config = Self {
            api_key: api_key.to_string(),
            ..Self::default()
        };
        if let Some(host) = host.map(str::trim).filter(|h| !h.is_empty()) {
            config.api_host = host.trim_end_matches('/').to_string();
        }
        Some(config)
    }
}

pub trait AnalyticsBackend: Send + Sync {
    fn init(&self, config: &AnalyticsConfig) -> Result<(), AnalyticsError>;
    fn capture(&self, event: &str, properties: &Properties) -> Result<(), AnalyticsError>;
    fn identify(&self, user_id: &str, properties: &Properties) -> Result<(), AnalyticsError>;
    fn set_person_properties(&self, properties: &Properties) -> Result<(), AnalyticsError>;
    fn reset(&self) -> Result<(), AnalyticsError>;

    /// Location reported with page views.
    fn current_url(&self) -> Option<String> {
        None
    }
}

/// Backend that accepts everything and records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBackend;

impl AnalyticsBackend for NoopBackend {
    fn init(&self, _config: &AnalyticsConfig) -> Result<(), AnalyticsError> {
        Ok(())
    }

    fn capture(&self, _event: &str, _properties: &Properties) -> Result<(), AnalyticsError> {
        Ok(())
    }

    fn identify(&self, _user_id: &str, _properties: &Properties) -> Result<(), AnalyticsError> {
        Ok(())
    }

    fn set_person_properties(&self, _properties: &Properties) -> Result<(), AnalyticsError> {
        Ok(())
    }

    fn reset(&self) -> Result<(), AnalyticsError> {
        Ok(())
    }
}

#[derive(Clone)]
pub struct Analytics {
    backend: Arc<dyn AnalyticsBackend>,
    initialized: Arc<AtomicBool>,
}

impl std::fmt::Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analytics")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

impl Analytics {
    pub fn new(backend: impl AnalyticsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A client that is never initialized.
    pub fn noop() -> Self {
        Self::new(NoopBackend)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Initializes the backend once. Returns whether this call did it.
    pub fn init(&self, config: &AnalyticsConfig) -> bool {
        if self.is_initialized() {
            return false;
        }
        if config.api_key.is_empty() {
            log::debug!("analytics disabled: no api key");
            return false;
        }
        match self.backend.init(config) {
            Ok(()) => {
                self.initialized.store(true, Ordering::Release);
                log::info!("analytics initialized for {}", config.api_host);
                true
            }
            Err(e) => {
                log::debug!("analytics init failed: {e}");
                false
            }
        }
    }

    pub fn track(&self, event: &str, properties: Option<Properties>) {
        if !self.is_initialized() {
            return;
        }
        let properties = properties.unwrap_or_default();
        swallow("track", self.backend.capture(event, &properties));
    }

    pub fn page(&self, page_name: Option<&str>, properties: Option<Properties>) {
        if !self.is_initialized() {
            return;
        }
        let mut merged = Properties::new();
        if let Some(url) = self.backend.current_url() {
            merged.insert("$current_url".to_string(), Value::from(url));
        }
        if let Some(name) = page_name {
            merged.insert("page_name".to_string(), Value::from(name));
        }
        merged.extend(properties.unwrap_or_default());
        swallow("page", self.backend.capture(PAGEVIEW_EVENT, &merged));
    }

    pub fn identify(&self, user_id: &str, properties: Option<Properties>) {
        if !self.is_initialized() {
            return;
        }
        let properties = properties.unwrap_or_default();
        swallow("identify", self.backend.identify(user_id, &properties));
    }

    pub fn set_user_properties(&self, properties: Properties) {
        if !self.is_initialized() {
            return;
        }
        swallow(
            "set_user_properties",
            self.backend.set_person_properties(&properties),
        );
    }

    pub fn reset(&self) {
        if !self.is_initialized() {
            return;
        }
        swallow("reset", self.backend.reset());
    }

    pub fn record(&self, event: Event) {
        self.track(event.name(), Some(event.properties()));
    }
}

fn swallow(op: &str, res: Result<(), AnalyticsError>) {
    if let Err(e) = res {
        log::debug!("analytics {op} dropped: {e}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaAction {
    ViewProjects,
    GetInTouch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    EmailClick,
    GithubVisit,
}

/// The interactions the site reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    HeroCtaClick(CtaAction),
    ProjectFilterChange(ProjectFilter),
    ProjectLinkClick {
        project_id: String,
        project_title: String,
        link: LinkKind,
        url: String,
    },
    SocialLinkClick {
        platform: SocialPlatform,
        url: String,
    },
    Contact(ContactAction),
    ScrollToTopClick,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::HeroCtaClick(_) => "hero_cta_click",
            Event::ProjectFilterChange(_) => "project_filter_change",
            Event::ProjectLinkClick { .. } => "project_link_click",
            Event::SocialLinkClick { .. } => "social_link_click",
            Event::Contact(_) => "contact_action",
            Event::ScrollToTopClick => "scroll_to_top_click",
        }
    }

    pub fn properties(&self) -> Properties {
        match self {
            Event::HeroCtaClick(action) => {
                let action = match action {
                    CtaAction::ViewProjects => "view_projects",
                    CtaAction::GetInTouch => "get_in_touch",
                };
                props([("action", action.into())])
            }
            Event::ProjectFilterChange(filter) => props([("filter", filter.key().into())]),
            Event::ProjectLinkClick {
                project_id,
                project_title,
                link,
                url,
            } => props([
                ("project_id", project_id.as_str().into()),
                ("project_title", project_title.as_str().into()),
                ("link_type", link.key().into()),
                ("url", url.as_str().into()),
            ]),
            Event::SocialLinkClick { platform, url } => props([
                ("platform", platform.name().to_lowercase().into()),
                ("url", url.as_str().into()),
            ]),
            Event::Contact(action) => {
                let action = match action {
                    ContactAction::EmailClick => "email_click",
                    ContactAction::GithubVisit => "github_visit",
                };
                props([("action", action.into())])
            }
            Event::ScrollToTopClick => Properties::new(),
        }
    }
}

fn props<const N: usize>(pairs: [(&str, Value); N]) -> Properties {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// PostHog through the JS snippet loaded by the page shell.
#[cfg(feature = "hydrate")]
pub mod posthog {
    use wasm_bindgen::prelude::*;

    use super::{AnalyticsBackend, AnalyticsConfig, AnalyticsError, Properties};

    #[wasm_bindgen(inline_js = r#"
function ph() {
    if (!window.posthog) {
        throw new Error("posthog is not loaded");
    }
    return window.posthog;
}
export function ph_init(key, options) { ph().init(key, JSON.parse(options)); }
export function ph_capture(event, props) { ph().capture(event, JSON.parse(props)); }
export function ph_identify(id, props) { ph().identify(id, JSON.parse(props)); }
export function ph_set_person_properties(props) { ph().setPersonProperties(JSON.parse(props)); }
export function ph_reset() { ph().reset(); }
export function ph_current_url() { return window.location.href; }
"#)]
    extern "C" {
        #[wasm_bindgen(catch)]
        fn ph_init(key: &str, options: &str) -> Result<(), JsValue>;
        #[wasm_bindgen(catch)]
        fn ph_capture(event: &str, props: &str) -> Result<(), JsValue>;
        #[wasm_bindgen(catch)]
        fn ph_identify(id: &str, props: &str) -> Result<(), JsValue>;
        #[wasm_bindgen(catch)]
        fn ph_set_person_properties(props: &str) -> Result<(), JsValue>;
        #[wasm_bindgen(catch)]
        fn ph_reset() -> Result<(), JsValue>;
        #[wasm_bindgen(catch)]
        fn ph_current_url() -> Result<String, JsValue>;
    }

    fn js_err(e: JsValue) -> AnalyticsError {
        AnalyticsError::CallFailed(format!("{e:?}"))
    }

    fn encode(properties: &Properties) -> String {
        serde_json::Value::Object(properties.clone()).to_string()
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct PosthogBackend;

    impl AnalyticsBackend for PosthogBackend {
        fn init(&self, config: &AnalyticsConfig) -> Result<(), AnalyticsError> {
            let options = serde_json::json!({
                "api_host": config.api_host,
                "autocapture": config.autocapture,
                "capture_pageview": config.capture_pageview,
                "disable_session_recording": config.disable_session_recording,
            });
            ph_init(&config.api_key, &options.to_string())
                .map_err(|e| AnalyticsError::Unavailable(format!("{e:?}")))
        }

        fn capture(&self, event: &str, properties: &Properties) -> Result<(), AnalyticsError> {
            ph_capture(event, &encode(properties)).map_err(js_err)
        }

        fn identify(&self, user_id: &str, properties: &Properties) -> Result<(), AnalyticsError> {
            ph_identify(user_id, &encode(properties)).map_err(js_err)
        }

        fn set_person_properties(&self, properties: &Properties) -> Result<(), AnalyticsError> {
            ph_set_person_properties(&encode(properties)).map_err(js_err)
        }

        fn reset(&self) -> Result<(), AnalyticsError> {
            ph_reset().map_err(js_err)
        }

        fn current_url(&self) -> Option<String> {
            ph_current_url().ok()
        }
    }
}
