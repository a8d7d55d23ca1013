use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIME_ZONE: &str = "Asia/Kolkata";
pub const DEFAULT_POLL_INTERVAL_SECS: u32 = 15;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
    #[serde(default, alias = "POLL_INTERVAL_SECS")]
    pub poll_interval_secs: Option<u32>,
}

impl RuntimeConfig {
    /// Fields set on `self` win; the rest are taken from `other`.
    pub fn merge(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            time_zone: self.time_zone.or(other.time_zone),
            poll_interval_secs: self.poll_interval_secs.or(other.poll_interval_secs),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub time_zone: Tz,
    pub poll_interval_secs: u32,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(RuntimeConfig::default())
    }
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

pub fn resolve(raw: RuntimeConfig) -> ResolvedConfig {
    let api_base_url = raw
        .api_base_url
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let time_zone = raw
        .time_zone
        .as_deref()
        .and_then(|name| match name.trim().parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                log::warn!("unknown time zone '{}', falling back to {}", name, DEFAULT_TIME_ZONE);
                None
            }
        })
        .unwrap_or(chrono_tz::Asia::Kolkata);
    let poll_interval_secs = raw
        .poll_interval_secs
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
    ResolvedConfig {
        api_base_url,
        time_zone,
        poll_interval_secs,
    }
}

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    // Optional global object, e.g. window.__SALON_ENV = { API_BASE_URL: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let field = |keys: &[&str]| {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        })
    };
    Some(RuntimeConfig {
        api_base_url: field(&["API_BASE_URL", "api_base_url"]).and_then(|v| v.as_string()),
        time_zone: field(&["TIME_ZONE", "time_zone"]).and_then(|v| v.as_string()),
        poll_interval_secs: field(&["POLL_INTERVAL_SECS", "poll_interval_secs"])
            .and_then(|v| v.as_f64())
            .map(|secs| secs as u32),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_name: &str) -> Option<RuntimeConfig> {
    None
}

fn snapshot_from_globals() -> RuntimeConfig {
    let env = read_global("__SALON_ENV").unwrap_or_default();
    let config = read_global("__SALON_CONFIG").unwrap_or_default();
    env.merge(config)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Resolves the runtime configuration once; later calls return the cached value.
pub async fn init() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let mut raw = snapshot_from_globals();
    if raw.api_base_url.is_none() {
        if let Some(file) = fetch_runtime_config().await {
            raw = raw.merge(file);
        }
    }
    let resolved = resolve(raw);
    log::info!(
        "runtime config: api={} tz={} poll={}s",
        resolved.api_base_url,
        resolved.time_zone,
        resolved.poll_interval_secs
    );
    RESOLVED.get_or_init(|| resolved).clone()
}

pub fn current() -> ResolvedConfig {
    RESOLVED.get().cloned().unwrap_or_default()
}

pub async fn await_api_base_url() -> String {
    init().await.api_base_url
}

pub fn current_time_zone() -> Tz {
    current().time_zone
}

pub fn poll_interval_secs() -> u32 {
    current().poll_interval_secs
}
