use folio_core::guide::{parse_config, parse_messages, CONFIG_PATH, MESSAGES_PATH};
use folio_core::{GuideSettings, LoadError, SettingsSource};
use futures_util::future::join;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::dom;
use crate::settings;

pub(crate) async fn load_guide_settings() -> GuideSettings {
    load_guide_settings_from(
        &settings::asset_url(MESSAGES_PATH),
        &settings::asset_url(CONFIG_PATH),
    )
    .await
}

/// Fetches both documents concurrently and settles them. Failures are logged
/// and never retried.
pub(crate) async fn load_guide_settings_from(messages_url: &str, config_url: &str) -> GuideSettings {
    let (messages, config) = join(fetch_text(messages_url), fetch_text(config_url)).await;
    let messages = messages.and_then(|raw| {
        parse_messages(&raw).map_err(|err| LoadError::Body {
            url: messages_url.to_string(),
            reason: err.to_string(),
        })
    });
    let config = config.and_then(|raw| {
        parse_config(&raw).map_err(|err| LoadError::Body {
            url: config_url.to_string(),
            reason: err.to_string(),
        })
    });
    for err in [messages.as_ref().err(), config.as_ref().err()].into_iter().flatten() {
        gloo::console::warn!("character guide: falling back to defaults", err.to_string());
    }
    let settings = GuideSettings::settle(messages, config);
    if settings.source() == SettingsSource::Loaded {
        gloo::console::log!("character guide: config loaded");
    }
    settings
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let network = |reason: String| LoadError::Network {
        url: url.to_string(),
        reason,
    };
    let window = web_sys::window().ok_or_else(|| network("missing window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| network(dom::js_err(err)))?;
    let response = value
        .dyn_into::<Response>()
        .map_err(|err| network(dom::js_err(err)))?;
    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    let body = |reason: String| LoadError::Body {
        url: url.to_string(),
        reason,
    };
    let promise = response.text().map_err(|err| body(dom::js_err(err)))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| body(dom::js_err(err)))?;
    text.as_string()
        .ok_or_else(|| body("response body is not text".to_string()))
}
