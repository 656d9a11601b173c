use folio_core::contact::DEFAULT_CONTACT_ENDPOINT;

pub(crate) const CHARACTER_IMAGE_PATH: &str = "assets/omkar.jpeg";
pub(crate) const CHARACTER_IMAGE_ALT: &str = "Guide Character";
pub(crate) const CHARACTER_FALLBACK_GLYPH: &str = "🧑‍💻";
pub(crate) const RESUME_PATH: &str = "assets/OmkarResume.pdf";
pub(crate) const RESUME_FILE_NAME: &str = "OmkarResume.pdf";
pub(crate) const PRELOAD_IMAGES: &[&str] = &["src/assets/hero-background.jpg"];
pub(crate) const HERO_INTRO_DELAY_MS: u32 = 300;

pub(crate) fn contact_endpoint() -> String {
    build_override(
        option_env!("FOLIO_CONTACT_ENDPOINT")
            .or(option_env!("TRUNK_PUBLIC_FOLIO_CONTACT_ENDPOINT")),
    )
    .unwrap_or_else(|| DEFAULT_CONTACT_ENDPOINT.to_string())
}

pub(crate) fn asset_url(path: &str) -> String {
    let base = build_override(
        option_env!("FOLIO_ASSET_BASE").or(option_env!("TRUNK_PUBLIC_FOLIO_ASSET_BASE")),
    );
    join_asset(base.as_deref().unwrap_or(""), path)
}

fn build_override(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn join_asset(base: &str, path: &str) -> String {
    let base = base.trim();
    if base.is_empty() {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn asset_paths_stay_page_relative_without_base() {
        assert_eq!(join_asset("", "character-config.json"), "character-config.json");
        assert_eq!(join_asset("  ", "assets/omkar.jpeg"), "assets/omkar.jpeg");
    }

    #[wasm_bindgen_test]
    fn asset_base_is_joined_with_one_slash() {
        assert_eq!(
            join_asset("https://cdn.example.com/site/", "/character-messages.json"),
            "https://cdn.example.com/site/character-messages.json"
        );
        assert_eq!(join_asset("static", "assets/omkar.jpeg"), "static/assets/omkar.jpeg");
    }

    #[wasm_bindgen_test]
    fn empty_override_is_ignored() {
        assert_eq!(build_override(Some("   ")), None);
        assert_eq!(build_override(None), None);
        assert_eq!(
            build_override(Some(" https://example.com/f/x ")),
            Some("https://example.com/f/x".to_string())
        );
    }
}
