//! Asset URL resolution.

/// Image served when a record has no asset reference.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/800/600";

/// Turn a stored asset reference into a fetchable URL.
///
/// - empty or absent: [`PLACEHOLDER_IMAGE_URL`]
/// - already an `http(s)://` URL (e.g. seeded records): unchanged
/// - otherwise a Directus file id: `<base_url>/assets/<id>`
pub fn resolve_asset_url(base_url: &str, id: Option<&str>) -> String {
    match id.map(str::trim) {
        None | Some("") => PLACEHOLDER_IMAGE_URL.to_string(),
        Some(id) if is_absolute_url(id) => id.to_string(),
        Some(id) => format!("{}/assets/{}", base_url.trim_end_matches('/'), id),
    }
}

fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
