// src/utils/url.rs

//! URL manipulation utilities.

/// Make a media reference absolute against a site origin, exactly once.
///
/// Already-absolute URLs are returned untouched, so repeated calls never
/// double-prefix. Root-relative paths (`/media/x.jpg`) are joined directly
/// onto the origin; bare relative paths get a single separating slash.
///
/// # Examples
/// ```
/// use truthline::utils::url::absolutize;
///
/// assert_eq!(
///     absolutize("https://truthsocial.com", "/media/a.jpg"),
///     "https://truthsocial.com/media/a.jpg"
/// );
/// assert_eq!(
///     absolutize("https://truthsocial.com", "media/a.jpg"),
///     "https://truthsocial.com/media/a.jpg"
/// );
/// ```
pub fn absolutize(origin: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    let origin = origin.trim_end_matches('/');
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}

/// Extract the path component of a URL, lowercased, with query and
/// fragment stripped. Falls back to cutting at `?`/`#` for strings the
/// `url` crate cannot parse.
pub fn path_of(raw: &str) -> String {
    if let Ok(parsed) = url::Url::parse(raw) {
        return parsed.path().to_ascii_lowercase();
    }

    let without_fragment = raw.split('#').next().unwrap_or(raw);
    let without_query = without_fragment.split('?').next().unwrap_or(raw);
    without_query.to_ascii_lowercase()
}
