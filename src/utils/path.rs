//! Resolution of user-supplied CSV paths.

use std::path::PathBuf;

/// Expand a leading `~` (alone or as `~/...`) to the home directory.
/// Paths without it, or with no known home, are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => &rest[1..],
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
