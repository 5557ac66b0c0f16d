//! Utility functions shared across the codebase

/// Convert an asset path to the correct format for the current platform.
/// On desktop: paths are relative to the working directory (e.g., "assets/alchemy.toml")
/// On Android: paths are relative to the APK's assets folder (e.g., "alchemy.toml")
pub fn asset_path(path: &str) -> String {
    #[cfg(target_os = "android")]
    {
        if let Some(stripped) = path.strip_prefix("assets/") {
            stripped.to_string()
        } else {
            path.to_string()
        }
    }
    #[cfg(not(target_os = "android"))]
    {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_os = "android"))]
    #[test]
    fn test_asset_path_desktop_passthrough() {
        assert_eq!(asset_path("assets/alchemy.toml"), "assets/alchemy.toml");
    }
}
