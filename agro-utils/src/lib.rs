//! Shared utility functions for the agro advisor crates.

/// Display formatting for values coming back from the advice endpoint.
pub mod format {
    /// Placeholder shown when a value is missing from the response.
    pub const NOT_AVAILABLE: &str = "N/A";

    /// Format a number the way a browser prints it: integers without a
    /// trailing `.0`, everything else with the shortest exact repr.
    pub fn number(value: f64) -> String {
        if !value.is_finite() {
            return NOT_AVAILABLE.to_string();
        }
        if value == 0.0 {
            // Avoid "-0"
            return "0".to_string();
        }
        format!("{}", value)
    }

    /// Format a 0-1 fraction as a percentage with a fixed number of decimals.
    ///
    /// `percent(0.87, 2)` is `"87.00%"`.
    pub fn percent(fraction: f64, decimals: usize) -> String {
        format!("{:.*}%", decimals, fraction * 100.0)
    }

    /// Format an optional number followed by a unit suffix, or `N/A`.
    pub fn with_unit(value: Option<f64>, unit: &str) -> String {
        match value {
            Some(v) if v.is_finite() => format!("{}{}", number(v), unit),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_number_drops_trailing_zero() {
            assert_eq!(number(28.0), "28");
            assert_eq!(number(28.5), "28.5");
            assert_eq!(number(-3.25), "-3.25");
            assert_eq!(number(-0.0), "0");
        }

        #[test]
        fn test_number_non_finite() {
            assert_eq!(number(f64::NAN), NOT_AVAILABLE);
            assert_eq!(number(f64::INFINITY), NOT_AVAILABLE);
        }

        #[test]
        fn test_percent() {
            assert_eq!(percent(0.87, 2), "87.00%");
            assert_eq!(percent(0.87, 1), "87.0%");
            assert_eq!(percent(0.13, 1), "13.0%");
            assert_eq!(percent(1.0, 2), "100.00%");
        }

        #[test]
        fn test_with_unit() {
            assert_eq!(with_unit(Some(28.0), " °C"), "28 °C");
            assert_eq!(with_unit(Some(60.0), "%"), "60%");
            assert_eq!(with_unit(None, "%"), "N/A");
        }
    }
}

/// MIME type helpers
pub mod mime {
    use std::path::Path;

    /// Fallback type for files whose extension is unknown.
    pub const OCTET_STREAM: &str = "application/octet-stream";

    /// True when the declared MIME type names an image (`image/...`).
    pub fn is_image(mime_type: &str) -> bool {
        mime_type.starts_with("image/")
    }

    /// Guess a MIME type from a file extension.
    pub fn from_path(path: &Path) -> &'static str {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("bmp") => "image/bmp",
            Some("tif") | Some("tiff") => "image/tiff",
            _ => OCTET_STREAM,
        }
    }

}
