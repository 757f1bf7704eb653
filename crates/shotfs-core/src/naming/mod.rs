//! Screenshot filename derivation.
//!
//! A screenshot is named after the browser, the viewport width and the page
//! URL, e.g. `chrome__1024__example.com_about.png`. The scheme is dropped and
//! every `/` becomes `_`; nothing else is escaped, so URLs carrying characters
//! the filesystem rejects must be cleaned by the caller.

mod scheme;

pub use scheme::strip_scheme;

/// Image extension appended to every screenshot name.
pub const SCREENSHOT_EXTENSION: &str = "png";

/// Builds the canonical screenshot filename for one browser and width.
///
/// # Examples
///
/// - `screenshot_filename("https://example.com/img.png", 1024, "chrome")` → `"chrome__1024__example.com_img.png.png"`
/// - `screenshot_filename("example.com/a/b", 500, "firefox")` → `"firefox__500__example.com_a_b.png"`
pub fn screenshot_filename(url: &str, width: u32, browser: &str) -> String {
    let sanitized = strip_scheme(url).replace('/', "_");
    format!("{browser}__{width}__{sanitized}.{SCREENSHOT_EXTENSION}")
}

/// One filename per (browser, width) pair, grouped by browser, both in the
/// order given.
pub fn screenshot_filenames<S: AsRef<str>>(url: &str, widths: &[u32], browsers: &[S]) -> Vec<String> {
    browsers
        .iter()
        .flat_map(|browser| {
            widths
                .iter()
                .map(move |&width| screenshot_filename(url, width, browser.as_ref()))
        })
        .collect()
}
