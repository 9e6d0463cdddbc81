//! Inlined client assets: the stylesheet and the scroll-sync script.

use crate::error::BuildError;
use crate::outline::HeadingRecord;

/// The single built-in stylesheet
pub const STYLESHEET: &str = include_str!("../assets/page.css");

/// Browser side of [`crate::scroll`]; defines and auto-runs `initializeToc()`
pub const TOC_SCRIPT: &str = include_str!("../assets/toc.js");

/// Script body for an interactive page: the TOC data globals followed by the
/// controller.
pub fn toc_script(records: &[HeadingRecord], scroll_offset: u32) -> Result<String, BuildError> {
    let data = script_safe_json(records)?;
    Ok(format!(
        "window.__TOC_DATA__ = {data};\nwindow.__TOC_OFFSET__ = {scroll_offset};\n{TOC_SCRIPT}"
    ))
}

/// JSON that can sit inside `<script>` without ending it. `<` only ever occurs
/// inside JSON strings, where the `\u003c` escape decodes back to `<`.
pub fn script_safe_json(records: &[HeadingRecord]) -> Result<String, BuildError> {
    let json = serde_json::to_string(records)?;
    Ok(json.replace('<', "\\u003c"))
}
