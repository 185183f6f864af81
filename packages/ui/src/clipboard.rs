use dioxus::prelude::*;

/// Copy `url` to the clipboard.
///
/// Failures are logged and otherwise ignored.
pub fn copy_link(url: String) {
    let literal = match serde_json::to_string(&url) {
        Ok(literal) => literal,
        Err(e) => {
            tracing::warn!("Failed to encode link {}: {}", url, e);
            return;
        }
    };

    spawn(async move {
        let script = format!("navigator.clipboard.writeText({literal});");
        match document::eval(&script).await {
            Ok(_) => tracing::debug!("Copied {} to clipboard", url),
            Err(e) => tracing::warn!("Failed to copy link: {:?}", e),
        }
    });
}
