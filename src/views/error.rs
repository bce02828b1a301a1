use crate::views::text;

pub const ERROR_TITLE: &str = "Terjadi Kesalahan";

/// Error block with a manual reload button.
pub fn error_state(message: &str) -> String {
    format!(
        r#"<div class="error-state">
<div class="error-icon">⚠️</div>
<div class="error-title">{}</div>
<div class="error-message">{}</div>
<button class="btn btn-primary" onclick="location.reload()">Coba Lagi</button>
</div>"#,
        ERROR_TITLE,
        text(message),
    )
}
