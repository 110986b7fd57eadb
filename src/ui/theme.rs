//! Visual theme and styling.

use console::Style;

/// Cartgate's visual theme.
#[derive(Debug, Clone)]
pub struct CartgateTheme {
    /// Admitted decisions (green).
    pub success: Style,
    /// Warnings (yellow).
    pub warning: Style,
    /// Denials and errors (red bold).
    pub error: Style,
    /// Secondary text (dim).
    pub dim: Style,
    /// Headers (bold cyan).
    pub header: Style,
    /// Key labels in detail lines (bold).
    pub key: Style,
}

impl Default for CartgateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CartgateTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().cyan(),
            key: Style::new().bold(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            key: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a detail line, with the key padded for alignment.
    pub fn format_detail(&self, key: &str, value: &str) -> String {
        format!(
            "  {} {}",
            self.key.apply_to(format!("{:<12}", format!("{}:", key))),
            value
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
