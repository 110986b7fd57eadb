//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing styled lines to stdout
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use cartgate::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Admitted");
//! assert!(ui.has_success("Admitted"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, CartgateTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a header line.
    fn show_header(&mut self, title: &str);

    /// Show a `key: value` detail line.
    fn show_detail(&mut self, key: &str, value: &str);

    /// Write machine-readable output verbatim, regardless of mode.
    fn data(&mut self, text: &str);
}
