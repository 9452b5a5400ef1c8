//! Diagnostics collaborator interface.
//!
//! The core reports failures and short informational texts to an external
//! diagnostics sink (on a UICC this is a display-text proactive command). The
//! sink is fire-and-forget: the core never inspects a return value and never
//! blocks on it.

/// Sink for diagnostic output.
pub trait Diagnostics {
    /// Report a short piece of text, such as the head of an HTTP response.
    fn report_text(&mut self, text: &[u8]);

    /// Report a tagged error with a numeric reason code.
    fn report_error(&mut self, tag: &str, reason: u16);
}

/// A diagnostics sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn report_text(&mut self, _text: &[u8]) {}

    fn report_error(&mut self, _tag: &str, _reason: u16) {}
}
