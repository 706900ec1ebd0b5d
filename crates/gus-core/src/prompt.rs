//! Confirmation capability used by the scope-recovery flow

/// Asks a human a yes/no question
///
/// The status client only ever needs this one interaction, so the binary can
/// back it with a terminal prompt while tests script the answers.
pub trait Confirm {
    /// Show an informational notice before a question. Default: ignore it.
    fn notice(&self, _message: &str) {}

    /// Ask `question`; `default` is the answer assumed on empty input
    fn confirm(&self, question: &str, default: bool) -> std::io::Result<bool>;
}

impl<T: Confirm + ?Sized> Confirm for &T {
    fn notice(&self, message: &str) {
        (**self).notice(message)
    }

    fn confirm(&self, question: &str, default: bool) -> std::io::Result<bool> {
        (**self).confirm(question, default)
    }
}
