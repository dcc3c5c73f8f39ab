//! Non-fatal advisories emitted alongside a successful parse.
//!
//! Advisories never change a returned value. They are delivered to a
//! [`DiagnosticSink`] supplied by the caller; the default sink logs them
//! through `tracing`.

use std::fmt;

/// An advisory about a value that parsed but looks implausible.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A weight above the configured plausibility threshold.
    UnusuallyHighWeight { pounds: f64, threshold: f64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnusuallyHighWeight { pounds, .. } => {
                write!(
                    f,
                    "result {pounds:.1} lbs is unusually high for human weight"
                )
            }
        }
    }
}

/// Receiver for advisories. Implementations must return promptly.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn emit(&self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// Logs advisories at `warn` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnusuallyHighWeight { pounds, threshold } => {
                tracing::warn!(pounds, threshold, "{diagnostic}");
            }
        }
    }
}

/// Discards advisories.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn closures_are_sinks() {
        let seen = Mutex::new(Vec::new());
        let sink = |diagnostic: &Diagnostic| seen.lock().unwrap().push(diagnostic.clone());
        sink.emit(&Diagnostic::UnusuallyHighWeight {
            pounds: 2000.0,
            threshold: 1500.0,
        });
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn message_rounds_to_one_decimal() {
        let diagnostic = Diagnostic::UnusuallyHighWeight {
            pounds: 2204.62262,
            threshold: 1500.0,
        };
        assert_eq!(
            diagnostic.to_string(),
            "result 2204.6 lbs is unusually high for human weight"
        );
    }
}
