use std::io::Write;

use crate::domain::{FormState, FormView};

// Form view for the command line: alerts are written to `out`, state changes are logged.
pub struct TerminalView<W> {
    state: FormState,
    out: W,
}

impl<W> TerminalView<W>
where
    W: Write,
{
    pub fn new(state: FormState, out: W) -> Self {
        Self { state, out }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W> FormView for TerminalView<W>
where
    W: Write,
{
    fn set_submitting(&mut self, submitting: bool) {
        let control = self.state.submit_control_mut();
        control.set_busy(submitting);
        tracing::debug!(
            enabled = control.is_enabled(),
            label = control.label(),
            "submit control updated."
        );
    }

    fn clear_fields(&mut self) {
        self.state.reset();
    }

    fn alert(&mut self, message: &str) {
        if let Err(err) = writeln!(self.out, "{message}") {
            tracing::error!(error = %err, "failed to write alert.");
        }
    }

    fn close_modal(&mut self) {
        self.state.close_modal();
        tracing::debug!(form = self.state.kind().name(), "modal closed.");
    }
}
