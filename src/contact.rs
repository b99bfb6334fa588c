//! Contact form submission.
//!
//! There is no delivery backend; [`NoopTransport`] stands in for one. The
//! transport failure path is still handled so a real transport can be
//! plugged in without touching the page.

use leptos::logging::{log, warn};

use crate::error::{SubmitError, TransportError};
use crate::state::{FormState, PageState};

/// Default time the success banner stays visible.
pub const BANNER_DURATION_MS: u32 = 5_000;

pub trait ContactTransport {
    fn send(&self, form: &FormState) -> Result<(), TransportError>;
}

/// Accepts every message without sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransport;

impl ContactTransport for NoopTransport {
    fn send(&self, _form: &FormState) -> Result<(), TransportError> {
        Ok(())
    }
}

/// Returned on success: when to hide the banner again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerTicket {
    pub deadline_ms: f64,
    pub delay_ms: u32,
}

impl PageState {
    /// Validate and mark the form as submitting. Rejected while a previous
    /// submission is still pending.
    pub fn begin_submit(&mut self) -> Result<FormState, SubmitError> {
        if self.ui.submitting {
            return Err(SubmitError::InFlight);
        }
        self.form.validate()?;
        self.ui.submitting = true;
        Ok(self.form.clone())
    }

    /// Settle a pending submission. On success the form is cleared and the
    /// banner deadline is pushed to `now_ms` plus the banner duration,
    /// replacing any earlier deadline.
    pub fn finish_submit(
        &mut self,
        outcome: Result<(), TransportError>,
        now_ms: f64,
    ) -> Result<BannerTicket, SubmitError> {
        self.ui.submitting = false;
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.ui.success_banner = true;
                let delay_ms = self.banner_duration_ms;
                let deadline_ms = now_ms + f64::from(delay_ms);
                self.banner_deadline = Some(deadline_ms);
                log!("Contact request accepted");
                Ok(BannerTicket {
                    deadline_ms,
                    delay_ms,
                })
            }
            Err(e) => {
                warn!("Contact request failed: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn submit(
        &mut self,
        transport: &dyn ContactTransport,
        now_ms: f64,
    ) -> Result<BannerTicket, SubmitError> {
        let snapshot = self.begin_submit()?;
        let outcome = transport.send(&snapshot);
        self.finish_submit(outcome, now_ms)
    }

    /// Hide the banner if the latest deadline has passed. A timer belonging
    /// to an earlier submission finds a later deadline and does nothing.
    pub fn expire_banner(&mut self, now_ms: f64) -> bool {
        match self.banner_deadline {
            Some(deadline) if now_ms >= deadline => {
                self.banner_deadline = None;
                self.ui.success_banner = false;
                true
            }
            _ => false,
        }
    }
}
