use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

use crate::config::MissingIdPolicy;
use crate::error::VerifyError;
use crate::models::{VerificationRequest, VerificationResult};
use crate::services::appointment_service::AppointmentApi;

/// One mounted verification view.
///
/// Owns its `VerificationResult` and issues at most one backend call over
/// its whole lifetime. Once unmounted (explicitly or by drop), a response
/// that is still in flight is discarded instead of applied.
pub struct VerificationView {
    instance: Uuid,
    request: Option<VerificationRequest>,
    missing_id: MissingIdPolicy,
    api: Arc<dyn AppointmentApi>,
    state: Arc<watch::Sender<VerificationResult>>,
    mounted: Arc<AtomicBool>,
    issued: AtomicBool,
}

impl VerificationView {
    pub fn new(
        api: Arc<dyn AppointmentApi>,
        request: Option<VerificationRequest>,
        missing_id: MissingIdPolicy,
    ) -> Self {
        let (state, _) = watch::channel(VerificationResult::Pending);
        Self {
            instance: Uuid::new_v4(),
            request,
            missing_id,
            api,
            state: Arc::new(state),
            mounted: Arc::new(AtomicBool::new(true)),
            issued: AtomicBool::new(false),
        }
    }

    pub fn instance(&self) -> Uuid {
        self.instance
    }

    pub fn request(&self) -> Option<&VerificationRequest> {
        self.request.as_ref()
    }

    /// Starts verification. Only the first call does anything; it returns
    /// true when a backend request was issued.
    pub fn mount(&self) -> bool {
        if self.issued.swap(true, Ordering::SeqCst) || !self.is_mounted() {
            return false;
        }

        let Some(request) = self.request.clone() else {
            match self.missing_id {
                MissingIdPolicy::Wait => {
                    log::warn!("view {}: no appointment identifier, staying in loading state", self.instance);
                }
                MissingIdPolicy::Fail => {
                    self.state
                        .send_modify(|s| {
                            s.settle(Err(VerifyError::MissingIdentifier));
                        });
                }
            }
            return false;
        };

        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let mounted = Arc::clone(&self.mounted);
        let instance = self.instance;

        tokio::spawn(async move {
            let outcome = api.fetch_verification(request.id()).await;
            if let Err(e) = &outcome {
                log::warn!("view {}: verification of {} failed: {}", instance, request.id(), e);
            }
            // Checked under the watch lock so an unmount cannot slip in between.
            state.send_if_modified(|s| {
                if !mounted.load(Ordering::SeqCst) {
                    log::debug!("view {}: discarding late verification result", instance);
                    return false;
                }
                s.settle(outcome)
            });
        });

        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Stops the view from accepting any further state change.
    pub fn unmount(&self) {
        // Flipped under the watch lock; nothing changes, so no one is woken.
        let mounted = &self.mounted;
        let mut was_mounted = false;
        self.state.send_if_modified(|_| {
            was_mounted = mounted.swap(false, Ordering::SeqCst);
            false
        });
        if was_mounted {
            log::debug!("view {} unmounted", self.instance);
        }
    }

    pub fn current(&self) -> VerificationResult {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<VerificationResult> {
        self.state.subscribe()
    }

    /// Waits for the terminal state. Resolves to the current state straight
    /// away when no transition can happen any more: never mounted, already
    /// unmounted, or no identifier to fetch.
    pub async fn settled(&self) -> VerificationResult {
        let current = self.current();
        if !current.is_pending() || !self.is_mounted() {
            return current;
        }
        if !self.issued.load(Ordering::SeqCst) || self.request.is_none() {
            return current;
        }

        let mut rx = self.subscribe();
        // The sender lives as long as `self`, so this only errors after drop.
        let settled = match rx.wait_for(|s| !s.is_pending()).await {
            Ok(state) => state.clone(),
            Err(_) => self.current(),
        };
        settled
    }
}

impl Drop for VerificationView {
    fn drop(&mut self) {
        self.unmount();
    }
}
