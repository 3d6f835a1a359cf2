use std::future::Future;

use contracts::domain::a007_asset_component::aggregate::{TransferForm, TransferPayload};
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a007_asset_component::api::{transfer_component, AssetComponentApi};
use crate::shared::api_utils::ApiError;
use crate::shared::crud_page::CrudPage;
use crate::shared::notifier::{use_notifier, BrowserNotifier, Notifier, NotifyKind};

/// Validate and send a transfer. An invalid form sends nothing.
/// Returns `true` when the backend accepted it.
pub async fn submit_transfer<N, F, Fut>(
    notifier: &N,
    payload: Result<TransferPayload, ValidationError>,
    send: F,
) -> bool
where
    N: Notifier,
    F: FnOnce(TransferPayload) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let payload = match payload {
        Ok(p) => p,
        Err(e) => {
            notifier.notify(NotifyKind::Warning, &e.to_string());
            return false;
        }
    };

    match send(payload).await {
        Ok(()) => {
            log::info!("component transferred");
            notifier.notify(NotifyKind::Success, "Component transferred");
            true
        }
        Err(e) => {
            notifier.notify(NotifyKind::Error, &e.display_message("Failed to transfer component"));
            false
        }
    }
}

#[derive(Clone, Copy)]
pub struct TransferViewModel {
    pub form: RwSignal<TransferForm>,
    component_id: i64,
    page: CrudPage<AssetComponentApi>,
    notifier: BrowserNotifier,
}

impl TransferViewModel {
    pub fn new(page: CrudPage<AssetComponentApi>, component_id: i64) -> Self {
        Self {
            form: RwSignal::new(TransferForm::default()),
            component_id,
            page,
            notifier: use_notifier(),
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form
            .with(|f| !f.to_employee_id.is_empty() && !f.reason.trim().is_empty())
    }

    /// Send, then refetch the components list; `on_done` closes the dialog
    pub fn transfer_command(&self, on_done: Callback<()>) {
        let this = *self;
        let payload = self.form.with_untracked(|f| f.to_payload());
        spawn_local(async move {
            let id = this.component_id;
            let sent = submit_transfer(&this.notifier, payload, |p| async move {
                transfer_component(id, &p).await
            })
            .await;
            if sent {
                this.page.refresh();
                on_done.run(());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::testing::RecordingNotifier;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_missing_reason_sends_nothing() {
        let notifier = RecordingNotifier::default();
        let calls = Cell::new(0);
        let form = TransferForm {
            to_employee_id: "3".into(),
            reason: "   ".into(),
            remarks: String::new(),
        };

        let sent = block_on(submit_transfer(&notifier, form.to_payload(), |_| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        }));
        assert!(!sent);
        assert_eq!(calls.get(), 0);
        assert_eq!(notifier.last(), Some((NotifyKind::Warning, "Reason is required".to_string())));
    }

    #[test]
    fn test_transfer_sends_null_remarks() {
        let notifier = RecordingNotifier::default();
        let form = TransferForm {
            to_employee_id: "3".into(),
            reason: " Replacement ".into(),
            remarks: String::new(),
        };

        let sent = block_on(submit_transfer(&notifier, form.to_payload(), |p| async move {
            assert_eq!(
                p,
                TransferPayload {
                    to_employee_id: 3,
                    reason: "Replacement".into(),
                    remarks: None,
                }
            );
            Ok(())
        }));
        assert!(sent);
        assert_eq!(notifier.last(), Some((NotifyKind::Success, "Component transferred".to_string())));
    }

    #[test]
    fn test_rejected_transfer_shows_server_message() {
        let notifier = RecordingNotifier::default();
        let form = TransferForm {
            to_employee_id: "3".into(),
            reason: "Moved".into(),
            remarks: String::new(),
        };

        let sent = block_on(submit_transfer(&notifier, form.to_payload(), |_| async {
            Err(ApiError::Rejected(contracts::shared::api::ApiFailure {
                message: Some("Component is already assigned to this employee".into()),
                field_errors: vec![],
            }))
        }));
        assert!(!sent);
        assert_eq!(
            notifier.last(),
            Some((
                NotifyKind::Error,
                "Component is already assigned to this employee".to_string()
            ))
        );
    }
}
