//! The validate-build-launch pipeline shared by every platform.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::intent::{
    IntentLauncher, ShareIntent, MIME_IMAGE, MIME_PDF, PROVIDER_AUTHORITY_SUFFIX, WHATSAPP_PACKAGE,
};
use crate::models::{
    derive_jid, methods, ImageShareArgs, ImageShareRequest, PdfShareArgs, PdfShareRequest,
    ShareRequest,
};

/// Stateless bridge between the application layer and the OS intent system.
///
/// Each call validates its arguments, builds exactly one send intent
/// restricted to WhatsApp and hands it to the injected launcher. Calls are
/// independent; nothing is retained between invocations, and a launcher
/// failure on one call has no effect on the next.
pub struct ShareBridge<L> {
    launcher: L,
}

impl<L: IntentLauncher> ShareBridge<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Single entry point keyed by operation name, for embedders that drive
    /// the bridge over a generic method channel. Unknown names get
    /// [`Error::UnsupportedOperation`], the "not implemented" response.
    pub fn handle(&self, operation: &str, args: &Value) -> Result<()> {
        match operation {
            methods::SEND_PDF => self.share_pdf(PdfShareArgs {
                file_path: opt_str(args, "filePath"),
                contact: opt_str(args, "contact"),
            }),
            methods::SEND_IMAGE => self.share_image(ImageShareArgs {
                file_path: opt_str(args, "filePath"),
                phone: opt_str(args, "phone"),
            }),
            other => Err(Error::UnsupportedOperation(other.to_string())),
        }
    }

    /// Share a PDF file to WhatsApp.
    pub fn share_pdf(&self, args: PdfShareArgs) -> Result<()> {
        self.dispatch(ShareRequest::Pdf(args.validate()?))
    }

    /// Share an image to WhatsApp, pre-addressed to the derived jid.
    pub fn share_image(&self, args: ImageShareArgs) -> Result<()> {
        self.dispatch(ShareRequest::Image(args.validate()?))
    }

    fn dispatch(&self, request: ShareRequest) -> Result<()> {
        let intent = build_intent(&request);
        debug!(
            "Dispatching {} share intent to {}",
            intent.mime_type, intent.package
        );
        self.launcher.launch(&intent).map_err(|e| {
            // Dispatch failures surface to the caller for both operations.
            warn!("Share intent dispatch failed: {e}");
            e
        })
    }
}

/// Build the outgoing intent for a validated request.
pub fn build_intent(request: &ShareRequest) -> ShareIntent {
    let (mime_type, file_path, jid) = match request {
        ShareRequest::Pdf(PdfShareRequest { file_path, .. }) => (MIME_PDF, file_path, None),
        ShareRequest::Image(ImageShareRequest { file_path, phone }) => {
            (MIME_IMAGE, file_path, Some(derive_jid(phone)))
        }
    };
    ShareIntent {
        mime_type: mime_type.to_string(),
        file_path: file_path.clone(),
        provider_authority_suffix: PROVIDER_AUTHORITY_SUFFIX.to_string(),
        package: WHATSAPP_PACKAGE.to_string(),
        jid,
        grant_read_uri_permission: true,
    }
}

/// A missing key and a non-string value both read as absent.
fn opt_str(args: &Value, key: &str) -> Option<String> {
    args.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct RecordingLauncher {
        launched: RefCell<Vec<ShareIntent>>,
    }

    impl IntentLauncher for RecordingLauncher {
        fn launch(&self, intent: &ShareIntent) -> crate::Result<()> {
            self.launched.borrow_mut().push(intent.clone());
            Ok(())
        }
    }

    /// Simulates WhatsApp being absent from the device.
    struct AppAbsentLauncher;

    impl IntentLauncher for AppAbsentLauncher {
        fn launch(&self, _intent: &ShareIntent) -> crate::Result<()> {
            Err(Error::DispatchFailed("WhatsApp is not installed".into()))
        }
    }

    fn pdf_args(file_path: &str, contact: &str) -> PdfShareArgs {
        PdfShareArgs {
            file_path: Some(file_path.to_string()),
            contact: Some(contact.to_string()),
        }
    }

    fn image_args(file_path: &str, phone: &str) -> ImageShareArgs {
        ImageShareArgs {
            file_path: Some(file_path.to_string()),
            phone: Some(phone.to_string()),
        }
    }

    #[test]
    fn test_pdf_share_dispatches_single_intent() {
        let bridge = ShareBridge::new(RecordingLauncher::default());
        bridge.share_pdf(pdf_args("/tmp/doc.pdf", "12345")).unwrap();

        let launched = bridge.launcher.launched.borrow();
        assert_eq!(launched.len(), 1);
        let intent = &launched[0];
        assert_eq!(intent.mime_type, MIME_PDF);
        assert_eq!(intent.file_path, "/tmp/doc.pdf");
        assert_eq!(intent.package, WHATSAPP_PACKAGE);
        assert_eq!(intent.provider_authority_suffix, PROVIDER_AUTHORITY_SUFFIX);
        assert!(intent.grant_read_uri_permission);
        // The contact never reaches the intent payload.
        assert!(intent.jid.is_none());
    }

    #[test]
    fn test_image_share_carries_derived_jid() {
        let bridge = ShareBridge::new(RecordingLauncher::default());
        bridge
            .share_image(image_args("/tmp/pic.jpg", "+1 555 0100"))
            .unwrap();

        let launched = bridge.launcher.launched.borrow();
        assert_eq!(launched.len(), 1);
        let intent = &launched[0];
        assert_eq!(intent.mime_type, MIME_IMAGE);
        assert_eq!(intent.package, WHATSAPP_PACKAGE);
        assert_eq!(intent.jid.as_deref(), Some("15550100@s.whatsapp.net"));
        assert!(intent.grant_read_uri_permission);
    }

    #[test]
    fn test_missing_argument_builds_no_intent() {
        let bridge = ShareBridge::new(RecordingLauncher::default());

        let err = bridge
            .share_pdf(PdfShareArgs {
                file_path: Some("/tmp/doc.pdf".into()),
                contact: None,
            })
            .unwrap_err();
        assert!(matches!(err, Error::MissingArgument(field) if field == "contact"));

        let err = bridge
            .share_image(ImageShareArgs {
                file_path: None,
                phone: Some("+1 555 0100".into()),
            })
            .unwrap_err();
        assert!(matches!(err, Error::MissingArgument(field) if field == "filePath"));

        assert!(bridge.launcher.launched.borrow().is_empty());
    }

    #[test]
    fn test_handle_dispatches_by_operation_name() {
        let bridge = ShareBridge::new(RecordingLauncher::default());

        bridge
            .handle(
                methods::SEND_PDF,
                &json!({"filePath": "/tmp/doc.pdf", "contact": "12345"}),
            )
            .unwrap();
        bridge
            .handle(
                methods::SEND_IMAGE,
                &json!({"filePath": "/tmp/pic.jpg", "phone": "+92 300 1234567"}),
            )
            .unwrap();

        let launched = bridge.launcher.launched.borrow();
        assert_eq!(launched.len(), 2);
        assert_eq!(launched[0].mime_type, MIME_PDF);
        assert_eq!(launched[1].mime_type, MIME_IMAGE);
        assert_eq!(
            launched[1].jid.as_deref(),
            Some("923001234567@s.whatsapp.net")
        );
    }

    #[test]
    fn test_handle_reports_missing_arguments() {
        let bridge = ShareBridge::new(RecordingLauncher::default());

        let err = bridge
            .handle(methods::SEND_PDF, &json!({"filePath": "/tmp/doc.pdf"}))
            .unwrap_err();
        assert!(matches!(err, Error::MissingArgument(field) if field == "contact"));

        // A non-string value reads as absent.
        let err = bridge
            .handle(
                methods::SEND_IMAGE,
                &json!({"filePath": "/tmp/pic.jpg", "phone": 15550100}),
            )
            .unwrap_err();
        assert!(matches!(err, Error::MissingArgument(field) if field == "phone"));

        assert!(bridge.launcher.launched.borrow().is_empty());
    }

    #[test]
    fn test_handle_rejects_unknown_operation() {
        let bridge = ShareBridge::new(RecordingLauncher::default());
        let err = bridge
            .handle("sendVideoToWhatsApp", &json!({}))
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation(op) if op == "sendVideoToWhatsApp"));
        assert!(bridge.launcher.launched.borrow().is_empty());
    }

    #[test]
    fn test_app_absent_surfaces_to_caller_for_both_operations() {
        let bridge = ShareBridge::new(AppAbsentLauncher);

        let err = bridge.share_pdf(pdf_args("/tmp/doc.pdf", "12345")).unwrap_err();
        assert!(matches!(err, Error::DispatchFailed(_)));

        // Image dispatch failures must not be swallowed into a silent
        // success either.
        let err = bridge
            .share_image(image_args("/tmp/pic.jpg", "+1 555 0100"))
            .unwrap_err();
        assert!(matches!(err, Error::DispatchFailed(_)));
    }
}
