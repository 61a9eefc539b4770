//! Share intent value type and the launcher seam.

use serde::{Deserialize, Serialize};

/// Package identity of the target messaging app. Every intent is restricted
/// to this package; the system share sheet is never shown.
pub const WHATSAPP_PACKAGE: &str = "com.whatsapp";

/// Domain suffix appended to a stripped phone number to form a recipient
/// address understood by WhatsApp.
pub const JID_SUFFIX: &str = "@s.whatsapp.net";

/// FileProvider authority suffix. The native layer resolves the shared
/// file's content URI against `<app package name><suffix>`, so this must
/// match the provider declared in the consuming app's manifest.
pub const PROVIDER_AUTHORITY_SUFFIX: &str = ".fileprovider";

/// MIME type for PDF shares.
pub const MIME_PDF: &str = "application/pdf";

/// MIME type for image shares.
pub const MIME_IMAGE: &str = "image/*";

/// A fully built send intent, ready for the native layer to dispatch.
///
/// The file path crosses the boundary as-is; the native side resolves it to
/// a permission-scoped content URI and the OS keeps the read grant alive
/// until the receiving app is done with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareIntent {
    /// MIME type of the stream attachment.
    pub mime_type: String,
    /// Filesystem path of the file to attach.
    pub file_path: String,
    /// Authority suffix used to resolve the content URI.
    pub provider_authority_suffix: String,
    /// Package the intent is restricted to.
    pub package: String,
    /// Direct recipient address, when the share is pre-addressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jid: Option<String>,
    /// Whether the receiving app gets a temporary read grant on the URI.
    pub grant_read_uri_permission: bool,
}

/// Capability to hand a built intent to the operating system.
///
/// The real implementation sits behind the registered native plugin; tests
/// substitute doubles that simulate the target app being present or absent.
pub trait IntentLauncher {
    fn launch(&self, intent: &ShareIntent) -> crate::Result<()>;
}
