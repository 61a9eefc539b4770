//! Request types crossing the webview boundary.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::intent::JID_SUFFIX;

/// Operation names as the application layer knows them.
pub mod methods {
    pub const SEND_PDF: &str = "sendPdfToWhatsApp";
    pub const SEND_IMAGE: &str = "sendImageToWhatsApp";
}

/// Validated request to share a PDF with a contact. Both fields are
/// guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfShareRequest {
    pub file_path: String,
    /// Kept for the caller's bookkeeping; not placed in the outgoing intent
    /// (pre-addressed PDF shares need WhatsApp Business API permission).
    pub contact: String,
}

/// Validated request to share an image, pre-addressed to a phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageShareRequest {
    pub file_path: String,
    /// Raw phone number, arbitrary formatting. See [`derive_jid`].
    pub phone: String,
}

/// One share request, either flavor, fed through the same
/// validate-build-launch pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareRequest {
    Pdf(PdfShareRequest),
    Image(ImageShareRequest),
}

/// Raw PDF share arguments as supplied by the caller. Fields are optional
/// so a missing key surfaces as [`Error::MissingArgument`] rather than a
/// decode fault.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfShareArgs {
    pub file_path: Option<String>,
    pub contact: Option<String>,
}

impl PdfShareArgs {
    pub fn validate(self) -> Result<PdfShareRequest> {
        Ok(PdfShareRequest {
            file_path: require(self.file_path, "filePath")?,
            contact: require(self.contact, "contact")?,
        })
    }
}

/// Raw image share arguments as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageShareArgs {
    pub file_path: Option<String>,
    pub phone: Option<String>,
}

impl ImageShareArgs {
    pub fn validate(self) -> Result<ImageShareRequest> {
        Ok(ImageShareRequest {
            file_path: require(self.file_path, "filePath")?,
            phone: require(self.phone, "phone")?,
        })
    }
}

fn require(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingArgument(field.to_string())),
    }
}

/// Derive the recipient jid from a raw phone number: `+` and spaces are
/// stripped, the network domain appended. No further validation happens
/// here; WhatsApp is the only consumer of the result.
pub fn derive_jid(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| *c != '+' && *c != ' ').collect();
    format!("{digits}{JID_SUFFIX}")
}
