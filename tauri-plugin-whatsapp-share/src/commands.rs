//! Tauri command handlers for the whatsapp-share plugin.

use tauri::{command, AppHandle, Runtime};

use crate::models::{ImageShareArgs, PdfShareArgs};
use crate::Result;
use crate::WhatsappShareExt;

/// Share a PDF file to WhatsApp.
///
/// `contact` is required but stays out of the outgoing intent; only the
/// WhatsApp Business API may pre-address document shares.
#[command]
pub(crate) async fn send_pdf_to_whatsapp<R: Runtime>(
    app: AppHandle<R>,
    args: PdfShareArgs,
) -> Result<()> {
    app.whatsapp_share().share_pdf(args)
}

/// Share an image to WhatsApp, pre-addressed to `phone`.
///
/// The recipient address is derived by stripping `+` and spaces from the
/// number and appending the network domain.
#[command]
pub(crate) async fn send_image_to_whatsapp<R: Runtime>(
    app: AppHandle<R>,
    args: ImageShareArgs,
) -> Result<()> {
    app.whatsapp_share().share_image(args)
}
