use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod bridge;
mod commands;
mod error;
mod intent;
mod models;

pub use bridge::{build_intent, ShareBridge};
pub use error::{Error, Result};
pub use intent::{
    IntentLauncher, ShareIntent, JID_SUFFIX, MIME_IMAGE, MIME_PDF, PROVIDER_AUTHORITY_SUFFIX,
    WHATSAPP_PACKAGE,
};

#[cfg(desktop)]
use desktop::WhatsappShare;
#[cfg(mobile)]
use mobile::WhatsappShare;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the whatsapp-share APIs.
pub trait WhatsappShareExt<R: Runtime> {
    fn whatsapp_share(&self) -> &WhatsappShare<R>;
}

impl<R: Runtime, T: Manager<R>> crate::WhatsappShareExt<R> for T {
    fn whatsapp_share(&self) -> &WhatsappShare<R> {
        self.state::<WhatsappShare<R>>().inner()
    }
}

/// Initializes the whatsapp-share plugin.
///
/// This plugin shares local files to WhatsApp via a send intent restricted
/// to the WhatsApp package:
/// - `send_pdf_to_whatsapp` attaches a PDF file
/// - `send_image_to_whatsapp` attaches an image, pre-addressed to a phone
///   number's jid so the contact picker is skipped
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("whatsapp-share")
        .invoke_handler(tauri::generate_handler![
            commands::send_pdf_to_whatsapp,
            commands::send_image_to_whatsapp,
        ])
        .setup(|app, api| {
            #[cfg(mobile)]
            let whatsapp_share = mobile::init(app, api)?;
            #[cfg(desktop)]
            let whatsapp_share = desktop::init(app, api)?;
            app.manage(whatsapp_share);
            Ok(())
        })
        .build()
}
