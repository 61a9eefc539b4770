use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime};

use crate::bridge::ShareBridge;
use crate::error::Error;
use crate::intent::{IntentLauncher, ShareIntent};
use crate::models::{ImageShareArgs, PdfShareArgs};

/// Initialize the desktop plugin.
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> crate::Result<WhatsappShare<R>> {
    Ok(WhatsappShare {
        _app: app.clone(),
        bridge: ShareBridge::new(UnsupportedLauncher),
    })
}

/// Launcher stub for platforms without an intent system.
struct UnsupportedLauncher;

impl IntentLauncher for UnsupportedLauncher {
    fn launch(&self, _intent: &ShareIntent) -> crate::Result<()> {
        Err(Error::PlatformNotSupported)
    }
}

/// Access to the whatsapp-share APIs (desktop stub).
///
/// Share intents only exist on mobile. Arguments are still validated so the
/// frontend sees the same errors everywhere, but dispatch always fails with
/// [`Error::PlatformNotSupported`]. The plugin still needs to be loadable
/// on desktop for cross-platform builds.
pub struct WhatsappShare<R: Runtime> {
    _app: AppHandle<R>,
    bridge: ShareBridge<UnsupportedLauncher>,
}

impl<R: Runtime> WhatsappShare<R> {
    /// Validate and dispatch a PDF share (always fails dispatch on desktop).
    pub fn share_pdf(&self, args: PdfShareArgs) -> crate::Result<()> {
        self.bridge.share_pdf(args)
    }

    /// Validate and dispatch an image share (always fails dispatch on desktop).
    pub fn share_image(&self, args: ImageShareArgs) -> crate::Result<()> {
        self.bridge.share_image(args)
    }
}
