use serde::de::DeserializeOwned;
use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime,
};

use crate::bridge::ShareBridge;
use crate::error::Error;
use crate::intent::{IntentLauncher, ShareIntent};
use crate::models::{ImageShareArgs, PdfShareArgs};

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_whatsapp_share);

/// Marker the native side puts in its error message when WhatsApp is not
/// installed on the device.
const APP_NOT_FOUND: &str = "APP_NOT_FOUND";

/// Initialize the mobile plugin by registering with the native layer.
pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    api: PluginApi<R, C>,
) -> crate::Result<WhatsappShare<R>> {
    #[cfg(target_os = "android")]
    let handle =
        api.register_android_plugin("com.plugins.whatsappshare", "WhatsappSharePlugin")?;
    #[cfg(target_os = "ios")]
    let handle = api.register_ios_plugin(init_plugin_whatsapp_share)?;
    Ok(WhatsappShare {
        bridge: ShareBridge::new(NativeIntentLauncher(handle)),
    })
}

/// Launcher backed by the registered native plugin. The native side resolves
/// the content URI via FileProvider, sets the read grant flag and starts the
/// activity.
struct NativeIntentLauncher<R: Runtime>(PluginHandle<R>);

impl<R: Runtime> IntentLauncher for NativeIntentLauncher<R> {
    fn launch(&self, intent: &ShareIntent) -> crate::Result<()> {
        // Kotlin returns an empty JSObject, so deserialize to Value and
        // discard it.
        self.0
            .run_mobile_plugin::<serde_json::Value>("launchShareIntent", intent.clone())
            .map(|_| ())
            .map_err(|e| {
                let msg = e.to_string();
                if msg.contains(APP_NOT_FOUND) {
                    Error::DispatchFailed("WhatsApp is not installed".into())
                } else {
                    Error::PluginInvoke(msg)
                }
            })
    }
}

/// Access to the whatsapp-share mobile APIs.
pub struct WhatsappShare<R: Runtime> {
    bridge: ShareBridge<NativeIntentLauncher<R>>,
}

impl<R: Runtime> WhatsappShare<R> {
    /// Share a PDF file to WhatsApp.
    pub fn share_pdf(&self, args: PdfShareArgs) -> crate::Result<()> {
        self.bridge.share_pdf(args)
    }

    /// Share an image to WhatsApp, pre-addressed to the phone number's jid.
    pub fn share_image(&self, args: ImageShareArgs) -> crate::Result<()> {
        self.bridge.share_image(args)
    }
}
