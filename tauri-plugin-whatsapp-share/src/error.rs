//! Error types for the whatsapp-share plugin.

use serde::{Deserialize, Serialize};

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a share request.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "type", content = "message")]
pub enum Error {
    /// A required argument was absent or empty. No intent is built in this
    /// case; the caller's input never reaches the OS.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// The OS refused the intent, typically because WhatsApp is not
    /// installed on the device.
    #[error("Failed to dispatch share intent: {0}")]
    DispatchFailed(String),

    /// The operation name is not one this bridge implements.
    #[error("Unsupported share operation: {0}")]
    UnsupportedOperation(String),

    /// Share intents only exist on mobile platforms.
    #[error("Share intents are not supported on this platform")]
    PlatformNotSupported,

    /// Mobile plugin invocation error.
    #[cfg(mobile)]
    #[error("Plugin invoke error: {0}")]
    PluginInvoke(String),
}

#[cfg(mobile)]
impl From<tauri::plugin::mobile::PluginInvokeError> for Error {
    fn from(err: tauri::plugin::mobile::PluginInvokeError) -> Self {
        Error::PluginInvoke(err.to_string())
    }
}
