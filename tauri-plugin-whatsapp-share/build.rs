const COMMANDS: &[&str] = &["send_pdf_to_whatsapp", "send_image_to_whatsapp"];

fn main() {
    // The Kotlin/Swift halves of the plugin live in the consuming app's
    // native project and register themselves by name, so no android_path /
    // ios_path here.
    tauri_plugin::Builder::new(COMMANDS).build();
}
