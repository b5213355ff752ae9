pub mod webhook;
pub mod webhook_access_level;
pub mod webhook_button_style;
pub mod webhook_callback;
pub mod webhook_display_mode;
