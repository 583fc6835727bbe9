pub(crate) mod add_fallbacks;
pub(crate) mod fallback_table;
pub(crate) mod loading;
pub(crate) mod notification_toast;
pub(crate) mod settings_table;


pub use add_fallbacks::AddFallbacks;
pub use fallback_table::FallbackTable;
pub use loading::Loading;
pub use notification_toast::NotificationToast;
pub use settings_table::SettingsTable;
