mod catalog;
mod i18n;
mod manager;

pub use catalog::{
    registry_label, registry_url_for_key, resolve_registry_target, RegistryCatalog,
    RegistryCatalogEntry,
};
pub use i18n::{detect_language, Language, Message};
pub use manager::{build_switch_command, ManagerTarget, PackageManager, UnsupportedManagerError};

#[cfg(test)]
mod tests;
