use crate::{Language, PackageManager};

const NPM_REGISTRIES: &[(&str, &str)] = &[
    ("official", "https://registry.npmjs.org/"),
    ("taobao", "https://registry.npmmirror.com/"),
    ("cnpm", "https://r.cnpmjs.org/"),
];

const YARN_REGISTRIES: &[(&str, &str)] = &[
    ("official", "https://registry.yarnpkg.com/"),
    ("taobao", "https://registry.npmmirror.com/"),
];

const PNPM_REGISTRIES: &[(&str, &str)] = &[
    ("official", "https://registry.npmjs.org/"),
    ("taobao", "https://registry.npmmirror.com/"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryCatalogEntry {
    pub key: String,
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct RegistryCatalog {
    registries: Vec<(PackageManager, Vec<(String, String)>)>,
}

impl RegistryCatalog {
    pub fn builtin() -> Self {
        let table = |entries: &[(&str, &str)]| {
            entries
                .iter()
                .map(|(key, url)| (key.to_string(), url.to_string()))
                .collect::<Vec<_>>()
        };

        Self {
            registries: vec![
                (PackageManager::Npm, table(NPM_REGISTRIES)),
                (PackageManager::Yarn, table(YARN_REGISTRIES)),
                (PackageManager::Pnpm, table(PNPM_REGISTRIES)),
            ],
        }
    }

    /// Built-in registries for a manager name. Names are matched exactly, the
    /// same way `build_switch_command` does; unknown names have none.
    pub fn list(&self, manager: &str, language: Language) -> Vec<RegistryCatalogEntry> {
        match PackageManager::from_name(manager) {
            Some(manager) => self.entries(manager, language),
            None => Vec::new(),
        }
    }

    pub fn entries(&self, manager: PackageManager, language: Language) -> Vec<RegistryCatalogEntry> {
        self.registries
            .iter()
            .filter(|(candidate, _)| *candidate == manager)
            .flat_map(|(_, entries)| entries.iter())
            .map(|(key, url)| RegistryCatalogEntry {
                key: key.clone(),
                url: url.clone(),
                label: registry_label(key, language).to_string(),
            })
            .collect()
    }
}

pub fn registry_label(key: &str, language: Language) -> &str {
    match (language, key) {
        (Language::En, "official") => "Official",
        (Language::En, "taobao") => "Taobao",
        (Language::En, "cnpm") => "CNPM",
        (Language::Zh, "official") => "官方",
        (Language::Zh, "taobao") => "淘宝",
        (Language::Zh, "cnpm") => "CNPM（中国）",
        _ => key,
    }
}

/// Exact, case-sensitive lookup of a catalog key.
pub fn registry_url_for_key<'a>(
    entries: &'a [RegistryCatalogEntry],
    key: &str,
) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.url.as_str())
}

/// Maps a catalog key (case-insensitive) to its URL; anything else is taken
/// as a literal registry URL. Used for `--to`; menu values match keys exactly.
pub fn resolve_registry_target(entries: &[RegistryCatalogEntry], value: &str) -> String {
    registry_url_for_key(entries, &value.to_lowercase())
        .unwrap_or(value)
        .to_string()
}
