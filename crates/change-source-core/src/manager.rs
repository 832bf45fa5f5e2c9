use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [Self::Npm, Self::Yarn, Self::Pnpm];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Exact, case-sensitive lookup by command name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|manager| manager.as_str() == name)
    }

    pub fn switch_command(self, url: &str) -> String {
        format!("{} config set registry {url}", self.as_str())
    }

    pub fn get_registry_command(self) -> String {
        format!("{} config get registry", self.as_str())
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which managers a registry menu is built for.
///
/// `All` renders npm's catalog; the resolved URL is applied to every manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerTarget {
    One(PackageManager),
    All,
}

impl ManagerTarget {
    pub fn from_managers(managers: &[PackageManager]) -> Self {
        match managers {
            [single] => Self::One(*single),
            _ => Self::All,
        }
    }

    pub fn catalog_manager(self) -> PackageManager {
        match self {
            Self::One(manager) => manager,
            Self::All => PackageManager::Npm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported package manager: {name}")]
pub struct UnsupportedManagerError {
    pub name: String,
}

pub fn build_switch_command(manager: &str, url: &str) -> Result<String, UnsupportedManagerError> {
    PackageManager::from_name(manager)
        .map(|manager| manager.switch_command(url))
        .ok_or_else(|| UnsupportedManagerError {
            name: manager.to_string(),
        })
}
