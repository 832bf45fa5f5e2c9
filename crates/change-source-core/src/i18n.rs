#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }
}

/// Picks the interface language from the process environment values.
///
/// `NODE_LANG` wins when it names a supported language. Otherwise the first
/// non-empty of `LANG` and `LC_ALL` is reduced to its ASCII letters and
/// checked for a `zh` prefix (`zh_CN.UTF-8` becomes `zhcnutf`).
pub fn detect_language(
    node_lang: Option<&str>,
    lang: Option<&str>,
    lc_all: Option<&str>,
) -> Language {
    if let Some(language) = node_lang.and_then(Language::parse) {
        return language;
    }

    let locale = [lang, lc_all]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_ascii_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect::<String>();
    if locale.starts_with("zh") {
        Language::Zh
    } else {
        Language::En
    }
}

const EN_HELP_EXAMPLES: &str = "\
Examples:
  $ change-source
  $ change-source --npm
  $ change-source --all --to taobao
  $ change-source --pnpm --to https://my.private.registry/
  $ change-source --list
  $ change-source --show
  $ change-source --delete
  $ change-source --lang en

Description:
  --all      Switch all (npm/yarn/pnpm)
  --to       Key (official/taobao/cnpm) or full URL for registry
  --show     Show all current registries
  --delete   Remove saved custom registries
  --lang     Auto-detect or manually set (en/zh)";

const ZH_HELP_EXAMPLES: &str = "\
示例用法:
  $ change-source
  $ change-source --npm
  $ change-source --all --to taobao
  $ change-source --pnpm --to https://my.private.registry/
  $ change-source --list
  $ change-source --show
  $ change-source --delete
  $ change-source --lang zh

说明:
  --all      切换全部（npm/yarn/pnpm）
  --to       可为源 key（official/taobao/cnpm）或完整 URL
  --show     一键显示所有包管理器当前源
  --delete   删除已保存的自定义源
  --lang     自动侦测，或手工指定（en/zh）";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    AppDescription,
    HelpAll,
    HelpNpm,
    HelpYarn,
    HelpPnpm,
    HelpTo,
    HelpList,
    HelpShow,
    HelpDelete,
    HelpLang,
    HelpConfigFile,
    HelpCompletions,
    HelpExamples,
    SelectManager,
    SelectAtLeastOne,
    ChooseTarget,
    AllManagers,
    ManualInput,
    EnterCustom,
    CustomRegistries,
    DeleteCustom,
    DeleteAll,
    DeleteSelected,
    DeleteAction,
    SelectToDelete,
    NothingToDelete,
    NoneSelected,
    Deleted,
    ListRegistries,
    NoCustomRegistries,
    CurrentRegistries,
    NotAvailable,
    Switching,
    Success,
    ErrorOccurred,
    Done,
}

impl Message {
    pub fn text(self, language: Language) -> &'static str {
        match language {
            Language::En => self.en(),
            Language::Zh => self.zh(),
        }
    }

    fn en(self) -> &'static str {
        match self {
            Self::AppDescription => {
                "Easily switch registries for npm, yarn, and pnpm (auto zh/en help)."
            }
            Self::HelpAll => "Switch all package manager registries",
            Self::HelpNpm => "Switch npm registry",
            Self::HelpYarn => "Switch yarn registry",
            Self::HelpPnpm => "Switch pnpm registry",
            Self::HelpTo => "Target registry (official/taobao/cnpm/URL)",
            Self::HelpList => "List available registries",
            Self::HelpShow => "Show current registries",
            Self::HelpDelete => "Delete saved custom registries",
            Self::HelpLang => "Set interface language: en or zh (auto-detect by default)",
            Self::HelpConfigFile => {
                "Custom registry file (default: <config-home>/change-source/custom-registries.json)"
            }
            Self::HelpCompletions => "Print a shell completion script",
            Self::HelpExamples => EN_HELP_EXAMPLES,
            Self::SelectManager => "Which registries do you want to change?",
            Self::SelectAtLeastOne => "Select at least one package manager",
            Self::ChooseTarget => "Choose the target registry",
            Self::AllManagers => "All",
            Self::ManualInput => "Manual input",
            Self::EnterCustom => "Enter a custom registry URL",
            Self::CustomRegistries => "Custom registries",
            Self::DeleteCustom => "Delete custom registries",
            Self::DeleteAll => "Delete all custom registries",
            Self::DeleteSelected => "Delete selected custom registries",
            Self::DeleteAction => "What do you want to do?",
            Self::SelectToDelete => "Select custom registries to delete",
            Self::NothingToDelete => "No custom registries to delete",
            Self::NoneSelected => "Nothing selected, nothing deleted",
            Self::Deleted => "Deleted custom registries:",
            Self::ListRegistries => "Available registries for",
            Self::NoCustomRegistries => "No custom registries saved",
            Self::CurrentRegistries => "Current registries:",
            Self::NotAvailable => "not available",
            Self::Switching => "Switching registries...",
            Self::Success => "Success",
            Self::ErrorOccurred => "An error occurred:",
            Self::Done => "Registry has been switched!",
        }
    }

    fn zh(self) -> &'static str {
        match self {
            Self::AppDescription => "支持 npm/yarn/pnpm 一键切换源（帮助自动中英文切换）。",
            Self::HelpAll => "切换所有包管理器源",
            Self::HelpNpm => "仅切换 npm 源",
            Self::HelpYarn => "仅切换 yarn 源",
            Self::HelpPnpm => "仅切换 pnpm 源",
            Self::HelpTo => "目标源（官方/淘宝/CNPM 或自定义 URL）",
            Self::HelpList => "显示可用源列表",
            Self::HelpShow => "显示当前各包管理器的源",
            Self::HelpDelete => "删除已保存的自定义源",
            Self::HelpLang => "语言切换: en 或 zh（默认自动）",
            Self::HelpConfigFile => {
                "自定义源文件（默认：<config-home>/change-source/custom-registries.json）"
            }
            Self::HelpCompletions => "输出 shell 补全脚本",
            Self::HelpExamples => ZH_HELP_EXAMPLES,
            Self::SelectManager => "请选择要切换的包管理器",
            Self::SelectAtLeastOne => "请至少选择一个包管理器",
            Self::ChooseTarget => "选择目标源",
            Self::AllManagers => "全部",
            Self::ManualInput => "手动输入",
            Self::EnterCustom => "请输入自定义源地址",
            Self::CustomRegistries => "自定义源",
            Self::DeleteCustom => "删除自定义源",
            Self::DeleteAll => "删除全部自定义源",
            Self::DeleteSelected => "删除选中的自定义源",
            Self::DeleteAction => "请选择你的操作",
            Self::SelectToDelete => "请选择要删除的自定义源",
            Self::NothingToDelete => "没有可删除的自定义源",
            Self::NoneSelected => "未选择任何源，未删除",
            Self::Deleted => "已删除自定义源：",
            Self::ListRegistries => "可用源列表：",
            Self::NoCustomRegistries => "尚未保存自定义源",
            Self::CurrentRegistries => "当前各包管理器源：",
            Self::NotAvailable => "不可用",
            Self::Switching => "正在切换源...",
            Self::Success => "成功",
            Self::ErrorOccurred => "发生错误：",
            Self::Done => "源已切换完成！",
        }
    }
}
