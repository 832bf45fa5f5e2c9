use super::*;

fn keys(entries: &[RegistryCatalogEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.key.as_str()).collect()
}

#[test]
fn npm_catalog_lists_official_taobao_cnpm_with_english_labels() {
    let catalog = RegistryCatalog::builtin();
    let entries = catalog.list("npm", Language::En);

    assert_eq!(keys(&entries), vec!["official", "taobao", "cnpm"]);
    assert!(entries.iter().all(|entry| !entry.url.is_empty()));
    assert_eq!(entries[0].label, "Official");
    assert_eq!(entries[1].label, "Taobao");
    assert_eq!(entries[2].label, "CNPM");
    assert_eq!(entries[0].url, "https://registry.npmjs.org/");
}

#[test]
fn yarn_catalog_uses_chinese_labels() {
    let catalog = RegistryCatalog::builtin();
    let entries = catalog.list("yarn", Language::Zh);

    assert_eq!(keys(&entries), vec!["official", "taobao"]);
    assert_eq!(entries[0].label, "官方");
    assert_eq!(entries[1].label, "淘宝");
    assert_eq!(entries[0].url, "https://registry.yarnpkg.com/");
}

#[test]
fn pnpm_catalog_matches_npm_mirrors_without_cnpm() {
    let catalog = RegistryCatalog::builtin();
    let entries = catalog.entries(PackageManager::Pnpm, Language::En);

    assert_eq!(keys(&entries), vec!["official", "taobao"]);
    assert_eq!(entries[1].url, "https://registry.npmmirror.com/");
}

#[test]
fn unknown_manager_catalog_is_empty() {
    let catalog = RegistryCatalog::builtin();
    assert!(catalog.list("bogus", Language::En).is_empty());
}

#[test]
fn catalog_and_builder_agree_on_manager_names() {
    let catalog = RegistryCatalog::builtin();
    for name in ["NPM", " npm", "Yarn"] {
        assert!(catalog.list(name, Language::En).is_empty(), "{name:?} must be unknown");
        assert!(build_switch_command(name, "https://x/").is_err());
    }
    assert_eq!(PackageManager::from_name("pnpm"), Some(PackageManager::Pnpm));
    assert_eq!(PackageManager::from_name("PNPM"), None);
}

#[test]
fn registry_label_falls_back_to_key() {
    assert_eq!(registry_label("cnpm", Language::Zh), "CNPM（中国）");
    assert_eq!(registry_label("corp-mirror", Language::En), "corp-mirror");
}

#[test]
fn build_switch_command_formats_known_managers() {
    assert_eq!(
        build_switch_command("npm", "https://x/").expect("npm must be supported"),
        "npm config set registry https://x/"
    );
    assert_eq!(
        build_switch_command("pnpm", "https://x/").expect("pnpm must be supported"),
        "pnpm config set registry https://x/"
    );
}

#[test]
fn build_switch_command_rejects_unknown_manager() {
    let err = build_switch_command("bogus", "https://x/")
        .expect_err("unknown manager must be rejected");
    assert_eq!(err.name, "bogus");
    assert_eq!(err.to_string(), "unsupported package manager: bogus");
}

#[test]
fn builder_covers_every_manager_and_registry_read() {
    for manager in PackageManager::ALL {
        assert_eq!(
            build_switch_command(manager.as_str(), "https://x/").expect("must build"),
            format!("{manager} config set registry https://x/")
        );
    }
    assert_eq!(
        PackageManager::Yarn.get_registry_command(),
        "yarn config get registry"
    );
}

#[test]
fn manager_target_uses_npm_catalog_for_all() {
    assert_eq!(
        ManagerTarget::from_managers(&[PackageManager::Yarn]),
        ManagerTarget::One(PackageManager::Yarn)
    );
    let target = ManagerTarget::from_managers(&PackageManager::ALL);
    assert_eq!(target, ManagerTarget::All);
    assert_eq!(target.catalog_manager(), PackageManager::Npm);
}

#[test]
fn resolve_registry_target_maps_keys_case_insensitively() {
    let entries = RegistryCatalog::builtin().list("npm", Language::En);
    assert_eq!(
        resolve_registry_target(&entries, "TaoBao"),
        "https://registry.npmmirror.com/"
    );
    assert_eq!(
        resolve_registry_target(&entries, "https://my.private.registry/"),
        "https://my.private.registry/"
    );
}

#[test]
fn registry_url_for_key_matches_exactly() {
    let entries = RegistryCatalog::builtin().list("yarn", Language::En);
    assert_eq!(
        registry_url_for_key(&entries, "official"),
        Some("https://registry.yarnpkg.com/")
    );
    assert_eq!(registry_url_for_key(&entries, "Taobao"), None);
    assert_eq!(registry_url_for_key(&entries, "cnpm"), None);
}

#[test]
fn detect_language_prefers_node_lang() {
    assert_eq!(
        detect_language(Some("zh"), Some("en_US.UTF-8"), None),
        Language::Zh
    );
    assert_eq!(
        detect_language(Some("fr"), Some("zh_CN.UTF-8"), None),
        Language::Zh
    );
}

#[test]
fn detect_language_reads_lang_then_lc_all() {
    assert_eq!(detect_language(None, Some("zh_TW.UTF-8"), None), Language::Zh);
    assert_eq!(detect_language(None, Some("en_US.UTF-8"), Some("zh_CN")), Language::En);
    assert_eq!(detect_language(None, Some(""), Some("zh_CN")), Language::Zh);
    assert_eq!(detect_language(None, None, None), Language::En);
}

#[test]
fn messages_exist_in_both_languages() {
    assert_eq!(Message::ManualInput.text(Language::En), "Manual input");
    assert_eq!(Message::ManualInput.text(Language::Zh), "手动输入");
}
