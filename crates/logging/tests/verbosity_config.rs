//! Integration tests for building a verbosity configuration from flag tokens.

use logging::{
    DebugFlag, InfoFlag, VerbosityConfig, apply_debug_flag, apply_info_flag, current, debug_gte,
    info_gte, init,
};

/// Applies a comma separated list such as `"walk2,stat"`.
fn apply_debug_list(config: &mut VerbosityConfig, list: &str) -> Result<(), String> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .try_for_each(|token| config.apply_debug_flag(token))
}

#[test]
fn token_list_sets_each_flag() {
    let mut config = VerbosityConfig::default();
    apply_debug_list(&mut config, "walk2, stat ,dup3").expect("valid list");

    assert_eq!(config.debug.get(DebugFlag::Walk), 2);
    assert_eq!(config.debug.get(DebugFlag::Stat), 1);
    assert_eq!(config.debug.get(DebugFlag::Dup), 3);
    assert_eq!(config.debug.get(DebugFlag::Symlink), 0);
}

#[test]
fn later_tokens_override_earlier_ones() {
    let mut config = VerbosityConfig::default();
    apply_debug_list(&mut config, "all2,symlink0,walk4").expect("valid list");

    assert_eq!(config.debug.walk, 4);
    assert_eq!(config.debug.stat, 2);
    assert_eq!(config.debug.symlink, 0);
}

#[test]
fn unknown_token_reports_its_name() {
    let mut config = VerbosityConfig::default();
    let error = apply_debug_list(&mut config, "walk,copy2").expect_err("copy is unknown");
    assert!(error.contains("copy"), "unexpected message: {error}");
    // Tokens before the bad one were still applied.
    assert_eq!(config.debug.walk, 1);
}

#[test]
fn every_flag_name_round_trips_through_tokens() {
    for flag in DebugFlag::ALL {
        let mut config = VerbosityConfig::default();
        config
            .apply_debug_flag(&format!("{}2", flag.name()))
            .expect("known flag");
        assert_eq!(config.debug.get(flag), 2, "{flag:?}");
    }
    for flag in InfoFlag::ALL {
        let mut config = VerbosityConfig::default();
        config.apply_info_flag(flag.name()).expect("known flag");
        assert_eq!(config.info.get(flag), 1, "{flag:?}");
    }
}

#[test]
fn thread_config_follows_applied_tokens() {
    init(VerbosityConfig::from_verbose_level(1));
    assert!(info_gte(InfoFlag::Walk, 1));
    assert!(!debug_gte(DebugFlag::Walk, 1));

    apply_debug_flag("walk3").expect("valid token");
    apply_info_flag("skip2").expect("valid token");

    assert!(debug_gte(DebugFlag::Walk, 3));
    assert!(info_gte(InfoFlag::Skip, 2));
    assert_eq!(current().debug.walk, 3);
}

#[cfg(feature = "serde")]
#[test]
fn config_round_trips_through_json() {
    let config = VerbosityConfig::from_verbose_level(3);
    let json = serde_json::to_string(&config).expect("serialize");
    let decoded: VerbosityConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, config);
}
