use serde_json::json;
use std::path::PathBuf;
use subreg_domain::config::{CommitConfig, DeclarationsConfig, LoggingConfig, SubregConfig};

#[test]
fn config_defaults_are_sane() {
    let declarations = DeclarationsConfig::default();
    assert_eq!(declarations.dir, PathBuf::from("domains"));
    assert_eq!(declarations.extension, "json");

    let commit = CommitConfig::default();
    assert_eq!(commit.registrar, "none");
    assert_eq!(commit.provider, "cloudflare");

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(!logging.json);
    assert!(logging.dir.is_none());
}

#[test]
fn subreg_config_deserializes_partial_sections() {
    let raw = json!({
        "declarations": { "dir": "/srv/domains" },
        "policy": { "denylist": ["staff", "billing"] },
        "commit": { "provider": "route53" }
    });

    let cfg: SubregConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.declarations.dir, PathBuf::from("/srv/domains"));
    assert_eq!(cfg.declarations.extension, "json");
    assert_eq!(cfg.policy.denylist, ["staff", "billing"]);
    assert_eq!(cfg.commit.registrar, "none");
    assert_eq!(cfg.commit.provider, "route53");
}
