use serde_json::json;
use std::net::Ipv4Addr;
use subreg_domain::declaration::{NestedDeclaration, RecordSet, SubdomainDeclaration};
use subreg_domain::record::{ProxyMode, RecordKind, RecordOp};

#[test]
fn record_op_serializes_with_type_tag() {
    let op = RecordOp::Cname {
        name: "foo".to_owned(),
        target: "bar.example.com.".to_owned(),
        proxy: ProxyMode::On,
    };

    let value = serde_json::to_value(&op).expect("serialize");
    assert_eq!(
        value,
        json!({ "type": "CNAME", "name": "foo", "target": "bar.example.com.", "proxy": "CF_PROXY_ON" })
    );
    assert_eq!(op.kind(), RecordKind::Cname);
    assert_eq!(op.name(), "foo");
}

#[test]
fn a_record_serializes_address_as_string() {
    let op = RecordOp::A {
        name: "b.a".to_owned(),
        address: Ipv4Addr::new(1, 1, 1, 1),
        proxy: ProxyMode::Off,
    };

    let value = serde_json::to_value(&op).expect("serialize");
    assert_eq!(value["address"], "1.1.1.1");
    assert_eq!(value["proxy"], "CF_PROXY_OFF");
}

#[test]
fn proxy_mode_follows_flag() {
    assert_eq!(ProxyMode::from(true), ProxyMode::On);
    assert_eq!(ProxyMode::from(false), ProxyMode::Off);
    assert_eq!(ProxyMode::Off.to_string(), "CF_PROXY_OFF");
}

#[test]
fn record_set_counts_every_value() {
    let record = RecordSet {
        txt: Some(vec!["a".to_owned(), "b".to_owned()]),
        a: Some(vec![]),
        cname: Some("x.example.".to_owned()),
        ..RecordSet::default()
    };

    assert_eq!(record.len(), 3);
    assert!(RecordSet::default().is_empty());
}

#[test]
fn fqdn_and_qualified_label() {
    let declaration = SubdomainDeclaration {
        domain: "is-an.app".to_owned(),
        description: "demo site".to_owned(),
        subdomain: "a".to_owned(),
        owner: None,
        proxy: true,
        record: RecordSet::default(),
        nested: vec![NestedDeclaration {
            subdomain: "b".to_owned(),
            proxy: true,
            record: RecordSet::default(),
        }],
    };

    assert_eq!(declaration.fqdn(), "a.is-an.app");
    assert_eq!(declaration.nested[0].qualified_label(&declaration.subdomain), "b.a");

    let apex = SubdomainDeclaration { subdomain: "@".to_owned(), ..declaration };
    assert_eq!(apex.fqdn(), "is-an.app");
}
