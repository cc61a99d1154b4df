//! Building a whole schema through the public facade.

use enumforge::{BaseWidth, LiteralResolver, Registry, RegistryError, Schema};

#[test]
fn schema_options_apply_to_every_flag_set() {
    let text = serde_json::json!({
        "options": { "defaultFlagBase": "u8" },
        "enums": [ { "name": "Color", "members": ["red", "green", "blue"] } ],
        "flags": [
            { "name": "Small", "members": ["a", "b"] },
            { "name": "Wide", "base": "uint64_t", "members": [ { "name": "top", "value": "1 << 63" } ] }
        ]
    })
    .to_string();

    let registry = Registry::from_json(&text, &LiteralResolver).unwrap();
    assert_eq!(registry.flag_set("Small").unwrap().base(), BaseWidth::U8);
    let wide = registry.flag_set("Wide").unwrap();
    assert_eq!(wide.base(), BaseWidth::U64);
    assert_eq!(wide.mask(), 1 << 63);

    let color = registry.enumeration("Color").unwrap();
    let names: Vec<_> = color.instances().map(|c| c.name()).collect();
    assert_eq!(names, ["red", "green", "blue"]);
}

#[test]
fn auto_bits_past_the_default_base_fail_the_schema() {
    let members: Vec<String> = (0..9).map(|i| format!("f{i}")).collect();
    let text = serde_json::json!({
        "options": { "defaultFlagBase": "u8" },
        "flags": [ { "name": "Overflow", "members": members } ]
    })
    .to_string();
    let err = Registry::from_json(&text, &LiteralResolver).unwrap_err();
    assert!(matches!(err, RegistryError::Definition(_)));
    assert!(err.to_string().contains("no free bit left in a 8-bit base"));
}

#[test]
fn schema_files_round_trip_through_serde() {
    let schema = Schema::from_json(r#"{ "enums": [ { "name": "E", "members": ["a = 0x10", "b"] } ] }"#)
        .unwrap();
    let registry = Registry::build(&schema, &LiteralResolver).unwrap();
    let e = registry.enumeration("E").unwrap();
    assert_eq!(e.member("b").unwrap().to_integer(), 17);
    assert_eq!(Schema::from_json(&schema.to_json().unwrap()).unwrap(), schema);
}
