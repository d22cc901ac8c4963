use jsonmock::{generate_mock_data, ErrorKind, MockDataGenerator, TypeRegistry, ValueKind};
use serde_json::Value;

fn records(output: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(output).unwrap() {
        Value::Array(items) => items,
        other => panic!("expected an array, got {other}"),
    }
}

#[test]
fn test_batch_length_and_key_order_for_many_counts() {
    let schema = r#"{"lastName": "lastName", "city": "city", "price": "price", "tags": "tags"}"#;
    let mut generator = MockDataGenerator::with_seed(2024);

    for count in [1, 2, 17, 250, 1000] {
        let output = generator.generate(schema, count).unwrap();
        let items = records(&output);
        assert_eq!(items.len(), count as usize);
        for item in &items {
            let keys: Vec<&String> = item.as_object().unwrap().keys().collect();
            assert_eq!(keys, vec!["lastName", "city", "price", "tags"]);
        }
    }
}

#[test]
fn test_values_have_registry_kinds() {
    let names = TypeRegistry::type_names().collect::<Vec<_>>();
    let schema: String = format!(
        "{{{}}}",
        names
            .iter()
            .map(|name| format!("\"f_{name}\": \"{name}\""))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let output = MockDataGenerator::with_seed(8).generate(&schema, 30).unwrap();
    for item in records(&output) {
        let object = item.as_object().unwrap();
        assert_eq!(object.len(), names.len());
        for name in &names {
            let kind = TypeRegistry::generator_for(name).kind();
            let value = &object[&format!("f_{name}")];
            assert!(kind.matches(value), "{name} produced {value}");
        }
    }
}

#[test]
fn test_case_insensitive_type_names_share_kind() {
    let schema = r#"{"a": "email", "b": "Email", "c": "EMAIL", "d": "SmallNumber", "e": "smallnumber"}"#;
    let output = generate_mock_data(schema, 10).unwrap();
    for item in records(&output) {
        for key in ["a", "b", "c"] {
            assert!(item[key].as_str().unwrap().contains('@'));
        }
        for key in ["d", "e"] {
            let n = item[key].as_i64().unwrap();
            assert!((1..=100).contains(&n));
        }
    }
}

#[test]
fn test_unknown_types_are_lenient() {
    let output = generate_mock_data(r#"{"mystery": "superSecretType"}"#, 25).unwrap();
    for item in records(&output) {
        let word = item["mystery"].as_str().unwrap();
        assert!(!word.is_empty());
        assert!(word.chars().all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn test_invalid_schema_produces_no_output() {
    for text in [
        r#"{"name": "name", "email": "email""#,
        r#"{"name": "name" "email": "email"}"#,
        r#"{"name": "name",}"#,
        r#""hello""#,
        "[1,2]",
    ] {
        let err = generate_mock_data(text, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSchema, "text: {text}");
    }
}

#[test]
fn test_invalid_counts_rejected() {
    for count in [0, -5, 1001] {
        let err = generate_mock_data(r#"{"a": "word"}"#, count).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCount);
    }
}

#[test]
fn test_empty_schema_yields_empty_objects() {
    let output = generate_mock_data("{}", 3).unwrap();
    let items = records(&output);
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.as_object().unwrap().is_empty()));
}

#[test]
fn test_fallback_kind_reported_for_unknown_names() {
    assert_eq!(TypeRegistry::generator_for("whatever").kind(), ValueKind::String);
}
