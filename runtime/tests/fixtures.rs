use expect_test::expect;
use ld::{
    contains, each, every, extend, filter, first, last, map, partition, pluck, reduce, some,
    unique, Collection, LdError, Position, Value,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {}", path.display(), err));
    serde_json::from_str(&source)
        .unwrap_or_else(|err| panic!("failed to parse {}: {}", path.display(), err))
}

fn field<'v>(case: &'v Value, key: &str) -> Option<&'v Value> {
    case.as_object().and_then(|object| object.get(key))
}

fn run_case(case: &Value) -> Result<Value, LdError> {
    let operation = field(case, "operation").and_then(Value::as_string).unwrap_or_default();
    let input = field(case, "input").cloned().unwrap_or_default();
    match operation {
        "unique" => unique(&input),
        "first" => Ok(first(&input, field(case, "n").and_then(Value::as_integer))),
        "last" => Ok(last(&input, field(case, "n").and_then(Value::as_integer))),
        "pluck" => {
            let key = field(case, "key").and_then(Value::as_string).unwrap_or_default();
            pluck(&input, key)
        }
        "contains" => {
            let target = field(case, "target").cloned().unwrap_or_default();
            contains(&input, &target).map(Value::from)
        }
        "extend" => {
            let sources: Vec<Value> = field(case, "sources")
                .and_then(Value::as_list)
                .map(|list| list.iter().cloned().collect())
                .unwrap_or_default();
            let mut target = input;
            extend(&mut target, &sources)?;
            Ok(target)
        }
        other => panic!("unknown fixture operation {other}"),
    }
}

// JSON has no undefined; fixtures spell it as null.
fn undefined_as_null(value: Value) -> Value {
    match value {
        Value::Undefined => Value::Null,
        Value::Array(list) => list.into_iter().map(undefined_as_null).collect(),
        Value::Object(object) => object
            .into_iter()
            .map(|(k, v)| (k, undefined_as_null(v)))
            .collect(),
        other => other,
    }
}

#[test]
fn operation_cases() {
    let cases = fixture("cases.json");
    let cases = cases.as_list().expect("cases should be an array");
    assert!(!cases.is_empty());
    for case in cases {
        let expected = field(case, "expected").cloned().unwrap_or_default();
        let actual = run_case(case).unwrap_or_else(|err| panic!("{case}: {err}"));
        assert_eq!(undefined_as_null(actual), expected, "{case}");
    }
}

#[test]
fn extend_preserves_target_key_order() {
    let cases = fixture("cases.json");
    let case = cases
        .as_list()
        .and_then(|cases| {
            cases.iter().find(|case| {
                field(case, "operation").and_then(Value::as_string) == Some("extend")
                    && field(case, "sources")
                        .and_then(Value::as_list)
                        .is_some_and(|sources| sources.len() == 2)
            })
        })
        .expect("two-source extend case");
    let actual = run_case(case).expect("extend should succeed");
    expect![[r#"{"a":3,"d":5,"c":6}"#]]
        .assert_eq(&serde_json::to_string(&actual).expect("serializable"));
}

#[test]
fn records_by_team() {
    let records = fixture("records.json");
    let engines = filter(&records, |record, _, _| {
        field(record, "team").and_then(Value::as_string) == Some("engines")
    })
    .unwrap();
    assert_eq!(pluck(&engines, "name").unwrap().to_string(), r#"["ada", "alan"]"#);

    let (active, idle) = partition(&records, |record, _, _| {
        field(record, "commits").is_some_and(Value::is_truthy)
    })
    .unwrap();
    assert_eq!(pluck(&active, "name").unwrap().to_string(), r#"["ada", "grace", "edsger"]"#);
    assert_eq!(pluck(&idle, "name").unwrap().to_string(), r#"["alan"]"#);
}

#[test]
fn records_total_commits() {
    let records = fixture("records.json");
    let commits = pluck(&records, "commits").unwrap();
    let total = reduce(
        &commits,
        |total, commits, _, _| {
            Value::from(total.as_number().unwrap_or_default() + commits.as_number().unwrap_or_default())
        },
        Some(Value::from(0.0)),
    )
    .unwrap();
    assert_eq!(total, Value::from(82.5));
}

#[test]
fn records_distinct_languages() {
    let records = fixture("records.json");
    let mut languages = Vec::new();
    each(&pluck(&records, "languages").unwrap(), |list, _, _| {
        if let Some(list) = list.as_list() {
            languages.extend(list.iter().cloned());
        }
    })
    .unwrap();
    let distinct = unique(&Value::from(languages)).unwrap();
    expect![[r#"["ml", "rust", "cobol", "algol"]"#]].assert_eq(&distinct.to_string());
    assert!(contains(&distinct, &Value::from("rust")).unwrap());
}

#[test]
fn records_shape_checks() {
    let records = fixture("records.json");
    let mut has_name = |record: &Value, _: Position, _: Collection| field(record, "name").is_some();
    assert!(every(&records, Some(&mut has_name)).unwrap());
    let mut has_email = |record: &Value, _: Position, _: Collection| field(record, "email").is_some();
    assert!(!some(&records, Some(&mut has_email)).unwrap());

    let positions = map(&records, |_, position, _| position.to_value()).unwrap();
    assert_eq!(serde_json::to_string(&positions).unwrap(), "[0,1,2,3]");
}

#[test]
fn records_serialize_back_in_document_order() {
    let records = fixture("records.json");
    let first_record = first(&records, None);
    expect![[r#"{"name":"ada","team":"engines","commits":42,"languages":["ml","rust"]}"#]]
        .assert_eq(&serde_json::to_string(&first_record).expect("serializable"));
}
