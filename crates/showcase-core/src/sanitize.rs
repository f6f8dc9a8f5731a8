use serde_json::Value;

use crate::model::Repository;

/// Returns true when `candidate` carries every field a [`Repository`] needs.
///
/// Ids and star counts must be non-negative integers; name, url and the
/// updated timestamp must be strings.
pub fn is_valid_repository(candidate: &Value) -> bool {
    let Some(record) = candidate.as_object() else {
        return false;
    };
    record.get("id").and_then(Value::as_u64).is_some()
        && record.get("name").is_some_and(Value::is_string)
        && record.get("html_url").is_some_and(Value::is_string)
        && record
            .get("stargazers_count")
            .and_then(Value::as_u64)
            .is_some()
        && record.get("updated_at").is_some_and(Value::is_string)
}

/// Keeps the valid records of a raw payload, in order.
///
/// Anything other than a JSON array yields an empty list.
pub fn sanitize(candidates: &Value) -> Vec<Repository> {
    let Some(items) = candidates.as_array() else {
        return Vec::new();
    };
    items.iter().filter_map(to_repository).collect()
}

fn to_repository(candidate: &Value) -> Option<Repository> {
    if !is_valid_repository(candidate) {
        return None;
    }
    let name = text(candidate, "name")?;
    Some(Repository {
        id: candidate.get("id")?.as_u64()?,
        full_name: text(candidate, "full_name").unwrap_or_else(|| name.clone()),
        name,
        html_url: text(candidate, "html_url")?,
        description: text(candidate, "description"),
        stargazers_count: candidate.get("stargazers_count")?.as_u64()?,
        language: text(candidate, "language"),
        updated_at: text(candidate, "updated_at")?,
        created_at: text(candidate, "created_at"),
        fork: flag(candidate, "fork"),
        archived: flag(candidate, "archived"),
        disabled: flag(candidate, "disabled"),
    })
}

fn text(candidate: &Value, key: &str) -> Option<String> {
    candidate
        .get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

fn flag(candidate: &Value, key: &str) -> bool {
    candidate.get(key).and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{Map, json};

    fn record(id: u64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "full_name": format!("acme/{name}"),
            "html_url": format!("https://github.com/acme/{name}"),
            "description": null,
            "stargazers_count": 12,
            "language": "Rust",
            "updated_at": "2026-10-01T08:00:00Z",
            "created_at": "2020-01-01T00:00:00Z",
            "fork": false,
            "archived": true,
            "disabled": false,
            "watchers": 4
        })
    }

    #[test]
    fn accepts_complete_record() {
        assert!(is_valid_repository(&record(1, "api")));
    }

    #[test]
    fn rejects_mistyped_or_missing_fields() {
        let mut value = record(1, "api");
        value["id"] = json!("1");
        assert!(!is_valid_repository(&value));

        let mut value = record(1, "api");
        value["stargazers_count"] = json!("many");
        assert!(!is_valid_repository(&value));

        let mut value = record(1, "api");
        value.as_object_mut().unwrap().remove("updated_at");
        assert!(!is_valid_repository(&value));

        let mut value = record(1, "api");
        value["html_url"] = Value::Null;
        assert!(!is_valid_repository(&value));

        assert!(!is_valid_repository(&json!(null)));
        assert!(!is_valid_repository(&json!([1, 2])));
    }

    #[test]
    fn sanitize_keeps_valid_records_in_order() {
        let payload = json!([
            record(3, "web"),
            { "id": 9, "name": "broken" },
            record(1, "api"),
            "junk"
        ]);
        let repos = sanitize(&payload);
        let names: Vec<&str> = repos.iter().map(|repo| repo.name.as_str()).collect();
        assert_eq!(names, vec!["web", "api"]);
        assert_eq!(repos[0].full_name, "acme/web");
        assert!(repos[0].archived);
        assert_eq!(repos[0].description, None);
        assert_eq!(repos[0].language.as_deref(), Some("Rust"));
    }

    #[test]
    fn sanitize_non_array_is_empty() {
        assert!(sanitize(&json!({ "message": "Not Found" })).is_empty());
        assert!(sanitize(&Value::Null).is_empty());
    }

    #[test]
    fn full_name_falls_back_to_name() {
        let mut value = record(5, "docs");
        value.as_object_mut().unwrap().remove("full_name");
        let repos = sanitize(&json!([value]));
        assert_eq!(repos[0].full_name, "docs");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let mut partial = record(7, "cli");
        for key in ["full_name", "created_at", "fork", "language"] {
            partial.as_object_mut().unwrap().remove(key);
        }
        let payload = json!([record(3, "web"), { "id": "x" }, partial]);
        let once = sanitize(&payload);
        let twice = sanitize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    static FIELDS: &[&str] = &[
        "id",
        "name",
        "full_name",
        "html_url",
        "description",
        "stargazers_count",
        "language",
        "updated_at",
        "created_at",
        "fork",
        "archived",
    ];

    fn loose_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<u64>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            (-1.0e6f64..1.0e6).prop_map(Value::from),
            "[a-z0-9:-]{0,12}".prop_map(Value::from),
        ]
    }

    // Every field present, absent or of any JSON type, so both admitted and
    // rejected records show up.
    fn loose_record() -> impl Strategy<Value = Value> {
        prop::collection::vec(proptest::option::of(loose_value()), FIELDS.len()).prop_map(
            |values| {
                let record: Map<String, Value> = FIELDS
                    .iter()
                    .zip(values)
                    .filter_map(|(key, value)| Some((key.to_string(), value?)))
                    .collect();
                Value::Object(record)
            },
        )
    }

    prop_compose! {
        fn well_typed_record()(
            id in any::<u64>(),
            name in "[a-z][a-z0-9-]{0,10}",
            stars in any::<u64>(),
            updated_at in "[0-9TZ:-]{0,20}",
            description in proptest::option::of("[ -~]{0,16}"),
            fork in proptest::option::of(any::<bool>()),
        ) -> Value {
            let mut value = json!({
                "id": id,
                "name": name,
                "html_url": format!("https://github.com/acme/{name}"),
                "stargazers_count": stars,
                "updated_at": updated_at,
                "description": description,
            });
            if let Some(fork) = fork {
                value["fork"] = json!(fork);
            }
            value
        }
    }

    fn payload() -> impl Strategy<Value = Value> {
        let candidate = prop_oneof![well_typed_record(), loose_record(), loose_value()];
        prop::collection::vec(candidate, 0..12).prop_map(Value::Array)
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent_for_any_array(payload in payload()) {
            let once = sanitize(&payload);
            let reserialized = serde_json::to_value(&once).unwrap();
            prop_assert!(reserialized
                .as_array()
                .unwrap()
                .iter()
                .all(is_valid_repository));
            prop_assert_eq!(sanitize(&reserialized), once);
        }

        #[test]
        fn sanitize_never_grows_the_payload(payload in payload()) {
            let admitted = sanitize(&payload);
            let valid = payload
                .as_array()
                .unwrap()
                .iter()
                .filter(|candidate| is_valid_repository(candidate))
                .count();
            prop_assert_eq!(admitted.len(), valid);
        }
    }
}
