use durapend::{append, value, Error, Format, Json, KeyFinder, Yaml};

fn finder() -> KeyFinder {
    KeyFinder::default()
}

mod json {
    use super::*;

    #[test]
    fn cant_decode() {
        let result = append(&finder(), &Json, "hoge");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn can_find_keys() {
        let input = r#"
[
  {
    "created_at" : "2020-01-01 00:00:00",
    "updated_at" : "2020-01-01 00:00:01"
  }
]"#;
        let output = append(&finder(), &Json, input).unwrap();
        assert_eq!(
            output,
            r#"[
  {
    "created_at": "2020-01-01 00:00:00",
    "duration": "1s",
    "updated_at": "2020-01-01 00:00:01"
  }
]"#
        );
    }

    #[test]
    fn nested_map() {
        let input = r#"
[
  {
    "hoge" : {
      "created_at" : "2020-01-01 00:00:00",
      "updated_at" : "2020-01-01 00:00:01"
    }
  }
]"#;
        let output = append(&finder(), &Json, input).unwrap();
        assert_eq!(
            output,
            r#"[
  {
    "hoge": {
      "created_at": "2020-01-01 00:00:00",
      "duration": "1s",
      "updated_at": "2020-01-01 00:00:01"
    }
  }
]"#
        );
    }

    #[test]
    fn nested_list() {
        let input = r#"
[
  {
    "hoge" : [
      {
        "created_at" : "2020-01-01 00:00:00",
        "updated_at" : "2020-01-01 00:00:01"
      }
   ]
  }
]"#;
        let output = append(&finder(), &Json, input).unwrap();
        assert_eq!(
            output,
            r#"[
  {
    "hoge": [
      {
        "created_at": "2020-01-01 00:00:00",
        "duration": "1s",
        "updated_at": "2020-01-01 00:00:01"
      }
    ]
  }
]"#
        );
    }

    #[test]
    fn cant_find_from_key() {
        let input = r#"
[
  {
    "hoge" : "2020-01-01 00:00:00",
    "updated_at" : "2020-01-01 00:00:01"
  }
]"#;
        let output = append(&finder(), &Json, input).unwrap();
        assert_eq!(
            output,
            "[\n  {\n    \"hoge\": \"2020-01-01 00:00:00\",\n    \"updated_at\": \"2020-01-01 00:00:01\"\n  }\n]"
        );
    }

    #[test]
    fn cant_find_to_key() {
        let input = r#"
[
  {
    "created_at" : "2020-01-01 00:00:00",
    "hoge" : "2020-01-01 00:00:01"
  }
]"#;
        let output = append(&finder(), &Json, input).unwrap();
        assert_eq!(
            output,
            "[\n  {\n    \"created_at\": \"2020-01-01 00:00:00\",\n    \"hoge\": \"2020-01-01 00:00:01\"\n  }\n]"
        );
    }

    #[test]
    fn cant_parse_time() {
        let input = r#"
[
  {
    "created_at" : "hoge",
    "updated_at" : "2020-01-01 00:00:01"
  }
]"#;
        let output = append(&finder(), &Json, input).unwrap();
        assert_eq!(
            output,
            r#"[
  {
    "created_at": "hoge",
    "updated_at": "2020-01-01 00:00:01"
  }
]"#
        );
    }
}

mod yaml {
    use super::*;

    // Key-order assertions compare positions in the encoded text since YAML
    // scalar quoting is the format's own business.
    fn key_position(output: &str, key: &str) -> usize {
        output
            .find(key)
            .unwrap_or_else(|| panic!("{key:?} missing from {output:?}"))
    }

    #[test]
    fn cant_decode() {
        let result = append(&finder(), &Yaml, "- [unclosed");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn can_find_keys() {
        let input = "
-  \"created_at\":  \"2020-01-01 00:00:00\"
   \"updated_at\":  \"2020-01-01 00:00:01\"
";
        let output = append(&finder(), &Yaml, input).unwrap();
        assert_eq!(
            Yaml.decode(&output).unwrap(),
            value!([{
                "created_at": "2020-01-01 00:00:00",
                "duration": "1s",
                "updated_at": "2020-01-01 00:00:01"
            }])
        );
        assert!(key_position(&output, "created_at") < key_position(&output, "duration"));
        assert!(key_position(&output, "duration") < key_position(&output, "updated_at"));
    }

    #[test]
    fn nested_map() {
        let input = "
- hoge:
    \"created_at\":  \"2020-01-01 00:00:00\"
    \"updated_at\":  \"2020-01-01 00:00:01\"
";
        let output = append(&finder(), &Yaml, input).unwrap();
        assert_eq!(
            Yaml.decode(&output).unwrap(),
            value!([{
                "hoge": {
                    "created_at": "2020-01-01 00:00:00",
                    "duration": "1s",
                    "updated_at": "2020-01-01 00:00:01"
                }
            }])
        );
    }

    #[test]
    fn nested_list() {
        let input = "
- hoge:
  - \"created_at\":  \"2020-01-01 00:00:00\"
    \"updated_at\":  \"2020-01-01 00:00:01\"
";
        let output = append(&finder(), &Yaml, input).unwrap();
        assert_eq!(
            Yaml.decode(&output).unwrap(),
            value!([{
                "hoge": [{
                    "created_at": "2020-01-01 00:00:00",
                    "duration": "1s",
                    "updated_at": "2020-01-01 00:00:01"
                }]
            }])
        );
    }

    #[test]
    fn cant_find_from_key() {
        let input = "
-  \"hoge\":  \"2020-01-01 00:00:00\"
   \"updated_at\":  \"2020-01-01 00:00:01\"
";
        let output = append(&finder(), &Yaml, input).unwrap();
        assert_eq!(
            Yaml.decode(&output).unwrap(),
            value!([{
                "hoge": "2020-01-01 00:00:00",
                "updated_at": "2020-01-01 00:00:01"
            }])
        );
    }

    #[test]
    fn cant_find_to_key() {
        let input = "
- \"created_at\":  \"2020-01-01 00:00:00\"
  \"hoge\":  \"2020-01-01 00:00:01\"
";
        let output = append(&finder(), &Yaml, input).unwrap();
        assert_eq!(
            Yaml.decode(&output).unwrap(),
            value!([{
                "created_at": "2020-01-01 00:00:00",
                "hoge": "2020-01-01 00:00:01"
            }])
        );
    }

    #[test]
    fn cant_parse_time() {
        let input = "
-  \"created_at\":  \"hoge\"
   \"updated_at\":  \"2020-01-01 00:00:01\"
";
        let output = append(&finder(), &Yaml, input).unwrap();
        assert_eq!(
            Yaml.decode(&output).unwrap(),
            value!([{
                "created_at": "hoge",
                "updated_at": "2020-01-01 00:00:01"
            }])
        );
    }
}

#[test]
fn formats_agree_on_the_augmented_tree() {
    let json_input = r#"[{"created_at": "2020-01-01 00:00:00", "updated_at": "2020-01-01 01:02:03"}]"#;
    let yaml_input = "- created_at: \"2020-01-01 00:00:00\"\n  updated_at: \"2020-01-01 01:02:03\"\n";

    let from_json = append(&finder(), &Json, json_input).unwrap();
    let from_yaml = append(&finder(), &Yaml, yaml_input).unwrap();

    assert_eq!(
        Json.decode(&from_json).unwrap(),
        Yaml.decode(&from_yaml).unwrap()
    );
}

#[test]
fn append_twice_is_stable() {
    let input = r#"[{"created_at": "2020-01-01 00:00:00", "updated_at": "2020-01-01 00:00:01"}]"#;
    let once = append(&finder(), &Json, input).unwrap();
    let twice = append(&finder(), &Json, &once).unwrap();
    assert_eq!(once, twice);
}
