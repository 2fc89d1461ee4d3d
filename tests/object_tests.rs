use jsondoc::{Error, JsonObject, Number, ToJson, Value};

#[test]
fn simple_string_insert_retrieval() {
    let mut obj = JsonObject::new();
    obj.put("one", "one").unwrap();
    obj.put("two", "two").unwrap();
    obj.put("three", "This is 3").unwrap();

    assert_eq!(obj.get("one").unwrap(), Some(&Value::from("one")));
    assert_eq!(obj.get_string("one").unwrap(), Some("one"));
    assert_eq!(obj.get_string("two").unwrap(), Some("two"));
    assert_eq!(obj.get_string("three").unwrap(), Some("This is 3"));
}

#[test]
fn simple_integer_insert_retrieval() {
    let mut obj = JsonObject::new();
    obj.put("integerOne", 1).unwrap();
    obj.put("integerTwo", 2).unwrap();
    obj.put("integerThree", 3).unwrap();

    assert_eq!(
        obj.get("integerOne").unwrap(),
        Some(&Value::Number(Number::Int(1)))
    );
    assert_eq!(obj.get_i32("integerOne").unwrap(), 1);
    assert_eq!(obj.get_i32("integerTwo").unwrap(), 2);
    assert_eq!(obj.get_i32("integerThree").unwrap(), 3);
    assert_eq!(obj.get_i64("integerThree").unwrap(), 3);
}

#[test]
fn simple_double_insert_retrieval() {
    let mut obj = JsonObject::new();
    obj.put("doubleOne", 1.0).unwrap();
    obj.put("doubleTwo", 2).unwrap();
    obj.put("doubleThree", 3.0000).unwrap();

    assert_eq!(obj.get_f64("doubleOne").unwrap(), 1.0);
    // An integer reads back through the double getter.
    assert_eq!(obj.get_f64("doubleTwo").unwrap(), 2.0);
    assert_eq!(obj.get_f64("doubleThree").unwrap(), 3.0);
}

#[test]
fn simple_null_insert_retrieval() {
    let mut obj = JsonObject::new();
    obj.put("Null", Value::Null).unwrap();
    obj.put("NotNull", "null").unwrap();
    obj.put("NullString", Option::<&str>::None).unwrap();
    obj.put("NotNullString", "null").unwrap();

    assert_eq!(obj.get("Null").unwrap(), None);
    assert_eq!(obj.get_string("Null").unwrap(), None);

    assert_eq!(obj.get_string("NullString").unwrap(), None);

    // The four-character string "null" is a value, not a null.
    assert_eq!(obj.get("NotNull").unwrap(), Some(&Value::from("null")));
    assert_eq!(obj.get_string("NotNull").unwrap(), Some("null"));
    assert_eq!(obj.get_string("NotNullString").unwrap(), Some("null"));
}

#[test]
fn absent_key_is_an_error_not_a_null() {
    let mut obj = JsonObject::new();
    obj.put("k", Value::Null).unwrap();

    assert_eq!(obj.get("k").unwrap(), None);
    match obj.get("missing") {
        Err(Error::KeyNotFound { key }) => assert_eq!(key, "missing"),
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
}

#[test]
fn construct_from_simple_string() {
    let obj: JsonObject = r#"{"one":"two","key":"value"}"#.parse().unwrap();

    assert_eq!(obj.get_string("one").unwrap(), Some("two"));
    assert_eq!(obj.get_string("key").unwrap(), Some("value"));
}

#[test]
fn construct_from_indented_string() {
    let source = "{\n   \"object_or_array\": \"object\",\n   \"empty\": false,\n   \"time_milliseconds\": 19608,\n   \"validate\": true,\n   \"size\": 5\n}";
    let obj: JsonObject = source.parse().unwrap();

    assert_eq!(obj.get_string("object_or_array").unwrap(), Some("object"));
    assert!(!obj.get_bool("empty").unwrap());
    assert_eq!(obj.get_i32("time_milliseconds").unwrap(), 19608);
    assert!(obj.get_bool("validate").unwrap());
    assert_eq!(obj.get_i32("size").unwrap(), 5);
}

#[test]
fn to_simple_string() {
    let mut obj = JsonObject::new();
    obj.put("one", "one").unwrap();
    obj.put("two", "two").unwrap();
    obj.put("three", "This is 3").unwrap();

    assert_eq!(
        obj.to_string(),
        r#"{"one":"one","two":"two","three":"This is 3"}"#
    );
}

#[test]
fn from_string_back_to_string() {
    let source = "{\n   \"object_or_array\": \"object\",\n   \"empty\": false,\n   \"time_milliseconds\": 19608,\n   \"validate\": true,\n   \"size\": 5\n}";
    let obj: JsonObject = source.parse().unwrap();

    assert_eq!(
        obj.to_string(),
        "{\"object_or_array\":\"object\",\
         \"empty\":false,\
         \"time_milliseconds\":19608,\
         \"validate\":true,\
         \"size\":5}"
    );
}

#[test]
fn typed_getter_coercions() {
    let obj: JsonObject =
        r#"{"b":"TRUE","d":"2.5","i":"17","real_bool":false,"real_num":4}"#.parse().unwrap();

    assert!(obj.get_bool("b").unwrap());
    assert!(!obj.get_bool("real_bool").unwrap());
    assert_eq!(obj.get_f64("d").unwrap(), 2.5);
    assert_eq!(obj.get_i32("i").unwrap(), 17);
    assert_eq!(obj.get_i64("i").unwrap(), 17);
    assert_eq!(obj.get_i32("real_num").unwrap(), 4);

    assert!(matches!(
        obj.get_bool("d"),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        obj.get_object("i"),
        Err(Error::TypeMismatch { .. })
    ));
}

#[test]
fn opt_getters_substitute_defaults() {
    let obj: JsonObject = r#"{"s":"text","n":3}"#.parse().unwrap();

    assert_eq!(obj.opt_string("s"), "text");
    assert_eq!(obj.opt_string("missing"), "");
    assert_eq!(obj.opt_string_or("missing", "fallback"), "fallback");
    assert_eq!(obj.opt_i32("n"), 3);
    assert_eq!(obj.opt_i32("s"), 0);
    assert_eq!(obj.opt_i64_or("missing", -5), -5);
    assert!(obj.opt_f64("missing").is_nan());
    assert_eq!(obj.opt_f64_or("missing", 1.5), 1.5);
    assert!(!obj.opt_bool("missing"));
    assert!(obj.opt_object("missing").is_none());
    assert!(obj.opt_array("missing").is_none());
}

#[test]
fn remove_returns_the_prior_value() {
    let mut obj = JsonObject::new();
    obj.put("k", 1).unwrap();

    assert_eq!(obj.remove("k"), Some(Value::Number(Number::Int(1))));
    assert_eq!(obj.remove("k"), None);
    assert!(obj.is_empty());
}

#[test]
fn strict_insert_rejects_non_finite_numbers() {
    let mut obj = JsonObject::new();
    assert_eq!(obj.put("nan", f64::NAN).unwrap_err(), Error::InvalidNumber);
    assert_eq!(
        obj.accumulate("inf", f64::INFINITY).unwrap_err(),
        Error::InvalidNumber
    );
    assert_eq!(
        obj.append("neg", f64::NEG_INFINITY).unwrap_err(),
        Error::InvalidNumber
    );
    assert!(obj.is_empty());
}

#[test]
fn from_pairs_builds_with_lenient_semantics() {
    let obj = JsonObject::from_pairs([("a", 1.5), ("bad", f64::NAN), ("b", 2.0)]);
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get_f64("a").unwrap(), 1.5);
    assert!(!obj.has("bad"));
}

#[test]
fn nested_ownership_is_by_value() {
    let mut inner = JsonObject::new();
    inner.put("x", 1).unwrap();

    let mut outer = JsonObject::new();
    outer.put("inner", inner.clone()).unwrap();

    // Mutating the original does not affect the stored copy.
    inner.put("x", 99).unwrap();
    assert_eq!(outer.get_object("inner").unwrap().get_i32("x").unwrap(), 1);
}

#[test]
fn to_json_projects_an_external_type() {
    struct Account {
        name: &'static str,
        balance: f64,
        closed: bool,
    }

    impl ToJson for Account {
        fn to_json(&self) -> Value {
            let mut obj = JsonObject::new();
            obj.put_opt(Some("name"), self.name);
            obj.put_opt(Some("balance"), self.balance);
            obj.put_opt(Some("closed"), self.closed);
            obj.into()
        }
    }

    let account = Account {
        name: "savings",
        balance: 250.5,
        closed: false,
    };

    let mut obj = JsonObject::new();
    obj.put("account", account.to_json()).unwrap();
    assert_eq!(
        obj.to_string(),
        r#"{"account":{"name":"savings","balance":250.5,"closed":false}}"#
    );
}

#[test]
fn chained_puts() {
    let mut obj = JsonObject::new();
    obj.put("a", 1)
        .and_then(|o| o.put("b", 2))
        .and_then(|o| o.put("c", 3))
        .unwrap();
    assert_eq!(obj.len(), 3);
}
