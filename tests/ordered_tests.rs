use jsondoc::{JsonObject, KeyOrder};

#[test]
fn simple_ordered_object() {
    let mut obj = JsonObject::sorted();
    obj.put("Germany", "Berlin").unwrap();
    obj.put("England", "London").unwrap();
    obj.put("France", "Paris").unwrap();
    obj.put("United States", "Washington").unwrap();
    obj.put("Spain", "Madrid").unwrap();
    obj.put("Austria", "Vienna").unwrap();

    let expected = [
        ("Austria", "Vienna"),
        ("England", "London"),
        ("France", "Paris"),
        ("Germany", "Berlin"),
        ("Spain", "Madrid"),
        ("United States", "Washington"),
    ];

    let actual: Vec<(&str, &str)> = obj
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str().unwrap()))
        .collect();

    assert_eq!(actual, expected);
}

#[test]
fn ordered_object_to_string() {
    let mut obj = JsonObject::sorted();
    obj.put("Germany", "Berlin").unwrap();
    obj.put("France", "Paris").unwrap();
    obj.put("England", "London").unwrap();
    obj.put("United States", "Washington").unwrap();
    obj.put("Spain", "Madrid").unwrap();
    obj.put("Austria", "Vienna").unwrap();

    assert_eq!(
        obj.to_string(),
        "{\"Austria\":\"Vienna\",\
         \"England\":\"London\",\
         \"France\":\"Paris\",\
         \"Germany\":\"Berlin\",\
         \"Spain\":\"Madrid\",\
         \"United States\":\"Washington\"}"
    );
}

#[test]
fn ordered_variant_is_a_configuration_not_a_type() {
    let mut insertion = JsonObject::new();
    let mut sorted = JsonObject::with_order(KeyOrder::Sorted);

    for (key, value) in [("b", 2), ("a", 1), ("c", 3)] {
        insertion.put(key, value).unwrap();
        sorted.put(key, value).unwrap();
    }

    assert_eq!(insertion.order(), KeyOrder::Insertion);
    assert_eq!(sorted.order(), KeyOrder::Sorted);

    // Same contents, same behavior; only iteration order differs.
    assert_eq!(insertion, sorted);
    assert_eq!(insertion.to_string(), r#"{"b":2,"a":1,"c":3}"#);
    assert_eq!(sorted.to_string(), r#"{"a":1,"b":2,"c":3}"#);
}

#[test]
fn to_sorted_rekeys_an_insertion_object() {
    let mut obj = JsonObject::new();
    obj.put("zebra", 1).unwrap();
    obj.put("apple", 2).unwrap();

    let sorted = obj.to_sorted();
    assert_eq!(sorted.order(), KeyOrder::Sorted);
    assert_eq!(sorted.to_string(), r#"{"apple":2,"zebra":1}"#);
    assert_eq!(sorted, obj);
}

#[test]
fn parsing_with_sorted_order() {
    let obj =
        JsonObject::parse_with_order(r#"{"b": 2, "a": {"y": 1, "x": 0}}"#, KeyOrder::Sorted)
            .unwrap();
    assert_eq!(obj.to_string(), r#"{"a":{"x":0,"y":1},"b":2}"#);
}

#[test]
fn sorted_subset_preserves_the_strategy() {
    let mut obj = JsonObject::sorted();
    obj.put("c", 3).unwrap();
    obj.put("a", 1).unwrap();
    obj.put("b", 2).unwrap();

    let sub = obj.subset(&["c", "a", "nope"]);
    assert_eq!(sub.order(), KeyOrder::Sorted);
    assert_eq!(sub.to_string(), r#"{"a":1,"c":3}"#);
}
