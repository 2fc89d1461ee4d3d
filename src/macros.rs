/// Builds a [`Value`](crate::Value) from a JSON-shaped literal.
///
/// ```rust
/// use jsondoc::json;
///
/// let doc = json!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["admin", "user"],
///     "manager": null
/// });
/// assert_eq!(
///     doc.to_string(),
///     r#"{"name":"Alice","age":30,"tags":["admin","user"],"manager":null}"#
/// );
/// ```
#[macro_export]
macro_rules! json {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array($crate::JsonArray::new())
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::from(vec![$($crate::json!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::JsonObject::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonObject::new();
        $(
            object.put_opt(Some($key), $crate::json!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback: any expression convertible into a value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
