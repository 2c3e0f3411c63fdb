/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Handy for constructing document trees in tests and programmatic callers
/// without going through a format decode.
///
/// # Examples
///
/// ```rust
/// use durapend::{value, Value};
///
/// let doc = value!([{
///     "created_at": "2020-01-01 00:00:00",
///     "updated_at": "2020-01-01 00:00:01",
///     "tags": ["a", "b"],
///     "count": 2,
///     "active": true,
///     "note": null
/// }]);
/// assert!(doc.is_array());
/// ```
#[macro_export]
macro_rules! value {
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
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $val:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($val));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback: anything `Value: From` accepts (numbers, strings, bools)
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
