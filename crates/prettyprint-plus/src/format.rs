//! Human-readable formatting for sequences, maps and tuples.
//!
//! | Shape | Output |
//! |-------|--------|
//! | sequence | `[ 1, 2, 3 ]` |
//! | map | `{` / `  key: value` per line / `}` |
//! | tuple | `( a, b )` |
//! | anything else | its `Display` form |
//!
//! ```rust
//! use prettyprint_plus::format::PrettyFormat;
//! use std::collections::BTreeMap;
//!
//! assert_eq!(vec!["a", "b"].pretty(), "[ a, b ]");
//! assert_eq!(("x", 2).pretty(), "( x, 2 )");
//!
//! let mut map = BTreeMap::new();
//! map.insert("name", "Ann");
//! map.insert("role", "admin");
//! assert_eq!(map.pretty(), "{\n  name: Ann\n  role: admin\n}");
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;

use serde_json::Value;

/// Conversion of a value into its pretty-printed string.
pub trait PrettyFormat {
    fn pretty(&self) -> String;
}

/// Formats items as `[ a, b, c ]`.
pub fn format_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!("[ {} ]", join(items))
}

/// Formats items as `( a, b, c )`.
pub fn format_tuple<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!("( {} )", join(items))
}

/// Formats key/value pairs one per line inside braces.
pub fn format_dict<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let body: Vec<String> = entries
        .into_iter()
        .map(|(k, v)| format!("  {}: {}", k, v))
        .collect();
    format!("{{\n{}\n}}", body.join("\n"))
}

fn join<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl<T: PrettyFormat + ?Sized> PrettyFormat for &T {
    fn pretty(&self) -> String {
        (**self).pretty()
    }
}

macro_rules! display_impls {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PrettyFormat for $ty {
                fn pretty(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_impls!(
    str, String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: Display> PrettyFormat for [T] {
    fn pretty(&self) -> String {
        format_list(self)
    }
}

impl<T: Display, const N: usize> PrettyFormat for [T; N] {
    fn pretty(&self) -> String {
        format_list(self)
    }
}

impl<T: Display> PrettyFormat for Vec<T> {
    fn pretty(&self) -> String {
        format_list(self)
    }
}

impl<T: Display> PrettyFormat for VecDeque<T> {
    fn pretty(&self) -> String {
        format_list(self)
    }
}

impl<K: Display, V: Display, S> PrettyFormat for HashMap<K, V, S> {
    fn pretty(&self) -> String {
        format_dict(self)
    }
}

impl<K: Display, V: Display> PrettyFormat for BTreeMap<K, V> {
    fn pretty(&self) -> String {
        format_dict(self)
    }
}

macro_rules! tuple_impls {
    ($(($($name:ident $idx:tt)+))+) => {
        $(
            impl<$($name: Display),+> PrettyFormat for ($($name,)+) {
                fn pretty(&self) -> String {
                    let items: Vec<String> = vec![$(self.$idx.to_string()),+];
                    format_tuple(items)
                }
            }
        )+
    };
}

tuple_impls! {
    (A 0)
    (A 0 B 1)
    (A 0 B 1 C 2)
    (A 0 B 1 C 2 D 3)
    (A 0 B 1 C 2 D 3 E 4)
    (A 0 B 1 C 2 D 3 E 4 F 5)
}

/// JSON arrays print as lists and objects as dicts. Strings print without
/// quotes; nested containers print as compact JSON.
impl PrettyFormat for Value {
    fn pretty(&self) -> String {
        match self {
            Value::Array(items) => format_list(items.iter().map(scalar)),
            Value::Object(map) => format_dict(map.iter().map(|(k, v)| (k, scalar(v)))),
            other => scalar(other),
        }
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_list() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(empty.pretty(), "[  ]");
    }

    #[test]
    fn slices_and_arrays() {
        assert_eq!([1, 2, 3].pretty(), "[ 1, 2, 3 ]");
        assert_eq!(["x"][..].pretty(), "[ x ]");
    }

    #[test]
    fn deque() {
        let deque: VecDeque<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(deque.pretty(), "[ a, b ]");
    }

    #[test]
    fn single_entry_hashmap() {
        let mut map = HashMap::new();
        map.insert("k", 1);
        assert_eq!(map.pretty(), "{\n  k: 1\n}");
    }

    #[test]
    fn empty_dict_keeps_blank_body() {
        let map: BTreeMap<String, i32> = BTreeMap::new();
        assert_eq!(map.pretty(), "{\n\n}");
    }

    #[test]
    fn tuples() {
        assert_eq!((1,).pretty(), "( 1 )");
        assert_eq!((1, "two", 3.5, true, 'c', 6u8).pretty(), "( 1, two, 3.5, true, c, 6 )");
    }

    #[test]
    fn scalars_use_display() {
        assert_eq!(42i32.pretty(), "42");
        assert_eq!("hello".pretty(), "hello");
        assert_eq!(String::from("s").pretty(), "s");
    }

    #[test]
    fn json_array_and_object() {
        assert_eq!(json!([1, "a", null]).pretty(), "[ 1, a, null ]");
        assert_eq!(
            json!({"name": "Ann", "tags": ["x"]}).pretty(),
            "{\n  name: Ann\n  tags: [\"x\"]\n}"
        );
        assert_eq!(json!("plain").pretty(), "plain");
        assert_eq!(json!(3).pretty(), "3");
    }
}
