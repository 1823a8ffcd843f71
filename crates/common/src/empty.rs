//! Emptiness checks across strings, collections, options and JSON values.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use serde_json::Value;

/// Types that have a notion of "holds nothing".
///
/// Whitespace is content: `" "` is not empty.
///
/// # Examples
///
/// ```
/// use utilbelt_common::IsEmpty;
/// use serde_json::json;
///
/// assert!(json!({}).is_empty_value());
/// assert!(None::<String>.is_empty_value());
/// assert!(!" ".is_empty_value());
/// ```
pub trait IsEmpty {
    /// True if this value holds nothing.
    fn is_empty_value(&self) -> bool;
}

/// Free-function form of [`IsEmpty::is_empty_value`].
pub fn is_empty<T: IsEmpty + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> IsEmpty for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// `None` is empty; `Some(_)` never is, even `Some("")`.
impl<T> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// Null, `[]` and `{}` are empty. Strings, numbers and booleans never are,
/// including `""`, `0` and `false`.
impl IsEmpty for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => false,
        }
    }
}
