use std::sync::Arc;

// The parameter bag handed to every api method. Callers can stuff anything in here,
// including event hooks; only the values that make sense on the wire get serialized.

#[derive(Clone)]
pub enum ParamValue
{
    Text(String),
    Integer(i64),
    Float(f64),
    Omitted,
    Callback(Arc<dyn Fn() + Send + Sync>) //Never sent to flickr
}

impl ParamValue {
    /// The value as it should appear in the query string, or None if it can't be sent at all
    pub fn to_wire(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Integer(int) => Some(int.to_string()),
            Self::Float(float) => Some(float.to_string()),
            Self::Omitted | Self::Callback(_) => None
        }
    }
}

impl std::fmt::Debug for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "Text({:?})", text),
            Self::Integer(int) => write!(f, "Integer({})", int),
            Self::Float(float) => write!(f, "Float({})", float),
            Self::Omitted => write!(f, "Omitted"),
            Self::Callback(_) => write!(f, "Callback(..)")
        }
    }
}

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Omitted, Self::Omitted) => true,
            (Self::Callback(a), Self::Callback(b)) => Arc::ptr_eq(a, b),
            _ => false
        }
    }
}

macro_rules! param_from {
    ($variant:ident, $($t:ty => $conv:expr),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self { Self::$variant($conv(value)) }
            }
        )*
    };
}

param_from!(Text, &str => String::from, String => std::convert::identity, &String => Clone::clone);
param_from!(Integer, i64 => std::convert::identity, i32 => i64::from, u32 => i64::from);
param_from!(Float, f64 => std::convert::identity);

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParamValue::Omitted)
    }
}

/// Ordered key/value parameters. Inserting an existing key replaces the value but keeps
/// its original position, so urls come out in a stable order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiParameters
{
    entries: Vec<(String, ParamValue)>
}

impl ApiParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k,_)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value))
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k,_)| k == key).map(|(_,v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k,_)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether the key is present with something we'd actually send
    pub fn has_wire_value(&self, key: &str) -> bool {
        self.get(key).and_then(|v| v.to_wire()).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k,v)| (k.as_str(), v))
    }

    /// A fresh list of only the serializable pairs; callbacks and omitted values are dropped.
    pub fn sanitized(&self) -> Vec<(String, String)> {
        self.entries.iter()
            .filter_map(|(k,v)| v.to_wire().map(|wire| (k.clone(), wire)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ApiParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut params = ApiParameters::new().with("text", "cat").with("page", 2);
        params.insert("text", "dog");
        assert_eq!(params.sanitized(), vec![
            (String::from("text"), String::from("dog")),
            (String::from("page"), String::from("2"))
        ]);
    }

    #[test]
    fn sanitized_drops_callbacks_and_omitted() {
        let params = ApiParameters::new()
            .with("onComplete", ParamValue::Callback(Arc::new(|| {})))
            .with("tags", "sea")
            .with("user_id", Option::<String>::None)
            .with("per_page", 20);
        assert_eq!(params.len(), 4);
        assert_eq!(params.sanitized(), vec![
            (String::from("tags"), String::from("sea")),
            (String::from("per_page"), String::from("20"))
        ]);
    }

    #[test]
    fn sanitized_leaves_input_alone() {
        let params = ApiParameters::new().with("hook", ParamValue::Callback(Arc::new(|| {})));
        let _ = params.sanitized();
        assert!(matches!(params.get("hook"), Some(ParamValue::Callback(_))));
    }

    #[test]
    fn wire_values() {
        let params: ApiParameters = vec![("a", "x"), ("b", "")].into_iter().collect();
        assert!(params.has_wire_value("a"));
        assert!(params.has_wire_value("b"));
        assert!(!params.has_wire_value("c"));
        assert_eq!(ParamValue::from(1.5).to_wire(), Some(String::from("1.5")));
        assert_eq!(ParamValue::Omitted.to_wire(), None);
    }

    #[test]
    fn remove_entry() {
        let mut params = ApiParameters::new().with("a", 1).with("b", 2);
        assert_eq!(params.remove("a"), Some(ParamValue::Integer(1)));
        assert_eq!(params.remove("a"), None);
        assert_eq!(params.len(), 1);
    }
}
