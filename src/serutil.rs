use {
    serde::{
        de::{self, value::MapAccessDeserializer, Deserializer, IntoDeserializer, MapAccess, SeqAccess, Visitor},
        ser::{SerializeSeq, Serializer},
        Deserialize, Serialize,
    },
    std::{
        fmt::{Formatter, Result as FmtResult},
        marker::PhantomData,
        ops::Index,
        slice::{from_ref, Iter},
    },
};

/// Implement Display for a given class by formatting it as pretty-printed JSON.
#[macro_export]
macro_rules! display_json {
    ($cls:ident) => {
        impl std::fmt::Display for $cls {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                $crate::serutil::write_json(self, f)
            }
        }
    };
}

/// Implement FromStr for a given class by parsing it as JSON.
#[macro_export]
macro_rules! from_str_json {
    ($cls:ident) => {
        impl ::std::str::FromStr for $cls {
            type Err = ::serde_json::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match ::serde_json::from_str::<Self>(s) {
                    Ok(result) => Ok(result),
                    Err(e) => {
                        ::log::debug!("Failed to parse: {}: {:?}", s, e);
                        Err(e)
                    }
                }
            }
        }
    };
}

/// Write a value as JSON pretty-printed with a four-space indent.
pub fn write_json<T: Serialize + ?Sized>(value: &T, f: &mut Formatter) -> FmtResult {
    let buf = Vec::new();
    let serde_formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(buf, serde_formatter);
    if let Err(e) = value.serialize(&mut ser) {
        log::error!("Failed to serialize: {}", e);
        return Err(std::fmt::Error {});
    }

    match std::str::from_utf8(&ser.into_inner()) {
        Ok(s) => f.write_str(s),
        Err(e) => {
            log::error!("JSON serialization contained non-UTF-8 characters: {}", e);
            Err(std::fmt::Error {})
        }
    }
}

/// How a list-valued policy element was (or will be) represented in JSON.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListKind {
    Single,
    List,
}

/// A policy element that is either a single string-like value or a list of them.
///
/// IAM allows `"Action": "s3:GetObject"` and `"Action": ["s3:GetObject"]` interchangeably; both compare equal
/// here, but each serializes back in the form it was created with.
#[derive(Clone, Debug)]
pub enum StringLikeList<T> {
    Single(T),
    List(Vec<T>),
}

impl<T> StringLikeList<T> {
    /// Creates a list, collapsing a one-element vector to [StringLikeList::Single].
    pub fn collapsed(mut values: Vec<T>) -> Self {
        if values.len() == 1 {
            if let Some(value) = values.pop() {
                return Self::Single(value);
            }
        }

        Self::List(values)
    }

    #[inline]
    pub fn kind(&self) -> ListKind {
        match self {
            Self::Single(_) => ListKind::Single,
            Self::List(_) => ListKind::List,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Single(value) => from_ref(value).iter(),
            Self::List(values) => values.iter(),
        }
    }

    pub fn to_vec(&self) -> Vec<&T> {
        self.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(_) => false,
            Self::List(values) => values.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(values) => values.len(),
        }
    }
}

impl<T: PartialEq> PartialEq for StringLikeList<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Single(a), Self::Single(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Single(a), Self::List(b)) => b.len() == 1 && a == &b[0],
            (Self::List(a), Self::Single(b)) => a.len() == 1 && &a[0] == b,
        }
    }
}

impl<T: Eq> Eq for StringLikeList<T> {}

impl<T> From<T> for StringLikeList<T> {
    fn from(value: T) -> Self {
        Self::Single(value)
    }
}

impl<T> From<Vec<T>> for StringLikeList<T> {
    fn from(values: Vec<T>) -> Self {
        Self::List(values)
    }
}

impl<T> Index<usize> for StringLikeList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Self::Single(value) => {
                if index == 0 {
                    value
                } else {
                    panic!("index out of bounds: the len is 1 but the index is {}", index)
                }
            }
            Self::List(values) => &values[index],
        }
    }
}

impl<'a, T> IntoIterator for &'a StringLikeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> std::fmt::Display for StringLikeList<T> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write_json(self, f)
    }
}

struct StringLikeListVisitor<T> {
    phantom: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for StringLikeListVisitor<T> {
    type Value = StringLikeList<T>;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "string or list of strings")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(StringLikeList::Single(T::deserialize(v.into_deserializer())?))
    }

    // Condition values such as `"aws:SecureTransport": true` are kept in their string form.
    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut result = match access.size_hint() {
            Some(size) => Vec::with_capacity(size),
            None => Vec::new(),
        };

        while let Some(item) = access.next_element::<T>()? {
            result.push(item);
        }

        Ok(StringLikeList::List(result))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for StringLikeList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StringLikeListVisitor {
            phantom: PhantomData,
        })
    }
}

impl<T: Serialize> Serialize for StringLikeList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(value) => value.serialize(serializer),
            Self::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

/// A policy element that is either a single JSON object or a list of them, such as the `Statement` element.
#[derive(Clone, Debug)]
pub enum MapList<T> {
    Single(T),
    List(Vec<T>),
}

impl<T> MapList<T> {
    #[inline]
    pub fn kind(&self) -> ListKind {
        match self {
            Self::Single(_) => ListKind::Single,
            Self::List(_) => ListKind::List,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Single(value) => from_ref(value).iter(),
            Self::List(values) => values.iter(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(_) => false,
            Self::List(values) => values.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(values) => values.len(),
        }
    }
}

impl<T: PartialEq> PartialEq for MapList<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Single(a), Self::Single(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Single(a), Self::List(b)) => b.len() == 1 && a == &b[0],
            (Self::List(a), Self::Single(b)) => a.len() == 1 && &a[0] == b,
        }
    }
}

impl<T: Eq> Eq for MapList<T> {}

impl<T> From<T> for MapList<T> {
    fn from(value: T) -> Self {
        Self::Single(value)
    }
}

impl<T> From<Vec<T>> for MapList<T> {
    fn from(values: Vec<T>) -> Self {
        Self::List(values)
    }
}

impl<T> Index<usize> for MapList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Self::Single(value) => {
                if index == 0 {
                    value
                } else {
                    panic!("index out of bounds: the len is 1 but the index is {}", index)
                }
            }
            Self::List(values) => &values[index],
        }
    }
}

struct MapListVisitor<T> {
    phantom: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for MapListVisitor<T> {
    type Value = MapList<T>;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "object or list of objects")
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        Ok(MapList::Single(T::deserialize(MapAccessDeserializer::new(access))?))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut result = match access.size_hint() {
            Some(size) => Vec::with_capacity(size),
            None => Vec::new(),
        };

        while let Some(item) = access.next_element::<T>()? {
            result.push(item);
        }

        Ok(MapList::List(result))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MapList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MapListVisitor {
            phantom: PhantomData,
        })
    }
}

impl<T: Serialize> Serialize for MapList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(value) => value.serialize(serializer),
            Self::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{ListKind, MapList, StringLikeList},
        indoc::indoc,
        pretty_assertions::{assert_eq, assert_ne},
        serde::Serialize,
        std::{collections::BTreeMap, panic::catch_unwind},
    };

    #[test_log::test]
    fn test_basic_ops() {
        let sl1a = StringLikeList::Single("a".to_string());
        let sl1b = StringLikeList::List(vec!["a".to_string()]);
        let sl2 = StringLikeList::List(vec!["a".to_string(), "b".to_string()]);
        let sl3 = StringLikeList::<String>::List(vec![]);

        assert_eq!(sl1a, sl1b);
        assert_eq!(sl1b, sl1a);
        assert_ne!(sl1a, sl2);
        assert_ne!(sl2, sl1b);

        assert_eq!(sl1a.kind(), ListKind::Single);
        assert_eq!(sl1b.kind(), ListKind::List);
        assert!(!sl1a.is_empty());
        assert!(sl3.is_empty());
        assert_eq!(sl2.len(), 2);
        assert_eq!(sl2.to_vec(), vec!["a", "b"]);
        assert_eq!(sl1a[0], "a");

        let e = catch_unwind(|| {
            let single = StringLikeList::Single(1u32);
            println!("This won't print: {}", single[1]);
        })
        .unwrap_err();
        assert_eq!(*e.downcast::<String>().unwrap(), "index out of bounds: the len is 1 but the index is 1");
    }

    #[test_log::test]
    fn test_collapsed() {
        assert_eq!(StringLikeList::collapsed(vec![1]).kind(), ListKind::Single);
        assert_eq!(StringLikeList::collapsed(vec![1, 2]).kind(), ListKind::List);
        assert_eq!(StringLikeList::<u32>::collapsed(vec![]).kind(), ListKind::List);
    }

    #[test_log::test]
    fn test_serde() {
        let sl: StringLikeList<String> = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(sl.kind(), ListKind::Single);
        assert_eq!(serde_json::to_string(&sl).unwrap(), r#""abc""#);

        let sl: StringLikeList<String> = serde_json::from_str(r#"["abc", "def"]"#).unwrap();
        assert_eq!(sl.len(), 2);
        assert_eq!(
            sl.to_string(),
            indoc! { r#"
            [
                "abc",
                "def"
            ]"# }
        );

        let sl: StringLikeList<String> = serde_json::from_str("true").unwrap();
        assert_eq!(sl[0], "true");
        let sl: StringLikeList<String> = serde_json::from_str("42").unwrap();
        assert_eq!(sl[0], "42");

        let ml: MapList<BTreeMap<String, u32>> = serde_json::from_str(r#"{"a": 1}"#).unwrap();
        assert_eq!(ml.kind(), ListKind::Single);
        assert_eq!(ml[0]["a"], 1);
        let ml: MapList<BTreeMap<String, u32>> = serde_json::from_str(r#"[{"a": 1}, {"b": 2}]"#).unwrap();
        assert_eq!(ml.len(), 2);
        assert_eq!(ml.iter().count(), 2);
        assert_eq!(serde_json::to_string(&ml).unwrap(), r#"[{"a":1},{"b":2}]"#);
    }

    #[derive(Clone, Debug)]
    struct SerFail {}
    display_json!(SerFail);

    impl Serialize for SerFail {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("Serialization failed"))
        }
    }

    #[test_log::test]
    fn test_ser_fail() {
        let e = catch_unwind(|| SerFail {}.to_string()).unwrap_err();
        let e2 = e.downcast::<String>().unwrap();
        assert!((*e2).contains("a Display implementation returned an error"));
    }
}
