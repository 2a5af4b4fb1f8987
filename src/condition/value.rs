use {
    crate::serutil::StringLikeList,
    chrono::{DateTime, SecondsFormat, Utc},
    ipnet::IpNet,
    std::net::IpAddr,
};

/// The values for one condition key, rendered as IAM expects them (strings, or a list of strings).
///
/// A single value serializes as a scalar; two or more as a list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConditionValues(StringLikeList<String>);

impl ConditionValues {
    /// Base64-encode binary data for use with `BinaryEquals`.
    pub fn binary(data: &[u8]) -> Self {
        Self::from(base64::encode(data))
    }

    #[inline]
    pub fn into_inner(self) -> StringLikeList<String> {
        self.0
    }

    #[inline]
    pub fn as_list(&self) -> &StringLikeList<String> {
        &self.0
    }
}

impl From<String> for ConditionValues {
    fn from(value: String) -> Self {
        Self(StringLikeList::Single(value))
    }
}

impl From<&str> for ConditionValues {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<&String> for ConditionValues {
    fn from(value: &String) -> Self {
        Self::from(value.clone())
    }
}

impl From<bool> for ConditionValues {
    fn from(value: bool) -> Self {
        Self::from(value.to_string())
    }
}

macro_rules! from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConditionValues {
                fn from(value: $ty) -> Self {
                    Self::from(value.to_string())
                }
            }
        )*
    };
}

from_display!(i32, i64, u32, u64, usize, f64, IpAddr, IpNet);

impl From<DateTime<Utc>> for ConditionValues {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from(value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl From<Vec<String>> for ConditionValues {
    fn from(values: Vec<String>) -> Self {
        Self(StringLikeList::collapsed(values))
    }
}

impl From<Vec<&str>> for ConditionValues {
    fn from(values: Vec<&str>) -> Self {
        Self::from(values.into_iter().map(str::to_string).collect::<Vec<_>>())
    }
}

impl From<&[&str]> for ConditionValues {
    fn from(values: &[&str]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for ConditionValues {
    fn from(values: [&str; N]) -> Self {
        Self::from(values.to_vec())
    }
}

impl From<StringLikeList<String>> for ConditionValues {
    fn from(values: StringLikeList<String>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::ConditionValues,
        crate::serutil::ListKind,
        chrono::{TimeZone, Utc},
        ipnet::IpNet,
        pretty_assertions::assert_eq,
        std::{net::IpAddr, str::FromStr},
    };

    fn rendered(values: ConditionValues) -> String {
        serde_json::to_string(values.as_list()).unwrap()
    }

    #[test_log::test]
    fn test_scalars() {
        assert_eq!(rendered("abc".into()), r#""abc""#);
        assert_eq!(rendered(true.into()), r#""true""#);
        assert_eq!(rendered(42i64.into()), r#""42""#);
        assert_eq!(rendered(1.5f64.into()), r#""1.5""#);
        assert_eq!(rendered(IpAddr::from_str("10.0.0.1").unwrap().into()), r#""10.0.0.1""#);
        assert_eq!(rendered(IpNet::from_str("10.0.0.0/8").unwrap().into()), r#""10.0.0.0/8""#);
    }

    #[test_log::test]
    fn test_dates_and_binary() {
        let when = Utc.with_ymd_and_hms(2019, 7, 16, 12, 0, 0).unwrap();
        assert_eq!(rendered(when.into()), r#""2019-07-16T12:00:00Z""#);
        assert_eq!(rendered(ConditionValues::binary(b"hello")), r#""aGVsbG8=""#);
    }

    #[test_log::test]
    fn test_lists() {
        let one = ConditionValues::from(vec!["a"]);
        assert_eq!(one.as_list().kind(), ListKind::Single);
        assert_eq!(rendered(one), r#""a""#);

        let two = ConditionValues::from(["a", "b"]);
        assert_eq!(two.as_list().kind(), ListKind::List);
        assert_eq!(rendered(two.clone()), r#"["a","b"]"#);
        assert_eq!(two.into_inner().len(), 2);

        let slice: &[&str] = &["x", "y", "z"];
        assert_eq!(rendered(slice.into()), r#"["x","y","z"]"#);
    }
}
