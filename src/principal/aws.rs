use {
    crate::BuilderError,
    lazy_static::lazy_static,
    regex::Regex,
    scratchstack_arn::Arn,
    serde::{
        de::{self, Deserializer, Unexpected, Visitor},
        ser::Serializer,
        Deserialize, Serialize,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

lazy_static! {
    static ref AWS_ACCOUNT_ID: Regex = Regex::new(r"^\d{12}$").unwrap();
}

/// A value in the `AWS` key of a `Principal` element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AwsPrincipal {
    Account(String),
    Any,
    Arn(Arn),
}

impl AwsPrincipal {
    /// The account root principal, `arn:<partition>:iam::<account_id>:root`.
    pub fn account_root(partition: &str, account_id: &str) -> Result<Self, BuilderError> {
        Self::from_str(&format!("arn:{partition}:iam::{account_id}:root"))
    }

    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl Display for AwsPrincipal {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Account(account_id) => f.write_str(account_id),
            Self::Any => f.write_str("*"),
            Self::Arn(arn) => arn.fmt(f),
        }
    }
}

impl FromStr for AwsPrincipal {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, BuilderError> {
        if s == "*" {
            Ok(Self::Any)
        } else if AWS_ACCOUNT_ID.is_match(s) {
            Ok(AwsPrincipal::Account(s.to_string()))
        } else {
            match Arn::from_str(s) {
                Ok(arn) => Ok(AwsPrincipal::Arn(arn)),
                Err(e) => {
                    log::debug!("Failed to parse AWS principal {}: {}", s, e);
                    Err(BuilderError::InvalidPrincipal(s.to_string()))
                }
            }
        }
    }
}

struct AwsPrincipalVisitor {}

impl<'de> Visitor<'de> for AwsPrincipalVisitor {
    type Value = AwsPrincipal;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "AWS account ID or ARN")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        AwsPrincipal::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for AwsPrincipal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(AwsPrincipalVisitor {})
    }
}

impl Serialize for AwsPrincipal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{AwsPrincipal, BuilderError},
        pretty_assertions::{assert_eq, assert_ne},
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_parse() {
        assert_eq!(AwsPrincipal::from_str("*").unwrap(), AwsPrincipal::Any);
        assert_eq!(
            AwsPrincipal::from_str("123456789012").unwrap(),
            AwsPrincipal::Account("123456789012".to_string())
        );

        let root = AwsPrincipal::account_root("aws", "123456789012").unwrap();
        assert_eq!(root.to_string(), "arn:aws:iam::123456789012:root");
        assert_ne!(root, AwsPrincipal::Any);
        assert!(AwsPrincipal::Any.is_any());

        assert_eq!(
            AwsPrincipal::from_str("arn:aws:").unwrap_err(),
            BuilderError::InvalidPrincipal("arn:aws:".to_string())
        );
        assert_eq!(
            AwsPrincipal::from_str("12345").unwrap_err(),
            BuilderError::InvalidPrincipal("12345".to_string())
        );
    }

    #[test_log::test]
    fn test_serde() {
        let p: AwsPrincipal = serde_json::from_str(r#""arn:aws:iam::123456789012:role/test""#).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), r#""arn:aws:iam::123456789012:role/test""#);
        assert!(serde_json::from_str::<AwsPrincipal>(r#""not-a-principal""#).is_err());
    }
}
