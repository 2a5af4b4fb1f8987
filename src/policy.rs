use {
    crate::{BuilderError, Statement, StatementList},
    derive_builder::Builder,
    serde::{
        de::{self, Deserializer, MapAccess, Visitor},
        ser::{SerializeMap, Serializer},
        Deserialize, Serialize,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

const POLICY_FIELDS: &[&str] = &["Version", "Id", "Statement"];

/// Policy language versions.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PolicyVersion {
    /// No `Version` element; IAM treats this as `2008-10-17`.
    #[default]
    None,
    V2008_10_17,
    V2012_10_17,
}

impl PolicyVersion {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }
}

impl Display for PolicyVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => Ok(()),
            Self::V2008_10_17 => f.write_str("2008-10-17"),
            Self::V2012_10_17 => f.write_str("2012-10-17"),
        }
    }
}

impl FromStr for PolicyVersion {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2008-10-17" => Ok(Self::V2008_10_17),
            "2012-10-17" => Ok(Self::V2012_10_17),
            _ => Err(BuilderError::InvalidPolicyVersion(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for PolicyVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        PolicyVersion::from_str(&value).map_err(de::Error::custom)
    }
}

impl Serialize for PolicyVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A complete IAM policy document.
///
/// Serialization is written by hand so the `Version` element is omitted when unset and a single statement may be
/// written without an enclosing list.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
pub struct Policy {
    #[builder(setter(into), default)]
    version: PolicyVersion,

    #[builder(setter(into, strip_option), default)]
    id: Option<String>,

    #[builder(setter(into))]
    statement: StatementList,
}

impl Policy {
    #[inline]
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// A `2012-10-17` policy holding the given statements.
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            version: PolicyVersion::V2012_10_17,
            id: None,
            statement: StatementList::from(statements),
        }
    }

    #[inline]
    pub fn version(&self) -> PolicyVersion {
        self.version
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline]
    pub fn statement(&self) -> &StatementList {
        &self.statement
    }
}

display_json!(Policy);
from_str_json!(Policy);

impl<'de> Visitor<'de> for PolicyBuilder {
    type Value = Policy;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str("policy")
    }

    fn visit_map<A: MapAccess<'de>>(mut self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut seen = [false; 3];

        while let Some(key) = access.next_key::<&str>()? {
            let index = match POLICY_FIELDS.iter().position(|f| *f == key) {
                Some(index) => index,
                None => return Err(de::Error::unknown_field(key, POLICY_FIELDS)),
            };

            if seen[index] {
                return Err(de::Error::duplicate_field(POLICY_FIELDS[index]));
            }
            seen[index] = true;

            match index {
                0 => self.version(access.next_value::<PolicyVersion>()?),
                1 => self.id(access.next_value::<String>()?),
                _ => self.statement(access.next_value::<StatementList>()?),
            };
        }

        if !seen[2] {
            return Err(de::Error::missing_field("Statement"));
        }

        self.build().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Policy, D::Error> {
        d.deserialize_map(PolicyBuilder::default())
    }
}

impl Serialize for Policy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(None)?;
        if self.version.is_some() {
            state.serialize_entry("Version", &self.version)?;
        }
        if let Some(id) = &self.id {
            state.serialize_entry("Id", id)?;
        }
        state.serialize_entry("Statement", &self.statement)?;
        state.end()
    }
}
