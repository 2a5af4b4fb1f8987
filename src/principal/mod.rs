//! Principals a statement grants to or denies. The builder accumulates principals per category and assembles them
//! with [Principal::from_parts]; parsing is kept so built statements can be read back.

mod aws;
mod specified;

pub use {
    aws::AwsPrincipal,
    specified::{SpecifiedPrincipal, SpecifiedPrincipalBuilder, SpecifiedPrincipalBuilderError},
};

use {
    log::debug,
    serde::{
        de::{self, value::MapAccessDeserializer, Deserializer, MapAccess, Unexpected, Visitor},
        ser::Serializer,
        Deserialize, Serialize,
    },
    std::fmt::{Formatter, Result as FmtResult},
};

/// The `Principal` or `NotPrincipal` element of a statement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Principal {
    /// `"*"`: anyone, including anonymous callers.
    Any,
    Specified(SpecifiedPrincipal),
}

impl Principal {
    /// The principal element for accumulated builder values, or `None` when no category has any.
    pub fn from_parts(
        aws: Vec<AwsPrincipal>,
        canonical_user: Vec<String>,
        federated: Vec<String>,
        service: Vec<String>,
    ) -> Option<Self> {
        let specified = SpecifiedPrincipal::from_parts(aws, canonical_user, federated, service);
        if specified.is_empty() {
            None
        } else {
            Some(Self::Specified(specified))
        }
    }

    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl From<SpecifiedPrincipal> for Principal {
    fn from(sp: SpecifiedPrincipal) -> Self {
        Self::Specified(sp)
    }
}

struct PrincipalVisitor {}

impl<'de> Visitor<'de> for PrincipalVisitor {
    type Value = Principal;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "\"*\" or a map of AWS, CanonicalUser, Federated or Service principals")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v == "*" {
            Ok(Principal::Any)
        } else {
            Err(E::invalid_value(Unexpected::Str(v), &self))
        }
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        let deserializer = MapAccessDeserializer::new(access);
        match SpecifiedPrincipal::deserialize(deserializer) {
            Ok(pm) => Ok(Principal::Specified(pm)),
            Err(e) => {
                debug!("Principal map has no recognizable principal categories: {:?}", e);
                Err(e)
            }
        }
    }
}

impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PrincipalVisitor {})
    }
}

impl Serialize for Principal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Any => serializer.serialize_str("*"),
            Self::Specified(specified) => specified.serialize(serializer),
        }
    }
}

display_json!(Principal);
