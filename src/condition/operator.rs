use {
    super::op::ConditionOp,
    crate::BuilderError,
    serde::{de, de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// How a condition treats multi-valued request keys.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SetQualifier {
    /// Single-valued comparison.
    #[default]
    None,

    /// Every request value must satisfy the operator.
    ForAllValues,

    /// At least one request value must satisfy the operator.
    ForAnyValue,
}

impl SetQualifier {
    fn prefix(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::ForAllValues => "ForAllValues:",
            Self::ForAnyValue => "ForAnyValue:",
        }
    }
}

/// A complete condition operator as it appears as a key of a statement's `Condition` block, e.g.
/// `ForAnyValue:StringEqualsIfExists`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Operator {
    qualifier: SetQualifier,
    op: ConditionOp,
}

impl Operator {
    #[inline]
    pub fn new(op: ConditionOp) -> Self {
        Self {
            qualifier: SetQualifier::None,
            op,
        }
    }

    #[inline]
    pub fn qualifier(&self) -> SetQualifier {
        self.qualifier
    }

    #[inline]
    pub fn op(&self) -> ConditionOp {
        self.op
    }

    /// Switch to the `...IfExists` form. `Null` is left as is.
    pub fn if_exists(self) -> Self {
        Self {
            op: self.op.if_exists(),
            ..self
        }
    }

    pub fn for_all_values(self) -> Self {
        Self {
            qualifier: SetQualifier::ForAllValues,
            ..self
        }
    }

    pub fn for_any_value(self) -> Self {
        Self {
            qualifier: SetQualifier::ForAnyValue,
            ..self
        }
    }
}

impl From<ConditionOp> for Operator {
    fn from(op: ConditionOp) -> Self {
        Self::new(op)
    }
}

impl From<ConditionOp> for Option<Operator> {
    fn from(op: ConditionOp) -> Self {
        Some(Operator::new(op))
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.qualifier.prefix(), self.op)
    }
}

impl FromStr for Operator {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (qualifier, rest) = if let Some(rest) = s.strip_prefix("ForAllValues:") {
            (SetQualifier::ForAllValues, rest)
        } else if let Some(rest) = s.strip_prefix("ForAnyValue:") {
            (SetQualifier::ForAnyValue, rest)
        } else {
            (SetQualifier::None, s)
        };

        match ConditionOp::from_str(rest) {
            Ok(op) => Ok(Self {
                qualifier,
                op,
            }),
            Err(_) => {
                log::debug!("Unrecognized condition operator: {}", s);
                Err(BuilderError::InvalidConditionOperator(s.to_string()))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Operator::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{Operator, SetQualifier},
        crate::condop,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_modifiers() {
        let op = Operator::new(condop::StringEquals);
        assert_eq!(op.to_string(), "StringEquals");
        assert_eq!(op.qualifier(), SetQualifier::None);
        assert_eq!(op.if_exists().to_string(), "StringEqualsIfExists");
        assert_eq!(op.for_any_value().if_exists().to_string(), "ForAnyValue:StringEqualsIfExists");
        assert_eq!(op.if_exists().for_all_values().to_string(), "ForAllValues:StringEqualsIfExists");
        assert_eq!(op.for_all_values().for_any_value().qualifier(), SetQualifier::ForAnyValue);
        assert_eq!(Operator::from(condop::Null).if_exists().to_string(), "Null");
        assert_eq!(Operator::from(condop::NotIpAddress).if_exists().op(), condop::NotIpAddressIfExists);
    }

    #[test_log::test]
    fn test_parse() {
        let op = Operator::from_str("ForAllValues:ArnLikeIfExists").unwrap();
        assert_eq!(op, Operator::new(condop::ArnLike).if_exists().for_all_values());
        assert_eq!(Operator::from_str("Bool").unwrap(), Operator::new(condop::Bool));
        assert_eq!(
            Operator::from_str("ForSomeValues:StringLike").unwrap_err().to_string(),
            "Invalid condition operator: ForSomeValues:StringLike"
        );
        assert_eq!(
            Operator::from_str("ForAnyValue:").unwrap_err().to_string(),
            "Invalid condition operator: ForAnyValue:"
        );

        let json = serde_json::to_string(&Operator::new(condop::DateLessThan).for_any_value()).unwrap();
        assert_eq!(json, r#""ForAnyValue:DateLessThan""#);
        assert_eq!(serde_json::from_str::<Operator>(&json).unwrap().op(), condop::DateLessThan);
    }

    #[test_log::test]
    fn test_ordering() {
        let plain = Operator::new(condop::StringLike);
        let qualified = plain.for_any_value();
        assert!(plain < qualified);
        assert!(Operator::new(condop::Bool) < plain);
    }
}
