use {
    super::{
        cmp::{
            ArnCmp, DateCmp, NumericCmp, StringCmp, BINARY_DISPLAY_NAMES, BOOL_DISPLAY_NAMES, IP_ADDRESS_DISPLAY_NAMES,
            NULL_DISPLAY_NAME,
        },
        variant::Variant,
    },
    crate::BuilderError,
    serde::{de, de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        borrow::Borrow,
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// A base operator for a condition clause, without any `ForAllValues:`/`ForAnyValue:` qualifier.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ConditionOp {
    /// Operators for ARNs.
    Arn(ArnCmp, Variant),

    /// Operators for base64-encoded binary values. Only [Variant::None] and [Variant::IfExists] are valid.
    Binary(Variant),

    /// Operators on boolean values. Only [Variant::None] and [Variant::IfExists] are valid.
    Bool(Variant),

    /// Operators for date/time values.
    Date(DateCmp, Variant),

    /// Operators on IP addresses and networks.
    IpAddress(Variant),

    /// Operator on the presence/absence of a value.
    Null,

    /// Operators on numeric values.
    Numeric(NumericCmp, Variant),

    /// Operators on string values.
    String(StringCmp, Variant),
}

pub const ArnEquals: ConditionOp = ConditionOp::Arn(ArnCmp::Equals, Variant::None);
pub const ArnEqualsIfExists: ConditionOp = ConditionOp::Arn(ArnCmp::Equals, Variant::IfExists);
pub const ArnNotEquals: ConditionOp = ConditionOp::Arn(ArnCmp::Equals, Variant::Negated);
pub const ArnNotEqualsIfExists: ConditionOp = ConditionOp::Arn(ArnCmp::Equals, Variant::IfExistsNegated);
pub const ArnLike: ConditionOp = ConditionOp::Arn(ArnCmp::Like, Variant::None);
pub const ArnLikeIfExists: ConditionOp = ConditionOp::Arn(ArnCmp::Like, Variant::IfExists);
pub const ArnNotLike: ConditionOp = ConditionOp::Arn(ArnCmp::Like, Variant::Negated);
pub const ArnNotLikeIfExists: ConditionOp = ConditionOp::Arn(ArnCmp::Like, Variant::IfExistsNegated);

pub const BinaryEquals: ConditionOp = ConditionOp::Binary(Variant::None);
pub const BinaryEqualsIfExists: ConditionOp = ConditionOp::Binary(Variant::IfExists);

pub const Bool: ConditionOp = ConditionOp::Bool(Variant::None);
pub const BoolIfExists: ConditionOp = ConditionOp::Bool(Variant::IfExists);

pub const DateEquals: ConditionOp = ConditionOp::Date(DateCmp::Equals, Variant::None);
pub const DateEqualsIfExists: ConditionOp = ConditionOp::Date(DateCmp::Equals, Variant::IfExists);
pub const DateNotEquals: ConditionOp = ConditionOp::Date(DateCmp::Equals, Variant::Negated);
pub const DateNotEqualsIfExists: ConditionOp = ConditionOp::Date(DateCmp::Equals, Variant::IfExistsNegated);
pub const DateLessThan: ConditionOp = ConditionOp::Date(DateCmp::LessThan, Variant::None);
pub const DateLessThanIfExists: ConditionOp = ConditionOp::Date(DateCmp::LessThan, Variant::IfExists);
pub const DateGreaterThanEquals: ConditionOp = ConditionOp::Date(DateCmp::LessThan, Variant::Negated);
pub const DateGreaterThanEqualsIfExists: ConditionOp = ConditionOp::Date(DateCmp::LessThan, Variant::IfExistsNegated);
pub const DateLessThanEquals: ConditionOp = ConditionOp::Date(DateCmp::LessThanEquals, Variant::None);
pub const DateLessThanEqualsIfExists: ConditionOp = ConditionOp::Date(DateCmp::LessThanEquals, Variant::IfExists);
pub const DateGreaterThan: ConditionOp = ConditionOp::Date(DateCmp::LessThanEquals, Variant::Negated);
pub const DateGreaterThanIfExists: ConditionOp = ConditionOp::Date(DateCmp::LessThanEquals, Variant::IfExistsNegated);

pub const IpAddress: ConditionOp = ConditionOp::IpAddress(Variant::None);
pub const IpAddressIfExists: ConditionOp = ConditionOp::IpAddress(Variant::IfExists);
pub const NotIpAddress: ConditionOp = ConditionOp::IpAddress(Variant::Negated);
pub const NotIpAddressIfExists: ConditionOp = ConditionOp::IpAddress(Variant::IfExistsNegated);

pub const Null: ConditionOp = ConditionOp::Null;

pub const NumericEquals: ConditionOp = ConditionOp::Numeric(NumericCmp::Equals, Variant::None);
pub const NumericEqualsIfExists: ConditionOp = ConditionOp::Numeric(NumericCmp::Equals, Variant::IfExists);
pub const NumericNotEquals: ConditionOp = ConditionOp::Numeric(NumericCmp::Equals, Variant::Negated);
pub const NumericNotEqualsIfExists: ConditionOp = ConditionOp::Numeric(NumericCmp::Equals, Variant::IfExistsNegated);
pub const NumericLessThan: ConditionOp = ConditionOp::Numeric(NumericCmp::LessThan, Variant::None);
pub const NumericLessThanIfExists: ConditionOp = ConditionOp::Numeric(NumericCmp::LessThan, Variant::IfExists);
pub const NumericGreaterThanEquals: ConditionOp = ConditionOp::Numeric(NumericCmp::LessThan, Variant::Negated);
pub const NumericGreaterThanEqualsIfExists: ConditionOp =
    ConditionOp::Numeric(NumericCmp::LessThan, Variant::IfExistsNegated);
pub const NumericLessThanEquals: ConditionOp = ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::None);
pub const NumericLessThanEqualsIfExists: ConditionOp =
    ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::IfExists);
pub const NumericGreaterThan: ConditionOp = ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::Negated);
pub const NumericGreaterThanIfExists: ConditionOp =
    ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::IfExistsNegated);

pub const StringEquals: ConditionOp = ConditionOp::String(StringCmp::Equals, Variant::None);
pub const StringEqualsIfExists: ConditionOp = ConditionOp::String(StringCmp::Equals, Variant::IfExists);
pub const StringNotEquals: ConditionOp = ConditionOp::String(StringCmp::Equals, Variant::Negated);
pub const StringNotEqualsIfExists: ConditionOp = ConditionOp::String(StringCmp::Equals, Variant::IfExistsNegated);
pub const StringEqualsIgnoreCase: ConditionOp = ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::None);
pub const StringEqualsIgnoreCaseIfExists: ConditionOp =
    ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::IfExists);
pub const StringNotEqualsIgnoreCase: ConditionOp = ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::Negated);
pub const StringNotEqualsIgnoreCaseIfExists: ConditionOp =
    ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::IfExistsNegated);
pub const StringLike: ConditionOp = ConditionOp::String(StringCmp::Like, Variant::None);
pub const StringLikeIfExists: ConditionOp = ConditionOp::String(StringCmp::Like, Variant::IfExists);
pub const StringNotLike: ConditionOp = ConditionOp::String(StringCmp::Like, Variant::Negated);
pub const StringNotLikeIfExists: ConditionOp = ConditionOp::String(StringCmp::Like, Variant::IfExistsNegated);

/// Every operator IAM recognizes.
pub const ALL: [ConditionOp; 53] = [
    ArnEquals,
    ArnEqualsIfExists,
    ArnNotEquals,
    ArnNotEqualsIfExists,
    ArnLike,
    ArnLikeIfExists,
    ArnNotLike,
    ArnNotLikeIfExists,
    BinaryEquals,
    BinaryEqualsIfExists,
    Bool,
    BoolIfExists,
    DateEquals,
    DateEqualsIfExists,
    DateNotEquals,
    DateNotEqualsIfExists,
    DateLessThan,
    DateLessThanIfExists,
    DateGreaterThanEquals,
    DateGreaterThanEqualsIfExists,
    DateLessThanEquals,
    DateLessThanEqualsIfExists,
    DateGreaterThan,
    DateGreaterThanIfExists,
    IpAddress,
    IpAddressIfExists,
    NotIpAddress,
    NotIpAddressIfExists,
    Null,
    NumericEquals,
    NumericEqualsIfExists,
    NumericNotEquals,
    NumericNotEqualsIfExists,
    NumericLessThan,
    NumericLessThanIfExists,
    NumericGreaterThanEquals,
    NumericGreaterThanEqualsIfExists,
    NumericLessThanEquals,
    NumericLessThanEqualsIfExists,
    NumericGreaterThan,
    NumericGreaterThanIfExists,
    StringEquals,
    StringEqualsIfExists,
    StringNotEquals,
    StringNotEqualsIfExists,
    StringEqualsIgnoreCase,
    StringEqualsIgnoreCaseIfExists,
    StringNotEqualsIgnoreCase,
    StringNotEqualsIgnoreCaseIfExists,
    StringLike,
    StringLikeIfExists,
    StringNotLike,
    StringNotLikeIfExists,
];

impl ConditionOp {
    /// The IAM name of this operator, e.g. `StringNotEqualsIfExists`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Arn(cmp, variant) => cmp.display_name(variant),
            Self::Binary(variant) => BINARY_DISPLAY_NAMES[variant.as_usize()],
            Self::Bool(variant) => BOOL_DISPLAY_NAMES[variant.as_usize()],
            Self::Date(cmp, variant) => cmp.display_name(variant),
            Self::IpAddress(variant) => IP_ADDRESS_DISPLAY_NAMES[variant.as_usize()],
            Self::Null => NULL_DISPLAY_NAME,
            Self::Numeric(cmp, variant) => cmp.display_name(variant),
            Self::String(cmp, variant) => cmp.display_name(variant),
        }
    }

    /// The `...IfExists` form of this operator. `Null` has no such form and is returned unchanged.
    pub fn if_exists(self) -> Self {
        match self {
            Self::Arn(cmp, variant) => Self::Arn(cmp, variant.with_if_exists()),
            Self::Binary(variant) => Self::Binary(variant.with_if_exists()),
            Self::Bool(variant) => Self::Bool(variant.with_if_exists()),
            Self::Date(cmp, variant) => Self::Date(cmp, variant.with_if_exists()),
            Self::IpAddress(variant) => Self::IpAddress(variant.with_if_exists()),
            Self::Null => {
                log::debug!("Null condition operator has no IfExists form");
                Self::Null
            }
            Self::Numeric(cmp, variant) => Self::Numeric(cmp, variant.with_if_exists()),
            Self::String(cmp, variant) => Self::String(cmp, variant.with_if_exists()),
        }
    }
}

impl Borrow<str> for ConditionOp {
    fn borrow(&self) -> &str {
        self.name()
    }
}

impl PartialEq<str> for ConditionOp {
    fn eq(&self, other: &str) -> bool {
        self.name() == other
    }
}

impl Display for ConditionOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for ConditionOp {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .find(|op| op.name() == s)
            .copied()
            .ok_or_else(|| BuilderError::InvalidConditionOperator(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for ConditionOp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ConditionOp::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for ConditionOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{ConditionOp, ALL},
        crate::condop,
        pretty_assertions::assert_eq,
        std::{collections::HashSet, str::FromStr},
    };

    #[test_log::test]
    fn test_names_round_trip() {
        let mut seen = HashSet::new();
        for op in ALL.iter() {
            assert!(seen.insert(op.name()), "duplicate operator name {}", op.name());
            assert_eq!(&ConditionOp::from_str(op.name()).unwrap(), op);
            assert_eq!(format!("{}", op), op.name());
            assert!(op == op.name());
        }
        assert_eq!(seen.len(), 53);
    }

    #[test_log::test]
    fn test_if_exists() {
        assert_eq!(condop::StringLike.if_exists(), condop::StringLikeIfExists);
        assert_eq!(condop::StringNotLike.if_exists(), condop::StringNotLikeIfExists);
        assert_eq!(condop::StringLikeIfExists.if_exists(), condop::StringLikeIfExists);
        assert_eq!(condop::Bool.if_exists(), condop::BoolIfExists);
        assert_eq!(condop::BinaryEquals.if_exists(), condop::BinaryEqualsIfExists);
        assert_eq!(condop::NotIpAddress.if_exists(), condop::NotIpAddressIfExists);
        assert_eq!(condop::DateGreaterThan.if_exists(), condop::DateGreaterThanIfExists);
        assert_eq!(condop::NumericLessThan.if_exists(), condop::NumericLessThanIfExists);
        assert_eq!(condop::ArnLike.if_exists(), condop::ArnLikeIfExists);
        assert_eq!(condop::Null.if_exists(), condop::Null);
    }

    #[test_log::test]
    fn test_parse_errors() {
        assert_eq!(
            ConditionOp::from_str("StringSortOfEquals").unwrap_err().to_string(),
            "Invalid condition operator: StringSortOfEquals"
        );

        let e = serde_json::from_str::<ConditionOp>("3").unwrap_err();
        assert_eq!(e.to_string(), "invalid type: integer `3`, expected a string at line 1 column 1");
        assert_eq!(serde_json::from_str::<ConditionOp>(r#""ArnEquals""#).unwrap(), condop::ArnEquals);
        assert_eq!(serde_json::to_string(&condop::NumericGreaterThan).unwrap(), r#""NumericGreaterThan""#);
    }
}
