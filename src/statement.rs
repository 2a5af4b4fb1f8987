use {
    crate::{serutil::MapList, ActionList, BuilderError, Condition, Effect, Principal, ResourceList},
    derive_builder::Builder,
    serde::{
        de::{self, Deserializer, MapAccess, Visitor},
        Deserialize, Serialize,
    },
    std::fmt::{Formatter, Result as FmtResult},
};

const FIELDS: &[&str] =
    &["Sid", "Effect", "Action", "NotAction", "Resource", "NotResource", "Principal", "NotPrincipal", "Condition"];

/// A finished IAM policy statement, ready to be serialized as policy JSON.
#[derive(Builder, Clone, Debug, Eq, PartialEq, Serialize)]
#[builder(build_fn(validate = "Self::validate"))]
#[serde(deny_unknown_fields, rename_all = "PascalCase")]
pub struct Statement {
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    sid: Option<String>,

    effect: Effect,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<ActionList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    not_action: Option<ActionList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<ResourceList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    not_resource: Option<ResourceList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    principal: Option<Principal>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    not_principal: Option<Principal>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<Condition>,
}

impl Statement {
    pub fn builder() -> StatementBuilder {
        StatementBuilder::default()
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[inline]
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    #[inline]
    pub fn action(&self) -> Option<&ActionList> {
        self.action.as_ref()
    }

    #[inline]
    pub fn not_action(&self) -> Option<&ActionList> {
        self.not_action.as_ref()
    }

    #[inline]
    pub fn resource(&self) -> Option<&ResourceList> {
        self.resource.as_ref()
    }

    #[inline]
    pub fn not_resource(&self) -> Option<&ResourceList> {
        self.not_resource.as_ref()
    }

    #[inline]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[inline]
    pub fn not_principal(&self) -> Option<&Principal> {
        self.not_principal.as_ref()
    }

    #[inline]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

display_json!(Statement);
from_str_json!(Statement);

impl<'de> Deserialize<'de> for Statement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StatementVisitor {})
    }
}

struct StatementVisitor;

impl<'de> Visitor<'de> for StatementVisitor {
    type Value = Statement;

    fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("a map of statement properties")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Statement, A::Error> {
        let mut builder = Statement::builder();
        let mut seen = [false; 9];

        while let Some(key) = access.next_key::<&str>()? {
            let index = match FIELDS.iter().position(|f| *f == key) {
                Some(index) => index,
                None => return Err(de::Error::unknown_field(key, FIELDS)),
            };

            if seen[index] {
                return Err(de::Error::duplicate_field(FIELDS[index]));
            }
            seen[index] = true;

            match index {
                0 => builder.sid(access.next_value::<&str>()?),
                1 => builder.effect(access.next_value::<Effect>()?),
                2 => builder.action(access.next_value::<ActionList>()?),
                3 => builder.not_action(access.next_value::<ActionList>()?),
                4 => builder.resource(access.next_value::<ResourceList>()?),
                5 => builder.not_resource(access.next_value::<ResourceList>()?),
                6 => builder.principal(access.next_value::<Principal>()?),
                7 => builder.not_principal(access.next_value::<Principal>()?),
                _ => builder.condition(access.next_value::<Condition>()?),
            };
        }

        builder.build().map_err(|e| match e {
            StatementBuilderError::ValidationError(s) => {
                let msg = s.replace('.', ";").trim_end_matches(|c| c == ';').to_string();
                de::Error::custom(StatementBuilderError::ValidationError(msg))
            }
            _ => de::Error::custom(e),
        })
    }
}

impl StatementBuilder {
    fn validate(&self) -> Result<(), StatementBuilderError> {
        let mut errors = Vec::with_capacity(5);
        if self.effect.is_none() {
            errors.push("Effect must be set.");
        }

        match (&self.action, &self.not_action) {
            (Some(Some(_)), Some(Some(_))) => errors.push("Action and NotAction cannot both be set."),
            (Some(Some(_)), _) | (_, Some(Some(_))) => (),
            _ => errors.push("Either Action or NotAction must be set."),
        }

        let has_principal = matches!(self.principal, Some(Some(_))) || matches!(self.not_principal, Some(Some(_)));
        match (&self.resource, &self.not_resource) {
            (Some(Some(_)), Some(Some(_))) => errors.push("Resource and NotResource cannot both be set."),
            (Some(Some(_)), _) | (_, Some(Some(_))) => (),
            _ if has_principal => (),
            _ => errors.push("Either Resource or NotResource must be set."),
        }

        if let (Some(Some(_)), Some(Some(_))) = (&self.principal, &self.not_principal) {
            errors.push("Principal and NotPrincipal cannot both be set.");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(StatementBuilderError::ValidationError(errors.join(" ")))
        }
    }
}

impl From<StatementBuilderError> for BuilderError {
    fn from(e: StatementBuilderError) -> Self {
        BuilderError::InvalidStatement(e.to_string())
    }
}

pub type StatementList = MapList<Statement>;

#[cfg(test)]
mod tests {
    use {
        crate::{Action, AwsPrincipal, Effect, Principal, Resource, SpecifiedPrincipal, Statement},
        indoc::indoc,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    fn account_principal() -> SpecifiedPrincipal {
        SpecifiedPrincipal::builder().aws(AwsPrincipal::from_str("123456789012").unwrap()).build().unwrap()
    }

    #[test_log::test]
    fn test_validation() {
        let err = Statement::builder().build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Effect must be set. Either Action or NotAction must be set. Either Resource or NotResource must be set."
        );

        let err = Statement::builder()
            .effect(Effect::Allow)
            .action(Action::from_str("sqs:SendMessage").unwrap())
            .not_action(Action::from_str("sqs:DeleteQueue").unwrap())
            .resource(Resource::Any)
            .not_resource(Resource::Any)
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Action and NotAction cannot both be set. Resource and NotResource cannot both be set."
        );

        let err = Statement::builder()
            .effect(Effect::Deny)
            .action(Action::Any)
            .principal(account_principal())
            .not_principal(account_principal())
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Principal and NotPrincipal cannot both be set.");
    }

    #[test_log::test]
    fn test_principal_without_resource() {
        let s = Statement::builder()
            .effect(Effect::Allow)
            .action(Action::from_str("sts:AssumeRole").unwrap())
            .principal(Principal::from(account_principal()))
            .build()
            .unwrap();
        assert!(s.resource().is_none());
        assert_eq!(
            s.to_string(),
            indoc! { r#"
            {
                "Effect": "Allow",
                "Action": "sts:AssumeRole",
                "Principal": {
                    "AWS": "123456789012"
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_parse() {
        let s = Statement::from_str(indoc! { r#"
            {
                "Sid": "ReadObjects",
                "Effect": "Allow",
                "Action": ["s3:GetObject", "s3:GetObjectVersion"],
                "Resource": "arn:aws:s3:::examplebucket/*",
                "Condition": {"Bool": {"aws:SecureTransport": true}}
            }"# })
        .unwrap();

        assert_eq!(s.sid(), Some("ReadObjects"));
        assert!(s.effect().is_allow());
        assert_eq!(s.action().unwrap().len(), 2);
        assert!(s.not_action().is_none());
        assert_eq!(s.resource().unwrap()[0].to_string(), "arn:aws:s3:::examplebucket/*");
        assert!(s.not_resource().is_none());
        assert!(s.principal().is_none());
        assert!(s.not_principal().is_none());
        assert_eq!(s.condition().unwrap().len(), 1);
    }

    #[test_log::test]
    fn test_parse_errors() {
        let e = Statement::from_str(r#"{"Effect": "Allow", "Action": "*", "Action": "*", "Resource": "*"}"#)
            .unwrap_err();
        assert!(e.to_string().starts_with("duplicate field `Action`"));

        let e = Statement::from_str(r#"{"Effect": "Allow", "Actions": "*"}"#).unwrap_err();
        assert!(e.to_string().starts_with("unknown field `Actions`, expected one of `Sid`, `Effect`"));

        let e = Statement::from_str(r#"{"Effect": "Allow", "Action": "*"}"#).unwrap_err();
        assert!(e.to_string().starts_with("Either Resource or NotResource must be set at line 1"));

        let e = Statement::from_str(r#"{"Effect": "Allow", "Action": "ec2:", "Resource": "*"}"#).unwrap_err();
        assert!(e.to_string().starts_with("invalid value: string \"ec2:\""));
    }
}
