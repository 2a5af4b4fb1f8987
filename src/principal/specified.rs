use {
    super::AwsPrincipal,
    crate::serutil::StringLikeList,
    derive_builder::Builder,
    serde::{Deserialize, Serialize},
};

/// A `Principal` element that names specific principals, keyed by principal type.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SpecifiedPrincipal {
    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "AWS", skip_serializing_if = "Option::is_none")]
    aws: Option<StringLikeList<AwsPrincipal>>,

    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "CanonicalUser", skip_serializing_if = "Option::is_none")]
    canonical_user: Option<StringLikeList<String>>,

    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "Federated", skip_serializing_if = "Option::is_none")]
    federated: Option<StringLikeList<String>>,

    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "Service", skip_serializing_if = "Option::is_none")]
    service: Option<StringLikeList<String>>,
}

display_json!(SpecifiedPrincipal);

impl SpecifiedPrincipal {
    #[inline]
    pub fn builder() -> SpecifiedPrincipalBuilder {
        SpecifiedPrincipalBuilder::default()
    }

    /// Assemble a principal from accumulated values; empty categories are omitted and one-element categories are
    /// written as a bare string.
    pub fn from_parts(
        aws: Vec<AwsPrincipal>,
        canonical_user: Vec<String>,
        federated: Vec<String>,
        service: Vec<String>,
    ) -> Self {
        fn non_empty<T>(values: Vec<T>) -> Option<StringLikeList<T>> {
            if values.is_empty() {
                None
            } else {
                Some(StringLikeList::collapsed(values))
            }
        }

        Self {
            aws: non_empty(aws),
            canonical_user: non_empty(canonical_user),
            federated: non_empty(federated),
            service: non_empty(service),
        }
    }

    #[inline]
    pub fn aws(&self) -> Option<&StringLikeList<AwsPrincipal>> {
        self.aws.as_ref()
    }

    #[inline]
    pub fn canonical_user(&self) -> Option<&StringLikeList<String>> {
        self.canonical_user.as_ref()
    }

    #[inline]
    pub fn federated(&self) -> Option<&StringLikeList<String>> {
        self.federated.as_ref()
    }

    #[inline]
    pub fn service(&self) -> Option<&StringLikeList<String>> {
        self.service.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.aws.is_none() && self.canonical_user.is_none() && self.federated.is_none() && self.service.is_none()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::SpecifiedPrincipal,
        crate::AwsPrincipal,
        indoc::indoc,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_deserialize_basic() {
        let sp: SpecifiedPrincipal = serde_json::from_str(
            r#"
            {
                "AWS": ["123456789012", "arn:aws:iam::123456789012:user/alice"],
                "CanonicalUser": "79a59df900b949e55d96a1e698fbacedfd6e09d98eacf8f8d5218e7cd47ef2be",
                "Federated": ["accounts.google.com"],
                "Service": ["ec2.amazonaws.com", "lambda.amazonaws.com"]
            }
        "#,
        )
        .unwrap();

        assert_eq!(sp.aws().unwrap().len(), 2);
        assert_eq!(sp.canonical_user().unwrap().len(), 1);
        assert_eq!(sp.federated().unwrap()[0], "accounts.google.com");
        assert_eq!(sp.service().unwrap().len(), 2);
        assert!(!sp.is_empty());

        assert!(serde_json::from_str::<SpecifiedPrincipal>(r#"{"Bogus": "x"}"#).is_err());
    }

    #[test_log::test]
    fn test_from_parts() {
        let sp = SpecifiedPrincipal::from_parts(
            vec![AwsPrincipal::from_str("arn:aws:iam::123456789012:root").unwrap()],
            vec![],
            vec![],
            vec!["sns.amazonaws.com".to_string(), "sqs.amazonaws.com".to_string()],
        );

        assert_eq!(
            sp.to_string(),
            indoc! { r#"
            {
                "AWS": "arn:aws:iam::123456789012:root",
                "Service": [
                    "sns.amazonaws.com",
                    "sqs.amazonaws.com"
                ]
            }"# }
        );

        assert!(SpecifiedPrincipal::from_parts(vec![], vec![], vec![], vec![]).is_empty());
        assert!(SpecifiedPrincipal::default().is_empty());
    }

    #[test_log::test]
    fn test_builder() {
        let sp = SpecifiedPrincipal::builder().federated("cognito-identity.amazonaws.com".to_string()).build().unwrap();
        assert_eq!(sp.federated().unwrap()[0], "cognito-identity.amazonaws.com");
        assert!(sp.aws().is_none());
    }
}
