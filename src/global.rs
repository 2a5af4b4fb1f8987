use crate::catalog::{ConditionKeyInfo, ConditionType};

macro_rules! key {
    ($name:literal, $kind:ident, $description:literal) => {
        ConditionKeyInfo {
            name: $name,
            description: $description,
            kind: ConditionType::$kind,
        }
    };
}

/// The `aws:` condition keys available in every service.
pub static GLOBAL_CONDITION_KEYS: &[ConditionKeyInfo] = &[
    key!(
        "aws:CalledVia",
        ArrayOfString,
        "Filters access by the services that made the request on the principal's behalf"
    ),
    key!("aws:CalledViaFirst", String, "Filters access by the first service in the CalledVia chain"),
    key!("aws:CalledViaLast", String, "Filters access by the last service in the CalledVia chain"),
    key!("aws:CurrentTime", Date, "Filters access by the current date and time"),
    key!("aws:EpochTime", Date, "Filters access by the current time in epoch seconds"),
    key!("aws:FederatedProvider", String, "Filters access by the identity provider that issued the principal"),
    key!("aws:MultiFactorAuthAge", Numeric, "Filters access by seconds since the principal authenticated with MFA"),
    key!("aws:MultiFactorAuthPresent", Bool, "Filters access by whether MFA was used to authenticate"),
    key!("aws:PrincipalAccount", String, "Filters access by the account of the requesting principal"),
    key!("aws:PrincipalArn", Arn, "Filters access by the ARN of the requesting principal"),
    key!(
        "aws:PrincipalIsAWSService",
        Bool,
        "Filters access by whether the request comes from an AWS service principal"
    ),
    key!("aws:PrincipalOrgID", String, "Filters access by the organization of the requesting principal"),
    key!("aws:PrincipalOrgPaths", ArrayOfString, "Filters access by the organization path of the requesting principal"),
    key!("aws:PrincipalServiceName", String, "Filters access by the service principal making the request"),
    key!("aws:PrincipalServiceNamesList", ArrayOfString, "Filters access by every name of the service principal"),
    key!("aws:PrincipalTag/${TagKey}", String, "Filters access by a tag attached to the requesting principal"),
    key!("aws:PrincipalType", String, "Filters access by the type of the requesting principal"),
    key!("aws:Referer", String, "Filters access by the HTTP referer of the request"),
    key!("aws:RequestedRegion", String, "Filters access by the region the request was sent to"),
    key!("aws:RequestTag/${TagKey}", String, "Filters access by a tag key and value passed in the request"),
    key!("aws:ResourceAccount", String, "Filters access by the account that owns the resource"),
    key!("aws:ResourceOrgID", String, "Filters access by the organization that owns the resource"),
    key!("aws:ResourceOrgPaths", ArrayOfString, "Filters access by the organization path of the resource owner"),
    key!("aws:ResourceTag/${TagKey}", String, "Filters access by a tag attached to the resource"),
    key!("aws:SecureTransport", Bool, "Filters access by whether the request was sent over TLS"),
    key!(
        "aws:SourceAccount",
        String,
        "Filters access by the account of the resource making a service-to-service request"
    ),
    key!("aws:SourceArn", Arn, "Filters access by the ARN of the resource making a service-to-service request"),
    key!("aws:SourceIdentity", String, "Filters access by the source identity set on the role session"),
    key!("aws:SourceIp", IpAddress, "Filters access by the requester's IP address"),
    key!("aws:SourceOrgID", String, "Filters access by the organization of the resource making the request"),
    key!(
        "aws:SourceOrgPaths",
        ArrayOfString,
        "Filters access by the organization path of the resource making the request"
    ),
    key!("aws:SourceVpc", String, "Filters access by the VPC the request came through"),
    key!("aws:SourceVpce", String, "Filters access by the VPC endpoint the request came through"),
    key!("aws:TagKeys", ArrayOfString, "Filters access by the tag keys passed in the request"),
    key!("aws:TokenIssueTime", Date, "Filters access by when the temporary credentials were issued"),
    key!("aws:UserAgent", String, "Filters access by the requester's client application"),
    key!("aws:userid", String, "Filters access by the requester's principal identifier"),
    key!("aws:username", String, "Filters access by the requester's user name"),
    key!(
        "aws:ViaAWSService",
        Bool,
        "Filters access by whether an AWS service made the request on the principal's behalf"
    ),
    key!("aws:VpcSourceIp", IpAddress, "Filters access by the requester's IP address within a VPC"),
];

/// Look up an `aws:` key, matching templated keys such as `aws:RequestTag/${TagKey}`.
pub fn global_condition_key(key: &str) -> Option<&'static ConditionKeyInfo> {
    GLOBAL_CONDITION_KEYS.iter().find(|c| c.matches(key))
}
