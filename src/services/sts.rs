use super::{optional, required};

service! {
    /// Statement builder for AWS Security Token Service (`sts`).
    ///
    /// Trust policies usually name a principal and no resource; call
    /// [skip_auto_resource](crate::PolicyStatementBuilder::skip_auto_resource) for those.
    pub struct Sts;
    prefix: "sts",
    name: "AWS Security Token Service",
    api_reference: "https://docs.aws.amazon.com/STS/latest/APIReference/",
    complete: true,

    actions {
        assume_role: "AssumeRole", Write,
            "Grants permission to obtain a set of temporary security credentials that you can use to access AWS resources that you might not normally have access to"
            => .resources(&[required("role")])
               .conditions(&[
                   "aws:RequestTag/${TagKey}", "aws:TagKeys", "sts:TransitiveTagKeys", "sts:ExternalId",
                   "sts:RoleSessionName", "sts:SourceIdentity",
               ]);
        assume_role_with_saml: "AssumeRoleWithSAML", Write,
            "Grants permission to obtain a set of temporary security credentials for users who have been authenticated via a SAML authentication response"
            => .resources(&[required("role")])
               .conditions(&[
                   "saml:aud", "saml:iss", "saml:namequalifier", "saml:sub", "saml:sub_type",
                   "aws:RequestTag/${TagKey}", "aws:TagKeys", "sts:TransitiveTagKeys", "sts:RoleSessionName",
                   "sts:SourceIdentity",
               ]);
        assume_role_with_web_identity: "AssumeRoleWithWebIdentity", Write,
            "Grants permission to obtain a set of temporary security credentials for users who have been authenticated in a mobile or web application with a web identity provider"
            => .resources(&[required("role")])
               .conditions(&[
                   "accounts.google.com:aud", "accounts.google.com:oaud", "accounts.google.com:sub",
                   "cognito-identity.amazonaws.com:amr", "cognito-identity.amazonaws.com:aud",
                   "cognito-identity.amazonaws.com:sub",
                   "graph.facebook.com:app_id", "graph.facebook.com:id",
                   "www.amazon.com:app_id", "www.amazon.com:user_id",
                   "aws:RequestTag/${TagKey}", "aws:TagKeys", "sts:TransitiveTagKeys", "sts:RoleSessionName",
                   "sts:SourceIdentity",
               ]);
        assume_root: "AssumeRoot", Write,
            "Grants permission to obtain a set of short-term credentials that you can use to perform privileged tasks in a member account in your organization"
            => .resources(&[required("root")]).conditions(&["sts:TaskPolicyArn"]);
        decode_authorization_message: "DecodeAuthorizationMessage", Write,
            "Grants permission to decode additional information about the authorization status of a request from an encoded message returned in response to an AWS request";
        get_access_key_info: "GetAccessKeyInfo", Read,
            "Grants permission to obtain details about the access key id passed as a parameter to the request";
        get_caller_identity: "GetCallerIdentity", Read,
            "Grants permission to obtain details about the IAM identity whose credentials are used to call the API";
        get_federation_token: "GetFederationToken", Read,
            "Grants permission to obtain a set of temporary security credentials (consisting of an access key ID, a secret access key, and a security token) for a federated user"
            => .resources(&[required("user")]).conditions(&["aws:RequestTag/${TagKey}", "aws:TagKeys"]);
        get_service_bearer_token: "GetServiceBearerToken", Read,
            "Grants permission to obtain a STS bearer token for an AWS root user, IAM role, or an IAM user"
            => .conditions(&["sts:AWSServiceName"]);
        get_session_token: "GetSessionToken", Read,
            "Grants permission to obtain a set of temporary security credentials (consisting of an access key ID, a secret access key, and a security token) for an AWS account or IAM user";
        set_source_identity: "SetSourceIdentity", Write,
            "Grants permission to set a source identity on a STS session"
            => .resources(&[optional("role"), optional("user")]).conditions(&["sts:SourceIdentity"]);
        tag_session: "TagSession", Tagging,
            "Grants permission to add tags to a STS session"
            => .resources(&[optional("role"), optional("user")])
               .conditions(&["aws:RequestTag/${TagKey}", "aws:TagKeys", "sts:TransitiveTagKeys"]);
    }

    resources {
        on_role: "role", "arn:${Partition}:iam::${Account}:role/${RoleNameWithPath}"
            (role_name_with_path: "RoleNameWithPath")
            ["aws:ResourceTag/${TagKey}"];
        on_user: "user", "arn:${Partition}:iam::${Account}:user/${UserNameWithPath}"
            (user_name_with_path: "UserNameWithPath")
            ["aws:ResourceTag/${TagKey}"];
        on_root: "root", "arn:${Partition}:iam::${Account}:root" ()
            [];
    }

    conditions {
        if_accounts_google_com_aud: "accounts.google.com:aud", String,
            "Filters access by the Google application ID";
        if_accounts_google_com_oaud: "accounts.google.com:oaud", String,
            "Filters access by the Google audience";
        if_accounts_google_com_sub: "accounts.google.com:sub", String,
            "Filters access by the subject of the claim (the Google user ID)";
        if_cognito_identity_amazonaws_com_amr: "cognito-identity.amazonaws.com:amr", String,
            "Filters access by the login information for Amazon Cognito";
        if_cognito_identity_amazonaws_com_aud: "cognito-identity.amazonaws.com:aud", String,
            "Filters access by the Amazon Cognito identity pool ID";
        if_cognito_identity_amazonaws_com_sub: "cognito-identity.amazonaws.com:sub", String,
            "Filters access by the subject of the claim (the Amazon Cognito user ID)";
        if_graph_facebook_com_app_id: "graph.facebook.com:app_id", String,
            "Filters access by the Facebook application ID";
        if_graph_facebook_com_id: "graph.facebook.com:id", String,
            "Filters access by the Facebook user ID";
        if_saml_aud: "saml:aud", String,
            "Filters access by the endpoint URL to which SAML assertions are presented";
        if_saml_iss: "saml:iss", String,
            "Filters access by the issuer, which is represented by a URN";
        if_saml_namequalifier: "saml:namequalifier", String,
            "Filters access by the hash value of the issuer, account ID, and friendly name";
        if_saml_sub: "saml:sub", String,
            "Filters access by the subject of the claim (the SAML user ID)";
        if_saml_sub_type: "saml:sub_type", String,
            "Filters access by the format of the subject, such as persistent or transient";
        if_aws_service_name: "sts:AWSServiceName", String,
            "Filters access by the service that is obtaining a bearer token";
        if_external_id: "sts:ExternalId", String,
            "Filters access by the unique identifier required when you assume a role in another account";
        if_role_session_name: "sts:RoleSessionName", String,
            "Filters access by the role session name required when you assume a role";
        if_source_identity: "sts:SourceIdentity", String,
            "Filters access by the source identity that is passed in the request";
        if_task_policy_arn: "sts:TaskPolicyArn", Arn,
            "Filters access by the task policy ARN used when assuming root";
        if_transitive_tag_keys: "sts:TransitiveTagKeys", ArrayOfString,
            "Filters access by the transitive tag keys that are passed in the request";
        if_www_amazon_com_app_id: "www.amazon.com:app_id", String,
            "Filters access by the Login with Amazon application ID";
        if_www_amazon_com_user_id: "www.amazon.com:user_id", String,
            "Filters access by the Login with Amazon user ID";
    }

    tagged_conditions {}
}

#[cfg(test)]
mod tests {
    use {
        super::Sts,
        crate::{condop, BuilderError, Operator, PolicyStatementBuilder},
        indoc::indoc,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_web_identity_trust() {
        let json = Sts::new()
            .assume_role_with_web_identity()
            .for_federated_cognito()
            .if_cognito_identity_amazonaws_com_aud(
                "us-east-1:12345678-abcd-abcd-abcd-123456789012",
                condop::StringEquals,
            )
            .if_cognito_identity_amazonaws_com_amr("authenticated", Operator::new(condop::StringLike).for_any_value())
            .skip_auto_resource()
            .to_json()
            .unwrap();

        assert_eq!(
            json,
            indoc! { r#"
            {
                "Effect": "Allow",
                "Action": "sts:AssumeRoleWithWebIdentity",
                "Principal": {
                    "Federated": "cognito-identity.amazonaws.com"
                },
                "Condition": {
                    "StringEquals": {
                        "cognito-identity.amazonaws.com:aud": "us-east-1:12345678-abcd-abcd-abcd-123456789012"
                    },
                    "ForAnyValue:StringLike": {
                        "cognito-identity.amazonaws.com:amr": "authenticated"
                    }
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_cross_account_role() {
        let json = Sts::new()
            .sid("AllowAuditors")
            .assume_role()
            .tag_session()
            .for_account("111122223333")
            .for_role("111122223333", "auditor")
            .if_external_id("b7ca9f7e", None)
            .skip_auto_resource()
            .to_json()
            .unwrap();

        assert_eq!(
            json,
            indoc! { r#"
            {
                "Sid": "AllowAuditors",
                "Effect": "Allow",
                "Action": [
                    "sts:AssumeRole",
                    "sts:TagSession"
                ],
                "Principal": {
                    "AWS": [
                        "arn:aws:iam::111122223333:root",
                        "arn:aws:iam::111122223333:role/auditor"
                    ]
                },
                "Condition": {
                    "StringLike": {
                        "sts:ExternalId": "b7ca9f7e"
                    }
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_resources() {
        let statement = Sts::new()
            .assume_role()
            .in_account("123456789012")
            .in_partition("aws-cn")
            .on_role("service-role/deployer")
            .on_root()
            .to_statement()
            .unwrap();
        let resources: Vec<String> = statement.resource().unwrap().iter().map(|r| r.to_string()).collect();
        assert_eq!(
            resources,
            vec!["arn:aws-cn:iam::123456789012:role/service-role/deployer", "arn:aws-cn:iam::123456789012:root"]
        );
    }

    #[test_log::test]
    fn test_trust_without_principal() {
        let err = Sts::new().assume_role().skip_auto_resource().to_statement().unwrap_err();
        assert_eq!(
            err,
            BuilderError::InvalidStatement("Either Resource or NotResource must be set.".to_string())
        );

        let statement = Sts::new().assume_role().to_statement().unwrap();
        assert_eq!(statement.resource().unwrap()[0].to_string(), "*");
    }
}
