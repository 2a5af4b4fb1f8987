use {
    crate::{
        catalog::{AccessLevel, ServiceCatalog},
        compact::compact_actions,
        global::global_condition_key,
        principal::AwsPrincipal,
        services, template, Action, BuilderError, Condition, ConditionValues, Effect, Operator, Principal, Resource,
        ResourceList, Statement, StatementBuilderError,
    },
    regex::{Regex, RegexBuilder},
    serde::Deserialize,
    std::str::FromStr,
};

const DEFAULT_PARTITION: &str = "aws";

/// Default ARN components substituted into resource templates when the caller does not supply them.
///
/// Unset values fall back to `aws` for the partition and `*` for the region and account.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub partition: Option<String>,
    pub region: Option<String>,
    pub account: Option<String>,
}

impl Defaults {
    #[inline]
    pub fn partition(&self) -> &str {
        self.partition.as_deref().unwrap_or(DEFAULT_PARTITION)
    }

    #[inline]
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or("*")
    }

    #[inline]
    pub fn account(&self) -> &str {
        self.account.as_deref().unwrap_or("*")
    }
}

/// An IAM policy statement under construction.
///
/// Use it directly for statements that mix services, or through one of the service builders in
/// [crate::services], which attach the service's catalog.
#[derive(Clone, Debug, Default)]
pub struct PolicyStatement {
    service: Option<&'static ServiceCatalog>,
    sid: Option<String>,
    effect: Effect,
    actions: Vec<Action>,
    resources: Vec<Resource>,
    aws_principals: Vec<AwsPrincipal>,
    canonical_users: Vec<String>,
    federated: Vec<String>,
    service_principals: Vec<String>,
    condition: Condition,
    use_not_actions: bool,
    use_not_resources: bool,
    use_not_principals: bool,
    skip_auto_resource: bool,
    defaults: Defaults,
    errors: Vec<BuilderError>,
}

impl PolicyStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// A statement whose service-relative operations resolve against `catalog`.
    pub fn with_service(catalog: &'static ServiceCatalog) -> Self {
        Self {
            service: Some(catalog),
            ..Self::default()
        }
    }

    #[inline]
    pub fn service(&self) -> Option<&'static ServiceCatalog> {
        self.service
    }

    #[inline]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[inline]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[inline]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    #[inline]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Problems recorded by fluent calls so far.
    #[inline]
    pub fn errors(&self) -> &[BuilderError] {
        &self.errors
    }

    pub fn has_principals(&self) -> bool {
        !(self.aws_principals.is_empty()
            && self.canonical_users.is_empty()
            && self.federated.is_empty()
            && self.service_principals.is_empty())
    }

    fn record(&mut self, error: BuilderError) {
        log::debug!("Recording policy statement error: {}", error);
        self.errors.push(error);
    }

    fn require_service(&mut self, operation: &str) -> Option<&'static ServiceCatalog> {
        if self.service.is_none() {
            self.record(BuilderError::MissingService(operation.to_string()));
        }
        self.service
    }

    fn push_action(&mut self, action: Action) {
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
    }

    fn push_resource(&mut self, resource: Resource) {
        if !self.resources.contains(&resource) {
            self.resources.push(resource);
        }
    }

    fn push_aws_principal(&mut self, principal: Result<AwsPrincipal, BuilderError>) {
        match principal {
            Ok(principal) if !self.aws_principals.contains(&principal) => self.aws_principals.push(principal),
            Ok(_) => (),
            Err(e) => self.record(e),
        }
    }

    fn push_actions_at(&mut self, level: AccessLevel, operation: &str) {
        if let Some(catalog) = self.require_service(operation) {
            for name in catalog.actions_at(level) {
                self.push_action(Action::Specific {
                    service: catalog.prefix.to_string(),
                    action: name.to_string(),
                });
            }
        }
    }

    fn principal(&self) -> Option<Principal> {
        Principal::from_parts(
            self.aws_principals.clone(),
            self.canonical_users.clone(),
            self.federated.clone(),
            self.service_principals.clone(),
        )
    }

    /// The condition key as it appears in policy JSON: keys without a service prefix take this statement's.
    fn qualified_key(&self, key: &str) -> String {
        match self.service {
            Some(catalog) if !key.contains(':') => format!("{}:{}", catalog.prefix, key),
            _ => key.to_string(),
        }
    }

    /// The key-type default: this statement's catalog first, then the catalog named by the key's prefix, then the
    /// global `aws:` keys. Anything else is `StringLike`.
    fn default_operator(&self, key: &str) -> Operator {
        let info = self
            .service
            .and_then(|catalog| catalog.condition_key(key))
            .or_else(|| {
                key.split_once(':')
                    .and_then(|(prefix, _)| services::lookup(prefix))
                    .and_then(|catalog| catalog.condition_key(key))
            })
            .or_else(|| global_condition_key(key));
        match info {
            Some(info) => Operator::new(info.kind.default_operator()),
            None => Operator::new(crate::condop::StringLike),
        }
    }

    fn build(&self) -> Result<Statement, BuilderError> {
        if let Some(e) = self.errors.first() {
            return Err(e.clone());
        }

        let mut builder = Statement::builder();
        builder.effect(self.effect);

        if let Some(sid) = &self.sid {
            builder.sid(sid.clone());
        }

        if !self.actions.is_empty() {
            let actions = crate::ActionList::collapsed(self.actions.clone());
            if self.use_not_actions {
                builder.not_action(actions);
            } else {
                builder.action(actions);
            }
        }

        let mut resources = self.resources.clone();
        if resources.is_empty() && !self.skip_auto_resource {
            resources.push(Resource::Any);
        }
        if !resources.is_empty() {
            let resources = ResourceList::collapsed(resources);
            if self.use_not_resources {
                builder.not_resource(resources);
            } else {
                builder.resource(resources);
            }
        }

        if let Some(principal) = self.principal() {
            if self.use_not_principals {
                builder.not_principal(principal);
            } else {
                builder.principal(principal);
            }
        }

        if !self.condition.is_empty() {
            builder.condition(self.condition.clone());
        }

        builder.build().map_err(|e: StatementBuilderError| {
            log::debug!("Statement failed validation: {}", e);
            BuilderError::from(e)
        })
    }
}

/// Parse a pattern given either as a Rust regex or in `/pattern/flags` form, where flag `i` makes it
/// case-insensitive.
fn action_pattern(pattern: &str) -> Result<Regex, BuilderError> {
    let result = match pattern.strip_prefix('/').and_then(|rest| rest.rsplit_once('/')) {
        Some((body, flags)) => RegexBuilder::new(body).case_insensitive(flags.contains('i')).build(),
        None => Regex::new(pattern),
    };

    result.map_err(|e| {
        log::debug!("Invalid action pattern {}: {}", pattern, e);
        BuilderError::InvalidPattern(pattern.to_string())
    })
}

macro_rules! global_key {
    ($(#[$meta:meta])* $method:ident => $key:literal) => {
        $(#[$meta])*
        fn $method<V: Into<ConditionValues>, O: Into<Option<Operator>>>(self, values: V, operator: O) -> Self {
            self.if_($key, values, operator)
        }
    };
    ($(#[$meta:meta])* $method:ident($tag:ident) => $key:literal) => {
        $(#[$meta])*
        fn $method<V: Into<ConditionValues>, O: Into<Option<Operator>>>(
            self,
            $tag: &str,
            values: V,
            operator: O,
        ) -> Self {
            self.if_templated($key, $tag, values, operator)
        }
    };
}

/// The fluent statement-building surface shared by [PolicyStatement] and every service builder.
///
/// Every method consumes and returns the builder so calls chain. Methods never fail; problems are recorded and
/// reported by [to_statement](PolicyStatementBuilder::to_statement).
pub trait PolicyStatementBuilder: Sized {
    fn policy_statement(&self) -> &PolicyStatement;

    fn policy_statement_mut(&mut self) -> &mut PolicyStatement;

    fn sid<S: Into<String>>(mut self, sid: S) -> Self {
        self.policy_statement_mut().sid = Some(sid.into());
        self
    }

    fn allow(mut self) -> Self {
        self.policy_statement_mut().effect = Effect::Allow;
        self
    }

    fn deny(mut self) -> Self {
        self.policy_statement_mut().effect = Effect::Deny;
        self
    }

    /// Add an action given as `service:Action` (wildcards allowed) or `*`.
    fn to(mut self, action: &str) -> Self {
        let st = self.policy_statement_mut();
        match Action::from_str(action) {
            Ok(action) => st.push_action(action),
            Err(e) => st.record(e),
        }
        self
    }

    /// Add an action of this builder's service.
    fn to_action(mut self, name: &str) -> Self {
        let st = self.policy_statement_mut();
        if let Some(catalog) = st.require_service("to_action") {
            match Action::new(catalog.prefix, name) {
                Ok(action) => st.push_action(action),
                Err(e) => st.record(e),
            }
        }
        self
    }

    /// Add `service:*`, or `*` when there is no service.
    fn all_actions(mut self) -> Self {
        let st = self.policy_statement_mut();
        let action = match st.service {
            Some(catalog) => Action::Specific {
                service: catalog.prefix.to_string(),
                action: "*".to_string(),
            },
            None => Action::Any,
        };
        st.push_action(action);
        self
    }

    fn all_list_actions(mut self) -> Self {
        self.policy_statement_mut().push_actions_at(AccessLevel::List, "all_list_actions");
        self
    }

    fn all_read_actions(mut self) -> Self {
        self.policy_statement_mut().push_actions_at(AccessLevel::Read, "all_read_actions");
        self
    }

    fn all_write_actions(mut self) -> Self {
        self.policy_statement_mut().push_actions_at(AccessLevel::Write, "all_write_actions");
        self
    }

    fn all_permissions_management_actions(mut self) -> Self {
        self.policy_statement_mut()
            .push_actions_at(AccessLevel::PermissionsManagement, "all_permissions_management_actions");
        self
    }

    fn all_tagging_actions(mut self) -> Self {
        self.policy_statement_mut().push_actions_at(AccessLevel::Tagging, "all_tagging_actions");
        self
    }

    /// Add every catalog action whose name matches `pattern`, a regex or `/regex/i`.
    fn all_matching_actions(mut self, pattern: &str) -> Self {
        let st = self.policy_statement_mut();
        let catalog = match st.require_service("all_matching_actions") {
            Some(catalog) => catalog,
            None => return self,
        };

        match action_pattern(pattern) {
            Ok(re) => {
                for name in catalog.matching_actions(&re) {
                    st.push_action(Action::Specific {
                        service: catalog.prefix.to_string(),
                        action: name.to_string(),
                    });
                }
            }
            Err(e) => st.record(e),
        }
        self
    }

    fn not_actions(mut self) -> Self {
        self.policy_statement_mut().use_not_actions = true;
        self
    }

    fn not_resources(mut self) -> Self {
        self.policy_statement_mut().use_not_resources = true;
        self
    }

    fn not_principals(mut self) -> Self {
        self.policy_statement_mut().use_not_principals = true;
        self
    }

    /// Add a resource ARN (wildcards allowed) or `*`.
    fn on(mut self, arn: &str) -> Self {
        let st = self.policy_statement_mut();
        match Resource::from_str(arn) {
            Ok(resource) => st.push_resource(resource),
            Err(e) => st.record(e),
        }
        self
    }

    fn on_all_resources(mut self) -> Self {
        self.policy_statement_mut().push_resource(Resource::Any);
        self
    }

    /// Add a resource of the named type, rendering its ARN template.
    ///
    /// `values` supplies the template's placeholders by name. `Partition`, `Region` and `Account` fall back to the
    /// statement's [Defaults] when not supplied.
    fn on_resource_type(mut self, resource_type: &str, values: &[(&str, &str)]) -> Self {
        let st = self.policy_statement_mut();
        let catalog = match st.require_service("on_resource_type") {
            Some(catalog) => catalog,
            None => return self,
        };

        let info = match catalog.resource_type(resource_type) {
            Some(info) => info,
            None => {
                st.record(BuilderError::UnknownResourceType(format!("{}:{}", catalog.prefix, resource_type)));
                return self;
            }
        };

        let defaults = &st.defaults;
        let rendered = template::render(info.arn, |name| {
            if let Some((_, value)) = values.iter().find(|(placeholder, _)| *placeholder == name) {
                return Some(value.to_string());
            }

            match name {
                "Partition" => Some(defaults.partition().to_string()),
                "Region" => Some(defaults.region().to_string()),
                "Account" => Some(defaults.account().to_string()),
                _ => None,
            }
        });

        match rendered.and_then(|arn| Resource::from_str(&arn)) {
            Ok(resource) => st.push_resource(resource),
            Err(e) => st.record(e),
        }
        self
    }

    fn in_partition<S: Into<String>>(mut self, partition: S) -> Self {
        self.policy_statement_mut().defaults.partition = Some(partition.into());
        self
    }

    fn in_region<S: Into<String>>(mut self, region: S) -> Self {
        self.policy_statement_mut().defaults.region = Some(region.into());
        self
    }

    fn in_account<S: Into<String>>(mut self, account: S) -> Self {
        self.policy_statement_mut().defaults.account = Some(account.into());
        self
    }

    fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.policy_statement_mut().defaults = defaults;
        self
    }

    /// Grant to anyone: `"AWS": "*"`.
    fn for_public(mut self) -> Self {
        self.policy_statement_mut().push_aws_principal(Ok(AwsPrincipal::Any));
        self
    }

    /// Grant to an account's root principal.
    fn for_account(mut self, account: &str) -> Self {
        let st = self.policy_statement_mut();
        let principal = AwsPrincipal::account_root(st.defaults.partition(), account);
        st.push_aws_principal(principal);
        self
    }

    fn for_arn(mut self, arn: &str) -> Self {
        self.policy_statement_mut().push_aws_principal(AwsPrincipal::from_str(arn));
        self
    }

    fn for_user(mut self, account: &str, user: &str) -> Self {
        let st = self.policy_statement_mut();
        let arn = format!("arn:{}:iam::{}:user/{}", st.defaults.partition(), account, user);
        st.push_aws_principal(AwsPrincipal::from_str(&arn));
        self
    }

    fn for_role(mut self, account: &str, role: &str) -> Self {
        let st = self.policy_statement_mut();
        let arn = format!("arn:{}:iam::{}:role/{}", st.defaults.partition(), account, role);
        st.push_aws_principal(AwsPrincipal::from_str(&arn));
        self
    }

    fn for_assumed_role_session(mut self, account: &str, role: &str, session: &str) -> Self {
        let st = self.policy_statement_mut();
        let arn = format!("arn:{}:sts::{}:assumed-role/{}/{}", st.defaults.partition(), account, role, session);
        st.push_aws_principal(AwsPrincipal::from_str(&arn));
        self
    }

    fn for_canonical_user<S: Into<String>>(mut self, id: S) -> Self {
        let st = self.policy_statement_mut();
        let id = id.into();
        if !st.canonical_users.contains(&id) {
            st.canonical_users.push(id);
        }
        self
    }

    /// Grant to a federated identity provider.
    fn for_federated<S: Into<String>>(mut self, provider: S) -> Self {
        let st = self.policy_statement_mut();
        let provider = provider.into();
        if !st.federated.contains(&provider) {
            st.federated.push(provider);
        }
        self
    }

    fn for_federated_amazon(self) -> Self {
        self.for_federated("www.amazon.com")
    }

    fn for_federated_cognito(self) -> Self {
        self.for_federated("cognito-identity.amazonaws.com")
    }

    fn for_federated_facebook(self) -> Self {
        self.for_federated("graph.facebook.com")
    }

    fn for_federated_google(self) -> Self {
        self.for_federated("accounts.google.com")
    }

    /// Grant to a SAML provider registered in `account`.
    fn for_saml(self, account: &str, provider: &str) -> Self {
        let arn =
            format!("arn:{}:iam::{}:saml-provider/{}", self.policy_statement().defaults.partition(), account, provider);
        self.for_federated(arn)
    }

    /// Grant to an AWS service principal such as `sns.amazonaws.com`.
    fn for_service<S: Into<String>>(mut self, service: S) -> Self {
        let st = self.policy_statement_mut();
        let service = service.into();
        if !st.service_principals.contains(&service) {
            st.service_principals.push(service);
        }
        self
    }

    /// Add a condition.
    ///
    /// A key without a `:` is taken to belong to this builder's service. With no operator, the operator is chosen
    /// from the key's value type (`StringLike` for keys of unknown type). Setting the same key under the same
    /// operator again replaces the earlier values.
    fn if_<K: AsRef<str>, V: Into<ConditionValues>, O: Into<Option<Operator>>>(
        mut self,
        key: K,
        values: V,
        operator: O,
    ) -> Self {
        let st = self.policy_statement_mut();
        let key = st.qualified_key(key.as_ref());
        let values = values.into();
        if values.as_list().is_empty() {
            st.record(BuilderError::EmptyConditionValues(key));
            return self;
        }

        let operator = operator.into().unwrap_or_else(|| st.default_operator(&key));
        st.condition.add(operator, key, values);
        self
    }

    /// Add a condition on a templated key such as `aws:RequestTag/${TagKey}`, filling the placeholder with `value`.
    fn if_templated<V: Into<ConditionValues>, O: Into<Option<Operator>>>(
        mut self,
        key_template: &str,
        value: &str,
        values: V,
        operator: O,
    ) -> Self {
        match template::render(key_template, |_| (!value.is_empty()).then(|| value.to_string())) {
            Ok(key) => self.if_(key, values, operator),
            Err(e) => {
                self.policy_statement_mut().record(e);
                self
            }
        }
    }

    global_key!(if_aws_called_via => "aws:CalledVia");
    global_key!(if_aws_called_via_first => "aws:CalledViaFirst");
    global_key!(if_aws_called_via_last => "aws:CalledViaLast");
    global_key!(
        /// Defaults to `DateEquals`; pass e.g. `condop::DateLessThan` for a cutoff.
        if_aws_current_time => "aws:CurrentTime"
    );
    global_key!(if_aws_epoch_time => "aws:EpochTime");
    global_key!(if_aws_federated_provider => "aws:FederatedProvider");
    global_key!(if_aws_multi_factor_auth_age => "aws:MultiFactorAuthAge");
    global_key!(if_aws_multi_factor_auth_present => "aws:MultiFactorAuthPresent");
    global_key!(if_aws_principal_account => "aws:PrincipalAccount");
    global_key!(if_aws_principal_arn => "aws:PrincipalArn");
    global_key!(if_aws_principal_is_aws_service => "aws:PrincipalIsAWSService");
    global_key!(if_aws_principal_org_id => "aws:PrincipalOrgID");
    global_key!(if_aws_principal_org_paths => "aws:PrincipalOrgPaths");
    global_key!(if_aws_principal_service_name => "aws:PrincipalServiceName");
    global_key!(if_aws_principal_service_names_list => "aws:PrincipalServiceNamesList");
    global_key!(if_aws_principal_tag(tag_key) => "aws:PrincipalTag/${TagKey}");
    global_key!(if_aws_principal_type => "aws:PrincipalType");
    global_key!(if_aws_referer => "aws:Referer");
    global_key!(if_aws_requested_region => "aws:RequestedRegion");
    global_key!(
        /// Filter on a tag key and value passed in the request.
        if_aws_request_tag(tag_key) => "aws:RequestTag/${TagKey}"
    );
    global_key!(if_aws_resource_account => "aws:ResourceAccount");
    global_key!(if_aws_resource_org_id => "aws:ResourceOrgID");
    global_key!(if_aws_resource_org_paths => "aws:ResourceOrgPaths");
    global_key!(if_aws_resource_tag(tag_key) => "aws:ResourceTag/${TagKey}");
    global_key!(if_aws_secure_transport => "aws:SecureTransport");
    global_key!(if_aws_source_account => "aws:SourceAccount");
    global_key!(if_aws_source_arn => "aws:SourceArn");
    global_key!(if_aws_source_identity => "aws:SourceIdentity");
    global_key!(if_aws_source_ip => "aws:SourceIp");
    global_key!(if_aws_source_org_id => "aws:SourceOrgID");
    global_key!(if_aws_source_org_paths => "aws:SourceOrgPaths");
    global_key!(if_aws_source_vpc => "aws:SourceVpc");
    global_key!(if_aws_source_vpce => "aws:SourceVpce");
    global_key!(if_aws_tag_keys => "aws:TagKeys");
    global_key!(if_aws_token_issue_time => "aws:TokenIssueTime");
    global_key!(if_aws_user_agent => "aws:UserAgent");
    global_key!(if_aws_userid => "aws:userid");
    global_key!(if_aws_username => "aws:username");
    global_key!(if_aws_via_aws_service => "aws:ViaAWSService");
    global_key!(if_aws_vpc_source_ip => "aws:VpcSourceIp");

    /// Compact the action list with wildcards of at least three characters. See
    /// [compact_with](PolicyStatementBuilder::compact_with).
    fn compact(self) -> Self {
        self.compact_with(3)
    }

    /// Replace the actions with the fewest wildcard patterns that cover exactly the same catalog actions.
    ///
    /// Each wildcard stem has at least `min_chars` characters. A service whose every action is present becomes
    /// `service:*`. Actions of services without a catalog are left alone.
    fn compact_with(mut self, min_chars: usize) -> Self {
        let st = self.policy_statement_mut();
        let actions = std::mem::take(&mut st.actions);
        st.actions = compact_actions(actions, min_chars);
        self
    }

    /// Do not add `"Resource": "*"` when no resource was given. Needed for trust policies.
    fn skip_auto_resource(mut self) -> Self {
        self.policy_statement_mut().skip_auto_resource = true;
        self
    }

    /// Finish the statement, or return the first problem recorded while building it.
    fn to_statement(&self) -> Result<Statement, BuilderError> {
        self.policy_statement().build()
    }

    /// The statement as pretty-printed policy JSON.
    fn to_json(&self) -> Result<String, BuilderError> {
        self.to_statement().map(|statement| statement.to_string())
    }
}

impl PolicyStatementBuilder for PolicyStatement {
    #[inline]
    fn policy_statement(&self) -> &PolicyStatement {
        self
    }

    #[inline]
    fn policy_statement_mut(&mut self) -> &mut PolicyStatement {
        self
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{action_pattern, Defaults, PolicyStatement, PolicyStatementBuilder},
        crate::{condop, BuilderError, Operator, Sqs},
        indoc::indoc,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_without_service() {
        let json = PolicyStatement::new().all_actions().to_json().unwrap();
        assert_eq!(
            json,
            indoc! { r#"
            {
                "Effect": "Allow",
                "Action": "*",
                "Resource": "*"
            }"# }
        );

        let err = PolicyStatement::new().all_list_actions().to_statement().unwrap_err();
        assert_eq!(err, BuilderError::MissingService("all_list_actions".to_string()));

        let err = PolicyStatement::new().to_action("GetObject").to_statement().unwrap_err();
        assert_eq!(err, BuilderError::MissingService("to_action".to_string()));

        let err = PolicyStatement::new().to("s3:GetObject").on_resource_type("bucket", &[]).to_statement().unwrap_err();
        assert_eq!(err, BuilderError::MissingService("on_resource_type".to_string()));

        let err = PolicyStatement::new().to("s3:GetObject").all_matching_actions("Get.*").to_statement().unwrap_err();
        assert_eq!(err, BuilderError::MissingService("all_matching_actions".to_string()));
    }

    #[test_log::test]
    fn test_mixed_services() {
        let json = PolicyStatement::new()
            .sid("DenyOutsideOrg")
            .deny()
            .to("s3:Delete*")
            .to("sqs:DeleteQueue")
            .to("s3:Delete*")
            .on("arn:aws:s3:::logs/*")
            .on("arn:aws:sqs:us-east-1:123456789012:audit")
            .if_("aws:PrincipalOrgID", "o-abc123", condop::StringNotEquals)
            .to_json()
            .unwrap();

        assert_eq!(
            json,
            indoc! { r#"
            {
                "Sid": "DenyOutsideOrg",
                "Effect": "Deny",
                "Action": [
                    "s3:Delete*",
                    "sqs:DeleteQueue"
                ],
                "Resource": [
                    "arn:aws:s3:::logs/*",
                    "arn:aws:sqs:us-east-1:123456789012:audit"
                ],
                "Condition": {
                    "StringNotEquals": {
                        "aws:PrincipalOrgID": "o-abc123"
                    }
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_recorded_errors() {
        let st = PolicyStatement::new().to("s3").on("bogus").all_actions();
        assert_eq!(st.errors().len(), 2);
        assert_eq!(st.to_statement().unwrap_err(), BuilderError::InvalidAction("s3".to_string()));

        let err = PolicyStatement::new().all_actions().on("bogus").to_statement().unwrap_err();
        assert_eq!(err, BuilderError::InvalidResource("bogus".to_string()));

        let err = Sqs::new().send_message().on_resource_type("queue", &[]).to_statement().unwrap_err();
        assert_eq!(err, BuilderError::MissingPlaceholder("QueueName".to_string()));

        let err = Sqs::new().send_message().on_resource_type("topic", &[]).to_statement().unwrap_err();
        assert_eq!(err, BuilderError::UnknownResourceType("sqs:topic".to_string()));

        let err = PolicyStatement::new().all_actions().for_arn("alice").to_statement().unwrap_err();
        assert_eq!(err, BuilderError::InvalidPrincipal("alice".to_string()));

        let err = PolicyStatement::new().on_all_resources().to_statement().unwrap_err();
        assert_eq!(err.to_string(), "Invalid statement: Either Action or NotAction must be set.");
    }

    #[test_log::test]
    fn test_principals() {
        let json = PolicyStatement::new()
            .to("sts:AssumeRole")
            .for_account("111122223333")
            .for_role("111122223333", "admin")
            .for_account("111122223333")
            .for_saml("111122223333", "okta")
            .for_service("ec2.amazonaws.com")
            .for_canonical_user("79a59df900b949e55d96a1e698fbacedfd6e09d98eacf8f8d5218e7cd47ef2be")
            .skip_auto_resource()
            .to_json()
            .unwrap();

        assert_eq!(
            json,
            indoc! { r#"
            {
                "Effect": "Allow",
                "Action": "sts:AssumeRole",
                "Principal": {
                    "AWS": [
                        "arn:aws:iam::111122223333:root",
                        "arn:aws:iam::111122223333:role/admin"
                    ],
                    "CanonicalUser": "79a59df900b949e55d96a1e698fbacedfd6e09d98eacf8f8d5218e7cd47ef2be",
                    "Federated": "arn:aws:iam::111122223333:saml-provider/okta",
                    "Service": "ec2.amazonaws.com"
                }
            }"# }
        );

        let statement = PolicyStatement::new()
            .in_partition("aws-cn")
            .to("s3:GetObject")
            .for_user("111122223333", "alice")
            .for_assumed_role_session("111122223333", "reader", "bob")
            .for_public()
            .for_federated_google()
            .to_statement()
            .unwrap();
        let principal = statement.principal().unwrap().to_string();
        assert!(principal.contains("arn:aws-cn:iam::111122223333:user/alice"));
        assert!(principal.contains("arn:aws-cn:sts::111122223333:assumed-role/reader/bob"));
        assert!(principal.contains(r#""Federated": "accounts.google.com""#));

        assert!(!PolicyStatement::new().to("s3:GetObject").has_principals());
        assert!(PolicyStatement::new().for_service("ec2.amazonaws.com").has_principals());
    }

    #[test_log::test]
    fn test_not_elements() {
        let json = Sqs::new()
            .deny()
            .not_actions()
            .send_message()
            .receive_message()
            .not_resources()
            .on("arn:aws:sqs:*:*:public-*")
            .not_principals()
            .for_account("111122223333")
            .to_json()
            .unwrap();

        assert_eq!(
            json,
            indoc! { r#"
            {
                "Effect": "Deny",
                "NotAction": [
                    "sqs:SendMessage",
                    "sqs:ReceiveMessage"
                ],
                "NotResource": "arn:aws:sqs:*:*:public-*",
                "NotPrincipal": {
                    "AWS": "arn:aws:iam::111122223333:root"
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_defaults() {
        let defaults: Defaults = serde_json::from_str(r#"{"partition": "aws-cn", "account": "123456789012"}"#).unwrap();
        assert_eq!(defaults.partition(), "aws-cn");
        assert_eq!(defaults.region(), "*");
        assert_eq!(Defaults::default().partition(), "aws");
        assert!(serde_json::from_str::<Defaults>(r#"{"Partition": "aws"}"#).is_err());

        let statement = Sqs::new().with_defaults(defaults).send_message().on_queue("jobs").to_statement().unwrap();
        assert_eq!(statement.resource().unwrap()[0].to_string(), "arn:aws-cn:sqs:*:123456789012:jobs");
    }

    #[test_log::test]
    fn test_conditions() {
        let st = PolicyStatement::new()
            .to("s3:GetObject")
            .if_aws_source_ip("203.0.113.0/24", None)
            .if_aws_multi_factor_auth_present(true, None)
            .if_aws_principal_tag("team", "blue", None)
            .if_aws_principal_tag("team", "red", None)
            .if_("custom:Thing", "x", condop::StringEquals.if_exists())
            .if_("NoPrefix", "y", None);

        let condition = st.policy_statement().condition();
        assert_eq!(condition.len(), 4);
        assert_eq!(condition.get(&Operator::new(condop::IpAddress)).unwrap()["aws:SourceIp"][0], "203.0.113.0/24");
        assert_eq!(condition.get(&Operator::new(condop::Bool)).unwrap()["aws:MultiFactorAuthPresent"][0], "true");
        assert_eq!(condition.get(&Operator::new(condop::StringEqualsIfExists)).unwrap()["custom:Thing"][0], "x");

        let string_like = condition.get(&Operator::new(condop::StringLike)).unwrap();
        assert_eq!(string_like["aws:PrincipalTag/team"][0], "red");
        assert_eq!(string_like["NoPrefix"][0], "y");

        let sqs = Sqs::new().send_message().if_("SomeKey", "z", None);
        let string_like = sqs.policy_statement().condition().get(&Operator::new(condop::StringLike)).unwrap();
        assert!(string_like.contains_key("sqs:SomeKey"));
    }

    #[test_log::test]
    fn test_default_operator_from_other_catalogs() {
        let st = PolicyStatement::new().to("s3:ListBucket").if_("s3:max-keys", 10, None);
        let numeric = st.policy_statement().condition().get(&Operator::new(condop::NumericEquals)).unwrap();
        assert_eq!(numeric["s3:max-keys"][0], "10");

        let sqs = Sqs::new().send_message().if_("s3:max-keys", 10, None).if_("kms:GrantIsForAWSResource", true, None);
        let condition = sqs.policy_statement().condition();
        assert!(condition.get(&Operator::new(condop::NumericEquals)).unwrap().contains_key("s3:max-keys"));
        assert!(condition.get(&Operator::new(condop::Bool)).unwrap().contains_key("kms:GrantIsForAWSResource"));

        let st = PolicyStatement::new().to("ec2:RunInstances").if_("ec2:InstanceType", "t3.micro", None);
        let string_like = st.policy_statement().condition().get(&Operator::new(condop::StringLike)).unwrap();
        assert!(string_like.contains_key("ec2:InstanceType"));
    }

    #[test_log::test]
    fn test_empty_condition_inputs() {
        let st = Sqs::new().send_message().if_aws_request_tag("", "blue", None);
        assert_eq!(st.to_statement().unwrap_err(), BuilderError::MissingPlaceholder("TagKey".to_string()));
        assert!(st.policy_statement().condition().is_empty());

        let err = Sqs::new().send_message().if_("aws:SourceVpce", Vec::<&str>::new(), None).to_statement().unwrap_err();
        assert_eq!(err, BuilderError::EmptyConditionValues("aws:SourceVpce".to_string()));

        let err = Sqs::new().send_message().if_("Prefix", Vec::<String>::new(), None).to_json().unwrap_err();
        assert_eq!(err.to_string(), "No values supplied for condition key: sqs:Prefix");
    }

    #[test_log::test]
    fn test_action_pattern() {
        assert!(action_pattern("/^get/i").unwrap().is_match("GetObject"));
        assert!(!action_pattern("/^get/").unwrap().is_match("GetObject"));
        assert!(action_pattern("^Get").unwrap().is_match("GetObject"));
        assert!(action_pattern("/ab/c/i").unwrap().is_match("AB/C"));
        assert_eq!(action_pattern("/[/i").unwrap_err(), BuilderError::InvalidPattern("/[/i".to_string()));
    }
}
