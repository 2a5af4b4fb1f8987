use {
    crate::BuilderError,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

const PARTITION_START: usize = 4;

/// An Amazon Resource Name (ARN) pattern in a resource statement.
///
/// Components may contain `*` and `?` wildcards, so this is looser than a concrete ARN: any string of the form
/// `arn:partition:service:region:account-id:resource` is accepted. The resource portion may itself contain colons.
///
/// [ResourceArn] objects are immutable.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct ResourceArn {
    arn: String,
    service_start: usize,
    region_start: usize,
    account_id_start: usize,
    resource_start: usize,
}

impl ResourceArn {
    /// Create a new ARN pattern from the specified components.
    pub fn new(partition: &str, service: &str, region: &str, account_id: &str, resource: &str) -> Self {
        let arn = format!("arn:{partition}:{service}:{region}:{account_id}:{resource}");
        let service_start = PARTITION_START + partition.len() + 1;
        let region_start = service_start + service.len() + 1;
        let account_id_start = region_start + region.len() + 1;
        let resource_start = account_id_start + account_id.len() + 1;

        Self {
            arn,
            service_start,
            region_start,
            account_id_start,
            resource_start,
        }
    }

    #[inline]
    pub fn partition_pattern(&self) -> &str {
        &self.arn[PARTITION_START..self.service_start - 1]
    }

    #[inline]
    pub fn service_pattern(&self) -> &str {
        &self.arn[self.service_start..self.region_start - 1]
    }

    #[inline]
    pub fn region_pattern(&self) -> &str {
        &self.arn[self.region_start..self.account_id_start - 1]
    }

    #[inline]
    pub fn account_id_pattern(&self) -> &str {
        &self.arn[self.account_id_start..self.resource_start - 1]
    }

    #[inline]
    pub fn resource_pattern(&self) -> &str {
        &self.arn[self.resource_start..]
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.arn
    }
}

impl FromStr for ResourceArn {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(6, ':').collect();
        if parts.len() != 6 || parts[0] != "arn" || parts[1].is_empty() || parts[2].is_empty() {
            log::debug!("Failed to parse resource as ARN pattern: {}", s);
            return Err(BuilderError::InvalidResource(s.to_string()));
        }

        Ok(Self::new(parts[1], parts[2], parts[3], parts[4], parts[5]))
    }
}

impl Display for ResourceArn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.arn)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::ResourceArn,
        crate::BuilderError,
        pretty_assertions::{assert_eq, assert_ne},
        std::str::FromStr,
    };

    #[test_log::test]
    fn check_arn_pattern_derived() {
        let pat1a = ResourceArn::from_str("arn:*:kms:us-*-1:123456789012:key/*").unwrap();
        let pat1b = ResourceArn::new("*", "kms", "us-*-1", "123456789012", "key/*");
        let pat2 = ResourceArn::from_str("arn:aws:kms:us-east-1:123456789012:key/*").unwrap();

        assert_eq!(pat1a, pat1b);
        assert_ne!(pat1a, pat2);
        assert_eq!(pat1a.clone(), pat1b);
        assert_eq!(pat1a.to_string(), "arn:*:kms:us-*-1:123456789012:key/*");
        assert_eq!(pat1a.as_str(), "arn:*:kms:us-*-1:123456789012:key/*");
    }

    #[test_log::test]
    fn check_arn_pattern_components() {
        let pat = ResourceArn::from_str("arn:aws:s3:::examplebucket/a:b").unwrap();
        assert_eq!(pat.partition_pattern(), "aws");
        assert_eq!(pat.service_pattern(), "s3");
        assert_eq!(pat.region_pattern(), "");
        assert_eq!(pat.account_id_pattern(), "");
        assert_eq!(pat.resource_pattern(), "examplebucket/a:b");
    }

    #[test_log::test]
    fn check_malformed_patterns() {
        let wrong_parts = vec!["arn", "arn:aw*", "arn:aws:s3", "arn:aws:s3:us-east-1", "arn:aws:s3::123456789012"];
        for wrong_part in wrong_parts {
            assert_eq!(
                ResourceArn::from_str(wrong_part).unwrap_err().to_string(),
                format!("Invalid resource: {wrong_part}")
            );
        }

        let err = ResourceArn::from_str("https:aws:sqs:us-east-1:123456789012:queue").unwrap_err();
        assert_eq!(err, BuilderError::InvalidResource("https:aws:sqs:us-east-1:123456789012:queue".to_string()));

        let err = ResourceArn::from_str("arn::sqs:us-east-1:123456789012:queue").unwrap_err();
        assert_eq!(err, BuilderError::InvalidResource("arn::sqs:us-east-1:123456789012:queue".to_string()));
    }
}
