//! Per-service statement builders.
//!
//! Each module holds one service's catalog (`CATALOG`) and a builder with a method per action (`create_bucket`),
//! per resource type (`on_bucket`) and per service condition key (`if_delimiter`). The shared surface comes from
//! [PolicyStatementBuilder](crate::PolicyStatementBuilder).

use {
    crate::catalog::{ResourceRequirement, ServiceCatalog},
    lazy_static::lazy_static,
    std::collections::HashMap,
};

/// An action's resource type that must be named.
pub(crate) const fn required(name: &'static str) -> ResourceRequirement {
    ResourceRequirement::required(name)
}

/// An action's resource type that may be named.
pub(crate) const fn optional(name: &'static str) -> ResourceRequirement {
    ResourceRequirement::optional(name)
}

/// Declare a service: its static catalog and the fluent builder generated from it.
macro_rules! service {
    (
        $(#[$meta:meta])*
        pub struct $builder:ident;
        prefix: $prefix:literal,
        name: $name:literal,
        api_reference: $api_reference:literal,
        complete: $complete:literal,

        actions {
            $(
                $method:ident : $action:literal, $level:ident, $desc:literal
                $( => $( . $modifier:ident ( $($args:tt)* ) )+ )? ;
            )*
        }

        resources {
            $(
                $on:ident : $rtype:literal, $arn:literal ( $( $param:ident : $placeholder:literal ),* )
                [ $( $rkey:literal ),* ] ;
            )*
        }

        conditions {
            $( $if_method:ident : $key:literal, $kind:ident, $cdesc:literal ; )*
        }

        tagged_conditions {
            $( $tagged_method:ident ( $tag:ident ) : $tkey:literal, $tkind:ident, $tdesc:literal ; )*
        }
    ) => {
        pub static CATALOG: $crate::catalog::ServiceCatalog = $crate::catalog::ServiceCatalog {
            prefix: $prefix,
            name: $name,
            api_reference: $api_reference,
            complete: $complete,
            actions: &[
                $(
                    $crate::catalog::ActionInfo::new($action, $crate::catalog::AccessLevel::$level, $desc)
                    $( $( .$modifier($($args)*) )+ )?,
                )*
            ],
            resource_types: &[
                $(
                    $crate::catalog::ResourceTypeInfo {
                        name: $rtype,
                        arn: $arn,
                        condition_keys: &[ $( $rkey ),* ],
                    },
                )*
            ],
            condition_keys: &[
                $(
                    $crate::catalog::ConditionKeyInfo {
                        name: $key,
                        description: $cdesc,
                        kind: $crate::catalog::ConditionType::$kind,
                    },
                )*
                $(
                    $crate::catalog::ConditionKeyInfo {
                        name: $tkey,
                        description: $tdesc,
                        kind: $crate::catalog::ConditionType::$tkind,
                    },
                )*
            ],
        };

        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $builder {
            statement: $crate::PolicyStatement,
        }

        impl $builder {
            pub fn new() -> Self {
                Self {
                    statement: $crate::PolicyStatement::with_service(&CATALOG),
                }
            }

            $(
                #[doc = $desc]
                pub fn $method(self) -> Self {
                    $crate::PolicyStatementBuilder::to_action(self, $action)
                }
            )*

            $(
                #[doc = concat!("Adds a resource of type `", $rtype, "`: `", $arn, "`.")]
                pub fn $on(self $(, $param: &str)*) -> Self {
                    $crate::PolicyStatementBuilder::on_resource_type(self, $rtype, &[ $( ($placeholder, $param) ),* ])
                }
            )*

            $(
                #[doc = $cdesc]
                pub fn $if_method<V, O>(self, values: V, operator: O) -> Self
                where
                    V: Into<$crate::ConditionValues>,
                    O: Into<Option<$crate::Operator>>,
                {
                    $crate::PolicyStatementBuilder::if_(self, $key, values, operator)
                }
            )*

            $(
                #[doc = $tdesc]
                pub fn $tagged_method<V, O>(self, $tag: &str, values: V, operator: O) -> Self
                where
                    V: Into<$crate::ConditionValues>,
                    O: Into<Option<$crate::Operator>>,
                {
                    $crate::PolicyStatementBuilder::if_templated(self, $tkey, $tag, values, operator)
                }
            )*
        }

        impl Default for $builder {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::PolicyStatementBuilder for $builder {
            #[inline]
            fn policy_statement(&self) -> &$crate::PolicyStatement {
                &self.statement
            }

            #[inline]
            fn policy_statement_mut(&mut self) -> &mut $crate::PolicyStatement {
                &mut self.statement
            }
        }
    };
}

pub mod globalaccelerator;
pub mod kms;
pub mod s3;
pub mod sns;
pub mod sqs;
pub mod sts;

pub use {globalaccelerator::GlobalAccelerator, kms::Kms, s3::S3, sns::Sns, sqs::Sqs, sts::Sts};

static ALL: [&ServiceCatalog; 6] =
    [&globalaccelerator::CATALOG, &kms::CATALOG, &s3::CATALOG, &sns::CATALOG, &sqs::CATALOG, &sts::CATALOG];

lazy_static! {
    static ref REGISTRY: HashMap<&'static str, &'static ServiceCatalog> =
        ALL.iter().map(|catalog| (catalog.prefix, *catalog)).collect();
}

/// The catalog for a service prefix such as `s3`. Prefixes compare case-insensitively.
pub fn lookup(prefix: &str) -> Option<&'static ServiceCatalog> {
    REGISTRY.get(prefix.to_ascii_lowercase().as_str()).copied()
}

/// Every known service catalog, ordered by prefix.
pub fn all() -> &'static [&'static ServiceCatalog] {
    &ALL
}

#[cfg(test)]
mod tests {
    use {
        super::{all, lookup},
        crate::{catalog::ServiceCatalog, template},
        pretty_assertions::assert_eq,
        std::collections::HashSet,
    };

    #[test_log::test]
    fn test_lookup() {
        assert_eq!(lookup("s3").unwrap().name, "Amazon S3");
        assert_eq!(lookup("SQS").unwrap().prefix, "sqs");
        assert!(lookup("ec2").is_none());
        assert_eq!(all().len(), 6);
        assert!(lookup("sqs").unwrap().complete);
        assert!(!lookup("s3").unwrap().complete);

        let prefixes: Vec<&str> = all().iter().map(|c| c.prefix).collect();
        let mut sorted = prefixes.clone();
        sorted.sort();
        assert_eq!(prefixes, sorted);
    }

    fn check_catalog(catalog: &ServiceCatalog) {
        let mut names = HashSet::new();
        for action in catalog.actions {
            assert!(names.insert(action.name), "{}:{} is listed twice", catalog.prefix, action.name);
            assert!(!action.description.is_empty());
            for requirement in action.resource_types {
                assert!(
                    catalog.resource_type(requirement.name).is_some(),
                    "{}:{} names unknown resource type {}",
                    catalog.prefix,
                    action.name,
                    requirement.name
                );
            }
            for key in action.condition_keys {
                assert!(
                    catalog.condition_key(key).is_some() || key.starts_with("aws:"),
                    "{}:{} names unknown condition key {}",
                    catalog.prefix,
                    action.name,
                    key
                );
            }
        }

        for resource_type in catalog.resource_types {
            let placeholders = template::placeholders(resource_type.arn).unwrap();
            assert_eq!(placeholders[0], "Partition", "{} does not start with a partition", resource_type.arn);
        }

        for key in catalog.condition_keys {
            assert!(key.name.contains(':'), "{} has no namespace", key.name);
            assert!(!key.name.starts_with("aws:"), "{} duplicates a global key", key.name);
        }
    }

    #[test_log::test]
    fn test_catalogs_consistent() {
        for catalog in all() {
            check_catalog(catalog);
        }
    }
}
