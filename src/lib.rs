#![warn(clippy::all)]

//! Fluent builders for AWS IAM policy statements.
//!
//! Each AWS service gets a builder (see [services]) with one method per action, resource type and
//! service-specific condition key, generated from a static catalog of what IAM publishes for that service. The shared
//! surface (effect, principals, conditions, wildcard compaction) lives on [PolicyStatementBuilder].
//!
//! ```
//! use scratchstack_aspen_builder::{PolicyStatementBuilder, Sqs};
//!
//! let statement = Sqs::new()
//!     .send_message()
//!     .in_region("us-east-1")
//!     .in_account("123456789012")
//!     .on_queue("orders")
//!     .to_statement()
//!     .unwrap();
//! assert_eq!(statement.action().unwrap()[0].to_string(), "sqs:SendMessage");
//! ```

#[macro_use]
pub(crate) mod serutil;

pub(crate) mod action;
pub(crate) mod builder;
pub(crate) mod catalog;
pub(crate) mod compact;
pub(crate) mod condition;
pub(crate) mod effect;
pub(crate) mod error;
pub(crate) mod global;
pub(crate) mod policy;
pub(crate) mod principal;
pub(crate) mod resource;
pub mod services;
pub(crate) mod statement;
pub mod template;

pub use {
    action::{Action, ActionList},
    builder::{Defaults, PolicyStatement, PolicyStatementBuilder},
    catalog::{
        AccessLevel, AccessLevelList, ActionInfo, ConditionKeyInfo, ConditionType, ResourceRequirement,
        ResourceTypeInfo, ServiceCatalog,
    },
    condition::{
        op as condop, ArnCmp, Condition, ConditionMap, ConditionOp, ConditionValues, DateCmp, NumericCmp, Operator,
        SetQualifier, StringCmp, Variant,
    },
    effect::Effect,
    error::BuilderError,
    global::{global_condition_key, GLOBAL_CONDITION_KEYS},
    policy::{Policy, PolicyBuilder, PolicyBuilderError, PolicyVersion},
    principal::{
        AwsPrincipal, Principal, SpecifiedPrincipal, SpecifiedPrincipalBuilder, SpecifiedPrincipalBuilderError,
    },
    resource::{Resource, ResourceArn, ResourceList},
    services::{GlobalAccelerator, Kms, Sns, Sqs, Sts, S3},
    serutil::{ListKind, MapList, StringLikeList},
    statement::{Statement, StatementBuilder, StatementBuilderError, StatementList},
};
