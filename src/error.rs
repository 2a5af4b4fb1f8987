use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Errors raised while assembling a policy statement.
///
/// The fluent builder methods never fail directly; they record the first problem encountered and it is reported
/// when the statement is finally built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuilderError {
    EmptyConditionValues(String),
    InvalidAction(String),
    InvalidConditionOperator(String),
    InvalidPattern(String),
    InvalidPolicyVersion(String),
    InvalidPrincipal(String),
    InvalidResource(String),
    InvalidStatement(String),
    InvalidSubstitution(String),
    MissingPlaceholder(String),
    MissingService(String),
    UnknownResourceType(String),
}

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::EmptyConditionValues(key) => write!(f, "No values supplied for condition key: {}", key),
            Self::InvalidAction(action) => write!(f, "Invalid action: {}", action),
            Self::InvalidConditionOperator(operator) => write!(f, "Invalid condition operator: {}", operator),
            Self::InvalidPattern(pattern) => write!(f, "Invalid action pattern: {}", pattern),
            Self::InvalidPolicyVersion(version) => write!(f, "Invalid policy version: {}", version),
            Self::InvalidPrincipal(principal) => write!(f, "Invalid principal: {}", principal),
            Self::InvalidResource(resource) => write!(f, "Invalid resource: {}", resource),
            Self::InvalidStatement(reason) => write!(f, "Invalid statement: {}", reason),
            Self::InvalidSubstitution(element) => write!(f, "Invalid variable substitution: {}", element),
            Self::MissingPlaceholder(name) => write!(f, "No value supplied for placeholder: {}", name),
            Self::MissingService(operation) => write!(f, "Operation requires a service: {}", operation),
            Self::UnknownResourceType(resource_type) => write!(f, "Unknown resource type: {}", resource_type),
        }
    }
}

impl Error for BuilderError {}
