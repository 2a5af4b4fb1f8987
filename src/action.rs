use {
    crate::{serutil::StringLikeList, BuilderError},
    log::debug,
    regex::{Regex, RegexBuilder},
    serde::{
        de::{self, Deserializer, Unexpected, Visitor},
        ser::Serializer,
        Deserialize, Serialize,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

pub type ActionList = StringLikeList<Action>;

/// An action in a statement's `Action` or `NotAction` element: `*`, or `service:Action` where the action may
/// contain `*` and `?` wildcards.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Action {
    Any,
    Specific {
        service: String,
        action: String,
    },
}

impl Action {
    pub fn new<S: Into<String>, A: Into<String>>(service: S, action: A) -> Result<Self, BuilderError> {
        let service = service.into();
        let action = action.into();

        if service.is_empty() || action.is_empty() {
            debug!("Action '{service}:{action}' has an empty component.");
            return Err(BuilderError::InvalidAction(format!("{}:{}", service, action)));
        }

        if !service.is_ascii() || !action.is_ascii() {
            debug!("Action '{service}:{action}' is not ASCII.");
            return Err(BuilderError::InvalidAction(format!("{}:{}", service, action)));
        }

        for (i, c) in service.bytes().enumerate() {
            if !c.is_ascii_alphanumeric() && !(i > 0 && i < service.len() - 1 && (c == b'-' || c == b'_')) {
                debug!("Action '{service}:{action}' has an invalid service.");
                return Err(BuilderError::InvalidAction(format!("{}:{}", service, action)));
            }
        }

        for (i, c) in action.bytes().enumerate() {
            if !c.is_ascii_alphanumeric()
                && c != b'*'
                && c != b'?'
                && !(i > 0 && i < action.len() - 1 && (c == b'-' || c == b'_'))
            {
                debug!("Action '{service}:{action}' has an invalid action.");
                return Err(BuilderError::InvalidAction(format!("{}:{}", service, action)));
            }
        }

        Ok(Action::Specific {
            service,
            action,
        })
    }

    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[inline]
    pub fn is_specific(&self) -> bool {
        matches!(self, Self::Specific { .. })
    }

    /// Indicates whether the action name contains a `*` or `?` wildcard.
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        match self {
            Self::Any => true,
            Self::Specific {
                action,
                ..
            } => action.contains(|c| c == '*' || c == '?'),
        }
    }

    #[inline]
    pub fn service(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Specific {
                service,
                ..
            } => service,
        }
    }

    #[inline]
    pub fn action(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Specific {
                action,
                ..
            } => action,
        }
    }

    /// Indicates whether this action (possibly a wildcard) covers the named action of the given service.
    ///
    /// Service prefixes and action names compare case-insensitively, as IAM does.
    pub fn matches(&self, service: &str, action: &str) -> bool {
        match self.action_regex() {
            Some(re) => self.service_matches(service) && re.is_match(action),
            None => false,
        }
    }

    #[inline]
    pub(crate) fn service_matches(&self, service: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Specific {
                service: my_service,
                ..
            } => my_service.eq_ignore_ascii_case(service),
        }
    }

    /// The action-name glob as an anchored, case-insensitive regular expression.
    pub(crate) fn action_regex(&self) -> Option<Regex> {
        match regex_from_glob(self.action()).case_insensitive(true).build() {
            Ok(re) => Some(re),
            Err(e) => {
                debug!("Action '{}' does not convert to a regex: {}", self, e);
                None
            }
        }
    }
}

/// Convert an IAM glob (`*` and `?` wildcards) into an anchored regex.
pub(crate) fn regex_from_glob(s: &str) -> RegexBuilder {
    let mut pattern = String::with_capacity(2 + s.len());
    pattern.push('^');

    for c in s.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            _ => pattern.push_str(&regex::escape(&String::from(c))),
        }
    }
    pattern.push('$');
    RegexBuilder::new(&pattern)
}

impl FromStr for Action {
    type Err = BuilderError;
    fn from_str(v: &str) -> Result<Self, Self::Err> {
        if v == "*" {
            return Ok(Self::Any);
        }

        let parts: Vec<&str> = v.split(':').collect();
        if parts.len() != 2 {
            return Err(BuilderError::InvalidAction(v.to_string()));
        }

        Action::new(parts[0], parts[1])
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Any => f.write_str("*"),
            Self::Specific {
                service,
                action,
            } => write!(f, "{}:{}", service, action),
        }
    }
}

struct ActionVisitor {}
impl<'de> Visitor<'de> for ActionVisitor {
    type Value = Action;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "service:action or \"*\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match Action::from_str(v) {
            Ok(action) => Ok(action),
            Err(_) => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ActionVisitor {})
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
