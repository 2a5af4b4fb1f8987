use {
    crate::{condop, ConditionOp},
    regex::Regex,
    std::{
        collections::BTreeMap,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// The access level AWS documents for an action.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AccessLevel {
    List,
    Read,
    Write,
    PermissionsManagement,
    Tagging,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 5] =
        [Self::List, Self::Read, Self::Write, Self::PermissionsManagement, Self::Tagging];

    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Read => "Read",
            Self::Write => "Write",
            Self::PermissionsManagement => "Permissions management",
            Self::Tagging => "Tagging",
        }
    }
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Action names grouped by access level.
pub type AccessLevelList = BTreeMap<AccessLevel, Vec<&'static str>>;

/// The value type of a condition key.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConditionType {
    String,
    ArrayOfString,
    Numeric,
    Date,
    Bool,
    Arn,
    ArrayOfArn,
    IpAddress,
    Binary,
}

impl ConditionType {
    /// The operator used for a key of this type when the caller does not name one.
    pub fn default_operator(&self) -> ConditionOp {
        match self {
            Self::String | Self::ArrayOfString => condop::StringLike,
            Self::Numeric => condop::NumericEquals,
            Self::Date => condop::DateEquals,
            Self::Bool => condop::Bool,
            Self::Arn | Self::ArrayOfArn => condop::ArnLike,
            Self::IpAddress => condop::IpAddress,
            Self::Binary => condop::BinaryEquals,
        }
    }
}

/// Whether an action acts on a resource type, and whether that resource is mandatory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResourceRequirement {
    pub name: &'static str,
    pub required: bool,
}

impl ResourceRequirement {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// One entry of a service's action table.
///
/// Built with `const` chaining so catalogs can live in statics:
/// `ActionInfo::new("GetObject", AccessLevel::Read, "...").resources(&[...]).conditions(&[...])`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ActionInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub access_level: AccessLevel,
    pub url: Option<&'static str>,
    pub resource_types: &'static [ResourceRequirement],
    pub condition_keys: &'static [&'static str],
    pub dependent_actions: &'static [&'static str],
}

impl ActionInfo {
    pub const fn new(name: &'static str, access_level: AccessLevel, description: &'static str) -> Self {
        Self {
            name,
            description,
            access_level,
            url: None,
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        }
    }

    pub const fn resources(self, resource_types: &'static [ResourceRequirement]) -> Self {
        Self {
            resource_types,
            ..self
        }
    }

    pub const fn conditions(self, condition_keys: &'static [&'static str]) -> Self {
        Self {
            condition_keys,
            ..self
        }
    }

    pub const fn dependent(self, dependent_actions: &'static [&'static str]) -> Self {
        Self {
            dependent_actions,
            ..self
        }
    }

    pub const fn url(self, url: &'static str) -> Self {
        Self {
            url: Some(url),
            ..self
        }
    }
}

/// A resource type and the ARN template that identifies it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResourceTypeInfo {
    pub name: &'static str,
    pub arn: &'static str,
    pub condition_keys: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConditionKeyInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ConditionType,
}

impl ConditionKeyInfo {
    /// Indicates whether this (possibly templated) key covers the concrete key `key`.
    ///
    /// Keys compare case-insensitively. A templated key such as `s3:ExistingObjectTag/${TagKey}` matches any
    /// key that shares its text up to the placeholder and has a non-empty remainder.
    pub fn matches(&self, key: &str) -> bool {
        match self.name.find("${") {
            None => self.name.eq_ignore_ascii_case(key),
            Some(pos) => {
                let prefix = &self.name[..pos];
                key.len() > pos && key.is_char_boundary(pos) && key[..pos].eq_ignore_ascii_case(prefix)
            }
        }
    }
}

/// The published action/resource/condition-key catalog for one AWS service.
#[derive(Debug)]
pub struct ServiceCatalog {
    pub prefix: &'static str,
    pub name: &'static str,
    pub api_reference: &'static str,
    /// Whether `actions` lists every action the service defines. Wildcards are only synthesized for complete
    /// catalogs.
    pub complete: bool,
    pub actions: &'static [ActionInfo],
    pub resource_types: &'static [ResourceTypeInfo],
    pub condition_keys: &'static [ConditionKeyInfo],
}

impl ServiceCatalog {
    pub fn action(&self, name: &str) -> Option<&'static ActionInfo> {
        self.actions.iter().find(|a| a.name.eq_ignore_ascii_case(name))
    }

    pub fn resource_type(&self, name: &str) -> Option<&'static ResourceTypeInfo> {
        self.resource_types.iter().find(|r| r.name == name)
    }

    pub fn condition_key(&self, key: &str) -> Option<&'static ConditionKeyInfo> {
        self.condition_keys.iter().find(|c| c.matches(key))
    }

    /// The documentation URL for an action.
    pub fn action_url(&self, name: &str) -> Option<String> {
        self.action(name).map(|a| match a.url {
            Some(url) => url.to_string(),
            None => format!("{}API_{}.html", self.api_reference, a.name),
        })
    }

    pub fn actions_at(&self, level: AccessLevel) -> Vec<&'static str> {
        self.actions.iter().filter(|a| a.access_level == level).map(|a| a.name).collect()
    }

    pub fn access_level_list(&self) -> AccessLevelList {
        let mut result = AccessLevelList::new();
        for action in self.actions {
            result.entry(action.access_level).or_default().push(action.name);
        }
        result
    }

    pub fn matching_actions(&self, pattern: &Regex) -> Vec<&'static str> {
        self.actions.iter().filter(|a| pattern.is_match(a.name)).map(|a| a.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{
            AccessLevel, ActionInfo, ConditionKeyInfo, ConditionType, ResourceRequirement, ResourceTypeInfo,
            ServiceCatalog,
        },
        crate::condop,
        pretty_assertions::assert_eq,
        regex::Regex,
    };

    static WIDGETS: ServiceCatalog = ServiceCatalog {
        prefix: "widgets",
        name: "Example Widgets",
        api_reference: "https://docs.example.com/widgets/",
        complete: true,
        actions: &[
            ActionInfo::new("CreateWidget", AccessLevel::Write, "Grants permission to create a widget")
                .resources(&[ResourceRequirement::required("widget")])
                .conditions(&["aws:RequestTag/${TagKey}", "widgets:Color"]),
            ActionInfo::new("DescribeWidget", AccessLevel::Read, "Grants permission to describe a widget")
                .resources(&[ResourceRequirement::optional("widget")]),
            ActionInfo::new("ListWidgets", AccessLevel::List, "Grants permission to list widgets")
                .url("https://docs.example.com/widgets/listing.html"),
            ActionInfo::new("TagWidget", AccessLevel::Tagging, "Grants permission to tag a widget")
                .dependent(&["widgets:DescribeWidget"]),
        ],
        resource_types: &[ResourceTypeInfo {
            name: "widget",
            arn: "arn:${Partition}:widgets:${Region}:${Account}:widget/${WidgetId}",
            condition_keys: &["widgets:ResourceTag/${TagKey}"],
        }],
        condition_keys: &[
            ConditionKeyInfo {
                name: "widgets:Color",
                description: "Filters access by widget color",
                kind: ConditionType::String,
            },
            ConditionKeyInfo {
                name: "widgets:ResourceTag/${TagKey}",
                description: "Filters access by a tag on the widget",
                kind: ConditionType::String,
            },
            ConditionKeyInfo {
                name: "widgets:Size",
                description: "Filters access by widget size",
                kind: ConditionType::Numeric,
            },
        ],
    };

    #[test_log::test]
    fn test_lookups() {
        assert_eq!(WIDGETS.action("createwidget").unwrap().name, "CreateWidget");
        assert!(WIDGETS.action("DeleteWidget").is_none());
        assert_eq!(WIDGETS.action("CreateWidget").unwrap().resource_types[0], ResourceRequirement::required("widget"));
        assert!(!WIDGETS.action("DescribeWidget").unwrap().resource_types[0].required);
        assert_eq!(WIDGETS.action("TagWidget").unwrap().dependent_actions, &["widgets:DescribeWidget"]);
        assert_eq!(WIDGETS.resource_type("widget").unwrap().condition_keys.len(), 1);
        assert!(WIDGETS.resource_type("gadget").is_none());
    }

    #[test_log::test]
    fn test_condition_keys() {
        assert_eq!(WIDGETS.condition_key("widgets:color").unwrap().name, "widgets:Color");
        assert_eq!(WIDGETS.condition_key("widgets:ResourceTag/team").unwrap().name, "widgets:ResourceTag/${TagKey}");
        assert!(WIDGETS.condition_key("widgets:ResourceTag/").is_none());
        assert!(WIDGETS.condition_key("widgets:Weight").is_none());
        assert_eq!(WIDGETS.condition_key("widgets:Size").unwrap().kind.default_operator(), condop::NumericEquals);
    }

    #[test_log::test]
    fn test_urls() {
        assert_eq!(
            WIDGETS.action_url("CreateWidget").unwrap(),
            "https://docs.example.com/widgets/API_CreateWidget.html"
        );
        assert_eq!(WIDGETS.action_url("ListWidgets").unwrap(), "https://docs.example.com/widgets/listing.html");
        assert_eq!(WIDGETS.action_url("Nope"), None);
    }

    #[test_log::test]
    fn test_access_levels() {
        assert_eq!(WIDGETS.actions_at(AccessLevel::Write), vec!["CreateWidget"]);
        assert!(WIDGETS.actions_at(AccessLevel::PermissionsManagement).is_empty());

        let levels = WIDGETS.access_level_list();
        assert_eq!(levels.len(), 4);
        assert_eq!(levels[&AccessLevel::Tagging], vec!["TagWidget"]);
        assert!(!levels.contains_key(&AccessLevel::PermissionsManagement));
        assert_eq!(AccessLevel::PermissionsManagement.to_string(), "Permissions management");
        assert_eq!(AccessLevel::ALL.len(), 5);
    }

    #[test_log::test]
    fn test_matching() {
        let re = Regex::new("^(Create|Describe)").unwrap();
        assert_eq!(WIDGETS.matching_actions(&re), vec!["CreateWidget", "DescribeWidget"]);
        assert_eq!(WIDGETS.matching_actions(&Regex::new("Gadget").unwrap()), Vec::<&str>::new());
    }

    #[test_log::test]
    fn test_default_operators() {
        assert_eq!(ConditionType::ArrayOfString.default_operator(), condop::StringLike);
        assert_eq!(ConditionType::Date.default_operator(), condop::DateEquals);
        assert_eq!(ConditionType::Bool.default_operator(), condop::Bool);
        assert_eq!(ConditionType::ArrayOfArn.default_operator(), condop::ArnLike);
        assert_eq!(ConditionType::IpAddress.default_operator(), condop::IpAddress);
        assert_eq!(ConditionType::Binary.default_operator(), condop::BinaryEquals);
    }
}
