mod cmp;
#[allow(non_upper_case_globals)]
pub mod op;
mod operator;
mod value;
mod variant;

pub use {
    cmp::{ArnCmp, DateCmp, NumericCmp, StringCmp},
    op::ConditionOp,
    operator::{Operator, SetQualifier},
    value::ConditionValues,
    variant::Variant,
};

use {
    crate::serutil::StringLikeList,
    serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        borrow::Borrow,
        collections::{
            btree_map::{Entry, IntoIter, Iter, Keys, Values},
            BTreeMap,
        },
        iter::FromIterator,
        ops::Index,
    },
};

/// Condition keys and their values under a single operator.
pub type ConditionMap = BTreeMap<String, StringLikeList<String>>;

/// The `Condition` block of a statement: operators mapped to the keys they test.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Condition {
    map: BTreeMap<Operator, ConditionMap>,
}

display_json!(Condition);
from_str_json!(Condition);

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::deserialize(deserializer)?;

        Ok(Self {
            map,
        })
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

impl Condition {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values tested for `key` under `operator`. Values previously set for the same operator and key are
    /// replaced.
    pub fn add<K: Into<String>, V: Into<ConditionValues>>(&mut self, operator: Operator, key: K, values: V) {
        let key = key.into();
        let values = values.into().into_inner();
        if let Some(old) = self.map.entry(operator).or_default().insert(key.clone(), values) {
            log::debug!("Condition {operator} {key} replaced previous value {old}");
        }
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Operator: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    #[inline]
    pub fn entry(&mut self, key: Operator) -> Entry<'_, Operator, ConditionMap> {
        self.map.entry(key)
    }

    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&ConditionMap>
    where
        Operator: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get(key)
    }

    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut ConditionMap>
    where
        Operator: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get_mut(key)
    }

    #[inline]
    pub fn insert(&mut self, key: Operator, value: ConditionMap) -> Option<ConditionMap> {
        self.map.insert(key, value)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Operator, ConditionMap> {
        self.map.iter()
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, Operator, ConditionMap> {
        self.map.keys()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<ConditionMap>
    where
        Operator: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.remove(key)
    }

    #[inline]
    pub fn values(&self) -> Values<'_, Operator, ConditionMap> {
        self.map.values()
    }
}

impl<const N: usize> From<[(Operator, ConditionMap); N]> for Condition {
    #[inline]
    fn from(array: [(Operator, ConditionMap); N]) -> Self {
        Condition {
            map: BTreeMap::from(array),
        }
    }
}

impl FromIterator<(Operator, ConditionMap)> for Condition {
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Operator, ConditionMap)>,
    {
        Condition {
            map: BTreeMap::from_iter(iter),
        }
    }
}

impl<Q> Index<&Q> for Condition
where
    Operator: Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = ConditionMap;

    fn index(&self, key: &Q) -> &ConditionMap {
        self.map.index(key)
    }
}

impl<'a> IntoIterator for &'a Condition {
    type Item = (&'a Operator, &'a ConditionMap);
    type IntoIter = Iter<'a, Operator, ConditionMap>;
    fn into_iter(self) -> Iter<'a, Operator, ConditionMap> {
        self.map.iter()
    }
}

impl IntoIterator for Condition {
    type Item = (Operator, ConditionMap);
    type IntoIter = IntoIter<Operator, ConditionMap>;
    fn into_iter(self) -> IntoIter<Operator, ConditionMap> {
        self.map.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{condop, serutil::StringLikeList, Condition, ConditionMap, Operator},
        indoc::indoc,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_add_and_replace() {
        let mut c = Condition::new();
        assert!(c.is_empty());

        let eq = Operator::new(condop::StringEquals);
        c.add(eq, "aws:PrincipalTag/team", "blue");
        c.add(eq, "s3:prefix", vec!["home/", "docs/"]);
        c.add(Operator::new(condop::Bool), "aws:SecureTransport", true);
        assert_eq!(c.len(), 2);
        assert_eq!(c[&eq].len(), 2);

        c.add(eq, "aws:PrincipalTag/team", "red");
        assert_eq!(c[&eq]["aws:PrincipalTag/team"], StringLikeList::Single("red".to_string()));
        assert!(c.contains_key(&Operator::new(condop::Bool)));
        assert!(!c.contains_key(&Operator::new(condop::Null)));

        assert_eq!(
            c.to_string(),
            indoc! { r#"
            {
                "Bool": {
                    "aws:SecureTransport": "true"
                },
                "StringEquals": {
                    "aws:PrincipalTag/team": "red",
                    "s3:prefix": [
                        "home/",
                        "docs/"
                    ]
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_parse() {
        let c = Condition::from_str(indoc! { r#"
            {
                "ForAnyValue:StringLikeIfExists": {"aws:TagKeys": ["env", "team"]},
                "NumericLessThan": {"s3:max-keys": 10}
            }"# })
        .unwrap();

        let any = Operator::new(condop::StringLike).if_exists().for_any_value();
        assert_eq!(c.keys().collect::<Vec<_>>(), vec![&Operator::new(condop::NumericLessThan), &any]);
        assert_eq!(c[&Operator::new(condop::NumericLessThan)]["s3:max-keys"], StringLikeList::Single("10".to_string()));

        let e = Condition::from_str(r#"{"StringKindaEquals": {"a": "b"}}"#).unwrap_err();
        assert!(e.to_string().starts_with("Invalid condition operator: StringKindaEquals"));
    }

    #[test_log::test]
    fn test_map_operations() {
        let mut cmap = ConditionMap::new();
        cmap.insert("sts:ExternalId".to_string(), StringLikeList::Single("abc".to_string()));
        let eq = Operator::new(condop::StringEquals);

        let mut c = Condition::from([(eq, cmap.clone())]);
        assert_eq!(c.get(&eq), Some(&cmap));
        c.get_mut(&eq).unwrap().clear();
        assert!(c[&eq].is_empty());
        c.entry(eq).or_default().insert("k".to_string(), StringLikeList::Single("v".to_string()));
        assert_eq!(c.values().next().unwrap().len(), 1);
        assert_eq!(c.insert(eq, cmap.clone()).unwrap().len(), 1);
        assert_eq!(c.iter().count(), 1);
        assert_eq!((&c).into_iter().count(), 1);

        let collected: Condition = c.clone().into_iter().collect();
        assert_eq!(collected, c);
        assert_eq!(c.remove(&eq), Some(cmap));
        assert!(c.remove(&eq).is_none());
    }
}
