use {
    crate::{catalog::ServiceCatalog, services, Action},
    std::collections::{BTreeSet, HashMap},
};

/// The shortest `stem*` (at least `min_chars` long) covering `name` and nothing outside `wanted`; `name` itself when
/// no such stem exists.
fn shortest_cover(
    catalog: &ServiceCatalog,
    name: &str,
    wanted: &BTreeSet<&'static str>,
    min_chars: usize,
) -> String {
    for len in min_chars.max(1)..name.len() {
        if !name.is_char_boundary(len) {
            continue;
        }

        let stem = &name[..len];
        let mut covered = catalog.actions.iter().filter(|a| {
            a.name.len() >= len && a.name.is_char_boundary(len) && a.name[..len].eq_ignore_ascii_case(stem)
        });

        if covered.all(|a| wanted.contains(a.name)) {
            log::trace!("{}:{} compacts to {}*", catalog.prefix, name, stem);
            return format!("{stem}*");
        }
    }

    name.to_string()
}

fn compact_service(catalog: &ServiceCatalog, wanted: &BTreeSet<&'static str>, min_chars: usize) -> Vec<Action> {
    let specific = |action: String| Action::Specific {
        service: catalog.prefix.to_string(),
        action,
    };

    if wanted.len() == catalog.actions.len() {
        return vec![specific("*".to_string())];
    }

    let mut result = Vec::new();
    for info in catalog.actions.iter().filter(|a| wanted.contains(a.name)) {
        let action = specific(shortest_cover(catalog, info.name, wanted, min_chars));
        if !result.contains(&action) {
            result.push(action);
        }
    }
    result
}

/// Rewrite `actions` with wildcards that match exactly the same catalog actions.
///
/// Groups for each service replace that service's first action in the list. `*`, actions of services without a
/// complete catalog, and patterns that match nothing in their catalog are kept as written.
pub(crate) fn compact_actions(actions: Vec<Action>, min_chars: usize) -> Vec<Action> {
    let mut wanted: HashMap<&'static str, BTreeSet<&'static str>> = HashMap::new();
    let mut verbatim = vec![false; actions.len()];

    for (i, action) in actions.iter().enumerate() {
        let catalog = match action {
            Action::Any => None,
            Action::Specific {
                service,
                ..
            } => services::lookup(service),
        };

        let catalog = match catalog {
            Some(catalog) if catalog.complete => catalog,
            Some(catalog) => {
                log::trace!("{} catalog is partial; keeping {}", catalog.prefix, action);
                verbatim[i] = true;
                continue;
            }
            None => {
                verbatim[i] = true;
                continue;
            }
        };

        let matched = match action.action_regex() {
            Some(re) => catalog.matching_actions(&re),
            None => Vec::new(),
        };
        if matched.is_empty() {
            log::trace!("{} matches no catalog actions; keeping it", action);
            verbatim[i] = true;
        } else {
            wanted.entry(catalog.prefix).or_default().extend(matched);
        }
    }

    let mut result: Vec<Action> = Vec::new();
    let mut emitted = BTreeSet::new();
    for (i, action) in actions.into_iter().enumerate() {
        let group = if verbatim[i] {
            vec![action]
        } else {
            match services::lookup(action.service()) {
                Some(catalog) if emitted.insert(catalog.prefix) => {
                    compact_service(catalog, &wanted[catalog.prefix], min_chars)
                }
                _ => continue,
            }
        };

        for action in group {
            if !result.contains(&action) {
                result.push(action);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use {
        super::compact_actions,
        crate::{services::sqs::CATALOG, Action},
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    fn actions(names: &[&str]) -> Vec<Action> {
        names.iter().map(|n| Action::from_str(n).unwrap()).collect()
    }

    fn names(actions: Vec<Action>) -> Vec<String> {
        actions.iter().map(|a| a.to_string()).collect()
    }

    #[test_log::test]
    fn test_stems() {
        let result = compact_actions(actions(&["sqs:GetQueueAttributes", "sqs:GetQueueUrl"]), 3);
        assert_eq!(names(result), vec!["sqs:Get*"]);

        let result = compact_actions(actions(&["sqs:SendMessage"]), 3);
        assert_eq!(names(result), vec!["sqs:Sen*"]);

        let result = compact_actions(actions(&["sqs:DeleteMessage"]), 3);
        assert_eq!(names(result), vec!["sqs:DeleteM*"]);

        let result = compact_actions(actions(&["sqs:ListQueues"]), 3);
        assert_eq!(names(result), vec!["sqs:ListQueues"]);

        let result = compact_actions(actions(&["sqs:DeleteMessage", "sqs:DeleteQueue", "sqs:ReceiveMessage"]), 3);
        assert_eq!(names(result), vec!["sqs:Del*", "sqs:Rec*"]);
    }

    #[test_log::test]
    fn test_min_chars() {
        let result = compact_actions(actions(&["sqs:SendMessage"]), 8);
        assert_eq!(names(result), vec!["sqs:SendMess*"]);

        let result = compact_actions(actions(&["sqs:StartMessageMoveTask"]), 0);
        assert_eq!(names(result), vec!["sqs:St*"]);
    }

    #[test_log::test]
    fn test_full_service() {
        let all: Vec<String> = CATALOG.actions.iter().map(|a| format!("sqs:{}", a.name)).collect();
        let all: Vec<&str> = all.iter().map(String::as_str).collect();
        assert_eq!(names(compact_actions(actions(&all), 3)), vec!["sqs:*"]);
        assert_eq!(names(compact_actions(actions(&["sqs:*"]), 3)), vec!["sqs:*"]);
    }

    #[test_log::test]
    fn test_verbatim() {
        let input = actions(&["ec2:DescribeInstances", "sqs:ListQueues", "*", "sqs:Nope*", "sqs:ListQueueTags"]);
        let result = compact_actions(input, 3);
        assert_eq!(names(result), vec!["ec2:DescribeInstances", "sqs:ListQ*", "*", "sqs:Nope*"]);
    }

    #[test_log::test]
    fn test_partial_catalog() {
        // s3:GetObjectVersionTagging and s3:PutObjectRetention exist in IAM; a stem may not claim them.
        let result = compact_actions(actions(&["s3:GetObjectVersion", "s3:PutObject", "sqs:SendMessage"]), 3);
        assert_eq!(names(result), vec!["s3:GetObjectVersion", "s3:PutObject", "sqs:Sen*"]);

        let result = compact_actions(actions(&["s3:Get*", "s3:GetObject", "s3:*"]), 3);
        assert_eq!(names(result), vec!["s3:Get*", "s3:GetObject", "s3:*"]);
    }

    #[test_log::test]
    fn test_same_coverage() {
        let input = actions(&["sqs:Get*", "sqs:ChangeMessageVisibility", "sqs:ListQueues"]);
        let compacted = compact_actions(input.clone(), 3);

        for info in CATALOG.actions {
            let before = input.iter().any(|a| a.matches("sqs", info.name));
            let after = compacted.iter().any(|a| a.matches("sqs", info.name));
            assert_eq!(before, after, "coverage of {} changed", info.name);
        }
    }
}
