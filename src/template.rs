//! `${Name}` placeholder handling for ARN templates.

use crate::BuilderError;

enum Piece<'a> {
    Text(char),
    Placeholder(&'a str),
}

fn scan<'a>(template: &'a str) -> Result<Vec<Piece<'a>>, BuilderError> {
    let mut pieces = Vec::new();
    let mut i = template.char_indices();

    while let Some((_, c)) = i.next() {
        if c != '$' {
            pieces.push(Piece::Text(c));
            continue;
        }

        let (start, c) = i.next().ok_or_else(|| BuilderError::InvalidSubstitution(template.to_string()))?;
        if c != '{' {
            return Err(BuilderError::InvalidSubstitution(template.to_string()));
        }

        let name_start = start + 1;
        loop {
            let (pos, c) = i.next().ok_or_else(|| BuilderError::InvalidSubstitution(template.to_string()))?;
            if c == '}' {
                pieces.push(Piece::Placeholder(&template[name_start..pos]));
                break;
            }
        }
    }

    Ok(pieces)
}

/// The placeholder names in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Result<Vec<&str>, BuilderError> {
    Ok(scan(template)?
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Placeholder(name) => Some(name),
            Piece::Text(_) => None,
        })
        .collect())
}

/// Replace every placeholder in `template` with the value `lookup` returns for it.
pub fn render<F>(template: &str, mut lookup: F) -> Result<String, BuilderError>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut result = String::with_capacity(template.len());

    for piece in scan(template)? {
        match piece {
            Piece::Text(c) => result.push(c),
            Piece::Placeholder(name) => match lookup(name) {
                Some(value) => result.push_str(&value),
                None => {
                    log::debug!("No value for placeholder {} in {}", name, template);
                    return Err(BuilderError::MissingPlaceholder(name.to_string()));
                }
            },
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use {
        super::{placeholders, render},
        crate::BuilderError,
        pretty_assertions::assert_eq,
    };

    const BUCKET: &str = "arn:${Partition}:s3:::${BucketName}";
    const LISTENER: &str =
        "arn:${Partition}:globalaccelerator::${Account}:accelerator/${AcceleratorId}/listener/${ListenerId}";

    #[test_log::test]
    fn test_placeholders() {
        assert_eq!(placeholders(BUCKET).unwrap(), vec!["Partition", "BucketName"]);
        assert_eq!(placeholders(LISTENER).unwrap(), vec!["Partition", "Account", "AcceleratorId", "ListenerId"]);
        assert_eq!(placeholders("arn:aws:s3:::fixed").unwrap(), Vec::<&str>::new());
    }

    #[test_log::test]
    fn test_render() {
        let arn = render(LISTENER, |name| match name {
            "Partition" => Some("aws".to_string()),
            "Account" => Some("123456789012".to_string()),
            "AcceleratorId" => Some("abcd".to_string()),
            "ListenerId" => Some("0123".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(arn, "arn:aws:globalaccelerator::123456789012:accelerator/abcd/listener/0123");
    }

    #[test_log::test]
    fn test_errors() {
        assert_eq!(
            render(BUCKET, |name| (name == "Partition").then(|| "aws".to_string())).unwrap_err(),
            BuilderError::MissingPlaceholder("BucketName".to_string())
        );
        assert_eq!(
            placeholders("arn:${Partition").unwrap_err(),
            BuilderError::InvalidSubstitution("arn:${Partition".to_string())
        );
        assert_eq!(
            placeholders("arn:$Partition").unwrap_err().to_string(),
            "Invalid variable substitution: arn:$Partition"
        );
        assert!(placeholders("arn:aws:s3:::bucket$").is_err());
    }
}
