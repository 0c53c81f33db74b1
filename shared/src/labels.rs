use serde::Deserialize;
use std::collections::HashMap;

/// Label set attached to a container.
///
/// The runtime feed is not consistent about the encoding: the engine API hands
/// out a JSON object, while `docker ps --format json` flattens the labels into a
/// single `key=value,key=value` string. Both forms deserialize into the same map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Labels {
    inner: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabels {
    Map(HashMap<String, String>),
    Text(String),
}

impl<'de> Deserialize<'de> for Labels {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let labels = match Option::<RawLabels>::deserialize(deserializer)? {
            Some(RawLabels::Map(inner)) => Self { inner },
            Some(RawLabels::Text(text)) => Self::parse_text(&text),
            None => Self::default(),
        };
        Ok(labels)
    }
}

impl Labels {
    /// Parse the comma-separated CLI form. The value is everything after the
    /// first `=`.
    ///
    /// The CLI joins entries with `,` without escaping, so a piece with no `=`
    /// is taken as the tail of the previous value (`dir=/srv/a,b` keeps
    /// `/srv/a,b`). A value that itself contains `,key=...` still cannot be
    /// told apart from a new entry; the object form has no such limit.
    pub fn parse_text(text: &str) -> Self {
        let mut inner = HashMap::new();
        let mut last_key: Option<String> = None;

        for piece in text.split(',') {
            match piece.split_once('=') {
                Some((key, value)) => {
                    inner.insert(key.to_string(), value.to_string());
                    last_key = Some(key.to_string());
                }
                None => match last_key.as_ref().and_then(|key| inner.get_mut(key)) {
                    Some(value) => {
                        value.push(',');
                        value.push_str(piece);
                    }
                    None if !piece.is_empty() => {
                        inner.insert(piece.to_string(), String::new());
                    }
                    None => {}
                },
            }
        }
        Self { inner }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Labels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_object_form() {
        let labels: Labels = serde_json::from_str(
            r#"{"com.docker.compose.project.working_dir": "/srv/app", "tier": "web"}"#,
        )
        .unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("com.docker.compose.project.working_dir"), Some("/srv/app"));
        assert_eq!(labels.get("tier"), Some("web"));
    }

    #[test]
    fn deserializes_cli_string_form() {
        let labels: Labels = serde_json::from_str(
            r#""com.docker.compose.config-hash=abc123,com.docker.compose.project.working_dir=/path/to/repo/github-dispatcher,com.docker.compose.service=github-dispatcher""#,
        )
        .unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(
            labels.get("com.docker.compose.project.working_dir"),
            Some("/path/to/repo/github-dispatcher")
        );
        assert_eq!(labels.get("com.docker.compose.config-hash"), Some("abc123"));
    }

    #[test]
    fn null_and_empty_string_are_empty() {
        let from_null: Labels = serde_json::from_str("null").unwrap();
        let from_empty: Labels = serde_json::from_str(r#""""#).unwrap();
        assert!(from_null.is_empty());
        assert!(from_empty.is_empty());
    }

    #[test]
    fn text_form_keeps_everything_after_first_equals() {
        let labels = Labels::parse_text("a=b=c,com.docker.compose.depends_on=");
        assert_eq!(labels.get("a"), Some("b=c"));
        assert_eq!(labels.get("com.docker.compose.depends_on"), Some(""));
    }

    #[test]
    fn text_form_keeps_commas_inside_values() {
        let labels = Labels::parse_text(
            "com.docker.compose.project.working_dir=/srv/a,b,com.docker.compose.service=web",
        );
        assert_eq!(
            labels.get("com.docker.compose.project.working_dir"),
            Some("/srv/a,b")
        );
        assert_eq!(labels.get("com.docker.compose.service"), Some("web"));
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn text_form_bare_leading_key_has_empty_value() {
        let labels = Labels::parse_text("flag,a=b");
        assert_eq!(labels.get("flag"), Some(""));
        assert_eq!(labels.get("a"), Some("b"));
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(serde_json::from_str::<Labels>("42").is_err());
        assert!(serde_json::from_str::<Labels>(r#"{"a": 1}"#).is_err());
    }
}
