use switchboard_shared::ContainerRecord;

pub const WORKING_DIR_LABEL: &str = "com.docker.compose.project.working_dir";

/// Derive the logical service name for a container.
///
/// A compose project is named after the last segment of its working
/// directory, which is what the configuration refers to. Containers started
/// outside compose fall back to their own name.
pub fn resolve(record: &ContainerRecord) -> String {
    if let Some(name) = record
        .labels
        .get(WORKING_DIR_LABEL)
        .and_then(project_dir_name)
    {
        return name.to_string();
    }

    record
        .names
        .strip_prefix('/')
        .unwrap_or(&record.names)
        .to_string()
}

fn project_dir_name(working_dir: &str) -> Option<&str> {
    let trimmed = working_dir.strip_suffix('/').unwrap_or(working_dir);
    if trimmed.is_empty() {
        return None;
    }
    trimmed.rsplit('/').next().filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchboard_shared::Labels;

    fn record(names: &str, labels: &str) -> ContainerRecord {
        ContainerRecord {
            names: names.to_string(),
            labels: Labels::parse_text(labels),
            ..Default::default()
        }
    }

    #[test]
    fn uses_working_dir_label() {
        let container = record(
            "/some-container-name",
            "com.docker.compose.config-hash=abc123,com.docker.compose.project.working_dir=/path/to/repo/github-dispatcher,com.docker.compose.service=github-dispatcher",
        );
        assert_eq!(resolve(&container), "github-dispatcher");
    }

    #[test]
    fn strips_trailing_separator_from_working_dir() {
        let container = record(
            "/another-name",
            "com.docker.compose.project.working_dir=/path/to/repo/RediFire/",
        );
        assert_eq!(resolve(&container), "RediFire");
    }

    #[test]
    fn falls_back_to_name_without_label() {
        assert_eq!(resolve(&record("/github-dispatcher", "")), "github-dispatcher");
        assert_eq!(
            resolve(&record("/RediFire", "com.docker.compose.service=RediFire")),
            "RediFire"
        );
    }

    #[test]
    fn empty_working_dir_falls_back() {
        let container = record("/api", "com.docker.compose.project.working_dir=");
        assert_eq!(resolve(&container), "api");
    }

    #[test]
    fn single_segment_working_dir() {
        let container = record(
            "/container",
            "com.docker.compose.project.working_dir=/service-name",
        );
        assert_eq!(resolve(&container), "service-name");
    }

    #[test]
    fn root_working_dir_falls_back_to_name() {
        let container = record("/my-container", "com.docker.compose.project.working_dir=/");
        assert_eq!(resolve(&container), "my-container");
    }

    #[test]
    fn name_without_leading_separator_is_kept() {
        assert_eq!(resolve(&record("my-service", "")), "my-service");
    }

    #[test]
    fn only_one_leading_separator_is_stripped() {
        assert_eq!(resolve(&record("//odd", "")), "/odd");
    }

    #[test]
    fn label_wins_and_preserves_case() {
        let container = ContainerRecord {
            names: "innergate-innergate-1".to_string(),
            labels: [(WORKING_DIR_LABEL, "/repo/InnerGate")].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(resolve(&container), "InnerGate");
    }

    #[test]
    fn real_compose_labels() {
        let container = record(
            "innergate-innergate-1",
            "com.docker.compose.config-hash=4c5fb3dc43516abe85b37034d9be65a18e197be190ca7bdd320a6eff010a2a00,com.docker.compose.container-number=1,com.docker.compose.depends_on=,com.docker.compose.oneoff=False,com.docker.compose.project.config_files=/path/to/repo/InnerGate/docker-compose.yml,com.docker.compose.project.working_dir=/path/to/repo/InnerGate,com.docker.compose.project=innergate,com.docker.compose.service=innergate,com.docker.compose.version=5.0.2",
        );
        assert_eq!(resolve(&container), "InnerGate");
    }

    #[test]
    fn comma_in_working_dir_matches_object_form() {
        let from_text = record(
            "/x",
            "com.docker.compose.project.working_dir=/srv/a,b,com.docker.compose.service=web",
        );
        let from_map = ContainerRecord {
            names: "/x".to_string(),
            labels: [(WORKING_DIR_LABEL, "/srv/a,b")].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(resolve(&from_text), "a,b");
        assert_eq!(resolve(&from_map), "a,b");
    }

    #[test]
    fn degenerate_record_resolves_to_empty() {
        assert_eq!(resolve(&ContainerRecord::default()), "");
    }
}
