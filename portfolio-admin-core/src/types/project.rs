//! 公开项目类型定义

use serde_json::Value;

/// Item of `portfolio/public-projects`. The endpoint returns a bare array of
/// objects whose shape the console does not own.
pub type PublicProject = Value;

/// Display label of a project: its `name`, else `title`, else the raw JSON.
#[must_use]
pub fn project_label(project: &PublicProject) -> String {
    ["name", "title"]
        .iter()
        .find_map(|key| project.get(key).and_then(Value::as_str))
        .map_or_else(|| project.to_string(), str::to_string)
}
