use crate::models::ProjectRecord;
use leptos::logging::warn;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub(crate) struct EnvConfig {
    pub project: ProjectRecord,
}

impl EnvConfig {
    /// Reads `window.ENV.PROJECT`, either a plain object or a JSON string.
    ///
    /// Falls back to the demo project when it is missing or invalid.
    pub fn new() -> Self {
        match read_env_project() {
            Some(Ok(project)) => Self { project },
            Some(Err(e)) => {
                warn!("ignoring window.ENV.PROJECT: {e}");
                Self::default_project()
            }
            None => Self::default_project(),
        }
    }

    fn default_project() -> Self {
        Self {
            project: ProjectRecord::demo(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env_project() -> Option<Result<ProjectRecord, String>> {
    let window = web_sys::window()?;
    let env = window.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }

    let value = js_sys::Reflect::get(&env, &"PROJECT".into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }

    let json = match value.as_string() {
        Some(s) => s,
        None => match js_sys::JSON::stringify(&value) {
            Ok(s) => String::from(s),
            Err(_) => return Some(Err("PROJECT is not serializable".to_string())),
        },
    };

    Some(parse_project_record(&json))
}

/// Parses and validates a project record.
///
/// Page names must be non-blank and unique within the project: renaming
/// relies on a name identifying exactly one page.
pub(crate) fn parse_project_record(json: &str) -> Result<ProjectRecord, String> {
    let record: ProjectRecord = serde_json::from_str(json).map_err(|e| e.to_string())?;

    let mut seen = HashSet::new();
    for page in &record.pages {
        if page.name.trim().is_empty() {
            return Err("Page name must not be empty".to_string());
        }
        if !seen.insert(page.name.as_str()) {
            return Err(format!("Duplicate page name: {}", page.name));
        }
    }

    Ok(record)
}
