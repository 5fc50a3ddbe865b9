use std::path::{Path, PathBuf};

/// Expand environment variables in a path string.
///
/// Supports `$VAR`, `${VAR}` and `~` for the home directory.
/// Unresolvable variables leave the input unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Expand `dest` and, if it is still relative, anchor it at `base`.
pub fn resolve_output_path(base: Option<&Path>, dest: &Path) -> PathBuf {
    let expanded = PathBuf::from(expand_env_vars(&dest.to_string_lossy()));
    match base {
        Some(base) if expanded.is_relative() => {
            PathBuf::from(expand_env_vars(&base.to_string_lossy())).join(expanded)
        }
        _ => expanded,
    }
}
