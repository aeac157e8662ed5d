//! Executor (ledger namespace) name checks for balance queries.

pub const MAX_EXEC_NAME_LENGTH: usize = 100;

/// Namespace prefix for user-defined executors.
pub const USER_EXEC_PREFIX: &str = "user.";

/// Built-in executors a balance may be queried under.
pub const ALLOW_USER_EXEC: &[&str] = &[
    "coins", "ticket", "hashlock", "retrieve", "none", "token", "trade", "manage", "norm",
];

/// Syntax rule for user-defined executor names.
pub fn is_user_exec_name(name: &str) -> bool {
    name.starts_with(USER_EXEC_PREFIX)
}

pub fn is_allowed(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_EXEC_NAME_LENGTH {
        return false;
    }
    if name.contains('-') || name.contains('#') {
        return false;
    }
    is_user_exec_name(name) || ALLOW_USER_EXEC.contains(&name)
}

/// Help line for the `--exec` flag.
pub fn exec_flag_help() -> String {
    let names: Vec<String> = ALLOW_USER_EXEC
        .iter()
        .map(|name| format!("\"{}\"", name))
        .collect();
    format!(
        "executer name (only {} and user-defined type supported)",
        names.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_allowed() {
        for name in ALLOW_USER_EXEC {
            assert!(is_allowed(name), "{} should be allowed", name);
        }
    }

    #[test]
    fn test_user_defined_names() {
        assert!(is_allowed("user.evm"));
        assert!(is_allowed("user.my.token"));
        // the prefix alone is enough
        assert!(is_allowed("user."));
        assert!(!is_allowed("users.evm"));
    }

    #[test]
    fn test_rejected_names() {
        assert!(!is_allowed(""));
        assert!(!is_allowed("paracross"));
        assert!(!is_allowed("user.a-b"));
        assert!(!is_allowed("user.a#b"));
        assert!(!is_allowed(&format!("user.{}", "x".repeat(MAX_EXEC_NAME_LENGTH))));
    }

    #[test]
    fn test_help_lists_every_builtin() {
        let help = exec_flag_help();
        for name in ALLOW_USER_EXEC {
            assert!(help.contains(&format!("\"{}\"", name)));
        }
    }
}
