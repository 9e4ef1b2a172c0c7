//! Policy command implementation.

use crate::cli::{PolicyAction, PolicyArgs};
use crate::error::Result;
use crate::output::Formatter;
use inkwell_policy::PolicyStore;

/// Execute the policy command.
pub fn execute_policy(args: &PolicyArgs, store: &PolicyStore, formatter: &Formatter) -> Result<String> {
    match &args.action {
        PolicyAction::Current => formatter.format_policy(store.current_policy()),
        // An unknown version is an empty result, not a failure
        PolicyAction::Show { version } => match store.get_policy_by_version(version) {
            Some(policy) => formatter.format_policy(policy),
            None => formatter.format_missing_policy(version),
        },
        PolicyAction::List => {
            formatter.format_policies(store.policies(), &store.current_policy().version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn run(action: PolicyAction, format: OutputFormat) -> Result<String> {
        let formatter = Formatter::new(format, false);
        execute_policy(&PolicyArgs { action }, &PolicyStore::builtin(), &formatter)
    }

    #[test]
    fn test_current() {
        let output = run(PolicyAction::Current, OutputFormat::Table).unwrap();
        assert!(output.starts_with("Policy 2.0"));
    }

    #[test]
    fn test_show_existing_version() {
        let output = run(
            PolicyAction::Show {
                version: "1.0".to_string(),
            },
            OutputFormat::Json,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["version"], "1.0");
        assert!(json["lastUpdated"].is_string());
    }

    #[test]
    fn test_show_unknown_version() {
        let table = run(
            PolicyAction::Show {
                version: "9.9".to_string(),
            },
            OutputFormat::Table,
        )
        .unwrap();
        assert_eq!(table, "No policy with version '9.9'.");

        let json = run(
            PolicyAction::Show {
                version: "9.9".to_string(),
            },
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_list() {
        let output = run(PolicyAction::List, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
    }
}
