//! Policies compiled into the binary

use chrono::{TimeZone, Utc};
use inkwell_domain::Policy;
use once_cell::sync::Lazy;

/// Builtin policy history, oldest first.
pub(crate) static BUILTIN_POLICIES: Lazy<Vec<Policy>> = Lazy::new(|| {
    vec![
        Policy::new(
            "1.0",
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            "Writers must submit original work. Content is checked against the \
             writer's onboarding baseline and against published sources.",
            rules(&[
                "All submitted content must be original",
                "External sources must be cited",
                "Onboarding samples must be written by the applicant",
            ]),
        ),
        Policy::new(
            "1.1",
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            "Adds disclosure requirements for assisted writing tools.",
            rules(&[
                "All submitted content must be original",
                "External sources must be cited",
                "Onboarding samples must be written by the applicant",
                "Use of AI writing assistance must be disclosed",
            ]),
        ),
        Policy::new(
            "2.0",
            Utc.with_ymd_and_hms(2025, 2, 10, 0, 0, 0).unwrap(),
            "Integrity checks compare every submission with the writer's \
             baseline. Significant stylistic drift is routed to an editor.",
            rules(&[
                "All submitted content must be original",
                "External sources must be cited",
                "Onboarding samples must be written by the applicant",
                "Use of AI writing assistance must be disclosed",
                "Submissions drifting from the writer's baseline require editorial review",
            ]),
        ),
    ]
});

fn rules(items: &[&str]) -> Vec<String> {
    items.iter().map(|r| r.to_string()).collect()
}
