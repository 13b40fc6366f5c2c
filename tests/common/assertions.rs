//! Custom test assertions

use lab_access::GuardResult;

/// Assertions for GuardResult
pub trait GuardAssertions {
    fn assert_allowed(&self);

    /// Assert a denial whose reason contains `fragment`
    fn assert_denied_with(&self, fragment: &str);
}

impl GuardAssertions for GuardResult {
    fn assert_allowed(&self) {
        assert!(
            self.allowed,
            "Expected guard to allow, denied with: {:?}",
            self.reason
        );
        assert!(self.reason.is_none(), "Allowed result carries a reason");
    }

    fn assert_denied_with(&self, fragment: &str) {
        assert!(!self.allowed, "Expected guard to deny");
        let reason = self.reason.as_deref().unwrap_or_default();
        assert!(
            reason.contains(fragment),
            "Denial reason {:?} does not contain {:?}",
            reason,
            fragment
        );
    }
}

/// Assert every non-empty line of `sql` ends with a semicolon
pub fn assert_statements_terminated(sql: &str) {
    for line in sql.lines().filter(|line| !line.trim().is_empty()) {
        if line.starts_with("--") || line.starts_with("CREATE POLICY") || line.starts_with("FOR ") {
            continue;
        }
        assert!(line.ends_with(';'), "Unterminated statement line: {}", line);
    }
}
