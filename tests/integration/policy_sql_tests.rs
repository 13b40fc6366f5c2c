//! RLS policy SQL integration tests

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_statements_terminated;
    use lab_access::config::GeneratorConfig;
    use lab_access::storage::rls::*;

    /// The documented users_own_profile statement, byte for byte
    #[test]
    fn test_users_own_profile_statement() {
        let policy = policies()
            .iter()
            .find(|p| p.name == "users_own_profile")
            .unwrap();

        assert_eq!(
            generate_policy_sql(policy).trim(),
            "CREATE POLICY \"users_own_profile\" ON \"users\"\nFOR SELECT\nUSING (auth.uid() = user_id);"
        );
    }

    /// Every CREATE statement has the three-line shape
    #[test]
    fn test_statement_shape() {
        for policy in policies() {
            let sql = generate_policy_sql(policy);
            let lines: Vec<&str> = sql.lines().collect();
            assert_eq!(lines.len(), 3, "{}", policy.name);
            assert_eq!(
                lines[0],
                format!("CREATE POLICY \"{}\" ON \"{}\"", policy.name, policy.table)
            );
            assert_eq!(lines[1], format!("FOR {}", policy.action));
            assert_eq!(lines[2], format!("USING ({});", policy.expression));
        }
    }

    /// One ALTER TABLE per distinct table, matching the catalog order
    #[test]
    fn test_enable_rls_matches_tables() {
        let expected: Vec<String> = policy_tables()
            .into_iter()
            .map(|table| format!("ALTER TABLE \"{}\" ENABLE ROW LEVEL SECURITY;", table))
            .collect();
        assert_eq!(enable_rls_sql(), expected.join("\n"));
    }

    /// Table and action filters agree with the catalog
    #[test]
    fn test_filters_partition_catalog() {
        let by_table: usize = policy_tables()
            .into_iter()
            .map(|table| get_policies_by_table(table).len())
            .sum();
        assert_eq!(by_table, policies().len());

        let selects = get_policies_by_action(PolicyAction::Select);
        assert_eq!(selects.len(), 10);
        assert!(selects.iter().all(|p| p.action == PolicyAction::Select));
    }

    /// Migration statements are terminated and sections follow configuration
    #[test]
    fn test_migration_script() {
        let sql = render_migration(policies(), &GeneratorConfig::default());
        assert_statements_terminated(&sql);
        assert_eq!(sql.matches("DROP POLICY IF EXISTS").count(), 27);
        assert_eq!(sql.matches("ENABLE ROW LEVEL SECURITY").count(), 9);
        assert_eq!(sql.matches("CREATE POLICY").count(), 27);

        let filtered = GeneratorConfig {
            include_drop: false,
            tables: vec!["inventaris".to_string(), "users".to_string()],
            ..GeneratorConfig::default()
        };
        let sql = render_migration(policies(), &filtered);
        assert!(!sql.contains("DROP POLICY"));
        assert_eq!(sql.matches("ENABLE ROW LEVEL SECURITY").count(), 2);
        assert_eq!(sql.matches("CREATE POLICY").count(), 7);
        // catalog order, not filter order
        assert!(sql.find("\"users\" ENABLE").unwrap() < sql.find("\"inventaris\" ENABLE").unwrap());
    }

    /// Builder-made policies render like catalog ones
    #[test]
    fn test_custom_policy_rendering() {
        let policy = Policy::builder("notifikasi", "notifikasi_own", PolicyAction::Select)
            .using(PolicyExpression::ADMIN_ALL)
            .using(PolicyExpression::OWN_RECORDS)
            .description("Users can view their own notifications")
            .build()
            .unwrap();

        assert_eq!(
            generate_policy_sql(&policy),
            "CREATE POLICY \"notifikasi_own\" ON \"notifikasi\"\nFOR SELECT\n\
             USING (auth.jwt() ->> 'role' = 'admin' OR auth.uid() = user_id);"
        );
        assert_eq!(
            drop_policies_sql([&policy]),
            "DROP POLICY IF EXISTS \"notifikasi_own\" ON \"notifikasi\";"
        );
    }
}
