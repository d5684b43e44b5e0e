//! Exercises the `tsql` facade against the literal fixtures and testable
//! properties spec'd for the QL front-end: concrete scenarios, determinism,
//! multi-statement input, case folding, precedence/associativity, and the
//! exact error-message catalog.

use tsql::ast::{
    BinaryOperator, Dimension, Duration, Expr, Field, GrantStatement, Privilege, SelectStatement,
    Source, Statement, Target,
};
use tsql::parser::Parser;

fn parse(input: &str) -> Statement {
    Parser::new(input).parse_statement().unwrap()
}

fn parse_err(input: &str) -> String {
    Parser::new(input).parse_statement().unwrap_err().to_string()
}

#[test]
fn select_star_from_measurement() {
    match parse("SELECT * FROM myseries") {
        Statement::Select(SelectStatement { fields, source, .. }) => {
            assert_eq!(fields, vec![Field { expr: Expr::Wildcard, alias: None }]);
            assert_eq!(source, Source::Measurement("myseries".into()));
        }
        other => panic!("expected a SELECT statement, got {:?}", other),
    }
}

#[test]
fn select_with_alias_filter_group_sort_limit_offset() {
    let stmt = parse(
        "SELECT field1, field2, field3 AS field_x FROM myseries \
         WHERE host = 'hosta.influxdb.org' GROUP BY 10h ORDER BY ASC LIMIT 20 OFFSET 10;",
    );
    match stmt {
        Statement::Select(select) => {
            assert_eq!(select.fields.len(), 3);
            assert_eq!(select.fields[2].alias.as_deref(), Some("field_x"));
            match &select.condition {
                Some(Expr::Binary { op: BinaryOperator::Equal, left, right }) => {
                    assert_eq!(**left, Expr::VarRef("host".into()));
                    assert_eq!(**right, Expr::String("hosta.influxdb.org".into()));
                }
                other => panic!("expected an equality condition, got {:?}", other),
            }
            assert_eq!(
                select.dimensions,
                vec![Dimension { expr: Expr::Duration(Duration::from_micros(36_000_000_000)) }]
            );
            assert_eq!(select.sort_fields.len(), 1);
            assert_eq!(select.sort_fields[0].name, None);
            assert!(select.sort_fields[0].ascending);
            assert_eq!(select.limit, 20);
            assert_eq!(select.offset, 10);
        }
        other => panic!("expected a SELECT statement, got {:?}", other),
    }
}

#[test]
fn create_retention_policy() {
    match parse("CREATE RETENTION POLICY policy1 ON testdb DURATION 1h REPLICATION 2") {
        Statement::CreateRetentionPolicy(stmt) => {
            assert_eq!(stmt.name, "policy1");
            assert_eq!(stmt.database, "testdb");
            assert_eq!(stmt.duration, Duration::from_micros(3_600_000_000));
            assert_eq!(stmt.replication, 2);
            assert!(!stmt.default);
        }
        other => panic!("expected CREATE RETENTION POLICY, got {:?}", other),
    }
}

#[test]
fn alter_retention_policy_options_are_order_independent() {
    let a = parse("ALTER RETENTION POLICY policy1 ON testdb DEFAULT REPLICATION 4 DURATION 1m");
    let b = parse("ALTER RETENTION POLICY policy1 ON testdb DURATION 1m REPLICATION 4 DEFAULT");
    assert_eq!(a, b);
    match a {
        Statement::AlterRetentionPolicy(stmt) => {
            assert_eq!(stmt.duration, Some(Duration::from_micros(60_000_000)));
            assert_eq!(stmt.replication, Some(4));
            assert!(stmt.default);
        }
        other => panic!("expected ALTER RETENTION POLICY, got {:?}", other),
    }
}

#[test]
fn bare_select_reports_eof_with_position() {
    assert_eq!(
        parse_err("SELECT "),
        "found EOF, expected identifier, string, number, bool at line 1, char 8"
    );
}

#[test]
fn fractional_limit_is_rejected_with_position() {
    assert_eq!(
        parse_err("SELECT field1 FROM myseries LIMIT 10.5"),
        "fractional parts not allowed in LIMIT at line 1, char 35"
    );
}

#[test]
fn zero_limit_and_offset_are_rejected() {
    assert_eq!(
        parse_err("SELECT * FROM a LIMIT 0"),
        "LIMIT must be > 0 at line 1, char 23"
    );
    assert_eq!(
        parse_err("SELECT * FROM a OFFSET 0"),
        "OFFSET must be > 0 at line 1, char 24"
    );
}

#[test]
fn grant_all_privileges_cluster_wide() {
    match parse("GRANT ALL PRIVILEGES TO jdoe") {
        Statement::Grant(GrantStatement { privilege, on, user }) => {
            assert_eq!(privilege, Privilege::All);
            assert_eq!(on, None);
            assert_eq!(user, "jdoe");
        }
        other => panic!("expected GRANT, got {:?}", other),
    }
}

#[test]
fn time_literal_from_expr() {
    let expr = Parser::new("'2000-01-01 00:00:00.232'").parse_expr().unwrap();
    assert!(matches!(expr, Expr::Time(_)));
}

#[test]
fn empty_input_yields_empty_query() {
    let query = Parser::new("").parse_query().unwrap();
    assert_eq!(query.statements.len(), 0);
}

#[test]
fn semicolon_separated_statements_are_both_parsed() {
    let query = Parser::new("SELECT a FROM b; SELECT c FROM d").parse_query().unwrap();
    assert_eq!(query.statements.len(), 2);
}

#[test]
fn leading_and_trailing_semicolons_produce_no_empty_statements() {
    let query = Parser::new(";; SELECT a FROM b ;; ").parse_query().unwrap();
    assert_eq!(query.statements.len(), 1);
}

#[test]
fn keywords_fold_case_identifiers_preserve_it() {
    let lower = parse("select X from Y");
    let upper = parse("SELECT X FROM Y");
    assert_eq!(lower, upper);
    match lower {
        Statement::Select(select) => {
            assert_eq!(select.fields[0].expr, Expr::VarRef("X".into()));
            assert_eq!(select.source, Source::Measurement("Y".into()));
        }
        other => panic!("expected SELECT, got {:?}", other),
    }
}

#[test]
fn determinism_parses_identically_twice() {
    let input = "SELECT mean(value) FROM cpu WHERE host = 'a' GROUP BY time(5m) LIMIT 3";
    assert_eq!(parse(input), parse(input));
}

#[test]
fn trailing_join_keyword_is_absorbed_into_join_source() {
    // Observed quirk preserved verbatim (spec §9 design note): a trailing
    // `JOIN cc` after a `join(...)` source appends to its measurement list.
    match parse(r#"SELECT field1 FROM join(aa,"bb", cc) JOIN cc"#) {
        Statement::Select(select) => match select.source {
            Source::Join(names) => {
                assert_eq!(names, vec!["aa", "\"bb\"", "cc", "cc"]);
            }
            other => panic!("expected a Join source, got {:?}", other),
        },
        other => panic!("expected SELECT, got {:?}", other),
    }
}

#[test]
fn quoted_identifier_keeps_its_quotes_in_the_ast() {
    match parse(r#"DROP RETENTION POLICY "1h.cpu" ON testdb"#) {
        Statement::DropRetentionPolicy(stmt) => {
            assert_eq!(stmt.name, "\"1h.cpu\"");
            assert_eq!(stmt.database, "testdb");
        }
        other => panic!("expected DROP RETENTION POLICY, got {:?}", other),
    }
}

#[test]
fn select_into_sets_target_for_continuous_query() {
    match parse(
        "CREATE CONTINUOUS QUERY cq1 ON mydb BEGIN \
         SELECT mean(value) INTO cpu_mean FROM cpu GROUP BY time(5m) END",
    ) {
        Statement::CreateContinuousQuery(stmt) => {
            assert_eq!(stmt.name, "cq1");
            assert_eq!(stmt.database, "mydb");
            assert_eq!(stmt.select.target, Some(Target("cpu_mean".into())));
            assert_eq!(
                stmt.select.group_by_interval(),
                Some(Duration::from_micros(300_000_000))
            );
        }
        other => panic!("expected CREATE CONTINUOUS QUERY, got {:?}", other),
    }
}

#[test]
fn show_tag_values_with_key_in_list() {
    match parse(r#"SHOW TAG VALUES WITH KEY IN (region, host) FROM cpu LIMIT 5"#) {
        Statement::ShowTagValues(stmt) => {
            assert_eq!(stmt.tag_keys, vec!["region".to_string(), "host".to_string()]);
            assert_eq!(stmt.show.limit, 5);
        }
        other => panic!("expected SHOW TAG VALUES, got {:?}", other),
    }
}

#[test]
fn order_by_time_uses_time_as_a_sort_field_name() {
    // `TIME` is reserved but still must resolve as an ordinary sort-field
    // name here, not be silently dropped.
    match parse("SELECT * FROM cpu ORDER BY time DESC") {
        Statement::Select(select) => {
            assert_eq!(select.sort_fields.len(), 1);
            assert_eq!(select.sort_fields[0].name.as_deref(), Some("time"));
            assert!(!select.sort_fields[0].ascending);
        }
        other => panic!("expected a SELECT statement, got {:?}", other),
    }
}

#[test]
fn merge_source_joins_multiple_measurements() {
    match parse("SELECT * FROM merge(a, b, c)") {
        Statement::Select(select) => {
            assert_eq!(
                select.source,
                Source::Merge(vec!["a".into(), "b".into(), "c".into()])
            );
        }
        other => panic!("expected SELECT, got {:?}", other),
    }
}

#[test]
fn delete_statement_with_where() {
    match parse("DELETE FROM cpu WHERE time < '2020-01-01'") {
        Statement::Delete(stmt) => {
            assert_eq!(stmt.source, Source::Measurement("cpu".into()));
            assert!(stmt.condition.is_some());
        }
        other => panic!("expected DELETE, got {:?}", other),
    }
}

#[test]
fn create_user_with_privilege() {
    match parse("CREATE USER jdoe WITH PASSWORD 'hunter2' WITH ALL PRIVILEGES") {
        Statement::CreateUser(stmt) => {
            assert_eq!(stmt.name, "jdoe");
            assert_eq!(stmt.password, "hunter2");
            assert_eq!(stmt.privilege, Some(Privilege::All));
        }
        other => panic!("expected CREATE USER, got {:?}", other),
    }
}

#[test]
fn revoke_scoped_to_a_database() {
    match parse("REVOKE WRITE ON mydb FROM jdoe") {
        Statement::Revoke(stmt) => {
            assert_eq!(stmt.privilege, Privilege::Write);
            assert_eq!(stmt.on.as_deref(), Some("mydb"));
            assert_eq!(stmt.user, "jdoe");
        }
        other => panic!("expected REVOKE, got {:?}", other),
    }
}

#[test]
fn show_databases_show_users_show_continuous_queries() {
    assert!(matches!(parse("SHOW DATABASES"), Statement::ShowDatabases(_)));
    assert!(matches!(parse("SHOW USERS"), Statement::ShowUsers));
    assert!(matches!(
        parse("SHOW CONTINUOUS QUERIES"),
        Statement::ShowContinuousQueries
    ));
}

#[test]
fn duration_helpers_round_trip_through_the_facade() {
    for s in ["3", "1001", "15ms", "100s", "2m", "2h", "2d", "2w"] {
        let parsed = tsql::parse_duration(s).unwrap();
        assert_eq!(tsql::format_duration(parsed), s);
    }
}

#[test]
fn quote_helpers_are_exposed_from_the_facade() {
    assert_eq!(tsql::quote_string("it's"), "'it\\'s'");
    assert_eq!(tsql::quote_ident(&["mydb", "cpu"]), "\"mydb\".\"cpu\"");
}
