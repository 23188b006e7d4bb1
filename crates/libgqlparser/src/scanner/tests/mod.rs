mod graphql_scanner_proptest_tests;
mod graphql_scanner_tests;
