mod graphql_parser_selection_tests;
mod utils;
