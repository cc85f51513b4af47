
/// Statements built by the select/update/delete helpers
pub mod statement_tests;
