/// Static description of the five tables the generator prompts against.
///
/// This is an assumed contract between the prompt author and the deployed
/// database; it is never introspected from the live server.
pub const DB_SCHEMA: &str = include_str!("schema.sql");
