use crate::schema::DB_SCHEMA;

/// System instruction for the SQL generation stage, with the schema
/// embedded verbatim.
pub fn sql_generator_system() -> String {
    format!(
        "You are an expert SQL query generator. Your task is to convert natural language \
queries into PostgreSQL SQL statements.

Here is the database schema:
{DB_SCHEMA}
The user will provide a natural language query. Convert it into a valid PostgreSQL SQL query.
- Be precise and ensure your SQL query addresses the actual intent of the question
- Include appropriate JOINs when working with multiple tables
- Ensure proper column references and table aliases
- Do not include any explanations, just return the SQL query
- Ensure the SQL is valid for PostgreSQL

IMPORTANT: Return ONLY the SQL query with no additional text, comments, or explanations."
    )
}

pub fn sql_generator_user(question: &str) -> String {
    format!("Convert this natural language query to SQL: {question}")
}

/// System instruction for the summarization stage.
pub const SUMMARIZER_SYSTEM: &str = "You are an expert data analyst. Your task is to \
summarize SQL query results into clear, concise language that a non-technical person \
can understand.

Provide a brief, focused summary that captures the key insights from the data.
Highlight important patterns, notable outliers, or significant metrics.
Keep your summary short and to the point.";

pub fn summarizer_user(question: &str, results: &str) -> String {
    format!(
        "Original natural language query: \"{question}\"\n\nQuery results: {results}\n\n\
Please provide a concise summary of these results:"
    )
}
