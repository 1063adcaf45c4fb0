use model::query::outcome::QueryOutcome;

pub fn print_banner(question: &str) {
    println!("\n{}", "=".repeat(80));
    println!("Processing query: '{question}'");
    println!("{}", "=".repeat(80));
}

pub fn print_outcome(outcome: &QueryOutcome) {
    match outcome {
        QueryOutcome::Error { message } => println!("Error: {message}"),
        QueryOutcome::Success {
            sql,
            result,
            summary,
            ..
        } => {
            println!("SQL: {sql}");
            println!("\nResults:");
            println!("{result}");
            println!("\nSummary: {summary}");
        }
    }
}
