use pr_compliance::validation::render;

fn main() {
    match pr_compliance_runner::run() {
        Ok(verdict) if verdict.outcome.is_valid() => {}
        Ok(verdict) => {
            eprintln!("{}", render(&verdict));
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("application error: {err}");
            std::process::exit(1);
        }
    }
}
