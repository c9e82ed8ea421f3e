mod cli;
mod run;

use pr_compliance::error::AppError;
use pr_compliance::validation::Verdict;

pub fn run() -> Result<Verdict, AppError> {
    cli::run()
}
