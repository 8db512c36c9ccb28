use anyhow::Result;

fn main() -> Result<()> {
    let code = sumjudge::cli::run(sumjudge::cli::CliMode::Compat)?;
    std::process::exit(code);
}
