use anyhow::Result;

fn main() -> Result<()> {
    let code = sumjudge::cli::run(sumjudge::cli::CliMode::Cms)?;
    std::process::exit(code);
}
