use anyhow::Result;

fn main() -> Result<()> {
    let code = sumjudge::cli::run(sumjudge::cli::CliMode::Opendata)?;
    std::process::exit(code);
}
