mod bootstrap;

use chiatien_application::{Command, ScriptOutput, ScriptProcessor};
use chiatien_infrastructure::{ChiatienScriptParser, UuidExpenseIdGenerator};
use chiatien_presentation::{
    CurrencyFormat, ExpensePresenter, SettlementPresenter, format_script_error,
};
use std::{borrow::Cow, env, fs, process};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    bootstrap::init_logging();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let Some(path) = env::args().nth(1) else {
        return Err("Usage: chiatien <script.chia>".into());
    };
    let config = bootstrap::AppConfig::from_env()?;

    let source =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;

    let output = run_script(&source, config.currency_format())?;
    print!("{output}");
    Ok(())
}

fn run_script(source: &str, currency: CurrencyFormat) -> CliResult<String> {
    let processor = ScriptProcessor::new(&ChiatienScriptParser, &UuidExpenseIdGenerator);
    let outputs = processor
        .run(source)
        .map_err(|err| format_script_error(&err))?;

    let settlements = SettlementPresenter::new(currency.clone());
    let expenses = ExpensePresenter::new(currency);
    let sections: Vec<String> = outputs
        .iter()
        .map(|output| render_output(output, &settlements, &expenses))
        .collect();
    Ok(sections.join("\n"))
}

fn render_output(
    output: &ScriptOutput,
    settlements: &SettlementPresenter,
    expenses: &ExpensePresenter,
) -> String {
    let report = &output.report;
    match output.command {
        Some(Command::Balances) => settlements.render_balances(&report.balances),
        Some(Command::Settle) => settlements.render_transactions(&report.transfers),
        Some(Command::Breakdown) => settlements.render_breakdown(&report.breakdown),
        Some(Command::Summary) => settlements.render_summary(&report.summary),
        Some(Command::Expenses) => expenses.render(output.session.expenses()),
        None => settlements.render(report).into_full_report(),
    }
}
