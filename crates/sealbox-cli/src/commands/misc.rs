use clap::CommandFactory;
use clap_complete::generate;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::output::print_json;

pub fn handle_ping(ctx: &AppContext) -> anyhow::Result<()> {
    let pong = ctx.detached()?.ping();
    if ctx.json() {
        return print_json(&pong);
    }
    println!("{}", pong.msg);
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "sealbox", &mut std::io::stdout());
    Ok(())
}
