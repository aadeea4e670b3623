pub mod find;
pub mod judge;
pub mod run;

use super::args::{Cli, Command};
use crate::exit_codes::SUCCESS;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Find(args) => find::run(args).await,
        Command::Judge(args) => judge::run(args).await,
        Command::Run(args) => run::run(args).await,
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
