use crate::cli::args::FindArgs;
use crate::cli::helpers;
use crate::exit_codes::SUCCESS;

pub async fn run(args: FindArgs) -> anyhow::Result<i32> {
    let (mut config, key) = match helpers::load_setup(&args.common) {
        Ok(setup) => setup,
        Err(e) => return Ok(helpers::fail(&e)),
    };
    if let Some(model) = args.model {
        config.finder_model = model;
    }

    let finder = helpers::build_finder(&config, key);
    println!("Searching for top researchers in {}...", args.topic);
    match finder.find(&args.topic).await {
        Ok(list) => {
            println!();
            println!("{list}");
            Ok(SUCCESS)
        }
        Err(e) => Ok(helpers::fail(&e)),
    }
}
