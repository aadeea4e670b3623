use crate::cli::args::RunArgs;
use crate::cli::helpers;
use crate::exit_codes::CONFIG_ERROR;
use scholar_core::model::Session;

pub async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let (config, key) = match helpers::load_setup(&args.common) {
        Ok(setup) => setup,
        Err(e) => return Ok(helpers::fail(&e)),
    };
    let threshold = args.threshold.unwrap_or(config.pass_threshold);

    // Stage 1: generate
    let finder = helpers::build_finder(&config, key.clone());
    println!("Searching for top researchers in {}...", args.topic);
    let generated = match finder.find(&args.topic).await {
        Ok(list) => list,
        Err(e) => return Ok(helpers::fail(&e)),
    };
    println!();
    println!("{generated}");
    println!();

    // The session record binds the topic to what was generated; the judged
    // text may diverge from it after editing.
    let session = Session::new(&args.topic, generated.clone());

    let candidate = if args.edit {
        edit_candidate(&generated)
    } else {
        generated
    };

    if candidate.trim().is_empty() {
        eprintln!("warning: the edited list is empty; nothing to judge");
        return Ok(CONFIG_ERROR);
    }

    // Stage 2: judge (always on the possibly-edited text)
    let judge = helpers::build_judge(&config, key);
    super::judge::report(&judge, &session.topic, &candidate, threshold).await
}

fn edit_candidate(generated: &str) -> String {
    match dialoguer::Editor::new().edit(generated) {
        Ok(Some(edited)) => edited,
        Ok(None) => {
            eprintln!("edit aborted; judging the generated list as-is");
            generated.to_string()
        }
        Err(e) => {
            eprintln!("warning: could not open editor ({e}); judging the generated list as-is");
            generated.to_string()
        }
    }
}
