use crate::cli::args::JudgeArgs;
use crate::cli::helpers;
use crate::exit_codes::{CONFIG_ERROR, STAGE_FAILED, SUCCESS};
use scholar_core::judge::RelevanceJudge;
use scholar_core::model::Verdict;
use std::io::Read;

pub async fn run(mut args: JudgeArgs) -> anyhow::Result<i32> {
    let (mut config, key) = match helpers::load_setup(&args.common) {
        Ok(setup) => setup,
        Err(e) => return Ok(helpers::fail(&e)),
    };
    if let Some(model) = args.model.take() {
        config.judge_model = model;
    }
    let threshold = args.threshold.unwrap_or(config.pass_threshold);

    let candidate = match read_candidate(&args)? {
        Some(text) => text,
        None => {
            // never invoke the judge on empty input
            eprintln!("warning: the candidate list is empty; generate or provide some text first");
            return Ok(CONFIG_ERROR);
        }
    };

    let judge = helpers::build_judge(&config, key);
    report(&judge, &args.topic, &candidate, threshold).await
}

fn read_candidate(args: &JudgeArgs) -> anyhow::Result<Option<String>> {
    let raw = if let Some(text) = &args.text {
        text.clone()
    } else if let Some(path) = &args.file {
        std::fs::read_to_string(path)?
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    };
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(raw))
    }
}

pub async fn report(
    judge: &RelevanceJudge,
    topic: &str,
    candidate: &str,
    threshold: f64,
) -> anyhow::Result<i32> {
    println!("Judging with {}...", judge.model_name());
    let grade = match judge.evaluate(topic, candidate).await {
        Ok(grade) => grade,
        Err(e) => return Ok(helpers::fail(&e)),
    };

    println!();
    println!("Judge Report");
    println!("------------");
    match Verdict::from_score(grade.score, threshold) {
        Verdict::Pass => {
            println!("✅ PASSED (score {:.2} > threshold {:.2})", grade.score, threshold);
        }
        Verdict::Fail => {
            println!("❌ FAILED (score {:.2} <= threshold {:.2})", grade.score, threshold);
        }
    }
    println!();
    println!("Reasoning:\n{}", grade.reason);

    match Verdict::from_score(grade.score, threshold) {
        Verdict::Pass => Ok(SUCCESS),
        Verdict::Fail => Ok(STAGE_FAILED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::CommonArgs;
    use std::io::Write;

    fn judge_args(text: Option<&str>) -> JudgeArgs {
        JudgeArgs {
            common: CommonArgs {
                api_key: None,
                config: None,
            },
            topic: "GANs".to_string(),
            text: text.map(String::from),
            file: None,
            threshold: None,
            model: Some("deepseek/deepseek-chat".to_string()),
        }
    }

    #[test]
    fn whitespace_only_candidate_short_circuits() {
        // the judge must never be invoked on empty input
        assert!(read_candidate(&judge_args(Some("   "))).unwrap().is_none());
        assert!(read_candidate(&judge_args(Some("\n\t "))).unwrap().is_none());
        assert!(read_candidate(&judge_args(Some(""))).unwrap().is_none());
    }

    #[test]
    fn non_empty_candidate_is_passed_through() {
        let got = read_candidate(&judge_args(Some("1. Ian Goodfellow"))).unwrap();
        assert_eq!(got.as_deref(), Some("1. Ian Goodfellow"));
    }

    #[test]
    fn file_candidate_is_read_and_checked() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "1. A\n2. B\n3. C").unwrap();
        let mut args = judge_args(None);
        args.file = Some(f.path().to_path_buf());
        let got = read_candidate(&args).unwrap();
        assert!(got.unwrap().starts_with("1. A"));

        let empty = tempfile::NamedTempFile::new().unwrap();
        let mut args = judge_args(None);
        args.file = Some(empty.path().to_path_buf());
        assert!(read_candidate(&args).unwrap().is_none());
    }

    #[test]
    fn model_override_leaves_args_readable() {
        // taking the override out of args must not consume the rest of it
        let mut args = judge_args(Some("1. A"));
        let model = args.model.take().unwrap();
        assert_eq!(model, "deepseek/deepseek-chat");
        let candidate = read_candidate(&args).unwrap();
        assert_eq!(candidate.as_deref(), Some("1. A"));
    }
}
