use crate::cli::args::CommonArgs;
use crate::exit_codes;
use scholar_core::config::{ApiKey, ScholarConfig};
use scholar_core::finder::ResearcherFinder;
use scholar_core::judge::RelevanceJudge;
use scholar_core::providers::llm::OpenAIClient;
use scholar_core::search::SearchClient;
use scholar_core::Error;
use std::sync::Arc;

/// Resolve config file + API key. The key check happens here, before any
/// command gets a chance to open a connection.
pub fn load_setup(common: &CommonArgs) -> Result<(ScholarConfig, ApiKey), Error> {
    let config = match &common.config {
        Some(path) => ScholarConfig::from_yaml_file(path)?,
        None => ScholarConfig::default(),
    };
    let key = match &common.api_key {
        Some(raw) => ApiKey::new(raw.clone())?,
        None => ApiKey::from_env()?,
    };
    Ok((config, key))
}

pub fn build_finder(config: &ScholarConfig, key: ApiKey) -> ResearcherFinder {
    let client = OpenAIClient::new(
        config.finder_model.clone(),
        key,
        config.base_url.clone(),
        config.temperature,
        config.max_tokens,
    );
    let search = SearchClient::new(&config.search);
    ResearcherFinder::new(
        Arc::new(client),
        Arc::new(search),
        config.max_tool_rounds,
        config.search.max_results,
    )
}

pub fn build_judge(config: &ScholarConfig, key: ApiKey) -> RelevanceJudge {
    let client = OpenAIClient::new(
        config.judge_model.clone(),
        key,
        config.base_url.clone(),
        config.temperature,
        config.max_tokens,
    );
    RelevanceJudge::new(Arc::new(client))
}

/// Render a pipeline error to the user and map it to an exit code. No error
/// crashes the process; no error is retried.
pub fn fail(err: &Error) -> i32 {
    eprintln!("error: {err}");
    if let Error::Extraction { raw, .. } = err {
        eprintln!("--- judge reply ---\n{raw}\n-------------------");
    }
    match err {
        Error::MissingApiKey | Error::Config(_) => exit_codes::CONFIG_ERROR,
        _ => exit_codes::STAGE_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_to_exit_code_mapping() {
        assert_eq!(fail(&Error::MissingApiKey), exit_codes::CONFIG_ERROR);
        assert_eq!(
            fail(&Error::Config("bad yaml".to_string())),
            exit_codes::CONFIG_ERROR
        );
        assert_eq!(
            fail(&Error::Generation("timeout".to_string())),
            exit_codes::STAGE_FAILED
        );
        assert_eq!(
            fail(&Error::Extraction {
                detail: "expected value".to_string(),
                raw: "no json here".to_string(),
            }),
            exit_codes::STAGE_FAILED
        );
    }
}
