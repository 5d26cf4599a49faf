use quiz_config::QuizConfig;

const SECTIONS: [&str; 6] = ["STORE", "RESULTS", "SESSION", "GENERATOR", "ADMIN", "CATALOG"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &QuizConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &QuizConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for section in SECTIONS {
        let single = format!("QUIZ_{section}_");
        let double = format!("QUIZ_{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "{key} is ignored. Use double underscores between section and key (example: {double}{})",
                key.trim_start_matches(&single)
            ));
        }
    }

    if !config.generator.is_configured() && has_env_prefix(&env_keys, "QUIZ_GENERATOR") {
        warnings.push(
            "Generator config appears default while QUIZ_GENERATOR* env vars exist. Set QUIZ_GENERATOR__API_KEY."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
