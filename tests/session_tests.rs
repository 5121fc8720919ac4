#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::PathBuf;
    use tokengraph::config::GraphConfig;
    use tokengraph::formatters::{DisplayMode, RenderOptions, Writer};
    use tokengraph::graph::TokenUsageGraph;
    use tokengraph::models::{Color, OutputFormat, SessionStore, UsageRecord};
    use tokengraph::utils::resolve_config_path;

    const STATE: &str = r#"{
        "selectedId": "chat-1",
        "conversations": {
            "chat-1": {
                "botResponseStatus": "Generating bot response",
                "tokenUsage": { "responseCompletion": 120, "workingMemoryExtraction": 30 }
            },
            "chat-2": {
                "tokenUsage": { "metaPromptTemplate": null }
            },
            "chat-3": {
                "botResponseStatus": "",
                "tokenUsage": {}
            }
        }
    }"#;

    #[test]
    fn test_usage_record_keeps_document_order() {
        let record =
            UsageRecord::from_json(r#"{"zeta": 1, "alpha": null, "memoryBeta": 2}"#).unwrap();

        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "memoryBeta"]);
        assert_eq!(record.defined_total(), 3);
        assert!(UsageRecord::from_json("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_usage_record_rejects_negative_counts() {
        assert!(UsageRecord::from_json(r#"{"responseCompletion": -4}"#).is_err());
        assert!(UsageRecord::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_usage_record_rejects_overflowing_total() {
        let err = UsageRecord::from_json(r#"{"promptA": 18446744073709551615, "memoryX": 1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Token usage total exceeds"));

        let max = UsageRecord::from_json(r#"{"promptA": 18446744073709551615, "memoryX": 0}"#)
            .unwrap();
        assert_eq!(max.checked_total(), Some(u64::MAX));

        let state = r#"{
            "selectedId": "big",
            "conversations": {
                "big": { "tokenUsage": { "promptA": 18446744073709551615, "promptB": 1 } }
            }
        }"#;
        let err = SessionStore::from_json(state).unwrap_err();
        assert!(format!("{:#}", err).contains("conversation 'big'"));
    }

    #[test]
    fn test_session_store_loading_flag() {
        let mut store = SessionStore::from_json(STATE).unwrap();
        let active = store.active().unwrap();
        assert!(active.is_loading());
        assert_eq!(active.token_usage.defined_total(), 150);

        store.select("chat-2");
        assert!(!store.active().unwrap().is_loading());

        store.select("chat-3");
        assert!(!store.active().unwrap().is_loading());
    }

    #[test]
    fn test_session_store_unknown_id() {
        let mut store = SessionStore::from_json(STATE).unwrap();
        store.select("missing");
        let err = store.active().unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_config_overrides() {
        let config = GraphConfig::from_json(
            r##"{
                "labels": { "customStep": "Custom Step" },
                "brandRamp": { "10": "#000000", "160": "#ffffff" },
                "contrast": ["#111111", "#222222", "#333333"]
            }"##,
        )
        .unwrap();

        assert_eq!(config.label_for("customStep"), "Custom Step");
        assert_eq!(config.label_for("responseCompletion"), "Response Completion");
        assert_eq!(config.label_for("other"), "other");
        assert_eq!(config.brand_ramp.color_at(120), Color::rgb(0xff, 0xff, 0xff));
        assert_eq!(config.brand_ramp.color_at(20), Color::rgb(0, 0, 0));
        assert_eq!(config.contrast.color_at(4), Color::rgb(0x22, 0x22, 0x22));
    }

    #[test]
    fn test_config_rejects_bad_input() {
        assert!(GraphConfig::from_json(r##"{"contrast": ["#111111"]}"##).is_err());
        assert!(GraphConfig::from_json(r#"{"brandRamp": {}}"#).is_err());
        assert!(GraphConfig::from_json(r#"{"brandRamp": {"10": "red"}}"#).is_err());
        assert!(GraphConfig::from_json(r#"{"palette": {}}"#).is_err());
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"labels": {{"promptA": "Prompt A"}}}}"#).unwrap();

        let config = GraphConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.label_for("promptA"), "Prompt A");
        assert_eq!(GraphConfig::load(None).unwrap(), GraphConfig::default());
    }

    #[test]
    fn test_config_path_resolution_order() {
        let mut env_file = tempfile::NamedTempFile::new().unwrap();
        write!(env_file, r#"{{"labels": {{"promptA": "From Env"}}}}"#).unwrap();
        let explicit = PathBuf::from("/tmp/tokengraph-explicit.json");

        std::env::set_var("TOKENGRAPH_CONFIG", env_file.path());
        let from_env = resolve_config_path(None);
        let from_flag = resolve_config_path(Some(explicit.clone()));
        std::env::remove_var("TOKENGRAPH_CONFIG");

        assert_eq!(from_env.as_deref(), Some(env_file.path()));
        assert_eq!(from_flag, Some(explicit));

        let config = GraphConfig::load(from_env.as_deref()).unwrap();
        assert_eq!(config.label_for("promptA"), "From Env");
    }

    #[test]
    fn test_writer_reset_truncates_output_file() {
        let out = tempfile::NamedTempFile::new().unwrap();
        let mut writer = Writer::new(Some(out.path().to_path_buf())).unwrap();

        writer.write("first render with a much longer line").unwrap();
        writer.reset().unwrap();
        writer.write("second").unwrap();

        assert_eq!(std::fs::read_to_string(out.path()).unwrap(), "second\n");

        let mut buffer = Writer::buffer();
        buffer.write("stale").unwrap();
        buffer.reset().unwrap();
        buffer.write("fresh").unwrap();
        assert_eq!(buffer.contents(), Some("fresh\n"));
    }

    #[test]
    fn test_graph_recomputes_on_change() {
        let mut graph = TokenUsageGraph::new(GraphConfig::default());
        assert_eq!(graph.mode(), DisplayMode::NoUsageYet);

        let record = UsageRecord::from_json(r#"{"promptA": 30, "memoryX": 10}"#).unwrap();
        assert!(graph.update(record.clone(), true, false));
        assert_eq!(graph.mode(), DisplayMode::Pending);
        assert!(!graph.update(record.clone(), true, false));

        assert!(graph.update(record, false, false));
        assert_eq!(graph.mode(), DisplayMode::Chart);
        assert_eq!(graph.breakdown().grand_total(), 40);

        let mut first = Writer::buffer();
        let mut second = Writer::buffer();
        let options = RenderOptions::default();
        graph.render(&mut first, &options, OutputFormat::Default).unwrap();
        graph.render(&mut second, &options, OutputFormat::Default).unwrap();
        assert_eq!(first.contents(), second.contents());
    }

    #[test]
    fn test_graph_prompt_view_wins_over_options() {
        let mut graph = TokenUsageGraph::new(GraphConfig::default());
        graph.update(UsageRecord::from_json(r#"{"a": null}"#).unwrap(), false, true);

        let mut writer = Writer::buffer();
        graph
            .render(&mut writer, &RenderOptions::default(), OutputFormat::Default)
            .unwrap();
        assert!(writer
            .contents()
            .unwrap()
            .contains("No tokens were used. This is a hardcoded response."));
    }
}
