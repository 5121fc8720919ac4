#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokengraph::classify::classify;
    use tokengraph::config::GraphConfig;
    use tokengraph::formatters::{
        allocate_cells, render_bar, render_json, render_text, DisplayMode, RenderOptions, Writer,
    };
    use tokengraph::models::{Breakdown, UsageRecord};

    fn breakdown(entries: &[(&str, Option<u64>)]) -> Breakdown {
        let record: UsageRecord = entries.iter().map(|(k, v)| (*k, *v)).collect();
        classify(&record, &GraphConfig::default())
    }

    fn plain(width: usize) -> RenderOptions {
        RenderOptions {
            width,
            ..RenderOptions::default()
        }
    }

    fn text(breakdown: &Breakdown, loading: bool, options: &RenderOptions) -> String {
        let mut writer = Writer::buffer();
        render_text(&mut writer, breakdown, loading, options).unwrap();
        writer.contents().unwrap().to_string()
    }

    #[test]
    fn test_allocate_cells() {
        assert_eq!(allocate_cells(&[30, 10, 10], 10), vec![6, 2, 2]);
        assert_eq!(allocate_cells(&[1, 1, 1], 10), vec![4, 3, 3]);
        assert_eq!(allocate_cells(&[0, 0], 10), vec![0, 0]);
        assert_eq!(allocate_cells(&[], 10), Vec::<usize>::new());

        let huge = allocate_cells(&[u64::MAX, 1, u64::MAX], 10);
        assert_eq!(huge.iter().sum::<usize>(), 10);
        assert_eq!(huge[1], 0);

        let cells = allocate_cells(&[7, 0, 123, 5, 99], 48);
        assert_eq!(cells.iter().sum::<usize>(), 48);
        assert_eq!(cells[1], 0);
    }

    #[test]
    fn test_mode_selection() {
        let empty = breakdown(&[]);
        let undefined = breakdown(&[("a", None)]);
        let used = breakdown(&[("promptA", Some(3))]);

        assert_eq!(DisplayMode::select(true, &used, false), DisplayMode::Pending);
        assert_eq!(DisplayMode::select(true, &empty, true), DisplayMode::Pending);
        assert_eq!(DisplayMode::select(false, &empty, false), DisplayMode::NoUsageYet);
        assert_eq!(DisplayMode::select(false, &undefined, true), DisplayMode::HardcodedResponse);
        assert_eq!(DisplayMode::select(false, &used, true), DisplayMode::Chart);
    }

    #[test]
    fn test_chart_text() {
        let b = breakdown(&[
            ("promptA", Some(30)),
            ("promptB", Some(10)),
            ("memoryX", Some(10)),
        ]);
        let out = text(&b, false, &plain(10));

        assert_eq!(
            out,
            "Token Usage (i)\n\
             Total token usage for current session\n\
             ██████▓▓▒▒\n\
             ■ Response Generation: 40   ■ Memory Extraction: 10\n"
        );
    }

    #[test]
    fn test_prompt_view_drops_session_header() {
        let b = breakdown(&[("responseCompletion", Some(1500))]);
        let options = RenderOptions {
            prompt_view: true,
            ..plain(4)
        };
        let out = text(&b, false, &options);

        assert!(!out.contains("Total token usage for current session"));
        assert!(out.contains("████"));
        assert!(out.contains("Response Generation: 1,500"));
        assert!(out.contains("□ Memory Extraction: 0"));
    }

    #[test]
    fn test_empty_states() {
        let empty = breakdown(&[]);
        assert_eq!(
            text(&empty, false, &plain(10)),
            "Token Usage (i)\nNo tokens have been used in this session yet.\n"
        );

        let undefined = breakdown(&[("a", None)]);
        let options = RenderOptions {
            prompt_view: true,
            ..plain(10)
        };
        assert_eq!(
            text(&undefined, false, &options),
            "Token Usage (i)\nNo tokens were used. This is a hardcoded response.\n"
        );
    }

    #[test]
    fn test_pending_hides_bars() {
        let b = breakdown(&[("promptA", Some(30)), ("memoryX", Some(10))]);
        let out = text(&b, true, &plain(10));

        assert!(out.contains("Final token usage will be available once bot response is generated."));
        assert!(!out.contains('█'));
        assert!(!out.contains("Response Generation"));
    }

    #[test]
    fn test_explain_is_shown_in_every_mode() {
        let options = RenderOptions {
            explain: true,
            ..plain(10)
        };
        for (b, loading) in [
            (breakdown(&[]), false),
            (breakdown(&[("promptA", Some(1))]), false),
            (breakdown(&[("promptA", Some(1))]), true),
        ] {
            let out = text(&b, loading, &options);
            assert!(out.starts_with("Token Usage (i)\n  Token count for each category"));
        }
    }

    #[test]
    fn test_colored_bar_uses_entry_colors() {
        let b = breakdown(&[("promptA", Some(1)), ("memoryX", Some(1))]);
        let bar = render_bar(&b, 4, true);

        let first = b.response.get("promptA").unwrap().color;
        let second = b.memory.get("memoryX").unwrap().color;
        assert!(bar.contains(&format!("\x1b[38;2;{};{};{}m", first.r, first.g, first.b)));
        assert!(bar.contains(&format!("\x1b[38;2;{};{};{}m", second.r, second.g, second.b)));
    }

    #[test]
    fn test_verbose_details_table() {
        let b = breakdown(&[
            ("responseCompletion", Some(3000)),
            ("workingMemoryExtraction", Some(1000)),
        ]);
        let options = RenderOptions {
            verbose: true,
            ..plain(8)
        };
        let out = text(&b, false, &options);

        assert!(out.contains("Response Completion"));
        assert!(out.contains("Working Memory Generation"));
        assert!(out.contains("3,000"));
        assert!(out.contains("75.0%"));
        assert!(out.contains("TOTAL"));
        assert!(out.contains("4,000"));
    }

    #[test]
    fn test_json_chart() {
        let b = breakdown(&[
            ("promptA", Some(30)),
            ("promptB", Some(10)),
            ("memoryX", Some(10)),
        ]);
        let mut writer = Writer::buffer();
        render_json(&mut writer, &b, false, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(writer.contents().unwrap()).unwrap();

        assert_eq!(value["mode"], "chart");
        assert_eq!(value["grandTotal"], 50);
        assert_eq!(value["bars"].as_array().unwrap().len(), 3);
        assert_eq!(value["bars"][0]["key"], "promptA");
        assert_eq!(value["bars"][0]["proportion"], 0.6);
        assert_eq!(value["bars"][2]["category"], "memoryExtraction");
        assert_eq!(value["legend"][0]["name"], "Response Generation");
        assert_eq!(value["legend"][0]["usageCount"], 40);
        assert_eq!(value["legend"][1]["usageCount"], 10);
        assert_eq!(value["legend"][1]["color"], "#d0e7f8");
    }

    #[test]
    fn test_json_pending_has_no_bars() {
        let b = breakdown(&[("promptA", Some(30))]);
        let mut writer = Writer::buffer();
        render_json(&mut writer, &b, true, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(writer.contents().unwrap()).unwrap();

        assert_eq!(value["mode"], "pending");
        assert!(value["bars"].as_array().unwrap().is_empty());
        assert!(value["legend"].as_array().unwrap().is_empty());
    }
}
