use indexmap::IndexMap;
use lazy_static::lazy_static;

// Maps the completion function names reported by the chat backend to legend labels
lazy_static! {
    static ref FUNCTION_NAME_LABELS: Vec<(&'static str, &'static str)> = vec![
        ("audienceExtraction", "Audience Extraction"),
        ("userIntentExtraction", "User Intent Extraction"),
        ("metaPromptTemplate", "Meta Prompt Template"),
        ("responseCompletion", "Response Completion"),
        ("workingMemoryExtraction", "Working Memory Generation"),
        ("longTermMemoryExtraction", "Long Term Memory Generation"),
    ];
}

pub const TOKEN_USAGE_INFO: &str = "Token count for each category is the total sum of tokens used for the prompt template and chat completion for the respective completion functions.";

pub const TOKEN_USAGE_INFO_LINK: &str = "https://learn.microsoft.com/en-us/dotnet/api/azure.ai.openai.completionsusage?view=azure-dotnet-preview";

pub fn default_labels() -> IndexMap<String, String> {
    FUNCTION_NAME_LABELS
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect()
}
