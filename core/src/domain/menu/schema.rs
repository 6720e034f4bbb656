use serde_json::json;

/// Returns the JSON schema for menu search LLM responses
pub fn get_menu_search_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ids": {
                "type": "array",
                "items": { "type": "integer" }
            },
            "answer": { "type": "string" }
        },
        "required": ["ids", "answer"]
    })
}
