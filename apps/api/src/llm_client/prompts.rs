// Cross-cutting prompt fragments.
// Each task defines its own templates in assistant::prompts; this file holds
// only the fragments shared across tasks.

/// System prompt for calls whose entire reply must be a JSON value.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
