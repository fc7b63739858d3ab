pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are MyBrain's assistant. Help the user manage their tasks, notes, diary, bookmarks and calendar. Be concise.";
