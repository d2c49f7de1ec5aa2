use codechat_core::config::Settings;
use codechat_core::*;
use tempfile::TempDir;

// ========================================================================
// Settings Tests (config/mod.rs)
// ========================================================================

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();

    assert_eq!(settings.llm.model, "mixtral-8x7b-32768");
    assert_eq!(settings.llm.api_key_env, "GROQ_API_KEY");
    assert!(settings.llm.base_url.is_none());
    assert_eq!(settings.llm.max_tokens, 4096);
    assert_eq!(settings.llm.temperature, 0.0);

    assert!(settings.storage.data_dir.is_none());
}

#[test]
fn test_settings_toml_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut settings = Settings::default();
    settings.llm.model = "llama-3.3-70b-versatile".to_string();
    settings.llm.max_tokens = 2048;
    settings.storage.data_dir = Some(temp_dir.path().join("data"));

    let content = toml::to_string_pretty(&settings).unwrap();
    std::fs::write(&config_path, content).unwrap();

    let loaded_content = std::fs::read_to_string(&config_path).unwrap();
    let loaded: Settings = toml::from_str(&loaded_content).unwrap();

    assert_eq!(loaded.llm.model, "llama-3.3-70b-versatile");
    assert_eq!(loaded.llm.max_tokens, 2048);
    assert_eq!(loaded.storage.data_dir, Some(temp_dir.path().join("data")));
}

#[test]
fn test_settings_storage_section_is_optional() {
    let loaded: Settings = toml::from_str(
        r#"
[llm]
model = "mixtral-8x7b-32768"
api_key_env = "GROQ_API_KEY"
max_tokens = 4096
temperature = 0.0
"#,
    )
    .unwrap();

    assert!(loaded.storage.data_dir.is_none());
}

#[test]
fn test_settings_api_key_reads_from_env() {
    std::env::set_var("TEST_API_KEY_CODECHAT", "test-key-12345");

    let mut settings = Settings::default();
    settings.llm.api_key_env = "TEST_API_KEY_CODECHAT".to_string();

    assert_eq!(settings.api_key(), Some("test-key-12345".to_string()));

    std::env::remove_var("TEST_API_KEY_CODECHAT");
}

#[test]
fn test_settings_api_key_none_when_not_set() {
    let mut settings = Settings::default();
    settings.llm.api_key_env = "NONEXISTENT_KEY_CODECHAT_TEST".to_string();

    assert!(settings.api_key().is_none());
}

#[test]
fn test_build_llm_client_requires_api_key() {
    let mut settings = Settings::default();
    settings.llm.api_key_env = "NONEXISTENT_KEY_CODECHAT_TEST".to_string();

    let err = settings.build_llm_client().err().unwrap();
    assert!(matches!(err, ChatError::Config(_)));
}

// ========================================================================
// Classifier + Prompt Tests (intent.rs, prompt.rs)
// ========================================================================

#[test]
fn test_every_code_token_triggers_analysis() {
    let classifier = KeywordClassifier::new();
    for text in [
        "def f",
        "class A",
        "a = b",
        "open {",
        "close }",
        "call (",
        "call )",
        "print it",
        "return early",
    ] {
        assert_eq!(classifier.classify(text), Intent::CodeAnalysis, "{text}");
    }
}

#[test]
fn test_every_request_token_triggers_generation() {
    let classifier = KeywordClassifier::new();
    for text in [
        "write it",
        "create it",
        "make it",
        "required: a tool",
        "some code please",
        "a function please",
        "a program please",
    ] {
        assert_eq!(classifier.classify(text), Intent::CodeGeneration, "{text}");
    }
}

#[test]
fn test_code_priority_over_request_keywords() {
    let classifier = KeywordClassifier::new();
    // "write" is a request token, but "=" makes it code.
    assert_eq!(classifier.classify("write x = 1"), Intent::CodeAnalysis);
}

#[test]
fn test_prompt_for_each_intent() {
    let raw = "some text";
    assert!(build_prompt(Intent::CodeAnalysis, raw).contains("Analyze the following code:"));
    assert!(build_prompt(Intent::CodeGeneration, raw)
        .contains("Convert the following description into code:"));
    assert_eq!(build_prompt(Intent::GeneralChat, raw), raw);
}

// ========================================================================
// Session Tests (session.rs)
// ========================================================================

#[test]
fn test_session_lifecycle() {
    let mut session = SessionState::new();
    assert_eq!(session.conversations().len(), 1);

    session.append_message(Role::User, "please write a function now");
    session.append_message(Role::Assistant, "here you go");
    assert_eq!(session.current().title, "please write a function now");

    session.new_conversation();
    assert_eq!(session.conversations().len(), 2);
    assert_eq!(session.current().title, "New Conversation");

    session.select("please write a function now");
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current().messages.len(), 2);
}

#[test]
fn test_chat_view_tracks_selection() {
    let mut session = SessionState::new();
    session.append_message(Role::User, "first");
    session.new_conversation();
    session.append_message(Role::User, "second");

    let view = ChatView::of(&session);
    assert_eq!(view.titles, vec!["first", "second"]);
    assert_eq!(view.selected, 1);
    assert_eq!(view.messages.len(), 1);

    session.select("first");
    let view = ChatView::of(&session);
    assert_eq!(view.selected, 0);
}

// ========================================================================
// Analysis Store Tests (store.rs)
// ========================================================================

#[test]
fn test_store_appends_records_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonlAnalysisStore::with_dir(temp_dir.path().to_path_buf()).unwrap();

    store.create_record("first input", "first result").unwrap();
    store.create_record("second input", "second result").unwrap();

    let contents = std::fs::read_to_string(temp_dir.path().join("analysis.jsonl")).unwrap();
    let records: Vec<AnalysisRecord> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].input, "first input");
    assert_eq!(records[1].result, "second result");
}
