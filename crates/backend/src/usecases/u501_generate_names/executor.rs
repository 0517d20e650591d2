use crate::shared::llm::{ChatMessage, LlmError, LlmProvider};
use contracts::usecases::u501_generate_names::dto::{
    GenerateNamesRequest, GenerateNamesResponse, WordCount,
};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Ошибки генерации имён
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Name generation is not configured")]
    NotConfigured,

    #[error("LLM provider failed: {0}")]
    Provider(#[from] LlmError),

    #[error("The generator returned no usable names")]
    EmptyResult,
}

/// Запрос, прошедший нормализацию и валидацию
#[derive(Debug, Clone)]
pub struct PreparedRequest(GenerateNamesRequest);

impl PreparedRequest {
    pub fn request(&self) -> &GenerateNamesRequest {
        &self.0
    }
}

/// Нормализация и валидация запроса, до обращения к провайдеру
pub fn prepare(request: GenerateNamesRequest) -> Result<PreparedRequest, GenerateError> {
    let request = request.normalized();
    request.validate().map_err(GenerateError::InvalidRequest)?;
    Ok(PreparedRequest(request))
}

/// Executor для генерации имён через LLM
pub struct GenerateExecutor {
    provider: Arc<dyn LlmProvider>,
}

impl GenerateExecutor {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub async fn execute(
        &self,
        prepared: PreparedRequest,
    ) -> Result<GenerateNamesResponse, GenerateError> {
        let request = prepared.request();

        tracing::info!(
            "Generating {} names via {} (word count: {}, style: {})",
            request.count,
            self.provider.provider_name(),
            request.word_count.as_value(),
            request.style().unwrap_or("any")
        );

        let response = self.provider.chat_completion(build_messages(request)).await?;
        if let Some(tokens) = response.tokens_used {
            tracing::debug!("Generator used {} tokens on {}", tokens, response.model);
        }
        if response.is_truncated() {
            tracing::warn!(
                "Generator reply hit max_tokens, keeping only complete names ({} chars)",
                response.content.len()
            );
        }

        let names = parse_names(&response.content, request.word_count, request.count as usize);
        if names.is_empty() {
            tracing::warn!("Unparseable generator reply: {:?}", response.content);
            return Err(GenerateError::EmptyResult);
        }
        Ok(GenerateNamesResponse { names })
    }
}

const SYSTEM_PROMPT: &str = "You are a creative naming assistant for writers, game masters and \
world builders. Reply with a JSON array of strings and nothing else.";

/// Системное и пользовательское сообщения для запроса
pub fn build_messages(request: &GenerateNamesRequest) -> Vec<ChatMessage> {
    let mut prompt = format!(
        "Generate {} unique names for: {}.",
        request.count,
        request.criteria.trim()
    );
    match request.word_count.words() {
        Some(1) => prompt.push_str(" Each name must be a single word."),
        Some(n) => prompt.push_str(&format!(" Each name must have exactly {} words.", n)),
        None => {}
    }
    if let Some(style) = request.style() {
        prompt.push_str(&format!(" Use a {} style.", style));
    }
    prompt.push_str(" Do not include explanations or numbering.");

    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)]
}

/// Разбор ответа модели: JSON-массив, `{"names": [...]}` или по одному имени в строке
pub fn parse_names(content: &str, word_count: WordCount, limit: usize) -> Vec<String> {
    let body = strip_code_fence(content.trim());

    let candidates: Vec<String> = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Array(items)) => json_strings(items),
        Ok(serde_json::Value::Object(mut map)) => match map.remove("names") {
            Some(serde_json::Value::Array(items)) => json_strings(items),
            _ => Vec::new(),
        },
        // обрезанный по max_tokens JSON: берём только закрытые строки
        _ if body.starts_with('[') || body.starts_with('{') => complete_quoted(body),
        _ => body.lines().map(strip_list_marker).collect(),
    };

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .map(|name| name.trim().trim_matches('"').trim().to_string())
        .filter(|name| !name.is_empty())
        .filter(|name| match word_count.words() {
            Some(n) => name.split_whitespace().count() == n,
            None => true,
        })
        .filter(|name| seen.insert(name.to_lowercase()))
        .take(limit)
        .collect()
}

fn json_strings(items: Vec<serde_json::Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// Закрытые строки в кавычках из битого JSON, кроме ключа `names`
fn complete_quoted(body: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut in_string = false;
    let mut escaped = false;
    for ch in body.chars() {
        if !in_string {
            if ch == '"' {
                in_string = true;
                buf.clear();
            }
            continue;
        }
        if escaped {
            buf.push(ch);
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            in_string = false;
            if buf != "names" {
                out.push(std::mem::take(&mut buf));
            }
        } else {
            buf.push(ch);
        }
    }
    out
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // тег языка после открывающего ```
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

fn strip_list_marker(line: &str) -> String {
    let line = line.trim();
    let line = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("• "))
        .unwrap_or(line);
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let after = &line[digits..];
        if let Some(rest) = after.strip_prefix('.').or_else(|| after.strip_prefix(')')) {
            return rest.trim().to_string();
        }
    }
    line.trim_end_matches(',').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::{ChatRole, LlmResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeProvider {
        reply: Result<String, ()>,
        finish_reason: Option<String>,
        seen: Mutex<Vec<ChatMessage>>,
    }

    impl FakeProvider {
        fn replying(content: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(content.to_string()),
                finish_reason: Some("stop".into()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn cut_off(content: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(content.to_string()),
                finish_reason: Some("length".into()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: Err(()),
                finish_reason: None,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmProvider for FakeProvider {
        async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
            self.seen.lock().unwrap().extend(messages);
            match &self.reply {
                Ok(content) => Ok(LlmResponse {
                    content: content.clone(),
                    tokens_used: Some(42),
                    model: "fake".into(),
                    finish_reason: self.finish_reason.clone(),
                }),
                Err(()) => Err(LlmError::RateLimitExceeded),
            }
        }

        fn provider_name(&self) -> &str {
            "Fake"
        }
    }

    fn request(criteria: &str, count: u8, word_count: WordCount, style: &str) -> GenerateNamesRequest {
        GenerateNamesRequest {
            criteria: criteria.into(),
            count,
            word_count,
            name_style: style.into(),
        }
    }

    #[test]
    fn parses_json_array_and_object() {
        let names = parse_names(r#"["Aelar", "Lirael", "aelar"]"#, WordCount::Any, 10);
        assert_eq!(names, vec!["Aelar", "Lirael"]);

        let names = parse_names(r#"{"names": ["Kael", 3, "Vyr"]}"#, WordCount::Any, 10);
        assert_eq!(names, vec!["Kael", "Vyr"]);
    }

    #[test]
    fn parses_fenced_json() {
        let reply = "```json\n[\"Ignara\", \"Szarith\"]\n```";
        assert_eq!(parse_names(reply, WordCount::Any, 10), vec!["Ignara", "Szarith"]);
    }

    #[test]
    fn parses_numbered_lines() {
        let reply = "1. Thorin Oakshield\n2) Balgrim Ironfist\n- Durna\n\n* \"Helga Stone\"";
        let names = parse_names(reply, WordCount::Two, 10);
        assert_eq!(names, vec!["Thorin Oakshield", "Balgrim Ironfist", "Helga Stone"]);
    }

    #[test]
    fn truncates_to_count() {
        let names = parse_names(r#"["A","B","C","D"]"#, WordCount::One, 2);
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn prompt_mentions_constraints() {
        let messages = build_messages(&request("space pirates", 3, WordCount::Two, "Sci-Fi"));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        let prompt = &messages[1].content;
        assert!(prompt.contains("Generate 3 unique names for: space pirates."));
        assert!(prompt.contains("exactly 2 words"));
        assert!(prompt.contains("Sci-Fi style"));

        let plain = build_messages(&request("elves", 5, WordCount::Any, "any"));
        assert!(!plain[1].content.contains("style"));
    }

    #[test]
    fn truncated_json_keeps_complete_names() {
        let reply = r#"{"names": ["Aelar", "Lir\"ael", "Syl"#;
        assert_eq!(parse_names(reply, WordCount::Any, 10), vec!["Aelar", "Lir\"ael"]);
        assert_eq!(parse_names(r#"["Kael", "Vy"#, WordCount::Any, 10), vec!["Kael"]);
    }

    #[tokio::test]
    async fn execute_returns_parsed_names() {
        let provider = FakeProvider::replying(r#"["Aelar","Lirael","Sylvar"]"#);
        let executor = GenerateExecutor::new(provider.clone());
        let prepared = prepare(request("  elven rangers ", 2, WordCount::Any, "")).unwrap();
        let response = executor.execute(prepared).await.unwrap();
        assert_eq!(response.names, vec!["Aelar", "Lirael"]);
        let seen = provider.seen.lock().unwrap();
        assert!(seen[1].content.contains("elven rangers."));
    }

    #[tokio::test]
    async fn execute_survives_cut_off_reply() {
        let executor = GenerateExecutor::new(FakeProvider::cut_off(r#"["Ignara", "Szarith", "Vor"#));
        let prepared = prepare(request("dragons", 5, WordCount::Any, "")).unwrap();
        let response = executor.execute(prepared).await.unwrap();
        assert_eq!(response.names, vec!["Ignara", "Szarith"]);
    }

    #[test]
    fn prepare_rejects_blank_criteria() {
        let err = prepare(request("   ", 5, WordCount::Any, "any")).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidRequest(_)));
    }

    #[test]
    fn prepare_normalizes() {
        let prepared = prepare(request("  orcs ", 0, WordCount::Any, "any")).unwrap();
        assert_eq!(prepared.request().criteria, "orcs");
        assert_eq!(prepared.request().count, 1);
    }

    #[tokio::test]
    async fn execute_maps_provider_and_empty_errors() {
        let executor = GenerateExecutor::new(FakeProvider::failing());
        let prepared = prepare(request("orcs", 5, WordCount::Any, "")).unwrap();
        let err = executor.execute(prepared).await.unwrap_err();
        assert!(matches!(err, GenerateError::Provider(LlmError::RateLimitExceeded)));

        let executor = GenerateExecutor::new(FakeProvider::replying("   "));
        let prepared = prepare(request("orcs", 5, WordCount::Any, "")).unwrap();
        let err = executor.execute(prepared).await.unwrap_err();
        assert!(matches!(err, GenerateError::EmptyResult));
    }
}
