/// 모든 provider가 공유하는 고정 지시문
pub const SYSTEM_INSTRUCTION: &str =
    "You are a shell command generator. Output only the exact shell command, no markdown, no extra text.";

/// AI provider용 프롬프트 템플릿 생성기
///
/// provider마다 메시지 구조는 다르지만 지시문과 컨텍스트 배치는 여기서 한 번만 정의합니다.
pub struct PromptTemplate;

impl PromptTemplate {
    /// 시스템 메시지 (지시문 + 실행 환경 컨텍스트)
    ///
    /// # Examples
    /// ```
    /// use askcmd::ai::prompt_template::PromptTemplate;
    ///
    /// let system = PromptTemplate::system_prompt("Shell: zsh");
    /// assert!(system.contains("Shell: zsh"));
    /// ```
    pub fn system_prompt(context: &str) -> String {
        if context.trim().is_empty() {
            return SYSTEM_INSTRUCTION.to_string();
        }

        format!("{}\n\nSystem context:\n{}", SYSTEM_INSTRUCTION, context)
    }

    /// 시스템 역할이 없는 단일 턴 API용 (지시문 + 컨텍스트 + 요청)
    pub fn single_turn_prompt(prompt: &str, context: &str) -> String {
        format!("{}\n\nRequest: {}", Self::system_prompt(context), prompt)
    }
}
