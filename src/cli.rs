use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "askcmd")]
#[command(version)]
#[command(about = "Translate natural language into a shell command", long_about = None)]
pub struct Cli {
    /// 자연어 프롬프트
    #[arg(required = true)]
    pub prompt: Vec<String>,

    /// AI 제공자 선택 (openai, gemini). 미지정시 AI_PROVIDER 또는 설정 파일 사용
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// 모델 이름 (선택된 provider에 적용)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// 시스템 컨텍스트. 미지정시 현재 디렉토리/셸/OS 정보를 자동 수집
    #[arg(short = 'c', long)]
    pub context: Option<String>,

    /// 디버그 로그 출력 (stderr)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// 요청 본문만 출력하고 전송하지 않음
    #[arg(long)]
    pub show_payload: bool,
}

impl Cli {
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }
}
