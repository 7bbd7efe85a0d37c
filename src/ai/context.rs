use std::env;
use std::fmt;
use std::path::Path;

/// 모델에게 넘길 셸 실행 환경 (--context 미지정시 사용)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellContext {
    pub cwd: String,
    pub shell: String,
    pub os: &'static str,
    pub arch: &'static str,
}

impl ShellContext {
    /// 현재 프로세스 환경에서 수집
    pub fn detect() -> Self {
        let cwd = env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        Self::from_parts(cwd, |key| env::var(key).ok())
    }

    /// 환경 변수 조회를 주입받아 구성 (SHELL 경로는 이름만 사용)
    pub fn from_parts<F>(cwd: String, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let shell = lookup("SHELL")
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                Path::new(&s)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or(s)
            })
            .unwrap_or_else(|| "sh".to_string());

        Self {
            cwd,
            shell,
            os: env::consts::OS,
            arch: env::consts::ARCH,
        }
    }
}

impl fmt::Display for ShellContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current directory: {}\nShell: {}\nOS: {} ({})",
            self.cwd, self.shell, self.os, self.arch
        )
    }
}
