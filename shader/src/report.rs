use std::fmt;
use std::path::PathBuf;

use crate::glslc::Invocation;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CompileStatus {
    Compiled,
    Failed {
        reason: Invocation,
        /// Whether an older `.spv` for this source was deleted afterwards.
        stale_removed: bool,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShaderOutcome {
    pub source: PathBuf,
    pub output: PathBuf,
    pub status: CompileStatus,
}

impl ShaderOutcome {
    pub fn is_compiled(&self) -> bool {
        self.status == CompileStatus::Compiled
    }
}

/// Per-file outcomes of one batch, in compile order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Report {
    pub outcomes: Vec<ShaderOutcome>,
}

impl Report {
    pub fn compiled(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_compiled()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.compiled()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ShaderOutcome> {
        self.outcomes.iter().filter(|o| !o.is_compiled())
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} shader(s): {} compiled, {} failed",
            self.outcomes.len(),
            self.compiled(),
            self.failed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, status: CompileStatus) -> ShaderOutcome {
        ShaderOutcome {
            source: PathBuf::from(name),
            output: PathBuf::from(format!("{}.spv", name)),
            status,
        }
    }

    #[test]
    fn counts_and_summary() {
        let report = Report {
            outcomes: vec![
                outcome("a.vert", CompileStatus::Compiled),
                outcome(
                    "b.frag",
                    CompileStatus::Failed {
                        reason: Invocation::Exited(Some(1)),
                        stale_removed: true,
                    },
                ),
                outcome("c.frag", CompileStatus::Compiled),
            ],
        };

        assert_eq!(report.compiled(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        assert_eq!(
            report.failures().map(|o| o.source.clone()).collect::<Vec<_>>(),
            vec![PathBuf::from("b.frag")]
        );
        assert_eq!(report.to_string(), "3 shader(s): 2 compiled, 1 failed");
    }

    #[test]
    fn empty_report_is_a_success() {
        let report = Report::default();
        assert!(report.is_success());
        assert_eq!(report.to_string(), "0 shader(s): 0 compiled, 0 failed");
    }
}
