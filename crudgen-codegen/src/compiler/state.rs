use std::fmt;

/// Where a single compilation currently is.
///
/// Every compilation walks `Idle` through `Done`, or stops in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerState {
    Idle,
    Validating,
    Resolving,
    Generating,
    Materializing,
    Done,
    Failed,
}

impl CompilerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CompilerState::Done | CompilerState::Failed)
    }
}

impl fmt::Display for CompilerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompilerState::Idle => "idle",
            CompilerState::Validating => "validating",
            CompilerState::Resolving => "resolving",
            CompilerState::Generating => "generating",
            CompilerState::Materializing => "materializing",
            CompilerState::Done => "done",
            CompilerState::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}
