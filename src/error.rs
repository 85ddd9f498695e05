use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("invalid host mapping '{0}', expected ID=NAME")]
    InvalidHostMapping(String),

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("unknown job state '{0}'")]
    UnknownState(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("job event loop is no longer running")]
    EventLoopGone,

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
