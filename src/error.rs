use thiserror::Error;

pub type Result<T> = std::result::Result<T, SynthError>;

#[derive(Error, Debug)]
pub enum SynthError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Calendar fetch error: {0}")]
    Calendar(String),
    #[error("Calendar request failed with status {status}: {message}")]
    CalendarStatus { status: u16, message: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Git open error: {0}")]
    Open(#[from] Box<gix::open::Error>),
    #[error("Git init error: {0}")]
    Init(#[from] Box<gix::init::Error>),
    #[error("Object write error: {0}")]
    ObjectWrite(#[from] Box<gix::object::write::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Repository commit error: {0}")]
    RepoCommit(#[from] Box<gix::commit::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for SynthError {
    fn from(err: gix::open::Error) -> Self {
        SynthError::Open(Box::new(err))
    }
}

impl From<gix::init::Error> for SynthError {
    fn from(err: gix::init::Error) -> Self {
        SynthError::Init(Box::new(err))
    }
}

impl From<gix::object::write::Error> for SynthError {
    fn from(err: gix::object::write::Error) -> Self {
        SynthError::ObjectWrite(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for SynthError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        SynthError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for SynthError {
    fn from(err: gix::objs::decode::Error) -> Self {
        SynthError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for SynthError {
    fn from(err: gix::object::commit::Error) -> Self {
        SynthError::Commit(Box::new(err))
    }
}

impl From<gix::commit::Error> for SynthError {
    fn from(err: gix::commit::Error) -> Self {
        SynthError::RepoCommit(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for SynthError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        SynthError::RefFind(Box::new(err))
    }
}
