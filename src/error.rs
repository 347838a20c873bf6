use thiserror::Error;

#[derive(Error,Debug)]
pub enum BitArrayError {
    #[error("failed to transfer packed bit array bytes: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T,BitArrayError>;
