#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid store address: {0:?}")]
    InvalidAddress(String),
    #[error("connection is closed")]
    ConnectionClosed,
}
