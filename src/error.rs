#[derive(Debug, thiserror::Error, PartialEq)]
pub(crate) enum Error {
  #[error("invalid argument: {message}")]
  InvalidArgument { message: String },
}

impl Error {
  pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
    Self::InvalidArgument {
      message: message.into(),
    }
  }
}
