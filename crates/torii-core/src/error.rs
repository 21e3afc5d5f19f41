use thiserror::Error;

use torii_api::anilist::AniListError;
use torii_api::jikan::JikanError;

/// Core error taxonomy.
///
/// `Transport`, `NotFound` and `MalformedResponse` classify provider
/// failures for the presentation layer; `Config` and `Io` are local.
/// Cascade-internal failures never reach this type — they are logged and
/// swallowed where they occur.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<JikanError> for CoreError {
    fn from(e: JikanError) -> Self {
        match e {
            JikanError::Http(e) => CoreError::Transport(e.to_string()),
            JikanError::Api { status: 404, .. } => {
                CoreError::NotFound("resource missing upstream (status 404)".into())
            }
            JikanError::Api { status, message } => {
                CoreError::Transport(format!("status {status}: {message}"))
            }
            JikanError::Parse(msg) => CoreError::MalformedResponse(msg),
        }
    }
}

impl From<AniListError> for CoreError {
    fn from(e: AniListError) -> Self {
        match e {
            AniListError::Http(e) => CoreError::Transport(e.to_string()),
            AniListError::Api { status, message } => {
                CoreError::Transport(format!("status {status}: {message}"))
            }
            AniListError::Parse(msg) => CoreError::MalformedResponse(msg),
            AniListError::NotFound(title) => CoreError::NotFound(title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jikan_404_maps_to_not_found() {
        let err: CoreError = JikanError::Api {
            status: 404,
            message: "{}".into(),
        }
        .into();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn jikan_parse_maps_to_malformed_response() {
        let err: CoreError = JikanError::Parse("bad shape".into()).into();
        assert!(matches!(err, CoreError::MalformedResponse(_)));
    }

    #[test]
    fn anilist_not_found_keeps_the_title() {
        let err: CoreError = AniListError::NotFound("Some Show".into()).into();
        match err {
            CoreError::NotFound(title) => assert_eq!(title, "Some Show"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
