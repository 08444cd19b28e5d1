use wasm_bindgen::JsValue;

/// Failures of the browser calls the site makes. None of these reach the
/// user; components log them and carry on with static rendering.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no browser window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("intersection observer unavailable: {0}")]
    Observer(String),

    #[error("failed to open link: {0}")]
    Popup(String),
}

impl SiteError {
    pub(crate) fn observer(err: JsValue) -> Self {
        Self::Observer(format!("{:?}", err))
    }

    pub(crate) fn popup(err: JsValue) -> Self {
        Self::Popup(format!("{:?}", err))
    }
}

pub type SiteResult<T> = Result<T, SiteError>;

pub(crate) fn current_document() -> SiteResult<web_sys::Document> {
    web_sys::window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)
}
