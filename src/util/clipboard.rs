//! Clipboard writes through the strategy picked at startup.

use thiserror::Error;

#[cfg(feature = "hydrate")]
use crate::util::capability::ClipboardStrategy;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard API rejected the write: {0}")]
    Rejected(String),
    #[error("execCommand(\"copy\") reported failure")]
    CommandFailed,
    #[error("document unavailable for clipboard fallback")]
    NoDocument,
}

/// Copy `text` to the clipboard.
#[cfg(feature = "hydrate")]
pub async fn copy_text(strategy: ClipboardStrategy, text: &str) -> Result<(), ClipboardError> {
    match strategy {
        ClipboardStrategy::AsyncApi => copy_with_api(text).await,
        ClipboardStrategy::ExecCommand => copy_with_textarea(text),
    }
}

#[cfg(feature = "hydrate")]
async fn copy_with_api(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoDocument)?;
    let Some(clipboard) = window.navigator().clipboard() else {
        return copy_with_textarea(text);
    };
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
}

#[cfg(feature = "hydrate")]
fn copy_with_textarea(text: &str) -> Result<(), ClipboardError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ClipboardError::NoDocument)?;
    let body = document.body().ok_or(ClipboardError::NoDocument)?;
    let textarea = document
        .create_element("textarea")
        .map_err(|_| ClipboardError::NoDocument)?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .map_err(|_| ClipboardError::NoDocument)?;
    textarea.set_value(text);
    let style = textarea.style();
    for (name, value) in [("position", "fixed"), ("left", "-999999px"), ("top", "-999999px")] {
        if let Err(e) = style.set_property(name, value) {
            log::debug!("clipboard textarea style {name}: {e:?}");
        }
    }
    body.append_child(&textarea).map_err(|_| ClipboardError::NoDocument)?;
    if let Err(e) = textarea.focus() {
        log::debug!("clipboard textarea focus: {e:?}");
    }
    textarea.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .is_some_and(|doc| doc.exec_command("copy").unwrap_or(false));
    textarea.remove();

    if copied { Ok(()) } else { Err(ClipboardError::CommandFailed) }
}
