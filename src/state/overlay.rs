//! Project entries and the detail overlay that presents them.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

pub const DEFAULT_TITLE: &str = "Detail";
pub const DEFAULT_TECH: &str = "-";

/// Markup inside the overlay `<dialog>`. The inner form carries its own
/// padding so only clicks outside it land on the dialog element, which is
/// what counts as a backdrop click.
pub const OVERLAY_HTML: &str = r#"<form method="dialog" class="modal-body" style="margin:0; padding:24px">
  <div class="modal-header">
    <h3 id="modalTitle">Detail</h3>
    <button type="button" class="modal-close" aria-label="Tutup">&times;</button>
  </div>
  <p id="modalDesc"></p>
  <p><b>Teknologi:</b> <span id="modalTech"></span></p>
  <div class="modal-actions">
    <button class="btn" value="cancel">Tutup</button>
  </div>
</form>"#;

/// A project card as described by its `data-*` attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tech: String,
    pub category: String,
}

impl ProjectEntry {
    /// Build an entry from raw attribute values, substituting the overlay
    /// placeholders for missing or empty ones.
    pub fn from_attributes(
        title: Option<String>,
        description: Option<String>,
        tech: Option<String>,
        category: Option<String>,
    ) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
        Self {
            title: non_empty(title).unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            description: description.unwrap_or_default(),
            tech: non_empty(tech).unwrap_or_else(|| DEFAULT_TECH.to_owned()),
            category: category.unwrap_or_default(),
        }
    }
}

/// Keys on a focused project card that open its details.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    shown: Option<ProjectEntry>,
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    pub fn shown(&self) -> Option<&ProjectEntry> {
        self.shown.as_ref()
    }

    /// Show `entry`, replacing whatever was shown before.
    pub fn open(&mut self, entry: ProjectEntry) {
        self.shown = Some(entry);
    }

    /// Returns `false` when the overlay was already closed.
    pub fn close(&mut self) -> bool {
        self.shown.take().is_some()
    }
}
