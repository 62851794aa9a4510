use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::editor::TextBuffer;

/// The document being edited: the text buffer plus its file association.
///
/// Replaced wholesale when a file is opened. The dirty flag lives in the
/// buffer; everything the UI needs (save enabled, modified marker, title)
/// is derived from here rather than tracked separately.
#[derive(Debug, Default)]
pub struct Document {
    /// The file backing this document, if any.
    pub path: Option<PathBuf>,
    /// The text buffer, carrying cursor and dirty flag.
    pub buffer: TextBuffer,
}

impl Document {
    /// An empty, untitled, clean document.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A clean document holding the contents of `path`.
    pub fn from_file(path: PathBuf, text: &str) -> Self {
        Self {
            path: Some(path),
            buffer: TextBuffer::from_text(text),
        }
    }

    /// Whether the buffer differs from the last loaded or saved content.
    pub fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// Whether a plain save would actually write: unsaved changes exist
    /// and a destination is known.
    pub fn can_save(&self) -> bool {
        self.is_dirty() && self.path.is_some()
    }

    /// The file name to display, or "untitled" for a path-less document.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(|| "untitled".to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// What a modal path prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    OpenFile,
    OpenFolder,
    SaveAs,
}

impl PromptKind {
    /// The label rendered before the input.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenFile => "Open file: ",
            Self::OpenFolder => "Open folder: ",
            Self::SaveAs => "Save as: ",
        }
    }
}

/// A modal path prompt standing in for a native picker dialog.
///
/// Resolves to a path on Enter or a cancellation on Esc; while present,
/// all key input routes here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub const fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }
}

/// A transient status-line message.
#[derive(Debug, Clone)]
struct Notice {
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// The document being edited.
    pub document: Document,
    /// Whether the directory sidebar is visible.
    pub sidebar_visible: bool,
    /// Directory whose entries the sidebar shows.
    pub sidebar_dir: Option<PathBuf>,
    /// Entry names of the listed directory, in enumeration order.
    pub sidebar_entries: Vec<String>,
    /// Selected sidebar entry index.
    pub sidebar_selected: Option<usize>,
    /// Scroll offset of the sidebar listing.
    pub sidebar_scroll: usize,
    /// Focus: true = sidebar, false = editor.
    pub sidebar_focused: bool,
    /// Active modal path prompt, if any.
    pub prompt: Option<Prompt>,
    notice: Option<Notice>,
    /// First visible buffer line in the editor pane.
    pub scroll_offset: usize,
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Set after a quit attempt with unsaved changes; a second quit proceeds.
    pub quit_confirmed: bool,
}

impl Model {
    /// Create a new model with an empty document.
    pub fn new(terminal_size: (u16, u16)) -> Self {
        Self {
            document: Document::empty(),
            sidebar_visible: false,
            sidebar_dir: None,
            sidebar_entries: Vec::new(),
            sidebar_selected: None,
            sidebar_scroll: 0,
            sidebar_focused: false,
            prompt: None,
            notice: None,
            scroll_offset: 0,
            width: terminal_size.0,
            height: terminal_size.1,
            help_visible: false,
            should_quit: false,
            quit_confirmed: false,
        }
    }

    /// Replace the document with the contents of an opened file.
    ///
    /// The sidebar is untouched; the editor scrolls back to the top.
    pub fn open_document(&mut self, path: PathBuf, text: &str) {
        self.document = Document::from_file(path, text);
        self.scroll_offset = 0;
    }

    /// Show a fresh directory listing in the sidebar.
    ///
    /// Does not alter the document.
    pub fn show_listing(&mut self, dir: PathBuf, entries: Vec<String>) {
        self.sidebar_selected = if entries.is_empty() { None } else { Some(0) };
        self.sidebar_dir = Some(dir);
        self.sidebar_entries = entries;
        self.sidebar_scroll = 0;
        self.sidebar_visible = true;
        self.sidebar_focused = true;
    }

    /// Rows of the frame taken by footer bars this frame.
    pub fn footer_rows(&self) -> u16 {
        1 + u16::from(self.prompt.is_some()) + u16::from(self.notice.is_some())
    }

    /// Rows available to the editor pane.
    pub fn editor_rows(&self) -> usize {
        usize::from(self.height.saturating_sub(self.footer_rows()))
    }

    /// Rows available inside the sidebar border.
    pub fn sidebar_rows(&self) -> usize {
        usize::from(self.height.saturating_sub(self.footer_rows()))
            .saturating_sub(2)
    }

    pub(super) fn max_sidebar_scroll(&self) -> usize {
        self.sidebar_entries.len().saturating_sub(self.sidebar_rows())
    }

    pub(super) fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    /// Drop the notice once it has outlived its display window.
    /// Returns true when a repaint is needed.
    pub fn expire_notice(&mut self, now: Instant) -> bool {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.expires_at <= now)
        {
            self.notice = None;
            return true;
        }
        false
    }

    pub fn active_notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|notice| notice.message.as_str())
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("document", &self.document)
            .field("sidebar_visible", &self.sidebar_visible)
            .field("sidebar_dir", &self.sidebar_dir)
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new((80, 24))
    }
}
