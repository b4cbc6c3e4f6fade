mod bundle;
mod format;
mod render;

pub use bundle::{DEFAULT_LANG, I18nBundle, apply_document_lang, current_lang};
pub use format::fmt_count;
pub use render::{t, tr};
