mod document;
mod entry;
mod section;

pub use document::Document;
pub use entry::Entry;
pub use section::Section;
