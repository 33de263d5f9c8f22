mod format_tag;
mod request;
mod template;

pub use format_tag::{FormatTag, FormatTagError};
pub use request::{DownloadRequest, RequestError};
pub use template::OutputTemplate;
