mod oauth;
pub use oauth::OAuth;

mod upload;
pub use upload::Upload;
