pub mod chat;
pub mod client;
pub mod image;
pub mod types;

pub use chat::OpenAiChatClient;
pub use client::OpenAiHttpClient;
pub use image::OpenAiImageClient;

#[cfg(test)]
pub(crate) mod test_support {
    use wiremock::matchers::{method, path};
    use wiremock::MockBuilder;

    pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
    pub const IMAGE_GENERATIONS_PATH: &str = "/v1/images/generations";

    pub fn post(route: &str) -> MockBuilder {
        wiremock::Mock::given(method("POST")).and(path(route))
    }
}
