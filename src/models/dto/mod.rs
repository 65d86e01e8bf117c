pub mod quran_api;
pub mod request;
pub mod response;
