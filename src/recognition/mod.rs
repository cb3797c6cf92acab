/// Image intake: validation, displayable conversion, and mock product
/// recognition.
pub mod domain;
pub mod services;
