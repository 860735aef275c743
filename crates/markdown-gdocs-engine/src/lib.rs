pub mod convert;
pub mod error;
pub mod front_matter;
pub mod model;
pub mod requests;
pub mod text;
pub mod token;

// Re-export key types for easier usage
pub use convert::{convert, convert_tokens};
pub use error::ConvertError;
pub use model::*;
pub use requests::{
    BatchUpdate, DocumentPlan, Request, RequestGenerator, StyleSheet, generate_requests,
};

/// Converts markdown and generates its requests in one step.
pub fn plan(markdown: &str, styles: &StyleSheet) -> Result<DocumentPlan, ConvertError> {
    let result = convert(markdown)?;
    DocumentPlan::new(&result, &RequestGenerator::new(styles.clone()))
}
