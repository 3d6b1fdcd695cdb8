use crate::domain::{
    error::DomainError, naming::NameVariants, request::ScaffoldRequest, scaffold::FeatureScaffold,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across call-sites.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &ScaffoldRequest) -> Result<NameVariants, DomainError> {
        request.validate()
    }

    pub fn validate_scaffold(scaffold: &FeatureScaffold) -> Result<(), DomainError> {
        scaffold.validate()
    }
}
