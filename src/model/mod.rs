/// Request envelope for the JSON Action wire format
pub mod requests;
/// Response models and server error-field extraction
pub mod responses;
