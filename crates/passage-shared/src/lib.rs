//! # passage-shared
//!
//! Types shared by the Passage storage engine and HTTP server:
//! - **Record schemas**: the insertable subset of every persisted entity,
//!   with a declarative field table used to validate inbound JSON
//! - **Response envelope**: the `{success, data|error}` wrapper every API
//!   response uses
//! - **Constants**: status defaults and limits

pub mod constants;
pub mod error;
pub mod protocol;
pub mod schema;

pub use error::{FieldIssue, ValidationError};
pub use protocol::ApiResponse;
pub use schema::{
    validate, FieldKind, FieldSpec, InsertConsultation, InsertContact,
    InsertContribution, InsertFundraisingCampaign, InsertSchema, InsertUser,
};
