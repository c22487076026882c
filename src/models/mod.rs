pub mod conference;
pub mod user;
pub mod auth;

pub use conference::{Conference, ConferenceDesign, ConferencePayload, OsMap, Speaker, Stakeholder};
pub use user::{AuthUser, User, UserRole};
pub use auth::{LoginRequest, LoginReply, SignupRequest, PromoteRequest};
