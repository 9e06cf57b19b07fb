pub mod token;
pub mod user;

pub use token::SessionToken;
pub use user::UserProfile;
