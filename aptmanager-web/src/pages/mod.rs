mod error;
mod feature;
mod landing;
pub mod login;
pub mod register;

pub use error::ErrorPage;
pub use feature::FeaturePage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use register::RegisterPage;
