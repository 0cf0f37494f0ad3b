pub mod app;
pub mod error_banner;
pub mod login_screen;
pub mod otp_screen;
pub mod profile_screen;
pub mod reports_screen;
pub mod reset_password_screen;
pub mod reviews_screen;

pub use app::App;
pub use error_banner::ErrorBanner;
pub use login_screen::LoginScreen;
pub use otp_screen::OtpScreen;
pub use profile_screen::ProfileScreen;
pub use reports_screen::ReportsScreen;
pub use reset_password_screen::ResetPasswordScreen;
pub use reviews_screen::ReviewsScreen;
