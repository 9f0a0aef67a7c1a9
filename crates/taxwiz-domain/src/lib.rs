// taxwiz-domain library entry point
pub mod booking;
pub mod credentials;
pub mod error;
pub mod investment;
pub mod money;
pub use booking::{estimated_cost, is_plausible_email, parse_preferred_date, AgentType, ConsultationType, ServiceType, TIME_SLOTS};
pub use credentials::{validate_login, validate_security_question, Pin, UserId, SECURITY_QUESTIONS};
pub use error::DomainError;
pub use investment::{FilingStatus, InvestmentAdvice, InvestmentStrategy, Resource};
pub use money::format_usd;
