pub mod login_notifier;
pub mod session_table;

pub use login_notifier::{
    DeliveryOutcome, ExplicitMessage, LoginNotifier, LoginRequest, NotifyReceipt,
};
pub use session_table::{SessionRow, SessionTableService};
