//! Core module containing the bill model, store and session contracts

pub mod bill;
pub mod error;
pub mod session;
pub mod store;

pub use bill::{Bill, BillStatus, format_date, sort_by_date_desc};
pub use error::{BilledError, DomError, NavigationError, SessionError, StoreError, WaitError};
pub use session::{SessionStorage, SessionUser, USER_KEY, UserType};
pub use store::{BillsResource, Store};
