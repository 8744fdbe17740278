//! Side-effect services: payments, invoices, notifications

pub mod invoice;
pub mod notification;
pub mod payment;

pub use invoice::InvoiceService;
pub use notification::{Notifier, NullNotifier, WebhookNotifier};
pub use payment::{LogGateway, PaymentGateway, PaymentService};
