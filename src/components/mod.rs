pub mod campaign_reports;
pub mod dashboard;
pub mod date_range_picker;
pub mod design_system;
pub mod ivr_dashboard;
pub mod layout;
pub mod login;
pub mod sms_dashboard;
pub mod whatsapp_dashboard;
