pub mod courier_table;
pub mod driver_form;
pub mod notice;
pub mod organization_form;
pub mod page;

pub use courier_table::CourierTable;
pub use driver_form::DriverForm;
pub use notice::Notice;
pub use organization_form::OrganizationForm;
pub use page::Page;
