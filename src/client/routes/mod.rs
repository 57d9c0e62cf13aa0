pub mod driver_page;
