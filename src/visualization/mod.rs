pub mod orbit_view;
pub mod plain_view;
