pub mod groups;
pub mod leases;
pub mod profiles;
pub mod users;
