pub mod auth_redirect;
