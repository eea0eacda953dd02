pub mod activity_list;
pub mod board;
pub mod confirm_dialog;
pub mod notice;
pub mod signup_form;
