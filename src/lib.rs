pub mod form;
pub mod gui;
pub mod launcher;
pub mod logging;
pub mod note;
pub mod notice_log;
pub mod registry;
pub mod settings;
pub mod store;
pub mod suggest;
